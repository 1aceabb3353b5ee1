//! Patient generation with contact points.

use fake::{
    Fake,
    faker::{company::en::CompanyName, name::en::Name, phone_number::en::PhoneNumber},
};
use rand::Rng;
use records::models::{ContactPoint, ContactSystem, ContactUse, Gender, Patient, UsState};
use time::{Duration, OffsetDateTime};

use super::{past_within, pick};

/// Every generated patient has exactly this many contact points.
pub const CONTACTS_PER_PATIENT: usize = 2;

/// Generates a single contact point.
pub fn generate_contact_point(rng: &mut impl Rng) -> ContactPoint {
    ContactPoint {
        system: pick(ContactSystem::ALL, rng),
        value: PhoneNumber().fake_with_rng(rng),
        contact_use: pick(ContactUse::ALL, rng),
    }
}

/// Generates a patient modified within the week before `now`.
pub fn generate_patient(rng: &mut impl Rng, now: OffsetDateTime) -> Patient {
    let name: String = Name().fake_with_rng(rng);
    let gender = pick(Gender::ALL, rng);
    let primary_care_provider: String = CompanyName().fake_with_rng(rng);
    let state = pick(UsState::ALL, rng);
    let modified_date = past_within(now, Duration::days(7), rng);
    let contacts = (0..CONTACTS_PER_PATIENT)
        .map(|_| generate_contact_point(rng))
        .collect();

    Patient {
        id: None,
        name,
        gender,
        primary_care_provider,
        state,
        modified_date,
        contacts,
    }
}

/// Generates multiple patients.
pub fn generate_patients(count: usize, rng: &mut impl Rng, now: OffsetDateTime) -> Vec<Patient> {
    (0..count).map(|_| generate_patient(rng, now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_patient() {
        let mut rng = StdRng::seed_from_u64(12345);
        let now = OffsetDateTime::now_utc();
        let patient = generate_patient(&mut rng, now);

        assert!(patient.id.is_none());
        assert!(!patient.name.is_empty());
        assert!(!patient.primary_care_provider.is_empty());
        assert_eq!(patient.contacts.len(), CONTACTS_PER_PATIENT);
        assert!(patient.contacts.iter().all(|c| !c.value.is_empty()));
        assert!(patient.modified_date <= now);
        assert!(patient.modified_date >= now - Duration::days(7));
    }

    #[test]
    fn test_generate_batch_is_reproducible() {
        let now = OffsetDateTime::now_utc();
        let first = generate_patients(25, &mut StdRng::seed_from_u64(8675309), now);
        let second = generate_patients(25, &mut StdRng::seed_from_u64(8675309), now);

        assert_eq!(first.len(), 25);
        assert_eq!(first, second);
    }

    #[test]
    fn test_genders_cover_domain() {
        let mut rng = StdRng::seed_from_u64(12345);
        let patients = generate_patients(100, &mut rng, OffsetDateTime::now_utc());

        assert!(patients.iter().any(|p| p.gender == Gender::Male));
        assert!(patients.iter().any(|p| p.gender == Gender::Female));
    }
}

//! Organization generation with addresses.

use fake::{
    Fake,
    faker::{
        address::en::{BuildingNumber, CityName, StreetName},
        company::en::CompanyName,
    },
};
use rand::Rng;
use records::models::{Address, Organization, OrganizationType, UsState};
use time::{Duration, OffsetDateTime};

use super::{past_within, pick};

/// Every generated organization has exactly this many addresses.
pub const ADDRESSES_PER_ORGANIZATION: usize = 3;

/// Generates a single street address.
pub fn generate_address(rng: &mut impl Rng) -> Address {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street_name: String = StreetName().fake_with_rng(rng);
    let city: String = CityName().fake_with_rng(rng);

    Address {
        street: format!("{number} {street_name}"),
        city,
        state: pick(UsState::ALL, rng),
    }
}

/// Generates an organization modified within the week before `now`.
pub fn generate_organization(rng: &mut impl Rng, now: OffsetDateTime) -> Organization {
    let name: String = CompanyName().fake_with_rng(rng);
    let organization_type = pick(OrganizationType::ALL, rng);
    let is_active = rng.gen_bool(0.5);
    let modified_date = past_within(now, Duration::days(7), rng);
    let addresses = (0..ADDRESSES_PER_ORGANIZATION)
        .map(|_| generate_address(rng))
        .collect();

    Organization {
        id: None,
        name,
        organization_type,
        is_active,
        modified_date,
        addresses,
    }
}

/// Generates multiple organizations.
pub fn generate_organizations(
    count: usize,
    rng: &mut impl Rng,
    now: OffsetDateTime,
) -> Vec<Organization> {
    (0..count).map(|_| generate_organization(rng, now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_organization() {
        let mut rng = StdRng::seed_from_u64(12345);
        let organization = generate_organization(&mut rng, OffsetDateTime::now_utc());

        assert!(!organization.name.is_empty());
        assert_eq!(organization.addresses.len(), ADDRESSES_PER_ORGANIZATION);

        for address in &organization.addresses {
            assert!(address.street.contains(' '));
            assert!(!address.city.is_empty());
        }
    }

    #[test]
    fn test_activity_flag_varies() {
        let mut rng = StdRng::seed_from_u64(12345);
        let organizations = generate_organizations(50, &mut rng, OffsetDateTime::now_utc());

        assert_eq!(organizations.len(), 50);
        assert!(organizations.iter().any(|o| o.is_active));
        assert!(organizations.iter().any(|o| !o.is_active));
    }
}

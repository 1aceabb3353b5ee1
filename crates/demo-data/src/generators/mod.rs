//! Record generators for demo data.
//!
//! Every generator is a pure function of the random source and a reference
//! time, so a seeded RNG and a fixed `now` always produce the same records:
//! - [`patient`]: patients with contact points
//! - [`organization`]: organizations with addresses
//! - [`claim`]: claims with line items
//! - [`upload`]: file uploads with placeholder content
//! - [`user`]: application users plus the fixed demo logins

pub mod claim;
pub mod organization;
pub mod patient;
pub mod upload;
pub mod user;

pub use claim::{LINE_ITEMS_PER_CLAIM, generate_claim, generate_claims, generate_line_item};
pub use organization::{
    ADDRESSES_PER_ORGANIZATION, generate_address, generate_organization, generate_organizations,
};
pub use patient::{
    CONTACTS_PER_PATIENT, generate_contact_point, generate_patient, generate_patients,
};
pub use upload::{generate_upload, generate_uploads, placeholder_file_content};
pub use user::{fixed_users, generate_user, generate_users};

use rand::Rng;
use time::{Duration, OffsetDateTime};

/// Picks one option uniformly at random.
pub(crate) fn pick<T: Copy>(options: &[T], rng: &mut impl Rng) -> T {
    options[rng.gen_range(0..options.len())]
}

/// A time within `window` before `now`.
pub(crate) fn past_within(
    now: OffsetDateTime,
    window: Duration,
    rng: &mut impl Rng,
) -> OffsetDateTime {
    now - Duration::seconds(rng.gen_range(0..=window.whole_seconds()))
}

/// A time within `window` after `now`.
pub(crate) fn future_within(
    now: OffsetDateTime,
    window: Duration,
    rng: &mut impl Rng,
) -> OffsetDateTime {
    now + Duration::seconds(rng.gen_range(1..=window.whole_seconds()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_time_windows() {
        let mut rng = StdRng::seed_from_u64(12345);
        let now = OffsetDateTime::now_utc();
        let window = Duration::days(7);

        for _ in 0..100 {
            let past = past_within(now, window, &mut rng);
            assert!(past <= now && past >= now - window);

            let future = future_within(now, window, &mut rng);
            assert!(future > now && future <= now + window);
        }
    }

    #[test]
    fn test_pick_covers_options() {
        let mut rng = StdRng::seed_from_u64(12345);
        let options = ["a", "b", "c"];
        let picked: std::collections::HashSet<_> =
            (0..200).map(|_| pick(&options, &mut rng)).collect();
        assert_eq!(picked.len(), options.len());
    }
}

//! Claim generation with billed line items.

use fake::{
    Fake,
    faker::{company::en::CompanyName, name::en::Name},
};
use rand::Rng;
use records::models::{Claim, ClaimStatus, ClaimType, LineItem, ServiceType};
use rust_decimal::Decimal;
use time::{Duration, OffsetDateTime};

use super::{past_within, pick};

/// Every generated claim has exactly this many line items.
pub const LINE_ITEMS_PER_CLAIM: usize = 2;

/// Line item amounts are drawn in whole cents from this range (50.00 to 1000.00).
const MIN_AMOUNT_CENTS: i64 = 5_000;
const MAX_AMOUNT_CENTS: i64 = 100_000;

/// Generates a single line item with a two-decimal amount.
pub fn generate_line_item(rng: &mut impl Rng) -> LineItem {
    let service = pick(ServiceType::ALL, rng);
    let cents = rng.gen_range(MIN_AMOUNT_CENTS..=MAX_AMOUNT_CENTS);

    LineItem {
        service,
        amount: Decimal::new(cents, 2),
    }
}

/// Generates a claim modified within the week before `now`.
///
/// Patient and organization names are drawn independently and do not refer
/// to seeded patients or organizations.
pub fn generate_claim(rng: &mut impl Rng, now: OffsetDateTime) -> Claim {
    let patient_name: String = Name().fake_with_rng(rng);
    let organization_name: String = CompanyName().fake_with_rng(rng);
    let status = pick(ClaimStatus::ALL, rng);
    let claim_type = pick(ClaimType::ALL, rng);
    let modified_date = past_within(now, Duration::days(7), rng);
    let line_items = (0..LINE_ITEMS_PER_CLAIM)
        .map(|_| generate_line_item(rng))
        .collect();

    Claim {
        id: None,
        patient_name,
        organization_name,
        status,
        claim_type,
        modified_date,
        line_items,
    }
}

/// Generates multiple claims.
pub fn generate_claims(count: usize, rng: &mut impl Rng, now: OffsetDateTime) -> Vec<Claim> {
    (0..count).map(|_| generate_claim(rng, now)).collect()
}

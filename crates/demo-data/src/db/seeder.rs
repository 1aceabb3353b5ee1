//! Database seeding utilities.

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use records::models::{Claim, Organization, Patient, Upload, User};
use records::{PgStore, Record, RecordStore, StoreError};
use sqlx::PgPool;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::info;

use crate::config::SeedConfig;
use crate::generators::{
    fixed_users, generate_claims, generate_organizations, generate_patients, generate_uploads,
    generate_users,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Invalid seed configuration: {0}")]
    Config(String),
}

/// What happened to one collection during a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The collection was empty and received this many records.
    Seeded { inserted: u64 },
    /// The collection already held records and was left alone.
    Skipped { existing: i64 },
}

impl SeedOutcome {
    /// Records written by this run.
    pub fn inserted(&self) -> u64 {
        match self {
            SeedOutcome::Seeded { inserted } => *inserted,
            SeedOutcome::Skipped { .. } => 0,
        }
    }
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedOutcome::Seeded { inserted } => write!(f, "seeded {inserted}"),
            SeedOutcome::Skipped { existing } => write!(f, "skipped ({existing} existing)"),
        }
    }
}

/// Per-collection results of a seeding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub patients: SeedOutcome,
    pub organizations: SeedOutcome,
    pub claims: SeedOutcome,
    pub uploads: SeedOutcome,
    pub users: SeedOutcome,
}

impl SeedReport {
    /// Total records written across all collections.
    pub fn total_inserted(&self) -> u64 {
        [
            self.patients,
            self.organizations,
            self.claims,
            self.uploads,
            self.users,
        ]
        .iter()
        .map(SeedOutcome::inserted)
        .sum()
    }
}

/// Fills empty collections with generated demo records.
///
/// Collections are visited in a fixed order (patients, organizations, claims,
/// uploads, users) and share one random generator seeded from the config, so
/// a run against the same empty stores is reproducible for a given `now`.
/// Non-empty collections are skipped and draw nothing from the generator.
pub struct Seeder {
    config: SeedConfig,
}

impl Default for Seeder {
    fn default() -> Self {
        Self::new()
    }
}

impl Seeder {
    /// Creates a seeder with the default quantities and RNG seed.
    pub fn new() -> Self {
        Self {
            config: SeedConfig::default(),
        }
    }

    /// Creates a seeder with custom configuration.
    pub fn with_config(config: SeedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Seeds every empty store, timestamping records relative to the current time.
    pub async fn seed<P, O, C, U, S>(
        &self,
        patients: &mut P,
        organizations: &mut O,
        claims: &mut C,
        uploads: &mut U,
        users: &mut S,
    ) -> Result<SeedReport, SeedError>
    where
        P: RecordStore<Patient>,
        O: RecordStore<Organization>,
        C: RecordStore<Claim>,
        U: RecordStore<Upload>,
        S: RecordStore<User>,
    {
        self.seed_at(
            patients,
            organizations,
            claims,
            uploads,
            users,
            OffsetDateTime::now_utc(),
        )
        .await
    }

    /// Seeds every empty store, timestamping records relative to `now`.
    ///
    /// The first store failure aborts the run. Collections committed before
    /// the failure stay committed.
    pub async fn seed_at<P, O, C, U, S>(
        &self,
        patients: &mut P,
        organizations: &mut O,
        claims: &mut C,
        uploads: &mut U,
        users: &mut S,
        now: OffsetDateTime,
    ) -> Result<SeedReport, SeedError>
    where
        P: RecordStore<Patient>,
        O: RecordStore<Organization>,
        C: RecordStore<Claim>,
        U: RecordStore<Upload>,
        S: RecordStore<User>,
    {
        let config = &self.config;
        let mut rng = StdRng::seed_from_u64(config.rng_seed);

        let patients = seed_collection(patients, &mut rng, |rng| {
            generate_patients(config.patients, rng, now)
        })
        .await?;

        let organizations = seed_collection(organizations, &mut rng, |rng| {
            generate_organizations(config.organizations, rng, now)
        })
        .await?;

        let claims = seed_collection(claims, &mut rng, |rng| {
            generate_claims(config.claims, rng, now)
        })
        .await?;

        let uploads = seed_collection(uploads, &mut rng, |rng| {
            generate_uploads(config.uploads, rng, now)
        })
        .await?;

        let users = seed_collection(users, &mut rng, |rng| {
            let mut users = generate_users(config.users, rng);
            users.extend(fixed_users());
            users
        })
        .await?;

        Ok(SeedReport {
            patients,
            organizations,
            claims,
            uploads,
            users,
        })
    }

    /// Seeds the PostgreSQL tables behind `pool`.
    pub async fn seed_database(&self, pool: &PgPool) -> Result<SeedReport, SeedError> {
        let mut patients = PgStore::<Patient>::new(pool.clone());
        let mut organizations = PgStore::<Organization>::new(pool.clone());
        let mut claims = PgStore::<Claim>::new(pool.clone());
        let mut uploads = PgStore::<Upload>::new(pool.clone());
        let mut users = PgStore::<User>::new(pool.clone());

        self.seed(
            &mut patients,
            &mut organizations,
            &mut claims,
            &mut uploads,
            &mut users,
        )
        .await
    }
}

/// Seeds one collection if it is empty.
async fn seed_collection<T, S>(
    store: &mut S,
    rng: &mut StdRng,
    generate: impl FnOnce(&mut StdRng) -> Vec<T>,
) -> Result<SeedOutcome, SeedError>
where
    T: Record,
    S: RecordStore<T>,
{
    let existing = store.count().await?;
    if existing != 0 {
        info!("Skipping {}: {} already present", T::COLLECTION, existing);
        return Ok(SeedOutcome::Skipped { existing });
    }

    let records = generate(rng);
    info!("Seeding {} {}...", records.len(), T::COLLECTION);

    store.add_all(records);
    let inserted = store.commit().await?;

    info!("Seeded {} {}", inserted, T::COLLECTION);
    Ok(SeedOutcome::Seeded { inserted })
}

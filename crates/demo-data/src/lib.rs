//! Demo data generation for BlazorCrud.
//!
//! This crate fills a fresh database with plausible patients, organizations,
//! claims, uploads, and users so the CRUD screens have something to show.
//! Each collection is only seeded while it is empty.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use demo_data::prelude::*;
//!
//! records::migrate(&pool).await?;
//! let report = Seeder::new().seed_database(&pool).await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{DEFAULT_RNG_SEED, SeedConfig};
    pub use crate::db::{SeedError, SeedOutcome, SeedReport, Seeder};
    pub use crate::generators::{
        fixed_users, generate_claims, generate_organizations, generate_patients,
        generate_uploads, generate_users,
    };
    pub use records::models::{Claim, Organization, Patient, Upload, User};
    pub use records::{MemoryStore, PgStore, RecordStore};
}

//! Configuration types for demo data seeding.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::db::SeedError;

/// Seed value for the shared random generator.
pub const DEFAULT_RNG_SEED: u64 = 8675309;

/// Configuration for a seeding run.
///
/// Quantities apply only to collections that are empty when seeding starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Seed for the random generator shared by all collections.
    pub rng_seed: u64,

    /// Number of patients to generate.
    pub patients: usize,

    /// Number of organizations to generate.
    pub organizations: usize,

    /// Number of claims to generate.
    pub claims: usize,

    /// Number of uploads to generate.
    pub uploads: usize,

    /// Number of random users to generate. The fixed demo users come on top.
    pub users: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            rng_seed: DEFAULT_RNG_SEED,
            patients: 200,
            organizations: 50,
            claims: 500,
            uploads: 30,
            users: 20,
        }
    }
}

impl SeedConfig {
    /// Loads a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SeedError::Config(format!("{}: {e}", path.display())))?;

        serde_json::from_str(&raw)
            .map_err(|e| SeedError::Config(format!("{}: {e}", path.display())))
    }
}

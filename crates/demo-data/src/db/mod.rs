//! Database integration for seeding demo data.
//!
//! The [`Seeder`] fills each empty collection with generated records and
//! commits them as one batch per collection.

mod seeder;

pub use seeder::{SeedError, SeedOutcome, SeedReport, Seeder};

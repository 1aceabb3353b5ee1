//! Integration tests for seeding a PostgreSQL database.
//!
//! To run these tests, you need a PostgreSQL database and the
//! DATABASE_URL environment variable set. Migrations are applied by the tests.
//!
//! Run with: `DATABASE_URL=postgres://... cargo test -p demo-data --test seed_postgres`
//!
//! Note: seeding only touches empty tables, so these tests are safe against a
//! development database that already holds demo data.

use demo_data::prelude::*;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::env;

/// Get database pool, skipping tests if DATABASE_URL is not set.
async fn get_test_pool() -> Option<PgPool> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    match PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
    {
        Ok(pool) => Some(pool),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            None
        }
    }
}

async fn table_count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}

const TABLES: [&str; 8] = [
    "patients",
    "patient_contacts",
    "organizations",
    "organization_addresses",
    "claims",
    "claim_line_items",
    "uploads",
    "users",
];

#[tokio::test]
async fn test_seed_database_is_idempotent() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    records::migrate(&pool).await.expect("Failed to migrate");

    let seeder = Seeder::new();
    let first = seeder.seed_database(&pool).await.expect("First seed failed");

    let mut before = Vec::new();
    for table in TABLES {
        before.push(table_count(&pool, table).await);
    }

    let second = seeder.seed_database(&pool).await.expect("Second seed failed");
    assert_eq!(second.total_inserted(), 0);

    for (table, expected) in TABLES.iter().zip(before) {
        assert_eq!(table_count(&pool, table).await, expected, "{table} changed");
    }

    // Only a run that found the tables empty says anything about quantities.
    if first.claims == (SeedOutcome::Seeded { inserted: 500 }) {
        assert_eq!(table_count(&pool, "claim_line_items").await, 1000);

        let out_of_range: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM claim_line_items WHERE amount < 50.00 OR amount > 1000.00",
        )
        .fetch_one(&pool)
        .await
        .expect("Failed to query line items");
        assert_eq!(out_of_range, 0);
    }

    if first.users == (SeedOutcome::Seeded { inserted: 22 }) {
        let fixed: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM users WHERE username LIKE '%@marchforourplanet.com'",
        )
        .fetch_one(&pool)
        .await
        .expect("Failed to query fixed users");
        assert_eq!(fixed, 2);
    }
}

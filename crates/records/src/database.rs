use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::debug;

use crate::errors::StoreError;
use crate::models::{Claim, Organization, Patient, Upload, User};
use crate::store::{Record, RecordStore};

/// Applies the embedded schema migrations.
pub async fn migrate(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// An entity that knows how to insert itself, children included, into PostgreSQL.
///
/// The table written to is named after [`Record::COLLECTION`].
#[async_trait]
pub trait PgRecord: Record {
    /// Inserts the record and returns its new id.
    async fn insert(&self, conn: &mut PgConnection) -> Result<i64, sqlx::Error>;
}

/// PostgreSQL-backed store for one collection.
///
/// Staged records are written inside a single transaction on commit, so a
/// failed batch leaves the table untouched.
pub struct PgStore<T> {
    pool: PgPool,
    staged: Vec<T>,
}

impl<T: PgRecord> PgStore<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            staged: Vec::new(),
        }
    }
}

#[async_trait]
impl<T: PgRecord> RecordStore<T> for PgStore<T> {
    async fn count(&self) -> Result<i64, StoreError> {
        let sql = format!("SELECT COUNT(*) FROM {}", T::COLLECTION);
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }

    fn add_all(&mut self, records: Vec<T>) {
        debug!("Staging {} {}", records.len(), T::COLLECTION);
        self.staged.extend(records);
    }

    async fn commit(&mut self) -> Result<u64, StoreError> {
        if self.staged.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        for record in &self.staged {
            record.insert(&mut *tx).await?;
        }
        tx.commit().await?;

        let written = self.staged.len() as u64;
        self.staged.clear();
        debug!("Committed {} {}", written, T::COLLECTION);

        Ok(written)
    }
}

#[async_trait]
impl PgRecord for Patient {
    async fn insert(&self, conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO patients (name, gender, primary_care_provider, state, modified_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&self.name)
        .bind(self.gender.as_str())
        .bind(&self.primary_care_provider)
        .bind(self.state.as_str())
        .bind(self.modified_date)
        .fetch_one(&mut *conn)
        .await?;

        for contact in &self.contacts {
            sqlx::query(
                r#"
                INSERT INTO patient_contacts (patient_id, contact_system, contact_value, contact_use)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(id)
            .bind(contact.system.as_str())
            .bind(&contact.value)
            .bind(contact.contact_use.as_str())
            .execute(&mut *conn)
            .await?;
        }

        Ok(id)
    }
}

#[async_trait]
impl PgRecord for Organization {
    async fn insert(&self, conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO organizations (name, organization_type, is_active, modified_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&self.name)
        .bind(self.organization_type.as_str())
        .bind(self.is_active)
        .bind(self.modified_date)
        .fetch_one(&mut *conn)
        .await?;

        for address in &self.addresses {
            sqlx::query(
                r#"
                INSERT INTO organization_addresses (organization_id, street, city, state)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(id)
            .bind(&address.street)
            .bind(&address.city)
            .bind(address.state.as_str())
            .execute(&mut *conn)
            .await?;
        }

        Ok(id)
    }
}

#[async_trait]
impl PgRecord for Claim {
    async fn insert(&self, conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO claims (patient_name, organization_name, status, claim_type, modified_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&self.patient_name)
        .bind(&self.organization_name)
        .bind(self.status.as_str())
        .bind(self.claim_type.as_str())
        .bind(self.modified_date)
        .fetch_one(&mut *conn)
        .await?;

        for item in &self.line_items {
            sqlx::query(
                r#"
                INSERT INTO claim_line_items (claim_id, service, amount)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(id)
            .bind(item.service.as_str())
            .bind(item.amount)
            .execute(&mut *conn)
            .await?;
        }

        Ok(id)
    }
}

#[async_trait]
impl PgRecord for Upload {
    async fn insert(&self, conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO uploads (file_type, upload_timestamp, processed_timestamp, file_content)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(self.file_type.as_str())
        .bind(self.upload_timestamp)
        .bind(self.processed_timestamp)
        .bind(&self.file_content)
        .fetch_one(&mut *conn)
        .await
    }
}

#[async_trait]
impl PgRecord for User {
    async fn insert(&self, conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO users (username, password, first_name, last_name, email)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&self.username)
        .bind(&self.password)
        .bind(&self.first_name)
        .bind(&self.last_name)
        .bind(&self.email)
        .fetch_one(&mut *conn)
        .await
    }
}

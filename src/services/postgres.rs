use crate::models::{PatientProfile, Trial, TrialStatus};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl PostgresError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PostgresError::NotFound(_))
    }
}

/// PostgreSQL client for the intake platform's patient and trial records
///
/// The suggestion engine only reads: one patient by id, and the set of
/// trials currently recruiting. Writes happen elsewhere in the platform.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, PostgresError> {
        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Load a patient profile by id
    ///
    /// Returns `NotFound` when no such patient exists; the caller surfaces
    /// that directly rather than retrying.
    pub async fn get_patient_by_id(&self, patient_id: &str) -> Result<PatientProfile, PostgresError> {
        let query = r#"
            SELECT patient_id, primary_condition, condition_description,
                   pathologies, diagnostic_codes, created_at
            FROM patients
            WHERE patient_id = $1
        "#;

        let row = sqlx::query(query)
            .bind(patient_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PostgresError::NotFound(format!("Patient {} not found", patient_id)))?;

        Ok(PatientProfile {
            patient_id: row.get("patient_id"),
            primary_condition: row.get("primary_condition"),
            condition_description: row.get("condition_description"),
            pathologies: row.get("pathologies"),
            diagnostic_codes: row.get("diagnostic_codes"),
            created_at: row.get("created_at"),
        })
    }

    /// Load all trials currently in the recruiting lifecycle state
    pub async fn list_recruiting_trials(&self) -> Result<Vec<Trial>, PostgresError> {
        let query = r#"
            SELECT trial_id, title, status, max_participants, criteria
            FROM trials
            WHERE status = 'recruiting'
            ORDER BY created_at
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let trials: Vec<Trial> = rows
            .iter()
            .map(|row| Trial {
                trial_id: row.get("trial_id"),
                title: row.get("title"),
                status: TrialStatus::parse(row.get::<&str, _>("status")),
                max_participants: row.get("max_participants"),
                criteria: row.get("criteria"),
            })
            .collect();

        tracing::debug!("Loaded {} recruiting trials", trials.len());

        Ok(trials)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

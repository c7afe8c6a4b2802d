//! Schema bootstrap: idempotent DDL for the clinical tables, applied at
//! startup. Identifiers are fixed strings; all runtime values go through
//! bind parameters elsewhere.

use crate::error::AppError;
use sqlx::PgPool;

const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS patients (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        phone TEXT,
        birth_date DATE,
        user_id BIGINT NOT NULL REFERENCES users(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS assessments (
        id BIGSERIAL PRIMARY KEY,
        patient_id BIGINT NOT NULL UNIQUE REFERENCES patients(id),
        complaint TEXT,
        hda TEXT,
        hpp TEXT,
        pain_level TEXT,
        vitals TEXT,
        inspection TEXT,
        rom TEXT,
        diagnosis TEXT,
        goals TEXT,
        plan TEXT,
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS evolutions (
        id BIGSERIAL PRIMARY KEY,
        patient_id BIGINT NOT NULL REFERENCES patients(id),
        date TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        subjective TEXT,
        objective TEXT,
        assessment_notes TEXT,
        plan TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_patients_user_name ON patients (user_id, name)",
    "CREATE INDEX IF NOT EXISTS idx_evolutions_patient_date ON evolutions (patient_id, date DESC)",
];

/// Create the clinical tables and their indexes if absent.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for ddl in DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Actionable hint for the two most common boot failures seen in deployments,
/// if the error matches one.
pub fn connect_hint(err: &sqlx::Error) -> Option<&'static str> {
    match err {
        sqlx::Error::Database(db) if db.code().as_deref() == Some("28P01") => {
            Some("PostgreSQL rejected the credentials; check DB_PASSWORD in .env")
        }
        sqlx::Error::Io(_) => {
            Some("could not reach PostgreSQL; check that the server is running and the port is open")
        }
        _ => None,
    }
}

//! Patient, assessment, and evolution operations, scoped by owning user.
//!
//! Every nested read/write goes through [`RecordService::assert_owner`]
//! first: a patient-scoped resource is only reachable when the patient row
//! belongs to the caller.

use crate::error::AppError;
use crate::model::{Assessment, AssessmentForm, Evolution, EvolutionForm, NewPatient, Patient};
use sqlx::PgPool;

const PATIENT_COLUMNS: &str = "id, name, phone, birth_date, user_id";
const ASSESSMENT_COLUMNS: &str = "id, patient_id, complaint, hda, hpp, pain_level, vitals, \
     inspection, rom, diagnosis, goals, plan, updated_at";
const EVOLUTION_COLUMNS: &str =
    "id, patient_id, date, subjective, objective, assessment_notes, plan";

pub struct RecordService;

impl RecordService {
    /// All patients owned by the user, alphabetical by name.
    pub async fn list_patients(pool: &PgPool, user_id: i64) -> Result<Vec<Patient>, AppError> {
        let rows = sqlx::query_as::<_, Patient>(&format!(
            "SELECT {} FROM patients WHERE user_id = $1 ORDER BY name ASC",
            PATIENT_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Insert a patient owned by the user and return the created row.
    pub async fn create_patient(
        pool: &PgPool,
        user_id: i64,
        new: &NewPatient,
    ) -> Result<Patient, AppError> {
        let row = sqlx::query_as::<_, Patient>(&format!(
            "INSERT INTO patients (name, phone, birth_date, user_id) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            PATIENT_COLUMNS
        ))
        .bind(&new.name)
        .bind(&new.phone)
        .bind(new.birth_date)
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// The ownership check guarding every nested read/write.
    async fn assert_owner(pool: &PgPool, user_id: i64, patient_id: i64) -> Result<(), AppError> {
        let owned =
            sqlx::query_scalar::<_, i64>("SELECT id FROM patients WHERE id = $1 AND user_id = $2")
                .bind(patient_id)
                .bind(user_id)
                .fetch_optional(pool)
                .await?;
        match owned {
            Some(_) => Ok(()),
            None => Err(AppError::NotOwner(patient_id)),
        }
    }

    /// The patient's assessment, or None when no evaluation was recorded yet.
    pub async fn get_assessment(
        pool: &PgPool,
        user_id: i64,
        patient_id: i64,
    ) -> Result<Option<Assessment>, AppError> {
        Self::assert_owner(pool, user_id, patient_id).await?;
        let row = sqlx::query_as::<_, Assessment>(&format!(
            "SELECT {} FROM assessments WHERE patient_id = $1",
            ASSESSMENT_COLUMNS
        ))
        .bind(patient_id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Insert-or-update keyed by patient_id; `updated_at` advances on update.
    pub async fn upsert_assessment(
        pool: &PgPool,
        user_id: i64,
        patient_id: i64,
        form: &AssessmentForm,
    ) -> Result<(), AppError> {
        Self::assert_owner(pool, user_id, patient_id).await?;
        let exists = sqlx::query_scalar::<_, i32>("SELECT 1 FROM assessments WHERE patient_id = $1")
            .bind(patient_id)
            .fetch_optional(pool)
            .await?
            .is_some();
        if exists {
            tracing::debug!(patient_id, "updating existing assessment");
            sqlx::query(
                "UPDATE assessments SET complaint = $1, hda = $2, hpp = $3, pain_level = $4, \
                 vitals = $5, inspection = $6, rom = $7, diagnosis = $8, goals = $9, plan = $10, \
                 updated_at = NOW() WHERE patient_id = $11",
            )
            .bind(&form.complaint)
            .bind(&form.hda)
            .bind(&form.hpp)
            .bind(&form.pain_level)
            .bind(&form.vitals)
            .bind(&form.inspection)
            .bind(&form.rom)
            .bind(&form.diagnosis)
            .bind(&form.goals)
            .bind(&form.plan)
            .bind(patient_id)
            .execute(pool)
            .await?;
        } else {
            tracing::debug!(patient_id, "inserting first assessment");
            sqlx::query(
                "INSERT INTO assessments (patient_id, complaint, hda, hpp, pain_level, vitals, \
                 inspection, rom, diagnosis, goals, plan) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
            )
            .bind(patient_id)
            .bind(&form.complaint)
            .bind(&form.hda)
            .bind(&form.hpp)
            .bind(&form.pain_level)
            .bind(&form.vitals)
            .bind(&form.inspection)
            .bind(&form.rom)
            .bind(&form.diagnosis)
            .bind(&form.goals)
            .bind(&form.plan)
            .execute(pool)
            .await?;
        }
        Ok(())
    }

    /// The patient's progress notes, newest first.
    pub async fn list_evolutions(
        pool: &PgPool,
        user_id: i64,
        patient_id: i64,
    ) -> Result<Vec<Evolution>, AppError> {
        Self::assert_owner(pool, user_id, patient_id).await?;
        let rows = sqlx::query_as::<_, Evolution>(&format!(
            "SELECT {} FROM evolutions WHERE patient_id = $1 ORDER BY date DESC",
            EVOLUTION_COLUMNS
        ))
        .bind(patient_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Append a progress note dated NOW().
    pub async fn add_evolution(
        pool: &PgPool,
        user_id: i64,
        patient_id: i64,
        form: &EvolutionForm,
    ) -> Result<(), AppError> {
        Self::assert_owner(pool, user_id, patient_id).await?;
        sqlx::query(
            "INSERT INTO evolutions (patient_id, subjective, objective, assessment_notes, plan) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(patient_id)
        .bind(&form.subjective)
        .bind(&form.objective)
        .bind(&form.assessment_notes)
        .bind(&form.plan)
        .execute(pool)
        .await?;
        Ok(())
    }
}

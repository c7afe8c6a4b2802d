//! Domain rows and request payloads.
//!
//! Responses carry the snake_case column names; request bodies keep the
//! camelCase keys the web client submits (`birthDate`, `painLevel`).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Credential row. Never serialized to clients; see [`UserPublic`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// User fields safe to return from the API.
#[derive(Debug, Clone, Serialize)]
pub struct UserPublic {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserPublic {
    fn from(u: User) -> Self {
        UserPublic {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub user_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// One clinical evaluation per patient, upserted on patient_id.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Assessment {
    pub id: i64,
    pub patient_id: i64,
    pub complaint: Option<String>,
    /// History of the present illness.
    pub hda: Option<String>,
    /// Past medical history.
    pub hpp: Option<String>,
    pub pain_level: Option<String>,
    pub vitals: Option<String>,
    pub inspection: Option<String>,
    /// Range of motion findings.
    pub rom: Option<String>,
    pub diagnosis: Option<String>,
    pub goals: Option<String>,
    pub plan: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentForm {
    pub complaint: Option<String>,
    pub hda: Option<String>,
    pub hpp: Option<String>,
    pub pain_level: Option<String>,
    pub vitals: Option<String>,
    pub inspection: Option<String>,
    pub rom: Option<String>,
    pub diagnosis: Option<String>,
    pub goals: Option<String>,
    pub plan: Option<String>,
}

/// Dated progress note (SOAP format), append-only through the API.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Evolution {
    pub id: i64,
    pub patient_id: i64,
    pub date: DateTime<Utc>,
    pub subjective: Option<String>,
    pub objective: Option<String>,
    pub assessment_notes: Option<String>,
    pub plan: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvolutionForm {
    pub subjective: Option<String>,
    pub objective: Option<String>,
    /// The client submits the A of SOAP under the key `assessment`.
    #[serde(rename = "assessment")]
    pub assessment_notes: Option<String>,
    pub plan: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_patient_accepts_camel_case_birth_date() {
        let p: NewPatient = serde_json::from_str(
            r#"{"name":"Maria Souza","phone":"11 99999-0000","birthDate":"1988-03-14"}"#,
        )
        .unwrap();
        assert_eq!(p.birth_date, NaiveDate::from_ymd_opt(1988, 3, 14));
    }

    #[test]
    fn assessment_form_accepts_camel_case_pain_level() {
        let form: AssessmentForm =
            serde_json::from_str(r#"{"complaint":"dor lombar","painLevel":"7"}"#).unwrap();
        assert_eq!(form.pain_level.as_deref(), Some("7"));
        assert!(form.vitals.is_none());
    }

    #[test]
    fn evolution_form_maps_assessment_key_to_notes() {
        let form: EvolutionForm =
            serde_json::from_str(r#"{"subjective":"melhora","assessment":"evoluindo bem"}"#)
                .unwrap();
        assert_eq!(form.assessment_notes.as_deref(), Some("evoluindo bem"));
    }

    #[test]
    fn patient_serializes_with_column_names() {
        let patient = Patient {
            id: 1,
            name: "João".into(),
            phone: None,
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 2),
            user_id: 9,
        };
        let value = serde_json::to_value(&patient).unwrap();
        assert_eq!(value["birth_date"], "1990-01-02");
        assert_eq!(value["user_id"], 9);
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::types::error::AppError;
use crate::types::looks_like_email;

#[derive(Serialize, Deserialize, Debug)]
pub struct REvaluationCreate {
    pub seminar: Option<Uuid>,
    pub participant_email: Option<String>,
    pub answers: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct DBEvaluationCreate {
    pub seminar_id: Uuid,
    pub participant_email: String,
    pub answers: Option<Value>,
}

impl REvaluationCreate {
    pub fn validate(self) -> Result<DBEvaluationCreate, AppError> {
        let mut errors = BTreeMap::new();

        if self.seminar.is_none() {
            errors.insert("seminar".to_string(), "this field is required".to_string());
        }
        let email = self.participant_email.as_deref().map(str::trim).unwrap_or("");
        if email.is_empty() {
            errors.insert(
                "participant_email".to_string(),
                "this field is required".to_string(),
            );
        } else if !looks_like_email(email) {
            errors.insert(
                "participant_email".to_string(),
                "enter a valid email address".to_string(),
            );
        }

        match self.seminar {
            Some(seminar_id) if errors.is_empty() => Ok(DBEvaluationCreate {
                seminar_id,
                participant_email: email.to_string(),
                answers: self.answers,
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

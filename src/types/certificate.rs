use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::error::AppError;
use crate::types::looks_like_email;

#[derive(Serialize, Deserialize, Debug)]
pub struct RCertificateCreate {
    pub seminar: Option<Uuid>,
    pub participant_email: Option<String>,
    pub participant_name: Option<String>,
    pub file_url: Option<String>,
    pub certificate_number: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DBCertificateCreate {
    pub seminar_id: Uuid,
    pub participant_email: String,
    pub participant_name: Option<String>,
    pub file_url: Option<String>,
    pub certificate_number: String,
}

impl RCertificateCreate {
    pub fn validate(self) -> Result<DBCertificateCreate, AppError> {
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
        let number = self
            .certificate_number
            .as_deref()
            .map(str::trim)
            .unwrap_or("");
        if number.is_empty() {
            errors.insert(
                "certificate_number".to_string(),
                "this field is required".to_string(),
            );
        }

        match self.seminar {
            Some(seminar_id) if errors.is_empty() => Ok(DBCertificateCreate {
                seminar_id,
                participant_email: email.to_string(),
                participant_name: self.participant_name,
                file_url: self.file_url,
                certificate_number: number.to_string(),
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::error::AppError;
use crate::types::looks_like_email;

/// One check-in or check-out event. Both time fields are optional so a
/// scanner can send whichever side it saw.
#[derive(Serialize, Deserialize, Debug)]
pub struct RAttendanceUpsert {
    pub seminar: Option<Uuid>,
    pub participant_email: Option<String>,
    pub time_in: Option<DateTime<Utc>>,
    pub time_out: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct DBAttendanceEvent {
    pub seminar_id: Uuid,
    pub participant_email: String,
    pub time_in: Option<DateTime<Utc>>,
    pub time_out: Option<DateTime<Utc>>,
}

impl RAttendanceUpsert {
    pub fn validate(self) -> Result<DBAttendanceEvent, AppError> {
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
            Some(seminar_id) if errors.is_empty() => Ok(DBAttendanceEvent {
                seminar_id,
                participant_email: email.to_string(),
                time_in: self.time_in,
                time_out: self.time_out,
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::error::AppError;

#[derive(Serialize, Deserialize, Debug)]
pub struct RSeminarCreate {
    pub title: Option<String>,
    pub speaker: Option<String>,
    pub capacity: Option<i32>,
    pub duration: Option<i32>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub start_datetime: Option<DateTime<Utc>>,
    pub end_datetime: Option<DateTime<Utc>>,
    pub semester: Option<String>,
    pub questions: Option<Value>,
    pub metadata: Option<Value>,
    pub certificate_template_url: Option<String>,
}

/// Partial update, absent fields leave the stored value untouched.
#[derive(Serialize, Deserialize, Debug)]
pub struct RSeminarUpdate {
    pub title: Option<String>,
    pub speaker: Option<String>,
    pub capacity: Option<i32>,
    pub duration: Option<i32>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub start_datetime: Option<DateTime<Utc>>,
    pub end_datetime: Option<DateTime<Utc>>,
    pub semester: Option<String>,
    pub questions: Option<Value>,
    pub metadata: Option<Value>,
    pub certificate_template_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DBSeminarCreate {
    pub title: String,
    pub speaker: Option<String>,
    pub capacity: Option<i32>,
    pub duration: Option<i32>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub start_datetime: Option<DateTime<Utc>>,
    pub end_datetime: Option<DateTime<Utc>>,
    pub semester: Option<String>,
    pub questions: Option<Value>,
    pub metadata: Option<Value>,
    pub certificate_template_url: Option<String>,
}

impl RSeminarCreate {
    pub fn validate(self) -> Result<DBSeminarCreate, AppError> {
        let mut errors = BTreeMap::new();

        let title = self.title.map(|t| t.trim().to_string()).unwrap_or_default();
        if title.is_empty() {
            errors.insert("title".to_string(), "this field is required".to_string());
        } else if title.len() > 255 {
            errors.insert("title".to_string(), "must be at most 255 characters".to_string());
        }
        check_len(&mut errors, "speaker", self.speaker.as_deref(), 255);
        check_len(&mut errors, "start_time", self.start_time.as_deref(), 32);
        check_len(&mut errors, "end_time", self.end_time.as_deref(), 32);
        check_len(
            &mut errors,
            "certificate_template_url",
            self.certificate_template_url.as_deref(),
            1024,
        );

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        Ok(DBSeminarCreate {
            title,
            speaker: self.speaker,
            capacity: self.capacity,
            duration: self.duration,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            start_datetime: self.start_datetime,
            end_datetime: self.end_datetime,
            semester: self.semester,
            questions: self.questions,
            metadata: self.metadata,
            certificate_template_url: self.certificate_template_url,
        })
    }
}

impl RSeminarUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = BTreeMap::new();

        if let Some(title) = self.title.as_deref() {
            if title.trim().is_empty() {
                errors.insert("title".to_string(), "must not be blank".to_string());
            } else if title.len() > 255 {
                errors.insert("title".to_string(), "must be at most 255 characters".to_string());
            }
        }
        check_len(&mut errors, "speaker", self.speaker.as_deref(), 255);
        check_len(&mut errors, "start_time", self.start_time.as_deref(), 32);
        check_len(&mut errors, "end_time", self.end_time.as_deref(), 32);
        check_len(
            &mut errors,
            "certificate_template_url",
            self.certificate_template_url.as_deref(),
            1024,
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

fn check_len(errors: &mut BTreeMap<String, String>, field: &str, value: Option<&str>, max: usize) {
    if let Some(v) = value {
        if v.len() > max {
            errors.insert(field.to_string(), format!("must be at most {max} characters"));
        }
    }
}

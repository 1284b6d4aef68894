use std::sync::Arc;

use seminar_api::db::service::DbService;

pub mod client;

pub struct TestContext {
    pub db: Arc<DbService>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // Same service and migrations as production, against a throwaway
        // in-memory database.
        let db = Arc::new(
            DbService::new("sqlite::memory:")
                .await
                .expect("Failed to initialize DbService"),
        );

        TestContext { db }
    }
}

// Test data helpers
pub mod test_data {
    use serde_json::{json, Value};
    use uuid::Uuid;

    #[allow(dead_code)]
    pub fn sample_seminar() -> Value {
        json!({
            "title": "Rust for Systems Programming",
            "speaker": "Dr. Reyes",
            "capacity": 120,
            "duration": 3,
            "date": "2025-11-21",
            "start_time": "09:00",
            "end_time": "12:00",
            "semester": "2025-2026 1st",
            "questions": [
                { "id": 1, "text": "How relevant was the topic?" },
                { "id": 2, "text": "Would you recommend this seminar?" }
            ],
            "metadata": { "room": "B204", "track": "engineering" }
        })
    }

    #[allow(dead_code)]
    pub fn sample_attendance(seminar_id: Uuid, email: &str) -> Value {
        json!({
            "seminar": seminar_id,
            "participant_email": email,
            "time_in": "2025-11-21T09:05:00Z"
        })
    }

    #[allow(dead_code)]
    pub fn sample_submission(secret: &str, seminar_id: &str, email: &str) -> Value {
        json!({
            "secret_token": secret,
            "seminar_id": seminar_id,
            "email": email,
            "name": "Alex Cruz",
            "year_section": "BSCS 3-2"
        })
    }
}

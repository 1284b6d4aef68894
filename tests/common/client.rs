use actix_web::middleware::NormalizePath;
use actix_web::{web, App};
use std::sync::Arc;

use entity::seminar::Model as SeminarModel;
use seminar_api::{
    db::service::DbService,
    routes::configure_routes,
    state::AppState,
    types::attendance::DBAttendanceEvent,
    types::certificate::DBCertificateCreate,
    types::error::{json_error_handler, path_error_handler},
    types::evaluation::DBEvaluationCreate,
    types::joined_participant::DBJoinedParticipantCreate,
    types::seminar::DBSeminarCreate,
};

#[allow(dead_code)]
pub const WEBHOOK_SECRET: &str = "test-form-secret";

pub struct TestClient {
    pub db: Arc<DbService>,
    secret: Option<String>,
}

impl TestClient {
    pub fn new(db: Arc<DbService>) -> Self {
        TestClient {
            db,
            secret: Some(WEBHOOK_SECRET.to_string()),
        }
    }

    #[allow(dead_code)]
    pub fn without_webhook_secret(db: Arc<DbService>) -> Self {
        TestClient { db, secret: None }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = AppState::new(Some(Arc::clone(&self.db)), self.secret.clone());
        App::new()
            .wrap(NormalizePath::trim())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .app_data(web::Data::new(state))
            .configure(configure_routes)
    }

    /// App booted without any storage backend, for the degraded flows.
    #[allow(dead_code)]
    pub fn create_unconfigured_app() -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = AppState::new(None, None);
        App::new()
            .wrap(NormalizePath::trim())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .app_data(web::Data::new(state))
            .configure(configure_routes)
    }

    #[allow(dead_code)]
    pub async fn create_test_seminar(&self, title: &str, date: &str) -> SeminarModel {
        let data = DBSeminarCreate {
            title: title.to_string(),
            speaker: Some("Test Speaker".to_string()),
            capacity: Some(50),
            date: Some(date.parse().expect("bad test date")),
            ..Default::default()
        };

        self.db
            .create_seminar(data)
            .await
            .expect("Failed to create seminar")
    }

    /// One row of every dependent type for a participant, seeded through
    /// the same service methods the handlers use.
    #[allow(dead_code)]
    pub async fn seed_dependents(&self, seminar_id: uuid::Uuid, email: &str) {
        self.db
            .upsert_attendance(DBAttendanceEvent {
                seminar_id,
                participant_email: email.to_string(),
                time_in: Some(chrono::Utc::now()),
                time_out: None,
            })
            .await
            .expect("Failed to seed attendance");
        self.db
            .create_joined_participant(DBJoinedParticipantCreate {
                seminar_id,
                participant_email: email.to_string(),
                participant_name: Some("Seeded Participant".to_string()),
                metadata: None,
            })
            .await
            .expect("Failed to seed join record");
        self.db
            .create_evaluation(DBEvaluationCreate {
                seminar_id,
                participant_email: email.to_string(),
                answers: None,
            })
            .await
            .expect("Failed to seed evaluation");
        self.db
            .create_certificate(DBCertificateCreate {
                seminar_id,
                participant_email: email.to_string(),
                participant_name: None,
                file_url: None,
                certificate_number: format!("CERT-{seminar_id}"),
            })
            .await
            .expect("Failed to seed certificate");
    }
}

use actix_web::{web, HttpResponse};
use serde_json::json;

pub mod attendance;
pub mod certificate;
pub mod evaluation;
pub mod google_form;
pub mod health;
pub mod joined_participant;
pub mod seminar;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/seminars")
            .service(seminar::list::list)
            .service(seminar::create::create)
            .service(seminar::get::get)
            .service(seminar::update::update)
            .service(seminar::delete::delete),
    );
    cfg.service(
        web::scope("/attendance")
            .service(attendance::list::list)
            .service(attendance::create::create)
            .service(attendance::list::list_for_seminar),
    );
    cfg.service(
        web::scope("/joined-participants")
            .service(joined_participant::list::list)
            .service(joined_participant::create::create)
            .service(joined_participant::list::list_for_seminar),
    );
    cfg.service(
        web::scope("/evaluations")
            .service(evaluation::list::list)
            .service(evaluation::create::create)
            .service(evaluation::list::list_for_seminar),
    );
    cfg.service(
        web::scope("/certificates")
            .service(certificate::list::list)
            .service(certificate::create::create)
            .service(certificate::list::list_for_seminar),
    );
    cfg.service(web::scope("/google-form-submit").service(google_form::submit));

    // unmatched paths get the same envelope as every other error
    cfg.default_service(web::route().to(not_found));
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "not found" }))
}

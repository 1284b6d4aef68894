use actix_web::{post, web};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::state::AppState;
use crate::types::attendance::DBAttendanceEvent;
use crate::types::error::AppError;
use crate::types::google_form::{GoogleFormRes, RGoogleFormSubmission};
use crate::types::joined_participant::DBJoinedParticipantCreate;
use crate::types::response::{ApiResponse, ApiResult};

/// Entry point for the Apps Script trigger attached to the signup form.
/// One submission checks the participant in, recording attendance and
/// flipping their join record to present.
#[post("")]
async fn submit(
    _req: actix_web::HttpRequest,
    state: web::Data<AppState>,
    data: web::Json<RGoogleFormSubmission>,
) -> ApiResult<GoogleFormRes> {
    let payload = data.into_inner();

    // 1) shared secret; an unconfigured secret rejects everything
    let expected = state
        .google_form_secret
        .as_deref()
        .ok_or(AppError::Unauthorized)?;
    if payload.secret_token.as_deref() != Some(expected) {
        return Err(AppError::Unauthorized);
    }

    // 2) required fields
    let raw_seminar_id = match payload.seminar_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id,
        _ => return Err(AppError::BadRequest("seminar_id is required".to_string())),
    };
    let email = match payload.email.as_deref().map(str::trim) {
        Some(email) if !email.is_empty() => email.to_string(),
        _ => return Err(AppError::BadRequest("email is required".to_string())),
    };

    // 3) resolve the seminar; an id that does not parse cannot match one
    let db = state.storage()?;
    let seminar = match Uuid::parse_str(raw_seminar_id) {
        Ok(id) => db.get_seminar(id).await?,
        Err(_) => return Err(AppError::NotFound("seminar not found".to_string())),
    };

    // 4) the attendance row is the point of the webhook, failure is fatal
    let event = DBAttendanceEvent {
        seminar_id: seminar.id,
        participant_email: email.clone(),
        time_in: Some(Utc::now()),
        time_out: None,
    };
    db.upsert_attendance(event)
        .await
        .map_err(|err| AppError::Internal(format!("failed to record attendance: {err}")))?;

    // 5) join-record bookkeeping is best effort, attendance already landed
    let join = DBJoinedParticipantCreate {
        seminar_id: seminar.id,
        participant_email: email.clone(),
        participant_name: payload.name.clone(),
        metadata: Some(json!({ "year_section": payload.year_section })),
    };
    if let Err(err) = db.upsert_joined_checkin(join).await {
        log::warn!("webhook could not update join record for {email}: {err}");
    }

    // 6) echo enough for the Apps Script log to be useful
    Ok(ApiResponse::Ok(GoogleFormRes {
        message: "attendance recorded".to_string(),
        email,
        name: payload.name,
        seminar_id: seminar.id,
    }))
}

use actix_web::{post, web};
use entity::attendance::Model as AttendanceModel;

use crate::state::AppState;
use crate::types::attendance::RAttendanceUpsert;
use crate::types::response::{ApiResponse, ApiResult};

/// Check-in / check-out events land here. The first event for a
/// (seminar, participant) pair creates the row and answers 201, every
/// later one merges into it and answers 200.
#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    state: web::Data<AppState>,
    data: web::Json<RAttendanceUpsert>,
) -> ApiResult<AttendanceModel> {
    let db = state.storage()?;
    let event = data.into_inner().validate()?;
    let (row, created) = db.upsert_attendance(event).await?;
    if created {
        Ok(ApiResponse::Created(row))
    } else {
        Ok(ApiResponse::Ok(row))
    }
}

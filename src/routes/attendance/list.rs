use actix_web::{get, web};
use entity::attendance::Model as AttendanceModel;
use uuid::Uuid;

use crate::state::AppState;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    state: web::Data<AppState>,
) -> ApiResult<Vec<AttendanceModel>> {
    let db = state.storage()?;
    Ok(ApiResponse::Ok(db.list_attendance(None).await?))
}

/// Rows for one seminar only. An unknown seminar id just yields an
/// empty list, same as a seminar nobody attended.
#[get("/{seminar_id}")]
async fn list_for_seminar(
    _req: actix_web::HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> ApiResult<Vec<AttendanceModel>> {
    let db = state.storage()?;
    Ok(ApiResponse::Ok(db.list_attendance(Some(path.into_inner())).await?))
}

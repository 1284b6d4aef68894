use actix_web::{get, web};
use entity::seminar::Model as SeminarModel;

use crate::state::AppState;
use crate::types::response::{ApiResponse, ApiResult};

/// All seminars, earliest date first.
#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    state: web::Data<AppState>,
) -> ApiResult<Vec<SeminarModel>> {
    let db = state.storage()?;
    Ok(ApiResponse::Ok(db.list_seminars().await?))
}

use actix_web::{get, web};
use entity::seminar::Model as SeminarModel;
use uuid::Uuid;

use crate::state::AppState;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{id}")]
async fn get(
    _req: actix_web::HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> ApiResult<SeminarModel> {
    let db = state.storage()?;
    Ok(ApiResponse::Ok(db.get_seminar(path.into_inner()).await?))
}

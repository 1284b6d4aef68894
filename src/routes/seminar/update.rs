use actix_web::{put, web};
use entity::seminar::Model as SeminarModel;
use uuid::Uuid;

use crate::state::AppState;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::seminar::RSeminarUpdate;

#[put("/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    data: web::Json<RSeminarUpdate>,
) -> ApiResult<SeminarModel> {
    let db = state.storage()?;
    let patch = data.into_inner();
    patch.validate()?;
    let seminar = db.update_seminar(path.into_inner(), patch).await?;
    Ok(ApiResponse::Ok(seminar))
}

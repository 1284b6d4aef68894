use actix_web::{get, web};
use entity::joined_participant::Model as JoinedModel;
use uuid::Uuid;

use crate::state::AppState;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    state: web::Data<AppState>,
) -> ApiResult<Vec<JoinedModel>> {
    let db = state.storage()?;
    Ok(ApiResponse::Ok(db.list_joined_participants(None).await?))
}

#[get("/{seminar_id}")]
async fn list_for_seminar(
    _req: actix_web::HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> ApiResult<Vec<JoinedModel>> {
    let db = state.storage()?;
    Ok(ApiResponse::Ok(
        db.list_joined_participants(Some(path.into_inner())).await?,
    ))
}

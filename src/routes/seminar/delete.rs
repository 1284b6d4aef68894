use actix_web::{delete, web};
use uuid::Uuid;

use crate::state::AppState;
use crate::types::response::{ApiResponse, ApiResult};

#[delete("/{id}")]
async fn delete(
    _req: actix_web::HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    let db = state.storage()?;
    db.delete_seminar(path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}

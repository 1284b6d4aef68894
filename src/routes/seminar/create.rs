use actix_web::{post, web};
use entity::seminar::Model as SeminarModel;

use crate::state::AppState;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::seminar::RSeminarCreate;

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    state: web::Data<AppState>,
    data: web::Json<RSeminarCreate>,
) -> ApiResult<SeminarModel> {
    let db = state.storage()?;
    let seminar = db.create_seminar(data.into_inner().validate()?).await?;
    Ok(ApiResponse::Created(seminar))
}

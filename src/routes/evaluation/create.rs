use actix_web::{post, web};
use entity::evaluation::Model as EvaluationModel;

use crate::state::AppState;
use crate::types::evaluation::REvaluationCreate;
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    state: web::Data<AppState>,
    data: web::Json<REvaluationCreate>,
) -> ApiResult<EvaluationModel> {
    let db = state.storage()?;
    let evaluation = db.create_evaluation(data.into_inner().validate()?).await?;
    Ok(ApiResponse::Created(evaluation))
}

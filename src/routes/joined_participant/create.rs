use actix_web::{post, web};
use entity::joined_participant::Model as JoinedModel;

use crate::state::AppState;
use crate::types::joined_participant::RJoinedParticipantCreate;
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    state: web::Data<AppState>,
    data: web::Json<RJoinedParticipantCreate>,
) -> ApiResult<JoinedModel> {
    let db = state.storage()?;
    let joined = db
        .create_joined_participant(data.into_inner().validate()?)
        .await?;
    Ok(ApiResponse::Created(joined))
}

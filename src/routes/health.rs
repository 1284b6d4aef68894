use actix_web::{get, web};
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct HealthRes {
    pub status: String,
    pub storage: String,
}

#[get("")]
async fn health(
    _req: actix_web::HttpRequest,
    state: web::Data<AppState>,
) -> ApiResult<HealthRes> {
    let storage = match state.db.as_deref() {
        None => "unconfigured",
        Some(db) => match db.ping().await {
            Ok(()) => db.backend(),
            Err(_) => "unreachable",
        },
    };

    Ok(ApiResponse::Ok(HealthRes {
        status: "ok".to_string(),
        storage: storage.to_string(),
    }))
}

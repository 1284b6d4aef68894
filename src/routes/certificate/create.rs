use actix_web::{post, web};
use entity::certificate::Model as CertificateModel;

use crate::state::AppState;
use crate::types::certificate::RCertificateCreate;
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    state: web::Data<AppState>,
    data: web::Json<RCertificateCreate>,
) -> ApiResult<CertificateModel> {
    let db = state.storage()?;
    let certificate = db.create_certificate(data.into_inner().validate()?).await?;
    Ok(ApiResponse::Created(certificate))
}

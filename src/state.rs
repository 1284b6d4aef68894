use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::error::AppError;

/// Handles shared by every worker: the storage service when one is
/// configured, and the shared secret for the form webhook.
#[derive(Clone)]
pub struct AppState {
    pub db: Option<Arc<DbService>>,
    pub google_form_secret: Option<String>,
}

impl AppState {
    pub fn new(db: Option<Arc<DbService>>, google_form_secret: Option<String>) -> Self {
        Self {
            db,
            google_form_secret,
        }
    }

    /// The server boots even without a database so health stays reachable.
    /// Data endpoints go through this accessor and answer 503 until a
    /// backend is configured.
    pub fn storage(&self) -> Result<&DbService, AppError> {
        self.db.as_deref().ok_or(AppError::ServiceUnavailable)
    }
}

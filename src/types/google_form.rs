use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw payload relayed by the Google Forms Apps Script trigger. Everything
/// is optional on the wire, the handler decides what is fatal.
#[derive(Serialize, Deserialize, Debug)]
pub struct RGoogleFormSubmission {
    pub secret_token: Option<String>,
    pub seminar_id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub year_section: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GoogleFormRes {
    pub message: String,
    pub email: String,
    pub name: Option<String>,
    pub seminar_id: Uuid,
}

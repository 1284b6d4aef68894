pub mod attendance;
pub mod certificate;
pub mod error;
pub mod evaluation;
pub mod google_form;
pub mod joined_participant;
pub mod response;
pub mod seminar;

// Plausibility check only, addresses are never mailed to
pub(crate) fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

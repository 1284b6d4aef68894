pub mod attendance;
pub mod certificate;
pub mod evaluation;
pub mod joined_participant;
pub mod seminar;
pub mod service;

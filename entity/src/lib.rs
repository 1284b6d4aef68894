pub mod attendance;
pub mod certificate;
pub mod evaluation;
pub mod joined_participant;
pub mod seminar;

/*
 A seminar is the root record, everything else hangs off it by seminar_id.
 Participants sign up through a Google Form, the webhook turns each submission
 into an attendance row (time_in stamped) plus a joined_participant row marked
 present. Attendance is one row per (seminar, email), check-in and check-out
 land on the same row. Evaluations and certificates are written once per
 (seminar, email) after the fact, certificate numbers are unique on their own.
 Deleting a seminar takes all of its dependent rows with it.
 */

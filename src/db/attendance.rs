use crate::db::service::DbService;
use crate::types::attendance::DBAttendanceEvent;
use crate::types::error::AppError;
use chrono::Utc;
use entity::attendance::{ActiveModel as AttendanceActive, Entity as Attendance, Model as AttendanceModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr};
use uuid::Uuid;

impl DbService {
    pub async fn list_attendance(
        &self,
        seminar_id: Option<Uuid>,
    ) -> Result<Vec<AttendanceModel>, AppError> {
        let mut query = Attendance::find().order_by_asc(entity::attendance::Column::CreatedAt);
        if let Some(id) = seminar_id {
            query = query.filter(entity::attendance::Column::SeminarId.eq(id));
        }
        Ok(query.all(&self.db).await?)
    }

    /// Insert-or-update keyed on (seminar, participant_email). Only the time
    /// fields carried by the event are written, so a check-out does not wipe
    /// an earlier check-in. Returns the row and whether it was newly created.
    pub async fn upsert_attendance(
        &self,
        event: DBAttendanceEvent,
    ) -> Result<(AttendanceModel, bool), AppError> {
        if let Some(existing) = self
            .find_attendance(event.seminar_id, &event.participant_email)
            .await?
        {
            let merged = self.merge_attendance(existing, &event).await?;
            return Ok((merged, false));
        }

        let insert = AttendanceActive {
            id: Set(Uuid::new_v4()),
            seminar_id: Set(event.seminar_id),
            participant_email: Set(event.participant_email.clone()),
            time_in: Set(event.time_in),
            time_out: Set(event.time_out),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await;

        match insert {
            Ok(model) => Ok((model, true)),
            // lost the race on uk_attendance_seminar_email, someone inserted
            // between our find and insert; merge into their row instead
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                let existing = self
                    .find_attendance(event.seminar_id, &event.participant_email)
                    .await?
                    .ok_or_else(|| {
                        AppError::Internal("attendance row vanished during upsert".to_string())
                    })?;
                let merged = self.merge_attendance(existing, &event).await?;
                Ok((merged, false))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn find_attendance(
        &self,
        seminar_id: Uuid,
        email: &str,
    ) -> Result<Option<AttendanceModel>, AppError> {
        Ok(Attendance::find()
            .filter(entity::attendance::Column::SeminarId.eq(seminar_id))
            .filter(entity::attendance::Column::ParticipantEmail.eq(email))
            .one(&self.db)
            .await?)
    }

    async fn merge_attendance(
        &self,
        existing: AttendanceModel,
        event: &DBAttendanceEvent,
    ) -> Result<AttendanceModel, AppError> {
        let mut am: AttendanceActive = existing.into();
        if let Some(t) = event.time_in {
            am.time_in = Set(Some(t));
        }
        if let Some(t) = event.time_out {
            am.time_out = Set(Some(t));
        }
        Ok(am.update(&self.db).await?)
    }
}

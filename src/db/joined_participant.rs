use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::joined_participant::DBJoinedParticipantCreate;
use chrono::Utc;
use entity::joined_participant::{
    ActiveModel as JoinedActive, Entity as JoinedParticipant, Model as JoinedModel,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr};
use uuid::Uuid;

impl DbService {
    pub async fn list_joined_participants(
        &self,
        seminar_id: Option<Uuid>,
    ) -> Result<Vec<JoinedModel>, AppError> {
        let mut query =
            JoinedParticipant::find().order_by_asc(entity::joined_participant::Column::JoinedAt);
        if let Some(id) = seminar_id {
            query = query.filter(entity::joined_participant::Column::SeminarId.eq(id));
        }
        Ok(query.all(&self.db).await?)
    }

    /// Direct signup. Not marked present, that only happens through the
    /// form webhook or a later check-in.
    pub async fn create_joined_participant(
        &self,
        data: DBJoinedParticipantCreate,
    ) -> Result<JoinedModel, AppError> {
        Ok(JoinedActive {
            id: Set(Uuid::new_v4()),
            seminar_id: Set(data.seminar_id),
            participant_email: Set(data.participant_email),
            participant_name: Set(data.participant_name),
            metadata: Set(data.metadata),
            joined_at: Set(Utc::now()),
            present: Set(false),
            check_in: Set(None),
            check_out: Set(None),
        }
        .insert(&self.db)
        .await?)
    }

    /// Webhook path: mark the participant present now, creating the join row
    /// when this is the first event for the pair.
    pub async fn upsert_joined_checkin(
        &self,
        data: DBJoinedParticipantCreate,
    ) -> Result<JoinedModel, AppError> {
        let now = Utc::now();
        if let Some(existing) = self
            .find_joined(data.seminar_id, &data.participant_email)
            .await?
        {
            return self.mark_present(existing, &data).await;
        }

        let insert = JoinedActive {
            id: Set(Uuid::new_v4()),
            seminar_id: Set(data.seminar_id),
            participant_email: Set(data.participant_email.clone()),
            participant_name: Set(data.participant_name.clone()),
            metadata: Set(data.metadata.clone()),
            joined_at: Set(now),
            present: Set(true),
            check_in: Set(Some(now)),
            check_out: Set(None),
        }
        .insert(&self.db)
        .await;

        match insert {
            Ok(model) => Ok(model),
            // concurrent submission won the insert, update their row
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                let existing = self
                    .find_joined(data.seminar_id, &data.participant_email)
                    .await?
                    .ok_or_else(|| {
                        AppError::Internal("join row vanished during upsert".to_string())
                    })?;
                self.mark_present(existing, &data).await
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn find_joined(
        &self,
        seminar_id: Uuid,
        email: &str,
    ) -> Result<Option<JoinedModel>, AppError> {
        Ok(JoinedParticipant::find()
            .filter(entity::joined_participant::Column::SeminarId.eq(seminar_id))
            .filter(entity::joined_participant::Column::ParticipantEmail.eq(email))
            .one(&self.db)
            .await?)
    }

    async fn mark_present(
        &self,
        existing: JoinedModel,
        data: &DBJoinedParticipantCreate,
    ) -> Result<JoinedModel, AppError> {
        let mut am: JoinedActive = existing.into();
        if let Some(name) = &data.participant_name {
            am.participant_name = Set(Some(name.clone()));
        }
        if let Some(meta) = &data.metadata {
            am.metadata = Set(Some(meta.clone()));
        }
        am.present = Set(true);
        am.check_in = Set(Some(Utc::now()));
        Ok(am.update(&self.db).await?)
    }
}

use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::seminar::{DBSeminarCreate, RSeminarUpdate};
use chrono::Utc;
use entity::attendance::Entity as Attendance;
use entity::certificate::Entity as Certificate;
use entity::evaluation::Entity as Evaluation;
use entity::joined_participant::Entity as JoinedParticipant;
use entity::seminar::{ActiveModel as SeminarActive, Entity as Seminar, Model as SeminarModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

impl DbService {
    pub async fn list_seminars(&self) -> Result<Vec<SeminarModel>, AppError> {
        Ok(Seminar::find()
            .order_by_asc(entity::seminar::Column::Date)
            .order_by_asc(entity::seminar::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    pub async fn get_seminar(&self, id: Uuid) -> Result<SeminarModel, AppError> {
        Ok(Seminar::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DbErr::RecordNotFound("seminar not found".to_string()))?)
    }

    pub async fn create_seminar(&self, data: DBSeminarCreate) -> Result<SeminarModel, AppError> {
        let now = Utc::now();
        Ok(SeminarActive {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            speaker: Set(data.speaker),
            capacity: Set(data.capacity),
            duration: Set(data.duration),
            date: Set(data.date),
            start_time: Set(data.start_time),
            end_time: Set(data.end_time),
            start_datetime: Set(data.start_datetime),
            end_datetime: Set(data.end_datetime),
            semester: Set(data.semester),
            questions: Set(data.questions),
            metadata: Set(data.metadata),
            certificate_template_url: Set(data.certificate_template_url),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?)
    }

    /// Fields absent from the patch keep their stored value.
    pub async fn update_seminar(
        &self,
        id: Uuid,
        patch: RSeminarUpdate,
    ) -> Result<SeminarModel, AppError> {
        let current = self.get_seminar(id).await?;
        let mut am: SeminarActive = current.into();
        if let Some(v) = patch.title {
            am.title = Set(v.trim().to_string());
        }
        if let Some(v) = patch.speaker {
            am.speaker = Set(Some(v));
        }
        if let Some(v) = patch.capacity {
            am.capacity = Set(Some(v));
        }
        if let Some(v) = patch.duration {
            am.duration = Set(Some(v));
        }
        if let Some(v) = patch.date {
            am.date = Set(Some(v));
        }
        if let Some(v) = patch.start_time {
            am.start_time = Set(Some(v));
        }
        if let Some(v) = patch.end_time {
            am.end_time = Set(Some(v));
        }
        if let Some(v) = patch.start_datetime {
            am.start_datetime = Set(Some(v));
        }
        if let Some(v) = patch.end_datetime {
            am.end_datetime = Set(Some(v));
        }
        if let Some(v) = patch.semester {
            am.semester = Set(Some(v));
        }
        if let Some(v) = patch.questions {
            am.questions = Set(Some(v));
        }
        if let Some(v) = patch.metadata {
            am.metadata = Set(Some(v));
        }
        if let Some(v) = patch.certificate_template_url {
            am.certificate_template_url = Set(Some(v));
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    /// Removes the seminar and every dependent row in one transaction, so a
    /// half-deleted seminar is never observable.
    pub async fn delete_seminar(&self, id: Uuid) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let seminar = Seminar::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("seminar not found".into()))?;

        JoinedParticipant::delete_many()
            .filter(entity::joined_participant::Column::SeminarId.eq(id))
            .exec(&txn)
            .await?;
        Attendance::delete_many()
            .filter(entity::attendance::Column::SeminarId.eq(id))
            .exec(&txn)
            .await?;
        Evaluation::delete_many()
            .filter(entity::evaluation::Column::SeminarId.eq(id))
            .exec(&txn)
            .await?;
        Certificate::delete_many()
            .filter(entity::certificate::Column::SeminarId.eq(id))
            .exec(&txn)
            .await?;

        let am: SeminarActive = seminar.into();
        am.delete(&txn).await?;
        txn.commit().await?;
        Ok(())
    }
}

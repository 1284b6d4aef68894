use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::evaluation::DBEvaluationCreate;
use chrono::Utc;
use entity::evaluation::{ActiveModel as EvaluationActive, Entity as Evaluation, Model as EvaluationModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

impl DbService {
    pub async fn list_evaluations(
        &self,
        seminar_id: Option<Uuid>,
    ) -> Result<Vec<EvaluationModel>, AppError> {
        let mut query = Evaluation::find().order_by_asc(entity::evaluation::Column::CreatedAt);
        if let Some(id) = seminar_id {
            query = query.filter(entity::evaluation::Column::SeminarId.eq(id));
        }
        Ok(query.all(&self.db).await?)
    }

    // one evaluation per (seminar, participant), the unique index answers
    // duplicates with a conflict
    pub async fn create_evaluation(
        &self,
        data: DBEvaluationCreate,
    ) -> Result<EvaluationModel, AppError> {
        Ok(EvaluationActive {
            id: Set(Uuid::new_v4()),
            seminar_id: Set(data.seminar_id),
            participant_email: Set(data.participant_email),
            answers: Set(data.answers),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await?)
    }
}

use crate::db::service::DbService;
use crate::types::certificate::DBCertificateCreate;
use crate::types::error::AppError;
use chrono::Utc;
use entity::certificate::{ActiveModel as CertificateActive, Entity as Certificate, Model as CertificateModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

impl DbService {
    pub async fn list_certificates(
        &self,
        seminar_id: Option<Uuid>,
    ) -> Result<Vec<CertificateModel>, AppError> {
        let mut query = Certificate::find().order_by_asc(entity::certificate::Column::IssuedAt);
        if let Some(id) = seminar_id {
            query = query.filter(entity::certificate::Column::SeminarId.eq(id));
        }
        Ok(query.all(&self.db).await?)
    }

    pub async fn create_certificate(
        &self,
        data: DBCertificateCreate,
    ) -> Result<CertificateModel, AppError> {
        Ok(CertificateActive {
            id: Set(Uuid::new_v4()),
            seminar_id: Set(data.seminar_id),
            participant_email: Set(data.participant_email),
            participant_name: Set(data.participant_name),
            file_url: Set(data.file_url),
            certificate_number: Set(data.certificate_number),
            issued_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await?)
    }
}

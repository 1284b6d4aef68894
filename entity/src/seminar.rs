use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seminar")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub speaker: Option<String>,
    pub capacity: Option<i32>,
    pub duration: Option<i32>,
    pub date: Option<Date>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub start_datetime: Option<DateTimeUtc>,
    pub end_datetime: Option<DateTimeUtc>,
    pub semester: Option<String>,
    pub questions: Option<Json>,
    pub metadata: Option<Json>,
    pub certificate_template_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::joined_participant::Entity")]
    JoinedParticipant,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
    #[sea_orm(has_many = "super::evaluation::Entity")]
    Evaluation,
    #[sea_orm(has_many = "super::certificate::Entity")]
    Certificate,
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "joined_participant")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub seminar_id: Uuid,
    pub participant_email: String,
    pub participant_name: Option<String>,
    pub metadata: Option<Json>,
    pub joined_at: DateTimeUtc,
    pub present: bool,
    pub check_in: Option<DateTimeUtc>,
    pub check_out: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seminar::Entity",
        from = "Column::SeminarId",
        to   = "super::seminar::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Seminar,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::seminar::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seminar.def()
    }
}

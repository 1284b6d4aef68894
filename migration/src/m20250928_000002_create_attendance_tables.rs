use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Seminar {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum JoinedParticipant {
    Table,
    Id,
    SeminarId,
    ParticipantEmail,
    ParticipantName,
    Metadata,
    JoinedAt,
    Present,
    CheckIn,
    CheckOut,
}

#[derive(DeriveIden)]
enum Attendance {
    Table,
    Id,
    SeminarId,
    ParticipantEmail,
    TimeIn,
    TimeOut,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // FKs are declared inline so the same migration runs on sqlite,
        // which cannot add them through ALTER TABLE
        m.create_table(
            Table::create()
                .table(JoinedParticipant::Table)
                .if_not_exists()
                .col(ColumnDef::new(JoinedParticipant::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(JoinedParticipant::SeminarId).uuid().not_null())
                .col(ColumnDef::new(JoinedParticipant::ParticipantEmail).string().not_null())
                .col(ColumnDef::new(JoinedParticipant::ParticipantName).string())
                .col(ColumnDef::new(JoinedParticipant::Metadata).json_binary())
                .col(ColumnDef::new(JoinedParticipant::JoinedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(JoinedParticipant::Present).boolean().not_null().default(false))
                .col(ColumnDef::new(JoinedParticipant::CheckIn).timestamp_with_time_zone())
                .col(ColumnDef::new(JoinedParticipant::CheckOut).timestamp_with_time_zone())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_joined_participant_seminar")
                        .from(JoinedParticipant::Table, JoinedParticipant::SeminarId)
                        .to(Seminar::Table, Seminar::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_table(
            Table::create()
                .table(Attendance::Table)
                .if_not_exists()
                .col(ColumnDef::new(Attendance::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Attendance::SeminarId).uuid().not_null())
                .col(ColumnDef::new(Attendance::ParticipantEmail).string().not_null())
                .col(ColumnDef::new(Attendance::TimeIn).timestamp_with_time_zone())
                .col(ColumnDef::new(Attendance::TimeOut).timestamp_with_time_zone())
                .col(ColumnDef::new(Attendance::CreatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_attendance_seminar")
                        .from(Attendance::Table, Attendance::SeminarId)
                        .to(Seminar::Table, Seminar::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // One row per (seminar, participant); concurrent check-ins race on these
        m.create_index(
            Index::create()
                .name("uk_joined_participant_seminar_email")
                .table(JoinedParticipant::Table)
                .col(JoinedParticipant::SeminarId)
                .col(JoinedParticipant::ParticipantEmail)
                .unique()
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("uk_attendance_seminar_email")
                .table(Attendance::Table)
                .col(Attendance::SeminarId)
                .col(Attendance::ParticipantEmail)
                .unique()
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Attendance::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(JoinedParticipant::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Seminar {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Evaluation {
    Table,
    Id,
    SeminarId,
    ParticipantEmail,
    Answers,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Certificate {
    Table,
    Id,
    SeminarId,
    ParticipantEmail,
    ParticipantName,
    FileUrl,
    CertificateNumber,
    IssuedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Evaluation::Table)
                .if_not_exists()
                .col(ColumnDef::new(Evaluation::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Evaluation::SeminarId).uuid().not_null())
                .col(ColumnDef::new(Evaluation::ParticipantEmail).string().not_null())
                .col(ColumnDef::new(Evaluation::Answers).json_binary())
                .col(ColumnDef::new(Evaluation::CreatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_evaluation_seminar")
                        .from(Evaluation::Table, Evaluation::SeminarId)
                        .to(Seminar::Table, Seminar::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_table(
            Table::create()
                .table(Certificate::Table)
                .if_not_exists()
                .col(ColumnDef::new(Certificate::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Certificate::SeminarId).uuid().not_null())
                .col(ColumnDef::new(Certificate::ParticipantEmail).string().not_null())
                .col(ColumnDef::new(Certificate::ParticipantName).string())
                .col(ColumnDef::new(Certificate::FileUrl).string_len(1024))
                .col(ColumnDef::new(Certificate::CertificateNumber).string().not_null())
                .col(ColumnDef::new(Certificate::IssuedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_certificate_seminar")
                        .from(Certificate::Table, Certificate::SeminarId)
                        .to(Seminar::Table, Seminar::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("uk_evaluation_seminar_email")
                .table(Evaluation::Table)
                .col(Evaluation::SeminarId)
                .col(Evaluation::ParticipantEmail)
                .unique()
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("uk_certificate_seminar_email")
                .table(Certificate::Table)
                .col(Certificate::SeminarId)
                .col(Certificate::ParticipantEmail)
                .unique()
                .to_owned(),
        ).await?;

        // Certificate numbers are unique across every seminar, not per pair
        m.create_index(
            Index::create()
                .name("uk_certificate_number")
                .table(Certificate::Table)
                .col(Certificate::CertificateNumber)
                .unique()
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Certificate::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Evaluation::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}

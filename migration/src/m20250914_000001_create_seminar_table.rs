use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seminar::Table)
                    .col(
                        ColumnDef::new(Seminar::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Seminar::Title)
                            .string()
                            .not_null()
                    )
                    .col(ColumnDef::new(Seminar::Speaker).string())
                    .col(ColumnDef::new(Seminar::Capacity).integer())
                    .col(ColumnDef::new(Seminar::Duration).integer())
                    .col(ColumnDef::new(Seminar::Date).date())
                    .col(ColumnDef::new(Seminar::StartTime).string_len(32))
                    .col(ColumnDef::new(Seminar::EndTime).string_len(32))
                    .col(ColumnDef::new(Seminar::StartDatetime).timestamp_with_time_zone())
                    .col(ColumnDef::new(Seminar::EndDatetime).timestamp_with_time_zone())
                    .col(ColumnDef::new(Seminar::Semester).string())
                    .col(ColumnDef::new(Seminar::Questions).json_binary())
                    .col(ColumnDef::new(Seminar::Metadata).json_binary())
                    .col(ColumnDef::new(Seminar::CertificateTemplateUrl).string_len(1024))
                    .col(
                        ColumnDef::new(Seminar::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Seminar::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Seminar::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Seminar {
    Table,
    Id,
    Title,
    Speaker,
    Capacity,
    Duration,
    Date,
    StartTime,
    EndTime,
    StartDatetime,
    EndDatetime,
    Semester,
    Questions,
    Metadata,
    CertificateTemplateUrl,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Challenges::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Challenges::Email).string().not_null())
                    .col(ColumnDef::new(Challenges::Purpose).string().not_null())
                    .col(ColumnDef::new(Challenges::Passcode).string().not_null())
                    .col(
                        ColumnDef::new(Challenges::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Challenges::Verified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Challenges::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(Challenges::Email)
                            .col(Challenges::Purpose),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Challenges::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Challenges {
    Table,
    Email,
    Purpose,
    Passcode,
    ExpiresAt,
    Verified,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RdvExt::Table)
                    .if_not_exists()
                    .col(pk_auto(RdvExt::Id))
                    .col(big_integer_uniq(RdvExt::PartyId))
                    .col(big_integer(RdvExt::PartyNumber))
                    .col(string_null(RdvExt::InfobipExternalId))
                    .col(string_null(RdvExt::Email))
                    .col(string_null(RdvExt::FirstName))
                    .col(string_null(RdvExt::LastName))
                    .col(
                        timestamp_with_time_zone(RdvExt::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(RdvExt::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rdv_ext_infobip_external_id")
                    .table(RdvExt::Table)
                    .col(RdvExt::InfobipExternalId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RdvExt::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RdvExt {
    Table,
    Id,
    PartyId,
    PartyNumber,
    InfobipExternalId,
    Email,
    FirstName,
    LastName,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_rdv_ext_table::RdvExt;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PeopleExt::Table)
                    .if_not_exists()
                    .col(pk_auto(PeopleExt::Id))
                    .col(big_integer(PeopleExt::PartyId))
                    .col(big_integer(PeopleExt::PartyNumber))
                    .col(string_len(PeopleExt::Phone, 20))
                    .col(string_null(PeopleExt::InfobipId))
                    .col(
                        timestamp_with_time_zone(PeopleExt::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(PeopleExt::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_people_ext_party_id")
                            .from(PeopleExt::Table, PeopleExt::PartyId)
                            .to(RdvExt::Table, RdvExt::PartyId)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_people_party")
                    .table(PeopleExt::Table)
                    .col(PeopleExt::PartyId)
                    .col(PeopleExt::PartyNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_people_ext_phone")
                    .table(PeopleExt::Table)
                    .col(PeopleExt::Phone)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PeopleExt::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PeopleExt {
    Table,
    Id,
    PartyId,
    PartyNumber,
    Phone,
    InfobipId,
    CreatedAt,
    UpdatedAt,
}

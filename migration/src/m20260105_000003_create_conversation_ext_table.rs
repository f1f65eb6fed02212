use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_rdv_ext_table::RdvExt,
    m20260105_000002_create_people_ext_table::PeopleExt,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConversationExt::Table)
                    .if_not_exists()
                    .col(pk_auto(ConversationExt::Id))
                    .col(string(ConversationExt::ExternalId))
                    .col(integer(ConversationExt::PeopleId))
                    .col(integer(ConversationExt::RdvId))
                    .col(string_null(ConversationExt::State))
                    .col(string_null(ConversationExt::CreatedPhone))
                    .col(timestamp_with_time_zone_null(ConversationExt::NextSyncAt))
                    .col(timestamp_with_time_zone_null(ConversationExt::LastSyncAt))
                    .col(string_null(ConversationExt::CrmCode))
                    .col(string_null(ConversationExt::LeadId))
                    .col(
                        timestamp_with_time_zone(ConversationExt::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ConversationExt::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conversation_ext_people_id")
                            .from(ConversationExt::Table, ConversationExt::PeopleId)
                            .to(PeopleExt::Table, PeopleExt::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conversation_ext_rdv_id")
                            .from(ConversationExt::Table, ConversationExt::RdvId)
                            .to(RdvExt::Table, RdvExt::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_conversation_ext_external_id")
                    .table(ConversationExt::Table)
                    .col(ConversationExt::ExternalId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_conversation_ext_lead_id")
                    .table(ConversationExt::Table)
                    .col(ConversationExt::LeadId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConversationExt::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ConversationExt {
    Table,
    Id,
    ExternalId,
    PeopleId,
    RdvId,
    State,
    CreatedPhone,
    NextSyncAt,
    LastSyncAt,
    CrmCode,
    LeadId,
    CreatedAt,
    UpdatedAt,
}

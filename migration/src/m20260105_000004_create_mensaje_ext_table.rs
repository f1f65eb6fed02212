use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MensajeExt::Table)
                    .if_not_exists()
                    .col(pk_auto(MensajeExt::Id))
                    .col(string(MensajeExt::ConversationExternalId))
                    .col(string_null(MensajeExt::Kind))
                    .col(text_null(MensajeExt::Content))
                    .col(string_null(MensajeExt::Direction))
                    .col(string_null(MensajeExt::Sender))
                    .col(string_null(MensajeExt::InfobipMessageId))
                    .col(timestamp_with_time_zone_null(MensajeExt::SentAt))
                    .col(
                        timestamp_with_time_zone(MensajeExt::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(MensajeExt::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Messages point at the external conversation id, which repeats across
        // conversation rows, so the link is checked by the store instead of a foreign key.
        manager
            .create_index(
                Index::create()
                    .name("idx_mensaje_ext_conversation_external_id")
                    .table(MensajeExt::Table)
                    .col(MensajeExt::ConversationExternalId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MensajeExt::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MensajeExt {
    Table,
    Id,
    ConversationExternalId,
    Kind,
    Content,
    Direction,
    Sender,
    InfobipMessageId,
    SentAt,
    CreatedAt,
    UpdatedAt,
}

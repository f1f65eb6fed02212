//! Message data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::{NullOrdering, Order},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::message::{CreateMessageParams, Message};

/// Repository providing database operations for the `mensaje_ext` table.
pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new message with both timestamps set to now.
    ///
    /// The conversation is not checked here; `mensaje_ext` carries no foreign key.
    pub async fn create(&self, params: CreateMessageParams) -> Result<Message, DbErr> {
        let now = Utc::now();
        let entity = entity::mensaje_ext::ActiveModel {
            conversation_external_id: ActiveValue::Set(params.conversation_external_id),
            kind: ActiveValue::Set(params.kind),
            content: ActiveValue::Set(params.content),
            direction: ActiveValue::Set(params.direction),
            sender: ActiveValue::Set(params.sender),
            infobip_message_id: ActiveValue::Set(params.infobip_message_id),
            sent_at: ActiveValue::Set(params.sent_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(entity))
    }

    /// Gets every message in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Message>, DbErr> {
        let entities = entity::prelude::MensajeExt::find()
            .order_by_asc(entity::mensaje_ext::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Message::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Message>, DbErr> {
        let entity = entity::prelude::MensajeExt::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Message::from_entity))
    }

    /// Gets the timeline of a conversation.
    ///
    /// Messages are ordered by `sent_at` ascending with undated messages last, then by
    /// id.
    ///
    /// # Arguments
    /// - `external_id` - External id of the conversation
    ///
    /// # Returns
    /// - `Ok(Vec<Message>)` - Messages in timeline order, empty when none exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_conversation(&self, external_id: &str) -> Result<Vec<Message>, DbErr> {
        let entities = entity::prelude::MensajeExt::find()
            .filter(entity::mensaje_ext::Column::ConversationExternalId.eq(external_id))
            .order_by_with_nulls(
                entity::mensaje_ext::Column::SentAt,
                Order::Asc,
                NullOrdering::Last,
            )
            .order_by_asc(entity::mensaje_ext::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Message::from_entity).collect())
    }

    /// Counts the messages of a conversation.
    pub async fn count_by_conversation(&self, external_id: &str) -> Result<u64, DbErr> {
        entity::prelude::MensajeExt::find()
            .filter(entity::mensaje_ext::Column::ConversationExternalId.eq(external_id))
            .count(self.db)
            .await
    }

    /// Finds the most recently sent message of a conversation.
    ///
    /// Undated messages only win when no message carries `sent_at`; ties go to the
    /// greater id.
    pub async fn find_last_by_conversation(
        &self,
        external_id: &str,
    ) -> Result<Option<Message>, DbErr> {
        let entity = entity::prelude::MensajeExt::find()
            .filter(entity::mensaje_ext::Column::ConversationExternalId.eq(external_id))
            .order_by_with_nulls(
                entity::mensaje_ext::Column::SentAt,
                Order::Desc,
                NullOrdering::Last,
            )
            .order_by_desc(entity::mensaje_ext::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Message::from_entity))
    }
}

//! Message factory for creating test `mensaje_ext` rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test messages of a conversation.
pub struct MensajeExtFactory<'a> {
    db: &'a DatabaseConnection,
    conversation_external_id: String,
    kind: Option<String>,
    content: Option<String>,
    direction: Option<String>,
    sender: Option<String>,
    sent_at: Option<DateTime<Utc>>,
}

impl<'a> MensajeExtFactory<'a> {
    /// Creates a new MensajeExtFactory with default values.
    ///
    /// Defaults:
    /// - kind: `"MESSAGE"`
    /// - content: `"Message {id}"` where id is auto-incremented
    /// - direction: `"INBOUND"`
    /// - sender / sent_at: `None`
    pub fn new(db: &'a DatabaseConnection, conversation_external_id: impl Into<String>) -> Self {
        Self {
            db,
            conversation_external_id: conversation_external_id.into(),
            kind: Some("MESSAGE".to_string()),
            content: Some(format!("Message {}", next_id())),
            direction: Some("INBOUND".to_string()),
            sender: None,
            sent_at: None,
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    pub fn sent_at(mut self, sent_at: DateTime<Utc>) -> Self {
        self.sent_at = Some(sent_at);
        self
    }

    /// Builds and inserts the message row into the database.
    pub async fn build(self) -> Result<entity::mensaje_ext::Model, DbErr> {
        let now = Utc::now();
        entity::mensaje_ext::ActiveModel {
            conversation_external_id: ActiveValue::Set(self.conversation_external_id),
            kind: ActiveValue::Set(self.kind),
            content: ActiveValue::Set(self.content),
            direction: ActiveValue::Set(self.direction),
            sender: ActiveValue::Set(self.sender),
            infobip_message_id: ActiveValue::Set(None),
            sent_at: ActiveValue::Set(self.sent_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a message with default values for the given conversation.
pub async fn create_message(
    db: &DatabaseConnection,
    conversation_external_id: impl Into<String>,
) -> Result<entity::mensaje_ext::Model, DbErr> {
    MensajeExtFactory::new(db, conversation_external_id)
        .build()
        .await
}

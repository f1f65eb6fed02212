//! Message domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::message::{MessageDto, MessageTimelineItemDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub conversation_external_id: String,
    pub kind: Option<String>,
    pub content: Option<String>,
    pub direction: Option<String>,
    pub sender: Option<String>,
    pub infobip_message_id: Option<String>,
    /// Original timestamp from the messaging platform, used for timeline ordering.
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    pub fn from_entity(entity: entity::mensaje_ext::Model) -> Self {
        Self {
            id: entity.id,
            conversation_external_id: entity.conversation_external_id,
            kind: entity.kind,
            content: entity.content,
            direction: entity.direction,
            sender: entity.sender,
            infobip_message_id: entity.infobip_message_id,
            sent_at: entity.sent_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            conversation_external_id: self.conversation_external_id,
            kind: self.kind,
            content: self.content,
            direction: self.direction,
            sender: self.sender,
            infobip_message_id: self.infobip_message_id,
            sent_at: self.sent_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_timeline_item(self) -> MessageTimelineItemDto {
        MessageTimelineItemDto {
            id: self.id,
            kind: self.kind,
            content: self.content,
            direction: self.direction,
            sender: self.sender,
            sent_at: self.sent_at,
        }
    }
}

/// Parameters for recording a message of an existing conversation.
#[derive(Debug, Clone, Default)]
pub struct CreateMessageParams {
    pub conversation_external_id: String,
    pub kind: Option<String>,
    pub content: Option<String>,
    pub direction: Option<String>,
    pub sender: Option<String>,
    pub infobip_message_id: Option<String>,
    pub sent_at: Option<DateTime<Utc>>,
}

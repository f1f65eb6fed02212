use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::message::MessageTimelineItemDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ConversationDto {
    pub id: i32,
    pub external_id: String,
    pub people_id: i32,
    pub rdv_id: i32,
    pub state: Option<String>,
    pub created_phone: Option<String>,
    pub next_sync_at: Option<DateTime<Utc>>,
    pub last_sync_at: Option<DateTime<Utc>>,
    pub crm_code: Option<String>,
    pub lead_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Latest row of a conversation with its chronological message timeline.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ConversationDetailDto {
    pub id: i32,
    pub external_id: String,
    pub people_party_number: i64,
    pub crm_code: Option<String>,
    pub lead_id: Option<String>,
    pub state: Option<String>,
    pub created_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub total_messages: usize,
    pub messages: Vec<MessageTimelineItemDto>,
}

/// Activity of one person within one CRM program.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ProgramSummaryDto {
    pub crm_code: String,
    pub total_conversations: usize,
    pub active_conversations: usize,
    pub last_activity: Option<DateTime<Utc>>,
    pub lead_ids: Vec<String>,
}

/// Conversation row with its message count and a preview of the last message.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ConversationSummaryDto {
    pub id: i32,
    pub external_id: String,
    pub crm_code: Option<String>,
    pub lead_id: Option<String>,
    pub state: Option<String>,
    pub created_phone: Option<String>,
    pub total_messages: u64,
    /// First 100 characters of the last message, `...` appended when cut
    pub last_message_preview: Option<String>,
    pub last_message_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

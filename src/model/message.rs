use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MessageDto {
    pub id: i32,
    pub conversation_external_id: String,
    /// `MESSAGE` or `NOTE`
    pub kind: Option<String>,
    pub content: Option<String>,
    /// `INBOUND`, `OUTBOUND` or `INTERNAL`
    pub direction: Option<String>,
    pub sender: Option<String>,
    pub infobip_message_id: Option<String>,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MessageTimelineItemDto {
    pub id: i32,
    pub kind: Option<String>,
    pub content: Option<String>,
    pub direction: Option<String>,
    pub sender: Option<String>,
    pub sent_at: Option<DateTime<Utc>>,
}

//! Conversation domain models and parameters.
//!
//! The same external conversation can be recorded several times; lookups by external
//! id or lead id resolve to the most recently created row.

use chrono::{DateTime, Utc};

use crate::{
    model::conversation::{
        ConversationDetailDto, ConversationDto, ConversationSummaryDto, ProgramSummaryDto,
    },
    server::model::message::Message,
};

/// Conversation state counted as active in program summaries.
pub const ACTIVE_STATE: &str = "ACTIVE";

/// Characters of message content kept in a preview.
pub const PREVIEW_CHARS: usize = 100;

/// Truncates `content` to `PREVIEW_CHARS` characters, marking a cut with `...`.
pub fn message_preview(content: &str) -> String {
    let mut chars = content.chars();
    let preview: String = chars.by_ref().take(PREVIEW_CHARS).collect();

    if chars.next().is_some() {
        format!("{}...", preview)
    } else {
        preview
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: i32,
    /// Conversation id in the messaging platform.
    pub external_id: String,
    pub people_id: i32,
    pub rdv_id: i32,
    pub state: Option<String>,
    /// Phone the conversation was opened from.
    pub created_phone: Option<String>,
    pub next_sync_at: Option<DateTime<Utc>>,
    pub last_sync_at: Option<DateTime<Utc>>,
    pub crm_code: Option<String>,
    pub lead_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    pub fn from_entity(entity: entity::conversation_ext::Model) -> Self {
        Self {
            id: entity.id,
            external_id: entity.external_id,
            people_id: entity.people_id,
            rdv_id: entity.rdv_id,
            state: entity.state,
            created_phone: entity.created_phone,
            next_sync_at: entity.next_sync_at,
            last_sync_at: entity.last_sync_at,
            crm_code: entity.crm_code,
            lead_id: entity.lead_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ConversationDto {
        ConversationDto {
            id: self.id,
            external_id: self.external_id,
            people_id: self.people_id,
            rdv_id: self.rdv_id,
            state: self.state,
            created_phone: self.created_phone,
            next_sync_at: self.next_sync_at,
            last_sync_at: self.last_sync_at,
            crm_code: self.crm_code,
            lead_id: self.lead_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Conversation with the party number of its person and the message timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationDetail {
    pub conversation: Conversation,
    pub people_party_number: i64,
    /// Messages in chronological order.
    pub messages: Vec<Message>,
}

impl ConversationDetail {
    pub fn into_dto(self) -> ConversationDetailDto {
        let conversation = self.conversation;
        ConversationDetailDto {
            id: conversation.id,
            external_id: conversation.external_id,
            people_party_number: self.people_party_number,
            crm_code: conversation.crm_code,
            lead_id: conversation.lead_id,
            state: conversation.state,
            created_phone: conversation.created_phone,
            created_at: conversation.created_at,
            updated_at: conversation.updated_at,
            total_messages: self.messages.len(),
            messages: self
                .messages
                .into_iter()
                .map(Message::into_timeline_item)
                .collect(),
        }
    }
}

/// Activity of one person within one CRM program.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramSummary {
    pub crm_code: String,
    pub total_conversations: usize,
    /// Conversations in the `ACTIVE` state.
    pub active_conversations: usize,
    /// Latest `sent_at` over the program's messages.
    pub last_activity: Option<DateTime<Utc>>,
    /// Distinct lead ids in order of first appearance.
    pub lead_ids: Vec<String>,
}

impl ProgramSummary {
    pub fn into_dto(self) -> ProgramSummaryDto {
        ProgramSummaryDto {
            crm_code: self.crm_code,
            total_conversations: self.total_conversations,
            active_conversations: self.active_conversations,
            last_activity: self.last_activity,
            lead_ids: self.lead_ids,
        }
    }
}

/// Conversation row with message statistics instead of the full timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationSummary {
    pub conversation: Conversation,
    pub total_messages: u64,
    pub last_message_preview: Option<String>,
    pub last_message_at: Option<DateTime<Utc>>,
}

impl ConversationSummary {
    /// Summarizes `conversation` from its message count and most recent message.
    pub fn new(conversation: Conversation, total_messages: u64, last: Option<Message>) -> Self {
        let (last_message_preview, last_message_at) = match last {
            Some(message) => (
                message
                    .content
                    .as_deref()
                    .filter(|content| !content.is_empty())
                    .map(message_preview),
                message.sent_at,
            ),
            None => (None, None),
        };

        Self {
            conversation,
            total_messages,
            last_message_preview,
            last_message_at,
        }
    }

    pub fn into_dto(self) -> ConversationSummaryDto {
        let conversation = self.conversation;
        ConversationSummaryDto {
            id: conversation.id,
            external_id: conversation.external_id,
            crm_code: conversation.crm_code,
            lead_id: conversation.lead_id,
            state: conversation.state,
            created_phone: conversation.created_phone,
            total_messages: self.total_messages,
            last_message_preview: self.last_message_preview,
            last_message_at: self.last_message_at,
            created_at: conversation.created_at,
            updated_at: conversation.updated_at,
        }
    }
}

/// Parameters for provisioning a conversation between an existing person and RDV.
#[derive(Debug, Clone, Default)]
pub struct CreateConversationParams {
    pub external_id: String,
    pub people_id: i32,
    pub rdv_id: i32,
    pub state: Option<String>,
    pub created_phone: Option<String>,
    pub next_sync_at: Option<DateTime<Utc>>,
    pub last_sync_at: Option<DateTime<Utc>>,
    pub crm_code: Option<String>,
    pub lead_id: Option<String>,
}

impl CreateConversationParams {
    /// Whether the sync timestamps are ordered, `last_sync_at <= next_sync_at`.
    ///
    /// A window with either side unset is always ordered.
    pub fn has_ordered_sync_window(&self) -> bool {
        match (self.last_sync_at, self.next_sync_at) {
            (Some(last), Some(next)) => last <= next,
            _ => true,
        }
    }
}

/// Key used to find the latest row of a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationLookup {
    ExternalId(String),
    LeadId(String),
}

impl ConversationLookup {
    /// Picks the external id when present, otherwise the lead id.
    pub fn from_criteria(external_id: Option<String>, lead_id: Option<String>) -> Option<Self> {
        external_id
            .filter(|id| !id.is_empty())
            .map(Self::ExternalId)
            .or(lead_id.filter(|id| !id.is_empty()).map(Self::LeadId))
    }
}

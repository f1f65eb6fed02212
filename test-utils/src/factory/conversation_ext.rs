//! Conversation factory for creating test `conversation_ext` rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test conversations between a person and an RDV.
///
/// # Example
///
/// ```rust,ignore
/// let conversation = ConversationExtFactory::new(&db, people.id, rdv.id)
///     .external_id("conv-1")
///     .lead_id("lead-1")
///     .build()
///     .await?;
/// ```
pub struct ConversationExtFactory<'a> {
    db: &'a DatabaseConnection,
    external_id: String,
    people_id: i32,
    rdv_id: i32,
    state: Option<String>,
    crm_code: Option<String>,
    lead_id: Option<String>,
    next_sync_at: Option<DateTime<Utc>>,
    last_sync_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl<'a> ConversationExtFactory<'a> {
    /// Creates a new ConversationExtFactory with default values.
    ///
    /// Defaults:
    /// - external_id: `"conv-{id}"` where id is auto-incremented
    /// - state: `"ACTIVE"`
    /// - created_at: now
    /// - everything else: `None`
    pub fn new(db: &'a DatabaseConnection, people_id: i32, rdv_id: i32) -> Self {
        Self {
            db,
            external_id: format!("conv-{}", next_id()),
            people_id,
            rdv_id,
            state: Some("ACTIVE".to_string()),
            crm_code: None,
            lead_id: None,
            next_sync_at: None,
            last_sync_at: None,
            created_at: Utc::now(),
        }
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn crm_code(mut self, crm_code: impl Into<String>) -> Self {
        self.crm_code = Some(crm_code.into());
        self
    }

    pub fn lead_id(mut self, lead_id: impl Into<String>) -> Self {
        self.lead_id = Some(lead_id.into());
        self
    }

    pub fn sync_window(mut self, last_sync_at: DateTime<Utc>, next_sync_at: DateTime<Utc>) -> Self {
        self.last_sync_at = Some(last_sync_at);
        self.next_sync_at = Some(next_sync_at);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the conversation row into the database.
    pub async fn build(self) -> Result<entity::conversation_ext::Model, DbErr> {
        entity::conversation_ext::ActiveModel {
            external_id: ActiveValue::Set(self.external_id),
            people_id: ActiveValue::Set(self.people_id),
            rdv_id: ActiveValue::Set(self.rdv_id),
            state: ActiveValue::Set(self.state),
            created_phone: ActiveValue::Set(None),
            next_sync_at: ActiveValue::Set(self.next_sync_at),
            last_sync_at: ActiveValue::Set(self.last_sync_at),
            crm_code: ActiveValue::Set(self.crm_code),
            lead_id: ActiveValue::Set(self.lead_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a conversation with default values.
pub async fn create_conversation(
    db: &DatabaseConnection,
    people_id: i32,
    rdv_id: i32,
) -> Result<entity::conversation_ext::Model, DbErr> {
    ConversationExtFactory::new(db, people_id, rdv_id)
        .build()
        .await
}

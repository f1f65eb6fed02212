//! Conversation data repository for database operations.
//!
//! External conversation ids repeat whenever a conversation is recorded again, so
//! single-row lookups resolve to the latest row: greatest `created_at`, then greatest id.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::conversation::{
    Conversation, ConversationLookup, CreateConversationParams,
};

/// Repository providing database operations for the `conversation_ext` table.
pub struct ConversationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConversationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new conversation with both timestamps set to now.
    ///
    /// # Returns
    /// - `Ok(Conversation)` - The created conversation
    /// - `Err(DbErr)` - Database error, including a dangling `people_id` or `rdv_id`
    pub async fn create(&self, params: CreateConversationParams) -> Result<Conversation, DbErr> {
        let now = Utc::now();
        let entity = entity::conversation_ext::ActiveModel {
            external_id: ActiveValue::Set(params.external_id),
            people_id: ActiveValue::Set(params.people_id),
            rdv_id: ActiveValue::Set(params.rdv_id),
            state: ActiveValue::Set(params.state),
            created_phone: ActiveValue::Set(params.created_phone),
            next_sync_at: ActiveValue::Set(params.next_sync_at),
            last_sync_at: ActiveValue::Set(params.last_sync_at),
            crm_code: ActiveValue::Set(params.crm_code),
            lead_id: ActiveValue::Set(params.lead_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Conversation::from_entity(entity))
    }

    /// Gets every conversation row in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Conversation>, DbErr> {
        let entities = entity::prelude::ConversationExt::find()
            .order_by_asc(entity::conversation_ext::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Conversation::from_entity).collect())
    }

    /// Finds the most recently created row matching `lookup`.
    ///
    /// # Returns
    /// - `Ok(Some(Conversation))` - Latest matching row
    /// - `Ok(None)` - No row matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_latest(
        &self,
        lookup: &ConversationLookup,
    ) -> Result<Option<Conversation>, DbErr> {
        let condition = match lookup {
            ConversationLookup::ExternalId(external_id) => {
                entity::conversation_ext::Column::ExternalId.eq(external_id.as_str())
            }
            ConversationLookup::LeadId(lead_id) => {
                entity::conversation_ext::Column::LeadId.eq(lead_id.as_str())
            }
        };

        let entity = entity::prelude::ConversationExt::find()
            .filter(condition)
            .order_by_desc(entity::conversation_ext::Column::CreatedAt)
            .order_by_desc(entity::conversation_ext::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Conversation::from_entity))
    }

    /// Gets the conversations routed to the RDV with `rdv_id`, in insertion order.
    pub async fn get_by_rdv(&self, rdv_id: i32) -> Result<Vec<Conversation>, DbErr> {
        let entities = entity::prelude::ConversationExt::find()
            .filter(entity::conversation_ext::Column::RdvId.eq(rdv_id))
            .order_by_asc(entity::conversation_ext::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Conversation::from_entity).collect())
    }

    /// Gets the conversations of the person with `people_id`, in insertion order.
    pub async fn get_by_people(&self, people_id: i32) -> Result<Vec<Conversation>, DbErr> {
        let entities = entity::prelude::ConversationExt::find()
            .filter(entity::conversation_ext::Column::PeopleId.eq(people_id))
            .order_by_asc(entity::conversation_ext::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Conversation::from_entity).collect())
    }

    /// Gets the conversations of a person within one CRM program, most recently
    /// updated first.
    pub async fn get_by_people_and_crm_code(
        &self,
        people_id: i32,
        crm_code: &str,
    ) -> Result<Vec<Conversation>, DbErr> {
        let entities = entity::prelude::ConversationExt::find()
            .filter(entity::conversation_ext::Column::PeopleId.eq(people_id))
            .filter(entity::conversation_ext::Column::CrmCode.eq(crm_code))
            .order_by_desc(entity::conversation_ext::Column::UpdatedAt)
            .order_by_desc(entity::conversation_ext::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Conversation::from_entity).collect())
    }

    /// Gets the conversations linked to `lead_id`, most recently updated first.
    pub async fn get_by_lead_id(&self, lead_id: &str) -> Result<Vec<Conversation>, DbErr> {
        let entities = entity::prelude::ConversationExt::find()
            .filter(entity::conversation_ext::Column::LeadId.eq(lead_id))
            .order_by_desc(entity::conversation_ext::Column::UpdatedAt)
            .order_by_desc(entity::conversation_ext::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Conversation::from_entity).collect())
    }

    /// Checks whether any row carries `external_id`.
    pub async fn exists_external_id(&self, external_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::ConversationExt::find()
            .filter(entity::conversation_ext::Column::ExternalId.eq(external_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

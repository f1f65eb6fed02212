//! Entity store abstraction over the relational entity graph.
//!
//! Controllers and services depend on the `EntityStore` trait only. `SeaOrmStore` is the
//! SeaORM implementation: it composes the repositories, turns absent rows into
//! `StoreError::NotFound` and checks referential integrity before every write, inside the
//! same transaction as the insert.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{
        conversation::ConversationRepository, message::MessageRepository,
        people::PeopleRepository, rdv::RdvRepository,
    },
    error::{store::StoreError, AppError},
    model::{
        conversation::{Conversation, ConversationLookup, CreateConversationParams},
        message::{CreateMessageParams, Message},
        people::{CreatePeopleParams, People, PeopleLookup, MAX_PHONE_LEN},
        rdv::{CreateRdvParams, Rdv, RdvLookup},
    },
};

/// Read and provisioning access to RDVs, people, conversations and messages.
///
/// Lookups for a single entity fail with `StoreError::NotFound` when nothing matches.
/// Writes fail with `StoreError::ConstraintViolation` when they would break a
/// uniqueness rule or leave a dangling reference.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Every RDV ordered by id.
    async fn list_rdv(&self) -> Result<Vec<Rdv>, AppError>;

    /// Every person ordered by id.
    async fn list_people(&self) -> Result<Vec<People>, AppError>;

    /// Every conversation row ordered by id.
    async fn list_conversations(&self) -> Result<Vec<Conversation>, AppError>;

    /// Every message ordered by id.
    async fn list_messages(&self) -> Result<Vec<Message>, AppError>;

    async fn find_rdv(&self, lookup: &RdvLookup) -> Result<Rdv, AppError>;

    async fn find_people(&self, lookup: &PeopleLookup) -> Result<People, AppError>;

    async fn find_people_by_id(&self, id: i32) -> Result<People, AppError>;

    /// Latest conversation row by creation time, ties broken by the greater id.
    async fn find_latest_conversation(
        &self,
        lookup: &ConversationLookup,
    ) -> Result<Conversation, AppError>;

    async fn find_message(&self, id: i32) -> Result<Message, AppError>;

    /// People owned by the RDV with `party_id`.
    async fn people_of_rdv(&self, party_id: i64) -> Result<Vec<People>, AppError>;

    /// Distinct people with a conversation routed to the RDV with `rdv_id`.
    async fn people_contacted_by_rdv(&self, rdv_id: i32) -> Result<Vec<People>, AppError>;

    /// Distinct RDVs the person with `people_id` has conversations with.
    async fn rdvs_contacted_by_people(&self, people_id: i32) -> Result<Vec<Rdv>, AppError>;

    async fn conversations_of_rdv(&self, rdv_id: i32) -> Result<Vec<Conversation>, AppError>;

    async fn conversations_of_people(&self, people_id: i32)
        -> Result<Vec<Conversation>, AppError>;

    /// Conversations of a person within one CRM program, most recently updated first.
    async fn conversations_of_program(
        &self,
        people_id: i32,
        crm_code: &str,
    ) -> Result<Vec<Conversation>, AppError>;

    /// Conversations linked to a lead, most recently updated first.
    async fn conversations_of_lead(&self, lead_id: &str) -> Result<Vec<Conversation>, AppError>;

    /// Messages of a conversation by `sent_at`, undated messages last.
    async fn messages_of_conversation(&self, external_id: &str)
        -> Result<Vec<Message>, AppError>;

    async fn count_messages(&self, external_id: &str) -> Result<u64, AppError>;

    /// Most recently sent message of a conversation, if any.
    async fn last_message(&self, external_id: &str) -> Result<Option<Message>, AppError>;

    async fn create_rdv(&self, params: CreateRdvParams) -> Result<Rdv, AppError>;

    async fn create_people(&self, params: CreatePeopleParams) -> Result<People, AppError>;

    async fn create_conversation(
        &self,
        params: CreateConversationParams,
    ) -> Result<Conversation, AppError>;

    async fn create_message(&self, params: CreateMessageParams) -> Result<Message, AppError>;
}

/// `EntityStore` backed by a SeaORM connection pool.
#[derive(Clone)]
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Maps constraint failures reported by the database to `StoreError::ConstraintViolation`.
///
/// The explicit checks in `SeaOrmStore` cover the common cases; this catches writes the
/// database rejects on its own, such as rows committed by another process.
pub(crate) fn map_write_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            StoreError::violation(format!("unique constraint failed: {}", detail)).into()
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            StoreError::violation(format!("foreign key constraint failed: {}", detail)).into()
        }
        _ => err.into(),
    }
}

#[async_trait]
impl EntityStore for SeaOrmStore {
    async fn list_rdv(&self) -> Result<Vec<Rdv>, AppError> {
        Ok(RdvRepository::new(&self.db).get_all().await?)
    }

    async fn list_people(&self) -> Result<Vec<People>, AppError> {
        Ok(PeopleRepository::new(&self.db).get_all().await?)
    }

    async fn list_conversations(&self) -> Result<Vec<Conversation>, AppError> {
        Ok(ConversationRepository::new(&self.db).get_all().await?)
    }

    async fn list_messages(&self) -> Result<Vec<Message>, AppError> {
        Ok(MessageRepository::new(&self.db).get_all().await?)
    }

    async fn find_rdv(&self, lookup: &RdvLookup) -> Result<Rdv, AppError> {
        RdvRepository::new(&self.db)
            .find(lookup)
            .await?
            .ok_or_else(|| StoreError::not_found("RDV").into())
    }

    async fn find_people(&self, lookup: &PeopleLookup) -> Result<People, AppError> {
        PeopleRepository::new(&self.db)
            .find(lookup)
            .await?
            .ok_or_else(|| StoreError::not_found("People").into())
    }

    async fn find_people_by_id(&self, id: i32) -> Result<People, AppError> {
        PeopleRepository::new(&self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| StoreError::not_found("People").into())
    }

    async fn find_latest_conversation(
        &self,
        lookup: &ConversationLookup,
    ) -> Result<Conversation, AppError> {
        ConversationRepository::new(&self.db)
            .find_latest(lookup)
            .await?
            .ok_or_else(|| StoreError::not_found("Conversation").into())
    }

    async fn find_message(&self, id: i32) -> Result<Message, AppError> {
        MessageRepository::new(&self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| StoreError::not_found("Message").into())
    }

    async fn people_of_rdv(&self, party_id: i64) -> Result<Vec<People>, AppError> {
        Ok(PeopleRepository::new(&self.db)
            .get_by_party_id(party_id)
            .await?)
    }

    async fn people_contacted_by_rdv(&self, rdv_id: i32) -> Result<Vec<People>, AppError> {
        Ok(PeopleRepository::new(&self.db)
            .get_by_conversation_rdv(rdv_id)
            .await?)
    }

    async fn rdvs_contacted_by_people(&self, people_id: i32) -> Result<Vec<Rdv>, AppError> {
        Ok(RdvRepository::new(&self.db)
            .get_by_conversation_people(people_id)
            .await?)
    }

    async fn conversations_of_rdv(&self, rdv_id: i32) -> Result<Vec<Conversation>, AppError> {
        Ok(ConversationRepository::new(&self.db)
            .get_by_rdv(rdv_id)
            .await?)
    }

    async fn conversations_of_people(
        &self,
        people_id: i32,
    ) -> Result<Vec<Conversation>, AppError> {
        Ok(ConversationRepository::new(&self.db)
            .get_by_people(people_id)
            .await?)
    }

    async fn conversations_of_program(
        &self,
        people_id: i32,
        crm_code: &str,
    ) -> Result<Vec<Conversation>, AppError> {
        Ok(ConversationRepository::new(&self.db)
            .get_by_people_and_crm_code(people_id, crm_code)
            .await?)
    }

    async fn conversations_of_lead(&self, lead_id: &str) -> Result<Vec<Conversation>, AppError> {
        Ok(ConversationRepository::new(&self.db)
            .get_by_lead_id(lead_id)
            .await?)
    }

    async fn messages_of_conversation(
        &self,
        external_id: &str,
    ) -> Result<Vec<Message>, AppError> {
        Ok(MessageRepository::new(&self.db)
            .get_by_conversation(external_id)
            .await?)
    }

    async fn count_messages(&self, external_id: &str) -> Result<u64, AppError> {
        Ok(MessageRepository::new(&self.db)
            .count_by_conversation(external_id)
            .await?)
    }

    async fn last_message(&self, external_id: &str) -> Result<Option<Message>, AppError> {
        Ok(MessageRepository::new(&self.db)
            .find_last_by_conversation(external_id)
            .await?)
    }

    async fn create_rdv(&self, params: CreateRdvParams) -> Result<Rdv, AppError> {
        let txn = self.db.begin().await?;
        let repo = RdvRepository::new(&txn);

        if repo
            .find(&RdvLookup::PartyId(params.party_id))
            .await?
            .is_some()
        {
            return Err(StoreError::violation(format!(
                "RDV with party_id {} already exists",
                params.party_id
            ))
            .into());
        }

        let rdv = repo.create(params).await.map_err(map_write_err)?;
        txn.commit().await?;

        Ok(rdv)
    }

    async fn create_people(&self, params: CreatePeopleParams) -> Result<People, AppError> {
        let phone_len = params.phone.trim().chars().count();
        if phone_len == 0 || params.phone.chars().count() > MAX_PHONE_LEN {
            return Err(StoreError::violation(format!(
                "phone must be between 1 and {} characters",
                MAX_PHONE_LEN
            ))
            .into());
        }

        let txn = self.db.begin().await?;

        if RdvRepository::new(&txn)
            .find(&RdvLookup::PartyId(params.party_id))
            .await?
            .is_none()
        {
            return Err(StoreError::violation(format!(
                "no RDV with party_id {}",
                params.party_id
            ))
            .into());
        }

        let repo = PeopleRepository::new(&txn);

        if repo.exists(params.party_id, params.party_number).await? {
            return Err(StoreError::violation(format!(
                "people with party_id {} and party_number {} already exists",
                params.party_id, params.party_number
            ))
            .into());
        }

        let people = repo.create(params).await.map_err(map_write_err)?;
        txn.commit().await?;

        Ok(people)
    }

    async fn create_conversation(
        &self,
        params: CreateConversationParams,
    ) -> Result<Conversation, AppError> {
        if params.external_id.trim().is_empty() {
            return Err(StoreError::violation("external_id must not be empty").into());
        }

        if !params.has_ordered_sync_window() {
            return Err(
                StoreError::violation("last_sync_at must not be after next_sync_at").into(),
            );
        }

        let txn = self.db.begin().await?;

        if PeopleRepository::new(&txn)
            .find_by_id(params.people_id)
            .await?
            .is_none()
        {
            return Err(
                StoreError::violation(format!("no people with id {}", params.people_id)).into(),
            );
        }

        if RdvRepository::new(&txn)
            .find_by_id(params.rdv_id)
            .await?
            .is_none()
        {
            return Err(StoreError::violation(format!("no RDV with id {}", params.rdv_id)).into());
        }

        let conversation = ConversationRepository::new(&txn)
            .create(params)
            .await
            .map_err(map_write_err)?;
        txn.commit().await?;

        Ok(conversation)
    }

    async fn create_message(&self, params: CreateMessageParams) -> Result<Message, AppError> {
        let txn = self.db.begin().await?;

        if !ConversationRepository::new(&txn)
            .exists_external_id(&params.conversation_external_id)
            .await?
        {
            return Err(StoreError::violation(format!(
                "no conversation with external_id '{}'",
                params.conversation_external_id
            ))
            .into());
        }

        let message = MessageRepository::new(&txn)
            .create(params)
            .await
            .map_err(map_write_err)?;
        txn.commit().await?;

        Ok(message)
    }
}

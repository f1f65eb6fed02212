//! RDV domain models and parameters.
//!
//! An RDV is the root of the entity graph: people belong to it through their
//! `party_id` and conversations reference it by id.

use chrono::{DateTime, Utc};

use crate::{
    model::rdv::{RdvDto, RdvWithRelationsDto},
    server::model::{conversation::Conversation, people::People},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Rdv {
    pub id: i32,
    /// External party identifier, unique across RDVs.
    pub party_id: i64,
    pub party_number: i64,
    pub infobip_external_id: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rdv {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::rdv_ext::Model) -> Self {
        Self {
            id: entity.id,
            party_id: entity.party_id,
            party_number: entity.party_number,
            infobip_external_id: entity.infobip_external_id,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> RdvDto {
        RdvDto {
            id: self.id,
            party_id: self.party_id,
            party_number: self.party_number,
            infobip_external_id: self.infobip_external_id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// RDV with the people it owns and the conversations routed to it.
#[derive(Debug, Clone, PartialEq)]
pub struct RdvWithRelations {
    pub rdv: Rdv,
    /// People owned through `party_id`.
    pub people: Vec<People>,
    /// People reached through the RDV's conversations.
    pub contacted_people: Vec<People>,
    pub conversations: Vec<Conversation>,
}

impl RdvWithRelations {
    pub fn into_dto(self) -> RdvWithRelationsDto {
        RdvWithRelationsDto {
            rdv: self.rdv.into_dto(),
            people: self.people.into_iter().map(People::into_dto).collect(),
            contacted_people: self
                .contacted_people
                .into_iter()
                .map(People::into_dto)
                .collect(),
            conversations: self
                .conversations
                .into_iter()
                .map(Conversation::into_dto)
                .collect(),
        }
    }
}

/// Parameters for provisioning a new RDV.
#[derive(Debug, Clone)]
pub struct CreateRdvParams {
    pub party_id: i64,
    pub party_number: i64,
    pub infobip_external_id: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Key used to find a single RDV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RdvLookup {
    PartyId(i64),
    PartyNumber(i64),
    InfobipExternalId(String),
}

impl RdvLookup {
    /// Picks the first criterion present, in the order party id, party number,
    /// external id. An empty external id counts as absent.
    ///
    /// # Returns
    /// - `Some(RdvLookup)` - At least one criterion was provided
    /// - `None` - No criterion was provided
    pub fn from_criteria(
        party_id: Option<i64>,
        party_number: Option<i64>,
        infobip_external_id: Option<String>,
    ) -> Option<Self> {
        party_id
            .map(Self::PartyId)
            .or(party_number.map(Self::PartyNumber))
            .or(infobip_external_id
                .filter(|id| !id.is_empty())
                .map(Self::InfobipExternalId))
    }
}

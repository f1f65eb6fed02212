//! People domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::people::{PeopleDto, PeopleWithRelationsDto},
    server::model::{conversation::Conversation, rdv::Rdv},
};

/// Maximum length of a stored phone number.
pub const MAX_PHONE_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct People {
    pub id: i32,
    /// Party id of the owning RDV.
    pub party_id: i64,
    pub party_number: i64,
    pub phone: String,
    pub infobip_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl People {
    pub fn from_entity(entity: entity::people_ext::Model) -> Self {
        Self {
            id: entity.id,
            party_id: entity.party_id,
            party_number: entity.party_number,
            phone: entity.phone,
            infobip_id: entity.infobip_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PeopleDto {
        PeopleDto {
            id: self.id,
            party_id: self.party_id,
            party_number: self.party_number,
            phone: self.phone,
            infobip_id: self.infobip_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Person with their owning RDV and all of their conversations.
#[derive(Debug, Clone, PartialEq)]
pub struct PeopleWithRelations {
    pub people: People,
    /// Owner through `party_id`.
    pub rdv: Rdv,
    /// RDVs reached through the person's conversations.
    pub rdvs: Vec<Rdv>,
    pub conversations: Vec<Conversation>,
}

impl PeopleWithRelations {
    pub fn into_dto(self) -> PeopleWithRelationsDto {
        PeopleWithRelationsDto {
            people: self.people.into_dto(),
            rdv: self.rdv.into_dto(),
            rdvs: self.rdvs.into_iter().map(Rdv::into_dto).collect(),
            conversations: self
                .conversations
                .into_iter()
                .map(Conversation::into_dto)
                .collect(),
        }
    }
}

/// Parameters for provisioning a new person under an existing RDV.
#[derive(Debug, Clone)]
pub struct CreatePeopleParams {
    /// Must match the `party_id` of an existing RDV.
    pub party_id: i64,
    pub party_number: i64,
    pub phone: String,
    pub infobip_id: Option<String>,
}

/// Key used to find a single person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeopleLookup {
    PartyId(i64),
    PartyNumber(i64),
    InfobipId(String),
}

impl PeopleLookup {
    /// Picks the first criterion present, in the order party id, party number,
    /// Infobip id.
    pub fn from_criteria(
        party_id: Option<i64>,
        party_number: Option<i64>,
        infobip_id: Option<String>,
    ) -> Option<Self> {
        party_id
            .map(Self::PartyId)
            .or(party_number.map(Self::PartyNumber))
            .or(infobip_id.filter(|id| !id.is_empty()).map(Self::InfobipId))
    }
}

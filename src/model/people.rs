use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{conversation::ConversationDto, rdv::RdvDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PeopleDto {
    pub id: i32,
    pub party_id: i64,
    pub party_number: i64,
    pub phone: String,
    pub infobip_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Person together with the RDV owning it and all of their conversations.
///
/// `rdvs` are the distinct RDVs reached through those conversations.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PeopleWithRelationsDto {
    #[serde(flatten)]
    pub people: PeopleDto,
    pub rdv: RdvDto,
    pub rdvs: Vec<RdvDto>,
    pub conversations: Vec<ConversationDto>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{conversation::ConversationDto, people::PeopleDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RdvDto {
    pub id: i32,
    pub party_id: i64,
    pub party_number: i64,
    pub infobip_external_id: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// RDV together with the people it owns and every conversation routed to it.
///
/// `contacted_people` are the distinct people reached through those conversations,
/// whichever RDV owns them.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RdvWithRelationsDto {
    #[serde(flatten)]
    pub rdv: RdvDto,
    pub people: Vec<PeopleDto>,
    pub contacted_people: Vec<PeopleDto>,
    pub conversations: Vec<ConversationDto>,
}

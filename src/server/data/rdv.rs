//! RDV data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::rdv::{CreateRdvParams, Rdv, RdvLookup};

/// Repository providing database operations for the `rdv_ext` table.
pub struct RdvRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RdvRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new RDV with both timestamps set to now.
    ///
    /// # Returns
    /// - `Ok(Rdv)` - The created RDV
    /// - `Err(DbErr)` - Database error, including a duplicate `party_id`
    pub async fn create(&self, params: CreateRdvParams) -> Result<Rdv, DbErr> {
        let now = Utc::now();
        let entity = entity::rdv_ext::ActiveModel {
            party_id: ActiveValue::Set(params.party_id),
            party_number: ActiveValue::Set(params.party_number),
            infobip_external_id: ActiveValue::Set(params.infobip_external_id),
            email: ActiveValue::Set(params.email),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Rdv::from_entity(entity))
    }

    /// Gets every RDV in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Rdv>, DbErr> {
        let entities = entity::prelude::RdvExt::find()
            .order_by_asc(entity::rdv_ext::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Rdv::from_entity).collect())
    }

    /// Finds the first RDV matching `lookup`.
    ///
    /// `party_number` and `infobip_external_id` are not unique, so the row with the
    /// lowest id wins when several match.
    ///
    /// # Returns
    /// - `Ok(Some(Rdv))` - Matching RDV
    /// - `Ok(None)` - No RDV matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, lookup: &RdvLookup) -> Result<Option<Rdv>, DbErr> {
        let condition = match lookup {
            RdvLookup::PartyId(party_id) => entity::rdv_ext::Column::PartyId.eq(*party_id),
            RdvLookup::PartyNumber(party_number) => {
                entity::rdv_ext::Column::PartyNumber.eq(*party_number)
            }
            RdvLookup::InfobipExternalId(external_id) => {
                entity::rdv_ext::Column::InfobipExternalId.eq(external_id.as_str())
            }
        };

        let entity = entity::prelude::RdvExt::find()
            .filter(condition)
            .order_by_asc(entity::rdv_ext::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Rdv::from_entity))
    }

    /// Gets the distinct RDVs the person with `people_id` has conversations with,
    /// ordered by id.
    pub async fn get_by_conversation_people(&self, people_id: i32) -> Result<Vec<Rdv>, DbErr> {
        let entities = entity::prelude::RdvExt::find()
            .inner_join(entity::prelude::ConversationExt)
            .filter(entity::conversation_ext::Column::PeopleId.eq(people_id))
            .distinct()
            .order_by_asc(entity::rdv_ext::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Rdv::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Rdv>, DbErr> {
        let entity = entity::prelude::RdvExt::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Rdv::from_entity))
    }
}

//! People data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::people::{CreatePeopleParams, People, PeopleLookup};

/// Repository providing database operations for the `people_ext` table.
pub struct PeopleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PeopleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new person with both timestamps set to now.
    ///
    /// # Returns
    /// - `Ok(People)` - The created person
    /// - `Err(DbErr)` - Database error, including a `party_id` with no RDV
    pub async fn create(&self, params: CreatePeopleParams) -> Result<People, DbErr> {
        let now = Utc::now();
        let entity = entity::people_ext::ActiveModel {
            party_id: ActiveValue::Set(params.party_id),
            party_number: ActiveValue::Set(params.party_number),
            phone: ActiveValue::Set(params.phone),
            infobip_id: ActiveValue::Set(params.infobip_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(People::from_entity(entity))
    }

    /// Gets every person in insertion order.
    pub async fn get_all(&self) -> Result<Vec<People>, DbErr> {
        let entities = entity::prelude::PeopleExt::find()
            .order_by_asc(entity::people_ext::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(People::from_entity).collect())
    }

    /// Finds the first person matching `lookup`, lowest id first.
    pub async fn find(&self, lookup: &PeopleLookup) -> Result<Option<People>, DbErr> {
        let condition = match lookup {
            PeopleLookup::PartyId(party_id) => entity::people_ext::Column::PartyId.eq(*party_id),
            PeopleLookup::PartyNumber(party_number) => {
                entity::people_ext::Column::PartyNumber.eq(*party_number)
            }
            PeopleLookup::InfobipId(infobip_id) => {
                entity::people_ext::Column::InfobipId.eq(infobip_id.as_str())
            }
        };

        let entity = entity::prelude::PeopleExt::find()
            .filter(condition)
            .order_by_asc(entity::people_ext::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(People::from_entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<People>, DbErr> {
        let entity = entity::prelude::PeopleExt::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(People::from_entity))
    }

    /// Gets the people owned by the RDV with `party_id`, in insertion order.
    pub async fn get_by_party_id(&self, party_id: i64) -> Result<Vec<People>, DbErr> {
        let entities = entity::prelude::PeopleExt::find()
            .filter(entity::people_ext::Column::PartyId.eq(party_id))
            .order_by_asc(entity::people_ext::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(People::from_entity).collect())
    }

    /// Gets the distinct people with at least one conversation routed to the RDV with
    /// `rdv_id`, ordered by id.
    pub async fn get_by_conversation_rdv(&self, rdv_id: i32) -> Result<Vec<People>, DbErr> {
        let entities = entity::prelude::PeopleExt::find()
            .inner_join(entity::prelude::ConversationExt)
            .filter(entity::conversation_ext::Column::RdvId.eq(rdv_id))
            .distinct()
            .order_by_asc(entity::people_ext::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(People::from_entity).collect())
    }

    /// Checks whether a person with this `(party_id, party_number)` pair exists.
    pub async fn exists(&self, party_id: i64, party_number: i64) -> Result<bool, DbErr> {
        let count = entity::prelude::PeopleExt::find()
            .filter(entity::people_ext::Column::PartyId.eq(party_id))
            .filter(entity::people_ext::Column::PartyNumber.eq(party_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

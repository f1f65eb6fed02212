//! People factory for creating test `people_ext` rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test people owned by an RDV.
pub struct PeopleExtFactory<'a> {
    db: &'a DatabaseConnection,
    party_id: i64,
    party_number: i64,
    phone: String,
    infobip_id: Option<String>,
}

impl<'a> PeopleExtFactory<'a> {
    /// Creates a new PeopleExtFactory owned by the RDV with `party_id`.
    ///
    /// Defaults:
    /// - party_number: `{id}` where id is auto-incremented
    /// - phone: `"+5690{id}"`
    /// - infobip_id: `None`
    pub fn new(db: &'a DatabaseConnection, party_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            party_id,
            party_number: id as i64,
            phone: format!("+5690{}", id),
            infobip_id: None,
        }
    }

    pub fn party_number(mut self, party_number: i64) -> Self {
        self.party_number = party_number;
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn infobip_id(mut self, infobip_id: impl Into<String>) -> Self {
        self.infobip_id = Some(infobip_id.into());
        self
    }

    /// Builds and inserts the people row into the database.
    pub async fn build(self) -> Result<entity::people_ext::Model, DbErr> {
        let now = Utc::now();
        entity::people_ext::ActiveModel {
            party_id: ActiveValue::Set(self.party_id),
            party_number: ActiveValue::Set(self.party_number),
            phone: ActiveValue::Set(self.phone),
            infobip_id: ActiveValue::Set(self.infobip_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a person with default values owned by the RDV with `party_id`.
pub async fn create_people(
    db: &DatabaseConnection,
    party_id: i64,
) -> Result<entity::people_ext::Model, DbErr> {
    PeopleExtFactory::new(db, party_id).build().await
}

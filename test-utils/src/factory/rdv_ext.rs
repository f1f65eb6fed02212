//! RDV factory for creating test `rdv_ext` rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test RDVs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let rdv = RdvExtFactory::new(&db)
///     .party_id(1001)
///     .party_number(2001)
///     .build()
///     .await?;
/// ```
pub struct RdvExtFactory<'a> {
    db: &'a DatabaseConnection,
    party_id: i64,
    party_number: i64,
    infobip_external_id: Option<String>,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl<'a> RdvExtFactory<'a> {
    /// Creates a new RdvExtFactory with default values.
    ///
    /// Defaults:
    /// - party_id: `{id}` where id is auto-incremented
    /// - party_number: `100000 + {id}`
    /// - first_name: `"Rdv {id}"`
    /// - everything else: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id() as i64;
        Self {
            db,
            party_id: id,
            party_number: 100_000 + id,
            infobip_external_id: None,
            email: None,
            first_name: Some(format!("Rdv {}", id)),
            last_name: None,
        }
    }

    pub fn party_id(mut self, party_id: i64) -> Self {
        self.party_id = party_id;
        self
    }

    pub fn party_number(mut self, party_number: i64) -> Self {
        self.party_number = party_number;
        self
    }

    pub fn infobip_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.infobip_external_id = Some(external_id.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    /// Builds and inserts the RDV row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::rdv_ext::Model)` - Created RDV
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::rdv_ext::Model, DbErr> {
        let now = Utc::now();
        entity::rdv_ext::ActiveModel {
            party_id: ActiveValue::Set(self.party_id),
            party_number: ActiveValue::Set(self.party_number),
            infobip_external_id: ActiveValue::Set(self.infobip_external_id),
            email: ActiveValue::Set(self.email),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an RDV with default values.
///
/// Shorthand for `RdvExtFactory::new(db).build().await`.
pub async fn create_rdv(db: &DatabaseConnection) -> Result<entity::rdv_ext::Model, DbErr> {
    RdvExtFactory::new(db).build().await
}

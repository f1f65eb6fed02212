use crate::server::{
    data::store::EntityStore,
    error::AppError,
    model::rdv::{Rdv, RdvLookup, RdvWithRelations},
};

pub struct RdvService<'a> {
    store: &'a dyn EntityStore,
}

impl<'a> RdvService<'a> {
    pub fn new(store: &'a dyn EntityStore) -> Self {
        Self { store }
    }

    /// Gets every RDV ordered by id
    pub async fn list(&self) -> Result<Vec<Rdv>, AppError> {
        self.store.list_rdv().await
    }

    /// Finds an RDV and loads the people it owns, the conversations routed to it and
    /// the people reached through those conversations.
    ///
    /// # Returns
    /// - `Ok(RdvWithRelations)` - RDV with its relations
    /// - `Err(AppError::StoreErr(NotFound))` - No RDV matches `lookup`
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn search(&self, lookup: &RdvLookup) -> Result<RdvWithRelations, AppError> {
        let rdv = self.store.find_rdv(lookup).await?;
        let people = self.store.people_of_rdv(rdv.party_id).await?;
        let contacted_people = self.store.people_contacted_by_rdv(rdv.id).await?;
        let conversations = self.store.conversations_of_rdv(rdv.id).await?;

        Ok(RdvWithRelations {
            rdv,
            people,
            contacted_people,
            conversations,
        })
    }
}

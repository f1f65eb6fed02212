use crate::server::{
    data::store::EntityStore,
    error::AppError,
    model::{
        people::{People, PeopleLookup, PeopleWithRelations},
        rdv::RdvLookup,
    },
};

pub struct PeopleService<'a> {
    store: &'a dyn EntityStore,
}

impl<'a> PeopleService<'a> {
    pub fn new(store: &'a dyn EntityStore) -> Self {
        Self { store }
    }

    /// Gets every person ordered by id
    pub async fn list(&self) -> Result<Vec<People>, AppError> {
        self.store.list_people().await
    }

    /// Finds a person and loads their owning RDV, all of their conversations and the
    /// RDVs those conversations are routed to.
    ///
    /// # Returns
    /// - `Ok(PeopleWithRelations)` - Person with relations
    /// - `Err(AppError::StoreErr(NotFound))` - No person matches `lookup`
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn search(&self, lookup: &PeopleLookup) -> Result<PeopleWithRelations, AppError> {
        let people = self.store.find_people(lookup).await?;
        let rdv = self
            .store
            .find_rdv(&RdvLookup::PartyId(people.party_id))
            .await?;
        let rdvs = self.store.rdvs_contacted_by_people(people.id).await?;
        let conversations = self.store.conversations_of_people(people.id).await?;

        Ok(PeopleWithRelations {
            people,
            rdv,
            rdvs,
            conversations,
        })
    }
}

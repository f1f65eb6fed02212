use crate::server::{data::store::EntityStore, error::AppError, model::message::Message};

pub struct MessageService<'a> {
    store: &'a dyn EntityStore,
}

impl<'a> MessageService<'a> {
    pub fn new(store: &'a dyn EntityStore) -> Self {
        Self { store }
    }

    /// Gets every message ordered by id
    pub async fn list(&self) -> Result<Vec<Message>, AppError> {
        self.store.list_messages().await
    }

    pub async fn get(&self, id: i32) -> Result<Message, AppError> {
        self.store.find_message(id).await
    }

    /// Gets the timeline of a conversation, empty when it has no messages.
    pub async fn by_conversation(&self, external_id: &str) -> Result<Vec<Message>, AppError> {
        self.store.messages_of_conversation(external_id).await
    }
}

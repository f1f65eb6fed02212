use crate::server::{
    data::store::{EntityStore, SeaOrmStore},
    error::{store::StoreError, AppError},
    model::{
        conversation::{ConversationLookup, CreateConversationParams},
        message::CreateMessageParams,
        people::{CreatePeopleParams, PeopleLookup},
        rdv::{CreateRdvParams, RdvLookup},
    },
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

mod create_message;
mod create_rdv;
mod lookup;
mod map_write_err;
mod transaction;

async fn setup() -> (TestContext, SeaOrmStore) {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let store = SeaOrmStore::new(test.db.clone().unwrap());
    (test, store)
}

fn rdv_params(party_id: i64) -> CreateRdvParams {
    CreateRdvParams {
        party_id,
        party_number: party_id + 1000,
        infobip_external_id: None,
        email: None,
        first_name: Some("Rdv".to_string()),
        last_name: None,
    }
}

fn people_params(party_id: i64, party_number: i64, phone: &str) -> CreatePeopleParams {
    CreatePeopleParams {
        party_id,
        party_number,
        phone: phone.to_string(),
        infobip_id: None,
    }
}

fn is_violation<T>(result: &Result<T, AppError>) -> bool {
    matches!(
        result,
        Err(AppError::StoreErr(StoreError::ConstraintViolation(_)))
    )
}

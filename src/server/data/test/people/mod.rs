use crate::server::{data::people::PeopleRepository, model::people::PeopleLookup};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod exists;
mod find;
mod get_by_party_id;
mod get_by_conversation_rdv;

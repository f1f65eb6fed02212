use crate::server::{
    data::rdv::RdvRepository,
    model::rdv::{CreateRdvParams, RdvLookup},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod get_all;
mod get_by_conversation_people;

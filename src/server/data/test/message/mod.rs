use crate::server::data::message::MessageRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, mensaje_ext::MensajeExtFactory},
};

mod get_by_conversation;

use crate::server::{
    data::conversation::ConversationRepository, model::conversation::ConversationLookup,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, conversation_ext::ConversationExtFactory, helpers},
};

mod find_latest;
mod get_by_parent;

use crate::server::{
    data::token::TokenRepository,
    model::token::{CreateTokenParam, BEARER_TOKEN_TYPE},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_expired_by_user;
mod find_by_token;

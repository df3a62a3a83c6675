use crate::server::{
    data::user::UserRepository, model::user::CreateUserParam, util::password::verify_password,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod find_by_username;

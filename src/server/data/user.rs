//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing the credentials of users
//! allowed to sign in. Passwords are hashed here, before anything reaches the database.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::{
    model::user::{CreateUserParam, User},
    util::password::hash_password,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user, hashing the password before persisting it.
    ///
    /// The username is trimmed.
    ///
    /// # Arguments
    /// - `param` - Username and plain-text password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr::Custom)` - Password hashing failed
    /// - `Err(DbErr)` - Database error during insert (including a duplicate username)
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let password_hash = hash_password(&param.password)
            .await
            .map_err(|e| DbErr::Custom(format!("Failed to hash password: {}", e)))?;

        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username.trim().to_string()),
            password: ActiveValue::Set(password_hash),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by username.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }
}

//! User domain models and parameters.

/// Stored credentials of a user allowed to sign in.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Argon2 PHC string, never the plain password.
    pub password_hash: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password,
        }
    }
}

/// Parameters for creating a user.
///
/// `password` is plain text; the repository hashes it before it is persisted.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub password: String,
}

/// Credentials submitted to the sign in endpoint.
#[derive(Debug, Clone)]
pub struct SignInParam {
    pub username: String,
    pub password: String,
}

impl From<crate::model::auth::SignInDto> for SignInParam {
    fn from(dto: crate::model::auth::SignInDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
        }
    }
}

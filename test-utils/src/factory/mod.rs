//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let token = factory::token::create_token(&db, user.id).await?;
//!
//! let comanda = factory::comanda::ComandaFactory::new(&db)
//!     .owner_id("1")
//!     .product(1, "Burger", "10.2")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `token` - Create bearer token entities
//! - `comanda` - Create comandas together with their line items
//! - `helpers` - Unique id generation shared by the factories

pub mod comanda;
pub mod helpers;
pub mod token;
pub mod user;

pub use comanda::create_comanda;
pub use token::create_token;
pub use user::create_user;

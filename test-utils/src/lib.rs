//! Comandas Test Utils
//!
//! Provides shared testing utilities for the comandas API. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases and customizable
//! table schemas, plus factories that insert rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for users, tokens and comandas
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_comanda_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_comanda_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let comanda = factory::comanda::create_comanda(db, "1").await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

//! Domain models and operation-specific parameter types.
//!
//! Controllers convert DTOs into the params defined here; repositories convert
//! entity models into the domain types.

pub mod comanda;
pub mod token;
pub mod user;

//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They work with domain
//! models, turn repository outcomes into request-level errors (`NotFound`,
//! `IncompletePayload`, `Unauthorized`) and coordinate multi-step operations such as
//! credential verification followed by token issue.

pub mod auth;
pub mod comanda;

//! Request guards run at the start of protected handlers.

pub mod auth;

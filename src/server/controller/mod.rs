//! HTTP request handlers.
//!
//! Each handler runs the auth guard first (where the route is protected), converts
//! the request body into server-side params, calls a service and converts the
//! resulting domain model back into a DTO.

pub mod auth;
pub mod comanda;

//! Wire-level DTOs exchanged with HTTP clients.
//!
//! Field names here follow the public API (Portuguese, camelCase). The server-side
//! domain models in `server::model` own the conversion to and from these types.

pub mod api;
pub mod auth;
pub mod comanda;

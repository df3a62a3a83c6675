//! SeaORM entity definitions for the comanda service.
//!
//! One module per table. Schema changes are made in the `migration` crate and the
//! entities here are kept in sync by hand.

pub mod prelude;

pub mod comanda;
pub mod comanda_product;
pub mod token;
pub mod user;

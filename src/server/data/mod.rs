//! Database repository layer.
//!
//! Repositories wrap a `&DatabaseConnection` and perform all queries, inserts and
//! deletes through SeaORM entities, converting entity models into domain models at
//! this boundary. They return `DbErr` and leave HTTP semantics to the layers above.

pub mod comanda;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;

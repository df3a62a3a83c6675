use crate::server::{
    data::comanda::ComandaRepository,
    model::comanda::{CreateComandaParams, Product},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod append_products;
mod create;
mod delete_by_owner;
mod find_all;
mod find_by_owner;

fn product(id: i64, name: &str, price: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        price: price.parse().unwrap(),
    }
}

fn victor_params() -> CreateComandaParams {
    CreateComandaParams {
        owner_id: "1".to_string(),
        owner_name: "Victor".to_string(),
        owner_phone: "47988591570".to_string(),
        products: vec![product(1, "Burger", "10.2")],
    }
}

use super::*;

/// Tests appending a product to an existing comanda.
///
/// Expected: Ok(1) and the product is the last line item
#[tokio::test]
async fn appends_product_at_the_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comanda_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComandaRepository::new(db);
    repo.create(victor_params()).await?;

    let matched = repo
        .append_products("1", vec![product(2, "Soda", "5.0")])
        .await?;

    let comanda = repo.find_by_owner("1").await?.unwrap();
    assert_eq!(matched, 1);
    assert_eq!(comanda.products.len(), 2);
    assert_eq!(comanda.products.last(), Some(&product(2, "Soda", "5.0")));

    Ok(())
}

/// Tests appending several products keeps their order.
///
/// Expected: Ok(1) with all products appended in order
#[tokio::test]
async fn appends_products_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comanda_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComandaRepository::new(db);
    repo.create(victor_params()).await?;

    repo.append_products(
        "1",
        vec![product(2, "Soda", "5.0"), product(3, "Fries", "7.5")],
    )
    .await?;

    let comanda = repo.find_by_owner("1").await?.unwrap();
    let ids: Vec<i64> = comanda.products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    Ok(())
}

/// Tests appending to an owner without comandas.
///
/// Expected: Ok(0) and nothing written
#[tokio::test]
async fn returns_zero_for_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comanda_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let matched = ComandaRepository::new(db)
        .append_products("404", vec![product(2, "Soda", "5.0")])
        .await?;

    assert_eq!(matched, 0);
    assert_eq!(entity::prelude::ComandaProduct::find().count(db).await?, 0);

    Ok(())
}

/// Tests only the oldest comanda of the owner receives the products.
///
/// Expected: Ok(1) with the second comanda left untouched
#[tokio::test]
async fn appends_only_to_oldest_comanda() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comanda_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::comanda::create_comanda(db, "1").await?;
    let second = factory::comanda::create_comanda(db, "1").await?;

    ComandaRepository::new(db)
        .append_products("1", vec![product(2, "Soda", "5.0")])
        .await?;

    let products = entity::prelude::ComandaProduct::find().all(db).await?;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].comanda_id, first.id);
    assert_ne!(products[0].comanda_id, second.id);

    Ok(())
}

/// Tests appending an empty product list to an existing comanda.
///
/// Expected: Ok(1) with the line items unchanged
#[tokio::test]
async fn empty_list_still_matches_existing_comanda() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comanda_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComandaRepository::new(db);
    repo.create(victor_params()).await?;

    let matched = repo.append_products("1", Vec::new()).await?;

    assert_eq!(matched, 1);
    assert_eq!(repo.find_by_owner("1").await?.unwrap().products.len(), 1);

    Ok(())
}

use super::*;

/// Tests listing an empty store.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list_when_no_comandas() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comanda_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let comandas = ComandaRepository::new(db).find_all().await?;

    assert!(comandas.is_empty());

    Ok(())
}

/// Tests every comanda is listed with its own line items.
///
/// Verifies that products are grouped under the comanda they belong to and that
/// comandas come back in creation order.
///
/// Expected: Ok(Vec) with two comandas holding 2 and 0 products
#[tokio::test]
async fn returns_comandas_with_their_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comanda_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::comanda::ComandaFactory::new(db)
        .owner_id("1")
        .product(1, "Burger", "10.2")
        .product(2, "Soda", "5.0")
        .build()
        .await?;
    factory::comanda::create_comanda(db, "2").await?;

    let comandas = ComandaRepository::new(db).find_all().await?;

    assert_eq!(comandas.len(), 2);
    assert_eq!(comandas[0].owner_id, "1");
    assert_eq!(
        comandas[0].products,
        vec![product(1, "Burger", "10.2"), product(2, "Soda", "5.0")]
    );
    assert_eq!(comandas[1].owner_id, "2");
    assert!(comandas[1].products.is_empty());

    Ok(())
}

/// Tests a store without the comanda tables reports an error.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_without_tables() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ComandaRepository::new(db).find_all().await;

    assert!(result.is_err());
}

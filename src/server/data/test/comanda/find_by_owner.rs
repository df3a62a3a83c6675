use super::*;

/// Tests finding the comanda of an owner.
///
/// Expected: Ok(Some(Comanda)) with owner fields and products
#[tokio::test]
async fn finds_comanda_of_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comanda_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::comanda::ComandaFactory::new(db)
        .owner_id("1")
        .owner_name("Victor")
        .owner_phone("47988591570")
        .product(1, "Burger", "10.2")
        .build()
        .await?;

    let comanda = ComandaRepository::new(db).find_by_owner("1").await?.unwrap();

    assert_eq!(comanda.owner_name, "Victor");
    assert_eq!(comanda.owner_phone, "47988591570");
    assert_eq!(comanda.products, vec![product(1, "Burger", "10.2")]);

    Ok(())
}

/// Tests querying an owner without comandas.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comanda_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::comanda::create_comanda(db, "1").await?;

    let result = ComandaRepository::new(db).find_by_owner("2").await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests the oldest comanda wins when an owner has several.
///
/// Expected: Ok(Some(Comanda)) for the first created comanda
#[tokio::test]
async fn returns_oldest_comanda_of_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comanda_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::comanda::ComandaFactory::new(db)
        .owner_id("1")
        .owner_name("First")
        .build()
        .await?;
    factory::comanda::ComandaFactory::new(db)
        .owner_id("1")
        .owner_name("Second")
        .build()
        .await?;

    let comanda = ComandaRepository::new(db).find_by_owner("1").await?.unwrap();

    assert_eq!(comanda.id, first.id);
    assert_eq!(comanda.owner_name, "First");

    Ok(())
}

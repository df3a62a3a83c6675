use super::*;

/// Tests deleting the comanda of an owner.
///
/// Verifies that the comanda and its line items are removed and a later lookup
/// finds nothing.
///
/// Expected: Ok(1) then find_by_owner returns None
#[tokio::test]
async fn deletes_comanda_and_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comanda_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComandaRepository::new(db);
    repo.create(victor_params()).await?;

    let removed = repo.delete_by_owner("1").await?;

    assert_eq!(removed, 1);
    assert!(repo.find_by_owner("1").await?.is_none());
    assert_eq!(entity::prelude::ComandaProduct::find().count(db).await?, 0);

    Ok(())
}

/// Tests every comanda of the owner is removed, others are kept.
///
/// Expected: Ok(2) with the other owner's comanda still present
#[tokio::test]
async fn deletes_all_comandas_of_owner_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comanda_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::comanda::create_comanda(db, "1").await?;
    factory::comanda::create_comanda(db, "1").await?;
    factory::comanda::create_comanda(db, "2").await?;

    let repo = ComandaRepository::new(db);
    let removed = repo.delete_by_owner("1").await?;

    assert_eq!(removed, 2);
    assert!(repo.find_by_owner("2").await?.is_some());

    Ok(())
}

/// Tests deleting for an owner without comandas.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comanda_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let removed = ComandaRepository::new(db).delete_by_owner("404").await?;

    assert_eq!(removed, 0);

    Ok(())
}

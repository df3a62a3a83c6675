use super::*;

/// Tests creating a comanda then reading it back.
///
/// Verifies that the stored comanda returned by `create` equals the one found by
/// owner id afterwards.
///
/// Expected: Ok(Comanda) identical to the fetched comanda
#[tokio::test]
async fn created_comanda_round_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comanda_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComandaRepository::new(db);
    let created = repo.create(victor_params()).await?;
    let fetched = repo.find_by_owner("1").await?.unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.owner_id, "1");
    assert_eq!(fetched.products, vec![product(1, "Burger", "10.2")]);

    Ok(())
}

/// Tests creating a comanda without products.
///
/// Expected: Ok(Comanda) with an empty product list
#[tokio::test]
async fn creates_comanda_without_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comanda_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let params = CreateComandaParams {
        products: vec![],
        ..victor_params()
    };

    let created = ComandaRepository::new(db).create(params).await?;

    assert!(created.products.is_empty());

    Ok(())
}

/// Tests a failed product insert rolls back the comanda row.
///
/// The product table is missing, so inserting the line items fails after the
/// comanda row was written inside the transaction.
///
/// Expected: Err(DbErr) and no comanda persisted
#[tokio::test]
async fn rolls_back_when_products_fail() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Comanda)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ComandaRepository::new(db).create(victor_params()).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Comanda::find().count(db).await?, 0);

    Ok(())
}

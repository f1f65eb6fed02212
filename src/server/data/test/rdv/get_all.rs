use super::*;

/// Tests getting all RDVs when several exist.
///
/// Verifies that rows come back in insertion order.
///
/// Expected: Ok with all RDVs ordered by id
#[tokio::test]
async fn gets_all_rdv_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_rdv(db).await?;
    let second = factory::create_rdv(db).await?;
    let third = factory::create_rdv(db).await?;

    let repo = RdvRepository::new(db);
    let rdvs = repo.get_all().await?;

    let ids: Vec<i32> = rdvs.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests getting all RDVs from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_rdv() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RdvRepository::new(db);
    let rdvs = repo.get_all().await?;

    assert!(rdvs.is_empty());

    Ok(())
}

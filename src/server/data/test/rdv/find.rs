use super::*;

/// Tests finding an RDV by each supported key.
///
/// Expected: Ok(Some) with the matching RDV for every lookup variant
#[tokio::test]
async fn finds_rdv_by_each_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_rdv(db).await?;
    let target = factory::rdv_ext::RdvExtFactory::new(db)
        .infobip_external_id("agent-42")
        .build()
        .await?;

    let repo = RdvRepository::new(db);

    let by_party_id = repo.find(&RdvLookup::PartyId(target.party_id)).await?;
    let by_party_number = repo
        .find(&RdvLookup::PartyNumber(target.party_number))
        .await?;
    let by_external_id = repo
        .find(&RdvLookup::InfobipExternalId("agent-42".to_string()))
        .await?;

    assert_eq!(by_party_id.map(|r| r.id), Some(target.id));
    assert_eq!(by_party_number.map(|r| r.id), Some(target.id));
    assert_eq!(by_external_id.map(|r| r.id), Some(target.id));

    Ok(())
}

/// Tests that a shared party number resolves to the oldest RDV.
///
/// Expected: Ok(Some) with the lowest id
#[tokio::test]
async fn returns_lowest_id_for_shared_party_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::rdv_ext::RdvExtFactory::new(db)
        .party_number(555)
        .build()
        .await?;
    factory::rdv_ext::RdvExtFactory::new(db)
        .party_number(555)
        .build()
        .await?;

    let repo = RdvRepository::new(db);
    let found = repo.find(&RdvLookup::PartyNumber(555)).await?;

    assert_eq!(found.map(|r| r.id), Some(first.id));

    Ok(())
}

/// Tests finding an RDV that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_rdv(db).await?;

    let repo = RdvRepository::new(db);

    assert!(repo.find(&RdvLookup::PartyId(-1)).await?.is_none());
    assert!(repo.find_by_id(9999).await?.is_none());

    Ok(())
}

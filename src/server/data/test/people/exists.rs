use super::*;

/// Tests the `(party_id, party_number)` existence check.
///
/// Expected: true only for the exact pair
#[tokio::test]
async fn checks_party_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rdv = factory::create_rdv(db).await?;
    factory::people_ext::PeopleExtFactory::new(db, rdv.party_id)
        .party_number(77)
        .build()
        .await?;

    let repo = PeopleRepository::new(db);

    assert!(repo.exists(rdv.party_id, 77).await?);
    assert!(!repo.exists(rdv.party_id, 78).await?);
    assert!(!repo.exists(rdv.party_id + 1, 77).await?);

    Ok(())
}

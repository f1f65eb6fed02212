use super::*;

/// Tests getting the people owned by an RDV.
///
/// Verifies that people of other RDVs are excluded.
///
/// Expected: Ok with only the RDV's people, ordered by id
#[tokio::test]
async fn gets_people_of_rdv() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rdv = factory::create_rdv(db).await?;
    let other_rdv = factory::create_rdv(db).await?;
    let first = factory::create_people(db, rdv.party_id).await?;
    factory::create_people(db, other_rdv.party_id).await?;
    let second = factory::create_people(db, rdv.party_id).await?;

    let repo = PeopleRepository::new(db);
    let people = repo.get_by_party_id(rdv.party_id).await?;

    let ids: Vec<i32> = people.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests getting people of an RDV that owns none.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_rdv_without_people() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rdv = factory::create_rdv(db).await?;

    let repo = PeopleRepository::new(db);
    let people = repo.get_by_party_id(rdv.party_id).await?;

    assert!(people.is_empty());

    Ok(())
}

use super::*;

/// Tests finding a person by each supported key.
///
/// Expected: Ok(Some) with the matching person for every lookup variant
#[tokio::test]
async fn finds_people_by_each_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rdv = factory::create_rdv(db).await?;
    let other_rdv = factory::create_rdv(db).await?;
    factory::create_people(db, other_rdv.party_id).await?;
    let target = factory::people_ext::PeopleExtFactory::new(db, rdv.party_id)
        .infobip_id("ib-person-1")
        .build()
        .await?;

    let repo = PeopleRepository::new(db);

    let by_party_id = repo.find(&PeopleLookup::PartyId(rdv.party_id)).await?;
    let by_party_number = repo
        .find(&PeopleLookup::PartyNumber(target.party_number))
        .await?;
    let by_infobip_id = repo
        .find(&PeopleLookup::InfobipId("ib-person-1".to_string()))
        .await?;

    assert_eq!(by_party_id.map(|p| p.id), Some(target.id));
    assert_eq!(by_party_number.map(|p| p.id), Some(target.id));
    assert_eq!(by_infobip_id.map(|p| p.id), Some(target.id));

    Ok(())
}

/// Tests finding a person by primary key.
///
/// Expected: Ok(Some) for an existing id, Ok(None) otherwise
#[tokio::test]
async fn finds_people_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rdv = factory::create_rdv(db).await?;
    let people = factory::create_people(db, rdv.party_id).await?;

    let repo = PeopleRepository::new(db);

    let found = repo.find_by_id(people.id).await?;
    assert_eq!(found.map(|p| p.phone), Some(people.phone));
    assert!(repo.find_by_id(people.id + 100).await?.is_none());

    Ok(())
}

use super::*;

/// Tests getting the people an RDV has conversations with.
///
/// Verifies that ownership through `party_id` plays no part, that repeated
/// conversations do not duplicate a person and that other RDVs' contacts are excluded.
///
/// Expected: Ok with the distinct contacted people ordered by id
#[tokio::test]
async fn gets_people_contacted_by_rdv() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rdv = factory::create_rdv(db).await?;
    let other_rdv = factory::create_rdv(db).await?;
    let owned_elsewhere = factory::create_people(db, other_rdv.party_id).await?;
    let owned = factory::create_people(db, rdv.party_id).await?;
    let uncontacted = factory::create_people(db, rdv.party_id).await?;

    factory::create_conversation(db, owned.id, rdv.id).await?;
    factory::create_conversation(db, owned_elsewhere.id, rdv.id).await?;
    factory::create_conversation(db, owned_elsewhere.id, rdv.id).await?;
    factory::create_conversation(db, uncontacted.id, other_rdv.id).await?;

    let repo = PeopleRepository::new(db);
    let ids: Vec<i32> = repo
        .get_by_conversation_rdv(rdv.id)
        .await?
        .iter()
        .map(|p| p.id)
        .collect();

    assert_eq!(ids, vec![owned_elsewhere.id, owned.id]);

    Ok(())
}

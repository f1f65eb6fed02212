use super::*;

/// Tests getting the conversations of an RDV and of a person.
///
/// Verifies that each query only returns rows pointing at the given parent.
///
/// Expected: Ok with the matching conversations ordered by id
#[tokio::test]
async fn gets_conversations_by_rdv_and_people() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (rdv, people, first) = helpers::create_conversation_with_dependencies(db).await?;
    let other_rdv = factory::create_rdv(db).await?;
    let other_people = factory::create_people(db, other_rdv.party_id).await?;

    let second = factory::create_conversation(db, people.id, rdv.id).await?;
    let routed_elsewhere = factory::create_conversation(db, people.id, other_rdv.id).await?;
    factory::create_conversation(db, other_people.id, other_rdv.id).await?;

    let repo = ConversationRepository::new(db);

    let of_rdv: Vec<i32> = repo
        .get_by_rdv(rdv.id)
        .await?
        .iter()
        .map(|c| c.id)
        .collect();
    let of_people: Vec<i32> = repo
        .get_by_people(people.id)
        .await?
        .iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(of_rdv, vec![first.id, second.id]);
    assert_eq!(of_people, vec![first.id, second.id, routed_elsewhere.id]);

    Ok(())
}

/// Tests getting all conversations in insertion order.
///
/// Expected: Ok with every row ordered by id
#[tokio::test]
async fn gets_all_conversations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (rdv, people, first) = helpers::create_conversation_with_dependencies(db).await?;
    let second = factory::create_conversation(db, people.id, rdv.id).await?;

    let repo = ConversationRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.iter().map(|c| c.id).collect();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

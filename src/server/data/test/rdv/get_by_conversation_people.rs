use super::*;

/// Tests getting the RDVs a person has conversations with.
///
/// Expected: Ok with each contacted RDV once, ordered by id, excluding the owner when
/// no conversation is routed to it
#[tokio::test]
async fn gets_rdvs_contacted_by_people() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_rdv(db).await?;
    let first = factory::create_rdv(db).await?;
    let second = factory::create_rdv(db).await?;
    let people = factory::create_people(db, owner.party_id).await?;

    factory::create_conversation(db, people.id, second.id).await?;
    factory::create_conversation(db, people.id, first.id).await?;
    factory::create_conversation(db, people.id, second.id).await?;

    let repo = RdvRepository::new(db);
    let ids: Vec<i32> = repo
        .get_by_conversation_people(people.id)
        .await?
        .iter()
        .map(|r| r.id)
        .collect();

    assert_eq!(ids, vec![first.id, second.id]);
    assert!(repo.get_by_conversation_people(people.id + 1).await?.is_empty());

    Ok(())
}

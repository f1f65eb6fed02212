use super::*;

/// Tests that a repeated external id resolves to the most recently created row.
///
/// Expected: Ok(Some) with the row having the greatest `created_at`
#[tokio::test]
async fn finds_latest_row_by_external_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (rdv, people, _) = helpers::create_conversation_with_dependencies(db).await?;
    let now = Utc::now();

    let newest = ConversationExtFactory::new(db, people.id, rdv.id)
        .external_id("conv-shared")
        .created_at(now)
        .build()
        .await?;
    // Inserted later but created earlier
    ConversationExtFactory::new(db, people.id, rdv.id)
        .external_id("conv-shared")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;

    let repo = ConversationRepository::new(db);
    let found = repo
        .find_latest(&ConversationLookup::ExternalId("conv-shared".to_string()))
        .await?;

    assert_eq!(found.map(|c| c.id), Some(newest.id));

    Ok(())
}

/// Tests that equal creation times resolve to the greatest id.
///
/// Expected: Ok(Some) with the last inserted row
#[tokio::test]
async fn breaks_ties_by_greatest_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (rdv, people, _) = helpers::create_conversation_with_dependencies(db).await?;
    let created_at = Utc::now();

    ConversationExtFactory::new(db, people.id, rdv.id)
        .lead_id("lead-9")
        .created_at(created_at)
        .build()
        .await?;
    let last = ConversationExtFactory::new(db, people.id, rdv.id)
        .lead_id("lead-9")
        .created_at(created_at)
        .build()
        .await?;

    let repo = ConversationRepository::new(db);
    let found = repo
        .find_latest(&ConversationLookup::LeadId("lead-9".to_string()))
        .await?;

    assert_eq!(found.map(|c| c.id), Some(last.id));

    Ok(())
}

/// Tests looking up an unknown external id.
///
/// Expected: Ok(None) and `exists_external_id` false
#[tokio::test]
async fn returns_none_for_unknown_external_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, conversation) = helpers::create_conversation_with_dependencies(db).await?;

    let repo = ConversationRepository::new(db);

    assert!(repo
        .find_latest(&ConversationLookup::ExternalId("missing".to_string()))
        .await?
        .is_none());
    assert!(!repo.exists_external_id("missing").await?);
    assert!(repo.exists_external_id(&conversation.external_id).await?);

    Ok(())
}

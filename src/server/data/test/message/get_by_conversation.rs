use super::*;

/// Tests the timeline order of a conversation's messages.
///
/// Verifies that messages are sorted by `sent_at` regardless of insertion order and
/// that undated messages come last in id order.
///
/// Expected: Ok with messages in chronological order
#[tokio::test]
async fn orders_messages_chronologically() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let undated = factory::create_message(db, "conv-a").await?;
    let late = MensajeExtFactory::new(db, "conv-a")
        .sent_at(now)
        .build()
        .await?;
    let early = MensajeExtFactory::new(db, "conv-a")
        .sent_at(now - Duration::minutes(5))
        .build()
        .await?;
    let undated_later = factory::create_message(db, "conv-a").await?;
    factory::create_message(db, "conv-b").await?;

    let repo = MessageRepository::new(db);
    let ids: Vec<i32> = repo
        .get_by_conversation("conv-a")
        .await?
        .iter()
        .map(|m| m.id)
        .collect();

    assert_eq!(ids, vec![early.id, late.id, undated.id, undated_later.id]);

    Ok(())
}

/// Tests getting messages of a conversation without any.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unknown_conversation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_message(db, "conv-a").await?;

    let repo = MessageRepository::new(db);
    let messages = repo.get_by_conversation("conv-z").await?;

    assert!(messages.is_empty());

    Ok(())
}

/// Tests finding a single message by id.
///
/// Expected: Ok(Some) for an existing id, Ok(None) otherwise
#[tokio::test]
async fn finds_message_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let message = MensajeExtFactory::new(db, "conv-a")
        .kind("NOTE")
        .content("call back tomorrow")
        .build()
        .await?;

    let repo = MessageRepository::new(db);

    let found = repo.find_by_id(message.id).await?;
    assert_eq!(
        found.and_then(|m| m.content),
        Some("call back tomorrow".to_string())
    );
    assert!(repo.find_by_id(message.id + 1).await?.is_none());

    Ok(())
}

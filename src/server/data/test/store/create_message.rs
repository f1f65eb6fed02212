use super::*;

/// Tests recording a message of an existing conversation.
///
/// Expected: Ok and the message appears in the conversation timeline
#[tokio::test]
async fn creates_message_for_known_conversation() -> Result<(), AppError> {
    let (test, store) = setup().await;
    let db = test.db.as_ref().unwrap();

    let (_, _, conversation) =
        factory::helpers::create_conversation_with_dependencies(db).await?;

    let message = store
        .create_message(CreateMessageParams {
            conversation_external_id: conversation.external_id.clone(),
            kind: Some("MESSAGE".to_string()),
            content: Some("hola".to_string()),
            direction: Some("INBOUND".to_string()),
            sent_at: Some(Utc::now()),
            ..Default::default()
        })
        .await?;

    assert_eq!(
        store
            .messages_of_conversation(&conversation.external_id)
            .await?,
        vec![message]
    );

    Ok(())
}

/// Tests that a message for an unknown conversation is rejected.
///
/// Expected: Err(ConstraintViolation) and nothing stored
#[tokio::test]
async fn rejects_unknown_conversation() -> Result<(), AppError> {
    let (_test, store) = setup().await;

    let result = store
        .create_message(CreateMessageParams {
            conversation_external_id: "conv-unknown".to_string(),
            ..Default::default()
        })
        .await;

    assert!(is_violation(&result));
    assert!(store.list_messages().await?.is_empty());

    Ok(())
}

use super::*;

/// Tests that a rejected write releases its transaction.
///
/// The in-memory database has a single connection, so a transaction left open by the
/// rejected write would block the writes and reads that follow.
///
/// Expected: the rejection is ConstraintViolation and later writes succeed
#[tokio::test]
async fn rejected_write_releases_transaction() -> Result<(), AppError> {
    let (_test, store) = setup().await;

    let rdv = store.create_rdv(rdv_params(5300)).await?;
    store
        .create_people(people_params(rdv.party_id, 1, "+56922222222"))
        .await?;

    let duplicate = store
        .create_people(people_params(rdv.party_id, 1, "+56933333333"))
        .await;
    let people = store
        .create_people(people_params(rdv.party_id, 2, "+56944444444"))
        .await?;

    assert!(is_violation(&duplicate));
    assert_eq!(people.party_number, 2);
    assert_eq!(store.list_people().await?.len(), 2);

    Ok(())
}

/// Tests that a write committed through the store is visible to later reads.
///
/// Expected: the conversation and its message are listed
#[tokio::test]
async fn committed_writes_are_visible() -> Result<(), AppError> {
    let (_test, store) = setup().await;

    let rdv = store.create_rdv(rdv_params(5400)).await?;
    let people = store
        .create_people(people_params(rdv.party_id, 1, "+56955555555"))
        .await?;
    let conversation = store
        .create_conversation(CreateConversationParams {
            external_id: "conv-txn".to_string(),
            people_id: people.id,
            rdv_id: rdv.id,
            ..Default::default()
        })
        .await?;
    let message = store
        .create_message(CreateMessageParams {
            conversation_external_id: conversation.external_id.clone(),
            ..Default::default()
        })
        .await?;

    assert_eq!(store.list_conversations().await?, vec![conversation]);
    assert_eq!(store.list_messages().await?, vec![message]);

    Ok(())
}

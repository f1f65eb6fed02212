use super::*;

/// Tests that single-entity lookups report absent rows as not found.
///
/// Expected: Err(NotFound) for every lookup on an empty store
#[tokio::test]
async fn reports_missing_entities_as_not_found() {
    let (_test, store) = setup().await;

    let not_found = |result: Result<(), AppError>| {
        matches!(result, Err(AppError::StoreErr(StoreError::NotFound { .. })))
    };

    assert!(not_found(
        store.find_rdv(&RdvLookup::PartyId(1)).await.map(|_| ())
    ));
    assert!(not_found(
        store
            .find_people(&PeopleLookup::InfobipId("x".to_string()))
            .await
            .map(|_| ())
    ));
    assert!(not_found(store.find_people_by_id(1).await.map(|_| ())));
    assert!(not_found(
        store
            .find_latest_conversation(&ConversationLookup::LeadId("lead".to_string()))
            .await
            .map(|_| ())
    ));
    assert!(not_found(store.find_message(1).await.map(|_| ())));
}

/// Tests that list operations on an empty store return empty collections.
///
/// Expected: Ok with empty vectors
#[tokio::test]
async fn lists_empty_store() -> Result<(), AppError> {
    let (_test, store) = setup().await;

    assert!(store.list_rdv().await?.is_empty());
    assert!(store.list_people().await?.is_empty());
    assert!(store.list_conversations().await?.is_empty());
    assert!(store.list_messages().await?.is_empty());
    assert!(store.messages_of_conversation("conv-1").await?.is_empty());

    Ok(())
}

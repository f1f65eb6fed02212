use super::*;

/// Tests creating an RDV with every optional field set.
///
/// Verifies that the returned domain model carries the provided values and that
/// both timestamps are populated.
///
/// Expected: Ok with the created RDV
#[tokio::test]
async fn creates_rdv() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RdvRepository::new(db);
    let rdv = repo
        .create(CreateRdvParams {
            party_id: 300100,
            party_number: 900100,
            infobip_external_id: Some("agent-7".to_string()),
            email: Some("agent7@example.com".to_string()),
            first_name: Some("Ana".to_string()),
            last_name: Some("Rojas".to_string()),
        })
        .await?;

    assert!(rdv.id > 0);
    assert_eq!(rdv.party_id, 300100);
    assert_eq!(rdv.party_number, 900100);
    assert_eq!(rdv.infobip_external_id.as_deref(), Some("agent-7"));
    assert_eq!(rdv.created_at, rdv.updated_at);

    Ok(())
}

/// Tests that the unique index on `party_id` rejects a second RDV.
///
/// Expected: Err from the database
#[tokio::test]
async fn fails_for_duplicate_party_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_entity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_rdv(db).await?;

    let repo = RdvRepository::new(db);
    let result = repo
        .create(CreateRdvParams {
            party_id: existing.party_id,
            party_number: 1,
            infobip_external_id: None,
            email: None,
            first_name: None,
            last_name: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

use super::*;

/// Tests provisioning an RDV through the store.
///
/// Expected: Ok and the RDV is listed afterwards
#[tokio::test]
async fn creates_rdv() -> Result<(), AppError> {
    let (_test, store) = setup().await;

    let rdv = store.create_rdv(rdv_params(4100)).await?;
    let listed = store.list_rdv().await?;

    assert_eq!(listed, vec![rdv]);

    Ok(())
}

/// Tests that a second RDV with the same `party_id` is rejected.
///
/// Expected: Err(ConstraintViolation) and only one row stored
#[tokio::test]
async fn rejects_duplicate_party_id() -> Result<(), AppError> {
    let (_test, store) = setup().await;

    store.create_rdv(rdv_params(4200)).await?;
    let result = store.create_rdv(rdv_params(4200)).await;

    assert!(is_violation(&result));
    assert_eq!(store.list_rdv().await?.len(), 1);

    Ok(())
}

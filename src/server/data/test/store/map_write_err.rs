use super::*;
use crate::server::data::{
    people::PeopleRepository, rdv::RdvRepository, store::map_write_err,
};
use axum::{http::StatusCode, response::IntoResponse};

/// Tests mapping a UNIQUE failure raised by SQLite itself.
///
/// The repository inserts without the store's duplicate check, so the duplicate
/// `party_id` reaches the database's unique index.
///
/// Expected: ConstraintViolation naming the unique constraint, served as 409 Conflict
#[tokio::test]
async fn maps_unique_violation_to_conflict() -> Result<(), AppError> {
    let (test, _store) = setup().await;
    let db = test.db.as_ref().unwrap();

    let repo = RdvRepository::new(db);
    repo.create(rdv_params(5100)).await?;
    let err = map_write_err(repo.create(rdv_params(5100)).await.unwrap_err());

    match &err {
        AppError::StoreErr(StoreError::ConstraintViolation(rule)) => {
            assert!(rule.starts_with("unique constraint failed"), "{}", rule);
        }
        other => panic!("expected ConstraintViolation, got {:?}", other),
    }
    assert_eq!(err.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests mapping a FOREIGN KEY failure raised by SQLite itself.
///
/// The person's `party_id` points at no RDV and the repository skips the store's
/// existence check.
///
/// Expected: ConstraintViolation naming the foreign key, served as 409 Conflict
#[tokio::test]
async fn maps_foreign_key_violation_to_conflict() {
    let (test, _store) = setup().await;
    let db = test.db.as_ref().unwrap();

    let result = PeopleRepository::new(db)
        .create(people_params(5200, 1, "+56911111111"))
        .await;
    let err = map_write_err(result.unwrap_err());

    match &err {
        AppError::StoreErr(StoreError::ConstraintViolation(rule)) => {
            assert!(rule.starts_with("foreign key constraint failed"), "{}", rule);
        }
        other => panic!("expected ConstraintViolation, got {:?}", other),
    }
    assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
}

/// Tests that database errors other than constraint failures pass through.
///
/// Expected: AppError::DbErr
#[tokio::test]
async fn keeps_other_database_errors() {
    let err = map_write_err(sea_orm::DbErr::Custom("connection reset".to_string()));

    assert!(matches!(err, AppError::DbErr(_)));
}

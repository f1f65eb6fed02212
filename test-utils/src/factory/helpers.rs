//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an RDV, a person owned by it and a conversation linking both.
///
/// All entities use default values. Use the individual factories to customize fields.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((rdv, people, conversation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_conversation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::rdv_ext::Model,
        entity::people_ext::Model,
        entity::conversation_ext::Model,
    ),
    DbErr,
> {
    let rdv = crate::factory::rdv_ext::create_rdv(db).await?;
    let people = crate::factory::people_ext::create_people(db, rdv.party_id).await?;
    let conversation =
        crate::factory::conversation_ext::create_conversation(db, people.id, rdv.id).await?;

    Ok((rdv, people, conversation))
}

use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some(User)) with matching email, Ok(None) for an unknown email
#[tokio::test]
async fn finds_user_by_exact_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db)
        .email("lancelot@camelot.example")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("lancelot@camelot.example").await?;
    assert_eq!(found.map(|user| user.id), Some(created.id));

    let missing = repo.find_by_email("galahad@camelot.example").await?;
    assert!(missing.is_none());

    Ok(())
}

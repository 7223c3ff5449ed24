use super::*;

/// Tests finding a user by linked Discord account id.
///
/// Expected: Ok(Some(User)) for the linked account
#[tokio::test]
async fn finds_linked_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db)
        .discord_id(Some("555"))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_provider_id(Provider::Discord, "555").await?;

    assert_eq!(found.map(|user| user.id), Some(created.id));

    Ok(())
}

/// Tests that users without a linked account are not matched.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unlinked_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .discord_id(None::<String>)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_provider_id(Provider::Discord, "999").await?;

    assert!(found.is_none());

    Ok(())
}

use super::*;

/// Tests linking a Discord account to an existing user.
///
/// Verifies that only the provider column changes.
///
/// Expected: Ok(User) with discord_id set and other fields unchanged
#[tokio::test]
async fn links_provider_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db)
        .username("Percival")
        .email("percival@camelot.example")
        .discord_id(None::<String>)
        .password("hashed")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let linked = repo
        .set_provider_id(created.id, Provider::Discord, "4242")
        .await?;

    assert_eq!(linked.id, created.id);
    assert_eq!(linked.discord_id.as_deref(), Some("4242"));
    assert_eq!(linked.username, "Percival");
    assert_eq!(linked.email.as_deref(), Some("percival@camelot.example"));

    Ok(())
}

/// Tests linking a Discord account to a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.set_provider_id(404, Provider::Discord, "1").await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

use super::*;

/// Tests creating a user from an external profile.
///
/// Verifies that every profile field is stored and that the account has no
/// password.
///
/// Expected: Ok(User) with the profile fields and a stored null password
#[tokio::test]
async fn creates_password_less_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "Arthur".to_string(),
            email: Some("arthur@camelot.example".to_string()),
            discord_id: Some("1001".to_string()),
            discord_username: Some("arthur_pendragon".to_string()),
            discord_avatar: Some("a1b2c3".to_string()),
        })
        .await?;

    assert_eq!(user.username, "Arthur");
    assert_eq!(user.email.as_deref(), Some("arthur@camelot.example"));
    assert_eq!(user.discord_id.as_deref(), Some("1001"));
    assert_eq!(user.discord_username.as_deref(), Some("arthur_pendragon"));

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.password.is_none());

    Ok(())
}

/// Tests that a second account cannot reuse an email.
///
/// Expected: Err(DbErr) from the unique constraint
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("taken@example.com").build().await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            username: "Other".to_string(),
            email: Some("taken@example.com".to_string()),
            discord_id: Some("2002".to_string()),
            discord_username: None,
            discord_avatar: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

use super::*;

/// Tests that the registering user passes capability checks without roles.
///
/// Expected: Ok(GuildAccess) for the registrant
#[tokio::test]
async fn registrant_holds_every_capability() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_guild_tables()
        .with_permission_catalog()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = create_user(db).await?;
    let guild = create_guild(db, user.id).await?;
    let member = MemberFactory::new(db, user.id, guild.id).build().await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let access = AuthGuard::new(db, session)
        .require_member(&guild.slug, &[Capability::EditGuild])
        .await?;

    assert_eq!(access.guild.id, guild.id);
    assert_eq!(access.member.id, member.id);
    assert_eq!(access.user.id, user.id);

    Ok(())
}

/// Tests a member granted the capability through a role.
///
/// Expected: Ok(GuildAccess)
#[tokio::test]
async fn member_with_role_permission_is_granted() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_guild_tables()
        .with_permission_catalog()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let owner = create_user(db).await?;
    let officer = create_user(db).await?;
    let guild = create_guild(db, owner.id).await?;
    let role = RoleFactory::new(db, guild.id).build().await?;
    grant_permissions(db, role.id, &[permission_id(db, "edit.guild").await?]).await?;
    MemberFactory::new(db, officer.id, guild.id)
        .roles(&[role.id])
        .build()
        .await?;
    AuthSession::new(session).set_user_id(officer.id).await?;

    let access = AuthGuard::new(db, session)
        .require_member(&guild.slug, &[Capability::EditGuild])
        .await?;

    assert_eq!(access.user.id, officer.id);

    Ok(())
}

/// Tests a member without the capability.
///
/// Verifies that membership alone is enough when no capability is required.
///
/// Expected: Err(GuildError::PermissionDenied) for the capability check
#[tokio::test]
async fn member_without_permission_is_denied() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_guild_tables()
        .with_permission_catalog()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let owner = create_user(db).await?;
    let raider = create_user(db).await?;
    let guild = create_guild(db, owner.id).await?;
    MemberFactory::new(db, raider.id, guild.id).build().await?;
    AuthSession::new(session).set_user_id(raider.id).await?;

    let guard = AuthGuard::new(db, session);
    let result = guard
        .require_member(&guild.slug, &[Capability::EditGuild])
        .await;

    assert!(matches!(
        result,
        Err(AppError::GuildErr(GuildError::PermissionDenied(_)))
    ));
    assert!(guard.require_member(&guild.slug, &[]).await.is_ok());

    Ok(())
}

/// Tests a logged-in user who is not a member of the guild.
///
/// Expected: Err(GuildError::PermissionDenied)
#[tokio::test]
async fn non_member_is_denied() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let owner = create_user(db).await?;
    let stranger = create_user(db).await?;
    let guild = create_guild(db, owner.id).await?;
    AuthSession::new(session).set_user_id(stranger.id).await?;

    let result = AuthGuard::new(db, session)
        .require_member(&guild.slug, &[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::GuildErr(GuildError::PermissionDenied(_)))
    ));

    Ok(())
}

/// Tests an unknown guild slug.
///
/// Expected: Err(GuildError::NotFound)
#[tokio::test]
async fn unknown_guild_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require_member("no-such-guild", &[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::GuildErr(GuildError::NotFound(_)))
    ));

    Ok(())
}

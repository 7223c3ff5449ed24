use super::*;

/// Tests resolving a user's membership.
///
/// Verifies memberships in other guilds do not match.
///
/// Expected: Ok(Some(Member)) in the joined guild, Ok(None) elsewhere
#[tokio::test]
async fn finds_membership_in_guild_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;
    let joined = create_guild(db, user.id).await?;
    let other = create_guild(db, user.id).await?;
    let member = MemberFactory::new(db, user.id, joined.id).build().await?;

    let repo = MemberRepository::new(db);

    let found = repo.find_by_user_and_guild(user.id, joined.id).await?;
    assert_eq!(found.map(|m| m.id), Some(member.id));

    assert!(repo.find_by_user_and_guild(user.id, other.id).await?.is_none());

    Ok(())
}

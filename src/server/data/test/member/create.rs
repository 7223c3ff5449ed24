use super::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

/// Tests adding a member together with its role links.
///
/// Expected: Ok(Member) and one member_role row per role
#[tokio::test]
async fn creates_member_with_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;
    let guild = create_guild(db, user.id).await?;
    let first = RoleFactory::new(db, guild.id).build().await?;
    let second = RoleFactory::new(db, guild.id).build().await?;

    let repo = MemberRepository::new(db);
    let member = repo
        .create(CreateMemberParam {
            user_id: user.id,
            guild_id: guild.id,
            username: "Arthur".to_string(),
            role_ids: vec![first.id, second.id],
        })
        .await?;

    assert_eq!(member.username, "Arthur");
    assert_eq!(member.guild_id, guild.id);

    let links = entity::prelude::MemberRole::find()
        .filter(entity::member_role::Column::MemberId.eq(member.id))
        .all(db)
        .await?;
    assert_eq!(links.len(), 2);

    Ok(())
}

/// Tests adding a member that holds no roles.
///
/// Expected: Ok(Member) and no member_role rows
#[tokio::test]
async fn creates_member_without_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;
    let guild = create_guild(db, user.id).await?;

    let repo = MemberRepository::new(db);
    repo.create(CreateMemberParam {
        user_id: user.id,
        guild_id: guild.id,
        username: "Squire".to_string(),
        role_ids: Vec::new(),
    })
    .await?;

    let links = entity::prelude::MemberRole::find().all(db).await?;
    assert!(links.is_empty());

    Ok(())
}

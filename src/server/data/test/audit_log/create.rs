use super::*;

/// Tests appending an audit log entry.
///
/// Expected: Ok(AuditLog) with the description and acting member
#[tokio::test]
async fn appends_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, guild, member) = create_guild_with_owner(db).await?;

    let repo = AuditLogRepository::new(db);
    let entry = repo
        .create(CreateAuditLogParam {
            description: "Arthur registered the guild".to_string(),
            member_id: Some(member.id),
            guild_id: guild.id,
        })
        .await?;

    assert_eq!(entry.description, "Arthur registered the guild");
    assert_eq!(entry.member_id, Some(member.id));
    assert_eq!(entry.guild_id, guild.id);

    Ok(())
}

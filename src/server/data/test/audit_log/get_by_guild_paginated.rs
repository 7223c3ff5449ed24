use super::*;

/// Tests paging through a guild's audit log.
///
/// Verifies newest-first ordering and pagination metadata.
///
/// Expected: first page holds the two newest entries, total counts all three
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, guild, member) = create_guild_with_owner(db).await?;

    let repo = AuditLogRepository::new(db);
    for description in ["first", "second", "third"] {
        repo.create(CreateAuditLogParam {
            description: description.to_string(),
            member_id: Some(member.id),
            guild_id: guild.id,
        })
        .await?;
    }

    let page = repo.get_by_guild_paginated(guild.id, 0, 2).await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    let descriptions: Vec<_> = page.entries.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(descriptions, vec!["third", "second"]);

    let last = repo.get_by_guild_paginated(guild.id, 1, 2).await?;
    assert_eq!(last.entries.len(), 1);
    assert_eq!(last.entries[0].description, "first");

    Ok(())
}

/// Tests that entries of other guilds are excluded.
///
/// Expected: Ok with zero entries for a guild without history
#[tokio::test]
async fn excludes_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, guild, member) = create_guild_with_owner(db).await?;
    let (_, quiet_guild, _) = create_guild_with_owner(db).await?;

    let repo = AuditLogRepository::new(db);
    repo.create(CreateAuditLogParam {
        description: "noise".to_string(),
        member_id: Some(member.id),
        guild_id: guild.id,
    })
    .await?;

    let page = repo.get_by_guild_paginated(quiet_guild.id, 0, 10).await?;

    assert_eq!(page.total, 0);
    assert!(page.entries.is_empty());

    Ok(())
}

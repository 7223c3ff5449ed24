use crate::server::{
    data::audit_log::AuditLogRepository, error::AppError, model::audit_log::CreateAuditLogParam,
    service::guild::{GuildService, MAX_AUDIT_LOG_PAGE_SIZE},
};
use test_utils::{builder::TestBuilder, factory::helpers::create_guild_with_owner};

/// Tests that oversized and zero page sizes are clamped.
///
/// Expected: per_page of MAX_AUDIT_LOG_PAGE_SIZE and 1 respectively
#[tokio::test]
async fn clamps_page_size() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, guild, member) = create_guild_with_owner(db).await?;
    for description in ["first", "second"] {
        AuditLogRepository::new(db)
            .create(CreateAuditLogParam {
                description: description.to_string(),
                member_id: Some(member.id),
                guild_id: guild.id,
            })
            .await?;
    }
    let service = GuildService::new(db);

    let large = service.audit_log(guild.id, 0, 10_000).await?;
    assert_eq!(large.per_page, MAX_AUDIT_LOG_PAGE_SIZE);
    assert_eq!(large.entries.len(), 2);

    let zero = service.audit_log(guild.id, 0, 0).await?;
    assert_eq!(zero.per_page, 1);
    assert_eq!(zero.entries.len(), 1);
    assert_eq!(zero.total_pages, 2);

    Ok(())
}

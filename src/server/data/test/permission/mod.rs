use crate::server::{data::permission::PermissionRepository, model::tier::Tier};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::permission::CATALOG};

/// Tests loading the seeded permission catalog.
///
/// Verifies every catalog entry is returned in id order with its tier parsed.
///
/// Expected: Ok(Vec<Permission>) matching the seeded catalog
#[tokio::test]
async fn returns_catalog_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_permission_catalog()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let permissions = PermissionRepository::new(db).get_all().await?;

    assert_eq!(permissions.len(), CATALOG.len());
    for (permission, (name, slug, note)) in permissions.iter().zip(CATALOG.iter()) {
        assert_eq!(permission.name, *name);
        assert_eq!(permission.slug, *slug);
        assert_eq!(permission.tier, Tier::from_note(note));
    }

    Ok(())
}

/// Tests an empty catalog.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn empty_without_seed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let permissions = PermissionRepository::new(db).get_all().await?;

    assert!(permissions.is_empty());

    Ok(())
}

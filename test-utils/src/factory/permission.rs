//! Permission catalog fixtures.
//!
//! Mirrors the catalog seeded by the `seed_permission_catalog` migration, since
//! test databases are built from entities rather than migrations.

use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// `(name, slug, role_note)` of every seeded catalog permission, in id order.
pub const CATALOG: [(&str, &str, &str); 8] = [
    ("Edit guild", "edit.guild", "guild_master"),
    ("Delete guild", "delete.guild", "guild_master"),
    ("Edit members", "edit.members", "officer"),
    ("View officer notes", "view.officer_notes", "officer"),
    ("Edit officer notes", "edit.officer_notes", "officer"),
    ("Edit characters", "edit.characters", "officer"),
    ("Create raids", "create.raids", "raid_leader"),
    ("Edit raids", "edit.raids", "raid_leader"),
];

/// Inserts the permission catalog.
///
/// Ids are assigned in `CATALOG` order starting at 1 on a fresh table.
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<(), DbErr> {
    let permissions = CATALOG
        .iter()
        .map(|(name, slug, note)| entity::permission::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            slug: ActiveValue::Set(slug.to_string()),
            description: ActiveValue::Set(None),
            role_note: ActiveValue::Set(Some(note.to_string())),
            ..Default::default()
        });

    entity::prelude::Permission::insert_many(permissions)
        .exec_without_returning(db)
        .await?;

    Ok(())
}

/// Looks up the ids of catalog permissions tagged with any of `notes`, ascending.
pub async fn permission_ids_for_notes(
    db: &DatabaseConnection,
    notes: &[&str],
) -> Result<Vec<i32>, DbErr> {
    let mut ids: Vec<i32> = entity::prelude::Permission::find()
        .filter(entity::permission::Column::RoleNote.is_in(notes.iter().copied()))
        .all(db)
        .await?
        .into_iter()
        .map(|permission| permission.id)
        .collect();
    ids.sort_unstable();

    Ok(ids)
}

/// Looks up a catalog permission id by slug.
pub async fn permission_id(db: &DatabaseConnection, slug: &str) -> Result<i32, DbErr> {
    entity::prelude::Permission::find()
        .filter(entity::permission::Column::Slug.eq(slug))
        .one(db)
        .await?
        .map(|permission| permission.id)
        .ok_or_else(|| DbErr::RecordNotFound(format!("permission {}", slug)))
}

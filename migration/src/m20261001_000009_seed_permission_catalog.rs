use sea_orm_migration::prelude::*;

use super::m20261001_000004_create_permission_table::Permission;

/// Default permission catalog as `(name, slug, description, role_note)`.
const CATALOG: &[(&str, &str, &str, &str)] = &[
    (
        "Edit guild",
        "edit.guild",
        "Change guild settings and tier role assignments",
        "guild_master",
    ),
    (
        "Delete guild",
        "delete.guild",
        "Remove the guild from the site",
        "guild_master",
    ),
    (
        "Edit members",
        "edit.members",
        "Edit member profiles and inactivate members",
        "officer",
    ),
    (
        "View officer notes",
        "view.officer_notes",
        "Read notes left by officers on members and characters",
        "officer",
    ),
    (
        "Edit officer notes",
        "edit.officer_notes",
        "Write notes on members and characters",
        "officer",
    ),
    (
        "Edit characters",
        "edit.characters",
        "Edit any character in the guild",
        "officer",
    ),
    (
        "Create raids",
        "create.raids",
        "Create raid groups",
        "raid_leader",
    ),
    (
        "Edit raids",
        "edit.raids",
        "Edit raid groups and their rosters",
        "raid_leader",
    ),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Permission::Table).columns([
            Permission::Name,
            Permission::Slug,
            Permission::Description,
            Permission::RoleNote,
        ]);

        for (name, slug, description, role_note) in CATALOG {
            insert.values_panic([
                (*name).into(),
                (*slug).into(),
                (*description).into(),
                (*role_note).into(),
            ]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let slugs = CATALOG.iter().map(|(_, slug, _, _)| *slug);

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Permission::Table)
                    .and_where(Expr::col(Permission::Slug).is_in(slugs))
                    .to_owned(),
            )
            .await
    }
}

use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000002_create_guild_table::Guild;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(pk_auto(Role::Id))
                    .col(integer(Role::GuildId))
                    .col(string_uniq(Role::DiscordId))
                    .col(string(Role::Name))
                    .col(string(Role::Slug))
                    .col(string_null(Role::Description))
                    .col(integer_null(Role::Color))
                    .col(integer(Role::Position))
                    .col(big_integer(Role::DiscordPermissions).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_guild_id")
                            .from(Role::Table, Role::GuildId)
                            .to(Guild::Table, Guild::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Role {
    Table,
    Id,
    GuildId,
    DiscordId,
    Name,
    Slug,
    Description,
    Color,
    Position,
    DiscordPermissions,
}

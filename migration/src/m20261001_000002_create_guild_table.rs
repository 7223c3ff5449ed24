use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guild::Table)
                    .if_not_exists()
                    .col(pk_auto(Guild::Id))
                    .col(string_len_uniq(Guild::Name, 36))
                    .col(string_uniq(Guild::Slug))
                    .col(integer(Guild::UserId))
                    .col(string_uniq(Guild::DiscordId))
                    .col(string_null(Guild::CalendarLink))
                    .col(string_null(Guild::MemberRoleIds))
                    .col(string_null(Guild::GmRoleId))
                    .col(string_null(Guild::OfficerRoleId))
                    .col(string_null(Guild::RaidLeaderRoleId))
                    .col(
                        timestamp_with_time_zone(Guild::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_user_id")
                            .from(Guild::Table, Guild::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guild {
    Table,
    Id,
    Name,
    Slug,
    UserId,
    DiscordId,
    CalendarLink,
    MemberRoleIds,
    GmRoleId,
    OfficerRoleId,
    RaidLeaderRoleId,
    CreatedAt,
}

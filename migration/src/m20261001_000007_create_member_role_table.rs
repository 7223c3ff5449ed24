use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000003_create_role_table::Role;
use super::m20261001_000006_create_member_table::Member;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MemberRole::Table)
                    .if_not_exists()
                    .col(integer(MemberRole::MemberId))
                    .col(integer(MemberRole::RoleId))
                    .primary_key(
                        Index::create()
                            .name("pk_member_role")
                            .col(MemberRole::MemberId)
                            .col(MemberRole::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_role_member_id")
                            .from(MemberRole::Table, MemberRole::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_role_role_id")
                            .from(MemberRole::Table, MemberRole::RoleId)
                            .to(Role::Table, Role::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MemberRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MemberRole {
    Table,
    MemberId,
    RoleId,
}

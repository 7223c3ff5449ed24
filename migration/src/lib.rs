pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_guild_table;
mod m20261001_000003_create_role_table;
mod m20261001_000004_create_permission_table;
mod m20261001_000005_create_role_permission_table;
mod m20261001_000006_create_member_table;
mod m20261001_000007_create_member_role_table;
mod m20261001_000008_create_audit_log_table;
mod m20261001_000009_seed_permission_catalog;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_guild_table::Migration),
            Box::new(m20261001_000003_create_role_table::Migration),
            Box::new(m20261001_000004_create_permission_table::Migration),
            Box::new(m20261001_000005_create_role_permission_table::Migration),
            Box::new(m20261001_000006_create_member_table::Migration),
            Box::new(m20261001_000007_create_member_role_table::Migration),
            Box::new(m20261001_000008_create_audit_log_table::Migration),
            Box::new(m20261001_000009_seed_permission_catalog::Migration),
        ]
    }
}

use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError, factory::permission::seed_catalog};

/// Configures the schema and fixtures of a [`TestContext`].
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_guild_tables()
///     .with_permission_catalog()
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// Created in insertion order, so referenced tables go first.
    tables: Vec<TableCreateStatement>,
    seed_catalog: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the table of `entity`, generated from its SeaORM definition.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table the guild workflows touch.
    pub fn with_guild_tables(self) -> Self {
        self.with_table(User)
            .with_table(Guild)
            .with_table(Role)
            .with_table(Permission)
            .with_table(RolePermission)
            .with_table(Member)
            .with_table(MemberRole)
            .with_table(AuditLog)
    }

    /// Inserts the permission catalog after the tables are created.
    pub fn with_permission_catalog(mut self) -> Self {
        self.seed_catalog = true;
        self
    }

    /// Connects, creates the tables and seeds requested fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with its database ready
    /// - `Err(TestError::Database)` - Connecting, creating a table or seeding failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;

        if self.seed_catalog {
            seed_catalog(context.database().await?).await?;
        }

        Ok(context)
    }
}

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::permission::Permission;

/// Read access to the seeded permission catalog.
pub struct PermissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PermissionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the whole catalog ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Permission>, DbErr> {
        let entities = entity::prelude::Permission::find()
            .order_by_asc(entity::permission::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Permission::from_entity).collect())
    }
}

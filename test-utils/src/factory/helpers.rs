//! Helpers shared by the factories.

use std::sync::atomic::{AtomicU64, Ordering};

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{guild::create_guild, member::create_member, user::create_user};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-wide unique number for default names, slugs and Discord ids.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Creates a user, a guild registered by them, and their role-less membership.
pub async fn create_guild_with_owner(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::guild::Model,
        entity::member::Model,
    ),
    DbErr,
> {
    let user = create_user(db).await?;
    let guild = create_guild(db, user.id).await?;
    let member = create_member(db, user.id, guild.id).await?;

    Ok((user, guild, member))
}

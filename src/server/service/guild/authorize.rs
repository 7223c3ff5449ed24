//! Discord-side authorization for guild registration.

use serenity::all::Permissions;

use crate::server::model::discord::{DiscordGuild, DiscordMember, DiscordRole};

/// Discord permissions that allow a member to register their server.
///
/// Manage Server alone is not enough.
pub const REGISTRATION_PERMISSIONS: Permissions = Permissions::ADMINISTRATOR;

/// Whether `member` may register `guild` with the site.
///
/// The server owner always may. Anyone else needs a role carrying
/// [`REGISTRATION_PERMISSIONS`]; role ids missing from `roles` are ignored.
pub fn authorize_registration(
    member: &DiscordMember,
    guild: &DiscordGuild,
    roles: &[DiscordRole],
) -> bool {
    if member.user_id == guild.owner_id {
        return true;
    }

    member.role_ids.iter().any(|role_id| {
        roles
            .iter()
            .find(|role| role.role_id == *role_id)
            .is_some_and(|role| role.permissions.contains(REGISTRATION_PERMISSIONS))
    })
}

//! Entries of the current user's server list.

use serenity::all::GuildInfo;

/// One entry of `GET /users/@me/guilds`, with the user's permission bits in
/// that server. The user never owns it.
pub fn create_test_guild_info(guild_id: u64, name: &str, permissions: u64) -> GuildInfo {
    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "owner": false,
        "permissions": permissions.to_string(),
        "features": [],
    }))
    .expect("guild JSON should deserialize into a serenity GuildInfo")
}

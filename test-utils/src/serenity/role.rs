//! Test factory for Serenity `Role` objects.

use serenity::all::Role;

/// Creates a role of guild `1` as Discord's role endpoint would return it.
///
/// Roles are never hoisted, managed or mentionable. `permissions` is the raw
/// bitmask, e.g. `0x8` for Administrator or `0x20` for Manage Server.
///
/// # Panics
/// - If the JSON no longer matches Serenity's `Role` shape
pub fn create_test_role(
    role_id: u64,
    name: &str,
    color: u32,
    position: u16,
    permissions: u64,
) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "guild_id": "1",
        "name": name,
        "color": color,
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": permissions.to_string(),
        "managed": false,
        "mentionable": false,
    }))
    .expect("role JSON should deserialize into a serenity Role")
}

//! Guild members.

use serenity::all::Member;

/// A member of `guild_id` holding `role_ids`, joined in 2020.
///
/// `nick` is the server nickname; pass `None` to fall back to `username`.
pub fn create_test_member(
    guild_id: u64,
    user_id: u64,
    username: &str,
    nick: Option<&str>,
    role_ids: &[u64],
) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": {
            "id": user_id.to_string(),
            "username": username,
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
        },
        "nick": nick,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "deaf": false,
        "mute": false,
        "flags": 0,
    }))
    .expect("member JSON should deserialize into a serenity Member")
}

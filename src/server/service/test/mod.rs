use crate::server::{
    error::AppError,
    model::discord::{DiscordGuild, DiscordMember, DiscordRole, DiscordUserGuild},
    service::discord::DiscordApi,
};
use serenity::all::Permissions;

mod audit_log;

/// In-memory stand-in for Discord's REST API.
///
/// Serves a single server (`guild`) with its `roles` and `members`.
#[derive(Debug, Clone, Default)]
pub struct FakeDiscord {
    pub user_guilds: Vec<DiscordUserGuild>,
    pub guild: Option<DiscordGuild>,
    pub members: Vec<DiscordMember>,
    pub roles: Vec<DiscordRole>,
}

impl FakeDiscord {
    /// A server owned by `owner_id` where the bot is present.
    pub fn server(guild_id: u64, owner_id: u64) -> Self {
        Self {
            guild: Some(DiscordGuild {
                guild_id,
                name: "Camelot".to_string(),
                owner_id,
            }),
            ..Default::default()
        }
    }

    pub fn with_role(mut self, role_id: u64, name: &str, bits: u64) -> Self {
        self.roles.push(DiscordRole {
            role_id,
            name: name.to_string(),
            color: None,
            position: self.roles.len() as i32 + 1,
            permissions: Permissions::from_bits_truncate(bits),
        });
        self
    }

    pub fn with_member(mut self, user_id: u64, display_name: &str, role_ids: &[u64]) -> Self {
        self.members.push(DiscordMember {
            user_id,
            display_name: display_name.to_string(),
            role_ids: role_ids.to_vec(),
        });
        self
    }

    fn served_guild(&self, guild_id: u64) -> Result<&DiscordGuild, AppError> {
        self.guild
            .as_ref()
            .filter(|guild| guild.guild_id == guild_id)
            .ok_or_else(|| AppError::ExternalApi("Unknown Guild".to_string()))
    }
}

impl DiscordApi for FakeDiscord {
    async fn get_current_user_guilds(
        &self,
        _access_token: &str,
    ) -> Result<Vec<DiscordUserGuild>, AppError> {
        Ok(self.user_guilds.clone())
    }

    async fn get_guild_member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<DiscordMember, AppError> {
        self.served_guild(guild_id)?;

        self.members
            .iter()
            .find(|member| member.user_id == user_id)
            .cloned()
            .ok_or_else(|| AppError::ExternalApi("Unknown Member".to_string()))
    }

    async fn get_guild(&self, guild_id: u64) -> Result<DiscordGuild, AppError> {
        self.served_guild(guild_id).cloned()
    }

    async fn get_guild_roles(&self, guild_id: u64) -> Result<Vec<DiscordRole>, AppError> {
        self.served_guild(guild_id)?;

        Ok(self.roles.clone())
    }
}

/// Whether `result` failed validation on `field`.
pub fn has_field_error<T>(result: &Result<T, AppError>, field: &str) -> bool {
    match result {
        Err(AppError::Validation(errors)) => errors.field_errors().contains_key(field),
        _ => false,
    }
}

//! Discord REST access used by guild registration.
//!
//! Registration needs two kinds of Discord calls: the logged-in user's server
//! list, made with their OAuth access token, and server lookups made with the bot
//! token. Both sit behind [`DiscordApi`] so the workflows can run against a
//! stand-in without a live Discord connection.

use std::{future::Future, num::NonZeroU64, sync::Arc};

use serenity::{
    all::{GuildId, GuildInfo, UserId},
    http::Http,
};

use crate::server::{
    error::AppError,
    model::discord::{DiscordGuild, DiscordMember, DiscordRole, DiscordUserGuild},
};

/// Base URL of Discord's REST API.
pub const DISCORD_API_URL: &str = "https://discord.com/api";

/// Discord REST operations needed by the guild workflows.
pub trait DiscordApi: Send + Sync {
    /// Servers the owner of `access_token` belongs to, with their permissions there.
    fn get_current_user_guilds(
        &self,
        access_token: &str,
    ) -> impl Future<Output = Result<Vec<DiscordUserGuild>, AppError>> + Send;

    /// Membership of a user in a server, looked up with the bot token.
    ///
    /// Fails when the user is not on the server or the bot has not been added.
    fn get_guild_member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> impl Future<Output = Result<DiscordMember, AppError>> + Send;

    fn get_guild(
        &self,
        guild_id: u64,
    ) -> impl Future<Output = Result<DiscordGuild, AppError>> + Send;

    fn get_guild_roles(
        &self,
        guild_id: u64,
    ) -> impl Future<Output = Result<Vec<DiscordRole>, AppError>> + Send;
}

/// Production [`DiscordApi`] backed by Serenity's bot client and reqwest.
#[derive(Clone)]
pub struct DiscordClient {
    /// Bot-authenticated Discord HTTP client.
    bot: Arc<Http>,
    /// Client for user-token requests.
    http_client: reqwest::Client,
}

impl DiscordClient {
    pub fn new(bot: Arc<Http>, http_client: reqwest::Client) -> Self {
        Self { bot, http_client }
    }
}

impl DiscordApi for DiscordClient {
    async fn get_current_user_guilds(
        &self,
        access_token: &str,
    ) -> Result<Vec<DiscordUserGuild>, AppError> {
        let guilds = self
            .http_client
            .get(format!("{}/users/@me/guilds", DISCORD_API_URL))
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<GuildInfo>>()
            .await?;

        Ok(guilds.iter().map(DiscordUserGuild::from_serenity).collect())
    }

    async fn get_guild_member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<DiscordMember, AppError> {
        let user_id = NonZeroU64::new(user_id)
            .map(UserId::from)
            .ok_or_else(|| AppError::ExternalApi("Invalid Discord user id 0".to_string()))?;

        let member = self.bot.get_member(guild_id_of(guild_id)?, user_id).await?;

        Ok(DiscordMember::from_serenity(&member))
    }

    async fn get_guild(&self, guild_id: u64) -> Result<DiscordGuild, AppError> {
        let guild = self.bot.get_guild(guild_id_of(guild_id)?).await?;

        Ok(DiscordGuild::from_serenity(&guild))
    }

    async fn get_guild_roles(&self, guild_id: u64) -> Result<Vec<DiscordRole>, AppError> {
        let roles = self.bot.get_guild_roles(guild_id_of(guild_id)?).await?;

        Ok(roles.iter().map(DiscordRole::from_serenity).collect())
    }
}

/// Serenity ids cannot be zero.
fn guild_id_of(guild_id: u64) -> Result<GuildId, AppError> {
    NonZeroU64::new(guild_id)
        .map(GuildId::from)
        .ok_or_else(|| AppError::ExternalApi("Invalid Discord server id 0".to_string()))
}

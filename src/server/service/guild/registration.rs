//! Registering a Discord server as a guild.

use sea_orm::{DatabaseConnection, TransactionTrait};
use validator::{Validate, ValidationErrors};

use crate::{
    model::guild::RegisterGuildDto,
    server::{
        data::{
            audit_log::AuditLogRepository, guild::GuildRepository, member::MemberRepository,
            role::RoleRepository,
        },
        error::{guild::GuildError, AppError},
        model::{
            audit_log::CreateAuditLogParam,
            discord::RegistrableGuild,
            guild::{CreateGuildParam, Guild, RegisterGuildParam},
            member::CreateMemberParam,
            role::CreateRoleParam,
            user::User,
        },
        service::{
            discord::DiscordApi,
            guild::{
                add_field_error, check_guild_name,
                authorize::{authorize_registration, REGISTRATION_PERMISSIONS},
            },
        },
        util::{parse::parse_snowflake, slug::slugify},
    },
};

/// Service for listing and registering the user's Discord servers.
pub struct RegistrationService<'a, D: DiscordApi> {
    db: &'a DatabaseConnection,
    discord: &'a D,
}

impl<'a, D: DiscordApi> RegistrationService<'a, D> {
    pub fn new(db: &'a DatabaseConnection, discord: &'a D) -> Self {
        Self { db, discord }
    }

    /// Lists the user's Discord servers where they are an administrator.
    ///
    /// Servers that are already registered are included and flagged.
    ///
    /// # Arguments
    /// - `access_token` - The user's Discord OAuth access token
    pub async fn list_registrable(
        &self,
        access_token: &str,
    ) -> Result<Vec<RegistrableGuild>, AppError> {
        let guilds: Vec<_> = self
            .discord
            .get_current_user_guilds(access_token)
            .await?
            .into_iter()
            .filter(|guild| guild.permissions.contains(REGISTRATION_PERMISSIONS))
            .collect();

        let discord_ids: Vec<u64> = guilds.iter().map(|guild| guild.guild_id).collect();
        let registered = GuildRepository::new(self.db)
            .find_registered_discord_ids(&discord_ids)
            .await?;

        Ok(guilds
            .into_iter()
            .map(|guild| RegistrableGuild {
                registered: registered.contains(&guild.guild_id),
                guild,
            })
            .collect())
    }

    /// Registers a Discord server for `user`.
    ///
    /// The user must be an administrator or the owner of the server, and the bot
    /// must already be on it. The guild, its roles, the registering member and an
    /// audit log entry are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(Guild)` - The registered guild
    /// - `Err(AppError::Validation)` - Invalid form, or the user or bot is not on the server
    /// - `Err(GuildError::PermissionDenied)` - The user lacks admin rights on the server
    /// - `Err(AppError::DiscordErr)` - Fetching the server or its roles failed
    /// - `Err(AppError::DbErr)` - Database error; the transaction is rolled back
    pub async fn register(&self, user: &User, dto: RegisterGuildDto) -> Result<Guild, AppError> {
        let Some(discord_user_id) = user.discord_id.as_deref().and_then(parse_snowflake) else {
            return Err(GuildError::PermissionDenied(
                "Log in with Discord before registering a guild.".to_string(),
            )
            .into());
        };

        let param = self.validate_registration(&dto).await?;

        let member = match self
            .discord
            .get_guild_member(param.discord_id, discord_user_id)
            .await
        {
            Ok(member) => member,
            Err(e) => {
                tracing::debug!(
                    "Member lookup of user {} in server {} failed: {}",
                    discord_user_id,
                    param.discord_id,
                    e
                );
                let mut errors = ValidationErrors::new();
                add_field_error(
                    &mut errors,
                    "permissions",
                    "member",
                    "Unable to find you on that server, or the bot is missing. Make sure you \
                     have the correct Discord Server ID and the bot has been added.",
                );
                return Err(errors.into());
            }
        };

        let discord_guild = self.discord.get_guild(param.discord_id).await?;
        let discord_roles = self.discord.get_guild_roles(param.discord_id).await?;

        if !authorize_registration(&member, &discord_guild, &discord_roles) {
            tracing::warn!(
                "User {} tried to register server {} without admin permissions",
                user.id,
                param.discord_id
            );
            return Err(GuildError::PermissionDenied(
                "We couldn't find admin permissions on your account for that server. Have \
                 someone with admin permissions register your guild."
                    .to_string(),
            )
            .into());
        }

        let txn = self.db.begin().await?;

        let guild = GuildRepository::new(&txn)
            .create(CreateGuildParam {
                slug: slugify(&param.name),
                name: param.name,
                user_id: user.id,
                discord_id: param.discord_id,
            })
            .await?;

        let role_repo = RoleRepository::new(&txn);
        let mut member_role_ids = Vec::new();
        for discord_role in &discord_roles {
            let role = role_repo
                .first_or_create(CreateRoleParam::from_discord(guild.id, discord_role))
                .await?;

            if member.role_ids.contains(&discord_role.role_id) {
                member_role_ids.push(role.id);
            }
        }

        let registrant = MemberRepository::new(&txn)
            .create(CreateMemberParam {
                user_id: user.id,
                guild_id: guild.id,
                username: member.display_name.clone(),
                role_ids: member_role_ids,
            })
            .await?;

        AuditLogRepository::new(&txn)
            .create(CreateAuditLogParam {
                description: format!("{} registered the guild", registrant.username),
                member_id: Some(registrant.id),
                guild_id: guild.id,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} registered guild {} for server {}",
            user.id,
            guild.slug,
            guild.discord_id
        );

        Ok(guild)
    }

    /// Checks a registration form and resolves the Discord server id.
    ///
    /// A typed server id takes precedence over one selected from the list.
    async fn validate_registration(
        &self,
        dto: &RegisterGuildDto,
    ) -> Result<RegisterGuildParam, AppError> {
        let mut errors = dto.validate().err().unwrap_or_else(ValidationErrors::new);
        let guild_repo = GuildRepository::new(self.db);

        let name = dto.name.trim().to_string();
        check_guild_name(&guild_repo, &name, None, &mut errors).await?;

        let non_blank = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let mut discord_id = None;
        match non_blank(&dto.discord_id).or_else(|| non_blank(&dto.discord_id_select)) {
            None => add_field_error(
                &mut errors,
                "discord_id",
                "required",
                "Enter your Discord server id or select a server.",
            ),
            Some(raw) => match parse_snowflake(&raw) {
                None => add_field_error(
                    &mut errors,
                    "discord_id",
                    "numeric",
                    "The Discord server id must be numeric.",
                ),
                Some(id) => {
                    if guild_repo.discord_id_taken(id).await? {
                        add_field_error(
                            &mut errors,
                            "discord_id",
                            "unique",
                            "That Discord server is already registered.",
                        );
                    } else {
                        discord_id = Some(id);
                    }
                }
            },
        }

        match discord_id {
            Some(discord_id) if errors.is_empty() => Ok(RegisterGuildParam { name, discord_id }),
            _ => Err(errors.into()),
        }
    }
}

//! Viewing and submitting guild settings.

use sea_orm::TransactionTrait;
use validator::{Validate, ValidationErrors};

use crate::{
    model::guild::UpdateGuildSettingsDto,
    server::{
        data::{
            audit_log::AuditLogRepository, guild::GuildRepository,
            permission::PermissionRepository, role::RoleRepository,
        },
        error::{guild::GuildError, AppError},
        model::{
            audit_log::CreateAuditLogParam,
            guild::{Guild, GuildAccess, GuildSettings, UpdateGuildSettingsParam},
            tier::{Tier, TierPointers},
        },
        service::guild::{
            add_field_error, check_guild_name, reconcile::plan_settings, GuildService,
        },
        util::parse::parse_snowflake,
    },
};

impl<'a> GuildService<'a> {
    /// Loads what the settings page shows: the guild, its roles and the permission catalog.
    pub async fn settings(&self, guild: Guild) -> Result<GuildSettings, AppError> {
        let roles = RoleRepository::new(self.db).get_by_guild(guild.id).await?;
        let permissions = PermissionRepository::new(self.db).get_all().await?;

        Ok(GuildSettings {
            guild,
            roles,
            permissions,
        })
    }

    /// Applies a settings submission.
    ///
    /// Validates the form, then in one transaction re-reads the guild, its roles and
    /// the catalog, reconciles the tier roles and writes the role permission changes,
    /// the guild update and an audit log entry. Nothing is written when validation
    /// fails.
    ///
    /// # Arguments
    /// - `access` - The guild and the submitting member, already authorized
    /// - `dto` - Submitted settings
    ///
    /// # Returns
    /// - `Ok(Guild)` - The updated guild
    /// - `Err(AppError::Validation)` - Invalid, duplicate or non-numeric fields
    /// - `Err(GuildError::NotFound)` - The guild was deleted after access was checked
    /// - `Err(GuildError::RoleNotFound)` - A selected role is not a role of the guild
    /// - `Err(AppError::DbErr)` - Database error; the transaction is rolled back
    pub async fn update_settings(
        &self,
        access: &GuildAccess,
        dto: UpdateGuildSettingsDto,
    ) -> Result<Guild, AppError> {
        let param = self.validate_settings(&access.guild, &dto).await?;

        let txn = self.db.begin().await?;

        let Some(guild) = GuildRepository::new(&txn)
            .find_by_id(access.guild.id)
            .await?
        else {
            return Err(GuildError::NotFound(access.guild.slug.clone()).into());
        };
        let role_repo = RoleRepository::new(&txn);
        let roles = role_repo.get_by_guild(guild.id).await?;
        let catalog = PermissionRepository::new(&txn).get_all().await?;
        let plan = plan_settings(&guild, &param, &roles, &catalog, &access.member.username)?;

        for revoke in &plan.revokes {
            role_repo.detach_permissions(revoke.role_id).await?;
        }
        for grant in &plan.grants {
            role_repo
                .sync_permissions(grant.role_id, &grant.permission_ids)
                .await?;
        }

        let updated = GuildRepository::new(&txn)
            .update(guild.id, plan.update)
            .await?;

        AuditLogRepository::new(&txn)
            .create(CreateAuditLogParam {
                description: plan.audit_description,
                member_id: Some(access.member.id),
                guild_id: guild.id,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Member {} updated settings of guild {}",
            access.member.id,
            updated.slug
        );

        Ok(updated)
    }

    /// Checks a settings form and parses its role ids.
    async fn validate_settings(
        &self,
        guild: &Guild,
        dto: &UpdateGuildSettingsDto,
    ) -> Result<UpdateGuildSettingsParam, AppError> {
        let mut errors = dto.validate().err().unwrap_or_else(ValidationErrors::new);
        let guild_repo = GuildRepository::new(self.db);

        let name = dto.name.trim().to_string();
        check_guild_name(&guild_repo, &name, Some(guild.id), &mut errors).await?;

        let mut tiers = TierPointers::default();
        for tier in Tier::ALL {
            let requested = match tier {
                Tier::GuildMaster => dto.gm_role_id.as_deref(),
                Tier::Officer => dto.officer_role_id.as_deref(),
                Tier::RaidLeader => dto.raid_leader_role_id.as_deref(),
            };

            match parse_optional_role(requested) {
                Ok(role_id) => tiers.set(tier, role_id),
                Err(()) => add_field_error(
                    &mut errors,
                    tier.field(),
                    "numeric",
                    "The selected role id must be numeric.",
                ),
            }
        }

        let mut member_role_ids = Vec::with_capacity(dto.member_roles.len());
        for raw in &dto.member_roles {
            match parse_optional_role(Some(raw)) {
                Ok(Some(role_id)) => {
                    if !member_role_ids.contains(&role_id) {
                        member_role_ids.push(role_id);
                    }
                }
                Ok(None) => {}
                Err(()) => {
                    add_field_error(
                        &mut errors,
                        "member_roles",
                        "numeric",
                        "Member role ids must be numeric.",
                    );
                    break;
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors.into());
        }

        Ok(UpdateGuildSettingsParam {
            name,
            calendar_link: dto
                .calendar_link
                .as_deref()
                .map(str::trim)
                .filter(|link| !link.is_empty())
                .map(str::to_string),
            tiers,
            member_role_ids,
        })
    }
}

/// Parses an optional role id form value; blank means no role.
fn parse_optional_role(value: Option<&str>) -> Result<Option<u64>, ()> {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => parse_snowflake(value).map(Some).ok_or(()),
    }
}

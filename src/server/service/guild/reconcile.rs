//! Tier-to-permission reconciliation for guild settings.
//!
//! Each of a guild's three tier pointers names the Discord role holding that
//! tier. A role must hold exactly the permission set of the most senior tier
//! assigned to it, and nothing once it holds no tier. This module computes the
//! grant and revoke operations that keep that true when the pointers change,
//! together with the audit log text describing the change. It performs no I/O.

use crate::server::{
    error::guild::GuildError,
    model::{
        guild::{Guild, UpdateGuildParam, UpdateGuildSettingsParam},
        permission::Permission,
        role::GuildRole,
        tier::Tier,
    },
    util::slug::slugify,
};

/// Replace a role's permissions with exactly `permission_ids`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionGrant {
    /// Local role id.
    pub role_id: i32,
    pub permission_ids: Vec<i32>,
}

/// Remove every permission from a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionRevoke {
    /// Local role id.
    pub role_id: i32,
}

/// Outcome of reconciling one tier pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct TierReconciliation {
    pub tier: Tier,
    /// The guild with the tier pointer updated.
    pub guild: Guild,
    pub grants: Vec<PermissionGrant>,
    pub revokes: Vec<PermissionRevoke>,
    /// `(<Tier> role changed to <name>)` when the pointer changed.
    pub audit_fragment: Option<String>,
}

impl TierReconciliation {
    /// Local ids of the roles this reconciliation writes to.
    fn touched_role_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.grants
            .iter()
            .map(|grant| grant.role_id)
            .chain(self.revokes.iter().map(|revoke| revoke.role_id))
    }
}

/// Everything a settings submission writes, computed before any write happens.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsPlan {
    pub update: UpdateGuildParam,
    pub grants: Vec<PermissionGrant>,
    pub revokes: Vec<PermissionRevoke>,
    pub audit_description: String,
}

/// Catalog permission ids granted to holders of `tier`, in catalog order.
pub fn tier_permission_ids(tier: Tier, catalog: &[Permission]) -> Vec<i32> {
    catalog
        .iter()
        .filter(|permission| permission.tier.is_some_and(|note| tier.covers(note)))
        .map(|permission| permission.id)
        .collect()
}

/// Reconciles a single tier pointer of `guild` against the requested Discord role.
///
/// - Requesting the current holder changes nothing and produces no fragment.
/// - Requesting a different role resolves it within `roles` and syncs it to the
///   tier's permission set.
/// - Requesting no role clears the pointer.
///
/// Whenever the pointer changes, the previous holder is stripped.
///
/// # Returns
/// - `Ok(TierReconciliation)` - Updated guild, operations and audit fragment
/// - `Err(GuildError::RoleNotFound)` - The requested role is not one of `roles`
pub fn reconcile_tier_role(
    guild: &Guild,
    tier: Tier,
    requested: Option<u64>,
    roles: &[GuildRole],
    catalog: &[Permission],
) -> Result<TierReconciliation, GuildError> {
    let current = guild.tiers.get(tier);
    let mut reconciliation = TierReconciliation {
        tier,
        guild: guild.clone(),
        grants: Vec::new(),
        revokes: Vec::new(),
        audit_fragment: None,
    };

    if requested == current {
        return Ok(reconciliation);
    }

    if let Some(previous) = current.and_then(|role_id| find_role(roles, role_id)) {
        reconciliation
            .revokes
            .push(PermissionRevoke { role_id: previous.id });
    }

    let holder_name = match requested {
        Some(role_id) => {
            let role = find_role(roles, role_id).ok_or(GuildError::RoleNotFound {
                field: tier.field(),
                role_id,
            })?;

            reconciliation.grants.push(PermissionGrant {
                role_id: role.id,
                permission_ids: tier_permission_ids(tier, catalog),
            });

            role.name.clone()
        }
        None => "none".to_string(),
    };

    reconciliation.guild.tiers.set(tier, requested);
    reconciliation.audit_fragment =
        Some(format!("({} role changed to {})", tier.label(), holder_name));

    Ok(reconciliation)
}

/// Plans a full settings submission.
///
/// Tiers are reconciled from most to least senior. Every role touched along the
/// way, including roles displaced from a tier, is then brought to the permission
/// set of the most senior tier it still holds, or stripped if it holds none.
///
/// # Arguments
/// - `guild` - Guild as currently stored
/// - `param` - Parsed settings submission
/// - `roles` - All roles of the guild
/// - `catalog` - Full permission catalog
/// - `actor` - Display name of the member submitting the settings
///
/// # Returns
/// - `Ok(SettingsPlan)` - Guild update, permission operations and audit text
/// - `Err(GuildError::RoleNotFound)` - A tier or member role is not a role of the guild
pub fn plan_settings(
    guild: &Guild,
    param: &UpdateGuildSettingsParam,
    roles: &[GuildRole],
    catalog: &[Permission],
    actor: &str,
) -> Result<SettingsPlan, GuildError> {
    let mut fragments = Vec::new();
    if param.name != guild.name {
        fragments.push(format!("(guild name changed to {})", param.name));
    }

    let mut reconciled = guild.clone();
    let mut touched: Vec<i32> = Vec::new();
    for tier in Tier::ALL {
        let step = reconcile_tier_role(&reconciled, tier, param.tiers.get(tier), roles, catalog)?;

        for role_id in step.touched_role_ids() {
            if !touched.contains(&role_id) {
                touched.push(role_id);
            }
        }
        fragments.extend(step.audit_fragment);
        reconciled = step.guild;
    }

    let mut grants = Vec::new();
    let mut revokes = Vec::new();
    for role in touched
        .iter()
        .filter_map(|role_id| roles.iter().find(|role| role.id == *role_id))
    {
        match reconciled.tiers.highest_tier_of(role.discord_id) {
            Some(tier) => grants.push(PermissionGrant {
                role_id: role.id,
                permission_ids: tier_permission_ids(tier, catalog),
            }),
            None => revokes.push(PermissionRevoke { role_id: role.id }),
        }
    }

    let mut member_role_ids: Vec<u64> = Vec::with_capacity(param.member_role_ids.len());
    for role_id in &param.member_role_ids {
        if !member_role_ids.contains(role_id) {
            member_role_ids.push(*role_id);
        }
    }

    let mut member_role_names = Vec::with_capacity(member_role_ids.len());
    for role_id in &member_role_ids {
        let role = find_role(roles, *role_id).ok_or(GuildError::RoleNotFound {
            field: "member_roles",
            role_id: *role_id,
        })?;
        member_role_names.push(role.name.as_str());
    }

    if member_role_ids != guild.member_role_ids {
        let names = if member_role_names.is_empty() {
            "none".to_string()
        } else {
            member_role_names.join(", ")
        };
        fragments.push(format!("(whitelisted member roles changed to {})", names));
    }

    let mut audit_description = format!("{} modified guild settings", actor);
    for fragment in &fragments {
        audit_description.push(' ');
        audit_description.push_str(fragment);
    }

    Ok(SettingsPlan {
        update: UpdateGuildParam {
            name: param.name.clone(),
            slug: slugify(&param.name),
            calendar_link: param.calendar_link.clone(),
            member_role_ids,
            tiers: reconciled.tiers,
        },
        grants,
        revokes,
        audit_description,
    })
}

fn find_role(roles: &[GuildRole], discord_id: u64) -> Option<&GuildRole> {
    roles.iter().find(|role| role.discord_id == discord_id)
}

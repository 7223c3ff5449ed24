//! Guild permission tiers.
//!
//! A guild designates up to three Discord roles as its guild master, officer and
//! raid leader roles. Each tier grants a cumulative slice of the permission
//! catalog: a tier includes the permissions of every tier junior to it.

/// Permission tier a Discord role can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    GuildMaster,
    Officer,
    RaidLeader,
}

impl Tier {
    /// All tiers from most to least senior.
    ///
    /// Settings submissions are reconciled in this order.
    pub const ALL: [Tier; 3] = [Tier::GuildMaster, Tier::Officer, Tier::RaidLeader];

    /// The `role_note` value tagging catalog permissions that belong to this tier.
    pub fn note(self) -> &'static str {
        match self {
            Tier::GuildMaster => "guild_master",
            Tier::Officer => "officer",
            Tier::RaidLeader => "raid_leader",
        }
    }

    /// Parses a catalog `role_note`.
    pub fn from_note(note: &str) -> Option<Self> {
        Tier::ALL.into_iter().find(|tier| tier.note() == note)
    }

    /// Label used in audit log messages.
    pub fn label(self) -> &'static str {
        match self {
            Tier::GuildMaster => "GM",
            Tier::Officer => "Officer",
            Tier::RaidLeader => "Raid Leader",
        }
    }

    /// Settings form field carrying this tier's role id.
    pub fn field(self) -> &'static str {
        match self {
            Tier::GuildMaster => "gm_role_id",
            Tier::Officer => "officer_role_id",
            Tier::RaidLeader => "raid_leader_role_id",
        }
    }

    /// Whether permissions tagged with `other` are part of this tier's set.
    ///
    /// A tier covers itself and every tier junior to it.
    pub fn covers(self, other: Tier) -> bool {
        self.seniority() <= other.seniority()
    }

    fn seniority(self) -> u8 {
        match self {
            Tier::GuildMaster => 0,
            Tier::Officer => 1,
            Tier::RaidLeader => 2,
        }
    }
}

/// The Discord role id currently assigned to each tier of a guild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierPointers {
    pub guild_master: Option<u64>,
    pub officer: Option<u64>,
    pub raid_leader: Option<u64>,
}

impl TierPointers {
    pub fn get(&self, tier: Tier) -> Option<u64> {
        match tier {
            Tier::GuildMaster => self.guild_master,
            Tier::Officer => self.officer,
            Tier::RaidLeader => self.raid_leader,
        }
    }

    pub fn set(&mut self, tier: Tier, role_id: Option<u64>) {
        match tier {
            Tier::GuildMaster => self.guild_master = role_id,
            Tier::Officer => self.officer = role_id,
            Tier::RaidLeader => self.raid_leader = role_id,
        }
    }

    /// The most senior tier the given role is assigned to, if any.
    pub fn highest_tier_of(&self, role_id: u64) -> Option<Tier> {
        Tier::ALL
            .into_iter()
            .find(|tier| self.get(*tier) == Some(role_id))
    }
}

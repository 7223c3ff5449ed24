//! Entity factories.
//!
//! Each module has a `*Factory` builder for tests that care about specific
//! fields, and a `create_*` function for those that don't:
//!
//! ```rust,ignore
//! let (owner, guild, member) = factory::helpers::create_guild_with_owner(db).await?;
//! let officer = RoleFactory::new(db, guild.id).name("Officer").build().await?;
//! ```
//!
//! `permission` seeds the catalog and looks up permission ids by slug.

pub mod guild;
pub mod helpers;
pub mod member;
pub mod permission;
pub mod role;
pub mod user;

pub use guild::create_guild;
pub use member::create_member;
pub use user::create_user;

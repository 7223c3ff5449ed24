//! Test support for the guild roster backend.
//!
//! - [`builder::TestBuilder`] creates an in-memory sqlite database with the guild
//!   tables and, optionally, the seeded permission catalog.
//! - [`context::TestContext`] holds that database and a session stored in it.
//! - [`factory`] inserts users, guilds, roles and members with overridable defaults.
//! - [`serenity`] builds Serenity API objects from Discord-shaped JSON.
//!
//! ```rust,ignore
//! let test = TestBuilder::new()
//!     .with_guild_tables()
//!     .with_permission_catalog()
//!     .build()
//!     .await?;
//! let db = test.db.as_ref().unwrap();
//! let user = factory::user::create_user(db).await?;
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;

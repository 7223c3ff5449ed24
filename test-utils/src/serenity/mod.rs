//! Serenity objects for tests, deserialized from the JSON Discord would send.
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role};
//!
//! let admin = create_test_role(111111111, "Admin", 0xFF0000, 10, 0x8);
//! let member = create_test_member(1, 7, "arthur", None, &[111111111]);
//! ```

pub mod guild;
pub mod member;
pub mod role;

pub use guild::create_test_guild_info;
pub use member::create_test_member;
pub use role::create_test_role;

//! Domain types passed between repositories, services and controllers.
//!
//! Repositories build these from entity models; controllers turn them into DTOs.

pub mod audit_log;
pub mod discord;
pub mod guild;
pub mod member;
pub mod permission;
pub mod role;
pub mod tier;
pub mod user;

//! Repositories, one per table group.
//!
//! Each borrows any `ConnectionTrait`, so services can run it on the pool or on
//! an open transaction. Entity models stay in here; callers get domain models.

pub mod audit_log;
pub mod guild;
pub mod member;
pub mod permission;
pub mod role;
pub mod user;

#[cfg(test)]
mod test;

//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate
//! input, call Discord, and coordinate repository calls, wrapping multi-step
//! writes in a transaction. The decisions themselves (account linking,
//! registration authorization, tier reconciliation) are kept in plain functions
//! and types that can be tested without I/O.

pub mod auth;
pub mod discord;
pub mod guild;

#[cfg(test)]
mod test;

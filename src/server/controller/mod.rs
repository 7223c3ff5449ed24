//! HTTP handlers.
//!
//! Handlers resolve access through `AuthGuard`, delegate to a service, and map
//! domain models to DTOs. Errors propagate as `AppError`, which renders the
//! response.

pub mod auth;
pub mod guild;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::{model::api::ErrorDto, server::error::validation_response};

#[derive(Error, Debug)]
pub enum GuildError {
    /// No registered guild has this slug.
    #[error("Guild '{0}' not found")]
    NotFound(String),

    /// The caller lacks the rights needed for this guild operation.
    ///
    /// Either admin rights on the Discord server (registration) or the
    /// app-level capability (settings). Results in 403 Forbidden with the
    /// message shown to the user. No state changes.
    #[error("{0}")]
    PermissionDenied(String),

    /// A requested role id does not belong to the guild's role set.
    ///
    /// Reported as a field validation failure on `field`.
    #[error("Role {role_id} requested for {field} is not a role of this guild")]
    RoleNotFound {
        /// Form field that carried the role id
        field: &'static str,
        /// Requested Discord role id
        role_id: u64,
    },
}

impl IntoResponse for GuildError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Guild not found".to_string(),
                }),
            )
                .into_response(),
            Self::PermissionDenied(message) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: message })).into_response()
            }
            Self::RoleNotFound { field, .. } => {
                let mut errors = ValidationErrors::new();
                errors.add(
                    field,
                    ValidationError::new("exists")
                        .with_message("The selected role is not a role of this guild.".into()),
                );
                validation_response(&errors)
            }
        }
    }
}

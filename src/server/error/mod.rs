//! `AppError` and its mapping onto HTTP responses.
//!
//! Handlers return `Result<_, AppError>`. Auth and guild failures pick their own
//! status codes; infrastructure failures become a logged 500 or, for Discord, a 502.

pub mod auth;
pub mod config;
pub mod guild;

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::{
    model::api::{ErrorDto, ValidationErrorDto},
    server::error::{auth::AuthError, config::ConfigError, guild::GuildError},
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Startup only.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    #[error(transparent)]
    AuthErr(#[from] AuthError),

    #[error(transparent)]
    GuildErr(#[from] GuildError),

    /// 422 with messages keyed by form field.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// A user-token Discord call failed.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// A bot-token Discord call failed.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Listener or socket failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Discord answered, but not with anything usable.
    #[error("{0}")]
    ExternalApi(String),
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::GuildErr(err) => err.into_response(),
            Self::Validation(errors) => validation_response(&errors),
            Self::ExternalApi(msg) => {
                tracing::warn!("External API failure: {}", msg);
                (StatusCode::BAD_GATEWAY, Json(ErrorDto { error: msg })).into_response()
            }
            Self::ReqwestErr(err) => {
                tracing::warn!("Discord request failed: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Discord lookup failed, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::DiscordErr(err) => {
                tracing::warn!("Discord API error: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Discord lookup failed, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a 422 response body from field-keyed validation errors.
///
/// Fields without a custom message fall back to the validator's error code.
pub fn validation_response(errors: &ValidationErrors) -> Response {
    let fields: BTreeMap<String, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ValidationErrorDto {
            error: "The given data was invalid.".to_string(),
            fields,
        }),
    )
        .into_response()
}

/// Logs the wrapped error and answers 500 with a generic body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

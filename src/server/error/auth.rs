use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code for an access token failed.
    ///
    /// The user is sent back to the login entry point to retry.
    #[error("Failed to exchange OAuth authorization code: {0}")]
    TokenExchange(String),

    /// Fetching the user's profile with a fresh access token failed.
    ///
    /// The user is sent back to the login entry point to retry.
    #[error("Failed to fetch Discord profile: {0}")]
    ProfileUnavailable(String),

    /// The identity provider returned a profile without an id.
    ///
    /// Nothing is looked up or written. Results in a 400 Bad Request asking the
    /// user to retry.
    #[error("Identity provider did not return an account id")]
    MissingExternalId,

    /// The email is already claimed by a different account of this provider.
    ///
    /// Results in a 409 Conflict naming the email and provider. No state changes.
    #[error("{email} is already linked to a different {provider} account")]
    AccountConflict {
        /// Email the provider returned
        email: String,
        /// Provider name, e.g. `discord`
        provider: &'static str,
    },

    /// No user id stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The session holds no Discord access token for the user.
    ///
    /// Happens for sessions created before the token was stored; logging in
    /// again fixes it. Results in a 401 Unauthorized response.
    #[error("No Discord access token in session")]
    MissingAccessToken,
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 307 Temporary Redirect to `/api/auth/login` - For `TokenExchange` and `ProfileUnavailable`
/// - 400 Bad Request - For `CsrfValidationFailed` and `MissingExternalId`
/// - 401 Unauthorized - For `UserNotInSession` and `MissingAccessToken`
/// - 404 Not Found - For `UserNotInDatabase`
/// - 409 Conflict - For `AccountConflict`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::TokenExchange(_) | Self::ProfileUnavailable(_) => {
                Redirect::temporary("/api/auth/login").into_response()
            }
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::MissingExternalId => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Didn't receive your ID from Discord. Try again.".to_string(),
                }),
            )
                .into_response(),
            Self::AccountConflict { email, provider } => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: format!(
                        "Cannot proceed. Someone already registered {email} and linked it to a \
                         different {provider} account. ({email} is the email {provider} just \
                         gave us) Sorry! Try using a different account."
                    ),
                }),
            )
                .into_response(),
            Self::UserNotInSession | Self::MissingAccessToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You need to log in first.".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "User not found".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

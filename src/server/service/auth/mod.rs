//! Discord OAuth2 login.
//!
//! [`AuthService`] drives the OAuth2 authorization-code flow against Discord and
//! hands the resulting profile to the [`link::AccountLinker`], which resolves it
//! to a local account.

pub mod link;

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{ExternalUser, Provider, User},
    service::{auth::link::AccountLinker, discord::DISCORD_API_URL},
    state::OAuth2Client,
};

/// Profile returned by Discord's `/users/@me` endpoint.
///
/// Only the fields used for account linking are read.
#[derive(Debug, Deserialize)]
pub struct DiscordProfile {
    #[serde(default)]
    pub id: Option<String>,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar hash.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl DiscordProfile {
    /// Converts the profile into a provider-neutral identity.
    ///
    /// A missing id becomes an empty one, which the linker rejects.
    pub fn into_external_user(self) -> ExternalUser {
        let id = self.id.unwrap_or_default();
        let avatar = self
            .avatar
            .map(|hash| format!("https://cdn.discordapp.com/avatars/{}/{}.png", id, hash));

        ExternalUser {
            name: self.global_name.unwrap_or_else(|| self.username.clone()),
            nickname: Some(self.username),
            email: self.email.filter(|email| !email.is_empty()),
            avatar,
            id,
        }
    }
}

/// Result of a completed login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    /// Discord access token, kept for calls made on the user's behalf.
    pub access_token: String,
}

/// Service for the Discord OAuth2 login flow.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Generates the Discord consent URL with a fresh CSRF state token.
    ///
    /// Requests the user's identity and email for account linking and their
    /// server list for guild registration.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("guilds".to_string()))
            .url()
    }

    /// Completes the login after Discord redirects back.
    ///
    /// Exchanges the authorization code, fetches the Discord profile and resolves
    /// it to a local user, linking or creating one as needed.
    ///
    /// # Returns
    /// - `Ok(LoginOutcome)` - The logged-in user and their Discord access token
    /// - `Err(AuthError::TokenExchange)` - Discord rejected the authorization code
    /// - `Err(AuthError::ProfileUnavailable)` - The profile request failed
    /// - `Err(AuthError::MissingExternalId)` - The profile carried no id
    /// - `Err(AuthError::AccountConflict)` - The email belongs to another Discord account
    /// - `Err(AppError::DbErr)` - Database error while linking
    pub async fn callback(&self, authorization_code: String) -> Result<LoginOutcome, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;
        let access_token = token.access_token().secret().to_string();

        let profile = self.fetch_discord_profile(&access_token).await?;
        let external = profile.into_external_user();

        let user = AccountLinker::new(self.db)
            .link_or_create(&external, Provider::Discord)
            .await?;

        tracing::info!("User {} logged in with Discord", user.id);

        Ok(LoginOutcome { user, access_token })
    }

    async fn fetch_discord_profile(&self, access_token: &str) -> Result<DiscordProfile, AuthError> {
        let response = self
            .http_client
            .get(format!("{}/users/@me", DISCORD_API_URL))
            .bearer_auth(access_token)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AuthError::ProfileUnavailable(e.to_string()))?;

        response
            .json::<DiscordProfile>()
            .await
            .map_err(|e| AuthError::ProfileUnavailable(e.to_string()))
    }
}

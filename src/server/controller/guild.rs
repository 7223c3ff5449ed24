use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        guild::{
            GuildDto, GuildHomeDto, GuildSettingsDto, GuildSettingsUpdatedDto,
            PaginatedAuditLogsDto, RegisterGuildDto, RegistrableGuildDto, UpdateGuildSettingsDto,
        },
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{AuthGuard, Capability},
            session::AuthSession,
        },
        service::guild::{registration::RegistrationService, GuildService},
        state::AppState,
    },
};

pub static GUILD_TAG: &str = "guild";

/// Page selection for the audit log.
#[derive(Deserialize, IntoParams)]
pub struct AuditLogParams {
    /// Zero-indexed page number.
    #[serde(default)]
    pub page: u64,
    /// Entries per page, at most 100.
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    25
}

#[utoipa::path(
    get,
    path = "/api/guilds/register",
    tag = GUILD_TAG,
    responses(
        (status = 200, description = "Servers the user administers", body = Vec<RegistrableGuildDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 502, description = "Discord request failed", body = ErrorDto)
    ),
)]
pub async fn get_registrable_guilds(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require_user().await?;

    let Some(access_token) = AuthSession::new(&session).get_access_token().await? else {
        return Err(AuthError::MissingAccessToken.into());
    };

    let guilds = RegistrationService::new(&state.db, &state.discord)
        .list_registrable(&access_token)
        .await?;

    let dtos: Vec<RegistrableGuildDto> = guilds.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/guilds/register",
    tag = GUILD_TAG,
    request_body = RegisterGuildDto,
    responses(
        (status = 201, description = "Guild registered", body = GuildDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "No admin permissions on the server", body = ErrorDto),
        (status = 422, description = "Invalid registration", body = ValidationErrorDto),
        (status = 502, description = "Discord request failed", body = ErrorDto)
    ),
)]
pub async fn register_guild(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterGuildDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let guild = RegistrationService::new(&state.db, &state.discord)
        .register(&user, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(guild.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{slug}",
    tag = GUILD_TAG,
    params(
        ("slug" = String, Path, description = "Guild slug")
    ),
    responses(
        (status = 200, description = "Guild overview", body = GuildHomeDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto)
    ),
)]
pub async fn get_guild(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .require_member(&slug, &[])
        .await?;

    Ok((
        StatusCode::OK,
        Json(GuildHomeDto {
            guild: access.guild.into_dto(),
            member: access.member.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{slug}/settings",
    tag = GUILD_TAG,
    params(
        ("slug" = String, Path, description = "Guild slug")
    ),
    responses(
        (status = 200, description = "Guild settings", body = GuildSettingsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing edit permission", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto)
    ),
)]
pub async fn get_guild_settings(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .require_member(&slug, &[Capability::EditGuild])
        .await?;

    let settings = GuildService::new(&state.db).settings(access.guild).await?;

    Ok((
        StatusCode::OK,
        Json(GuildSettingsDto {
            guild: settings.guild.into_dto(),
            roles: settings.roles.into_iter().map(|r| r.into_dto()).collect(),
            permissions: settings
                .permissions
                .into_iter()
                .map(|p| p.into_dto())
                .collect(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/guilds/{slug}/settings",
    tag = GUILD_TAG,
    params(
        ("slug" = String, Path, description = "Guild slug")
    ),
    request_body = UpdateGuildSettingsDto,
    responses(
        (status = 200, description = "Settings saved", body = GuildSettingsUpdatedDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing edit permission", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 422, description = "Invalid settings", body = ValidationErrorDto)
    ),
)]
pub async fn update_guild_settings(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateGuildSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .require_member(&slug, &[Capability::EditGuild])
        .await?;

    let guild = GuildService::new(&state.db)
        .update_settings(&access, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(GuildSettingsUpdatedDto {
            status: "Successfully updated guild settings.".to_string(),
            guild: guild.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{slug}/audit-logs",
    tag = GUILD_TAG,
    params(
        ("slug" = String, Path, description = "Guild slug"),
        AuditLogParams
    ),
    responses(
        (status = 200, description = "Audit log page, newest first", body = PaginatedAuditLogsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto)
    ),
)]
pub async fn get_audit_logs(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
    Query(params): Query<AuditLogParams>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .require_member(&slug, &[])
        .await?;

    let entries = GuildService::new(&state.db)
        .audit_log(access.guild.id, params.page, params.per_page)
        .await?;

    Ok((StatusCode::OK, Json(entries.into_dto())))
}

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth::*, guild::*},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Guild Roster API"),
    tags(
        (name = "auth", description = "Discord login and session"),
        (name = "guild", description = "Guild registration, settings and audit log"),
    )
)]
struct ApiDoc;

/// Builds the API router with OpenAPI documentation served under `/api/docs`.
///
/// `/api/guilds/register` is a static segment and takes precedence over
/// `/api/guilds/{slug}`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(login))
        .routes(routes!(callback))
        .routes(routes!(logout))
        .routes(routes!(get_user))
        .routes(routes!(get_registrable_guilds, register_guild))
        .routes(routes!(get_guild))
        .routes(routes!(get_guild_settings, update_guild_settings))
        .routes(routes!(get_audit_logs))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}

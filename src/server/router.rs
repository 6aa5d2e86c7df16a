//! Route table and OpenAPI document.
//!
//! Routes are registered through `utoipa_axum::routes!`, which reads the path and method
//! from each handler's `#[utoipa::path]` attribute. Handlers sharing a path are grouped in
//! one `routes!` call. The generated document is served at `/api-docs/openapi.json` and
//! browsable under `/swagger-ui`.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{category, comment, compilation, event, rating, request, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Eventboard",
        description = "Publish events, collect participation requests, comments and ratings"
    ),
    tags(
        (name = "category", description = "Event categories"),
        (name = "user", description = "User administration"),
        (name = "event", description = "Private, admin and public event operations"),
        (name = "request", description = "Participation requests and their moderation"),
        (name = "compilation", description = "Curated event collections"),
        (name = "comment", description = "Event comments"),
        (name = "rating", description = "Event ratings")
    )
)]
pub struct ApiDoc;

/// Builds the application router with every endpoint, the Swagger UI and the HTTP layers.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Admin API
        .routes(routes!(category::create_category))
        .routes(routes!(category::update_category, category::delete_category))
        .routes(routes!(user::create_user, user::get_users))
        .routes(routes!(user::delete_user))
        .routes(routes!(event::search_admin_events))
        .routes(routes!(event::update_admin_event))
        .routes(routes!(compilation::create_compilation))
        .routes(routes!(
            compilation::update_compilation,
            compilation::delete_compilation
        ))
        .routes(routes!(comment::delete_comment))
        // Private API
        .routes(routes!(event::create_event, event::get_user_events))
        .routes(routes!(event::get_user_event, event::update_user_event))
        .routes(routes!(
            request::get_event_requests,
            request::update_request_statuses
        ))
        .routes(routes!(request::create_request, request::get_user_requests))
        .routes(routes!(request::cancel_request))
        .routes(routes!(
            comment::create_comment,
            comment::update_comment,
            comment::delete_own_comment
        ))
        .routes(routes!(
            rating::create_rating,
            rating::update_rating,
            rating::delete_rating
        ))
        // Public API
        .routes(routes!(category::get_categories))
        .routes(routes!(category::get_category))
        .routes(routes!(event::search_public_events))
        .routes(routes!(event::get_public_event))
        .routes(routes!(compilation::get_compilations))
        .routes(routes!(compilation::get_compilation))
        .routes(routes!(comment::get_event_comments))
        .routes(routes!(comment::count_event_comments))
        .routes(routes!(rating::get_event_rating))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

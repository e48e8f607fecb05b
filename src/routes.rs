// src/routes.rs

use axum::{
    Router,
    http::Method,
    middleware,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{errors, home, questions},
    models::question::Question,
    state::AppState,
    utils::basic_auth::{admin_auth_middleware, user_auth_middleware},
};

/// OpenAPI document for the service; the interactive UI lives at /docs.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Questionnaire API",
        description = "API to query a database to return a series of questions.",
        version = "1.0.0"
    ),
    paths(
        home::read_root,
        home::get_thing,
        questions::get_questions,
        questions::add_question,
        errors::get_my_custom_exception,
    ),
    components(schemas(Question)),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Registers the HTTP Basic scheme referenced by the protected paths.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

/// Assembles the main application router.
///
/// * Read and write question routes sit behind separate credential checks.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (dataset store + configuration).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let read_routes = Router::new()
        .route("/questions", get(questions::get_questions))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            user_auth_middleware,
        ));

    let admin_routes = Router::new()
        .route("/questions", post(questions::add_question))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth_middleware,
        ));

    Router::new()
        .route("/", get(home::read_root))
        .route("/thing", get(home::get_thing))
        .route("/my_custom_exception", get(errors::get_my_custom_exception))
        .merge(read_routes)
        .merge(admin_routes)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

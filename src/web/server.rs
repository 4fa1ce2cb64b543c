use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::state::StateStore;

use super::api::{state as state_handlers, stream as stream_handlers};
use super::api_doc::ApiDoc;
use super::config::Config;
use super::state::AppState;
use super::ui::handlers as ui_handlers;

/// Build the full router. Factored out of [`run_server`] so tests can serve
/// it on an ephemeral listener.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // UI routes
        .route("/", get(ui_handlers::dashboard))
        // Streaming + state API
        .route("/streaming", get(stream_handlers::subscribe))
        .route("/api/state", get(state_handlers::current))
        // Static files
        .nest_service("/static", ServeDir::new("src/web/static"))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .fallback(ui_handlers::not_found)
        .with_state(state)
}

pub async fn run_server(config: Config, store: StateStore) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();
    let state = AppState::new(config, store);
    let app = app(state);

    log::info!("starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}

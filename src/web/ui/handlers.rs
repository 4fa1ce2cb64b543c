use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::web::state::AppState;

use super::templates::{DashboardTemplate, ErrorTemplate};

pub async fn dashboard(State(_state): State<AppState>) -> impl IntoResponse {
    DashboardTemplate {
        stream_path: "/streaming",
    }
}

/// Catch-all for unknown routes: a single-shot error page, no retry hints.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        ErrorTemplate {
            status: 404,
            message: "Not Found".to_string(),
        },
    )
}

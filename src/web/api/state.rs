use axum::{extract::State, Json};

use crate::state::SimulationSnapshot;
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[utoipa::path(
    get,
    path = "/api/state",
    responses(
        (status = 200, description = "Most recent simulation snapshot", body = SimulationSnapshot),
        (status = 500, description = "Stored payload failed to decode", body = ErrorResponse)
    ),
    tag = "state"
)]
pub async fn current(State(state): State<AppState>) -> ApiResult<Json<SimulationSnapshot>> {
    // Ingest validates before storing, so this only fails if the default
    // encoding itself were broken.
    let raw = state.store.get();
    let snapshot =
        SimulationSnapshot::from_json(&raw).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(snapshot))
}

use utoipa::OpenApi;

use crate::state::SimulationSnapshot;

use super::api::error::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(super::api::state::current, super::api::stream::subscribe),
    components(schemas(SimulationSnapshot, ErrorResponse)),
    info(
        title = "Drone Relay API",
        description = "UDP-to-SSE relay of drone simulation snapshots",
        version = "0.1.0"
    ),
    tags(
        (name = "state", description = "Simulation state access")
    )
)]
pub struct ApiDoc;

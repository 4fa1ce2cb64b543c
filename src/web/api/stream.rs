use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{
        sse::{Event, Sse},
        IntoResponse, Response,
    },
};
use tokio_stream::{wrappers::IntervalStream, StreamExt};

use crate::web::state::AppState;

/// SSE broadcast of the simulation state.
///
/// Headers go out immediately so the client's event source opens before any
/// data exists. Each connection owns an interval that reads the shared store
/// on every tick and writes one `data:` frame; a slow client simply sees
/// whatever is current at its next tick, never a backlog. Dropping the
/// response stream on disconnect tears the interval down with it, so
/// connection churn cannot leak timers.
#[utoipa::path(
    get,
    path = "/streaming",
    responses(
        (status = 200, description = "text/event-stream of simulation snapshots, one `data: <json>` frame per push period", body = String)
    ),
    tag = "state"
)]
pub async fn subscribe(State(state): State<AppState>) -> Response {
    let store = state.store.clone();
    let period = Duration::from_millis(state.config.stream.period_ms.max(1));

    // The guard lives inside the stream, so the subscriber gauge falls the
    // moment the connection's stream is dropped.
    let guard = store.subscriber_guard();
    let frames = IntervalStream::new(tokio::time::interval(period)).map(move |_| {
        let _ = &guard;
        Ok::<Event, Infallible>(Event::default().data(store.get()))
    });

    let mut response = Sse::new(frames).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache"),
    );
    response
}

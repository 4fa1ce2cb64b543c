//! Terminal SSE follower: one subscription feeding both consumers.

use std::time::{Duration, Instant};

use reqwest::header::ACCEPT;
use thiserror::Error;

use crate::state::SimulationSnapshot;
use crate::viewer::chart::{ChartFeed, DEFAULT_DECIMATION, DEFAULT_WINDOW};
use crate::viewer::scene::SceneConsumer;
use crate::viewer::sse::FrameDecoder;

/// Chase anchors to rotate through while watching.
const CHASE_ANCHORS: usize = 2;

/// How often the watcher cycles the camera rig to show off the anchors.
const CAMERA_SWITCH_EVERY: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}

/// Subscribe to `url` and print one status line per accepted chart sample
/// until the stream ends or the connection drops.
pub async fn run(url: &str) -> Result<(), WatchError> {
    let mut response = reqwest::Client::new()
        .get(url)
        .header(ACCEPT, "text/event-stream")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(WatchError::Status(response.status()));
    }
    log::info!("subscribed to {}", url);

    let mut decoder = FrameDecoder::new();
    let mut chart = ChartFeed::new(DEFAULT_WINDOW, DEFAULT_DECIMATION);
    let mut scene = SceneConsumer::new(CHASE_ANCHORS);
    let mut last_switch = Instant::now();

    while let Some(chunk) = response.chunk().await? {
        for payload in decoder.feed(&chunk) {
            let snapshot = match SimulationSnapshot::from_json(&payload) {
                Ok(s) => s,
                Err(e) => {
                    log::warn!("skipping unparseable frame: {}", e);
                    continue;
                }
            };

            if last_switch.elapsed() >= CAMERA_SWITCH_EVERY {
                last_switch = Instant::now();
                scene.cycle_camera();
            }

            scene.apply(&snapshot);
            if chart.push(&snapshot) {
                print_status(&chart, &scene);
            }
        }
    }

    log::info!("stream closed by server");
    Ok(())
}

fn print_status(chart: &ChartFeed, scene: &SceneConsumer) {
    let Some((t_ms, drone_kmh, ball_kmh)) = chart.latest() else {
        return;
    };

    let camera = match scene.camera() {
        Some(cam) => format!(
            "chase #{} at ({:6.2}, {:6.2}, {:6.2})",
            scene.rig().index(),
            cam.position.x(),
            cam.position.y(),
            cam.position.z()
        ),
        None => "free orbit".to_string(),
    };

    println!(
        "[{:9.1} ms] drone {:6.1} km/h | ball {:6.1} km/h | camera {}",
        t_ms, drone_kmh, ball_kmh, camera
    );
}

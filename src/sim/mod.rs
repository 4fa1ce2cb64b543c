//! Demo producer: steps the physics at a fixed period and streams each
//! snapshot to the relay as one UDP datagram.

pub mod physics;

use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::net::UdpSocket;

use physics::Simulation;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("socket error: {0}")]
    Io(#[from] std::io::Error),
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Run the producer against `target` until the task is cancelled.
///
/// Timestamps are nanoseconds since producer start, monotonic by
/// construction. Send failures are logged and skipped; a dead relay should
/// not kill the simulation.
pub async fn run(target: &str, period: Duration) -> Result<(), SimError> {
    let socket = UdpSocket::bind("0.0.0.0:0").await?;
    socket.connect(target).await?;
    log::info!(
        "producer sending to {} every {} ms",
        target,
        period.as_millis()
    );

    let started = Instant::now();
    let dt = period.as_secs_f64();
    let mut sim = Simulation::new();
    let mut ticker = tokio::time::interval(period);

    loop {
        ticker.tick().await;
        sim.step(dt);

        let ts = started.elapsed().as_nanos() as i64;
        let payload = serde_json::to_string(&sim.snapshot(ts))?;

        if let Err(e) = socket.send(payload.as_bytes()).await {
            log::warn!("snapshot send failed: {}", e);
        }
    }
}

//! UDP ingest listener: one datagram in, one store overwrite out.

use std::io;

use tokio::net::UdpSocket;

use crate::state::{SimulationSnapshot, StateStore};

/// Generous upper bound; well-formed snapshots are around 300 bytes.
const MAX_DATAGRAM: usize = 2048;

/// Bind the ingest socket and serve it until the task is dropped.
///
/// Only the bind can fail. Receive errors and malformed payloads are logged
/// and skipped so the broadcast path keeps serving the last-known-good value.
pub async fn run(bind: &str, store: StateStore) -> io::Result<()> {
    let socket = UdpSocket::bind(bind).await?;
    log::info!("udp ingest listening on {}", socket.local_addr()?);
    serve(socket, store).await;
    Ok(())
}

/// Receive loop over an already-bound socket.
///
/// Every valid datagram replaces the store contents, no sequencing and no
/// acknowledgement. Payloads that fail to parse as a snapshot are dropped
/// here instead of being forwarded to every connected client.
pub async fn serve(socket: UdpSocket, store: StateStore) {
    let mut buf = vec![0u8; MAX_DATAGRAM];

    loop {
        let (len, peer) = match socket.recv_from(&mut buf).await {
            Ok(received) => received,
            Err(e) => {
                log::warn!("udp receive failed: {}", e);
                continue;
            }
        };

        let raw = match std::str::from_utf8(&buf[..len]) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("dropping non-utf8 datagram from {}: {}", peer, e);
                continue;
            }
        };

        match SimulationSnapshot::from_json(raw) {
            Ok(_) => store.put(raw),
            Err(e) => log::warn!("dropping malformed datagram from {}: {}", peer, e),
        }
    }
}

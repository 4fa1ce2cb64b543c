//! Incremental Server-Sent Events frame decoder.
//!
//! Network reads hand over arbitrary byte chunks; the decoder buffers them
//! and yields one payload per complete event (terminated by a blank line).
//! Lines end at CR, LF, or CRLF, and a CRLF pair may straddle a chunk
//! boundary. Only the `data:` field matters to us; comment lines and other
//! fields are ignored, multiple `data:` lines in one event are joined with
//! newlines.

/// Streaming decoder over the SSE wire format.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    line: Vec<u8>,
    data_lines: Vec<String>,
    pending_cr: bool,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of bytes, returning every event payload it completes.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut payloads = Vec::new();

        for &byte in chunk {
            if self.pending_cr {
                self.pending_cr = false;
                // The CR already ended a line; a following LF is the same
                // terminator, not a new blank line.
                if byte == b'\n' {
                    continue;
                }
            }

            match byte {
                b'\r' => {
                    self.pending_cr = true;
                    self.end_line(&mut payloads);
                }
                b'\n' => self.end_line(&mut payloads),
                _ => self.line.push(byte),
            }
        }

        payloads
    }

    fn end_line(&mut self, payloads: &mut Vec<String>) {
        let line = std::mem::take(&mut self.line);

        if line.is_empty() {
            // Event boundary; dispatch whatever data was collected.
            if !self.data_lines.is_empty() {
                payloads.push(self.data_lines.join("\n"));
                self.data_lines.clear();
            }
            return;
        }

        let line = String::from_utf8_lossy(&line);
        if let Some(value) = line.strip_prefix("data:") {
            self.data_lines
                .push(value.strip_prefix(' ').unwrap_or(value).to_string());
        }
        // ':' comments and id/event/retry fields fall through, ignored.
    }
}

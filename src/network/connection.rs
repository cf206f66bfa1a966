//! Connection Handler
//!
//! Handles a single client connection: reads the request text, resolves an
//! engine through the version registry, writes the response, and closes.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use crate::error::{Result, RhcpError};
use crate::protocol::{extract_version, Engine, ResponseCode, PROTOCOL_TAG_V1};
use crate::store::StatusStore;

/// Handles a single client connection
pub struct Connection {
    /// TCP stream (read and written directly; one request per connection)
    stream: TcpStream,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Create a new connection handler
    pub fn new(stream: TcpStream) -> Result<Self> {
        // Get peer address for logging
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        Ok(Self { stream, peer_addr })
    }

    /// Configure connection timeouts
    pub fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        if read_ms > 0 {
            self.stream
                .set_read_timeout(Some(Duration::from_millis(read_ms)))?;
        }
        if write_ms > 0 {
            self.stream
                .set_write_timeout(Some(Duration::from_millis(write_ms)))?;
        }

        Ok(())
    }

    /// Serve the single request carried by this connection.
    ///
    /// A request that cannot be read, or whose version resolves to no
    /// engine, is answered with the transport's own 500 response; the
    /// engine composes every other response.
    pub fn handle(&mut self, store: &dyn StatusStore, max_request_bytes: usize) -> Result<()> {
        tracing::debug!("connection established from {}", self.peer_addr);

        let raw = match self.receive_request(max_request_bytes) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("failed to read request from {}: {}", self.peer_addr, err);
                let _ = self.send_response(&transport_error_response());
                return Err(err);
            }
        };

        tracing::trace!("received request from {}: {:?}", self.peer_addr, raw);

        let response = match extract_version(&raw).and_then(Engine::resolve) {
            Some(engine) => engine.process(&raw, store),
            None => {
                tracing::debug!("no engine for request from {}", self.peer_addr);
                transport_error_response()
            }
        };

        self.send_response(&response)
    }

    /// Accumulate request chunks until the peer closes its write side or
    /// sends a chunk that is exactly the two-byte CRLF sequence.
    fn receive_request(&mut self, max_request_bytes: usize) -> Result<String> {
        let mut data = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            let n = self.stream.read(&mut chunk)?;
            if n == 0 {
                break;
            }
            data.extend_from_slice(&chunk[..n]);
            if &chunk[..n] == b"\r\n" {
                break;
            }
            if data.len() > max_request_bytes {
                return Err(RhcpError::Protocol(format!(
                    "request exceeds {} bytes",
                    max_request_bytes
                )));
            }
        }

        String::from_utf8(data)
            .map_err(|err| RhcpError::Protocol(format!("request is not valid UTF-8: {}", err)))
    }

    /// Send a response to the client
    fn send_response(&mut self, response: &str) -> Result<()> {
        self.stream.write_all(response.as_bytes())?;
        self.stream.flush()?;
        Ok(())
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

/// Response the transport composes itself when no engine instance exists
/// (unreadable request or unsupported protocol version)
fn transport_error_response() -> String {
    format!(
        "{} {}\r\n\r\n",
        PROTOCOL_TAG_V1,
        ResponseCode::InternalServerError
    )
}

//! TCP Server
//!
//! Accepts connections one at a time and serves each through the version
//! registry. Request handling is fully sequential, which also serializes
//! the store's load-mutate-persist sequence.

use std::net::{TcpListener, TcpStream};

use crate::config::Config;
use crate::error::Result;
use crate::network::Connection;
use crate::store::StatusStore;

/// TCP server for the RHCP protocol
pub struct Server<S> {
    config: Config,
    store: S,
}

impl<S: StatusStore> Server<S> {
    /// Create a new server with the given config and store
    pub fn new(config: Config, store: S) -> Self {
        Self { config, store }
    }

    /// Bind the configured address and serve forever (blocking).
    pub fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.listen_addr)?;
        self.run_on(listener)
    }

    /// Serve connections from an already-bound listener (blocking).
    ///
    /// A per-connection failure is logged and never tears the loop down.
    pub fn run_on(&self, listener: TcpListener) -> Result<()> {
        if let Ok(addr) = listener.local_addr() {
            tracing::info!("listening on {}", addr);
        }

        for incoming in listener.incoming() {
            let stream = match incoming {
                Ok(stream) => stream,
                Err(err) => {
                    tracing::warn!("accept failed: {}", err);
                    continue;
                }
            };

            if let Err(err) = self.serve(stream) {
                tracing::warn!("connection error: {}", err);
            }
        }

        Ok(())
    }

    /// Serve one accepted connection to completion
    fn serve(&self, stream: TcpStream) -> Result<()> {
        let mut connection = Connection::new(stream)?;
        connection.set_timeouts(self.config.read_timeout_ms, self.config.write_timeout_ms)?;
        connection.handle(&self.store, self.config.max_request_bytes)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

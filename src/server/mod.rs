//! HTTP server
//!
//! Serves the lookup form and API over `tiny_http`. The draw is borrowed by
//! every worker thread; nothing writes to it after start-up, so no lock is
//! taken.

mod assets;
pub mod tiny_http;

use std::thread;

use ::tiny_http::Server;
use thiserror::Error;

use crate::config::Config;
use crate::pairing::Pairings;

pub use self::tiny_http::{HttpResponse, route};

/// Errors that can occur while starting the server
#[derive(Debug, Error)]
pub enum ServerError {
    /// Listener could not be created
    #[error("failed to start server on {addr}: {message}")]
    Bind {
        /// Address that was requested
        addr: String,
        /// Reason reported by the listener
        message: String,
    },
}

/// Bind the configured address.
///
/// With port `0` the OS picks a free port; read it back with
/// [`local_address`].
pub fn bind(config: &Config) -> Result<Server, ServerError> {
    let addr = config.address();
    let server = Server::http(&addr).map_err(|e| ServerError::Bind {
        addr,
        message: e.to_string(),
    })?;
    log::info!("listening on http://{}", local_address(&server));
    Ok(server)
}

/// Address the server actually listens on, as `host:port`
#[must_use]
pub fn local_address(server: &Server) -> String {
    server
        .server_addr()
        .to_ip()
        .map_or_else(|| "unknown address".to_string(), |addr| addr.to_string())
}

/// Answer requests from an already-bound server on `workers` threads.
///
/// Returns once the server stops accepting connections.
pub fn run(server: &Server, pairings: &Pairings, workers: usize) {
    log::info!("serving {} participant(s) with {} worker(s)", pairings.len(), workers.max(1));
    thread::scope(|scope| {
        for id in 0..workers.max(1) {
            scope.spawn(move || worker(id, server, pairings));
        }
    });
}

fn worker(id: usize, server: &Server, pairings: &Pairings) {
    for request in server.incoming_requests() {
        let method = request.method().clone();
        let url = request.url().to_string();

        let response = route(&method, &url, pairings);
        log::debug!("[worker {id}] {method} {url} -> {}", response.status_code().0);

        if let Err(e) = request.respond(response) {
            log::warn!("[worker {id}] failed to send response for {url}: {e}");
        }
    }
}

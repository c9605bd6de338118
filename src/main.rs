use crate::config::AppConfig;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

mod bookings;
mod catalog;
mod config;
mod document;
mod domain;
mod errors;
mod export;
mod filters;
mod labels;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let addr: SocketAddr = match config.server.addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(addr = %config.server.addr, error = %e, "invalid listen address");
            std::process::exit(1);
        }
    };
    let max_workers = config.server.max_workers;

    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, hotels = state.catalog.len(), "starting server");

    let server = Server::bind(&addr).max_workers(max_workers);
    let result = server.serve(move |req, _info| handle(req, &state).unwrap_or_else(error_to_response));

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down");
}

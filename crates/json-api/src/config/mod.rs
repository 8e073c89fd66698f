//! Server configuration
//!
//! Read from command line flags, falling back to environment variables and a
//! `.env` file.

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{
    db::DatabaseConfig, logging::LoggingConfig, observability::TelemetryConfig,
    server::ListenConfig,
};

pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod observability;
pub(crate) mod server;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    #[command(flatten)]
    pub listen: ListenConfig,

    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,

    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from `.env`, the environment and CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if a required setting is missing or malformed.
    pub fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.listen.socket_addr()
    }
}

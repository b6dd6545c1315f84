//! Process configuration from command-line flags and environment variables.

use clap::Parser;
use std::net::SocketAddr;

/// Runtime configuration for the task service.
#[derive(Debug, Clone, Parser)]
#[command(name = "tasklite", about = "Task management HTTP service")]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds to.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// SQLite database location; a file path or `:memory:`.
    #[arg(long, env = "DATABASE_URL", default_value = "./tasks.sqlite3")]
    pub database_url: String,

    /// Environment label reported by the health endpoint.
    #[arg(long, env = "APP_ENV", default_value = "development")]
    pub environment: String,
}

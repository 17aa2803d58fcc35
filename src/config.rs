//! Command line and environment configuration.

use clap::Parser;
use std::net::SocketAddr;

/// In-memory users and films service
#[derive(Parser, Debug, Clone)]
#[command(name = "filmorate")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "127.0.0.1:8080")]
    pub listen: SocketAddr,

    /// Log filter in env_logger syntax
    #[arg(long, env = "RUST_LOG", default_value = "filmorate=debug,actix_web=info")]
    pub log_level: String,

    /// Number of HTTP worker threads; defaults to the number of CPUs
    #[arg(long, env = "WORKERS")]
    pub workers: Option<usize>,
}

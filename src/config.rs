//! Runtime configuration.
//!
//! Every option can come from the command line or the environment, with
//! environment variables as the deployment-friendly path:
//! - `SONG_SHELF_DB` - SQLite database file
//! - `SONG_INFO_API_URL` - base URL of the external song info service
//! - `BIND_ADDR` / `PORT` - listening address

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

use crate::store::sqlite::DEFAULT_DB_NAME;

/// Song Shelf server configuration
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Path to the SQLite database file
    #[arg(long, env = "SONG_SHELF_DB", default_value = DEFAULT_DB_NAME)]
    pub db: PathBuf,

    /// Base URL of the external song info API
    #[arg(long, env = "SONG_INFO_API_URL")]
    pub api_url: String,

    /// Address to bind the HTTP server to
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,
}

impl Config {
    /// The socket address to serve on.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

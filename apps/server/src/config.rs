use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use countryinfo_upstream::Endpoints;

const DEFAULT_PORT: &str = "5000";

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    /// Upstream locations are fixed; they are not read from the environment.
    pub upstream: Endpoints,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let port = std::env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        let listen_addr: SocketAddr = std::env::var("COUNTRYINFO_LISTEN_ADDR")
            .unwrap_or_else(|_| format!("0.0.0.0:{}", port))
            .parse()
            .context("Invalid COUNTRYINFO_LISTEN_ADDR")?;
        let cors_allow = std::env::var("COUNTRYINFO_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("COUNTRYINFO_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let static_dir =
            std::env::var("COUNTRYINFO_STATIC_DIR").unwrap_or_else(|_| "frontend/dist".into());
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            upstream: Endpoints::default(),
        })
    }
}

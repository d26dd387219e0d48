use std::env;
use std::net::{IpAddr, Ipv4Addr};

#[derive(Clone)]
pub struct Config {
    /// Address to bind the listener to
    pub bind_addr: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Tracing filter directive used when RUST_LOG is unset
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            bind_addr: env::var("BIND_ADDR")
                .ok()
                .and_then(|a| a.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            log_filter: env::var("LOG_FILTER")
                .unwrap_or_else(|_| "info,calcd_api=debug".to_string()),
        }
    }
}

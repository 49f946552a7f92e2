//! Command line and environment configuration
use std::ffi::OsString;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{anyhow, Result};
use clap::Parser;

pub const DEFAULT_PORT: u16 = 8081;

#[derive(Debug, Clone, Parser)]
#[command(name = "cubespin-server")]
#[command(about = "Serves projected frames of a rotating cube", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "CUBE_BIND", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "CUBE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Name echoed in every response, defaults to the machine's hostname
    #[arg(long = "servername", env = "CUBEHOST")]
    pub server_name: Option<String>,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// The configured server name, or the OS hostname when none is set
    pub fn resolve_server_name(&self) -> Result<String> {
        pick_server_name(self.server_name.as_deref(), gethostname::gethostname)
    }
}

fn pick_server_name(configured: Option<&str>, hostname: impl FnOnce() -> OsString) -> Result<String> {
    match configured {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => hostname()
            .into_string()
            .map_err(|raw| anyhow!("hostname {:?} is not valid UTF-8", raw)),
    }
}

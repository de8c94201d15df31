use crate::config::{Config, DEFAULT_MAX_RETRIES};
use crate::error::ConfigError;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "ping-service")]
#[command(about = "Forwards /ping and /mping requests to a pong service", long_about = None)]
pub struct Cli {
    /// Load PING_PORT, PONG_HOST, PONG_PORT, MAX_RETRIES and PONG_TIMEOUT_MS from a file
    #[arg(
        long,
        conflicts_with_all = ["port", "pong_host", "pong_port", "max_retries", "timeout_ms"]
    )]
    pub env_file: Option<String>,

    /// Port to listen on
    #[arg(short, long, required_unless_present = "env_file")]
    pub port: Option<u16>,

    /// Host of the pong service
    #[arg(long, required_unless_present = "env_file")]
    pub pong_host: Option<String>,

    /// Port of the pong service
    #[arg(long, required_unless_present = "env_file")]
    pub pong_port: Option<u16>,

    /// Attempts per request before answering with a failure
    #[arg(long, default_value_t = DEFAULT_MAX_RETRIES)]
    pub max_retries: u32,

    /// Per-attempt timeout in milliseconds, none when omitted
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

impl Cli {
    pub fn into_config(self) -> Result<Config, ConfigError> {
        if let Some(path) = self.env_file {
            return Config::from_env_file(&path);
        }

        let listen_port = self.port.ok_or(ConfigError::Missing("--port"))?;
        let pong_host = self.pong_host.ok_or(ConfigError::Missing("--pong-host"))?;
        let pong_port = self.pong_port.ok_or(ConfigError::Missing("--pong-port"))?;

        Config {
            max_retries: self.max_retries,
            request_timeout: self.timeout_ms.map(Duration::from_millis),
            ..Config::new(listen_port, pong_host, pong_port)
        }
        .validated()
    }
}

use crate::error::ConfigError;
use std::collections::HashMap;
use std::fs;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_MAX_RETRIES: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub listen_port: u16,
    pub pong_host: String,
    pub pong_port: u16,
    pub max_retries: u32,
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn new(listen_port: u16, pong_host: impl Into<String>, pong_port: u16) -> Self {
        Self {
            listen_port,
            pong_host: pong_host.into(),
            pong_port,
            max_retries: DEFAULT_MAX_RETRIES,
            request_timeout: None,
        }
    }

    pub fn from_env_file(path: &str) -> Result<Self, ConfigError> {
        let vars = load_dotenv(path)?;
        Self::from_vars(&vars)
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let listen_port = required(vars, "PING_PORT")?;

        let pong_host = vars
            .get("PONG_HOST")
            .ok_or(ConfigError::Missing("PONG_HOST"))?
            .clone();

        let pong_port = required(vars, "PONG_PORT")?;

        let max_retries = optional(vars, "MAX_RETRIES")?.unwrap_or(DEFAULT_MAX_RETRIES);

        let request_timeout = optional::<u64>(vars, "PONG_TIMEOUT_MS")?.map(Duration::from_millis);

        Config {
            listen_port,
            pong_host,
            pong_port,
            max_retries,
            request_timeout,
        }
        .validated()
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.pong_host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.max_retries == 0 {
            return Err(ConfigError::ZeroRetries);
        }
        Ok(self)
    }

    /// Base URL of the pong service, without a trailing slash
    pub fn pong_url(&self) -> String {
        format!("http://{}:{}", self.pong_host, self.pong_port)
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.listen_port))
    }
}

fn required<T: FromStr>(
    vars: &HashMap<String, String>,
    key: &'static str,
) -> Result<T, ConfigError> {
    optional(vars, key)?.ok_or(ConfigError::Missing(key))
}

fn optional<T: FromStr>(
    vars: &HashMap<String, String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match vars.get(key) {
        None => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| ConfigError::Invalid {
            key,
            value: value.clone(),
        }),
    }
}

fn load_dotenv(path: &str) -> Result<HashMap<String, String>, ConfigError> {
    let mut vars: HashMap<String, String> = HashMap::new();
    let content = fs::read_to_string(path)?;

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('#') || line.is_empty() {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            vars.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    Ok(vars)
}

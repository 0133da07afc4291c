use std::time::Duration;

pub const DEFAULT_REMOTE_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9000;
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 30;

/// Configuration error raised at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Process configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Base URL of the Unreal Engine editor automation server.
    pub remote_base_url: String,
    pub host: String,
    pub port: u16,
    pub remote_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            remote_base_url: DEFAULT_REMOTE_BASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            remote_timeout: Duration::from_secs(DEFAULT_REMOTE_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Resolve configuration through `lookup`; set values override defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let remote_base_url = lookup("UNREAL_BASE_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.remote_base_url);
        let host = lookup("BPMCP_HOST").unwrap_or(defaults.host);
        let port = parse_var(&lookup, "BPMCP_PORT")?.unwrap_or(defaults.port);
        let remote_timeout = parse_var(&lookup, "BPMCP_REMOTE_TIMEOUT_SECS")?
            .map_or(defaults.remote_timeout, Duration::from_secs);

        Ok(Self {
            remote_base_url,
            host,
            port,
            remote_timeout,
        })
    }

    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(var)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { var, value })
        })
        .transpose()
}

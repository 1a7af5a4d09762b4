use crate::workflows::trends::domain::Platform;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Deployment stage the desk service runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Everything the API process needs at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub trends: TrendsConfig,
}

impl AppConfig {
    /// Reads `.env` (if present) and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&env_or("APP_ENV", "development"));
        let server = ServerConfig {
            host: env_or("APP_HOST", "127.0.0.1"),
            port: env_or("APP_PORT", "3000")
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort)?,
        };
        let telemetry = TelemetryConfig {
            log_level: env_or("APP_LOG_LEVEL", "info"),
        };
        let trends = match env::var("TRENDS_PLATFORMS") {
            Ok(raw) => TrendsConfig {
                platforms: parse_platforms(&raw)?,
            },
            Err(_) => TrendsConfig::default(),
        };

        Ok(Self {
            environment,
            server,
            telemetry,
            trends,
        })
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

/// Address the HTTP listener binds to.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Platforms the monthly trend rollup produces summaries for.
#[derive(Debug, Clone)]
pub struct TrendsConfig {
    pub platforms: Vec<Platform>,
}

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            platforms: Platform::ordered().to_vec(),
        }
    }
}

fn parse_platforms(raw: &str) -> Result<Vec<Platform>, ConfigError> {
    let mut platforms = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
        let platform = entry
            .parse::<Platform>()
            .map_err(|_| ConfigError::InvalidPlatform(entry.to_string()))?;
        if !platforms.contains(&platform) {
            platforms.push(platform);
        }
    }

    if platforms.is_empty() {
        return Err(ConfigError::InvalidPlatform(raw.to_string()));
    }

    Ok(platforms)
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidPlatform(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => f.write_str("APP_PORT is not a port number (0-65535)"),
            ConfigError::InvalidHost { .. } => {
                f.write_str("APP_HOST is neither 'localhost' nor an IP address")
            }
            ConfigError::InvalidPlatform(value) => write!(
                f,
                "TRENDS_PLATFORMS contains unknown platform '{}' (expected twitter, youtube, tiktok, instagram)",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidPlatform(_) => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

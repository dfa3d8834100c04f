use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use inclusa_dashboard::synthetic::DEFAULT_PARTICIPANTS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(eyre::eyre!("expected 'json' or 'pretty', got '{other}'")),
        }
    }
}

/// Server settings, read from `INCLUSA_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Sessions idle for longer than this are dropped.
    pub session_ttl: Duration,
    /// Size of each session's synthetic dataset.
    pub participants: u32,
    /// Fixed dataset seed; every session then sees the same dashboard.
    pub dataset_seed: Option<u64>,
    /// Artificial latency before submissions and exports complete.
    pub simulated_delay: Duration,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            session_ttl: Duration::from_secs(1800),
            participants: DEFAULT_PARTICIPANTS,
            dataset_seed: None,
            simulated_delay: Duration::ZERO,
            log_format: LogFormat::Json,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source. Unset or blank
    /// variables take their defaults; malformed ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            addr: parse(&lookup, "INCLUSA_ADDR")?.unwrap_or(defaults.addr),
            session_ttl: parse(&lookup, "INCLUSA_SESSION_TTL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.session_ttl),
            participants: parse(&lookup, "INCLUSA_PARTICIPANTS")?.unwrap_or(defaults.participants),
            dataset_seed: parse(&lookup, "INCLUSA_DATASET_SEED")?,
            simulated_delay: parse(&lookup, "INCLUSA_SIMULATED_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.simulated_delay),
            log_format: parse(&lookup, "INCLUSA_LOG_FORMAT")?.unwrap_or(defaults.log_format),
        })
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> eyre::Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|e| eyre::eyre!("invalid {key}={raw:?}: {e}"))
}

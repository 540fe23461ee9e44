//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::planner::PlannerConfig;

/// Default listen address.
const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Default admin user name and password.
const DEFAULT_ADMIN: &str = "admin";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: String,
}

/// Credentials required for operations that change the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    /// Create credentials.
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Check a user name and password against these credentials.
    pub fn matches(&self, user: &str, password: &str) -> bool {
        self.user == user && self.password == password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN, DEFAULT_ADMIN)
    }
}

/// Configuration for the server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind: SocketAddr,

    /// Admin credentials for mutating endpoints.
    pub admin: Credentials,

    /// Map file to load instead of the built-in map.
    pub map_file: Option<PathBuf>,

    /// Trip search limits.
    pub planner: PlannerConfig,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `DELIVERY_BIND` | `127.0.0.1:3000` |
    /// | `DELIVERY_ADMIN_USER` | `admin` |
    /// | `DELIVERY_ADMIN_PASSWORD` | `admin` |
    /// | `DELIVERY_MAP_FILE` | built-in map |
    /// | `DELIVERY_MAX_HOPS` | unlimited |
    /// | `DELIVERY_MAX_RESULTS` | unlimited |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a lookup function.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind = match get("DELIVERY_BIND") {
            Some(value) => parse_var("DELIVERY_BIND", value)?,
            None => parse_var("DELIVERY_BIND", DEFAULT_BIND.to_string())?,
        };

        let defaults = Credentials::default();
        let admin = Credentials {
            user: get("DELIVERY_ADMIN_USER").unwrap_or(defaults.user),
            password: get("DELIVERY_ADMIN_PASSWORD").unwrap_or(defaults.password),
        };

        let map_file = get("DELIVERY_MAP_FILE").map(PathBuf::from);

        let max_hops = get("DELIVERY_MAX_HOPS")
            .map(|v| parse_var("DELIVERY_MAX_HOPS", v))
            .transpose()?;
        let max_results = get("DELIVERY_MAX_RESULTS")
            .map(|v| parse_var("DELIVERY_MAX_RESULTS", v))
            .transpose()?;

        Ok(Self {
            bind,
            admin,
            map_file,
            planner: PlannerConfig::new(max_hops, max_results),
        })
    }
}

fn parse_var<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError {
        var,
        reason: e.to_string(),
        value,
    })
}

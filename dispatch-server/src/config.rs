//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cache::CacheConfig;

pub const ENV_BIND_ADDR: &str = "DISPATCH_BIND_ADDR";
pub const ENV_RNG_SEED: &str = "DISPATCH_RNG_SEED";
pub const ENV_MODEL_PATH: &str = "DISPATCH_MODEL_PATH";
pub const ENV_TIMETABLE_CSV: &str = "DISPATCH_TIMETABLE_CSV";
pub const ENV_ROUTE_CACHE_CAPACITY: &str = "DISPATCH_ROUTE_CACHE_CAPACITY";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {value:?} ({reason})")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: &'static str,
}

/// Where per-request randomness comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RngPolicy {
    /// Fresh OS entropy for every request.
    Entropy,
    /// The same seed for every request, so responses are reproducible.
    Seeded(u64),
}

impl RngPolicy {
    /// A generator for one request.
    pub fn request_rng(&self) -> ChaCha8Rng {
        match self {
            RngPolicy::Entropy => ChaCha8Rng::from_entropy(),
            RngPolicy::Seeded(seed) => ChaCha8Rng::seed_from_u64(*seed),
        }
    }
}

/// Which delay model the server runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSelection {
    RuleBased,
    /// Load a trained model from this file; failure aborts startup.
    Trained(PathBuf),
}

/// Configuration for the dispatch server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub rng: RngPolicy,
    pub model: ModelSelection,

    /// Optional timetable CSV; the built-in sample is used if absent.
    pub timetable_csv: Option<PathBuf>,

    pub route_cache: CacheConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            rng: RngPolicy::Entropy,
            model: ModelSelection::RuleBased,
            timetable_csv: None,
            route_cache: CacheConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Unset and empty variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind_addr = get(ENV_BIND_ADDR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError {
                var: ENV_BIND_ADDR,
                value: get(ENV_BIND_ADDR).unwrap_or_default(),
                reason: "expected host:port",
            })?;

        let rng = match get(ENV_RNG_SEED) {
            Some(value) => RngPolicy::Seeded(value.trim().parse().map_err(|_| ConfigError {
                var: ENV_RNG_SEED,
                value,
                reason: "expected an unsigned integer",
            })?),
            None => RngPolicy::Entropy,
        };

        let model = match get(ENV_MODEL_PATH) {
            Some(path) => ModelSelection::Trained(PathBuf::from(path)),
            None => ModelSelection::RuleBased,
        };

        let timetable_csv = get(ENV_TIMETABLE_CSV).map(PathBuf::from);

        let route_cache = match get(ENV_ROUTE_CACHE_CAPACITY) {
            Some(value) => CacheConfig {
                max_capacity: value.trim().parse().map_err(|_| ConfigError {
                    var: ENV_ROUTE_CACHE_CAPACITY,
                    value,
                    reason: "expected an unsigned integer",
                })?,
            },
            None => CacheConfig::default(),
        };

        Ok(Self {
            bind_addr,
            rng,
            model,
            timetable_csv,
            route_cache,
        })
    }
}

//! Vote config loader (strict parsing + environment overrides).
//!
//! Layers, lowest first: built-in defaults, an optional YAML file, then the
//! environment (`OPTION_A`, `OPTION_B`, `REDIS_URL`, `VOTE_LISTEN`,
//! `METRICS_LISTEN`, `MEDIA_DIR`, `STATIC_DIR`). The merged result is
//! validated once.

pub mod schema;

use std::{env, fs, io};

use vote_core::error::{Result, VoteError};

pub use schema::{GatewaySection, OptionsSection, QueueSection, VoteConfig};

/// Env var naming the YAML file to read.
pub const CONFIG_PATH_ENV: &str = "VOTE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "vote.yaml";

/// Load config from `$VOTE_CONFIG` (or `vote.yaml`), then apply the process
/// environment. A missing file is not an error.
pub fn load() -> Result<VoteConfig> {
    let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut cfg = match fs::read_to_string(&path) {
        Ok(s) => parse(&s)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(%path, "config file not found, using defaults");
            VoteConfig::default()
        }
        Err(e) => return Err(VoteError::Config(format!("read config failed: {e}"))),
    };

    apply_env(&mut cfg, |key| env::var(key).ok());
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_file(path: &str) -> Result<VoteConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| VoteError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<VoteConfig> {
    let cfg = parse(s)?;
    cfg.validate()?;
    Ok(cfg)
}

fn parse(s: &str) -> Result<VoteConfig> {
    serde_yaml::from_str(s).map_err(|e| VoteError::Config(format!("invalid yaml: {e}")))
}

/// Overlay environment values onto `cfg`. `lookup` abstracts the environment
/// so callers can test without touching process state.
pub fn apply_env<F>(cfg: &mut VoteConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let overrides: [(&str, &mut String); 7] = [
        ("OPTION_A", &mut cfg.options.a),
        ("OPTION_B", &mut cfg.options.b),
        ("REDIS_URL", &mut cfg.queue.url),
        ("VOTE_LISTEN", &mut cfg.gateway.listen),
        ("METRICS_LISTEN", &mut cfg.gateway.metrics_listen),
        ("MEDIA_DIR", &mut cfg.gateway.media_dir),
        ("STATIC_DIR", &mut cfg.gateway.static_dir),
    ];

    for (key, slot) in overrides {
        if let Some(v) = lookup(key) {
            tracing::debug!(key, value = %v, "config override from environment");
            *slot = v;
        }
    }
}

/// Host identifier shown on the page: `$HOSTNAME`, then the kernel hostname.
pub fn resolve_hostname() -> String {
    if let Ok(h) = env::var("HOSTNAME") {
        if !h.trim().is_empty() {
            return h.trim().to_string();
        }
    }
    fs::read_to_string("/proc/sys/kernel/hostname")
        .map(|s| s.trim().to_string())
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            tracing::warn!("hostname unavailable, using default");
            "unknown".to_string()
        })
}

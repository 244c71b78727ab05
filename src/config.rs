use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const DEFAULT_MAX_REDIRECTS: usize = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent: String,
    pub accept_language: String,
    pub max_redirects: usize,
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            accept_language: "en".to_owned(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Defaults, overlaid by `config.json` in the platform config dir when present,
/// then by `YTSCRAPE_*` environment variables.
pub fn load_or_default() -> FetchConfig {
    let mut config = config_path()
        .and_then(|path| fs::read(&path).ok().map(|bytes| (path, bytes)))
        .map(|(path, bytes)| {
            serde_json::from_slice::<FetchConfig>(&bytes).unwrap_or_else(|err| {
                log::warn!("ignoring {}: {err}", path.display());
                FetchConfig::default()
            })
        })
        .unwrap_or_default();
    sanitize(&mut config);
    apply_env(&mut config, |key| env::var(key).ok());
    config
}

fn sanitize(config: &mut FetchConfig) {
    if config.timeout_secs == 0 {
        log::warn!("timeout_secs must be positive, using {DEFAULT_TIMEOUT_SECS}");
        config.timeout_secs = DEFAULT_TIMEOUT_SECS;
    }
}

pub fn config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("com", "ytscrape", "ytscrape")?;
    Some(proj.config_dir().join("config.json"))
}

fn apply_env(config: &mut FetchConfig, var: impl Fn(&str) -> Option<String>) {
    if let Some(agent) = var("YTSCRAPE_USER_AGENT")
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
    {
        config.user_agent = agent;
    }
    if let Some(n) = var("YTSCRAPE_MAX_REDIRECTS").and_then(|s| s.trim().parse::<usize>().ok()) {
        config.max_redirects = n;
    }
    if let Some(secs) = var("YTSCRAPE_TIMEOUT_SECS")
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|n| *n > 0)
    {
        config.timeout_secs = secs;
    }
}

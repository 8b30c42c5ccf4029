use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::shared::analytics::pareto::DEFAULT_THRESHOLD_PERCENT;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pareto: ParetoConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    /// Consolidated order items CSV
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ParetoConfig {
    /// Cumulative share of unique customers that marks the priority states
    #[serde(default = "default_threshold_percent")]
    pub threshold_percent: f64,
}

impl Default for ParetoConfig {
    fn default() -> Self {
        Self {
            threshold_percent: default_threshold_percent(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_threshold_percent() -> f64 {
    DEFAULT_THRESHOLD_PERCENT
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[dataset]
path = "data/order_items_Consolidado.csv"

[server]
port = 3000

[pareto]
threshold_percent = 85.0
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by the build script)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Make the loaded configuration visible to request handlers
pub fn initialize_config(config: Config) -> anyhow::Result<()> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("config is already initialized"))
}

pub fn get_config() -> Option<&'static Config> {
    CONFIG.get()
}

/// Threshold from the active config, or the default before initialization
pub fn pareto_threshold_percent() -> f64 {
    get_config()
        .map(|config| config.pareto.threshold_percent)
        .unwrap_or(DEFAULT_THRESHOLD_PERCENT)
}

/// Resolve the dataset file path
///
/// Absolute paths are used as is. Relative paths are tried next to the
/// executable first, then relative to the current directory.
pub fn get_dataset_path(config: &Config) -> PathBuf {
    let dataset_path = Path::new(&config.dataset.path);

    if dataset_path.is_absolute() {
        return dataset_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(dataset_path);
            if resolved_path.exists() {
                return resolved_path;
            }
        }
    }

    PathBuf::from(&config.dataset.path)
}

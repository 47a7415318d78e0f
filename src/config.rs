use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "SUMMARIZE_SELECTION_CONFIG";

/// Raw configuration file contents. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(rename = "OLLAMA_PATH", default)]
    pub ollama_path: Option<String>,

    #[serde(rename = "MODEL", default)]
    pub model: Option<String>,

    /// Off unless set; the model call otherwise blocks until the process exits.
    #[serde(rename = "TIMEOUT_SECS", default)]
    pub timeout_secs: Option<u64>,
}

/// Resolved, immutable settings handed to the model runner
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub ollama_path: PathBuf,
    pub model: String,
    pub timeout: Option<Duration>,
}

impl Config {
    /// Load config from a file.
    ///
    /// A missing file or invalid JSON yields an empty config, which later
    /// resolves to "configuration missing" instead of failing the call.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No config at {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "⚠️ Config file {} is invalid, treating as missing: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Load config from the default location
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Both `OLLAMA_PATH` and `MODEL` must be present and non-blank.
    pub fn resolve(&self) -> Option<ModelConfig> {
        let ollama_path = non_blank(self.ollama_path.as_deref())?;
        let model = non_blank(self.model.as_deref())?;

        Some(ModelConfig {
            ollama_path: PathBuf::from(ollama_path),
            model: model.to_string(),
            timeout: self
                .timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Config file lookup: `$SUMMARIZE_SELECTION_CONFIG`, then `./config.json`,
/// then the platform config directory.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    let local = PathBuf::from("config.json");
    if local.exists() {
        return local;
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("summarize-selection")
        .join("config.json")
}

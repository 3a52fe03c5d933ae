//! Runtime configuration.
//!
//! Sources, lowest to highest precedence:
//! - built-in defaults
//! - `.env` / process environment (`SALARY_MODEL_PATH`, `SALARY_MODEL_URL`, `SALARY_CURRENCY`)
//! - CLI flags

use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "models/salary_linear.json";
pub const DEFAULT_CURRENCY: &str = "₹";

const ENV_MODEL_PATH: &str = "SALARY_MODEL_PATH";
const ENV_MODEL_URL: &str = "SALARY_MODEL_URL";
const ENV_CURRENCY: &str = "SALARY_CURRENCY";

/// Where predictions come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// A JSON model artifact on disk.
    File(PathBuf),
    /// A remote scoring endpoint.
    Remote(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub model: ModelSource,
    /// Symbol prefixed to displayed salaries.
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: ModelSource::File(PathBuf::from(DEFAULT_MODEL_PATH)),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, or a map in tests).
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mut config = Self::default();
        if let Some(path) = get(ENV_MODEL_PATH) {
            config.model = ModelSource::File(PathBuf::from(path));
        }
        // A URL wins over a path when both are set.
        if let Some(url) = get(ENV_MODEL_URL) {
            config.model = ModelSource::Remote(url);
        }
        if let Some(currency) = get(ENV_CURRENCY) {
            config.currency = currency;
        }
        config
    }

    /// Apply CLI flags on top. `model_url` beats `model_path`.
    pub fn with_overrides(
        mut self,
        model_path: Option<PathBuf>,
        model_url: Option<String>,
        currency: Option<String>,
    ) -> Self {
        if let Some(path) = model_path {
            self.model = ModelSource::File(path);
        }
        if let Some(url) = model_url {
            self.model = ModelSource::Remote(url);
        }
        if let Some(currency) = currency {
            self.currency = currency;
        }
        self
    }
}

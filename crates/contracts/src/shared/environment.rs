use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Default explorer, used when no environment override is present
const DEFAULT_EXPLORER_BASE_URL: &str = "https://algoexplorer.io";

/// Deployment-specific settings resolved once at startup.
///
/// Mirrors the backend config fallback: explicit environment variable
/// first, embedded default otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    #[serde(rename = "explorerBaseUrl")]
    pub explorer_base_url: String,
}

impl Environment {
    /// Load settings from process environment variables
    pub fn from_env() -> Self {
        Self {
            explorer_base_url: std::env::var("EXPLORER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_EXPLORER_BASE_URL.to_string()),
        }
    }

    /// Block-explorer page for an on-chain asset
    pub fn explorer_asset_url(&self, asset_id: u64) -> String {
        format!(
            "{}/asset/{}",
            self.explorer_base_url.trim_end_matches('/'),
            asset_id
        )
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            explorer_base_url: DEFAULT_EXPLORER_BASE_URL.to_string(),
        }
    }
}

static GLOBAL: Lazy<Environment> = Lazy::new(Environment::from_env);

/// Process-wide environment, resolved on first access
pub fn global() -> &'static Environment {
    &GLOBAL
}

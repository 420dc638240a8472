use std::sync::OnceLock;
use std::time::Duration;

/// Backend address used when none is baked in at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
/// `localStorage` key holding the active conversation id.
pub const CONVERSATION_STORAGE_KEY: &str = "dify_conversation_id";
/// How long a successful save keeps its status banner.
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub storage_key: String,
    pub status_clear_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            storage_key: CONVERSATION_STORAGE_KEY.to_string(),
            status_clear_delay: STATUS_CLEAR_DELAY,
        }
    }
}

impl ClientConfig {
    /// Defaults, with `DSL_CONSOLE_API_BASE` applied when it was set at
    /// compile time.
    pub fn from_build_env() -> Self {
        Self::default().with_api_base(option_env!("DSL_CONSOLE_API_BASE"))
    }

    fn with_api_base(mut self, api_base: Option<&str>) -> Self {
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            self.api_base = base.trim_end_matches('/').to_string();
        }
        self
    }

    /// Joins an endpoint path onto the API base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

static CONFIG_CACHE: OnceLock<ClientConfig> = OnceLock::new();

/// Build-time configuration, computed at first use
pub fn client_config() -> &'static ClientConfig {
    CONFIG_CACHE.get_or_init(ClientConfig::from_build_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_backend_contract() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "http://localhost:8000");
        assert_eq!(config.storage_key, "dify_conversation_id");
        assert_eq!(config.status_clear_delay, Duration::from_secs(3));
    }

    #[test]
    fn api_base_override_drops_trailing_slash() {
        let config = ClientConfig::default().with_api_base(Some("https://runtime.example/"));
        assert_eq!(config.api_base, "https://runtime.example");
        assert_eq!(
            config.endpoint("/chat/send"),
            "https://runtime.example/chat/send"
        );
    }

    #[test]
    fn blank_override_keeps_default() {
        let config = ClientConfig::default().with_api_base(Some("  "));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.endpoint("dsl/content"), "http://localhost:8000/dsl/content");
    }
}

//! Server types and shared state.

use std::sync::Arc;

use crate::config::Config;
use crate::engine::ProductionEngine;

/// Shared application state for all tool handlers.
///
/// Holds the debate engine and the configuration it was built from.
#[derive(Clone)]
pub struct AppState {
    /// Debate orchestration engine.
    pub engine: Arc<ProductionEngine>,
    /// Server configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates application state with a production engine built from
    /// `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            engine: Arc::new(ProductionEngine::new(&config)),
            config: Arc::new(config),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            log_level: "info".to_string(),
            opponent_delay_ms: 0,
        }
    }

    #[test]
    fn test_app_state_debug_shows_config() {
        let state = AppState::new(test_config());
        let rendered = format!("{state:?}");
        assert!(rendered.contains("AppState"));
        assert!(rendered.contains("opponent_delay_ms: 0"));
    }

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppState>();
    }

    #[tokio::test]
    async fn test_app_state_engine_is_usable() {
        let state = AppState::new(test_config());
        assert!(!state.engine.has_active_session().await);
    }
}

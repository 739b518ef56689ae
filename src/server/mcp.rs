//! Main MCP server orchestration.
//!
//! This module provides the entry point for running the debate server.

use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;

use super::tools::DebateServer;
use super::transport::StdioTransport;
use super::types::AppState;

/// Main MCP server that wires configuration, state, and transport.
#[derive(Debug)]
pub struct McpServer {
    /// Server configuration.
    config: Config,
}

impl McpServer {
    /// Creates a new MCP server with the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the server using stdio transport.
    ///
    /// Builds the debate engine and serves requests over stdin/stdout,
    /// blocking until the client disconnects.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails to start or encounters
    /// a runtime error.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn run_stdio(&self) -> Result<(), AppError> {
        let state = AppState::new(self.config.clone());
        let server = DebateServer::new(Arc::new(state));

        let transport = StdioTransport::new();
        let running = transport.serve(server).await?;

        // Wait for the client to disconnect
        let _ = running.waiting().await;

        Ok(())
    }

    /// Returns the server configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            log_level: "info".to_string(),
            opponent_delay_ms: 1500,
        }
    }

    #[test]
    fn test_mcp_server_new() {
        let server = McpServer::new(test_config());
        assert_eq!(server.config().opponent_delay_ms, 1500);
    }

    #[test]
    fn test_mcp_server_debug() {
        let server = McpServer::new(test_config());
        let debug = format!("{server:?}");
        assert!(debug.contains("McpServer"));
    }

    #[test]
    fn test_mcp_server_config_accessor() {
        let mut config = test_config();
        config.log_level = "debug".to_string();
        config.opponent_delay_ms = 0;
        let server = McpServer::new(config);
        assert_eq!(server.config().log_level, "debug");
        assert_eq!(server.config().opponent_delay_ms, 0);
    }
}

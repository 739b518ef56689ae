//! Transport layer for the MCP server.
//!
//! Stdio is the only transport: the server speaks JSON-RPC over
//! stdin/stdout, which is how MCP clients launch it.

use rmcp::service::{serve_server, RoleServer, RunningService};
use rmcp::transport::io::stdio;

use super::tools::DebateServer;
use crate::error::{AppError, McpError};

/// Stdio transport handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdioTransport;

impl StdioTransport {
    /// Creates a stdio transport.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Runs the server over stdin/stdout.
    ///
    /// The returned handle resolves once the client disconnects.
    ///
    /// # Errors
    ///
    /// Returns an error if the MCP handshake fails or the streams
    /// close prematurely.
    pub async fn serve(
        self,
        server: DebateServer,
    ) -> Result<RunningService<RoleServer, DebateServer>, AppError> {
        let (stdin, stdout) = stdio();

        serve_server(server, (stdin, stdout)).await.map_err(|e| {
            AppError::Mcp(McpError::Internal {
                message: e.to_string(),
            })
        })
    }
}

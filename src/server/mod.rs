//! MCP server implementation.
//!
//! This module provides:
//! - MCP JSON-RPC protocol handling
//! - Tool definitions with rmcp macros
//! - Transport layer (stdio)
//!
//! # Architecture
//!
//! The server is built on the rmcp SDK and provides five debate tools:
//!
//! - **Session**: `debate_start`, `debate_argue`, `debate_transcript`
//! - **Analysis**: `debate_analyze`
//! - **Discovery**: `debate_topics`
//!
//! # Example
//!
//! ```no_run
//! use mcp_debate::config::Config;
//! use mcp_debate::server::McpServer;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! McpServer::new(config).run_stdio().await?;
//! # Ok(())
//! # }
//! ```

mod mcp;
mod params;
mod responses;
mod tools;
mod transport;
mod types;

pub use mcp::McpServer;
pub use params::{AnalyzeParams, ArgueParams, StartDebateParams};
pub use responses::{
    AnalyzeResponse, ArgueResponse, MessageView, StartDebateResponse, TopicInfo, TopicsResponse,
    TranscriptResponse,
};
pub use tools::DebateServer;
pub use transport::StdioTransport;
pub use types::AppState;

//! Tool definitions with rmcp macros.
//!
//! This module defines the five debate tools. `#[tool_router]` collects
//! the annotated methods into a router and `#[tool_handler]` wires that
//! router into the `ServerHandler` implementation.

// debate_analyze and debate_topics hold no await; the router takes async methods.
#![allow(clippy::unused_async)]

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler};

use super::params::{AnalyzeParams, ArgueParams, StartDebateParams};
use super::responses::{
    into_tool_result, AnalyzeResponse, ArgueResponse, StartDebateResponse, TopicInfo,
    TopicsResponse, TranscriptResponse,
};
use super::types::AppState;
use crate::engine::ProductionEngine;
use crate::error::SessionError;

/// MCP server exposing the debate tools.
#[derive(Clone)]
pub struct DebateServer {
    /// Shared application state.
    state: Arc<AppState>,
    tool_router: ToolRouter<Self>,
}

fn invalid_params(error: SessionError) -> ErrorData {
    ErrorData::invalid_params(error.to_string(), None)
}

#[tool_router]
impl DebateServer {
    /// Creates a new debate server.
    #[must_use]
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "debate_start",
        description = "Start a debate on a topic. The opponent takes the stance opposite yours and gives its opening statement. Replaces any active debate."
    )]
    async fn debate_start(
        &self,
        Parameters(params): Parameters<StartDebateParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let session = self
            .state
            .engine
            .start(&params.topic, params.user_stance)
            .await
            .map_err(invalid_params)?;
        into_tool_result(&StartDebateResponse::from(&session))
    }

    #[tool(
        name = "debate_argue",
        description = "Submit an argument to the active debate. Returns your message annotated with fallacy findings plus the opponent's reply."
    )]
    async fn debate_argue(
        &self,
        Parameters(params): Parameters<ArgueParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let exchange = self
            .state
            .engine
            .argue(&params.content)
            .await
            .map_err(invalid_params)?;
        into_tool_result(&ArgueResponse::from(&exchange))
    }

    #[tool(
        name = "debate_analyze",
        description = "Scan text for logical fallacies. Works with or without an active debate and never modifies the transcript."
    )]
    async fn debate_analyze(
        &self,
        Parameters(params): Parameters<AnalyzeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let findings = self.state.engine.analyze(&params.text);
        into_tool_result(&AnalyzeResponse::new(findings))
    }

    #[tool(
        name = "debate_topics",
        description = "List suggested debate topics, flagging those with curated opponent replies."
    )]
    async fn debate_topics(&self) -> Result<CallToolResult, ErrorData> {
        let curated = self.state.engine.curated_topics();
        let topics = ProductionEngine::popular_topics()
            .iter()
            .map(|name| TopicInfo {
                name: (*name).to_string(),
                curated: curated.iter().any(|c| c == name),
            })
            .collect();
        into_tool_result(&TopicsResponse::new(topics))
    }

    #[tool(
        name = "debate_transcript",
        description = "Return the active debate's full transcript with per-message fallacy findings."
    )]
    async fn debate_transcript(&self) -> Result<CallToolResult, ErrorData> {
        let session = self
            .state
            .engine
            .transcript()
            .await
            .map_err(invalid_params)?;
        into_tool_result(&TranscriptResponse::from(&session))
    }
}

#[tool_handler]
impl ServerHandler for DebateServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Debate practice server. Start with debate_start, exchange arguments with \
                 debate_argue, and review fallacy feedback with debate_analyze or \
                 debate_transcript."
                    .to_string(),
            ),
        }
    }
}

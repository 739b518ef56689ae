//! Tool response types.
//!
//! Each tool replies with one of these structures serialized to JSON
//! inside a text content block. Views flatten internal types into
//! wire-friendly shapes; timestamps are RFC 3339 strings.

use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::FallacyFinding;
use crate::engine::Exchange;
use crate::error::McpError;
use crate::opponent::Stance;
use crate::session::{DebateSession, Message, Sender};

/// A transcript message as reported to clients.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MessageView {
    /// Message identifier.
    pub id: String,
    /// Utterance text.
    pub content: String,
    /// Message author.
    pub sender: Sender,
    /// Fallacy findings for the message (empty for the opponent).
    pub findings: Vec<FallacyFinding>,
    /// Creation time (RFC 3339).
    pub created_at: String,
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.clone(),
            content: message.content.clone(),
            sender: message.sender,
            findings: message.findings.clone(),
            created_at: message.created_at.to_rfc3339(),
        }
    }
}

/// Response for the `debate_start` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StartDebateResponse {
    /// Unique session identifier.
    pub session_id: String,
    /// Debate topic as stored.
    pub topic: String,
    /// Stance the user argues.
    pub user_stance: Stance,
    /// Stance the opponent argues.
    pub opponent_stance: Stance,
    /// Session start time (RFC 3339).
    pub started_at: String,
    /// Opponent's opening statement.
    pub opening: Option<MessageView>,
}

impl From<&DebateSession> for StartDebateResponse {
    fn from(session: &DebateSession) -> Self {
        Self {
            session_id: session.id.clone(),
            topic: session.topic.clone(),
            user_stance: session.user_stance,
            opponent_stance: session.opponent_stance,
            started_at: session.started_at.to_rfc3339(),
            opening: session.messages().last().map(MessageView::from),
        }
    }
}

/// Response for the `debate_argue` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ArgueResponse {
    /// Session the exchange belongs to.
    pub session_id: String,
    /// The user's message with its fallacy findings.
    pub user_message: MessageView,
    /// The opponent's reply.
    pub opponent_message: MessageView,
}

impl From<&Exchange> for ArgueResponse {
    fn from(exchange: &Exchange) -> Self {
        Self {
            session_id: exchange.session_id.clone(),
            user_message: MessageView::from(&exchange.user_message),
            opponent_message: MessageView::from(&exchange.opponent_message),
        }
    }
}

/// Response for the `debate_analyze` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzeResponse {
    /// Findings in rule-table order, at most one per rule.
    pub findings: Vec<FallacyFinding>,
    /// Number of findings.
    pub total: usize,
}

impl AnalyzeResponse {
    /// Wraps detection results.
    #[must_use]
    pub fn new(findings: Vec<FallacyFinding>) -> Self {
        let total = findings.len();
        Self { findings, total }
    }
}

/// A suggested debate topic.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TopicInfo {
    /// Topic name, usable verbatim with `debate_start`.
    pub name: String,
    /// Whether the opponent has curated replies for this topic. Others
    /// fall back to generic templates.
    pub curated: bool,
}

/// Response for the `debate_topics` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TopicsResponse {
    /// Suggested topics for starting a debate.
    pub topics: Vec<TopicInfo>,
    /// Number of suggested topics.
    pub total: usize,
}

impl TopicsResponse {
    /// Wraps a topic listing.
    #[must_use]
    pub fn new(topics: Vec<TopicInfo>) -> Self {
        let total = topics.len();
        Self { topics, total }
    }
}

/// Response for the `debate_transcript` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TranscriptResponse {
    /// Unique session identifier.
    pub session_id: String,
    /// Debate topic as stored.
    pub topic: String,
    /// Stance the user argues.
    pub user_stance: Stance,
    /// Stance the opponent argues.
    pub opponent_stance: Stance,
    /// Session start time (RFC 3339).
    pub started_at: String,
    /// Full transcript in insertion order.
    pub messages: Vec<MessageView>,
    /// Number of messages.
    pub total: usize,
}

impl From<&DebateSession> for TranscriptResponse {
    fn from(session: &DebateSession) -> Self {
        let messages: Vec<MessageView> = session.messages().iter().map(MessageView::from).collect();
        let total = messages.len();
        Self {
            session_id: session.id.clone(),
            topic: session.topic.clone(),
            user_stance: session.user_stance,
            opponent_stance: session.opponent_stance,
            started_at: session.started_at.to_rfc3339(),
            messages,
            total,
        }
    }
}

/// Serializes a response into a successful tool result with one JSON
/// text content block.
pub(crate) fn into_tool_result<T: Serialize>(response: &T) -> Result<CallToolResult, ErrorData> {
    let json = serde_json::to_string(response).map_err(|e| {
        let error = McpError::Serialization {
            message: e.to_string(),
        };
        ErrorData::internal_error(error.to_string(), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

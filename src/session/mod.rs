//! In-memory debate session state.
//!
//! A session holds the topic, the two stances, and an append-only
//! transcript of messages. Nothing is persisted: the session lives
//! only as long as the process, and starting a new debate replaces it.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::FallacyFinding;
use crate::opponent::Stance;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The human participant.
    User,
    /// The scripted opponent.
    Opponent,
}

/// One transcript entry.
///
/// Messages are immutable once created. User messages carry the
/// findings computed at creation; opponent messages never carry any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Creation-timestamp identifier, unique within a session.
    pub id: String,
    /// Utterance text.
    pub content: String,
    /// Message author.
    pub sender: Sender,
    /// Fallacy findings, in rule-table order. Empty for the opponent.
    pub findings: Vec<FallacyFinding>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a user message with its findings.
    #[must_use]
    pub fn from_user(
        id: impl Into<String>,
        content: impl Into<String>,
        findings: Vec<FallacyFinding>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            sender: Sender::User,
            findings,
            created_at,
        }
    }

    /// Create an opponent message. Opponent messages have no findings.
    #[must_use]
    pub fn from_opponent(
        id: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            sender: Sender::Opponent,
            findings: Vec::new(),
            created_at,
        }
    }
}

/// A single active debate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateSession {
    /// Unique session identifier.
    pub id: String,
    /// Topic under debate.
    pub topic: String,
    /// Stance argued by the user.
    pub user_stance: Stance,
    /// Stance argued by the opponent, always opposite the user's.
    pub opponent_stance: Stance,
    /// When the debate started.
    pub started_at: DateTime<Utc>,
    transcript: Vec<Message>,
}

impl DebateSession {
    /// Create a session. The opponent takes the opposite stance.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        topic: impl Into<String>,
        user_stance: Stance,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            topic: topic.into(),
            user_stance,
            opponent_stance: user_stance.opposite(),
            started_at,
            transcript: Vec::new(),
        }
    }

    /// Append a message to the transcript. Entries are never removed
    /// or reordered.
    pub fn append(&mut self, message: Message) {
        self.transcript.push(message);
    }

    /// Transcript entries in order of creation.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.transcript
    }

    /// Number of transcript entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    /// Whether the transcript is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }
}

/// Generate a unique session ID.
#[must_use]
pub fn generate_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

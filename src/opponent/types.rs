//! Types shared across opponent response selection.

use serde::{Deserialize, Serialize};

/// The side of a topic a participant argues.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    /// Argue in favor of the topic.
    Support,
    /// Argue against the topic.
    Oppose,
}

impl Stance {
    /// The opposing stance.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Support => Self::Oppose,
            Self::Oppose => Self::Support,
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Support => "support",
            Self::Oppose => "oppose",
        }
    }
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which kind of opponent utterance to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// The opponent's first utterance, independent of any user input.
    Opening,
    /// An utterance produced after the user has argued.
    Reply,
}

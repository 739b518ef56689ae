//! Tool parameter types.
//!
//! This module defines the input parameter structures for the debate tools.
//! Each struct uses schemars for automatic JSON schema generation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::opponent::Stance;

/// Parameters for the `debate_start` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StartDebateParams {
    /// Topic to debate.
    #[schemars(description = "Topic to debate, e.g. \"Universal Basic Income\"")]
    pub topic: String,

    /// Stance the user takes on the topic; the opponent takes the opposite.
    #[schemars(description = "Your stance on the topic: support or oppose")]
    pub user_stance: Stance,
}

/// Parameters for the `debate_argue` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ArgueParams {
    /// Argument text to submit to the active debate.
    #[schemars(description = "Your argument for the current debate")]
    pub content: String,
}

/// Parameters for the `debate_analyze` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzeParams {
    /// Text to scan for logical fallacies.
    #[schemars(description = "Text to scan for logical fallacies")]
    pub text: String,
}

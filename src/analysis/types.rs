//! Types for fallacy analysis results.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A flagged rhetorical weakness in user text.
///
/// Multiple findings may attach to one message. Each detection rule
/// yields at most one finding per message, with fixed wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FallacyFinding {
    /// Fallacy category name (e.g. "Ad Hominem").
    pub name: String,
    /// Explanation of the rhetorical weakness.
    pub description: String,
    /// Suggested way to strengthen the argument.
    pub improvement: String,
}

/// A single detection rule: a named fallacy and its trigger predicate.
///
/// The predicate receives the raw input text and its lowercased form,
/// so rules can mix case-preserving pattern matches with lowercase
/// keyword scans.
#[derive(Debug, Clone, Copy)]
pub struct FallacyRule {
    /// Fallacy name reported in findings.
    pub name: &'static str,
    /// Explanation reported in findings.
    pub description: &'static str,
    /// Improvement suggestion reported in findings.
    pub improvement: &'static str,
    /// Trigger predicate over (raw text, lowercased text).
    pub matches: fn(raw: &str, lower: &str) -> bool,
}

impl FallacyRule {
    /// Materialize this rule's finding.
    #[must_use]
    pub fn finding(&self) -> FallacyFinding {
        FallacyFinding {
            name: self.name.to_string(),
            description: self.description.to_string(),
            improvement: self.improvement.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;

    assert_impl_all!(FallacyFinding: Send, Sync, Clone);
    assert_impl_all!(FallacyRule: Send, Sync, Copy);

    #[test]
    fn test_finding_serialization() {
        let finding = FallacyFinding {
            name: "Ad Hominem".to_string(),
            description: "You attacked the person.".to_string(),
            improvement: "Address the argument.".to_string(),
        };

        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["name"], "Ad Hominem");
        assert_eq!(json["description"], "You attacked the person.");
        assert_eq!(json["improvement"], "Address the argument.");
    }

    #[test]
    fn test_finding_deserialization() {
        let json = r#"{
            "name": "Straw Man",
            "description": "You misrepresented the argument.",
            "improvement": "Address the actual position."
        }"#;

        let finding: FallacyFinding = serde_json::from_str(json).unwrap();
        assert_eq!(finding.name, "Straw Man");
        assert_eq!(finding.description, "You misrepresented the argument.");
        assert_eq!(finding.improvement, "Address the actual position.");
    }

    #[test]
    fn test_rule_finding_copies_wording() {
        let rule = FallacyRule {
            name: "Test Fallacy",
            description: "A description.",
            improvement: "An improvement.",
            matches: |_, _| true,
        };

        let finding = rule.finding();
        assert_eq!(finding.name, "Test Fallacy");
        assert_eq!(finding.description, "A description.");
        assert_eq!(finding.improvement, "An improvement.");
    }
}

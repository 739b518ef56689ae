//! Rule-based logical fallacy detection.
//!
//! [`FallacyDetector`] scans free-form argument text against a fixed
//! table of keyword and pattern rules covering six fallacy categories:
//!
//! - Ad Hominem
//! - Straw Man
//! - False Dichotomy
//! - Appeal to Emotion
//! - Appeal to Authority
//! - Hasty Generalization
//!
//! Detection is a total function: it is case-insensitive, touches no
//! external state, and cannot fail. Rules are evaluated in a fixed
//! order against the full input; each rule fires at most once per
//! message and yields a finding with fixed wording. Keyword checks are
//! raw substring scans over the lowercased text, so "always" inside a
//! longer word still counts.
//!
//! # Example
//!
//! ```
//! use mcp_debate::analysis::FallacyDetector;
//!
//! let detector = FallacyDetector::new();
//! let findings = detector.detect("That idea is stupid.");
//!
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].name, "Ad Hominem");
//! ```

mod types;

pub use types::{FallacyFinding, FallacyRule};

use std::sync::LazyLock;

use regex::Regex;

/// Keywords whose presence marks an attack on the person.
const AD_HOMINEM_KEYWORDS: [&str; 3] = ["stupid", "idiot", "dumb"];

/// Phrases that put words in the opponent's mouth.
const STRAW_MAN_KEYWORDS: [&str; 4] = [
    "clearly you think",
    "you would say",
    "your side believes",
    "you people always",
];

/// Qualifiers that collapse an issue to exactly two options.
const FALSE_DICHOTOMY_QUALIFIERS: [&str; 3] = ["only two", "only choice", "must choose"];

/// Phrases that substitute sentiment for argument.
const APPEAL_TO_EMOTION_KEYWORDS: [&str; 4] = [
    "think of the children",
    "how would you feel",
    "heartbreaking",
    "devastating",
];

/// Citation phrasing that negates the "studies have shown" branch.
const CITATION_PHRASES: [&str; 2] = ["according to", "research by"];

/// Keywords that overreach from few cases to all.
const HASTY_GENERALIZATION_KEYWORDS: [&str; 4] = ["all people", "everyone knows", "always", "never"];

static IGNORANT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)they (are|seem) (just )?ignorant"));

static EXPERTS_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)experts all (agree|say)"));

static STUDIES_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)studies have (shown|proven)"));

// Patterns here are fixed literals; compilation is covered by tests.
#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern is valid")
}

fn ad_hominem(raw: &str, lower: &str) -> bool {
    AD_HOMINEM_KEYWORDS.iter().any(|kw| lower.contains(kw)) || IGNORANT_PATTERN.is_match(raw)
}

fn straw_man(_raw: &str, lower: &str) -> bool {
    STRAW_MAN_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

fn false_dichotomy(_raw: &str, lower: &str) -> bool {
    lower.contains("either")
        && lower.contains("or")
        && FALSE_DICHOTOMY_QUALIFIERS.iter().any(|kw| lower.contains(kw))
}

fn appeal_to_emotion(_raw: &str, lower: &str) -> bool {
    APPEAL_TO_EMOTION_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

// Asymmetric on purpose: only the "studies have shown" branch is
// negated by citation phrasing. "Experts all agree" fires regardless.
fn appeal_to_authority(raw: &str, lower: &str) -> bool {
    EXPERTS_PATTERN.is_match(raw)
        || (STUDIES_PATTERN.is_match(raw)
            && !CITATION_PHRASES.iter().any(|phrase| lower.contains(phrase)))
}

fn hasty_generalization(_raw: &str, lower: &str) -> bool {
    HASTY_GENERALIZATION_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// The built-in rule table, in evaluation order.
#[must_use]
pub fn builtin_rules() -> Vec<FallacyRule> {
    vec![
        FallacyRule {
            name: "Ad Hominem",
            description: "You attacked the character or personal traits of an opponent rather than addressing their argument.",
            improvement: "Focus on addressing the argument itself rather than the person making it.",
            matches: ad_hominem,
        },
        FallacyRule {
            name: "Straw Man",
            description: "You misrepresented someone's argument to make it easier to attack.",
            improvement: "Ensure you are addressing the actual position held by your opponent, not a simplified or distorted version.",
            matches: straw_man,
        },
        FallacyRule {
            name: "False Dichotomy",
            description: "You presented only two options when more exist.",
            improvement: "Consider if there might be additional options or nuanced positions between the extremes.",
            matches: false_dichotomy,
        },
        FallacyRule {
            name: "Appeal to Emotion",
            description: "You attempted to manipulate an emotional response in place of a valid argument.",
            improvement: "While emotions have their place, strengthen your argument with logic and evidence.",
            matches: appeal_to_emotion,
        },
        FallacyRule {
            name: "Appeal to Authority",
            description: "You used the opinion of an authority figure to support your argument without providing specific sources.",
            improvement: "Cite specific studies or experts and explain their relevance to your point.",
            matches: appeal_to_authority,
        },
        FallacyRule {
            name: "Hasty Generalization",
            description: "You drew a broad conclusion from a small sample.",
            improvement: "Be more specific about the scope of your claims and acknowledge exceptions when they exist.",
            matches: hasty_generalization,
        },
    ]
}

/// Rule-based fallacy detector.
///
/// Holds an ordered rule table, the built-in one by default. The table
/// is injected at construction so tests can supply their own rules.
#[derive(Debug, Clone)]
pub struct FallacyDetector {
    rules: Vec<FallacyRule>,
}

impl FallacyDetector {
    /// Create a detector with the built-in rule table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Create a detector with a custom rule table.
    #[must_use]
    pub const fn with_rules(rules: Vec<FallacyRule>) -> Self {
        Self { rules }
    }

    /// The rule table, in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[FallacyRule] {
        &self.rules
    }

    /// Scan `text` and return the findings of every rule that fires,
    /// in rule-table order. Returns an empty vector when nothing
    /// matches.
    #[must_use]
    pub fn detect(&self, text: &str) -> Vec<FallacyFinding> {
        let lower = text.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| (rule.matches)(text, &lower))
            .map(FallacyRule::finding)
            .collect()
    }
}

impl Default for FallacyDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    fn names(findings: &[FallacyFinding]) -> Vec<&str> {
        findings.iter().map(|f| f.name.as_str()).collect()
    }

    // Ad Hominem

    #[test_case("That is a stupid idea")]
    #[test_case("You're an IDIOT")]
    #[test_case("what a Dumb take")]
    #[test_case("They are ignorant of the facts")]
    #[test_case("they seem just ignorant")]
    #[test_case("THEY ARE JUST IGNORANT")]
    fn test_ad_hominem_triggers(text: &str) {
        let detector = FallacyDetector::new();
        assert!(names(&detector.detect(text)).contains(&"Ad Hominem"));
    }

    #[test]
    fn test_ad_hominem_fires_once_for_multiple_keywords() {
        let detector = FallacyDetector::new();
        let findings = detector.detect("stupid idiot dumb");
        assert_eq!(names(&findings), vec!["Ad Hominem"]);
    }

    #[test]
    fn test_ad_hominem_wording() {
        let detector = FallacyDetector::new();
        let findings = detector.detect("stupid");
        assert_eq!(
            findings[0],
            FallacyFinding {
                name: "Ad Hominem".to_string(),
                description: "You attacked the character or personal traits of an opponent rather than addressing their argument.".to_string(),
                improvement: "Focus on addressing the argument itself rather than the person making it.".to_string(),
            }
        );
    }

    // Straw Man

    #[test_case("Clearly you think this is fine")]
    #[test_case("you would say that")]
    #[test_case("Your side believes in nothing")]
    #[test_case("You people always do this")]
    fn test_straw_man_triggers(text: &str) {
        let detector = FallacyDetector::new();
        assert!(names(&detector.detect(text)).contains(&"Straw Man"));
    }

    // False Dichotomy

    #[test]
    fn test_false_dichotomy_requires_all_parts() {
        let detector = FallacyDetector::new();

        // "either" + "or" without a qualifier does not fire
        assert!(!names(&detector.detect("either this or that"))
            .contains(&"False Dichotomy"));
        // qualifier without "either" does not fire
        assert!(!names(&detector.detect("there is only two ways"))
            .contains(&"False Dichotomy"));
    }

    #[test_case("Either you agree or you leave, there are only two options")]
    #[test_case("either stay or go, it's your only choice")]
    #[test_case("You must choose: either left or right")]
    fn test_false_dichotomy_triggers(text: &str) {
        let detector = FallacyDetector::new();
        assert!(names(&detector.detect(text)).contains(&"False Dichotomy"));
    }

    #[test]
    fn test_false_dichotomy_or_matches_inside_words() {
        // "work" supplies the "or" substring; the scan is not
        // word-bounded.
        let detector = FallacyDetector::new();
        let findings = detector.detect("either we work harder, only two paths exist");
        assert!(names(&findings).contains(&"False Dichotomy"));
    }

    // Appeal to Emotion

    #[test_case("Think of the children!")]
    #[test_case("How would you feel in their place?")]
    #[test_case("The results were heartbreaking")]
    #[test_case("This policy is DEVASTATING")]
    fn test_appeal_to_emotion_triggers(text: &str) {
        let detector = FallacyDetector::new();
        assert!(names(&detector.detect(text)).contains(&"Appeal to Emotion"));
    }

    // Appeal to Authority

    #[test_case("Experts all agree this is true")]
    #[test_case("experts all say it works")]
    #[test_case("Studies have shown this works")]
    #[test_case("studies have proven it")]
    fn test_appeal_to_authority_triggers(text: &str) {
        let detector = FallacyDetector::new();
        assert!(names(&detector.detect(text)).contains(&"Appeal to Authority"));
    }

    #[test]
    fn test_studies_branch_negated_by_citation() {
        let detector = FallacyDetector::new();
        let findings = detector.detect("Studies have shown this works, according to research by Acme");
        assert!(!names(&findings).contains(&"Appeal to Authority"));
    }

    #[test]
    fn test_experts_branch_ignores_citation() {
        // The citation check applies only to the "studies" branch.
        let detector = FallacyDetector::new();
        let findings = detector.detect("Experts all agree this is true, according to nobody");
        assert!(names(&findings).contains(&"Appeal to Authority"));
    }

    // Hasty Generalization

    #[test_case("All people want this")]
    #[test_case("Everyone knows that")]
    #[test_case("It always fails")]
    #[test_case("That never works")]
    fn test_hasty_generalization_triggers(text: &str) {
        let detector = FallacyDetector::new();
        assert!(names(&detector.detect(text)).contains(&"Hasty Generalization"));
    }

    // Combinations and ordering

    #[test]
    fn test_multiple_rules_fire_together() {
        let detector = FallacyDetector::new();
        let findings = detector
            .detect("Everyone knows either you accept this or you're wrong, there's only two choices");
        assert_eq!(
            names(&findings),
            vec!["False Dichotomy", "Hasty Generalization"]
        );
    }

    #[test]
    fn test_findings_follow_rule_table_order() {
        let detector = FallacyDetector::new();
        let text = "You are stupid. Clearly you think we must choose either this or that. \
                    Think of the children. Studies have shown it. Everyone knows.";
        assert_eq!(
            names(&detector.detect(text)),
            vec![
                "Ad Hominem",
                "Straw Man",
                "False Dichotomy",
                "Appeal to Emotion",
                "Appeal to Authority",
                "Hasty Generalization",
            ]
        );
    }

    #[test]
    fn test_empty_input_returns_no_findings() {
        let detector = FallacyDetector::new();
        assert!(detector.detect("").is_empty());
    }

    #[test]
    fn test_neutral_text_returns_no_findings() {
        let detector = FallacyDetector::new();
        let findings =
            detector.detect("Tax incentives shifted adoption rates in three of the five regions.");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_builtin_rule_count_and_order() {
        let detector = FallacyDetector::new();
        let rule_names: Vec<&str> = detector.rules().iter().map(|r| r.name).collect();
        assert_eq!(
            rule_names,
            vec![
                "Ad Hominem",
                "Straw Man",
                "False Dichotomy",
                "Appeal to Emotion",
                "Appeal to Authority",
                "Hasty Generalization",
            ]
        );
    }

    #[test]
    fn test_custom_rule_table() {
        let rules = vec![FallacyRule {
            name: "Test Rule",
            description: "Fires on every input.",
            improvement: "None needed.",
            matches: |_, _| true,
        }];
        let detector = FallacyDetector::with_rules(rules);

        let findings = detector.detect("anything at all");
        assert_eq!(names(&findings), vec!["Test Rule"]);
    }

    #[test]
    fn test_default_matches_new() {
        let findings_new = FallacyDetector::new().detect("stupid");
        let findings_default = FallacyDetector::default().detect("stupid");
        assert_eq!(findings_new, findings_default);
    }

    proptest! {
        #[test]
        fn prop_detect_never_panics(text in ".*") {
            let detector = FallacyDetector::new();
            let _ = detector.detect(&text);
        }

        #[test]
        fn prop_detection_is_case_insensitive(text in "[ -~]{0,200}") {
            let detector = FallacyDetector::new();
            let original = detector.detect(&text);
            let upper = detector.detect(&text.to_uppercase());
            prop_assert_eq!(
                original.iter().map(|f| f.name.clone()).collect::<Vec<_>>(),
                upper.iter().map(|f| f.name.clone()).collect::<Vec<_>>()
            );
        }

        #[test]
        fn prop_findings_are_subset_of_rule_table(text in ".*") {
            let detector = FallacyDetector::new();
            let table: Vec<&str> = detector.rules().iter().map(|r| r.name).collect();
            for finding in detector.detect(&text) {
                prop_assert!(table.contains(&finding.name.as_str()));
            }
        }
    }
}

//! Scripted opponent response selection.
//!
//! The opponent never reasons about the user's argument. Openings are
//! produced from a fixed template; replies are drawn uniformly at
//! random from a static catalog of pre-written paragraphs keyed by
//! topic and stance, with generic fallback templates for topics the
//! catalog does not know. Selection is total: no input can make it
//! fail.
//!
//! # Example
//!
//! ```
//! use mcp_debate::opponent::{opening_statement, MessageKind, ResponseCatalog, ResponseSelector, Stance};
//! use mcp_debate::traits::SeededSource;
//!
//! let opening = opening_statement("Universal Basic Income", Stance::Oppose);
//! assert!(opening.contains("oppose"));
//!
//! let selector = ResponseSelector::new(ResponseCatalog::new(), SeededSource::new(7));
//! let reply = selector.select(
//!     "Universal Basic Income",
//!     Stance::Oppose,
//!     MessageKind::Reply,
//!     "It would just work, everyone knows that.",
//! );
//! assert!(!reply.is_empty());
//! ```

mod catalog;
mod types;

pub use catalog::{
    fallback_templates, ResponseCatalog, TopicPlaybook, POPULAR_TOPICS, TOPIC_PLACEHOLDER,
};
pub use types::{MessageKind, Stance};

use crate::traits::RandomSource;

/// The opponent's deterministic opening line for a topic and stance.
///
/// No randomness and no catalog lookup: identical arguments always
/// produce identical output.
#[must_use]
pub fn opening_statement(topic: &str, stance: Stance) -> String {
    let position = stance.as_str();
    format!(
        "I'll be taking the position to {position} \"{topic}\". Let's have a constructive debate! \
         I'll present facts and logical arguments from this perspective to help you strengthen \
         your own arguments.\n\nWhat's your opening argument?"
    )
}

/// Picks opponent utterances from a [`ResponseCatalog`].
#[derive(Debug)]
pub struct ResponseSelector<R: RandomSource> {
    catalog: ResponseCatalog,
    random: R,
}

impl<R: RandomSource> ResponseSelector<R> {
    /// Create a selector over a catalog with the given random source.
    #[must_use]
    pub const fn new(catalog: ResponseCatalog, random: R) -> Self {
        Self { catalog, random }
    }

    /// The underlying catalog.
    #[must_use]
    pub const fn catalog(&self) -> &ResponseCatalog {
        &self.catalog
    }

    /// Produce one opponent utterance.
    ///
    /// `last_user_text` is accepted for contract completeness but does
    /// not influence selection; reply content is independent of what
    /// the user argued.
    #[must_use]
    pub fn select(
        &self,
        topic: &str,
        stance: Stance,
        kind: MessageKind,
        _last_user_text: &str,
    ) -> String {
        match kind {
            MessageKind::Opening => opening_statement(topic, stance),
            MessageKind::Reply => self.reply(topic, stance),
        }
    }

    /// Pick a reply for the topic and stance, uniformly at random.
    ///
    /// Unknown topics (and playbooks with no replies for the stance)
    /// fall back to the generic templates with the topic name
    /// interpolated; this path never errors.
    #[must_use]
    pub fn reply(&self, topic: &str, stance: Stance) -> String {
        match self.catalog.get(topic) {
            Some(playbook) if !playbook.replies(stance).is_empty() => {
                let replies = playbook.replies(stance);
                replies[self.random.pick(replies.len())].clone()
            }
            _ => {
                let templates = fallback_templates(stance);
                let template = templates[self.random.pick(templates.len())];
                template.replace(TOPIC_PLACEHOLDER, topic)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::traits::{MockRandomSource, SeededSource, ThreadRngSource};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn selector_picking(index: usize) -> ResponseSelector<MockRandomSource> {
        let mut mock = MockRandomSource::new();
        mock.expect_pick().return_const(index);
        ResponseSelector::new(ResponseCatalog::new(), mock)
    }

    #[test]
    fn test_opening_statement_wording() {
        assert_eq!(
            opening_statement("Universal Basic Income", Stance::Support),
            "I'll be taking the position to support \"Universal Basic Income\". Let's have a constructive debate! I'll present facts and logical arguments from this perspective to help you strengthen your own arguments.\n\nWhat's your opening argument?"
        );
    }

    #[test]
    fn test_opening_statement_announces_stance() {
        assert!(opening_statement("Taxes", Stance::Support).contains("to support \"Taxes\""));
        assert!(opening_statement("Taxes", Stance::Oppose).contains("to oppose \"Taxes\""));
    }

    #[test]
    fn test_opening_statement_is_deterministic() {
        let first = opening_statement("Education Reform", Stance::Oppose);
        let second = opening_statement("Education Reform", Stance::Oppose);
        assert_eq!(first, second);
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(2)]
    fn test_reply_curated_topic_picks_indexed_entry(index: usize) {
        let selector = selector_picking(index);
        let reply = selector.reply("Universal Basic Income", Stance::Support);

        let catalog = ResponseCatalog::new();
        let expected = &catalog.get("Universal Basic Income").unwrap().support[index];
        assert_eq!(&reply, expected);
    }

    #[test]
    fn test_reply_curated_topic_never_falls_back() {
        let selector = ResponseSelector::new(ResponseCatalog::new(), SeededSource::new(99));
        let catalog = ResponseCatalog::new();
        let allowed = catalog.get("Universal Basic Income").unwrap();

        for _ in 0..100 {
            let reply = selector.reply("Universal Basic Income", Stance::Support);
            assert!(allowed.support.contains(&reply));
        }
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(2)]
    fn test_reply_unknown_topic_uses_fallback(index: usize) {
        let topic = "Some未知 Topic";
        let selector = selector_picking(index);
        let reply = selector.reply(topic, Stance::Oppose);

        let expected = fallback_templates(Stance::Oppose)[index].replace(TOPIC_PLACEHOLDER, topic);
        assert_eq!(reply, expected);
        assert!(reply.contains(topic));
    }

    #[test]
    fn test_reply_unknown_topic_always_interpolates_topic() {
        let topic = "Mandatory Siestas";
        let selector = ResponseSelector::new(ResponseCatalog::new(), SeededSource::new(3));

        for _ in 0..100 {
            let reply = selector.reply(topic, Stance::Oppose);
            assert!(reply.contains(topic), "missing topic in: {reply}");
        }
    }

    #[test]
    fn test_reply_empty_playbook_falls_back() {
        let mut catalog = ResponseCatalog::new();
        catalog.register(TopicPlaybook::new("Hollow Topic", vec![], vec![]));
        let mut mock = MockRandomSource::new();
        mock.expect_pick().return_const(0usize);
        let selector = ResponseSelector::new(catalog, mock);

        let reply = selector.reply("Hollow Topic", Stance::Support);
        assert!(reply.contains("Hollow Topic"));
        assert!(!reply.contains(TOPIC_PLACEHOLDER));
    }

    #[test]
    fn test_select_dispatches_opening() {
        let selector = selector_picking(0);
        let selected = selector.select("Death Penalty", Stance::Oppose, MessageKind::Opening, "");
        assert_eq!(selected, opening_statement("Death Penalty", Stance::Oppose));
    }

    #[test]
    fn test_select_ignores_last_user_text() {
        let first = selector_picking(1).select(
            "Climate Change Solutions",
            Stance::Support,
            MessageKind::Reply,
            "We should do nothing.",
        );
        let second = selector_picking(1).select(
            "Climate Change Solutions",
            Stance::Support,
            MessageKind::Reply,
            "We should do everything.",
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_reply_distribution_is_roughly_uniform() {
        let selector = ResponseSelector::new(ResponseCatalog::new(), ThreadRngSource);
        let catalog = ResponseCatalog::new();
        let replies = &catalog.get("Free Speech Limitations").unwrap().oppose;

        let mut counts = [0usize; 3];
        for _ in 0..600 {
            let reply = selector.reply("Free Speech Limitations", Stance::Oppose);
            let index = replies.iter().position(|r| r == &reply).unwrap();
            counts[index] += 1;
        }

        // Expected ~200 each; 100 is far outside plausible variance.
        for (index, count) in counts.iter().enumerate() {
            assert!(*count > 100, "entry {index} drawn only {count} times");
        }
    }

    #[test]
    fn test_stance_sequences_are_distinct() {
        let selector = selector_picking(0);
        let support = selector.reply("Universal Basic Income", Stance::Support);
        let oppose = selector.reply("Universal Basic Income", Stance::Oppose);
        assert_ne!(support, oppose);
    }
}

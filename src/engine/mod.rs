//! Debate orchestration.
//!
//! [`DebateEngine`] wires the fallacy detector, the response selector,
//! and the pacing delay behind a single-session state machine. One
//! debate is active at a time; starting a new one replaces it. The
//! session lock is held across the pacing delay, so exchanges never
//! interleave.

use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::analysis::{FallacyDetector, FallacyFinding};
use crate::config::Config;
use crate::error::SessionError;
use crate::opponent::{
    opening_statement, MessageKind, ResponseCatalog, ResponseSelector, Stance, POPULAR_TOPICS,
};
use crate::session::{generate_session_id, DebateSession, Message};
use crate::traits::{
    DelayProvider, RandomSource, RealTimeProvider, ThreadRngSource, TimeProvider, TokioDelay,
};

/// One user/opponent exchange produced by [`DebateEngine::argue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    /// Session the exchange belongs to.
    pub session_id: String,
    /// The user's message, with findings attached at creation.
    pub user_message: Message,
    /// The opponent's reply. Opponent messages carry no findings.
    pub opponent_message: Message,
}

/// Engine wired with the production providers.
pub type ProductionEngine = DebateEngine<ThreadRngSource, TokioDelay, RealTimeProvider>;

/// Orchestrates a scripted debate.
///
/// The random source, delay provider, and clock are injected so tests
/// can run deterministically and without real sleeps.
#[derive(Debug)]
pub struct DebateEngine<R, D, T>
where
    R: RandomSource,
    D: DelayProvider,
    T: TimeProvider,
{
    detector: FallacyDetector,
    selector: ResponseSelector<R>,
    delay: D,
    time: T,
    reply_delay: Duration,
    session: Mutex<Option<DebateSession>>,
}

impl ProductionEngine {
    /// Create an engine with the built-in content and real providers.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_components(
            FallacyDetector::new(),
            ResponseSelector::new(ResponseCatalog::new(), ThreadRngSource),
            TokioDelay,
            RealTimeProvider,
            config.opponent_delay(),
        )
    }
}

impl<R, D, T> DebateEngine<R, D, T>
where
    R: RandomSource,
    D: DelayProvider,
    T: TimeProvider,
{
    /// Create an engine from explicit components.
    #[must_use]
    pub fn with_components(
        detector: FallacyDetector,
        selector: ResponseSelector<R>,
        delay: D,
        time: T,
        reply_delay: Duration,
    ) -> Self {
        Self {
            detector,
            selector,
            delay,
            time,
            reply_delay,
            session: Mutex::new(None),
        }
    }

    /// Start a debate on `topic`, replacing any active session.
    ///
    /// The opponent takes the stance opposite `user_stance` and opens
    /// the debate with its templated statement after the pacing delay.
    /// Returns a snapshot of the new session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyTopic`] if `topic` is empty or
    /// whitespace.
    pub async fn start(
        &self,
        topic: &str,
        user_stance: Stance,
    ) -> Result<DebateSession, SessionError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(SessionError::EmptyTopic);
        }

        let mut guard = self.session.lock().await;
        if guard.is_some() {
            debug!("replacing active debate");
        }

        let started_at = self.time.now();
        let mut session =
            DebateSession::new(generate_session_id(), topic, user_stance, started_at);
        info!(
            session_id = %session.id,
            topic,
            user_stance = %user_stance,
            "debate started"
        );

        self.delay.sleep(self.reply_delay).await;

        let opened_at = self.time.now();
        session.append(Message::from_opponent(
            opened_at.timestamp_millis().to_string(),
            opening_statement(topic, session.opponent_stance),
            opened_at,
        ));

        *guard = Some(session.clone());
        Ok(session)
    }

    /// Submit a user argument and collect the opponent's reply.
    ///
    /// The user message is appended with its findings computed once at
    /// creation; the opponent reply follows after the pacing delay.
    /// The session lock is held for the whole exchange.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyArgument`] if `content` is empty
    /// or whitespace, and [`SessionError::NoActiveSession`] if no
    /// debate has been started.
    pub async fn argue(&self, content: &str) -> Result<Exchange, SessionError> {
        if content.trim().is_empty() {
            return Err(SessionError::EmptyArgument);
        }

        let mut guard = self.session.lock().await;
        let session = guard.as_mut().ok_or(SessionError::NoActiveSession)?;

        let findings = self.detector.detect(content);
        debug!(
            session_id = %session.id,
            findings = findings.len(),
            "user argument analyzed"
        );

        let authored_at = self.time.now();
        let user_message = Message::from_user(
            authored_at.timestamp_millis().to_string(),
            content,
            findings,
            authored_at,
        );
        session.append(user_message.clone());

        self.delay.sleep(self.reply_delay).await;

        let reply = self
            .selector
            .select(&session.topic, session.opponent_stance, MessageKind::Reply, content);
        let replied_at = self.time.now();
        let opponent_message = Message::from_opponent(
            (replied_at.timestamp_millis() + 1).to_string(),
            reply,
            replied_at,
        );
        session.append(opponent_message.clone());

        Ok(Exchange {
            session_id: session.id.clone(),
            user_message,
            opponent_message,
        })
    }

    /// Run fallacy detection over arbitrary text.
    ///
    /// Needs no active session and cannot fail; empty input yields an
    /// empty result.
    #[must_use]
    pub fn analyze(&self, text: &str) -> Vec<FallacyFinding> {
        self.detector.detect(text)
    }

    /// Snapshot of the active session and its full transcript.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] if no debate has been
    /// started.
    pub async fn transcript(&self) -> Result<DebateSession, SessionError> {
        self.session
            .lock()
            .await
            .clone()
            .ok_or(SessionError::NoActiveSession)
    }

    /// Whether a debate is currently active.
    pub async fn has_active_session(&self) -> bool {
        self.session.lock().await.is_some()
    }

    /// Topics suggested to users.
    #[must_use]
    pub const fn popular_topics() -> &'static [&'static str] {
        &POPULAR_TOPICS
    }

    /// Topics with curated reply playbooks.
    #[must_use]
    pub fn curated_topics(&self) -> Vec<String> {
        self.selector
            .catalog()
            .curated_topics()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }
}

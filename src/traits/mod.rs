//! Trait definitions for mockable dependencies.
//!
//! This module defines traits for:
//! - [`RandomSource`]: Random index selection for reply picking
//! - [`DelayProvider`]: Artificial pacing delay abstraction
//! - [`TimeProvider`]: Time abstraction for testing
//!
//! # Mocking
//!
//! All traits are annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates mock implementations automatically for testing.
//!
//! # Example
//!
//! ```
//! use mcp_debate::traits::{TimeProvider, RealTimeProvider};
//!
//! let time_provider = RealTimeProvider;
//! let now = time_provider.now();
//! println!("Current time: {now}");
//! ```

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source trait for reply selection.
///
/// Abstracts the uniform pick-one-of-N step so tests can supply a fixed
/// sequence and assert exact selection without statistical flakiness.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Pick an index in `0..len` uniformly at random.
    ///
    /// `len` must be non-zero; callers guarantee the candidate sequence
    /// is non-empty.
    fn pick(&self, len: usize) -> usize;
}

/// Thread-local random source.
///
/// This is the production implementation, drawing from the thread RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Seeded random source for reproducible selection.
///
/// Produces the same pick sequence for the same seed. Used by tests and
/// available to callers that want replayable debates.
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    /// Create a seeded source from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededSource {
    fn pick(&self, len: usize) -> usize {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.random_range(0..len)
    }
}

/// Delay provider trait for artificial reply pacing.
///
/// The opponent's reply is paced by a configured delay to emulate a
/// thinking opponent. The delay is a presentation concern: selection
/// itself is synchronous and instantaneous.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DelayProvider: Send + Sync {
    /// Wait for the given duration.
    async fn sleep(&self, duration: Duration);
}

/// Tokio-based delay provider.
///
/// This is the production implementation backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl DelayProvider for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Time provider trait for deterministic testing.
///
/// This trait abstracts time operations to allow for
/// deterministic testing by providing fixed timestamps.
#[cfg_attr(test, mockall::automock)]
pub trait TimeProvider: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Real time provider using system clock.
///
/// This is the production implementation that returns the actual current time.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeProvider;

impl TimeProvider for RealTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

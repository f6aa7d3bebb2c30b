//! Retry policy and attempt state machine for Storefront requests.
//!
//! The executor drives a tiny state machine. Every attempt ends in an
//! [`AttemptOutcome`]; [`RetryPolicy::transition`] maps the current attempt
//! and that outcome to the next [`AttemptState`]. Keeping the transition
//! pure means the whole retry schedule can be checked without a network.
//!
//! ```text
//! Attempting(n) --success---------------------> Succeeded
//! Attempting(n) --terminal--------------------> FailedTerminal
//! Attempting(n) --transient, n+1 < max--------> Attempting(n+1)   (sleep base * 2^n)
//! Attempting(n) --transient, n+1 >= max-------> FailedExhausted
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use storefront_bff::{AttemptOutcome, AttemptState, RetryPolicy};
//!
//! let policy = RetryPolicy::default();
//! assert_eq!(policy.delay_for(0), Duration::from_millis(1000));
//! assert_eq!(policy.delay_for(1), Duration::from_millis(2000));
//!
//! assert_eq!(policy.transition(0, AttemptOutcome::Transient), AttemptState::Attempting(1));
//! assert_eq!(policy.transition(2, AttemptOutcome::Transient), AttemptState::FailedExhausted);
//! ```

use std::time::Duration;

use crate::clients::errors::StorefrontError;

/// Default number of attempts, including the first.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default delay before the first retry.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// How an attempt ended, as far as retrying is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The service returned a payload.
    Success,
    /// A failure that may clear up on its own.
    Transient,
    /// A failure that will not.
    Terminal,
}

impl AttemptOutcome {
    /// Classifies the result of one attempt.
    #[must_use]
    pub const fn of<T>(result: &Result<T, StorefrontError>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(e) if e.is_transient() => Self::Transient,
            Err(_) => Self::Terminal,
        }
    }
}

/// Where the executor stands after an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptState {
    /// Another attempt is due; the value is its zero-based index.
    Attempting(u32),
    /// Return the payload.
    Succeeded,
    /// Return the error without retrying.
    FailedTerminal,
    /// Out of attempts; return the last transient error.
    FailedExhausted,
}

impl AttemptState {
    /// Returns `true` once no further attempt will be made.
    #[must_use]
    pub const fn is_final(self) -> bool {
        !matches!(self, Self::Attempting(_))
    }
}

/// Bounded exponential backoff.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy. `max_attempts` is clamped to at least one.
    #[must_use]
    pub const fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: if max_attempts == 0 { 1 } else { max_attempts },
            base_delay,
        }
    }

    /// A policy that sends exactly one request.
    #[must_use]
    pub const fn no_retry() -> Self {
        Self::new(1, DEFAULT_BASE_DELAY)
    }

    /// Total number of attempts, including the first.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before the first retry.
    #[must_use]
    pub const fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Sleep to take after failed attempt `attempt` (zero-based):
    /// `base_delay * 2^attempt`, saturating on overflow.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(2_u32.saturating_pow(attempt))
    }

    /// Next state after attempt `attempt` (zero-based) ended in `outcome`.
    #[must_use]
    pub const fn transition(&self, attempt: u32, outcome: AttemptOutcome) -> AttemptState {
        match outcome {
            AttemptOutcome::Success => AttemptState::Succeeded,
            AttemptOutcome::Terminal => AttemptState::FailedTerminal,
            AttemptOutcome::Transient if attempt.saturating_add(1) >= self.max_attempts => {
                AttemptState::FailedExhausted
            }
            AttemptOutcome::Transient => AttemptState::Attempting(attempt + 1),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_BASE_DELAY)
    }
}

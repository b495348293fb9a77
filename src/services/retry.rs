use gloo_timers::future::TimeoutFuture;
use std::future::Future;

/// Bounded, fixed-interval retry schedule.
///
/// The first attempt always runs immediately; `max_attempts` counts it.
/// A policy with `max_attempts == 0` still makes that first attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub interval_ms: u32,
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, interval_ms: u32) -> Self {
        Self {
            max_attempts,
            interval_ms,
        }
    }

    /// Total number of attempts this policy allows.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Delay before the attempt following `attempt` (1-based), or `None`
    /// once the budget is spent.
    pub fn next_delay(&self, attempt: u32) -> Option<u32> {
        (attempt < self.attempts()).then_some(self.interval_ms)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            crate::config::Config::TOGGLE_LOOKUP_ATTEMPTS,
            crate::config::Config::TOGGLE_LOOKUP_INTERVAL_MS,
        )
    }
}

/// Runs `check` until it reports success or the policy is exhausted.
///
/// # Arguments
///
/// * `policy` - How many attempts and how far apart
/// * `check` - Called with the 1-based attempt number, returns `true` on success
/// * `sleep` - Produces the future awaited between attempts
///
/// # Returns
///
/// The attempt number that succeeded, or `None` if every attempt failed
pub async fn retry_at_interval<P, S, Fut>(
    policy: RetryPolicy,
    mut check: P,
    mut sleep: S,
) -> Option<u32>
where
    P: FnMut(u32) -> bool,
    S: FnMut(u32) -> Fut,
    Fut: Future<Output = ()>,
{
    let mut attempt = 1;

    loop {
        if check(attempt) {
            return Some(attempt);
        }

        let delay_ms = policy.next_delay(attempt)?;
        sleep(delay_ms).await;
        attempt += 1;
    }
}

/// [`retry_at_interval`] driven by browser timers.
pub async fn retry_with_timer<P>(policy: RetryPolicy, check: P) -> Option<u32>
where
    P: FnMut(u32) -> bool,
{
    retry_at_interval(policy, check, TimeoutFuture::new).await
}

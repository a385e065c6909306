// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Timers and clocks.
//!
//! The engine identifies every timer by a structured [`TimerToken`], so
//! an expiry that races with a reschedule is recognizable as stale: the
//! handler looks the token's subject up and ignores the firing when the
//! subject is gone or has moved on.
use std::time::Duration;

/// Identifies a single timer owned by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerToken {
    /// No result arrived for the query in time.
    QueryTimeout(u64),

    /// The query should be retransmitted now.
    QueryRetry(u64),

    /// Accumulated acknowledgements for the DC should be flushed.
    AckFlush(i32),

    /// The DC's session went quiet and can be destroyed.
    SessionCleanup(i32),

    /// The secondary worker has been idle for too long.
    WorkerIdle(i32, u32),

    /// Time to try re-opening the DC's primary connection.
    Reconnect(i32),

    /// Time to send the keepalive ping on the DC.
    Ping(i32),

    /// Periodic comparison of our update state with the server's.
    StateLookup,

    /// A secret chat has waited long enough for a hole to heal.
    SecretChatHole(i32),
}

/// Host-provided one-shot timer scheduling.
///
/// Scheduling a token that is already pending re-arms it with the new
/// delay. Expirations are delivered back into
/// [`crate::UserAgent::handle_timer`].
pub trait TimerQueue {
    fn schedule(&mut self, delay: Duration, token: TimerToken);
    fn cancel(&mut self, token: TimerToken);
}

/// Host-provided time sources.
///
/// `now_unix` is the wall clock as a duration since the Unix epoch and
/// feeds message identifiers; `monotonic` never jumps backwards and
/// feeds everything related to scheduling.
pub trait Clock {
    fn now_unix(&self) -> Duration;
    fn monotonic(&self) -> Duration;
}

/// The [`Clock`] implementation backed by the operating system.
pub struct SystemClock {
    started: std::time::Instant,
}

#[allow(clippy::new_without_default)]
impl SystemClock {
    pub fn new() -> Self {
        Self {
            started: std::time::Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_unix(&self) -> Duration {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time is before epoch")
    }

    fn monotonic(&self) -> Duration {
        self.started.elapsed()
    }
}

/// A deterministic, manually-stepped [`Clock`], for tests and simulated
/// hosts. Both time sources advance together.
pub struct StepClock {
    unix: std::cell::Cell<Duration>,
    mono: std::cell::Cell<Duration>,
}

impl StepClock {
    pub fn new(start_unix: Duration) -> Self {
        Self {
            unix: std::cell::Cell::new(start_unix),
            mono: std::cell::Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.unix.set(self.unix.get() + by);
        self.mono.set(self.mono.get() + by);
    }
}

impl Clock for StepClock {
    fn now_unix(&self) -> Duration {
        self.unix.get()
    }

    fn monotonic(&self) -> Duration {
        self.mono.get()
    }
}

/// A [`TimerQueue`] that stores deadlines and hands back the due tokens
/// when asked, relative to a monotonic "now" the caller provides. Hosts
/// with their own event loop typically wrap their native timers instead.
#[derive(Default)]
pub struct ManualTimerQueue {
    pending: Vec<(Duration, TimerToken)>,
    now: Duration,
}

impl ManualTimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the queue's clock and drains every timer that became
    /// due, in firing order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerToken> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<(Duration, TimerToken)> = Vec::new();
        self.pending.retain(|&(deadline, token)| {
            if deadline <= now {
                due.push((deadline, token));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(deadline, _)| deadline);
        due.into_iter().map(|(_, token)| token).collect()
    }

    pub fn is_scheduled(&self, token: TimerToken) -> bool {
        self.pending.iter().any(|&(_, t)| t == token)
    }
}

impl TimerQueue for ManualTimerQueue {
    fn schedule(&mut self, delay: Duration, token: TimerToken) {
        self.cancel(token);
        self.pending.push((self.now + delay, token));
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|&(_, t)| t != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescheduling_replaces_the_deadline() {
        let mut queue = ManualTimerQueue::new();
        queue.schedule(Duration::from_secs(1), TimerToken::StateLookup);
        queue.schedule(Duration::from_secs(5), TimerToken::StateLookup);

        assert!(queue.advance(Duration::from_secs(2)).is_empty());
        assert_eq!(
            queue.advance(Duration::from_secs(3)),
            vec![TimerToken::StateLookup]
        );
    }

    #[test]
    fn due_timers_fire_in_deadline_order() {
        let mut queue = ManualTimerQueue::new();
        queue.schedule(Duration::from_secs(3), TimerToken::Ping(1));
        queue.schedule(Duration::from_secs(1), TimerToken::AckFlush(1));
        queue.schedule(Duration::from_secs(2), TimerToken::QueryTimeout(9));

        assert_eq!(
            queue.advance(Duration::from_secs(3)),
            vec![
                TimerToken::AckFlush(1),
                TimerToken::QueryTimeout(9),
                TimerToken::Ping(1),
            ]
        );
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut queue = ManualTimerQueue::new();
        queue.schedule(Duration::from_secs(1), TimerToken::Reconnect(2));
        queue.cancel(TimerToken::Reconnect(2));
        assert!(queue.advance(Duration::from_secs(2)).is_empty());
    }
}

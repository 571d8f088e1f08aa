//! Deferred continuations for the turn exchange.
//!
//! The enemy's answer to a player action and the teardown after a defeat do
//! not happen synchronously. The combat engine asks a [`Scheduler`] to hand
//! the continuation back after a delay; the host advances the scheduler with
//! elapsed time and feeds due continuations to the session. Nothing runs on
//! another thread and nothing is ever cancelled.

use serde::Serialize;
use std::time::Duration;

/// Work the combat engine deferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Continuation {
    /// The enemy strikes back after a player action.
    EnemyTurn,
    /// Combat state is cleared after the player fell.
    FinalizeDefeat,
}

pub trait Scheduler {
    /// Queue `continuation` to become due after `delay`.
    fn schedule(&mut self, delay: Duration, continuation: Continuation);

    /// Advance the clock and return every continuation now due, earliest first.
    fn advance(&mut self, elapsed: Duration) -> Vec<Continuation>;

    /// Time until the earliest queued continuation is due.
    fn next_due_in(&self) -> Option<Duration>;

    fn pending(&self) -> usize;
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    due_at: Duration,
    continuation: Continuation,
}

/// Clock-driven scheduler. Time only moves when the host calls `advance`.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now: Duration,
    timers: Vec<Timer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration, continuation: Continuation) {
        let due_at = self.now + delay;
        // Stable insert keeps equal deadlines in submission order
        let index = self.timers.partition_point(|t| t.due_at <= due_at);
        self.timers.insert(
            index,
            Timer {
                due_at,
                continuation,
            },
        );
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<Continuation> {
        self.now += elapsed;
        let ready = self.timers.partition_point(|t| t.due_at <= self.now);
        self.timers
            .drain(..ready)
            .map(|t| t.continuation)
            .collect()
    }

    fn next_due_in(&self) -> Option<Duration> {
        self.timers
            .first()
            .map(|t| t.due_at.saturating_sub(self.now))
    }

    fn pending(&self) -> usize {
        self.timers.len()
    }
}

/// Scheduler that ignores delays: everything queued is due on the next advance.
#[derive(Debug, Clone, Default)]
pub struct ImmediateScheduler {
    queue: Vec<Continuation>,
}

impl ImmediateScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for ImmediateScheduler {
    fn schedule(&mut self, _delay: Duration, continuation: Continuation) {
        self.queue.push(continuation);
    }

    fn advance(&mut self, _elapsed: Duration) -> Vec<Continuation> {
        std::mem::take(&mut self.queue)
    }

    fn next_due_in(&self) -> Option<Duration> {
        if self.queue.is_empty() {
            None
        } else {
            Some(Duration::ZERO)
        }
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_timer_not_due_early() {
        let mut timers = TimerQueue::new();
        timers.schedule(ms(500), Continuation::EnemyTurn);

        assert!(timers.advance(ms(499)).is_empty());
        assert_eq!(timers.next_due_in(), Some(ms(1)));
        assert_eq!(timers.advance(ms(1)), vec![Continuation::EnemyTurn]);
        assert_eq!(timers.pending(), 0);
        assert_eq!(timers.next_due_in(), None);
    }

    #[test]
    fn test_timers_fire_in_due_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(ms(2000), Continuation::FinalizeDefeat);
        timers.schedule(ms(500), Continuation::EnemyTurn);

        assert_eq!(
            timers.advance(ms(5000)),
            vec![Continuation::EnemyTurn, Continuation::FinalizeDefeat]
        );
    }

    #[test]
    fn test_delay_measured_from_schedule_time() {
        let mut timers = TimerQueue::new();
        timers.advance(ms(1000));
        timers.schedule(ms(500), Continuation::EnemyTurn);

        assert_eq!(timers.now(), ms(1000));
        assert!(timers.advance(ms(400)).is_empty());
        assert_eq!(timers.advance(ms(100)).len(), 1);
    }

    #[test]
    fn test_immediate_scheduler_ignores_delay() {
        let mut scheduler = ImmediateScheduler::new();
        scheduler.schedule(ms(2000), Continuation::FinalizeDefeat);

        assert_eq!(scheduler.next_due_in(), Some(Duration::ZERO));
        assert_eq!(
            scheduler.advance(Duration::ZERO),
            vec![Continuation::FinalizeDefeat]
        );
        assert_eq!(scheduler.pending(), 0);
    }
}

use std::time::{Duration, Instant};

/// A single pending tick that can be armed, fired or cancelled.
///
/// Firing consumes the deadline; the game loop re-arms it after every tick
/// that keeps the game running, so leaving the running state simply means
/// not re-arming.
#[derive(Debug, Clone)]
pub struct Scheduler {
    period: Duration,
    deadline: Option<Instant>,
}

impl Scheduler {
    pub fn new(period: Duration) -> Self {
        Scheduler { period, deadline: None }
    }

    pub fn schedule_now(&mut self, now: Instant) {
        self.deadline = Some(now);
    }

    pub fn schedule_next(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// True once the pending tick is due. The tick is consumed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_when_due() {
        let start = Instant::now();
        let mut sched = Scheduler::new(Duration::from_millis(100));
        sched.schedule_next(start);

        assert!(!sched.fire(start + Duration::from_millis(99)));
        assert!(sched.fire(start + Duration::from_millis(100)));
        assert!(!sched.fire(start + Duration::from_millis(500)));
        assert!(!sched.is_pending());
    }

    #[test]
    fn cancel_drops_the_pending_tick() {
        let start = Instant::now();
        let mut sched = Scheduler::new(Duration::from_millis(100));
        sched.schedule_now(start);
        sched.cancel();
        assert!(!sched.fire(start + Duration::from_secs(1)));
    }

    #[test]
    fn rescheduling_counts_from_the_given_instant() {
        let start = Instant::now();
        let mut sched = Scheduler::new(Duration::from_millis(100));
        sched.schedule_next(start);
        let later = start + Duration::from_secs(5);
        sched.schedule_next(later);
        assert_eq!(sched.deadline(), Some(later + Duration::from_millis(100)));
    }
}

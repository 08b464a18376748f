//! Inactivity timeout
//!
//! While the showcase is past its intro, every pointer, wheel, keyboard or
//! touch event pushes the deadline back. If the deadline passes the monitor
//! fires once and disarms itself; the owner is expected to hard-reset.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct IdleMonitor {
    timeout: Duration,
    /// Time since the last input; `None` while disarmed
    idle_for: Option<Duration>,
}

impl IdleMonitor {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            idle_for: None,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn is_armed(&self) -> bool {
        self.idle_for.is_some()
    }

    /// Starts counting if not already counting
    pub fn arm(&mut self) {
        if self.idle_for.is_none() {
            self.idle_for = Some(Duration::ZERO);
        }
    }

    pub fn disarm(&mut self) {
        self.idle_for = None;
    }

    /// Any user input restarts the countdown
    pub fn notify_input(&mut self) {
        if let Some(idle_for) = self.idle_for.as_mut() {
            *idle_for = Duration::ZERO;
        }
    }

    /// Advances the countdown; true exactly once when the timeout is reached
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(idle_for) = self.idle_for.as_mut() else {
            return false;
        };
        *idle_for += dt;
        if *idle_for < self.timeout {
            return false;
        }
        log::info!("No input for {:?}, resetting showcase", self.timeout);
        self.idle_for = None;
        true
    }

    /// Time left before the monitor fires, if armed
    #[cfg(test)]
    pub(crate) fn remaining(&self) -> Option<Duration> {
        self.idle_for
            .map(|idle_for| self.timeout.saturating_sub(idle_for))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT_MS: u64 = 10_000;

    fn armed() -> IdleMonitor {
        let mut monitor = IdleMonitor::new(Duration::from_millis(TIMEOUT_MS));
        monitor.arm();
        monitor
    }

    #[test]
    fn test_does_not_fire_before_timeout() {
        let mut monitor = armed();
        assert!(!monitor.advance(Duration::from_millis(TIMEOUT_MS - 1)));
        assert_eq!(monitor.remaining(), Some(Duration::from_millis(1)));
    }

    #[test]
    fn test_fires_exactly_once_at_timeout() {
        let mut monitor = armed();
        assert!(!monitor.advance(Duration::from_millis(TIMEOUT_MS - 1)));
        assert!(monitor.advance(Duration::from_millis(1)));
        assert!(!monitor.advance(Duration::from_millis(TIMEOUT_MS)));
        assert!(!monitor.is_armed());
    }

    #[test]
    fn test_input_restarts_countdown() {
        let mut monitor = armed();
        assert!(!monitor.advance(Duration::from_millis(TIMEOUT_MS - 1)));
        monitor.notify_input();
        assert!(!monitor.advance(Duration::from_millis(TIMEOUT_MS - 1)));
        assert!(monitor.advance(Duration::from_millis(1)));
    }

    #[test]
    fn test_disarmed_monitor_never_fires() {
        let mut monitor = IdleMonitor::new(Duration::from_millis(TIMEOUT_MS));
        monitor.notify_input();
        assert!(!monitor.advance(Duration::from_millis(TIMEOUT_MS * 3)));

        monitor.arm();
        monitor.disarm();
        assert!(!monitor.advance(Duration::from_millis(TIMEOUT_MS)));
        assert_eq!(monitor.remaining(), None);
    }

    #[test]
    fn test_rearming_does_not_restart_running_countdown() {
        let mut monitor = armed();
        monitor.advance(Duration::from_millis(6_000));
        monitor.arm();
        assert!(monitor.advance(Duration::from_millis(4_000)));
    }
}

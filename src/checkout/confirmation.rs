//! Pay-at-counter confirmation: the order number to show at the counter and
//! the short countdown before the "Done" button unlocks.

use std::time::Duration;
use tokio::time::Instant;

pub const CONFIRMED_TITLE: &str = "Order Confirmed!";
pub const CONFIRMED_PROMPT: &str = "Please proceed to the counter with this order number:";

/// Counts down whole seconds on the tokio clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    deadline: Instant,
}

impl Countdown {
    pub fn start(duration: Duration) -> Self {
        Self {
            deadline: Instant::now() + duration,
        }
    }

    /// Seconds left, rounded up.
    pub fn remaining_secs(&self) -> u64 {
        let left = self.deadline.saturating_duration_since(Instant::now());
        left.as_millis().div_ceil(1000) as u64
    }

    pub fn is_done(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// "Done (3)" while counting, then "Done".
    pub fn done_label(&self) -> String {
        match self.remaining_secs() {
            0 => "Done".to_string(),
            n => format!("Done ({})", n),
        }
    }

    pub async fn finished(&self) {
        tokio::time::sleep_until(self.deadline).await;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterConfirmation {
    pub order_number: String,
    pub countdown: Countdown,
}

impl CounterConfirmation {
    /// "#007"
    pub fn badge(&self) -> String {
        format!("#{}", self.order_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_countdown_ticks_down() {
        let countdown = Countdown::start(Duration::from_secs(5));
        assert_eq!(countdown.remaining_secs(), 5);
        assert_eq!(countdown.done_label(), "Done (5)");

        tokio::time::advance(Duration::from_millis(1500)).await;
        assert_eq!(countdown.remaining_secs(), 4);
        assert!(!countdown.is_done());

        countdown.finished().await;
        assert!(countdown.is_done());
        assert_eq!(countdown.done_label(), "Done");
    }
}

//! Per-player countdown clocks.
//!
//! Only the side to move has a running counter. Running out of time is
//! reported through the log but does not end the game.

use chrono::TimeDelta;
use log::warn;

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessClock {
    remaining: [TimeDelta; 2],
    running: Option<Color>,
    flag_reported: [bool; 2],
}

impl ChessClock {
    /// Both sides start with `initial`; light's counter runs first.
    pub fn new(initial: TimeDelta) -> Self {
        let initial = initial.max(TimeDelta::zero());
        Self {
            remaining: [initial; 2],
            running: Some(Color::Light),
            flag_reported: [false; 2],
        }
    }

    /// Allowances too large for `TimeDelta` are clamped to `TimeDelta::MAX`.
    pub fn from_seconds(seconds: i64) -> Self {
        let initial = TimeDelta::try_seconds(seconds).unwrap_or(if seconds > 0 {
            TimeDelta::MAX
        } else {
            TimeDelta::zero()
        });
        Self::new(initial)
    }

    #[inline]
    pub fn remaining(&self, color: Color) -> TimeDelta {
        self.remaining[color.index()]
    }

    #[inline]
    pub fn running(&self) -> Option<Color> {
        self.running
    }

    /// Take one second off the running side, saturating at zero.
    ///
    /// Returns the running side and its remaining time, or `None` when
    /// stopped.
    pub fn tick(&mut self) -> Option<(Color, TimeDelta)> {
        let color = self.running?;
        let idx = color.index();
        self.remaining[idx] = (self.remaining[idx] - TimeDelta::seconds(1)).max(TimeDelta::zero());

        if self.remaining[idx].is_zero() && !self.flag_reported[idx] {
            self.flag_reported[idx] = true;
            warn!("{} has run out of time; play continues", color.name());
        }

        Some((color, self.remaining[idx]))
    }

    /// Stop whichever counter is running and start `color`'s.
    pub fn switch_to(&mut self, color: Color) {
        self.running = Some(color);
    }

    pub fn stop(&mut self) {
        self.running = None;
    }

    pub fn display(&self, color: Color) -> String {
        format_remaining(self.remaining(color))
    }
}

impl Default for ChessClock {
    fn default() -> Self {
        Self::from_seconds(crate::game_state::chess_rules::DEFAULT_CLOCK_SECONDS)
    }
}

/// `M:SS`, e.g. `5:00` or `0:07`.
pub fn format_remaining(remaining: TimeDelta) -> String {
    let total = remaining.num_seconds().max(0);
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::{format_remaining, ChessClock};
    use crate::game_state::chess_types::Color;

    #[test]
    fn default_clock_shows_five_minutes() {
        let clock = ChessClock::default();
        assert_eq!(clock.display(Color::Light), "5:00");
        assert_eq!(clock.display(Color::Dark), "5:00");
        assert_eq!(clock.running(), Some(Color::Light));
    }

    #[test]
    fn tick_only_decrements_running_side() {
        let mut clock = ChessClock::from_seconds(10);
        clock.tick();
        clock.tick();
        assert_eq!(clock.remaining(Color::Light), TimeDelta::seconds(8));
        assert_eq!(clock.remaining(Color::Dark), TimeDelta::seconds(10));

        clock.switch_to(Color::Dark);
        assert_eq!(clock.tick(), Some((Color::Dark, TimeDelta::seconds(9))));
        assert_eq!(clock.remaining(Color::Light), TimeDelta::seconds(8));
    }

    #[test]
    fn tick_saturates_at_zero_and_keeps_running() {
        let mut clock = ChessClock::from_seconds(1);
        assert_eq!(clock.tick(), Some((Color::Light, TimeDelta::zero())));
        assert_eq!(clock.tick(), Some((Color::Light, TimeDelta::zero())));
        assert_eq!(clock.display(Color::Light), "0:00");
    }

    #[test]
    fn stopped_clock_does_not_tick() {
        let mut clock = ChessClock::from_seconds(60);
        clock.stop();
        assert_eq!(clock.tick(), None);
        assert_eq!(clock.remaining(Color::Light), TimeDelta::seconds(60));
    }

    #[test]
    fn oversized_allowance_is_clamped_not_zeroed() {
        let mut clock = ChessClock::from_seconds(i64::MAX);
        assert_eq!(clock.remaining(Color::Light), TimeDelta::MAX);
        clock.tick();
        assert!(clock.remaining(Color::Light) > TimeDelta::zero());
        assert_eq!(ChessClock::from_seconds(-5).remaining(Color::Dark), TimeDelta::zero());
    }

    #[test]
    fn remaining_time_formatting() {
        assert_eq!(format_remaining(TimeDelta::seconds(7)), "0:07");
        assert_eq!(format_remaining(TimeDelta::seconds(125)), "2:05");
        assert_eq!(format_remaining(TimeDelta::seconds(-3)), "0:00");
    }
}

//! Tab Strip State
//!
//! Clamped (non-wrapping) active tab plus the direction of the last move, used
//! to slide panels in from the correct side.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StateError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Horizontal enter offset in px; exit uses the negation.
    pub fn offset(self) -> i32 {
        match self {
            Direction::Forward => 50,
            Direction::Backward => -50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    active: usize,
    count: usize,
    direction: Direction,
}

impl TabState {
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(StateError::EmptyCycle);
        }
        Ok(Self { active: 0, count, direction: Direction::default() })
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.count {
            tracing::debug!(index, count = self.count, "tab select ignored: out of range");
            return Err(StateError::OutOfRange { index, len: self.count });
        }
        self.direction = if index > self.active { Direction::Forward } else { Direction::Backward };
        self.active = index;
        tracing::debug!(index, direction = ?self.direction, "tab selected");
        Ok(())
    }

    pub fn can_step_back(&self) -> bool {
        self.active > 0
    }

    pub fn can_step_forward(&self) -> bool {
        self.active + 1 < self.count
    }

    pub fn step_back(&mut self) {
        let target = self.active.saturating_sub(1);
        let _ = self.select(target);
    }

    pub fn step_forward(&mut self) {
        let target = (self.active + 1).min(self.count - 1);
        let _ = self.select(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_logs;

    #[test]
    fn test_steps_clamp() {
        let mut tabs = TabState::new(5).unwrap();
        assert!(!tabs.can_step_back());
        tabs.step_back();
        assert_eq!(tabs.active(), 0);

        for _ in 0..10 {
            tabs.step_forward();
        }
        assert_eq!(tabs.active(), 4);
        assert!(!tabs.can_step_forward());
    }

    #[test]
    fn test_direction_follows_move() {
        let mut tabs = TabState::new(5).unwrap();
        tabs.select(3).unwrap();
        assert_eq!(tabs.direction(), Direction::Forward);
        assert_eq!(tabs.direction().offset(), 50);

        tabs.select(1).unwrap();
        assert_eq!(tabs.direction(), Direction::Backward);

        assert!(tabs.select(5).is_err());
        assert_eq!(tabs.active(), 1);
        assert_eq!(tabs.direction(), Direction::Backward);
    }

    #[test]
    fn test_bad_select_is_logged() {
        let mut tabs = TabState::new(5).unwrap();
        let logs = capture_logs(|| {
            assert!(tabs.select(9).is_err());
        });
        assert!(logs.contains("tab select ignored: out of range"), "{}", logs);
        assert_eq!(tabs.active(), 0);
    }

    #[test]
    fn test_zero_tabs_rejected() {
        assert!(matches!(TabState::new(0), Err(StateError::EmptyCycle)));
    }
}

#![allow(missing_docs)]

//! Rotating placeholder text for the assistant input.

use std::time::Duration;

use crate::catalog::PLACEHOLDER_PROMPTS;

/// Default time each prompt stays on screen.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(4000);

/// Default fade window before each switch.
pub const DEFAULT_FADE: Duration = Duration::from_millis(200);

/// Cycles a fixed list of strings on a fixed interval.
///
/// The rotator is driven by [`PlaceholderRotator::advance`] and owns no timer
/// itself. At every multiple of `interval` the next string is shown; during
/// the `fade` window immediately before a switch [`is_animating`] is true.
///
/// [`is_animating`]: PlaceholderRotator::is_animating
#[derive(Debug, Clone)]
pub struct PlaceholderRotator {
    items: Vec<String>,
    index: usize,
    interval: Duration,
    fade: Duration,
    elapsed: Duration,
}

impl Default for PlaceholderRotator {
    fn default() -> Self {
        Self::new(
            PLACEHOLDER_PROMPTS.iter().map(|prompt| prompt.to_string()),
            DEFAULT_INTERVAL,
            DEFAULT_FADE,
        )
    }
}

impl PlaceholderRotator {
    /// Build a rotator. A zero interval is bumped to one millisecond and the
    /// fade window never exceeds the interval.
    pub fn new(items: impl IntoIterator<Item = String>, interval: Duration, fade: Duration) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            items: items.into_iter().collect(),
            index: 0,
            interval,
            fade: fade.min(interval),
            elapsed: Duration::ZERO,
        }
    }

    /// Currently displayed string; empty when the list is empty.
    pub fn current(&self) -> &str {
        self.items
            .get(self.index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the text is fading out ahead of the next switch.
    pub fn is_animating(&self) -> bool {
        self.items.len() > 1 && self.elapsed + self.fade >= self.interval
    }

    /// Let `delta` of wall time pass, switching as many times as it covers.
    pub fn advance(&mut self, delta: Duration) {
        if self.items.is_empty() {
            return;
        }
        self.elapsed += delta;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.index = (self.index + 1) % self.items.len();
        }
    }

    /// Restart from the first string.
    pub fn reset(&mut self) {
        self.index = 0;
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three(interval: Duration) -> PlaceholderRotator {
        PlaceholderRotator::new(
            ["one", "two", "three"].map(String::from),
            interval,
            Duration::from_millis(200),
        )
    }

    #[test]
    fn wraps_after_full_cycle() {
        let interval = Duration::from_millis(4000);
        let mut rotator = three(interval);
        assert_eq!(rotator.current(), "one");
        rotator.advance(interval);
        assert_eq!(rotator.current(), "two");
        rotator.advance(interval * 2);
        assert_eq!(rotator.current(), "one");
    }

    #[test]
    fn small_steps_accumulate() {
        let mut rotator = three(Duration::from_millis(1000));
        for _ in 0..15 {
            rotator.advance(Duration::from_millis(200));
        }
        // 3000ms == three full intervals.
        assert_eq!(rotator.index(), 0);
        rotator.advance(Duration::from_millis(1000));
        assert_eq!(rotator.current(), "two");
    }

    #[test]
    fn fade_window_precedes_switch() {
        let mut rotator = three(Duration::from_millis(1000));
        rotator.advance(Duration::from_millis(700));
        assert!(!rotator.is_animating());
        rotator.advance(Duration::from_millis(100));
        assert!(rotator.is_animating());
        assert_eq!(rotator.current(), "one");
        rotator.advance(Duration::from_millis(200));
        assert!(!rotator.is_animating());
        assert_eq!(rotator.current(), "two");
    }

    #[test]
    fn default_uses_prompt_list() {
        let mut rotator = PlaceholderRotator::default();
        assert_eq!(rotator.current(), PLACEHOLDER_PROMPTS[0]);
        rotator.advance(DEFAULT_INTERVAL * PLACEHOLDER_PROMPTS.len() as u32);
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn empty_list_is_inert() {
        let mut rotator =
            PlaceholderRotator::new(Vec::new(), Duration::ZERO, Duration::from_secs(1));
        rotator.advance(Duration::from_secs(10));
        assert_eq!(rotator.current(), "");
        assert!(!rotator.is_animating());
        assert_eq!(rotator.interval(), Duration::from_millis(1));
    }
}

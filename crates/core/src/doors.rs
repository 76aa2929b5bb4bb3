//! Door sections and the horizontal navigator that moves between them.
//!
//! The navigator keeps one canonical `active` door. Two producers feed it:
//! explicit selection ([`DoorNavigator::select`]) and free scrolling
//! ([`DoorNavigator::scroll_by`]). Offsets are measured in abstract units,
//! [`DOOR_SPAN`] per door, so the mapping does not depend on terminal width.

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Scroll units per door.
pub const DOOR_SPAN: u32 = 1000;

/// Number of doors.
pub const DOOR_COUNT: usize = 4;

/// Largest scroll offset (start of the last door).
pub const MAX_OFFSET: u32 = DOOR_SPAN * (DOOR_COUNT as u32 - 1);

/// Duration of an animated scroll triggered by [`DoorNavigator::select`].
pub const SCROLL_ANIMATION: Duration = Duration::from_millis(450);

/// One of the four thematic sections of the home view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Door {
    /// Tracks with momentum.
    Bets,
    /// Tracks losing engagement.
    Risks,
    /// Sleepers, collabs and catalog revivals.
    Opportunities,
    /// The user's focus queue.
    FocusShelf,
}

/// Rejected door index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("door index {0} out of range (expected 0..=3)")]
pub struct InvalidDoor(pub usize);

impl Door {
    /// All doors in navigation order.
    pub const ALL: [Door; DOOR_COUNT] = [
        Door::Bets,
        Door::Risks,
        Door::Opportunities,
        Door::FocusShelf,
    ];

    /// Position of the door, `0..=3`.
    pub fn index(self) -> usize {
        match self {
            Door::Bets => 0,
            Door::Risks => 1,
            Door::Opportunities => 2,
            Door::FocusShelf => 3,
        }
    }

    /// Two-digit label used on navigation pills.
    pub fn number(self) -> String {
        format!("{:02}", self.index() + 1)
    }

    /// Whether cards in this door offer "add to focus".
    pub fn offers_tracks(self) -> bool {
        !matches!(self, Door::FocusShelf)
    }
}

impl TryFrom<usize> for Door {
    type Error = InvalidDoor;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Door::ALL.get(value).copied().ok_or(InvalidDoor(value))
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Door::Bets => "Bets",
            Door::Risks => "Risks",
            Door::Opportunities => "Opportunities",
            Door::FocusShelf => "Focus Shelf",
        };
        f.write_str(name)
    }
}

/// Scroll offset at which `door` is fully in view.
pub fn offset_for(door: Door) -> u32 {
    door.index() as u32 * DOOR_SPAN
}

/// Door nearest to `offset`. Inverse of [`offset_for`].
pub fn door_for_offset(offset: u32) -> Door {
    let index = ((offset.min(MAX_OFFSET) + DOOR_SPAN / 2) / DOOR_SPAN) as usize;
    Door::ALL[index.min(DOOR_COUNT - 1)]
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollAnimation {
    from: u32,
    to: u32,
    elapsed: Duration,
}

/// Active-door state plus the horizontal scroll position.
#[derive(Debug, Clone, PartialEq)]
pub struct DoorNavigator {
    active: Door,
    offset: u32,
    animation: Option<ScrollAnimation>,
}

impl Default for DoorNavigator {
    fn default() -> Self {
        Self {
            active: Door::Bets,
            offset: 0,
            animation: None,
        }
    }
}

impl DoorNavigator {
    /// Navigator resting on the first door.
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical active door.
    pub fn active(&self) -> Door {
        self.active
    }

    /// Current horizontal offset in door units.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Scroll progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        f64::from(self.offset) / f64::from(MAX_OFFSET)
    }

    /// Whether a programmatic scroll is still settling.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Select `door` and start scrolling it into view.
    pub fn select(&mut self, door: Door) {
        let target = offset_for(door);
        if self.active != door {
            debug!(from = %self.active, to = %door, producer = "select", "active door changed");
        }
        self.active = door;
        if self.offset == target {
            self.animation = None;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to: target,
            elapsed: Duration::ZERO,
        });
    }

    /// Select by raw index; out-of-range indices are rejected.
    pub fn select_index(&mut self, index: usize) -> Result<Door, InvalidDoor> {
        let door = Door::try_from(index)?;
        self.select(door);
        Ok(door)
    }

    /// Select the door to the right, stopping at the last one.
    pub fn next(&mut self) {
        if let Some(door) = Door::ALL.get(self.active.index() + 1) {
            self.select(*door);
        }
    }

    /// Select the door to the left, stopping at the first one.
    pub fn previous(&mut self) {
        if let Some(index) = self.active.index().checked_sub(1) {
            self.select(Door::ALL[index]);
        }
    }

    /// Free scroll by `delta` units, re-deriving the active door.
    pub fn scroll_by(&mut self, delta: i64) {
        self.animation = None;
        let next = (i64::from(self.offset) + delta).clamp(0, i64::from(MAX_OFFSET));
        self.offset = next as u32;
        let door = door_for_offset(self.offset);
        if door != self.active {
            debug!(from = %self.active, to = %door, producer = "scroll", "active door changed");
            self.active = door;
        }
    }

    /// Advance a running scroll animation. The active door never changes here.
    pub fn tick(&mut self, elapsed: Duration) {
        let Some(mut animation) = self.animation else {
            return;
        };
        animation.elapsed += elapsed;
        if animation.elapsed >= SCROLL_ANIMATION {
            self.offset = animation.to;
            self.animation = None;
            return;
        }
        let t = animation.elapsed.as_secs_f64() / SCROLL_ANIMATION.as_secs_f64();
        let eased = 1.0 - (1.0 - t).powi(3);
        let from = f64::from(animation.from);
        let to = f64::from(animation.to);
        self.offset = (from + (to - from) * eased).round() as u32;
        self.animation = Some(animation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_then_read_back() {
        let mut nav = DoorNavigator::new();
        for index in 0..DOOR_COUNT {
            let door = nav.select_index(index).unwrap();
            assert_eq!(nav.active().index(), index);
            assert_eq!(door.index(), index);
        }
        assert_eq!(nav.select_index(4), Err(InvalidDoor(4)));
        assert_eq!(nav.active(), Door::FocusShelf);
    }

    #[test]
    fn offset_mapping_is_inverse() {
        for door in Door::ALL {
            assert_eq!(door_for_offset(offset_for(door)), door);
        }
        assert_eq!(door_for_offset(499), Door::Bets);
        assert_eq!(door_for_offset(500), Door::Risks);
        assert_eq!(door_for_offset(u32::MAX), Door::FocusShelf);
    }

    #[test]
    fn scroll_and_select_agree_on_position() {
        for door in Door::ALL {
            let mut clicked = DoorNavigator::new();
            clicked.select(door);
            clicked.tick(SCROLL_ANIMATION);

            let mut scrolled = DoorNavigator::new();
            scrolled.scroll_by(i64::from(offset_for(door)));

            assert_eq!(clicked.offset(), scrolled.offset());
            assert_eq!(clicked.active(), scrolled.active());
        }
    }

    #[test]
    fn animation_keeps_selected_door_and_lands_exactly() {
        let mut nav = DoorNavigator::new();
        nav.select(Door::FocusShelf);
        assert!(nav.is_animating());
        nav.tick(Duration::from_millis(100));
        assert!(nav.offset() > 0 && nav.offset() < MAX_OFFSET);
        assert_eq!(nav.active(), Door::FocusShelf);
        nav.tick(Duration::from_millis(1000));
        assert!(!nav.is_animating());
        assert_eq!(nav.offset(), MAX_OFFSET);
    }

    #[test]
    fn scrolling_cancels_animation_and_clamps() {
        let mut nav = DoorNavigator::new();
        nav.select(Door::Opportunities);
        nav.tick(Duration::from_millis(50));
        nav.scroll_by(-10_000);
        assert!(!nav.is_animating());
        assert_eq!(nav.offset(), 0);
        assert_eq!(nav.active(), Door::Bets);

        nav.scroll_by(10_000);
        assert_eq!(nav.offset(), MAX_OFFSET);
        assert_eq!(nav.active(), Door::FocusShelf);
        assert!((nav.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn next_and_previous_stop_at_edges() {
        let mut nav = DoorNavigator::new();
        nav.previous();
        assert_eq!(nav.active(), Door::Bets);
        for _ in 0..6 {
            nav.next();
        }
        assert_eq!(nav.active(), Door::FocusShelf);
    }

    #[test]
    fn door_labels() {
        assert_eq!(Door::Opportunities.number(), "03");
        assert_eq!(Door::FocusShelf.to_string(), "Focus Shelf");
        assert!(!Door::FocusShelf.offers_tracks());
    }
}

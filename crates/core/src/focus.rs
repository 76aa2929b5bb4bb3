#![allow(missing_docs)]

//! Bounded, deduplicated queue of tracks the user is focusing on.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::FocusTrack;

/// Maximum number of tracks on the focus shelf.
pub const FOCUS_CAPACITY: usize = 10;

/// Number of "up next" rows the shelf shows below the current track.
pub const UP_NEXT_VISIBLE: usize = 4;

/// Outcome of [`FocusQueue::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Track was appended.
    Added,
    /// A track with the same id is already queued.
    Duplicate,
    /// The queue already holds [`FOCUS_CAPACITY`] tracks.
    Full,
}

impl AddOutcome {
    /// Whether the queue changed.
    pub fn is_added(self) -> bool {
        matches!(self, AddOutcome::Added)
    }
}

/// Insertion-ordered focus queue. The first entry is "now focusing".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FocusQueue {
    tracks: Vec<FocusTrack>,
}

impl FocusQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `track` unless the queue is full or already holds its id.
    ///
    /// Rejections leave the queue untouched; the outcome only feeds status text.
    pub fn add(&mut self, track: FocusTrack) -> AddOutcome {
        if self.tracks.len() >= FOCUS_CAPACITY {
            debug!(id = %track.id, "focus queue full; ignoring add");
            return AddOutcome::Full;
        }
        if self.contains(&track.id) {
            debug!(id = %track.id, "track already in focus; ignoring add");
            return AddOutcome::Duplicate;
        }
        debug!(id = %track.id, len = self.tracks.len() + 1, "track added to focus");
        self.tracks.push(track);
        AddOutcome::Added
    }

    /// Remove the entry with `track_id`, returning it if it was queued.
    pub fn remove(&mut self, track_id: &str) -> Option<FocusTrack> {
        let index = self.tracks.iter().position(|track| track.id == track_id)?;
        let removed = self.tracks.remove(index);
        debug!(id = %removed.id, len = self.tracks.len(), "track removed from focus");
        Some(removed)
    }

    pub fn contains(&self, track_id: &str) -> bool {
        self.tracks.iter().any(|track| track.id == track_id)
    }

    /// Track currently in focus.
    pub fn current(&self) -> Option<&FocusTrack> {
        self.tracks.first()
    }

    /// Everything after the current track.
    pub fn up_next(&self) -> &[FocusTrack] {
        self.tracks.get(1..).unwrap_or(&[])
    }

    /// The slice of [`Self::up_next`] the shelf has room to show.
    pub fn up_next_visible(&self) -> &[FocusTrack] {
        let rest = self.up_next();
        &rest[..rest.len().min(UP_NEXT_VISIBLE)]
    }

    pub fn tracks(&self) -> &[FocusTrack] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&FocusTrack> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tracks.len() >= FOCUS_CAPACITY
    }

    /// Shelf counter, e.g. `QUEUE: 3/10`.
    pub fn counter_label(&self) -> String {
        format!("{}/{}", self.tracks.len(), FOCUS_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn track(id: &str) -> FocusTrack {
        FocusTrack::new(id, format!("Title {id}"), "Artist")
    }

    fn ids(queue: &FocusQueue) -> Vec<&str> {
        queue.tracks().iter().map(|track| track.id.as_str()).collect()
    }

    #[test]
    fn add_appends_in_order_and_rejects_duplicates() {
        let mut queue = FocusQueue::new();
        assert_eq!(queue.add(track("a")), AddOutcome::Added);
        assert_eq!(queue.add(track("b")), AddOutcome::Added);
        assert_eq!(queue.add(track("a")), AddOutcome::Duplicate);
        assert_eq!(ids(&queue), vec!["a", "b"]);
    }

    #[test]
    fn never_exceeds_capacity_or_duplicates() {
        let mut queue = FocusQueue::new();
        // Mixed sequence with repeats and more distinct ids than capacity.
        for n in [1, 2, 2, 3, 1, 4, 5, 6, 7, 7, 8, 9, 10, 11, 12, 3, 13] {
            queue.add(track(&format!("t{n}")));
            assert!(queue.len() <= FOCUS_CAPACITY);
            let unique: HashSet<_> = ids(&queue).into_iter().collect();
            assert_eq!(unique.len(), queue.len());
        }
        assert!(queue.is_full());
    }

    #[test]
    fn eleventh_track_leaves_full_queue_unchanged() {
        let mut queue = FocusQueue::new();
        for n in 1..=10 {
            queue.add(track(&format!("k{n}")));
        }
        let before = queue.tracks().to_vec();
        assert_eq!(queue.add(track("k11")), AddOutcome::Full);
        assert_eq!(queue.tracks(), before.as_slice());
        assert_eq!(queue.add(track("k11")), AddOutcome::Full);
        assert_eq!(queue.tracks(), before.as_slice());
    }

    #[test]
    fn add_then_remove_restores_previous_state() {
        let mut queue = FocusQueue::new();
        queue.add(track("a"));
        queue.add(track("b"));
        let before = queue.tracks().to_vec();

        assert!(queue.add(track("c")).is_added());
        assert!(queue.remove("c").is_some());
        assert_eq!(queue.tracks(), before.as_slice());
    }

    #[test]
    fn removing_middle_entry_keeps_current_and_up_next() {
        let mut queue = FocusQueue::new();
        queue.add(track("A"));
        queue.add(track("B"));
        queue.add(track("C"));

        queue.remove("B");
        assert_eq!(ids(&queue), vec!["A", "C"]);
        assert_eq!(queue.current().map(|t| t.id.as_str()), Some("A"));
        let next: Vec<_> = queue.up_next().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(next, vec!["C"]);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut queue = FocusQueue::new();
        queue.add(track("a"));
        assert!(queue.remove("zzz").is_none());
        assert_eq!(ids(&queue), vec!["a"]);
    }

    #[test]
    fn up_next_visible_caps_at_four() {
        let mut queue = FocusQueue::new();
        assert!(queue.up_next().is_empty());
        for n in 0..8 {
            queue.add(track(&format!("v{n}")));
        }
        assert_eq!(queue.up_next().len(), 7);
        assert_eq!(queue.up_next_visible().len(), UP_NEXT_VISIBLE);
        assert_eq!(queue.counter_label(), "8/10");
    }
}

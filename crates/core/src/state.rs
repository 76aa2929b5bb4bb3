//! Root dashboard state: one owner for the focus queue, view, doors, chat and
//! whichever modal is open.

#![allow(missing_docs)]

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::{
    campaign::CampaignBoard,
    catalog,
    chat::ChatState,
    detail::{DetailSubject, SongDetail},
    doors::{Door, DoorNavigator, InvalidDoor, DOOR_COUNT},
    focus::{AddOutcome, FocusQueue},
    models::{CatalogTrack, FocusTrack, SampleTrack},
    rotator::PlaceholderRotator,
    view::View,
};

/// Modal layered over the current view.
#[derive(Debug, Clone)]
pub enum Overlay {
    /// Song detail for a catalog row.
    SongDetail(SongDetail),
    /// Engagement score breakdown.
    Engagement,
    /// Campaign board.
    Campaigns(CampaignBoard),
}

/// What a card under the cursor represents.
#[derive(Debug, Clone, Copy)]
pub enum CardRef<'a> {
    /// Static sample card in a content door.
    Sample(&'a SampleTrack),
    /// Entry on the focus shelf.
    Shelf(&'a FocusTrack),
}

/// The whole interactive state of the dashboard.
///
/// Handlers receive `&mut Dashboard`, renderers `&Dashboard`. Nothing here
/// touches the terminal or a clock; elapsed time is passed in.
#[derive(Debug, Clone)]
pub struct Dashboard {
    focus: FocusQueue,
    view: View,
    doors: DoorNavigator,
    chat: ChatState,
    rotator: PlaceholderRotator,
    overlay: Option<Overlay>,
    card_cursor: [usize; DOOR_COUNT],
    catalog_cursor: usize,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(PlaceholderRotator::default())
    }
}

impl Dashboard {
    /// Fresh dashboard on the home view with an empty shelf.
    pub fn new(rotator: PlaceholderRotator) -> Self {
        Self {
            focus: FocusQueue::new(),
            view: View::Home,
            doors: DoorNavigator::new(),
            chat: ChatState::new(),
            rotator,
            overlay: None,
            card_cursor: [0; DOOR_COUNT],
            catalog_cursor: 0,
        }
    }

    pub fn focus(&self) -> &FocusQueue {
        &self.focus
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn doors(&self) -> &DoorNavigator {
        &self.doors
    }

    pub fn chat(&self) -> &ChatState {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatState {
        &mut self.chat
    }

    pub fn rotator(&self) -> &PlaceholderRotator {
        &self.rotator
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn overlay_mut(&mut self) -> Option<&mut Overlay> {
        self.overlay.as_mut()
    }

    /// Add a track to the shelf. Rejections are logged and otherwise ignored.
    pub fn add_to_focus(&mut self, track: FocusTrack) -> AddOutcome {
        let id = track.id.clone();
        let outcome = self.focus.add(track);
        match outcome {
            AddOutcome::Added => info!(id = %id, queue = %self.focus.counter_label(), "added to focus"),
            AddOutcome::Duplicate => debug!(id = %id, "already on the focus shelf"),
            AddOutcome::Full => warn!(id = %id, "focus shelf is full"),
        }
        outcome
    }

    /// Remove `track_id` from the shelf. Unknown ids are a no-op.
    pub fn remove_from_focus(&mut self, track_id: &str) -> Option<FocusTrack> {
        let removed = self.focus.remove(track_id);
        if removed.is_some() {
            info!(id = %track_id, queue = %self.focus.counter_label(), "removed from focus");
            self.clamp_card_cursor(Door::FocusShelf);
        }
        removed
    }

    /// Switch the top-level view, closing any open modal.
    pub fn navigate(&mut self, view: View) {
        if self.view == view {
            return;
        }
        info!(from = %self.view, to = %view, "view changed");
        self.view = view;
        self.overlay = None;
    }

    pub fn next_view(&mut self) {
        self.navigate(self.view.next());
    }

    pub fn previous_view(&mut self) {
        self.navigate(self.view.previous());
    }

    /// Header "Intelligence" entry: go home and activate the chat.
    pub fn open_chat(&mut self) {
        self.navigate(View::Home);
        self.chat.open();
    }

    pub fn select_door(&mut self, door: Door) {
        self.doors.select(door);
    }

    /// Select a door by index; out-of-range indices leave the state untouched.
    pub fn select_door_index(&mut self, index: usize) -> Result<Door, InvalidDoor> {
        self.doors.select_index(index)
    }

    pub fn next_door(&mut self) {
        self.doors.next();
    }

    pub fn previous_door(&mut self) {
        self.doors.previous();
    }

    /// Free scroll of the door strip.
    pub fn scroll_doors(&mut self, delta: i64) {
        self.doors.scroll_by(delta);
    }

    /// Frame tick: settles door animation and modal loading.
    pub fn tick(&mut self, elapsed: Duration) {
        self.doors.tick(elapsed);
        if let Some(Overlay::SongDetail(detail)) = self.overlay.as_mut() {
            detail.tick(elapsed);
        }
    }

    /// Rotation tick from the placeholder timer.
    pub fn rotate(&mut self, elapsed: Duration) {
        self.rotator.advance(elapsed);
    }

    /// Number of cards in `door`.
    pub fn card_count(&self, door: Door) -> usize {
        match door {
            Door::FocusShelf => self.focus.len(),
            other => catalog::door_tracks(other).len(),
        }
    }

    /// Card cursor of `door`.
    pub fn card_cursor(&self, door: Door) -> usize {
        self.card_cursor[door.index()]
    }

    /// Move the card cursor of the active door.
    pub fn move_card_cursor(&mut self, delta: isize) {
        let door = self.doors.active();
        let count = self.card_count(door);
        let slot = &mut self.card_cursor[door.index()];
        if count == 0 {
            *slot = 0;
            return;
        }
        *slot = (*slot as isize + delta).clamp(0, count as isize - 1) as usize;
    }

    fn clamp_card_cursor(&mut self, door: Door) {
        let count = self.card_count(door);
        let slot = &mut self.card_cursor[door.index()];
        *slot = (*slot).min(count.saturating_sub(1));
    }

    /// Card under the cursor in the active door.
    pub fn selected_card(&self) -> Option<CardRef<'_>> {
        let door = self.doors.active();
        let index = self.card_cursor(door);
        match door {
            Door::FocusShelf => self.focus.get(index).map(CardRef::Shelf),
            other => catalog::door_tracks(other).get(index).map(CardRef::Sample),
        }
    }

    /// "Add to focus" on the selected card. `None` when the active door has no
    /// addable card.
    pub fn add_selected_card(&mut self) -> Option<AddOutcome> {
        let track = match self.selected_card()? {
            CardRef::Sample(sample) => sample.to_focus(),
            CardRef::Shelf(_) => return None,
        };
        Some(self.add_to_focus(track))
    }

    /// Remove the selected shelf entry. Only acts on the focus shelf door.
    pub fn remove_selected_card(&mut self) -> Option<FocusTrack> {
        let id = match self.selected_card()? {
            CardRef::Shelf(track) => track.id.clone(),
            CardRef::Sample(_) => return None,
        };
        self.remove_from_focus(&id)
    }

    pub fn catalog_cursor(&self) -> usize {
        self.catalog_cursor
    }

    pub fn move_catalog_cursor(&mut self, delta: isize) {
        let count = catalog::top_tracks().len();
        if count == 0 {
            return;
        }
        self.catalog_cursor =
            (self.catalog_cursor as isize + delta).clamp(0, count as isize - 1) as usize;
    }

    pub fn selected_catalog_track(&self) -> Option<&'static CatalogTrack> {
        catalog::top_tracks().get(self.catalog_cursor)
    }

    pub fn add_selected_catalog_track(&mut self) -> Option<AddOutcome> {
        let track = self.selected_catalog_track()?.to_focus();
        Some(self.add_to_focus(track))
    }

    /// Open the song detail modal for the selected catalog row.
    pub fn open_selected_detail(&mut self) -> bool {
        let Some(track) = self.selected_catalog_track() else {
            return false;
        };
        debug!(id = %track.id, "opening song detail");
        self.overlay = Some(Overlay::SongDetail(SongDetail::open(DetailSubject {
            id: track.id.clone(),
            title: track.title.clone(),
            artist: track.artist.clone(),
            velocity: track.velocity.clone(),
        })));
        true
    }

    pub fn open_engagement(&mut self) {
        self.overlay = Some(Overlay::Engagement);
    }

    pub fn open_campaigns(&mut self) {
        self.overlay = Some(Overlay::Campaigns(CampaignBoard::new()));
    }

    /// Close the open modal, if any. Returns whether one was open.
    pub fn close_overlay(&mut self) -> bool {
        self.overlay.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_home_with_empty_shelf() {
        let dashboard = Dashboard::default();
        assert_eq!(dashboard.view(), View::Home);
        assert!(dashboard.focus().is_empty());
        assert_eq!(dashboard.doors().active(), Door::Bets);
        assert!(!dashboard.chat().is_active());
    }

    #[test]
    fn adds_selected_sample_card_once() {
        let mut dashboard = Dashboard::default();
        dashboard.move_card_cursor(1);
        assert_eq!(dashboard.add_selected_card(), Some(AddOutcome::Added));
        assert_eq!(dashboard.add_selected_card(), Some(AddOutcome::Duplicate));
        let expected = &catalog::door_tracks(Door::Bets)[1].id;
        assert_eq!(dashboard.focus().current().map(|t| &t.id), Some(expected));
    }

    #[test]
    fn shelf_cursor_follows_removals() {
        let mut dashboard = Dashboard::default();
        for sample in catalog::door_tracks(Door::Risks) {
            dashboard.add_to_focus(sample.to_focus());
        }
        let total = dashboard.focus().len();
        assert!(total >= 2);

        dashboard.select_door(Door::FocusShelf);
        assert_eq!(dashboard.add_selected_card(), None);
        dashboard.move_card_cursor(isize::MAX / 2);
        assert_eq!(dashboard.card_cursor(Door::FocusShelf), total - 1);
        assert!(dashboard.remove_selected_card().is_some());
        assert_eq!(dashboard.card_cursor(Door::FocusShelf), total - 2);
    }

    #[test]
    fn scroll_and_select_drive_same_door() {
        let mut dashboard = Dashboard::default();
        dashboard.scroll_doors(2100);
        assert_eq!(dashboard.doors().active(), Door::Opportunities);
        dashboard.select_door(Door::Risks);
        assert_eq!(dashboard.doors().active(), Door::Risks);
        assert!(dashboard.select_door_index(7).is_err());
        assert_eq!(dashboard.doors().active(), Door::Risks);
    }

    #[test]
    fn open_chat_returns_home() {
        let mut dashboard = Dashboard::default();
        dashboard.navigate(View::Settings);
        dashboard.open_chat();
        assert_eq!(dashboard.view(), View::Home);
        assert!(dashboard.chat().is_active());
    }

    #[test]
    fn navigating_closes_modals() {
        let mut dashboard = Dashboard::default();
        dashboard.navigate(View::Catalog);
        assert!(dashboard.open_selected_detail());
        assert!(matches!(dashboard.overlay(), Some(Overlay::SongDetail(_))));
        dashboard.next_view();
        assert_eq!(dashboard.view(), View::Settings);
        assert!(dashboard.overlay().is_none());
        assert!(!dashboard.close_overlay());
    }

    #[test]
    fn tick_drives_detail_loading() {
        let mut dashboard = Dashboard::default();
        dashboard.navigate(View::Catalog);
        dashboard.move_catalog_cursor(2);
        dashboard.open_selected_detail();
        dashboard.tick(Duration::from_secs(2));
        match dashboard.overlay() {
            Some(Overlay::SongDetail(detail)) => {
                assert!(!detail.is_loading());
                assert_eq!(detail.subject().id, "catalog-3");
            }
            other => panic!("unexpected overlay {other:?}"),
        }
    }

    #[test]
    fn catalog_rows_join_the_shelf_without_artwork() {
        let mut dashboard = Dashboard::default();
        assert_eq!(dashboard.add_selected_catalog_track(), Some(AddOutcome::Added));
        let track = dashboard.focus().current().cloned();
        assert_eq!(track.as_ref().map(|t| t.id.as_str()), Some("catalog-1"));
        assert_eq!(track.and_then(|t| t.artwork), None);
    }
}

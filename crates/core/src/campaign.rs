//! Campaign board: list selection and the derived cost figures.

use crate::{catalog, models::Campaign};

/// Cursor and expanded-row state for the campaign list.
#[derive(Debug, Clone, Default)]
pub struct CampaignBoard {
    cursor: usize,
    expanded: Option<String>,
}

impl CampaignBoard {
    /// Board with the first campaign under the cursor and nothing expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the row under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamped to the list.
    pub fn move_cursor(&mut self, delta: isize) {
        let total = catalog::campaigns().len();
        if total == 0 {
            self.cursor = 0;
            return;
        }
        let last = total as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, last) as usize;
    }

    /// Campaign under the cursor.
    pub fn current(&self) -> Option<&'static Campaign> {
        catalog::campaigns().get(self.cursor)
    }

    /// Expand the row under the cursor, or collapse it if it is already open.
    pub fn toggle_current(&mut self) {
        if let Some(campaign) = self.current() {
            self.toggle(&campaign.id);
        }
    }

    /// Expand `id`, collapsing whatever was open; selecting the open row closes it.
    pub fn toggle(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    /// Id of the expanded campaign.
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// Whether `campaign` shows its detail row.
    pub fn is_expanded(&self, campaign: &Campaign) -> bool {
        self.expanded.as_deref() == Some(campaign.id.as_str())
    }
}

/// `$0.041`, or `n/a` when there were no streams.
pub fn format_cost_per_stream(campaign: &Campaign) -> String {
    campaign
        .cost_per_stream()
        .map(|value| format!("${value:.3}"))
        .unwrap_or_else(|| "n/a".to_string())
}

/// `$0.23`, or `n/a` when there were no new listeners.
pub fn format_cost_per_listener(campaign: &Campaign) -> String {
    campaign
        .cost_per_listener()
        .map(|value| format!("${value:.2}"))
        .unwrap_or_else(|| "n/a".to_string())
}

/// Thousands separators for whole numbers, e.g. `75,000`.
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_expands_and_collapses() {
        let mut board = CampaignBoard::new();
        board.toggle_current();
        assert_eq!(board.expanded(), Some("1"));
        board.move_cursor(1);
        board.toggle_current();
        assert_eq!(board.expanded(), Some("2"));
        board.toggle_current();
        assert_eq!(board.expanded(), None);
    }

    #[test]
    fn cursor_is_clamped() {
        let mut board = CampaignBoard::new();
        board.move_cursor(-3);
        assert_eq!(board.cursor(), 0);
        board.move_cursor(99);
        assert_eq!(board.cursor(), catalog::campaigns().len() - 1);
    }

    #[test]
    fn berlin_cost_figures() {
        let berlin = &catalog::campaigns()[0];
        assert_eq!(format_cost_per_stream(berlin), "$0.041");
        assert_eq!(format_cost_per_listener(berlin), "$0.23");
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(75000), "75,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}

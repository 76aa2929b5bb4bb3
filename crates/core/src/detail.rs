//! Song detail modal state: staged loading, chart highlights, model toggle and
//! the "why did this happen" feedback question.

#![allow(missing_docs)]

use std::time::Duration;

use crate::catalog::{Projection, FEEDBACK_OPTIONS, LINEAR_PROJECTION, QUADRATIC_PROJECTION};

/// Interval between loading progress steps.
pub const LOADING_STEP: Duration = Duration::from_millis(150);
/// Progress added per step, in percent.
pub const LOADING_INCREMENT: u8 = 10;
/// Pause between reaching 100% and showing content.
pub const LOADING_SETTLE: Duration = Duration::from_millis(300);
/// Maximum number of highlighted charts.
pub const MAX_HIGHLIGHTS: usize = 3;

/// Analytics tier a chart belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Descriptive,
    Predictive,
    Prescriptive,
}

impl ChartKind {
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Descriptive => "descriptive",
            ChartKind::Predictive => "predictive",
            ChartKind::Prescriptive => "prescriptive",
        }
    }
}

/// The nine charts of the modal, in grid order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailChart {
    StreamHistory,
    PlatformSplit,
    SaveRate,
    GrowthProjection,
    ConfidenceInterval,
    MomentumScore,
    RoiProjection,
    OptimalSpend,
    Strategy,
}

impl DetailChart {
    pub const ALL: [DetailChart; 9] = [
        DetailChart::StreamHistory,
        DetailChart::PlatformSplit,
        DetailChart::SaveRate,
        DetailChart::GrowthProjection,
        DetailChart::ConfidenceInterval,
        DetailChart::MomentumScore,
        DetailChart::RoiProjection,
        DetailChart::OptimalSpend,
        DetailChart::Strategy,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DetailChart::StreamHistory => "Stream History",
            DetailChart::PlatformSplit => "Platform Split",
            DetailChart::SaveRate => "Save Rate Trend",
            DetailChart::GrowthProjection => "Growth Projection",
            DetailChart::ConfidenceInterval => "Confidence Interval",
            DetailChart::MomentumScore => "Momentum Score",
            DetailChart::RoiProjection => "ROI Projection",
            DetailChart::OptimalSpend => "Optimal Spend",
            DetailChart::Strategy => "Strategy Recommendation",
        }
    }

    pub fn subtitle(self, model: PredictionModel) -> &'static str {
        match self {
            DetailChart::StreamHistory => "Where your song is",
            DetailChart::PlatformSplit => "Current distribution",
            DetailChart::SaveRate => "Listener commitment",
            DetailChart::GrowthProjection => match model {
                PredictionModel::Linear => "Linear model",
                PredictionModel::Quadratic => "Exponential model",
            },
            DetailChart::ConfidenceInterval => "Prediction accuracy",
            DetailChart::MomentumScore => "Velocity indicator",
            DetailChart::RoiProjection => "Investment impact",
            DetailChart::OptimalSpend => "Recommended action",
            DetailChart::Strategy => "Next best move",
        }
    }

    pub fn kind(self) -> ChartKind {
        match self {
            DetailChart::StreamHistory | DetailChart::PlatformSplit | DetailChart::SaveRate => {
                ChartKind::Descriptive
            }
            DetailChart::GrowthProjection
            | DetailChart::ConfidenceInterval
            | DetailChart::MomentumScore => ChartKind::Predictive,
            DetailChart::RoiProjection | DetailChart::OptimalSpend | DetailChart::Strategy => {
                ChartKind::Prescriptive
            }
        }
    }
}

/// Projection model used by the predictive charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredictionModel {
    Linear,
    #[default]
    Quadratic,
}

impl PredictionModel {
    pub fn toggled(self) -> Self {
        match self {
            PredictionModel::Linear => PredictionModel::Quadratic,
            PredictionModel::Quadratic => PredictionModel::Linear,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PredictionModel::Linear => "Linear",
            PredictionModel::Quadratic => "Exponential",
        }
    }

    pub fn projection(self) -> &'static Projection {
        match self {
            PredictionModel::Linear => &*LINEAR_PROJECTION,
            PredictionModel::Quadratic => &*QUADRATIC_PROJECTION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Loading {
    Progress { percent: u8, carry: Duration },
    Settling(Duration),
    Done,
}

/// Song the modal is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSubject {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub velocity: String,
}

/// State of an open song detail modal.
#[derive(Debug, Clone)]
pub struct SongDetail {
    subject: DetailSubject,
    loading: Loading,
    highlighted: Vec<usize>,
    cursor: usize,
    model: PredictionModel,
    feedback_cursor: usize,
    feedback: Option<usize>,
}

impl SongDetail {
    pub fn open(subject: DetailSubject) -> Self {
        Self {
            subject,
            loading: Loading::Progress {
                percent: 0,
                carry: Duration::ZERO,
            },
            highlighted: vec![0, 3, 6],
            cursor: 0,
            model: PredictionModel::default(),
            feedback_cursor: 0,
            feedback: None,
        }
    }

    pub fn subject(&self) -> &DetailSubject {
        &self.subject
    }

    pub fn is_loading(&self) -> bool {
        !matches!(self.loading, Loading::Done)
    }

    /// Loading progress in percent.
    pub fn progress(&self) -> u8 {
        match self.loading {
            Loading::Progress { percent, .. } => percent,
            Loading::Settling(_) | Loading::Done => 100,
        }
    }

    /// Advance the loading sequence by `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) {
        let mut remaining = elapsed;
        loop {
            match self.loading {
                Loading::Progress { percent, carry } => {
                    let total = carry + remaining;
                    if total < LOADING_STEP {
                        self.loading = Loading::Progress {
                            percent,
                            carry: total,
                        };
                        return;
                    }
                    remaining = total - LOADING_STEP;
                    let next = percent.saturating_add(LOADING_INCREMENT).min(100);
                    self.loading = if next >= 100 {
                        Loading::Settling(Duration::ZERO)
                    } else {
                        Loading::Progress {
                            percent: next,
                            carry: Duration::ZERO,
                        }
                    };
                }
                Loading::Settling(waited) => {
                    let waited = waited + remaining;
                    self.loading = if waited >= LOADING_SETTLE {
                        Loading::Done
                    } else {
                        Loading::Settling(waited)
                    };
                    return;
                }
                Loading::Done => return,
            }
        }
    }

    /// Skip straight to the loaded content.
    pub fn finish_loading(&mut self) {
        self.loading = Loading::Done;
    }

    pub fn highlighted(&self) -> &[usize] {
        &self.highlighted
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }

    /// Toggle the highlight of chart `index`, keeping at most
    /// [`MAX_HIGHLIGHTS`]. The oldest highlight is evicted only when the set
    /// is already full, so a freed slot is refilled without losing another.
    pub fn toggle_highlight(&mut self, index: usize) {
        if index >= DetailChart::ALL.len() {
            return;
        }
        if let Some(pos) = self.highlighted.iter().position(|value| *value == index) {
            self.highlighted.remove(pos);
            return;
        }
        if self.highlighted.len() >= MAX_HIGHLIGHTS {
            self.highlighted.remove(0);
        }
        self.highlighted.push(index);
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_chart(&self) -> DetailChart {
        DetailChart::ALL[self.cursor]
    }

    /// Move the grid cursor; the grid is three charts wide.
    pub fn move_cursor(&mut self, delta_row: isize, delta_col: isize) {
        let row = (self.cursor / 3) as isize + delta_row;
        let col = (self.cursor % 3) as isize + delta_col;
        let row = row.clamp(0, 2) as usize;
        let col = col.clamp(0, 2) as usize;
        self.cursor = row * 3 + col;
    }

    pub fn toggle_highlight_at_cursor(&mut self) {
        self.toggle_highlight(self.cursor);
    }

    pub fn model(&self) -> PredictionModel {
        self.model
    }

    pub fn toggle_model(&mut self) {
        self.model = self.model.toggled();
    }

    pub fn feedback_cursor(&self) -> usize {
        self.feedback_cursor
    }

    pub fn move_feedback_cursor(&mut self, delta: isize) {
        let last = FEEDBACK_OPTIONS.len() as isize - 1;
        self.feedback_cursor = (self.feedback_cursor as isize + delta).clamp(0, last) as usize;
    }

    pub fn choose_feedback(&mut self) {
        self.feedback = Some(self.feedback_cursor);
    }

    pub fn feedback(&self) -> Option<&'static str> {
        self.feedback.and_then(|idx| FEEDBACK_OPTIONS.get(idx).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> SongDetail {
        SongDetail::open(DetailSubject {
            id: "catalog-1".to_string(),
            title: "Midnight in Tokyo".to_string(),
            artist: "Luna Wave".to_string(),
            velocity: "+127%".to_string(),
        })
    }

    #[test]
    fn loading_takes_ten_steps_then_settles() {
        let mut modal = detail();
        for step in 1..10u8 {
            modal.tick(LOADING_STEP);
            assert_eq!(modal.progress(), step * 10);
        }
        modal.tick(LOADING_STEP);
        assert_eq!(modal.progress(), 100);
        assert!(modal.is_loading());
        modal.tick(Duration::from_millis(299));
        assert!(modal.is_loading());
        modal.tick(Duration::from_millis(1));
        assert!(!modal.is_loading());
    }

    #[test]
    fn one_large_tick_covers_the_whole_sequence() {
        let mut modal = detail();
        modal.tick(LOADING_STEP * 10 + LOADING_SETTLE);
        assert!(!modal.is_loading());
    }

    #[test]
    fn highlights_evict_oldest_only_at_cap() {
        let mut modal = detail();
        assert_eq!(modal.highlighted(), &[0, 3, 6]);
        modal.toggle_highlight(3);
        assert_eq!(modal.highlighted(), &[0, 6]);
        modal.toggle_highlight(8);
        assert_eq!(modal.highlighted(), &[0, 6, 8]);
        modal.toggle_highlight(1);
        assert_eq!(modal.highlighted(), &[6, 8, 1]);
        modal.toggle_highlight(42);
        assert_eq!(modal.highlighted().len(), MAX_HIGHLIGHTS);
    }

    #[test]
    fn cursor_stays_in_grid() {
        let mut modal = detail();
        modal.move_cursor(-1, -1);
        assert_eq!(modal.cursor(), 0);
        modal.move_cursor(5, 5);
        assert_eq!(modal.cursor(), 8);
        assert_eq!(modal.current_chart(), DetailChart::Strategy);
        assert_eq!(modal.current_chart().kind(), ChartKind::Prescriptive);
    }

    #[test]
    fn model_and_feedback() {
        let mut modal = detail();
        assert_eq!(modal.model(), PredictionModel::Quadratic);
        modal.toggle_model();
        assert_eq!(modal.model().label(), "Linear");
        assert_eq!(modal.model().projection().predicted.points[0].value, 320000.0);

        assert_eq!(modal.feedback(), None);
        modal.move_feedback_cursor(2);
        modal.choose_feedback();
        assert_eq!(modal.feedback(), Some("Both factors synergized"));
    }
}

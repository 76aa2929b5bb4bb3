#![allow(missing_docs)]

//! Shared domain models.

use serde::{Deserialize, Serialize};

/// A track the user picked for the focus shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusTrack {
    /// Identifier used for deduplication.
    pub id: String,
    /// Track title.
    pub title: String,
    /// Performing artist.
    pub artist: String,
    /// Remote artwork URL, if one is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork: Option<String>,
}

impl FocusTrack {
    /// Build a focus entry without artwork.
    pub fn new(id: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            artwork: None,
        }
    }

    /// Returns a user-facing label combining title and artist.
    pub fn display_name(&self) -> String {
        format!("{} · {}", self.title, self.artist)
    }
}

/// Display-only record rendered inside a door section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleTrack {
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Headline metric, already formatted for display.
    pub metric: String,
    /// One-line recommendation.
    pub insight: String,
    /// Short uppercase badge (opportunities only).
    pub tag: Option<String>,
    pub artwork: Option<String>,
    /// Door-specific extra line: regions for bets, next action for risks.
    pub detail: Option<String>,
}

impl SampleTrack {
    /// Convert the record into a focus shelf entry.
    pub fn to_focus(&self) -> FocusTrack {
        FocusTrack {
            id: self.id.clone(),
            title: self.title.clone(),
            artist: self.artist.clone(),
            artwork: self.artwork.clone(),
        }
    }
}

/// Row of the catalog top-tracks table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogTrack {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub streams: String,
    pub velocity: String,
    /// Momentum score in `0..=100`.
    pub momentum: u8,
}

impl CatalogTrack {
    pub fn to_focus(&self) -> FocusTrack {
        FocusTrack::new(self.id.clone(), self.title.clone(), self.artist.clone())
    }
}

/// Summary tile shown above the catalog table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMetric {
    pub label: String,
    pub value: String,
    pub change: String,
}

/// A single labelled value used by every chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Named series, e.g. "Spotify" popularity by month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<SeriesPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Largest value in the series, or `0.0` when empty.
    pub fn max_value(&self) -> f64 {
        self.points
            .iter()
            .map(|point| point.value)
            .fold(0.0, f64::max)
    }

    /// Values as `(x, y)` pairs for line charts.
    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .enumerate()
            .map(|(idx, point)| (idx as f64, point.value))
            .collect()
    }
}

/// Direction of a receipt's trend arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

/// Accent palette slot shared by doors and receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accent {
    Violet,
    Amber,
    Teal,
    Gray,
}

/// Evidence card attached to an assistant answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub title: String,
    pub metric: String,
    pub subtitle: String,
    pub trend: Trend,
    pub accent: Accent,
    #[serde(default)]
    pub sparkline: Option<Vec<u64>>,
}

/// Paid campaign with its measured outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: u32,
    pub platform: String,
    pub target_region: String,
    pub target_age: String,
    pub actual_spend: u32,
    pub streams: u32,
    pub new_listeners: u32,
    pub roi: f64,
}

impl Campaign {
    /// Spend divided by streams; `None` when no streams were recorded.
    pub fn cost_per_stream(&self) -> Option<f64> {
        ratio(self.actual_spend, self.streams)
    }

    /// Spend divided by new listeners; `None` when nobody new arrived.
    pub fn cost_per_listener(&self) -> Option<f64> {
        ratio(self.actual_spend, self.new_listeners)
    }

    /// Share of the budget that was actually spent, in percent.
    pub fn budget_utilisation(&self) -> Option<f64> {
        ratio(self.actual_spend, self.budget).map(|value| value * 100.0)
    }
}

fn ratio(numerator: u32, denominator: u32) -> Option<f64> {
    if denominator == 0 {
        return None;
    }
    Some(f64::from(numerator) / f64::from(denominator))
}

/// Suggested next campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignRecommendation {
    pub suggested_budget: u32,
    pub suggested_platform: String,
    pub suggested_regions: Vec<String>,
    pub suggested_duration: String,
    pub projected_streams: u32,
    pub projected_roi: f64,
    pub reasoning: Vec<String>,
}

/// Host component of an artwork URL, used as the fallback caption.
///
/// Returns `None` for anything that does not look like an `http(s)` URL.
pub fn artwork_host(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let host = rest.split(['/', '?', '#']).next()?;
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(spend: u32, streams: u32, listeners: u32) -> Campaign {
        Campaign {
            id: "c".to_string(),
            name: "Test".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-31".to_string(),
            budget: 2000,
            platform: "Spotify Ads".to_string(),
            target_region: "Berlin".to_string(),
            target_age: "18-24".to_string(),
            actual_spend: spend,
            streams,
            new_listeners: listeners,
            roi: 1.0,
        }
    }

    #[test]
    fn campaign_ratios_guard_zero() {
        let empty = campaign(500, 0, 0);
        assert_eq!(empty.cost_per_stream(), None);
        assert_eq!(empty.cost_per_listener(), None);

        let real = campaign(1847, 45000, 8200);
        assert_eq!(format!("{:.3}", real.cost_per_stream().unwrap()), "0.041");
        assert_eq!(format!("{:.2}", real.cost_per_listener().unwrap()), "0.23");
    }

    #[test]
    fn artwork_host_extracts_domain() {
        assert_eq!(
            artwork_host("https://images.example.com/a/b.jpg?w=200"),
            Some("images.example.com")
        );
        assert_eq!(artwork_host("not a url"), None);
        assert_eq!(artwork_host("https:///missing"), None);
    }

    #[test]
    fn series_max_and_coordinates() {
        let series = Series::new(
            "streams",
            vec![SeriesPoint::new("Jan", 3.0), SeriesPoint::new("Feb", 7.5)],
        );
        assert_eq!(series.max_value(), 7.5);
        assert_eq!(series.coordinates(), vec![(0.0, 3.0), (1.0, 7.5)]);
    }
}

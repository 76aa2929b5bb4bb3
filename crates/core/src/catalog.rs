//! Built-in sample data.
//!
//! Everything the dashboard displays lives here as immutable statics. Nothing
//! is fetched or written back; the tables are initialised on first access.

#![allow(missing_docs)]

use once_cell::sync::Lazy;

use crate::{
    doors::Door,
    models::{
        Accent, Campaign, CampaignRecommendation, CatalogMetric, CatalogTrack, Receipt,
        SampleTrack, Series, SeriesPoint, Trend,
    },
};

/// Prompts cycled through the assistant input.
pub const PLACEHOLDER_PROMPTS: [&str; 15] = [
    "Which track should I push this week?",
    "What's my catalog's strongest signal?",
    "Where is momentum building?",
    "Who should I call for a collab?",
    "What's quietly winning right now?",
    "Show me my hidden gems",
    "What needs my attention today?",
    "Which tracks are cooling off?",
    "What should I double down on?",
    "Where's the growth happening?",
    "What's my best bet for Q1?",
    "Show me emerging patterns",
    "Which songs have the best velocity?",
    "What's working that I'm missing?",
    "Where should I allocate budget?",
];

/// Portfolio summary line shown above the orb.
pub const PORTFOLIO_STATUS: &str = "Portfolio momentum: saves up 24% · calm";

/// Static copy describing one door section.
#[derive(Debug, Clone, Copy)]
pub struct DoorCopy {
    pub title: &'static str,
    pub pill: &'static str,
    pub blurb: &'static str,
    pub section: &'static str,
    pub accent: Accent,
}

/// Header copy for the given door.
pub fn door_copy(door: Door) -> DoorCopy {
    match door {
        Door::Bets => DoorCopy {
            title: "Focus Bets",
            pill: "Make these your bets",
            blurb: "These tracks have momentum. Put your energy here first.",
            section: "SEC.01 /// PRIORITY",
            accent: Accent::Violet,
        },
        Door::Risks => DoorCopy {
            title: "Active Risks",
            pill: "Don't let these stall",
            blurb: "Act now before they go cold. Small moves can turn these around.",
            section: "SEC.02 /// WARNING",
            accent: Accent::Amber,
        },
        Door::Opportunities => DoorCopy {
            title: "Quiet Wins",
            pill: "Sleepers and collabs",
            blurb: "Sleepers, collabs, and forgotten tracks worth revisiting.",
            section: "SEC.03 /// DISCOVERY",
            accent: Accent::Teal,
        },
        Door::FocusShelf => DoorCopy {
            title: "Focus Shelf",
            pill: "Your focus shelf",
            blurb: "Up to 10 tracks to focus on. Build your playlist, export when ready.",
            section: "SEC.04 /// QUEUE",
            accent: Accent::Gray,
        },
    }
}

fn sample(
    id: &str,
    title: &str,
    artist: &str,
    metric: &str,
    insight: &str,
    tag: Option<&str>,
    detail: Option<&str>,
) -> SampleTrack {
    SampleTrack {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        metric: metric.to_string(),
        insight: insight.to_string(),
        tag: tag.map(str::to_string),
        artwork: None,
        detail: detail.map(str::to_string),
    }
}

static BETS: Lazy<Vec<SampleTrack>> = Lazy::new(|| {
    vec![
        sample(
            "bet-1",
            "Midnight in Tokyo",
            "Nova Kaine",
            "+127% streams",
            "Push this now, velocity spiking",
            None,
            Some("Berlin, Mexico City"),
        ),
        sample(
            "bet-2",
            "Concrete Dreams",
            "TRE45ON",
            "3.2K new listeners",
            "Heating up quietly, double down",
            None,
            Some("Lagos, Toronto"),
        ),
        sample(
            "bet-3",
            "Ghost Protocol",
            "Cipher & Maze",
            "89% save rate",
            "Strong signal, lean in hard",
            None,
            Some("London, NYC"),
        ),
    ]
});

static RISKS: Lazy<Vec<SampleTrack>> = Lazy::new(|| {
    vec![
        sample(
            "risk-1",
            "Neon Fade",
            "Juno Arts",
            "-34% engagement",
            "Fans cooling off, drop BTS clip",
            None,
            Some("Content refresh needed"),
        ),
        sample(
            "risk-2",
            "Empty Streets",
            "Lunar & Sol",
            "12 playlist drops",
            "Losing curator love, refresh story",
            None,
            Some("Playlist pitching urgent"),
        ),
    ]
});

static OPPORTUNITIES: Lazy<Vec<SampleTrack>> = Lazy::new(|| {
    vec![
        sample(
            "opp-1",
            "Late Night Signal",
            "Phantom Theory",
            "2.1K saves, low streams",
            "Ready for a push",
            Some("SLEEPER"),
            None,
        ),
        sample(
            "opp-2",
            "Bassline Theory",
            "Kova ft. Mercury",
            "41% cross-fan overlap",
            "Make content together",
            Some("COLLAB EDGE"),
            None,
        ),
        sample(
            "opp-3",
            "Old City Lights",
            "Ether Waves",
            "18mo old, 2.3K monthly",
            "Sample or remaster",
            Some("CATALOG FLOOR"),
            None,
        ),
    ]
});

/// Sample cards for a content door. The focus shelf has no fixed records.
pub fn door_tracks(door: Door) -> &'static [SampleTrack] {
    match door {
        Door::Bets => BETS.as_slice(),
        Door::Risks => RISKS.as_slice(),
        Door::Opportunities => OPPORTUNITIES.as_slice(),
        Door::FocusShelf => &[],
    }
}

static TOP_TRACKS: Lazy<Vec<CatalogTrack>> = Lazy::new(|| {
    [
        ("1", "Midnight in Tokyo", "Luna Wave", "2.4M", "+127%", 92),
        ("2", "Desert Roads", "Echo Plains", "1.8M", "+94%", 85),
        ("3", "Ocean Drive", "Coastal Sound", "3.1M", "+73%", 78),
        ("4", "City Lights", "Urban Pulse", "1.2M", "+156%", 95),
        ("5", "Mountain High", "Peak Collective", "890K", "+68%", 71),
    ]
    .into_iter()
    .map(
        |(id, title, artist, streams, velocity, momentum)| CatalogTrack {
            id: format!("catalog-{id}"),
            title: title.to_string(),
            artist: artist.to_string(),
            streams: streams.to_string(),
            velocity: velocity.to_string(),
            momentum,
        },
    )
    .collect()
});

pub fn top_tracks() -> &'static [CatalogTrack] {
    TOP_TRACKS.as_slice()
}

static METRICS: Lazy<Vec<CatalogMetric>> = Lazy::new(|| {
    [
        ("Total Tracks", "247", "+12"),
        ("Total Streams", "18.4M", "+94%"),
        ("Avg Momentum", "82.4", "+8.3"),
        ("Active Signals", "34", "+6"),
    ]
    .into_iter()
    .map(|(label, value, change)| CatalogMetric {
        label: label.to_string(),
        value: value.to_string(),
        change: change.to_string(),
    })
    .collect()
});

pub fn catalog_metrics() -> &'static [CatalogMetric] {
    METRICS.as_slice()
}

fn series(name: &str, points: &[(&str, f64)]) -> Series {
    Series::new(
        name,
        points
            .iter()
            .map(|(label, value)| SeriesPoint::new(*label, *value))
            .collect(),
    )
}

const MONTHS: [&str; 7] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"];

fn monthly(name: &str, values: [f64; 7]) -> Series {
    let points: Vec<(&str, f64)> = MONTHS.iter().copied().zip(values).collect();
    series(name, &points)
}

/// Catalog-wide stream growth, in thousands.
pub static GROWTH_TRENDS: Lazy<Series> = Lazy::new(|| {
    monthly(
        "Streams (K)",
        [1220.0, 1340.0, 1510.0, 1690.0, 1980.0, 2310.0, 2760.0],
    )
});

/// Number of tracks per momentum band.
pub static MOMENTUM_CATEGORIES: Lazy<Series> = Lazy::new(|| {
    series(
        "Tracks",
        &[
            ("Rising", 64.0),
            ("Steady", 98.0),
            ("Cooling", 51.0),
            ("Dormant", 34.0),
        ],
    )
});

pub static STREAM_HISTORY: Lazy<Series> = Lazy::new(|| {
    monthly(
        "Streams",
        [
            45000.0, 52000.0, 61000.0, 73000.0, 89000.0, 108000.0, 245000.0,
        ],
    )
});

pub static PLATFORM_SPLIT: Lazy<Series> =
    Lazy::new(|| series("Share %", &[("Spotify", 69.0), ("Tidal", 31.0)]));

pub static SAVE_RATE: Lazy<Series> = Lazy::new(|| {
    monthly("Save rate %", [12.0, 14.0, 18.0, 23.0, 31.0, 42.0, 89.0])
});

/// Three-month projection with its confidence percentages.
#[derive(Debug, Clone)]
pub struct Projection {
    pub predicted: Series,
    pub confidence: Series,
}

pub static LINEAR_PROJECTION: Lazy<Projection> = Lazy::new(|| Projection {
    predicted: series(
        "Predicted",
        &[("Aug", 320000.0), ("Sep", 395000.0), ("Oct", 470000.0)],
    ),
    confidence: series("Confidence %", &[("Aug", 85.0), ("Sep", 78.0), ("Oct", 72.0)]),
});

pub static QUADRATIC_PROJECTION: Lazy<Projection> = Lazy::new(|| Projection {
    predicted: series(
        "Predicted",
        &[("Aug", 380000.0), ("Sep", 550000.0), ("Oct", 780000.0)],
    ),
    confidence: series("Confidence %", &[("Aug", 82.0), ("Sep", 75.0), ("Oct", 68.0)]),
});

/// Growth percentage by ad spend.
pub static ROI_PROJECTION: Lazy<Series> = Lazy::new(|| {
    series(
        "Growth %",
        &[
            ("$0", 0.0),
            ("$500", 15.0),
            ("$1000", 28.0),
            ("$2000", 45.0),
            ("$5000", 72.0),
        ],
    )
});

pub const MOMENTUM_SCORE: u8 = 92;
pub const OPTIMAL_SPEND: &str = "$1,000 over 30 days (ROI 3.1x)";
pub const STRATEGY_RECOMMENDATION: &str =
    "Pitch to 3 mid-tier playlists and cut a 15s vertical clip for TikTok.";

/// Event the song detail modal asks the user to explain.
pub const FEEDBACK_EVENT: &str =
    "Featured on \"Urban Vibes\" playlist (2.3M followers) + TikTok viral moment";
pub const FEEDBACK_MONTH: &str = "July";
pub const FEEDBACK_OPTIONS: [&str; 4] = [
    "Playlist feature drove growth",
    "TikTok trend was the catalyst",
    "Both factors synergized",
    "Other",
];

pub static ENGAGEMENT_HISTORY: Lazy<Vec<Series>> = Lazy::new(|| {
    vec![
        monthly("Overall Score", [67.0, 71.0, 76.0, 81.0, 87.0, 91.0, 94.2]),
        monthly("Spotify", [45.0, 48.0, 52.0, 58.0, 65.0, 71.0, 73.0]),
        monthly("Tidal", [22.0, 23.0, 24.0, 23.0, 22.0, 20.0, 21.2]),
    ]
});

pub static PLATFORM_POPULARITY: Lazy<Vec<Series>> = Lazy::new(|| {
    vec![
        monthly("Spotify", [42.0, 48.0, 54.0, 61.0, 68.0, 75.0, 82.0]),
        monthly("Tidal", [38.0, 41.0, 45.0, 48.0, 52.0, 56.0, 61.0]),
    ]
});

/// Score breakdown tiles of the engagement modal.
pub const ENGAGEMENT_BREAKDOWN: [(&str, &str); 3] = [
    ("Save Rate", "89%"),
    ("Completion Rate", "76%"),
    ("Share Rate", "23%"),
];

pub const ENGAGEMENT_SCORE: &str = "94.2";

static CAMPAIGNS: Lazy<Vec<Campaign>> = Lazy::new(|| {
    vec![
        Campaign {
            id: "1".to_string(),
            name: "Summer Push - Berlin".to_string(),
            start_date: "2024-06-01".to_string(),
            end_date: "2024-06-30".to_string(),
            budget: 2000,
            platform: "Spotify Ads".to_string(),
            target_region: "Berlin, Germany".to_string(),
            target_age: "18-24".to_string(),
            actual_spend: 1847,
            streams: 45000,
            new_listeners: 8200,
            roi: 3.2,
        },
        Campaign {
            id: "2".to_string(),
            name: "Mexico City Promo".to_string(),
            start_date: "2024-05-15".to_string(),
            end_date: "2024-06-15".to_string(),
            budget: 1500,
            platform: "TikTok Ads".to_string(),
            target_region: "Mexico City, Mexico".to_string(),
            target_age: "18-28".to_string(),
            actual_spend: 1420,
            streams: 38000,
            new_listeners: 6800,
            roi: 2.8,
        },
        Campaign {
            id: "3".to_string(),
            name: "NYC Club Circuit".to_string(),
            start_date: "2024-04-01".to_string(),
            end_date: "2024-04-30".to_string(),
            budget: 3000,
            platform: "Instagram Ads".to_string(),
            target_region: "New York, USA".to_string(),
            target_age: "21-30".to_string(),
            actual_spend: 2890,
            streams: 52000,
            new_listeners: 9500,
            roi: 2.4,
        },
    ]
});

pub fn campaigns() -> &'static [Campaign] {
    CAMPAIGNS.as_slice()
}

/// Monthly streams and ad spend across all campaigns.
pub static CAMPAIGN_PERFORMANCE: Lazy<(Series, Series)> = Lazy::new(|| {
    let months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
    let streams: Vec<(&str, f64)> = months
        .iter()
        .copied()
        .zip([12000.0, 15000.0, 18000.0, 52000.0, 68000.0, 89000.0])
        .collect();
    let spend: Vec<(&str, f64)> = months
        .iter()
        .copied()
        .zip([0.0, 0.0, 0.0, 2890.0, 2920.0, 3267.0])
        .collect();
    (series("Streams", &streams), series("Ad Spend ($)", &spend))
});

pub static RECOMMENDATION: Lazy<CampaignRecommendation> = Lazy::new(|| CampaignRecommendation {
    suggested_budget: 2500,
    suggested_platform: "Spotify + TikTok Bundle".to_string(),
    suggested_regions: vec![
        "Berlin".to_string(),
        "Mexico City".to_string(),
        "Toronto".to_string(),
    ],
    suggested_duration: "45 days".to_string(),
    projected_streams: 75000,
    projected_roi: 3.5,
    reasoning: vec![
        "Berlin and Mexico City showed highest engagement rates (94% and 91%)".to_string(),
        "Combined platform approach yielded 2.3x better results in previous campaigns"
            .to_string(),
        "Toronto emerging as new hot market based on organic growth patterns".to_string(),
        "45-day campaigns have shown 18% better completion rates than 30-day".to_string(),
    ],
});

/// Canned exchange shown in the active chat panel.
pub const CHAT_QUESTION: &str = "Which record should I push this week?";
pub const CHAT_ANSWER: &str = "Based on your catalog momentum, Midnight in Tokyo has the \
strongest signal right now. Stream velocity is up 127% in the last 7 days, with concentrated \
engagement across multiple platforms.";
pub const CHAT_SUGGESTIONS: [&str; 3] = [
    "Show me platform breakdown",
    "What's the ad spend recommendation?",
    "Compare to last campaign",
];

pub static CHAT_RECEIPTS: Lazy<Vec<Receipt>> = Lazy::new(|| {
    vec![
        Receipt {
            title: "Stream Velocity".to_string(),
            metric: "+127%".to_string(),
            subtitle: "Last 7 days".to_string(),
            trend: Trend::Up,
            accent: Accent::Violet,
            sparkline: Some(vec![45, 52, 61, 73, 89, 102, 127]),
        },
        Receipt {
            title: "Engagement Score".to_string(),
            metric: ENGAGEMENT_SCORE.to_string(),
            subtitle: "Cross-platform".to_string(),
            trend: Trend::Up,
            accent: Accent::Teal,
            sparkline: None,
        },
    ]
});

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn sample_ids_are_unique_across_doors() {
        let mut seen = HashSet::new();
        for door in Door::ALL {
            for track in door_tracks(door) {
                assert!(seen.insert(track.id.clone()), "duplicate id {}", track.id);
            }
        }
        for track in top_tracks() {
            assert!(seen.insert(track.id.clone()), "duplicate id {}", track.id);
        }
        assert!(door_tracks(Door::FocusShelf).is_empty());
    }

    #[test]
    fn momentum_scores_stay_in_range() {
        assert!(top_tracks().iter().all(|track| track.momentum <= 100));
    }
}

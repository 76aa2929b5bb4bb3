//! Top-level view selection.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Hero, assistant and the four doors.
    #[default]
    Home,
    /// Descriptive catalog analytics.
    Catalog,
    /// Runtime configuration overview.
    Settings,
}

/// Unknown view name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view '{0}' (expected home, catalog or settings)")]
pub struct UnknownView(pub String);

impl View {
    /// Header order.
    pub const RING: [View; 3] = [View::Home, View::Catalog, View::Settings];

    /// The view after this one, wrapping around.
    pub fn next(self) -> View {
        let idx = Self::RING.iter().position(|view| *view == self).unwrap_or(0);
        Self::RING[(idx + 1) % Self::RING.len()]
    }

    /// The view before this one, wrapping around.
    pub fn previous(self) -> View {
        let idx = Self::RING.iter().position(|view| *view == self).unwrap_or(0);
        Self::RING[(idx + Self::RING.len() - 1) % Self::RING.len()]
    }

    /// Header label.
    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Catalog => "Catalog",
            View::Settings => "Settings",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(View::Home),
            "catalog" => Ok(View::Catalog),
            "settings" => Ok(View::Settings),
            _ => Err(UnknownView(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_wraps_both_ways() {
        assert_eq!(View::Home.next(), View::Catalog);
        assert_eq!(View::Settings.next(), View::Home);
        assert_eq!(View::Home.previous(), View::Settings);
        assert_eq!(View::default(), View::Home);
    }

    #[test]
    fn parses_names() {
        assert_eq!(" Catalog ".parse::<View>(), Ok(View::Catalog));
        assert!("campaigns".parse::<View>().is_err());
    }
}

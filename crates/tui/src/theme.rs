use perday_core::{config::ThemeOverrides, models::Accent, Door};
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub primary_fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub success: Color,
    pub danger: Color,
    pub on_accent: Color,
    pub bets: Color,
    pub risks: Color,
    pub opportunities: Color,
    pub shelf: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_fg: Color::White,
            accent: Color::Rgb(0xa7, 0x8b, 0xfa),
            muted: Color::DarkGray,
            selection_bg: Color::Rgb(0x2e, 0x27, 0x4a),
            selection_fg: Color::White,
            success: Color::Green,
            danger: Color::Red,
            on_accent: Color::Black,
            bets: Color::Rgb(0xa7, 0x8b, 0xfa),
            risks: Color::Rgb(0xfb, 0xbf, 0x24),
            opportunities: Color::Rgb(0x2d, 0xd4, 0xbf),
            shelf: Color::Gray,
        }
    }
}

impl Theme {
    /// Apply hex overrides from the config. Returns the theme and a status
    /// note naming what was applied or rejected.
    pub fn from_overrides(overrides: &ThemeOverrides) -> (Self, String) {
        let mut theme = Theme::default();
        let mut applied: Vec<&str> = Vec::new();
        let mut rejected: Vec<&str> = Vec::new();

        let slots: [(&str, &Option<String>, &mut Color); 6] = [
            ("accent", &overrides.accent, &mut theme.accent),
            ("bets", &overrides.bets, &mut theme.bets),
            ("risks", &overrides.risks, &mut theme.risks),
            ("opportunities", &overrides.opportunities, &mut theme.opportunities),
            ("shelf", &overrides.shelf, &mut theme.shelf),
            ("muted", &overrides.muted, &mut theme.muted),
        ];
        for (name, value, slot) in slots {
            let Some(raw) = value else { continue };
            match parse_hex_color(raw) {
                Some(color) => {
                    *slot = color;
                    applied.push(name);
                }
                None => rejected.push(name),
            }
        }

        theme.on_accent = text_on(theme.accent);

        let summary = match (applied.is_empty(), rejected.is_empty()) {
            (true, true) => "Default palette".to_string(),
            (false, true) => format!("Theme overrides: {}", applied.join(", ")),
            (true, false) => format!("Ignored invalid colours: {}", rejected.join(", ")),
            (false, false) => format!(
                "Theme overrides: {} (ignored invalid: {})",
                applied.join(", "),
                rejected.join(", ")
            ),
        };
        (theme, summary)
    }

    pub fn door(&self, door: Door) -> Color {
        match door {
            Door::Bets => self.bets,
            Door::Risks => self.risks,
            Door::Opportunities => self.opportunities,
            Door::FocusShelf => self.shelf,
        }
    }

    pub fn accent_color(&self, accent: Accent) -> Color {
        match accent {
            Accent::Violet => self.bets,
            Accent::Amber => self.risks,
            Accent::Teal => self.opportunities,
            Accent::Gray => self.shelf,
        }
    }
}

pub fn parse_hex_color(input: &str) -> Option<Color> {
    let trimmed = input.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Text colour that stays legible on `background`: black on light RGB
/// colours, white on dark ones. Named terminal colours have no known RGB
/// value, so they keep the palette's `on_accent` default.
fn text_on(background: Color) -> Color {
    let Color::Rgb(r, g, b) = background else {
        return Theme::default().on_accent;
    };
    // Rec. 601 luma, 0..=255.
    let luma = (299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b)) / 1000;
    if luma > 186 {
        Color::Black
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(parse_hex_color("#ff8000"), Some(Color::Rgb(255, 128, 0)));
        assert_eq!(parse_hex_color("0x0a0b0c"), Some(Color::Rgb(10, 11, 12)));
        assert_eq!(parse_hex_color("fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
    }

    #[test]
    fn multibyte_input_is_rejected_without_slicing() {
        // Six bytes, but slicing at byte 2 would split a char.
        assert_eq!(parse_hex_color("ééé"), None);
        assert_eq!(parse_hex_color("#a€b"), None);
        assert_eq!(parse_hex_color(" #ABC "), Some(Color::Rgb(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn overrides_apply_and_report() {
        let overrides = ThemeOverrides {
            risks: Some("#ff0000".to_string()),
            muted: Some("nope".to_string()),
            ..ThemeOverrides::default()
        };
        let (theme, summary) = Theme::from_overrides(&overrides);
        assert_eq!(theme.door(Door::Risks), Color::Rgb(255, 0, 0));
        assert_eq!(theme.muted, Theme::default().muted);
        assert!(summary.contains("risks"));
        assert!(summary.contains("muted"));
    }

    #[test]
    fn light_accent_gets_dark_text() {
        let overrides = ThemeOverrides {
            accent: Some("#ffffff".to_string()),
            ..ThemeOverrides::default()
        };
        let (theme, _) = Theme::from_overrides(&overrides);
        assert_eq!(theme.on_accent, Color::Black);
    }

    #[test]
    fn text_on_dark_and_named_backgrounds() {
        assert_eq!(text_on(Color::Rgb(0x2e, 0x27, 0x4a)), Color::White);
        assert_eq!(text_on(Color::Rgb(0xfb, 0xbf, 0x24)), Color::Black);
        assert_eq!(text_on(Color::Magenta), Theme::default().on_accent);
    }
}

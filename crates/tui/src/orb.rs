//! Character-cell rendering of the assistant orb.

const SHADES: [char; 5] = ['░', '▒', '▓', '█', '█'];
const GLOW_CHAR: char = '·';

/// Render the orb into `height` rows of `width` cells.
///
/// `phase` in `[0, 1)` drives the breathing pulse. Terminal cells are roughly
/// twice as tall as they are wide, so the horizontal axis is squashed.
pub fn render(width: usize, height: usize, phase: f64, listening: bool) -> Vec<String> {
    if width == 0 || height == 0 {
        return vec![String::new(); height];
    }

    let pulse = (phase * std::f64::consts::TAU).sin() * 0.5 + 0.5;
    let amplitude = if listening { 0.12 } else { 0.06 };
    let radius = (height as f64 / 2.0).min(width as f64 / 4.0) * (0.82 + amplitude * pulse);
    let glow = radius * 1.25;
    let cx = (width as f64 - 1.0) / 2.0;
    let cy = (height as f64 - 1.0) / 2.0;

    let mut canvas = vec![vec![' '; width]; height];
    for (y, row) in canvas.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            let dx = (x as f64 - cx) / 2.0;
            let dy = y as f64 - cy;
            let distance = (dx * dx + dy * dy).sqrt();
            *cell = shade(distance, radius, glow);
        }
    }

    canvas
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect()
}

fn shade(distance: f64, radius: f64, glow: f64) -> char {
    if radius <= 0.0 {
        return ' ';
    }
    if distance <= radius {
        let depth = 1.0 - distance / radius;
        let idx = ((depth * SHADES.len() as f64) as usize).min(SHADES.len() - 1);
        SHADES[idx]
    } else if distance <= glow {
        GLOW_CHAR
    } else {
        ' '
    }
}

/// Status line under the orb.
pub fn status_label(listening: bool) -> &'static str {
    if listening {
        "STATUS: LISTENING ///"
    } else {
        "STATUS: READY ///"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_matches_requested_size() {
        let rows = render(24, 9, 0.25, false);
        assert_eq!(rows.len(), 9);
        assert!(rows.iter().all(|row| row.chars().count() == 24));
    }

    #[test]
    fn centre_is_solid_and_corners_empty() {
        let rows = render(21, 9, 0.0, true);
        let centre: Vec<char> = rows[4].chars().collect();
        assert_eq!(centre[10], '█');
        assert_eq!(rows[0].chars().next(), Some(' '));
    }

    #[test]
    fn empty_area_renders_nothing() {
        assert!(render(0, 0, 0.0, false).is_empty());
        assert_eq!(render(0, 2, 0.0, false), vec![String::new(), String::new()]);
    }
}

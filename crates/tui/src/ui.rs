use std::path::Path;

use perday_core::{
    campaign::{self, CampaignBoard},
    catalog::{self, DoorCopy},
    detail::{ChartKind, DetailChart, SongDetail, MAX_HIGHLIGHTS},
    doors::{DOOR_SPAN, MAX_OFFSET},
    focus::{FOCUS_CAPACITY, UP_NEXT_VISIBLE},
    models::{artwork_host, Receipt, SampleTrack, Series, Trend},
    state::{CardRef, Overlay},
    AppConfig, Dashboard, Door, View,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, BarChart, Block, BorderType, Borders, Cell, Chart, Clear, Dataset, Gauge, GraphType,
        List, ListItem, ListState, Paragraph, Row, Sparkline, Table, TableState, Tabs, Wrap,
    },
    Frame,
};

use crate::{orb, theme::Theme};

const ARTWORK_GLYPH: &str = "♪";

/// Everything a frame needs, borrowed from the app for the duration of a draw.
pub struct Ui<'a> {
    pub dashboard: &'a Dashboard,
    pub theme: &'a Theme,
    pub config: &'a AppConfig,
    pub config_path: &'a Path,
    pub status: &'a str,
    pub theme_status: &'a str,
    pub orb_phase: f64,
    pub show_help: bool,
}

pub fn draw(frame: &mut Frame, ui: &Ui) {
    let area = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(area);

    render_header(frame, chunks[0], ui);
    match ui.dashboard.view() {
        View::Home => render_home(frame, chunks[1], ui),
        View::Catalog => render_catalog(frame, chunks[1], ui),
        View::Settings => render_settings(frame, chunks[1], ui),
    }
    render_status(frame, chunks[2], ui);

    match ui.dashboard.overlay() {
        Some(Overlay::SongDetail(detail)) => render_song_detail(frame, area, detail, ui),
        Some(Overlay::Engagement) => render_engagement(frame, area, ui),
        Some(Overlay::Campaigns(board)) => render_campaigns(frame, area, board, ui),
        None => {}
    }
    if ui.show_help {
        render_help(frame, area, ui);
    }
}

fn render_header(frame: &mut Frame, area: Rect, ui: &Ui) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(22)])
        .split(area);

    let mut titles: Vec<Line> = View::RING
        .iter()
        .map(|view| Line::from(view.label()))
        .collect();
    titles.push(Line::from(Span::styled(
        "Intelligence (i)",
        Style::default().fg(ui.theme.accent),
    )));
    let selected = View::RING
        .iter()
        .position(|view| *view == ui.dashboard.view())
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    " PERDAY ",
                    Style::default()
                        .fg(ui.theme.accent)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .select(selected)
        .style(Style::default().fg(ui.theme.muted))
        .highlight_style(
            Style::default()
                .fg(ui.theme.primary_fg)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" │ ");
    frame.render_widget(tabs, chunks[0]);

    let focus = ui.dashboard.focus();
    let counter_style = if focus.is_full() {
        Style::default().fg(ui.theme.risks)
    } else {
        Style::default().fg(ui.theme.primary_fg)
    };
    let counter = Paragraph::new(Line::from(vec![
        Span::styled("QUEUE: ", Style::default().fg(ui.theme.muted)),
        Span::styled(focus.counter_label(), counter_style.add_modifier(Modifier::BOLD)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(counter, chunks[1]);
}

fn render_status(frame: &mut Frame, area: Rect, ui: &Ui) {
    let hints = if ui.dashboard.chat().is_editing() {
        "Enter send · ←/→ move · Ctrl-F expand · Esc leave input"
    } else if let Some(overlay) = ui.dashboard.overlay() {
        match overlay {
            Overlay::SongDetail(_) => {
                "←↑↓→ move · Space highlight · m model · J/K answer · f choose · s skip · Esc close"
            }
            Overlay::Engagement => "Esc close",
            Overlay::Campaigns(_) => "↑/↓ select · Enter expand · Esc close",
        }
    } else {
        match ui.dashboard.view() {
            View::Home => {
                "1-4 door · ←/→ scroll · [ ] prev/next · ↑/↓ card · a add · x remove · r report · i ask · ? help"
            }
            View::Catalog => "↑/↓ select · a add · Enter detail · e engagement · c campaigns · ? help",
            View::Settings => "w write default config · Tab switch view · q quit",
        }
    };
    let paragraph = Paragraph::new(vec![
        Line::from(ui.status.to_string()),
        Line::from(Span::styled(hints, Style::default().fg(ui.theme.muted))),
    ])
    .block(Block::default().borders(Borders::ALL).title("Status"))
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_home(frame: &mut Frame, area: Rect, ui: &Ui) {
    let chat = ui.dashboard.chat();
    if chat.is_active() && chat.is_expanded() {
        render_chat_panel(frame, area, ui);
        return;
    }

    let hero_height = if chat.is_active() {
        (area.height * 45 / 100).max(14)
    } else {
        11
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(hero_height),
            Constraint::Length(4),
            Constraint::Min(6),
        ])
        .split(area);

    if chat.is_active() {
        render_chat_panel(frame, chunks[0], ui);
    } else {
        render_orb_hero(frame, chunks[0], ui);
    }
    render_door_nav(frame, chunks[1], ui);
    render_door_strip(frame, chunks[2], ui);
}

fn placeholder_span<'a>(ui: &'a Ui) -> Span<'a> {
    let rotator = ui.dashboard.rotator();
    let mut style = Style::default().fg(ui.theme.muted);
    if rotator.is_animating() {
        style = style.add_modifier(Modifier::DIM);
    } else {
        style = style.add_modifier(Modifier::ITALIC);
    }
    Span::styled(rotator.current(), style)
}

fn render_orb_hero(frame: &mut Frame, area: Rect, ui: &Ui) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ui.theme.muted));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(20)])
        .split(inner);

    let orb_lines: Vec<Line> = orb::render(
        chunks[0].width as usize,
        chunks[0].height as usize,
        ui.orb_phase,
        false,
    )
    .into_iter()
    .map(|row| Line::from(Span::styled(row, Style::default().fg(ui.theme.accent))))
    .collect();
    frame.render_widget(Paragraph::new(orb_lines), chunks[0]);

    let lines = vec![
        Line::from(Span::styled(
            catalog::PORTFOLIO_STATUS,
            Style::default().fg(ui.theme.primary_fg),
        )),
        Line::from(Span::styled(
            orb::status_label(false),
            Style::default()
                .fg(ui.theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(ui.theme.accent)),
            placeholder_span(ui),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press i or / to ask the assistant",
            Style::default().fg(ui.theme.muted),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        chunks[1],
    );
}

fn render_chat_panel(frame: &mut Frame, area: Rect, ui: &Ui) {
    let chat = ui.dashboard.chat();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ui.theme.accent))
        .title(Span::styled(
            format!(" Intelligence · {} ", orb::status_label(chat.is_editing())),
            Style::default().fg(ui.theme.accent),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(inner);

    let you = Style::default()
        .fg(ui.theme.primary_fg)
        .add_modifier(Modifier::BOLD);
    let bot = Style::default()
        .fg(ui.theme.accent)
        .add_modifier(Modifier::BOLD);
    let mut conversation = vec![
        Line::from(vec![
            Span::styled("You  ", you),
            Span::raw(catalog::CHAT_QUESTION),
        ]),
        Line::from(vec![
            Span::styled("AI   ", bot),
            Span::raw(catalog::CHAT_ANSWER),
        ]),
    ];
    if let Some(sent) = chat.last_sent() {
        conversation.push(Line::from(vec![
            Span::styled("You  ", you),
            Span::raw(sent.to_string()),
        ]));
    }
    frame.render_widget(
        Paragraph::new(conversation).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let receipts = catalog::CHAT_RECEIPTS.as_slice();
    if !receipts.is_empty() {
        let constraints: Vec<Constraint> = receipts
            .iter()
            .map(|_| Constraint::Ratio(1, receipts.len() as u32))
            .collect();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(chunks[1]);
        for (receipt, cell) in receipts.iter().zip(cells.iter()) {
            render_receipt(frame, *cell, receipt, ui);
        }
    }

    let mut suggestions = vec![Span::styled("Try: ", Style::default().fg(ui.theme.muted))];
    for (idx, suggestion) in catalog::CHAT_SUGGESTIONS.iter().enumerate() {
        if idx > 0 {
            suggestions.push(Span::styled(" · ", Style::default().fg(ui.theme.muted)));
        }
        suggestions.push(Span::raw(*suggestion));
    }
    frame.render_widget(Paragraph::new(Line::from(suggestions)), chunks[2]);

    let input = chat.input();
    let input_area = chunks[3];
    // Borders plus the "> " prompt.
    let field_width = usize::from(input_area.width.saturating_sub(4));
    let (visible, cursor_col) = input_window(input.as_str(), input.cursor(), field_width);
    let content = if input.as_str().is_empty() {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(ui.theme.accent)),
            placeholder_span(ui),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(ui.theme.accent)),
            Span::raw(visible),
        ])
    };
    let input_block = Block::default().borders(Borders::ALL).border_style(
        if chat.is_editing() {
            Style::default().fg(ui.theme.accent)
        } else {
            Style::default().fg(ui.theme.muted)
        },
    );
    frame.render_widget(Paragraph::new(content).block(input_block), input_area);
    if chat.is_editing() && field_width > 0 {
        frame.set_cursor(input_area.x + 3 + cursor_col as u16, input_area.y + 1);
    }
}

/// Slice of `text` that fits in `width` columns with the cursor in view, and
/// the cursor's column inside that slice. The input line is ASCII only.
fn input_window(text: &str, cursor: usize, width: usize) -> (&str, usize) {
    if width == 0 {
        return ("", 0);
    }
    let cursor = cursor.min(text.len());
    // The cursor may sit one past the last char and needs a column too.
    let start = (cursor + 1).saturating_sub(width);
    let end = (start + width).min(text.len());
    (text.get(start..end).unwrap_or_default(), cursor - start)
}

fn render_receipt(frame: &mut Frame, area: Rect, receipt: &Receipt, ui: &Ui) {
    let color = ui.theme.accent_color(receipt.accent);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(receipt.title.clone());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (arrow, arrow_color) = match receipt.trend {
        Trend::Up => ("▲", ui.theme.success),
        Trend::Down => ("▼", ui.theme.danger),
    };
    let text = vec![
        Line::from(vec![
            Span::styled(
                receipt.metric.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {arrow}"), Style::default().fg(arrow_color)),
        ]),
        Line::from(Span::styled(
            receipt.subtitle.clone(),
            Style::default().fg(ui.theme.muted),
        )),
    ];

    match &receipt.sparkline {
        Some(values) if inner.width > 20 => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(14), Constraint::Min(6)])
                .split(inner);
            frame.render_widget(Paragraph::new(text), chunks[0]);
            let sparkline = Sparkline::default()
                .data(values)
                .style(Style::default().fg(color));
            frame.render_widget(sparkline, chunks[1]);
        }
        _ => frame.render_widget(Paragraph::new(text), inner),
    }
}

fn render_door_nav(frame: &mut Frame, area: Rect, ui: &Ui) {
    let doors = ui.dashboard.doors();
    let block = Block::default().borders(Borders::ALL).title("Doors");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut pills = Vec::new();
    for door in Door::ALL {
        let color = ui.theme.door(door);
        let label = format!(" {} {} ", door.number(), door);
        let style = if door == doors.active() {
            Style::default()
                .fg(ui.theme.on_accent)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        pills.push(Span::styled(label, style));
        pills.push(Span::raw(" "));
    }

    let width = inner.width as usize;
    let filled = ((doors.progress() * width as f64).round() as usize).min(width);
    let track = Line::from(vec![
        Span::styled(
            "━".repeat(filled),
            Style::default().fg(ui.theme.door(doors.active())),
        ),
        Span::styled(
            "─".repeat(width - filled),
            Style::default().fg(ui.theme.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(vec![Line::from(pills), track]), inner);
}

/// Lay the four doors side by side, one door per viewport width, and show the
/// slice selected by the scroll offset.
fn render_door_strip(frame: &mut Frame, area: Rect, ui: &Ui) {
    let width = i64::from(area.width);
    if width == 0 {
        return;
    }
    let offset = i64::from(ui.dashboard.doors().offset().min(MAX_OFFSET));
    let shift = offset * width / i64::from(DOOR_SPAN);
    for door in Door::ALL {
        let start = door.index() as i64 * width - shift;
        let left = start.max(0);
        let right = (start + width).min(width);
        if right - left < 4 {
            continue;
        }
        let rect = Rect::new(
            area.x + left as u16,
            area.y,
            (right - left) as u16,
            area.height,
        );
        render_door(frame, rect, door, ui);
    }
}

fn render_door(frame: &mut Frame, area: Rect, door: Door, ui: &Ui) {
    let copy = catalog::door_copy(door);
    let color = ui.theme.door(door);
    let active = ui.dashboard.doors().active() == door;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if active {
            BorderType::Thick
        } else {
            BorderType::Plain
        })
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            format!(" {} ", copy.section),
            Style::default().fg(color),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(inner);
    render_door_heading(frame, chunks[0], &copy, color, ui);

    if door == Door::FocusShelf {
        render_focus_shelf(frame, chunks[1], active, ui);
    } else {
        render_cards(frame, chunks[1], door, active, ui);
    }
    if active {
        render_tooltip(frame, chunks[2], ui);
    }
}

fn render_door_heading(frame: &mut Frame, area: Rect, copy: &DoorCopy, color: Color, ui: &Ui) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                copy.title,
                Style::default()
                    .fg(ui.theme.primary_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!("[{}]", copy.pill), Style::default().fg(color)),
        ]),
        Line::from(Span::styled(copy.blurb, Style::default().fg(ui.theme.muted))),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn card_lines<'a>(track: &'a SampleTrack, color: Color, on_shelf: bool, ui: &Ui) -> Vec<Line<'a>> {
    let mut first = vec![
        Span::styled(format!("{ARTWORK_GLYPH} "), Style::default().fg(color)),
        Span::styled(
            track.title.as_str(),
            Style::default()
                .fg(ui.theme.primary_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" · {}", track.artist),
            Style::default().fg(ui.theme.muted),
        ),
        Span::raw("  "),
        Span::styled(
            track.metric.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ];
    if on_shelf {
        first.push(Span::styled("  ✓", Style::default().fg(ui.theme.success)));
    }
    let mut second = vec![Span::raw("  "), Span::raw(track.insight.as_str())];
    if let Some(tag) = &track.tag {
        second.push(Span::raw("  "));
        second.push(Span::styled(
            format!("[{tag}]"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }
    let mut lines = vec![Line::from(first), Line::from(second)];
    if let Some(detail) = &track.detail {
        lines.push(Line::from(Span::styled(
            format!("  {detail}"),
            Style::default().fg(ui.theme.muted),
        )));
    }
    lines
}

fn render_cards(frame: &mut Frame, area: Rect, door: Door, active: bool, ui: &Ui) {
    let color = ui.theme.door(door);
    let focus = ui.dashboard.focus();
    let items: Vec<ListItem> = catalog::door_tracks(door)
        .iter()
        .map(|track| ListItem::new(card_lines(track, color, focus.contains(&track.id), ui)))
        .collect();

    let mut state = ListState::default();
    if active && !items.is_empty() {
        state.select(Some(ui.dashboard.card_cursor(door)));
    }
    let list = List::new(items)
        .highlight_style(Style::default().bg(ui.theme.selection_bg))
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_focus_shelf(frame: &mut Frame, area: Rect, active: bool, ui: &Ui) {
    let focus = ui.dashboard.focus();
    let cursor = ui.dashboard.card_cursor(Door::FocusShelf);
    let selected = |index: usize| active && index == cursor;
    let row_style = |index: usize| {
        if selected(index) {
            Style::default()
                .bg(ui.theme.selection_bg)
                .fg(ui.theme.selection_fg)
        } else {
            Style::default().fg(ui.theme.primary_fg)
        }
    };
    let marker = |index: usize| if selected(index) { "▶ " } else { "  " };

    let mut lines = vec![Line::from(Span::styled(
        format!("QUEUE: {}/{}", focus.len(), FOCUS_CAPACITY),
        Style::default()
            .fg(ui.theme.shelf)
            .add_modifier(Modifier::BOLD),
    ))];

    match focus.current() {
        Some(track) => {
            lines.push(Line::from(Span::styled(
                "NOW FOCUSING",
                Style::default().fg(ui.theme.muted),
            )));
            lines.push(Line::from(vec![
                Span::raw(marker(0)),
                Span::styled(
                    format!("{ARTWORK_GLYPH} {}", track.display_name()),
                    row_style(0).add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Nothing in focus yet. Add tracks from the other doors with a.",
                Style::default().fg(ui.theme.muted),
            )));
        }
    }

    let up_next = focus.up_next();
    if !up_next.is_empty() {
        lines.push(Line::from(Span::styled(
            "UP NEXT",
            Style::default().fg(ui.theme.muted),
        )));
        // Slide the window so the cursor stays visible; queue index = up-next index + 1.
        let start = cursor
            .saturating_sub(UP_NEXT_VISIBLE)
            .min(up_next.len().saturating_sub(UP_NEXT_VISIBLE));
        let end = (start + UP_NEXT_VISIBLE).min(up_next.len());
        for (offset, track) in up_next[start..end].iter().enumerate() {
            let index = start + offset + 1;
            lines.push(Line::from(vec![
                Span::raw(marker(index)),
                Span::styled(
                    format!("{:>2}. {}", index + 1, track.display_name()),
                    row_style(index),
                ),
            ]));
        }
        let hidden = up_next.len() - (end - start);
        if hidden > 0 {
            lines.push(Line::from(Span::styled(
                format!("  +{hidden} more"),
                Style::default().fg(ui.theme.muted),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("x", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" remove  "),
        Span::styled("r", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Download Report"),
    ]));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// Detail line for the card under the cursor, including the artwork fallback.
fn render_tooltip(frame: &mut Frame, area: Rect, ui: &Ui) {
    let Some(card) = ui.dashboard.selected_card() else {
        return;
    };
    let (artwork, hint) = match card {
        CardRef::Sample(track) => {
            let hint = if ui.dashboard.focus().contains(&track.id) {
                "on your shelf"
            } else if ui.dashboard.focus().is_full() {
                "shelf full"
            } else {
                "a add to focus"
            };
            (track.artwork.as_deref(), hint)
        }
        CardRef::Shelf(track) => (track.artwork.as_deref(), "x remove"),
    };
    let artwork_label = artwork
        .and_then(artwork_host)
        .map(|host| format!("[{ARTWORK_GLYPH} {host}]"))
        .unwrap_or_else(|| format!("[{ARTWORK_GLYPH}]"));
    let line = Line::from(vec![
        Span::styled(artwork_label, Style::default().fg(ui.theme.muted)),
        Span::raw("  "),
        Span::styled(hint, Style::default().fg(ui.theme.accent)),
    ]);
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

fn momentum_bar(momentum: u8, width: usize) -> String {
    let filled = (usize::from(momentum.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn render_catalog(frame: &mut Frame, area: Rect, ui: &Ui) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(12),
        ])
        .split(area);

    let metrics = catalog::catalog_metrics();
    if !metrics.is_empty() {
        let constraints: Vec<Constraint> = metrics
            .iter()
            .map(|_| Constraint::Ratio(1, metrics.len() as u32))
            .collect();
        let tiles = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(chunks[0]);
        for (metric, tile) in metrics.iter().zip(tiles.iter()) {
            let body = Paragraph::new(vec![
                Line::from(Span::styled(
                    metric.value.clone(),
                    Style::default()
                        .fg(ui.theme.primary_fg)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    metric.change.clone(),
                    Style::default().fg(ui.theme.success),
                )),
            ])
            .block(Block::default().borders(Borders::ALL).title(metric.label.clone()));
            frame.render_widget(body, *tile);
        }
    }

    let focus = ui.dashboard.focus();
    let rows: Vec<Row> = catalog::top_tracks()
        .iter()
        .enumerate()
        .map(|(idx, track)| {
            let mark = if focus.contains(&track.id) { "✓" } else { "" };
            Row::new(vec![
                Cell::from(format!("{}", idx + 1)),
                Cell::from(Span::styled(
                    track.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Cell::from(track.artist.clone()),
                Cell::from(track.streams.clone()),
                Cell::from(Span::styled(
                    track.velocity.clone(),
                    Style::default().fg(ui.theme.success),
                )),
                Cell::from(Span::styled(
                    format!("{} {:>3}", momentum_bar(track.momentum, 10), track.momentum),
                    Style::default().fg(ui.theme.accent),
                )),
                Cell::from(Span::styled(mark, Style::default().fg(ui.theme.success))),
            ])
        })
        .collect();
    let header_style = Style::default()
        .fg(ui.theme.accent)
        .add_modifier(Modifier::BOLD);
    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(18),
            Constraint::Min(14),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(15),
            Constraint::Length(2),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from(Span::styled("#", header_style)),
            Cell::from(Span::styled("TRACK", header_style)),
            Cell::from(Span::styled("ARTIST", header_style)),
            Cell::from(Span::styled("STREAMS", header_style)),
            Cell::from(Span::styled("VELOCITY", header_style)),
            Cell::from(Span::styled("MOMENTUM", header_style)),
            Cell::from(""),
        ])
        .bottom_margin(1),
    )
    .block(Block::default().borders(Borders::ALL).title("Top Tracks"))
    .highlight_style(Style::default().bg(ui.theme.selection_bg))
    .highlight_symbol("▶ ");
    let mut state = TableState::default();
    state.select(Some(ui.dashboard.catalog_cursor()));
    frame.render_stateful_widget(table, chunks[1], &mut state);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    render_line_chart(
        frame,
        charts[0],
        Block::default().borders(Borders::ALL).title("Growth Trends"),
        &[(&*catalog::GROWTH_TRENDS, ui.theme.accent)],
        ui,
    );
    render_bar_chart(
        frame,
        charts[1],
        Block::default()
            .borders(Borders::ALL)
            .title("Momentum Categories"),
        &catalog::MOMENTUM_CATEGORIES,
        ui.theme.opportunities,
        ui,
    );
}

fn render_settings(frame: &mut Frame, area: Rect, ui: &Ui) {
    let label = Style::default().fg(ui.theme.muted);
    let value = Style::default().fg(ui.theme.primary_fg);
    let row = |name: &'static str, text: String| {
        Line::from(vec![
            Span::styled(format!("{name:<22}"), label),
            Span::styled(text, value),
        ])
    };
    let config = ui.config;
    let lines = vec![
        row("config file", ui.config_path.display().to_string()),
        row("tick rate", format!("{} ms", config.tick_rate_ms)),
        row("rotation interval", format!("{} ms", config.rotation_interval_ms)),
        row("fade window", format!("{} ms", config.fade_ms)),
        row("scroll step", format!("{} / {}", config.scroll_step, DOOR_SPAN)),
        row("start view", config.start_view.clone()),
        row("report name", config.report_name.clone()),
        row("log directory", config.log_dir.display().to_string()),
        row("report directory", config.report_dir.display().to_string()),
        row("theme", ui.theme_status.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Environment variables prefixed PERDAY_ override the file, e.g. PERDAY_SCROLL_STEP=250.",
            label,
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Settings"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn modal_area(area: Rect, percent: u16) -> Rect {
    centered_rect(
        area.width * percent / 100,
        area.height * percent / 100,
        area,
    )
}

fn render_song_detail(frame: &mut Frame, area: Rect, detail: &SongDetail, ui: &Ui) {
    let area = modal_area(area, 94);
    frame.render_widget(Clear, area);
    let subject = detail.subject();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(ui.theme.accent))
        .title(format!(
            " {} · {} ({}) ",
            subject.title, subject.artist, subject.velocity
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if detail.is_loading() {
        let gauge_area = centered_rect(inner.width.min(50), 3, inner);
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Loading analytics"))
            .gauge_style(Style::default().fg(ui.theme.accent))
            .percent(u16::from(detail.progress()))
            .label(format!("{}%", detail.progress()));
        frame.render_widget(gauge, gauge_area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(9),
            Constraint::Length(7),
        ])
        .split(inner);

    let summary = Line::from(vec![
        Span::styled("Model: ", Style::default().fg(ui.theme.muted)),
        Span::styled(
            detail.model().label(),
            Style::default()
                .fg(ui.theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "   Highlights: {}/{}",
                detail.highlighted().len(),
                MAX_HIGHLIGHTS
            ),
            Style::default().fg(ui.theme.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(summary), chunks[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[1]);
    for (row_idx, row) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(*row);
        for (col_idx, cell) in cells.iter().enumerate() {
            let index = row_idx * 3 + col_idx;
            if let Some(chart) = DetailChart::ALL.get(index) {
                render_detail_chart(frame, *cell, *chart, index, detail, ui);
            }
        }
    }

    render_feedback(frame, chunks[2], detail, ui);
}

fn kind_color(kind: ChartKind, theme: &Theme) -> Color {
    match kind {
        ChartKind::Descriptive => theme.bets,
        ChartKind::Predictive => theme.opportunities,
        ChartKind::Prescriptive => theme.risks,
    }
}

fn render_detail_chart(
    frame: &mut Frame,
    area: Rect,
    chart: DetailChart,
    index: usize,
    detail: &SongDetail,
    ui: &Ui,
) {
    let color = kind_color(chart.kind(), ui.theme);
    let highlighted = detail.is_highlighted(index);
    let under_cursor = detail.cursor() == index;
    let title_style = if under_cursor {
        Style::default()
            .fg(ui.theme.selection_fg)
            .bg(ui.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    let marker = if highlighted { "★ " } else { "" };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if highlighted {
            BorderType::Thick
        } else {
            BorderType::Plain
        })
        .border_style(Style::default().fg(if highlighted { color } else { ui.theme.muted }))
        .title(Span::styled(
            format!(" {marker}{} ", chart.title()),
            title_style,
        ))
        .title_bottom(Line::from(Span::styled(
            format!(" {} · {} ", chart.kind().label(), chart.subtitle(detail.model())),
            Style::default().fg(ui.theme.muted),
        )));

    match chart {
        DetailChart::StreamHistory => {
            let values: Vec<u64> = series_values(&catalog::STREAM_HISTORY);
            let sparkline = Sparkline::default()
                .block(block)
                .data(&values)
                .style(Style::default().fg(color));
            frame.render_widget(sparkline, area);
        }
        DetailChart::PlatformSplit => {
            render_bar_chart(frame, area, block, &catalog::PLATFORM_SPLIT, color, ui)
        }
        DetailChart::SaveRate => {
            render_line_chart(frame, area, block, &[(&*catalog::SAVE_RATE, color)], ui)
        }
        DetailChart::GrowthProjection => {
            let projection = detail.model().projection();
            render_line_chart(frame, area, block, &[(&projection.predicted, color)], ui)
        }
        DetailChart::ConfidenceInterval => {
            let projection = detail.model().projection();
            render_bar_chart(frame, area, block, &projection.confidence, color, ui)
        }
        DetailChart::MomentumScore => {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let gauge_area = centered_rect(inner.width, 1, inner);
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(color))
                .percent(u16::from(catalog::MOMENTUM_SCORE))
                .label(format!("{} / 100", catalog::MOMENTUM_SCORE));
            frame.render_widget(gauge, gauge_area);
        }
        DetailChart::RoiProjection => {
            render_bar_chart(frame, area, block, &catalog::ROI_PROJECTION, color, ui)
        }
        DetailChart::OptimalSpend => {
            let text = Paragraph::new(Line::from(Span::styled(
                catalog::OPTIMAL_SPEND,
                Style::default().fg(ui.theme.primary_fg).add_modifier(Modifier::BOLD),
            )))
            .block(block)
            .wrap(Wrap { trim: true });
            frame.render_widget(text, area);
        }
        DetailChart::Strategy => {
            let text = Paragraph::new(catalog::STRATEGY_RECOMMENDATION)
                .block(block)
                .wrap(Wrap { trim: true });
            frame.render_widget(text, area);
        }
    }
}

fn render_feedback(frame: &mut Frame, area: Rect, detail: &SongDetail, ui: &Ui) {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("What happened in {}? ", catalog::FEEDBACK_MONTH),
            Style::default()
                .fg(ui.theme.primary_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(catalog::FEEDBACK_EVENT, Style::default().fg(ui.theme.muted)),
    ])];
    match detail.feedback() {
        Some(answer) => {
            lines.push(Line::from(Span::styled(
                format!("Thanks! You said: {answer}"),
                Style::default().fg(ui.theme.success),
            )));
        }
        None => {
            for (idx, option) in catalog::FEEDBACK_OPTIONS.iter().enumerate() {
                let selected = idx == detail.feedback_cursor();
                let style = if selected {
                    Style::default()
                        .fg(ui.theme.selection_fg)
                        .bg(ui.theme.selection_bg)
                } else {
                    Style::default().fg(ui.theme.primary_fg)
                };
                lines.push(Line::from(vec![
                    Span::raw(if selected { "▶ " } else { "  " }),
                    Span::styled(*option, style),
                ]));
            }
        }
    }
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Why did this happen?"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_engagement(frame: &mut Frame, area: Rect, ui: &Ui) {
    let area = modal_area(area, 88);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(ui.theme.opportunities))
        .title(format!(" Engagement Score {} ", catalog::ENGAGEMENT_SCORE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(inner);
    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let palette = [ui.theme.accent, ui.theme.bets, ui.theme.opportunities];
    let history: Vec<(&Series, Color)> = catalog::ENGAGEMENT_HISTORY
        .iter()
        .zip(palette.iter().copied())
        .collect();
    render_line_chart(
        frame,
        charts[0],
        Block::default()
            .borders(Borders::ALL)
            .title("Engagement History"),
        &history,
        ui,
    );
    let popularity: Vec<(&Series, Color)> = catalog::PLATFORM_POPULARITY
        .iter()
        .zip([ui.theme.bets, ui.theme.opportunities])
        .collect();
    render_line_chart(
        frame,
        charts[1],
        Block::default()
            .borders(Borders::ALL)
            .title("Platform Popularity"),
        &popularity,
        ui,
    );

    let breakdown = catalog::ENGAGEMENT_BREAKDOWN;
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[1]);
    for ((label, value), tile) in breakdown.iter().zip(tiles.iter()) {
        let body = Paragraph::new(Line::from(Span::styled(
            *value,
            Style::default()
                .fg(ui.theme.primary_fg)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(*label));
        frame.render_widget(body, *tile);
    }
}

fn render_campaigns(frame: &mut Frame, area: Rect, board: &CampaignBoard, ui: &Ui) {
    let area = modal_area(area, 92);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(ui.theme.risks))
        .title(" Campaigns ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let label = Style::default().fg(ui.theme.muted);
    let mut lines = Vec::new();
    for (idx, item) in catalog::campaigns().iter().enumerate() {
        let selected = idx == board.cursor();
        let style = if selected {
            Style::default()
                .fg(ui.theme.selection_fg)
                .bg(ui.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(ui.theme.primary_fg)
                .add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            Span::raw(if selected { "▶ " } else { "  " }),
            Span::styled(item.name.clone(), style),
            Span::styled(format!("  {}", item.platform), label),
            Span::styled(
                format!("  ROI {:.1}x", item.roi),
                Style::default().fg(ui.theme.success),
            ),
        ]));
        if board.is_expanded(item) {
            let utilisation = item
                .budget_utilisation()
                .map(|value| format!("{value:.0}%"))
                .unwrap_or_else(|| "n/a".to_string());
            let details = [
                ("Dates", format!("{} → {}", item.start_date, item.end_date)),
                ("Target", format!("{} · {}", item.target_region, item.target_age)),
                (
                    "Spend",
                    format!(
                        "${} of ${} ({utilisation})",
                        campaign::format_thousands(item.actual_spend),
                        campaign::format_thousands(item.budget)
                    ),
                ),
                (
                    "Reach",
                    format!(
                        "{} streams · {} new listeners",
                        campaign::format_thousands(item.streams),
                        campaign::format_thousands(item.new_listeners)
                    ),
                ),
                (
                    "Cost",
                    format!(
                        "{} / stream · {} / listener",
                        campaign::format_cost_per_stream(item),
                        campaign::format_cost_per_listener(item)
                    ),
                ),
            ];
            for (name, text) in details {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {name:<8}"), label),
                    Span::raw(text),
                ]));
            }
        }
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("History"))
            .wrap(Wrap { trim: false }),
        columns[0],
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Min(6),
        ])
        .split(columns[1]);
    let (streams, spend) = &*catalog::CAMPAIGN_PERFORMANCE;
    let stream_values = series_values(streams);
    let spend_values = series_values(spend);
    frame.render_widget(
        Sparkline::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} (Jan–Jun)", streams.name)),
            )
            .data(&stream_values)
            .style(Style::default().fg(ui.theme.bets)),
        right[0],
    );
    frame.render_widget(
        Sparkline::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} (Jan–Jun)", spend.name)),
            )
            .data(&spend_values)
            .style(Style::default().fg(ui.theme.risks)),
        right[1],
    );

    let rec = &*catalog::RECOMMENDATION;
    let mut rec_lines = vec![
        Line::from(vec![
            Span::styled("Budget    ", label),
            Span::raw(format!(
                "${} over {}",
                campaign::format_thousands(rec.suggested_budget),
                rec.suggested_duration
            )),
        ]),
        Line::from(vec![
            Span::styled("Platform  ", label),
            Span::raw(rec.suggested_platform.clone()),
        ]),
        Line::from(vec![
            Span::styled("Regions   ", label),
            Span::raw(rec.suggested_regions.join(", ")),
        ]),
        Line::from(vec![
            Span::styled("Projected ", label),
            Span::styled(
                format!(
                    "{} streams · ROI {:.1}x",
                    campaign::format_thousands(rec.projected_streams),
                    rec.projected_roi
                ),
                Style::default().fg(ui.theme.success),
            ),
        ]),
        Line::from(""),
    ];
    for reason in &rec.reasoning {
        rec_lines.push(Line::from(format!("• {reason}")));
    }
    frame.render_widget(
        Paragraph::new(rec_lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Recommended Next Campaign"),
            )
            .wrap(Wrap { trim: true }),
        right[2],
    );
}

fn render_help(frame: &mut Frame, area: Rect, ui: &Ui) {
    let area = centered_rect(64, 20, area);
    frame.render_widget(Clear, area);
    let key = Style::default()
        .fg(ui.theme.accent)
        .add_modifier(Modifier::BOLD);
    let entries = [
        ("Tab / Shift-Tab", "switch view"),
        ("i or /", "open the assistant"),
        ("1-4", "jump to a door"),
        ("← → h l, wheel", "scroll the doors"),
        ("[ ]", "previous / next door"),
        ("↑ ↓ j k", "move between cards"),
        ("a / Enter", "add card to focus shelf"),
        ("x", "remove from focus shelf"),
        ("r", "download focus shelf report"),
        ("f", "expand assistant panel"),
        ("Esc", "close assistant or modal"),
        ("Catalog: Enter e c", "song detail, engagement, campaigns"),
        ("q / Ctrl-C", "quit"),
    ];
    let lines: Vec<Line> = entries
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("{keys:<20}"), key),
                Span::raw(*action),
            ])
        })
        .collect();
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Keys (any key closes)"),
    );
    frame.render_widget(paragraph, area);
}

fn series_values(series: &Series) -> Vec<u64> {
    series
        .points
        .iter()
        .map(|point| point.value.max(0.0).round() as u64)
        .collect()
}

fn compact_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

fn render_line_chart(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    series: &[(&Series, Color)],
    ui: &Ui,
) {
    let coords: Vec<Vec<(f64, f64)>> = series.iter().map(|(s, _)| s.coordinates()).collect();
    let datasets: Vec<Dataset> = series
        .iter()
        .zip(coords.iter())
        .map(|((s, color), data)| {
            Dataset::default()
                .name(s.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(data)
        })
        .collect();

    let y_max = series
        .iter()
        .map(|(s, _)| s.max_value())
        .fold(0.0, f64::max)
        .max(1.0)
        * 1.1;
    let longest = series
        .iter()
        .map(|(s, _)| s.points.len())
        .max()
        .unwrap_or(0);
    let x_max = longest.saturating_sub(1).max(1) as f64;
    let x_labels: Vec<Span> = series
        .first()
        .map(|(s, _)| {
            let first = s.points.first().map(|p| p.label.clone()).unwrap_or_default();
            let last = s.points.last().map(|p| p.label.clone()).unwrap_or_default();
            vec![Span::raw(first), Span::raw(last)]
        })
        .unwrap_or_default();

    let muted = Style::default().fg(ui.theme.muted);
    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(Axis::default().style(muted).bounds([0.0, x_max]).labels(x_labels))
        .y_axis(
            Axis::default()
                .style(muted)
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(compact_number(y_max / 2.0)),
                    Span::raw(compact_number(y_max)),
                ]),
        )
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));
    frame.render_widget(chart, area);
}

fn render_bar_chart(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    series: &Series,
    color: Color,
    ui: &Ui,
) {
    let bars: Vec<(&str, u64)> = series
        .points
        .iter()
        .map(|point| (point.label.as_str(), point.value.max(0.0).round() as u64))
        .collect();
    let inner_width = usize::from(area.width.saturating_sub(2));
    let slots = bars.len().max(1);
    let bar_width = (inner_width / slots).saturating_sub(1).clamp(1, 9) as u16;
    let chart = BarChart::default()
        .block(block)
        .data(bars.as_slice())
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(color))
        .value_style(Style::default().fg(ui.theme.on_accent).bg(color))
        .label_style(Style::default().fg(ui.theme.muted));
    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn momentum_bar_rounds_to_width() {
        assert_eq!(momentum_bar(0, 10), "░".repeat(10));
        assert_eq!(momentum_bar(100, 10), "█".repeat(10));
        assert_eq!(momentum_bar(92, 10), format!("{}{}", "█".repeat(9), "░"));
    }

    #[test]
    fn input_window_follows_cursor() {
        assert_eq!(input_window("hello", 5, 10), ("hello", 5));
        assert_eq!(input_window("abcdefghij", 10, 4), ("hij", 3));
        assert_eq!(input_window("abcdefghij", 0, 4), ("abcd", 0));
        assert_eq!(input_window("abcdefghij", 5, 4), ("cdef", 3));
        assert_eq!(input_window("abc", 2, 0), ("", 0));
    }

    #[test]
    fn compact_numbers() {
        assert_eq!(compact_number(950.0), "950");
        assert_eq!(compact_number(245_000.0), "245K");
        assert_eq!(compact_number(2_760_000.0), "2.8M");
    }

    #[test]
    fn centered_rect_stays_inside() {
        let outer = Rect::new(2, 3, 40, 10);
        let rect = centered_rect(80, 4, outer);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 4);
        assert_eq!(rect.x, 2);
        assert_eq!(rect.y, 6);
    }
}

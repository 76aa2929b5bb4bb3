use std::{
    io,
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use perday_core::{
    config::{self, AppConfig},
    report::ReportWriter,
    rotator::PlaceholderRotator,
    state::Overlay,
    AddOutcome, Dashboard, Door, View,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::{theme::Theme, timer::ScopedInterval, ui};

/// Seconds for one full orb pulse.
const ORB_PERIOD_SECS: f64 = 2.4;

enum AppEvent {
    Input(Event),
    Tick,
    Rotate(Duration),
}

/// Terminal front-end around the [`Dashboard`] state.
pub struct PerdayApp {
    config: AppConfig,
    config_path: PathBuf,
    dashboard: Dashboard,
    reports: ReportWriter,
    theme: Theme,
    theme_status: String,
    status: String,
    show_help: bool,
    should_quit: bool,
    orb_phase: f64,
    last_tick: Instant,
    event_tx: Option<mpsc::Sender<AppEvent>>,
    rotation_timer: Option<ScopedInterval>,
}

impl PerdayApp {
    pub fn new(config: AppConfig) -> Self {
        let (theme, theme_status) = Theme::from_overrides(&config.theme);
        let rotator = PlaceholderRotator::new(
            perday_core::catalog::PLACEHOLDER_PROMPTS
                .iter()
                .map(|prompt| prompt.to_string()),
            config.rotation_interval(),
            config.fade(),
        );
        let mut dashboard = Dashboard::new(rotator);
        let status = match config.initial_view() {
            Ok(view) => {
                dashboard.navigate(view);
                "Ready".to_string()
            }
            Err(err) => {
                warn!(%err, "ignoring start_view");
                format!("{err}; starting on Home")
            }
        };
        Self {
            reports: ReportWriter::new(config.report_dir.clone(), &config.report_name),
            config_path: config::config_path(),
            dashboard,
            theme,
            theme_status,
            status,
            show_help: false,
            should_quit: false,
            orb_phase: 0.0,
            last_tick: Instant::now(),
            event_tx: None,
            rotation_timer: None,
            config,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(128);
        if let Err(err) = spawn_input_thread(event_tx.clone(), self.config.tick_rate()) {
            restore_terminal(&mut terminal)?;
            return Err(err);
        }
        self.event_tx = Some(event_tx);
        self.status = format!("{} • {}", self.status, self.theme_status);
        self.sync_rotation_timer();
        self.last_tick = Instant::now();

        let result = self.event_loop(&mut terminal, &mut event_rx).await;

        self.rotation_timer = None;
        self.event_tx = None;
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        event_rx: &mut mpsc::Receiver<AppEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| {
                let view = ui::Ui {
                    dashboard: &self.dashboard,
                    theme: &self.theme,
                    config: &self.config,
                    config_path: &self.config_path,
                    status: &self.status,
                    theme_status: &self.theme_status,
                    orb_phase: self.orb_phase,
                    show_help: self.show_help,
                };
                ui::draw(frame, &view);
            })?;
            if self.should_quit {
                break;
            }

            let maybe_event = event_rx.recv().await;
            if !self.process_app_event(maybe_event) {
                break;
            }
            self.sync_rotation_timer();

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn process_app_event(&mut self, maybe_event: Option<AppEvent>) -> bool {
        match maybe_event {
            Some(AppEvent::Input(event)) => {
                if let Err(err) = self.handle_input(event) {
                    error!(?err, "input handler failed");
                    self.status = format!("Error: {err}");
                }
                true
            }
            Some(AppEvent::Tick) => {
                self.handle_tick();
                true
            }
            Some(AppEvent::Rotate(elapsed)) => {
                self.dashboard.rotate(elapsed);
                true
            }
            None => false,
        }
    }

    fn handle_tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.dashboard.tick(elapsed);
        self.orb_phase = (self.orb_phase + elapsed.as_secs_f64() / ORB_PERIOD_SECS).fract();
    }

    /// Hold the rotation timer exactly while the home view is on screen.
    fn sync_rotation_timer(&mut self) {
        let wanted = self.dashboard.view() == View::Home;
        match (wanted, self.rotation_timer.is_some()) {
            (true, false) => {
                let Some(sender) = self.event_tx.clone() else {
                    return;
                };
                let step = rotation_step(&self.config);
                self.rotation_timer = Some(ScopedInterval::spawn(
                    "placeholder-rotation",
                    step,
                    sender,
                    move || AppEvent::Rotate(step),
                ));
            }
            (false, true) => self.rotation_timer = None,
            _ => {}
        }
    }

    fn handle_input(&mut self, event: Event) -> Result<()> {
        // Frame ticks stall while keys stream in; keep animations moving.
        self.handle_tick();
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key)?,
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }
        if self.dashboard.chat().is_editing() {
            self.handle_chat_key(key);
            return Ok(());
        }
        if self.dashboard.overlay().is_some() {
            self.handle_overlay_key(key);
            return Ok(());
        }
        if self.show_help {
            self.show_help = false;
            return Ok(());
        }
        if self.handle_global_key(&key) {
            return Ok(());
        }
        match self.dashboard.view() {
            View::Home => self.handle_home_key(key),
            View::Catalog => self.handle_catalog_key(key),
            View::Settings => self.handle_settings_key(key)?,
        }
        Ok(())
    }

    fn handle_global_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => self.dashboard.next_view(),
            KeyCode::BackTab => self.dashboard.previous_view(),
            KeyCode::Char('i') | KeyCode::Char('/') => {
                self.dashboard.open_chat();
                self.status = "Ask anything. Enter sends, Esc leaves the input.".to_string();
            }
            KeyCode::Char('r') => self.export_report(),
            _ => return false,
        }
        true
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        let step = i64::from(self.config.scroll_step);
        match key.code {
            KeyCode::Char(ch @ '1'..='4') => {
                let index = ch as usize - '1' as usize;
                if let Err(err) = self.dashboard.select_door_index(index) {
                    self.status = err.to_string();
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.dashboard.scroll_doors(-step),
            KeyCode::Right | KeyCode::Char('l') => self.dashboard.scroll_doors(step),
            KeyCode::Char('[') => self.dashboard.previous_door(),
            KeyCode::Char(']') => self.dashboard.next_door(),
            KeyCode::Up | KeyCode::Char('k') => self.dashboard.move_card_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.dashboard.move_card_cursor(1),
            KeyCode::Char('a') | KeyCode::Enter => self.add_selected_card(),
            KeyCode::Char('x') | KeyCode::Char('d') | KeyCode::Delete => {
                match self.dashboard.remove_selected_card() {
                    Some(track) => self.status = format!("Removed {}", track.display_name()),
                    None if self.dashboard.doors().active() == Door::FocusShelf => {
                        self.status = "Nothing to remove".to_string()
                    }
                    None => {}
                }
            }
            KeyCode::Char('f') => self.dashboard.chat_mut().toggle_expanded(),
            KeyCode::Esc => {
                if self.dashboard.chat().is_active() {
                    self.dashboard.chat_mut().close();
                    self.status = "Assistant closed".to_string();
                }
            }
            _ => {}
        }
    }

    fn add_selected_card(&mut self) {
        let Some(outcome) = self.dashboard.add_selected_card() else {
            return;
        };
        self.status = self.describe_add(outcome);
    }

    fn describe_add(&self, outcome: AddOutcome) -> String {
        match outcome {
            AddOutcome::Added => format!(
                "Added to focus shelf ({})",
                self.dashboard.focus().counter_label()
            ),
            AddOutcome::Duplicate => "Already on your focus shelf".to_string(),
            AddOutcome::Full => "Focus shelf is full (10/10)".to_string(),
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        if key.modifiers == KeyModifiers::CONTROL {
            if let KeyCode::Char('f') = key.code {
                self.dashboard.chat_mut().toggle_expanded();
            }
            return;
        }
        let chat = self.dashboard.chat_mut();
        match key.code {
            KeyCode::Esc => chat.blur_input(),
            KeyCode::Enter => {
                if let Some(message) = chat.submit() {
                    self.status = format!("Sent: {message}");
                }
            }
            KeyCode::Left => chat.input_mut().move_cursor(-1),
            KeyCode::Right => chat.input_mut().move_cursor(1),
            KeyCode::Home => chat.input_mut().move_home(),
            KeyCode::End => chat.input_mut().move_end(),
            KeyCode::Backspace => chat.input_mut().backspace(),
            KeyCode::Delete => chat.input_mut().delete(),
            KeyCode::Char(ch) => chat.input_mut().insert(ch),
            _ => {}
        }
    }

    fn handle_catalog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.dashboard.move_catalog_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.dashboard.move_catalog_cursor(1),
            KeyCode::Char('a') => {
                if let Some(outcome) = self.dashboard.add_selected_catalog_track() {
                    self.status = self.describe_add(outcome);
                }
            }
            KeyCode::Enter => {
                self.dashboard.open_selected_detail();
            }
            KeyCode::Char('e') => self.dashboard.open_engagement(),
            KeyCode::Char('c') => self.dashboard.open_campaigns(),
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) -> Result<()> {
        if let KeyCode::Char('w') = key.code {
            if config::ensure_default_config_at(&self.config_path)? {
                self.status = format!("Wrote {}", self.config_path.display());
            } else {
                self.status = format!("{} already exists", self.config_path.display());
            }
        }
        Ok(())
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            self.dashboard.close_overlay();
            return;
        }
        let mut feedback = None;
        let mut close = false;
        match self.dashboard.overlay_mut() {
            Some(Overlay::SongDetail(detail)) => {
                if detail.is_loading() {
                    if key.code == KeyCode::Char('s') {
                        detail.finish_loading();
                    }
                    return;
                }
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => detail.move_cursor(-1, 0),
                    KeyCode::Down | KeyCode::Char('j') => detail.move_cursor(1, 0),
                    KeyCode::Left | KeyCode::Char('h') => detail.move_cursor(0, -1),
                    KeyCode::Right | KeyCode::Char('l') => detail.move_cursor(0, 1),
                    KeyCode::Char(' ') | KeyCode::Enter => detail.toggle_highlight_at_cursor(),
                    KeyCode::Char('m') => detail.toggle_model(),
                    KeyCode::Char('K') => detail.move_feedback_cursor(-1),
                    KeyCode::Char('J') => detail.move_feedback_cursor(1),
                    KeyCode::Char('f') => {
                        detail.choose_feedback();
                        feedback = detail
                            .feedback()
                            .map(|answer| (detail.subject().id.clone(), answer));
                    }
                    _ => {}
                }
            }
            Some(Overlay::Campaigns(board)) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => board.move_cursor(-1),
                KeyCode::Down | KeyCode::Char('j') => board.move_cursor(1),
                KeyCode::Char(' ') | KeyCode::Enter => board.toggle_current(),
                _ => {}
            },
            Some(Overlay::Engagement) => close = key.code == KeyCode::Enter,
            None => {}
        }
        if close {
            self.dashboard.close_overlay();
        }
        if let Some((id, answer)) = feedback {
            info!(track = %id, answer, "song detail feedback");
            self.status = "Thanks! Your answer helps tune future insights.".to_string();
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.dashboard.view() != View::Home || self.dashboard.overlay().is_some() {
            return;
        }
        let step = i64::from(self.config.scroll_step);
        match mouse.kind {
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
                self.dashboard.scroll_doors(step)
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
                self.dashboard.scroll_doors(-step)
            }
            _ => {}
        }
    }

    fn export_report(&mut self) {
        match self.reports.export(self.dashboard.focus()) {
            Ok(path) => {
                self.status = format!("Report saved to {}", path.display());
            }
            Err(err) => {
                error!(?err, "report export failed");
                self.status = format!("Report export failed: {err}");
            }
        }
    }
}

/// Granularity of the rotation timer: fine enough to show the fade window.
fn rotation_step(config: &AppConfig) -> Duration {
    let interval = config.rotation_interval();
    let fade = config.fade();
    if fade.is_zero() {
        interval
    } else {
        fade.min(interval)
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

/// Forward crossterm events, and a `Tick` whenever `tick_rate` passes
/// without input. The thread ends when the receiver goes away or the
/// terminal stops delivering events.
fn spawn_input_thread(sender: mpsc::Sender<AppEvent>, tick_rate: Duration) -> Result<()> {
    thread::Builder::new()
        .name("perday-input".to_string())
        .spawn(move || loop {
            let event = match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(evt) => AppEvent::Input(evt),
                    Err(err) => {
                        error!(?err, "terminal read failed, input thread exiting");
                        break;
                    }
                },
                Ok(false) => AppEvent::Tick,
                Err(err) => {
                    error!(?err, "terminal poll failed, input thread exiting");
                    break;
                }
            };
            if sender.blocking_send(event).is_err() {
                debug!("event channel closed, input thread exiting");
                break;
            }
        })
        .context("failed to spawn input thread")?;
    debug!(tick_ms = tick_rate.as_millis() as u64, "input thread started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_step_prefers_fade_window() {
        let config = AppConfig::default();
        assert_eq!(rotation_step(&config), Duration::from_millis(200));

        let config = AppConfig {
            fade_ms: 0,
            rotation_interval_ms: 1500,
            ..AppConfig::default()
        };
        assert_eq!(rotation_step(&config), Duration::from_millis(1500));
    }

    #[test]
    fn zero_rotation_interval_does_not_spin() {
        for fade_ms in [0, 200] {
            let config = AppConfig {
                rotation_interval_ms: 0,
                fade_ms,
                ..AppConfig::default()
            };
            assert!(rotation_step(&config) >= Duration::from_millis(fade_ms.max(1)));
            assert!(!rotation_step(&config).is_zero());
        }
    }

    #[test]
    fn start_view_from_config() {
        let config = AppConfig {
            start_view: "catalog".to_string(),
            ..AppConfig::default()
        };
        let app = PerdayApp::new(config);
        assert_eq!(app.dashboard.view(), View::Catalog);

        let config = AppConfig {
            start_view: "nowhere".to_string(),
            ..AppConfig::default()
        };
        let app = PerdayApp::new(config);
        assert_eq!(app.dashboard.view(), View::Home);
        assert!(app.status.contains("nowhere"));
    }
}

//! TUI interface — ratatui panels: header, profile card, terminal, footer.
//!
//! The App struct holds all TUI state and drives the event loop.

pub mod keybindings;
pub mod layout;
pub mod markup;
pub mod theme;
pub mod transcript_view;
pub mod viewport;

pub use keybindings::{map_key, Action};
pub use layout::ScreenLayout;
pub use viewport::TranscriptViewport;

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, info, warn};
use unicode_width::UnicodeWidthStr;

use crate::config::{ConfigError, Settings};
use crate::content::{Profile, PROFILE};
use crate::session::{Session, SessionOptions, SubmitOutcome};

/// Upper bound on how long the loop sleeps waiting for input.
const MAX_POLL: Duration = Duration::from_millis(250);

/// The main TUI application state.
pub struct App {
    session: Session,
    viewport: TranscriptViewport,
    profile: &'static Profile,
    pub theme: theme::Theme,
    available_themes: Vec<theme::Theme>,
    should_quit: bool,
    shutdown: Option<Arc<AtomicBool>>,
    /// Transcript rows on screen at the last draw; one page for scrolling.
    page_height: usize,
}

impl App {
    /// Build the app from loaded settings, resolving the theme from the
    /// built-ins and ~/.termfolio/theme.yaml.
    pub fn new(settings: &Settings, now: Instant) -> Result<Self, ConfigError> {
        let options = settings.session_options()?;
        let custom = theme::config::load_theme_from_yaml();
        let (theme, available) = theme::select_theme(settings.theme.as_deref(), custom);
        if let Some(requested) = settings.theme.as_deref() {
            if !theme.name.eq_ignore_ascii_case(requested.trim()) {
                warn!(requested, using = %theme.name, "unknown theme");
            }
        }
        Ok(Self::with_theme(options, theme, available, now))
    }

    /// Build the app with an explicit theme list.
    pub fn with_theme(
        options: SessionOptions,
        theme: theme::Theme,
        available_themes: Vec<theme::Theme>,
        now: Instant,
    ) -> Self {
        Self {
            session: Session::new(options, now),
            viewport: TranscriptViewport::new(),
            profile: &PROFILE,
            theme,
            available_themes,
            should_quit: false,
            shutdown: None,
            page_height: 1,
        }
    }

    /// Quit once `flag` is set, e.g. from a signal handler.
    pub fn with_shutdown_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.shutdown = Some(flag);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn viewport(&self) -> &TranscriptViewport {
        &self.viewport
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
            || self
                .shutdown
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Submit => {
                if self.session.submit(now) != SubmitOutcome::Ignored {
                    self.viewport.follow();
                }
            }
            Action::Insert(c) => {
                self.session.input_mut().insert_char(c);
                self.viewport.follow();
            }
            Action::Backspace => {
                self.session.input_mut().backspace();
                self.viewport.follow();
            }
            Action::Delete => {
                self.session.input_mut().delete();
                self.viewport.follow();
            }
            Action::CursorLeft => self.session.input_mut().move_left(),
            Action::CursorRight => self.session.input_mut().move_right(),
            Action::CursorHome => self.session.input_mut().home(),
            Action::CursorEnd => self.session.input_mut().end(),
            Action::ScrollUp => self.viewport.scroll_up(self.page()),
            Action::ScrollDown => self.viewport.scroll_down(self.page()),
            Action::CycleTheme => {
                self.theme = theme::cycle_theme(&self.theme, &self.available_themes);
                debug!(theme = %self.theme.name, "theme changed");
            }
        }
    }

    fn page(&self) -> usize {
        self.page_height.saturating_sub(1).max(1)
    }

    /// Advance timers. Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let outcome = self.session.tick(now);
        if outcome.content_changed {
            self.viewport.follow();
        }
        outcome.content_changed || outcome.clock_changed
    }

    /// How long to wait for input before the next timer is due.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.session
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or(MAX_POLL)
            .min(MAX_POLL)
    }

    /// Draw the UI.
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.background)),
            area,
        );

        let layout = ScreenLayout::compute(area);
        self.draw_header(frame, layout.header);
        self.draw_profile(frame, layout.profile);
        self.draw_terminal(frame, layout.terminal);
        self.draw_footer(frame, layout.footer);
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                self.profile.name,
                Style::default()
                    .fg(self.theme.profile_name)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ·  ", Style::default().fg(self.theme.muted)),
            Span::styled(
                self.profile.headline,
                Style::default().fg(self.theme.profile_title),
            ),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));
        frame.render_widget(
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }

    fn draw_profile(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title(Span::styled(" Profile ", Style::default().fg(self.theme.accent)));

        let avatar = Style::default().fg(self.theme.avatar);
        let mut lines: Vec<Line> = monogram(&self.profile.initials())
            .into_iter()
            .map(|row| Line::from(Span::styled(row, avatar)))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            self.profile.name,
            Style::default()
                .fg(self.theme.profile_name)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            self.profile.title,
            Style::default().fg(self.theme.profile_title),
        )));
        lines.push(Line::default());

        let link = Style::default()
            .fg(self.theme.link)
            .add_modifier(Modifier::UNDERLINED);
        for social in &self.profile.links {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", social.label),
                    Style::default()
                        .fg(self.theme.strong)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(social.url, link),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled("Avatar ", Style::default().fg(self.theme.muted)),
            Span::styled(self.profile.avatar_url, Style::default().fg(self.theme.link_url)),
        ]));

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block),
            area,
        );
    }

    fn draw_terminal(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title(Span::styled(" Terminal ", Style::default().fg(self.theme.accent)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let width = inner.width as usize;
        let hints = transcript_view::hint_lines(&self.theme, width);
        // One blank row separates the hints from the transcript.
        let (hint_area, transcript_area) =
            layout::split_terminal(inner, hints.len() as u16 + 1);
        frame.render_widget(
            Paragraph::new(hints.into_iter().map(Line::from).collect::<Vec<_>>()),
            hint_area,
        );

        let mut lines =
            transcript_view::transcript_lines(&self.session, self.profile, &self.theme, width);
        let input = transcript_view::input_line(
            self.session.input(),
            self.profile,
            &self.theme,
            width,
        );
        lines.push(input.line);

        let height = transcript_area.height as usize;
        self.page_height = height.max(1);
        let total = lines.len();
        let offset = self.viewport.offset(total, height);
        let visible: Vec<Line> = lines
            .into_iter()
            .skip(offset)
            .take(height)
            .map(Line::from)
            .collect();
        frame.render_widget(Paragraph::new(visible), transcript_area);

        let input_row = total - 1;
        if height > 0 && input_row >= offset && input_row < offset + height {
            frame.set_cursor_position((
                transcript_area.x + input.cursor_column,
                transcript_area.y + (input_row - offset) as u16,
            ));
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let clock = self.session.clock().display();
        let clock_width = UnicodeWidthStr::width(clock.as_str()) as u16;
        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(clock_width)])
            .split(area);

        let prompt = Line::from(vec![
            Span::styled(
                self.profile.prompt_user,
                Style::default().fg(self.theme.prompt_user),
            ),
            Span::styled(
                self.profile.prompt_path,
                Style::default().fg(self.theme.prompt_path),
            ),
        ]);
        frame.render_widget(Paragraph::new(prompt), parts[0]);
        frame.render_widget(
            Paragraph::new(Span::styled(clock, Style::default().fg(self.theme.clock)))
                .alignment(Alignment::Right),
            parts[1],
        );
    }

    /// Run the TUI event loop.
    pub fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>,
    ) -> io::Result<()> {
        info!(theme = %self.theme.name, "session started");
        let mut needs_redraw = true;

        while !self.should_quit() {
            if needs_redraw {
                terminal
                    .draw(|frame| self.draw(frame))
                    .map_err(|e| io::Error::other(e.to_string()))?;
                needs_redraw = false;
            }

            if event::poll(self.poll_timeout(Instant::now()))? {
                match event::read()? {
                    CrosstermEvent::Key(key) => {
                        if let Some(action) = keybindings::map_key(key) {
                            self.handle_action(action, Instant::now());
                            needs_redraw = true;
                        }
                    }
                    CrosstermEvent::Resize(..) => needs_redraw = true,
                    _ => {}
                }
            }

            if self.tick(Instant::now()) {
                needs_redraw = true;
            }
        }

        info!(entries = self.session.transcript().len(), "session ended");
        Ok(())
    }
}

/// A boxed monogram standing in for the avatar image.
fn monogram(initials: &str) -> [String; 3] {
    let width = UnicodeWidthStr::width(initials) + 2;
    [
        format!("╭{}╮", "─".repeat(width)),
        format!("│ {initials} │"),
        format!("╰{}╯", "─".repeat(width)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(now: Instant) -> App {
        let themes = theme::builtin::all_builtins();
        App::with_theme(SessionOptions::default(), themes[0].clone(), themes, now)
    }

    fn type_line(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            app.handle_action(Action::Insert(c), now);
        }
    }

    #[test]
    fn monogram_boxes_initials() {
        let rows = monogram("RK");
        assert_eq!(rows[0], "╭────╮");
        assert_eq!(rows[1], "│ RK │");
        assert_eq!(rows[2], "╰────╯");
    }

    #[test]
    fn handle_quit() {
        let now = Instant::now();
        let mut app = app(now);
        assert!(!app.should_quit());
        app.handle_action(Action::Quit, now);
        assert!(app.should_quit());
    }

    #[test]
    fn shutdown_flag_quits() {
        let now = Instant::now();
        let flag = Arc::new(AtomicBool::new(false));
        let app = app(now).with_shutdown_flag(flag.clone());
        assert!(!app.should_quit());
        flag.store(true, Ordering::SeqCst);
        assert!(app.should_quit());
    }

    #[test]
    fn submit_typed_command() {
        let now = Instant::now();
        let mut app = app(now);
        type_line(&mut app, "about", now);
        assert_eq!(app.session().input().as_str(), "about");
        app.handle_action(Action::Submit, now);
        assert!(app.session().input().is_empty());
        assert_eq!(app.session().transcript().len(), 2);
    }

    #[test]
    fn scrolling_back_is_overridden_by_new_content() {
        let now = Instant::now();
        let mut app = app(now);
        app.handle_action(Action::ScrollUp, now);
        assert!(!app.viewport().is_following());
        // Welcome text still animating: the next reveal pins to the bottom.
        assert!(app.tick(now + Duration::from_millis(20)));
        assert!(app.viewport().is_following());
    }

    #[test]
    fn cycle_theme_advances() {
        let now = Instant::now();
        let mut app = app(now);
        let first = app.theme.name.clone();
        app.handle_action(Action::CycleTheme, now);
        assert_ne!(app.theme.name, first);
    }

    #[test]
    fn poll_timeout_tracks_next_deadline() {
        let now = Instant::now();
        let app = app(now);
        assert!(app.poll_timeout(now) <= Duration::from_millis(15));
        assert_eq!(
            app.poll_timeout(now + Duration::from_secs(5)),
            Duration::ZERO
        );
    }

    #[test]
    fn poll_timeout_is_bounded_when_idle() {
        let now = Instant::now();
        let themes = theme::builtin::all_builtins();
        let options = SessionOptions {
            typing_interval: Duration::ZERO,
            ..SessionOptions::default()
        };
        let app = App::with_theme(options, themes[0].clone(), themes, now);
        assert!(app.poll_timeout(now) <= MAX_POLL);
    }
}

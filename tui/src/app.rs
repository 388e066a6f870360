use anyhow::Result;
use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use tokio::time::{sleep, Duration};

use crate::agent::GeneratorHandle;
use crate::widgets::{
    banner::welcome_lines,
    composer::TopicComposer,
    slide_detail::SlideDetail,
    slide_list::{truncate_to_width, SlideList, SlideListPlaceholder},
    status_bar::StatusBar,
};
use finpre_common::FinpreConfig;
use finpre_core::{Event as CoreEvent, GeneratorStatus, ViewSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    Insert,
}

const SIDEBAR_WIDTH: u16 = 42;

pub struct App {
    session: ViewSession,
    mode: Mode,
    should_quit: bool,
    agent: Option<GeneratorHandle>,
    startup_error: Option<String>,
    tick: usize,
}

impl App {
    pub fn new(topic: String) -> Self {
        Self {
            session: ViewSession::new(topic),
            mode: Mode::Normal,
            should_quit: false,
            agent: None,
            startup_error: None,
            tick: 0,
        }
    }

    fn quit(&mut self) {
        self.should_quit = true;
    }

    fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Hand the current topic to the engine. `begin_generation` enforces
    /// the no-op cases (blank topic, run already in flight).
    fn submit(&mut self) {
        if !self.session.begin_generation() {
            return;
        }
        self.mode = Mode::Normal;
        if let Some(agent) = &self.agent {
            agent.submit_topic_bg(self.session.topic().to_string());
        }
    }

    fn apply_event(&mut self, event: CoreEvent) {
        match event {
            CoreEvent::TaskStarted => {}
            CoreEvent::TaskComplete { presentation } => self.session.complete(presentation),
            CoreEvent::Error { message } => self.session.fail(message),
            CoreEvent::ShutdownComplete => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Global shortcut
        if let KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } = key
        {
            self.quit();
            return;
        }

        match self.mode {
            Mode::Insert => self.handle_insert_key(key),
            Mode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_insert_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
            }
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Backspace => {
                let mut topic = self.session.topic().to_string();
                topic.pop();
                self.session.set_topic(topic);
            }
            KeyCode::Char(c) => {
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                    let mut topic = self.session.topic().to_string();
                    topic.push(c);
                    self.session.set_topic(topic);
                }
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit();
            }
            KeyCode::Char('i') => {
                // The topic is frozen while a run is in flight.
                if !self.session.status().is_generating() {
                    self.mode = Mode::Insert;
                }
            }
            KeyCode::Enter | KeyCode::Char('g') => {
                self.submit();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.session.select_next_slide();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.session.select_prev_slide();
            }
            KeyCode::Home => {
                self.session.select_slide(0);
            }
            KeyCode::End => {
                self.session.select_last_slide();
            }
            _ => {}
        }
    }

    fn status_label(&self) -> String {
        match self.session.status() {
            GeneratorStatus::Idle => "Idle".to_string(),
            GeneratorStatus::Generating => "Generating…".to_string(),
            GeneratorStatus::Complete(deck) => {
                format!("Complete ({} slides)", deck.slide_count())
            }
            GeneratorStatus::Error(_) => "Error".to_string(),
        }
    }

    fn banner_error(&self) -> Option<&str> {
        self.session
            .status()
            .error_message()
            .or(self.startup_error.as_deref())
    }

    fn ui(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(f.area());

        self.draw_header(f, chunks[0]);
        self.draw_body(f, chunks[1]);
        self.draw_status_bar(f, chunks[2]);
    }

    fn draw_header(&self, f: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("FinPre", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(".AI", Style::default().fg(Color::Cyan)),
        ];
        if let GeneratorStatus::Complete(deck) = self.session.status() {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                format!("Est. time: {}", deck.total_duration),
                Style::default().fg(Color::Yellow),
            ));
        }
        let header = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(header, area);
    }

    fn draw_body(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(area);

        self.draw_sidebar(f, columns[0]);
        self.draw_main_pane(f, columns[1]);
    }

    fn draw_sidebar(&self, f: &mut Frame, area: Rect) {
        let error_height = if self.banner_error().is_some() { 4 } else { 0 };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),
                Constraint::Length(error_height),
                Constraint::Min(0),
            ])
            .split(area);

        let composer = TopicComposer::new(
            self.session.topic(),
            self.mode == Mode::Insert,
            self.session.status().is_generating(),
        );
        f.render_widget(composer, rows[0]);

        if let Some(message) = self.banner_error() {
            let banner = Paragraph::new(message.to_string())
                .style(Style::default().fg(Color::Red))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red))
                        .title("Error"),
                )
                .wrap(Wrap { trim: true });
            f.render_widget(banner, rows[1]);
        }

        match self.session.status().presentation() {
            Some(deck) => {
                f.render_widget(SlideList::new(deck, self.session.current_slide()), rows[2]);
            }
            None => {
                f.render_widget(SlideListPlaceholder, rows[2]);
            }
        }
    }

    fn draw_main_pane(&self, f: &mut Frame, area: Rect) {
        match self.session.status() {
            GeneratorStatus::Complete(deck) => {
                if let Some(slide) = self.session.selected_slide() {
                    f.render_widget(
                        SlideDetail::new(slide, self.session.current_slide(), deck.slide_count()),
                        area,
                    );
                }
            }
            GeneratorStatus::Generating => {
                let dots = ".".repeat(self.tick / 8 % 4);
                let excerpt = truncate_to_width(self.session.topic(), 48);
                let lines = vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        format!("Structuring presentation{dots}"),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        format!("Synthesizing market analysis for: {excerpt}"),
                        Style::default().fg(Color::Gray),
                    )),
                ];
                let widget = Paragraph::new(lines)
                    .block(Block::default().borders(Borders::ALL))
                    .wrap(Wrap { trim: true });
                f.render_widget(widget, area);
            }
            GeneratorStatus::Idle | GeneratorStatus::Error(_) => {
                let widget = Paragraph::new(welcome_lines())
                    .block(Block::default().borders(Borders::ALL))
                    .wrap(Wrap { trim: false });
                f.render_widget(widget, area);
            }
        }
    }

    fn draw_status_bar(&self, f: &mut Frame, area: Rect) {
        let mode = match self.mode {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
        };
        let status = self.status_label();
        let hints = if self.session.status().is_generating() {
            "waiting for the model  |  Ctrl-q:quit"
        } else {
            "i:edit topic  Enter/g:generate  j/k:slides  q:quit"
        };
        f.render_widget(StatusBar::new(mode, &status, hints), area);
    }
}

pub async fn run_app(config: FinpreConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.starting_topic());
    match GeneratorHandle::spawn(&config).await {
        Ok(agent) => app.agent = Some(agent),
        Err(e) => {
            app.startup_error = Some(format!("failed to start generation engine: {e}"));
        }
    }

    loop {
        terminal.draw(|f| app.ui(f))?;

        // Handle terminal events
        if event::poll(Duration::from_millis(100))? {
            if let TermEvent::Key(key) = event::read()? {
                app.handle_key_event(key);
            }
        }

        // Drain engine events (non-blocking) without holding a borrow on
        // app.agent while applying them.
        let mut drained = Vec::new();
        if let Some(agent) = app.agent.as_mut() {
            while let Ok(event) = agent.rx.try_recv() {
                drained.push(event);
            }
        }
        for event in drained {
            app.apply_event(event);
        }

        if app.should_quit {
            break;
        }

        app.on_tick();
        sleep(Duration::from_millis(16)).await;
    }

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::slide_detail::position_indicator;
    use crate::widgets::slide_list::list_entries;
    use finpre_common::{Presentation, Slide};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_deck() -> Presentation {
        Presentation {
            topic: "X".to_string(),
            total_duration: "45 mins".to_string(),
            slides: vec![
                Slide {
                    title: "Intro".to_string(),
                    bullet_points: vec!["A".to_string(), "B".to_string()],
                    speaker_notes: "Hello.".to_string(),
                    visual_suggestion: "Bar chart of X".to_string(),
                    estimated_duration: "3 mins".to_string(),
                },
                Slide {
                    title: "Conclusion".to_string(),
                    bullet_points: vec!["C".to_string()],
                    speaker_notes: "Bye.".to_string(),
                    visual_suggestion: "Line chart".to_string(),
                    estimated_duration: "2 mins".to_string(),
                },
            ],
        }
    }

    fn app_with_deck() -> App {
        let mut app = App::new("Topic".to_string());
        app.session.begin_generation();
        app.apply_event(CoreEvent::TaskComplete {
            presentation: sample_deck(),
        });
        app
    }

    #[test]
    fn submit_is_a_single_transition_and_blocks_reentry() {
        let mut app = App::new("Topic".to_string());
        app.handle_key_event(key(KeyCode::Char('g')));
        assert!(app.session.status().is_generating());

        // Second press while Generating changes nothing.
        app.handle_key_event(key(KeyCode::Char('g')));
        assert!(app.session.status().is_generating());

        // Editing is refused too.
        app.handle_key_event(key(KeyCode::Char('i')));
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn blank_topic_submission_is_ignored() {
        let mut app = App::new("   ".to_string());
        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(*app.session.status(), GeneratorStatus::Idle);
    }

    #[test]
    fn insert_mode_edits_the_topic() {
        let mut app = App::new(String::new());
        app.handle_key_event(key(KeyCode::Char('i')));
        assert_eq!(app.mode, Mode::Insert);

        app.handle_key_event(key(KeyCode::Char('a')));
        app.handle_key_event(key(KeyCode::Char('b')));
        app.handle_key_event(key(KeyCode::Backspace));
        assert_eq!(app.session.topic(), "a");

        app.handle_key_event(key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn completion_selects_the_first_slide() {
        let app = app_with_deck();
        assert_eq!(app.session.current_slide(), 0);
        assert_eq!(
            app.session.selected_slide().map(|s| s.title.as_str()),
            Some("Intro")
        );
    }

    #[test]
    fn list_and_detail_round_trip_the_sample_deck() {
        let mut app = app_with_deck();
        let deck = sample_deck();

        let entries = list_entries(&deck, 40);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Intro");
        assert_eq!(entries[1].title, "Conclusion");

        // Select the second entry; the detail pane now shows it in full.
        app.handle_key_event(key(KeyCode::Char('j')));
        let slide = app.session.selected_slide().cloned();
        let slide = match slide {
            Some(s) => s,
            None => panic!("expected a selected slide"),
        };
        assert_eq!(slide.title, "Conclusion");
        assert_eq!(slide.bullet_points, vec!["C"]);
        assert_eq!(slide.speaker_notes, "Bye.");
        assert_eq!(slide.visual_suggestion, "Line chart");
        assert_eq!(slide.estimated_duration, "2 mins");
        assert_eq!(
            position_indicator(app.session.current_slide(), deck.slide_count()),
            "2 / 2"
        );
    }

    #[test]
    fn navigation_keys_stay_in_range() {
        let mut app = app_with_deck();
        app.handle_key_event(key(KeyCode::Up)); // already at the top
        assert_eq!(app.session.current_slide(), 0);

        app.handle_key_event(key(KeyCode::Down));
        app.handle_key_event(key(KeyCode::Down)); // past the end, clamped
        assert_eq!(app.session.current_slide(), 1);

        app.handle_key_event(key(KeyCode::Home));
        assert_eq!(app.session.current_slide(), 0);
        app.handle_key_event(key(KeyCode::End));
        assert_eq!(app.session.current_slide(), 1);
    }

    #[test]
    fn failure_event_shows_an_error_banner_over_any_prior_deck() {
        let mut app = app_with_deck();
        app.handle_key_event(key(KeyCode::Char('g')));
        app.apply_event(CoreEvent::Error {
            message: "generation service returned HTTP 500: boom".to_string(),
        });

        assert!(app.banner_error().is_some());
        assert!(app.session.status().presentation().is_none());
        assert_eq!(app.status_label(), "Error");
    }
}

//! TUI application state and logic

use super::rendering::{Target, target_at};
use crate::config::GameConfig;
use crate::core::{CODE_LENGTH, Color};
use crate::game::{Event, IgnoreReason, Outcome, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tracing::{debug, info};

/// Application state
pub struct App {
    pub session: Session,
    /// Slot of the active row that Delete acts on
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Terminal area of the last draw, for mapping clicks
    pub screen: Rect,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of attempts used (index 0 unused)
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, won: bool, attempts_used: usize) {
        self.total_games += 1;
        if won {
            self.games_won += 1;
            if self.guess_distribution.len() <= attempts_used {
                self.guess_distribution.resize(attempts_used + 1, 0);
            }
            self.guess_distribution[attempts_used] += 1;
        }
    }

    /// Mean attempts per won game
    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }
        let total: usize = self
            .guess_distribution
            .iter()
            .enumerate()
            .map(|(attempts, &wins)| attempts * wins)
            .sum();
        Some(total as f64 / self.games_won as f64)
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            session: Session::new(config),
            cursor: 0,
            messages: vec![
                Message {
                    text: format!(
                        "Crack the code in {} attempts. Colors may repeat.",
                        config.max_attempts()
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type color letters, Enter to submit.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            screen: Rect::default(),
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if let KeyCode::Char('c') = code
            && modifiers.contains(KeyModifiers::CONTROL)
        {
            self.should_quit = true;
            return;
        }

        if self.session.is_over() {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                // Game over: ignore other keys
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char(c) => {
                if let Some(color) = color_for_key(c) {
                    self.place(color);
                }
            }
            KeyCode::Backspace => self.remove_last(),
            KeyCode::Delete => self.remove_at_cursor(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(CODE_LENGTH - 1),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Handle a left click: a palette entry places its color, a slot of the
    /// active row is cleared
    pub fn handle_click(&mut self, column: u16, row: u16) {
        if self.session.is_over() {
            return;
        }
        match target_at(self.screen, self, column, row) {
            Some(Target::Palette(color)) => self.place(color),
            Some(Target::Slot(slot)) => {
                self.cursor = slot;
                self.remove_at_cursor();
            }
            None => {}
        }
    }

    fn active_filled(&self) -> usize {
        self.session
            .active_attempt()
            .map_or(0, |attempt| attempt.code().filled())
    }

    fn place(&mut self, color: Color) {
        let outcome = self.session.apply(Event::PlaceColor(color));
        if outcome == Outcome::Ignored(IgnoreReason::CodeFull) {
            self.add_message("Row is full. Enter to submit.", MessageStyle::Error);
        }
    }

    fn remove_last(&mut self) {
        if let Some(last) = self.active_filled().checked_sub(1) {
            self.session.apply(Event::RemoveColor(last));
            self.cursor = self.cursor.min(last);
        }
    }

    fn remove_at_cursor(&mut self) {
        if !self.session.apply(Event::RemoveColor(self.cursor)).is_applied() {
            self.add_message("That slot is already empty.", MessageStyle::Error);
        }
    }

    pub fn submit(&mut self) {
        match self.session.apply(Event::Submit) {
            Outcome::Applied => {}
            Outcome::Ignored(_) => {
                self.add_message("Fill all four slots first!", MessageStyle::Error);
                return;
            }
        }
        self.cursor = 0;

        let used = self.session.max_attempts() - self.session.remaining_attempts();
        if self.session.is_won() {
            self.stats.record(true, used);
            let celebration = match used {
                1 => "🎯 FIRST TRY! Were you peeking? 🌟",
                2 | 3 => "🔥 MAGNIFICENT! Cracked in a flash! 🔥",
                4 | 5 => "✨ SPLENDID! Nicely deduced! ✨",
                6 | 7 => "👏 GREAT JOB! 👏",
                _ => "😅 PHEW! Just in time! 😅",
            };
            info!(attempts = used, "Game won");
            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else if self.session.is_over() {
            self.stats.record(false, used);
            info!("Game lost");
            self.add_message(
                &format!("Out of attempts! The code was {}.", self.session.secret()),
                MessageStyle::Error,
            );
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else if let Some(feedback) = self
            .session
            .attempts()
            .get(used - 1)
            .and_then(|attempt| attempt.feedback())
        {
            self.add_message(
                &format!(
                    "{} exact, {} partial. {} attempts left.",
                    feedback.exact(),
                    feedback.partial(),
                    self.session.remaining_attempts()
                ),
                MessageStyle::Info,
            );
        }
    }

    pub fn new_game(&mut self) {
        self.session.apply(Event::Reset);
        self.cursor = 0;
        self.messages.clear();
        self.add_message("New game started! A fresh code awaits.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Color letters, or digits 1-8 for palette positions
fn color_for_key(c: char) -> Option<Color> {
    c.to_digit(10)
        .and_then(|d| (d as usize).checked_sub(1))
        .and_then(Color::from_index)
        .or_else(|| Color::from_letter(c))
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            app.screen = f.area();
            super::rendering::ui(f, &app);
        })?;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                debug!(code = ?key.code, "Key pressed");
                app.handle_key(key.code, key.modifiers);
            }
            TermEvent::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                debug!(column = mouse.column, row = mouse.row, "Click");
                app.handle_click(mouse.column, mouse.row);
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;

    fn app() -> App {
        App::new(&GameConfig::default().with_seed(5))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE);
    }

    fn active_code(app: &App) -> String {
        app.session.active_attempt().unwrap().code().to_string()
    }

    #[test]
    fn letters_and_digits_place_colors() {
        let mut app = app();
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('8'));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(active_code(&app), "RK__");
    }

    #[test]
    fn backspace_removes_last_color() {
        let mut app = app();
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(active_code(&app), "G___");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(active_code(&app), "____");
    }

    #[test]
    fn delete_removes_at_cursor() {
        let mut app = app();
        for c in ['r', 'y', 'g'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Delete);
        assert_eq!(active_code(&app), "RG__");
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = app();
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.cursor, CODE_LENGTH - 1);
    }

    #[test]
    fn enter_submits_full_row_only() {
        let mut app = app();
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.state(), GameState::InProgress { active: 0 });
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        for c in ['r', 'r', 'r'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.session.attempts()[0].is_verified());
    }

    #[test]
    fn playing_out_records_statistics() {
        let mut app = App::new(&GameConfig::new(1).unwrap().with_seed(5));
        let secret = app.session.secret().to_string();
        for c in secret.chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(app.session.is_won());
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn game_over_only_accepts_new_or_quit() {
        let mut app = App::new(&GameConfig::new(1).unwrap().with_seed(5));
        let secret = app.session.secret().to_string();
        for c in secret.chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('r'));
        assert!(app.session.is_over());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.state(), GameState::InProgress { active: 0 });

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    /// Screen cell of a palette entry on a 100x30 screen
    fn palette_cell(color_index: u16) -> (u16, u16) {
        // Palette block starts at column 55, row 3; entries are 5 cells wide
        (56 + 5 * color_index, 4)
    }

    /// Screen cell of a slot of attempt 1 on a 100x30 screen with ten rows
    fn slot_cell(slot: u16) -> (u16, u16) {
        // Board block at column 0, row 3; attempt 1 is the tenth line
        (1 + 4 + 2 * slot, 4 + 9)
    }

    #[test]
    fn clicks_place_and_remove_colors() {
        let mut app = app();
        app.screen = Rect::new(0, 0, 100, 30);

        let (x, y) = palette_cell(0);
        app.handle_click(x, y);
        let (x, y) = palette_cell(3);
        app.handle_click(x, y);
        app.handle_click(x, y);
        assert_eq!(active_code(&app), "RBB_");

        let (x, y) = slot_cell(0);
        app.handle_click(x, y);
        assert_eq!(active_code(&app), "BB__");
        assert_eq!(app.cursor, 0);

        let (x, y) = slot_cell(3);
        app.handle_click(x, y);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn clicks_ignored_after_game_over() {
        let mut app = App::new(&GameConfig::new(1).unwrap().with_seed(5));
        app.screen = Rect::new(0, 0, 100, 30);
        let secret = app.session.secret().to_string();
        for c in secret.chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        let (x, y) = palette_cell(0);
        app.handle_click(x, y);
        assert!(app.session.is_won());
        assert_eq!(app.session.attempts()[0].code().to_string(), secret);
    }

    #[test]
    fn average_attempts_counts_wins_only() {
        let mut stats = Statistics::default();
        assert_eq!(stats.average_attempts(), None);
        stats.record(true, 2);
        stats.record(true, 5);
        stats.record(false, 10);
        assert_eq!(stats.average_attempts(), Some(3.5));
        assert_eq!(stats.guess_distribution[5], 1);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("msg {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "msg 9");
    }
}

//! TUI rendering with ratatui
//!
//! Board, palette and status panels for the game screen.

use super::app::{App, MessageStyle};
use crate::core::{CODE_LENGTH, Code, Color as PegColor, Feedback, FeedbackMarker};
use crate::game::RowView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Width of one palette entry: peg, space, letter, two spaces
const PALETTE_CELL: u16 = 5;
/// Palette entries per line
const PALETTE_COLUMNS: usize = 4;
/// Row number column in front of each board row
const ROW_PREFIX: u16 = 4;
/// A peg and its separator
const SLOT_CELL: u16 = 2;

/// Screen regions, shared by drawing and mouse hit-testing
pub(super) struct Screen {
    pub header: Rect,
    pub board: Rect,
    pub palette: Rect,
    pub attempts: Rect,
    pub messages: Rect,
    pub input: Rect,
    pub status: Rect,
}

pub(super) fn screen(area: Rect) -> Screen {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Input hints
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    let info_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Palette
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(4),    // Messages
        ])
        .split(main_chunks[1]);

    Screen {
        header: chunks[0],
        board: main_chunks[0],
        palette: info_chunks[0],
        attempts: info_chunks[1],
        messages: info_chunks[2],
        input: chunks[2],
        status: chunks[3],
    }
}

/// Something on screen a click can act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Target {
    /// A palette entry
    Palette(PegColor),
    /// A slot of the active row
    Slot(usize),
}

/// First board line shown, keeping the active row (or the revealed code)
/// inside a board of `height` inner lines
fn board_scroll(rows: usize, active: Option<usize>, height: u16) -> u16 {
    let focus = match active {
        Some(active) => rows - 1 - active,
        // Rows, a blank line and the revealed code
        None => rows + 1,
    };
    (focus + 1).saturating_sub(usize::from(height)) as u16
}

/// Map a click at (`column`, `row`) to a palette entry or an active-row slot
pub(super) fn target_at(area: Rect, app: &App, column: u16, row: u16) -> Option<Target> {
    let screen = screen(area);
    palette_target(screen.palette, column, row).or_else(|| {
        let active = app.session.active_index()?;
        slot_target(
            screen.board,
            app.session.max_attempts(),
            active,
            column,
            row,
        )
    })
}

fn palette_target(palette: Rect, column: u16, row: u16) -> Option<Target> {
    let cells = inner(palette);
    if !contains(cells, column, row) {
        return None;
    }
    let line = usize::from(row - cells.y);
    let entry = usize::from((column - cells.x) / PALETTE_CELL);
    if entry >= PALETTE_COLUMNS {
        return None;
    }
    PegColor::from_index(line * PALETTE_COLUMNS + entry).map(Target::Palette)
}

fn slot_target(board: Rect, rows: usize, active: usize, column: u16, row: u16) -> Option<Target> {
    let cells = inner(board);
    if !contains(cells, column, row) {
        return None;
    }
    let line = usize::from(row - cells.y + board_scroll(rows, Some(active), cells.height));
    if line != rows - 1 - active {
        return None;
    }
    let slot = usize::from((column - cells.x).checked_sub(ROW_PREFIX)? / SLOT_CELL);
    (slot < CODE_LENGTH).then_some(Target::Slot(slot))
}

/// Area inside a one-cell border
fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let screen = screen(f.area());

    render_header(f, screen.header);
    render_board(f, app, screen.board);
    render_palette(f, screen.palette);
    render_attempts(f, app, screen.attempts);
    render_messages(f, app, screen.messages);
    render_input(f, app, screen.input);
    render_status(f, app, screen.status);
}

/// Terminal color for a peg
fn term_color(color: PegColor) -> Color {
    match color {
        PegColor::Red => Color::Red,
        PegColor::Yellow => Color::Yellow,
        PegColor::Green => Color::Green,
        PegColor::Blue => Color::Blue,
        PegColor::Orange => Color::Rgb(255, 165, 0),
        PegColor::Purple => Color::Magenta,
        PegColor::Cyan => Color::Cyan,
        PegColor::Pink => Color::Rgb(255, 105, 180),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Crack the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn code_spans(code: &Code, cursor: Option<usize>) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(CODE_LENGTH * 2);
    for (i, slot) in code.slots().iter().enumerate() {
        let mut span = match slot {
            Some(color) => Span::styled("●", Style::default().fg(term_color(*color))),
            None => Span::styled("○", Style::default().fg(Color::DarkGray)),
        };
        if cursor == Some(i) {
            span = span.patch_style(
                Style::default().add_modifier(Modifier::UNDERLINED | Modifier::BOLD),
            );
        }
        spans.push(span);
        spans.push(Span::raw(" "));
    }
    spans
}

fn feedback_spans(feedback: Option<Feedback>) -> Vec<Span<'static>> {
    let Some(feedback) = feedback else {
        return vec![Span::raw(" ".repeat(CODE_LENGTH))];
    };
    let mut spans: Vec<Span<'static>> = feedback
        .markers()
        .map(|m| match m {
            FeedbackMarker::ExactMatch => Span::styled(
                "●",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            FeedbackMarker::PartialMatch => Span::styled("○", Style::default().fg(Color::Gray)),
        })
        .collect();
    for _ in feedback.len()..CODE_LENGTH {
        spans.push(Span::styled("·", Style::default().fg(Color::DarkGray)));
    }
    spans
}

fn row_line(index: usize, row: &RowView, cursor: usize) -> Line<'static> {
    let number_style = if row.active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled(format!("{:>2}  ", index + 1), number_style)];
    spans.extend(code_spans(&row.code, row.active.then_some(cursor)));
    spans.push(Span::raw("  "));
    spans.extend(feedback_spans(row.feedback));
    if row.active {
        spans.push(Span::styled("  ◀", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.session.view();

    // Newest attempts at the top, like a physical board read from the player's side
    let mut lines: Vec<Line> = board
        .rows
        .iter()
        .enumerate()
        .rev()
        .map(|(i, row)| row_line(i, row, app.cursor))
        .collect();

    if let Some(secret) = board.secret {
        lines.push(Line::from(""));
        let mut spans = vec![Span::styled(
            "Code: ",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        spans.extend(code_spans(&secret, None));
        lines.push(Line::from(spans));
    }

    let (title, color) = match (board.over, board.won) {
        (true, true) => (" 🎉 Solved! ", Color::Green),
        (true, false) => (" 💥 Out of attempts ", Color::Red),
        _ => (" Board ", Color::White),
    };

    let scroll = board_scroll(
        board.rows.len(),
        app.session.active_index(),
        area.height.saturating_sub(2),
    );
    let paragraph = Paragraph::new(lines)
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );

    f.render_widget(paragraph, area);
}

fn render_palette(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = PegColor::ALL
        .chunks(PALETTE_COLUMNS)
        .map(|group| {
            let spans: Vec<Span> = group
                .iter()
                .flat_map(|&color| {
                    [
                        Span::styled("● ", Style::default().fg(term_color(color))),
                        Span::styled(
                            format!("{}  ", color.letter()),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    lines.push(Line::from(vec![
        Span::styled("●", Style::default().fg(Color::White)),
        Span::raw(" right spot  "),
        Span::styled("○", Style::default().fg(Color::Gray)),
        Span::raw(" wrong spot"),
    ]));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Palette ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.session.remaining_attempts();
    let total = app.session.max_attempts();
    let percent = (remaining * 100 / total.max(1)) as u16;

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{remaining}/{total} attempts left"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = if app.session.is_over() {
        ("n / Enter: new game | q: quit", Color::Green)
    } else {
        (
            "R Y G B O P C K or 1-8: place | Backspace: undo | ←/→ + Del: remove | Enter: submit",
            Color::Yellow,
        )
    };

    let input = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let mode_text = match app.session.active_index() {
        Some(active) => format!("Attempt {}/{}", active + 1, app.session.max_attempts()),
        None if app.session.is_won() => "Solved".to_string(),
        None => "Game over".to_string(),
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = match app.stats.average_attempts() {
        Some(average) => format!(
            "Won {}/{} ({:.0}%) · avg {average:.1}",
            app.stats.games_won,
            app.stats.total_games,
            app.stats.win_rate()
        ),
        None => format!("Games: {}", app.stats.total_games),
    };
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("q: Quit | n: New Game")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn feedback_spans_pad_to_code_length() {
        assert_eq!(feedback_spans(Some(Feedback::new(1, 1))).len(), CODE_LENGTH);
        assert_eq!(feedback_spans(None).len(), 1);
    }

    #[test]
    fn code_spans_include_separators() {
        let code: Code = "RYGB".parse().unwrap();
        assert_eq!(code_spans(&code, None).len(), CODE_LENGTH * 2);
    }

    #[test]
    fn ui_renders_without_panicking() {
        let app = App::new(&GameConfig::default().with_seed(2));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("MASTERMIND"));
        assert!(text.contains("10/10 attempts left"));
    }

    #[test]
    fn clicks_map_to_palette_entries() {
        let area = Rect::new(0, 0, 100, 30);
        let app = App::new(&GameConfig::default().with_seed(2));
        let palette = inner(screen(area).palette);

        let at = |column, row| target_at(area, &app, column, row);
        assert_eq!(at(palette.x, palette.y), Some(Target::Palette(PegColor::Red)));
        assert_eq!(
            at(palette.x + PALETTE_CELL + 2, palette.y),
            Some(Target::Palette(PegColor::Yellow))
        );
        assert_eq!(
            at(palette.x + 3 * PALETTE_CELL, palette.y + 1),
            Some(Target::Palette(PegColor::Pink))
        );
        // Legend line and the space past the last entry
        assert_eq!(at(palette.x, palette.y + 2), None);
        assert_eq!(at(palette.x + 4 * PALETTE_CELL, palette.y), None);
    }

    #[test]
    fn clicks_map_to_active_row_slots_only() {
        let area = Rect::new(0, 0, 100, 30);
        let app = App::new(&GameConfig::default().with_seed(2));
        let board = inner(screen(area).board);
        // Attempt 1 is drawn last of the ten rows
        let active_row = board.y + 9;

        let at = |column, row| target_at(area, &app, column, row);
        assert_eq!(at(board.x + ROW_PREFIX, active_row), Some(Target::Slot(0)));
        assert_eq!(
            at(board.x + ROW_PREFIX + 3 * SLOT_CELL, active_row),
            Some(Target::Slot(3))
        );
        assert_eq!(at(board.x + 1, active_row), None);
        assert_eq!(at(board.x + ROW_PREFIX + 4 * SLOT_CELL, active_row), None);
        assert_eq!(at(board.x + ROW_PREFIX, active_row - 1), None);
    }

    #[test]
    fn board_scrolls_to_keep_active_row_visible() {
        assert_eq!(board_scroll(10, Some(0), 19), 0);
        assert_eq!(board_scroll(99, Some(0), 19), 80);
        assert_eq!(board_scroll(99, Some(98), 19), 0);
        // Finished game scrolls down to the revealed code
        assert_eq!(board_scroll(99, None, 19), 82);
    }
}

//! TUI rendering with ratatui
//!
//! Draws a [`GameView`]; holds no game logic of its own.

use super::app::{Message, MessageStyle};
use crate::core::{Colour, MAX_GUESSES, WORD_LENGTH};
use crate::game::{GameResult, GameStatus, GameView, KeyClass, KeyView, RowView, Summary};
use crate::output::formatters::create_progress_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 3;

/// Main UI rendering function
pub fn ui(f: &mut Frame, view: &GameView, messages: &[Message]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                  // Header
            Constraint::Length(CELL_HEIGHT * MAX_GUESSES as u16 + 2), // Board
            Constraint::Length(5),                                  // Keyboard
            Constraint::Min(3),                                     // Messages
            Constraint::Length(1),                                  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, view, chunks[1]);
    render_keyboard(f, &view.keyboard, chunks[2]);
    render_messages(f, messages, chunks[3]);
    render_status(f, view.status, chunks[4]);

    if let Some(summary) = &view.modal {
        render_summary(f, summary);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

const fn colour_style(colour: Option<Colour>) -> Style {
    match colour {
        Some(Colour::Correct) => Style::new().bg(Color::Green).fg(Color::Black),
        Some(Colour::Present) => Style::new().bg(Color::Yellow).fg(Color::Black),
        Some(Colour::Absent) => Style::new().bg(Color::DarkGray).fg(Color::White),
        None => Style::new(),
    }
}

fn render_board(f: &mut Frame, view: &GameView, area: Rect) {
    let board_width = CELL_WIDTH * WORD_LENGTH as u16;
    let x = area.x + area.width.saturating_sub(board_width) / 2;

    for (i, row) in view.rows.iter().enumerate() {
        let y = area.y + 1 + CELL_HEIGHT * i as u16;
        // A jiggling row is drawn one column off
        let row_x = if row.jiggle { x + 1 } else { x };
        render_row(f, row, Rect::new(row_x, y, board_width, CELL_HEIGHT), area);
    }
}

fn render_row(f: &mut Frame, row: &RowView, rect: Rect, bounds: Rect) {
    for (pos, (letter, colour)) in row.letters.iter().zip(&row.colours).enumerate() {
        let cell = Rect::new(
            rect.x + CELL_WIDTH * pos as u16,
            rect.y,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(bounds);
        if cell.is_empty() {
            continue;
        }

        let border = if row.jiggle {
            Style::default().fg(Color::Red)
        } else if row.active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let text = letter.map(String::from).unwrap_or_default();
        let widget = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(colour_style(*colour).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border),
            );
        f.render_widget(widget, cell);
    }
}

fn key_style(key: &KeyView) -> Style {
    let colour = match key.classes.class {
        KeyClass::Unset => None,
        KeyClass::Absent => Some(Colour::Absent),
        KeyClass::Present => Some(Colour::Present),
        KeyClass::Correct => Some(Colour::Correct),
    };
    let style = colour_style(colour);
    if key.classes.active {
        style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        style
    }
}

fn render_keyboard(f: &mut Frame, keyboard: &[Vec<KeyView>], area: Rect) {
    let lines: Vec<Line> = keyboard
        .iter()
        .map(|keys| {
            let spans: Vec<Span> = keys
                .iter()
                .flat_map(|key| {
                    [
                        Span::styled(format!(" {} ", key.key), key_style(key)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, messages: &[Message], area: Rect) {
    let items: Vec<ListItem> = messages
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

    let list = List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, status: GameStatus, area: Rect) {
    let help = match status {
        GameStatus::Playing => "A-Z: type | Enter: submit | Backspace: delete | Ctrl-N: new game | Esc: quit",
        GameStatus::Won | GameStatus::Lost => "Ctrl-N: new game | Esc: quit",
    };
    let status = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_summary(f: &mut Frame, summary: &Summary) {
    let area = centered(48, 22, f.area());
    f.render_widget(Clear, area);

    let (title, colour) = match summary.result {
        GameResult::Won { .. } => (" 🎉 SOLVED! 🎉 ", Color::Green),
        GameResult::Lost => (" Out of guesses ", Color::Red),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Answer: "),
            Span::styled(
                summary.answer.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
    ];

    // Statistic values on one line, their captions below, word per line
    let values: Vec<Span> = summary
        .statistics
        .iter()
        .map(|s| {
            Span::styled(
                format!("{:^10}", s.value),
                Style::default().add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    lines.push(Line::from(values));
    for line in 0..2 {
        let captions: Vec<Span> = summary
            .statistics
            .iter()
            .map(|s| Span::raw(format!("{:^10}", s.lines().nth(line).unwrap_or(""))))
            .collect();
        lines.push(Line::from(captions));
    }

    lines.push(Line::default());
    lines.push(Line::from("Guess distribution:"));
    let max = summary.distribution.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in summary.distribution.iter().enumerate() {
        let highlight = matches!(summary.result, GameResult::Won { guesses } if guesses == i + 1);
        let bar_style = if highlight {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::raw(format!(" {} ", i + 1)),
            Span::styled(
                create_progress_bar(f64::from(count), f64::from(max), 30),
                bar_style,
            ),
            Span::raw(format!(" {count}")),
        ]));
    }

    lines.push(Line::default());
    lines.extend(summary.share.lines().map(|l| Line::from(l.to_string())));

    let popup = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(colour)),
    );
    f.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::Game;
    use crate::input::Key;
    use crate::store::MemoryStorage;
    use crate::words::WordSource;
    use crate::words::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_board_keyboard_and_summary() {
        let words =
            WordSource::new(words_from_slice(&["erase"]), words_from_slice(&["crane"])).unwrap();
        let mut game = Game::new(words, MemoryStorage::new(), &GameConfig::default());
        for c in "erase".chars() {
            game.press(Key::letter(c).unwrap()).unwrap();
        }

        let backend = TestBackend::new(80, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = game.view();
        terminal.draw(|f| ui(f, &view, &[])).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Messages"));
        assert!(text.contains('Q'));

        game.press(Key::Submit).unwrap();
        let view = game.view();
        terminal.draw(|f| ui(f, &view, &[])).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("ERASE"));
        assert!(text.contains("Guess distribution"));
    }

    #[test]
    fn centered_fits_inside_area() {
        let area = Rect::new(0, 0, 20, 10);
        let popup = centered(48, 22, area);
        assert_eq!(popup, area);

        let popup = centered(10, 4, area);
        assert_eq!(popup, Rect::new(5, 3, 10, 4));
    }
}

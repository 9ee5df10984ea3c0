//! UI rendering using ratatui.

mod board;

use crate::app::App;
use crate::store::BestScoreStore;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub use board::render_board;

const ACCENT: Color = Color::Rgb(0x7e, 0x22, 0xce);
const PANEL: Color = Color::Rgb(0xa8, 0x55, 0xf7);

/// Draws the main UI.
pub fn draw<S: BestScoreStore, R: Rng>(f: &mut Frame, app: &App<S, R>) {
    let session = app.session();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Strictly 2048")
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_scores(f, chunks[1], session.score(), session.best_score());
    render_board(f, chunks[2], session.grid());

    if session.game_over() {
        let detail = format!("Score: {}", session.score());
        render_banner(f, chunks[2], "Game over!", &detail, "n: new game");
    } else if session.won() {
        render_banner(
            f,
            chunks[2],
            "You win!",
            "You made 2048!",
            "c: keep playing  n: new game",
        );
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[3]);

    let help = Paragraph::new("←↑→↓ / WASD / HJKL: Move | N: New game | C: Continue | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[4]);
}

fn render_scores(f: &mut Frame, area: Rect, score: u64, best: u64) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(center_rect(area, 40, area.height));

    for (col, label, value) in [(cols[0], "Score", score), (cols[1], "Best", best)] {
        let widget = Paragraph::new(value.to_string())
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(PANEL))
                    .title(label),
            );
        f.render_widget(widget, col);
    }
}

fn render_banner(f: &mut Frame, area: Rect, headline: &str, detail: &str, hint: &str) {
    let banner = center_rect(area, 36, 7);
    let text = vec![
        Line::from(Span::styled(
            headline,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(detail),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        );
    f.render_widget(Clear, banner);
    f.render_widget(paragraph, banner);
}

/// Centers a `width` x `height` rectangle inside `area`.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}

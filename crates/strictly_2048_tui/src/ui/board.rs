//! 2048 board rendering.

use super::center_rect;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use strictly_2048::{GRID_SIZE, Grid, Tile};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;
const GAP: u16 = 1;

const LIGHT_TEXT: Color = Color::Rgb(0x6b, 0x21, 0xa8);

/// Style for a tile: purple shades darkening as the value grows.
pub fn tile_style(tile: Tile) -> Style {
    let (bg, fg) = match tile {
        0 => (Color::Rgb(0x3a, 0x34, 0x40), Color::DarkGray),
        2 => (Color::Rgb(0xe9, 0xd5, 0xff), LIGHT_TEXT),
        4 => (Color::Rgb(0xd8, 0xb4, 0xfe), LIGHT_TEXT),
        8 => (Color::Rgb(0xc0, 0x84, 0xfc), Color::White),
        16 => (Color::Rgb(0xa8, 0x55, 0xf7), Color::White),
        32 => (Color::Rgb(0x93, 0x33, 0xea), Color::White),
        64 => (Color::Rgb(0x7e, 0x22, 0xce), Color::White),
        128 => (Color::Rgb(0x6b, 0x21, 0xa8), Color::White),
        256 => (Color::Rgb(0x58, 0x1c, 0x87), Color::White),
        512 => (Color::Rgb(0x4c, 0x1d, 0x95), Color::White),
        1024 => (Color::Rgb(0x3b, 0x07, 0x64), Color::White),
        2048 => (Color::Rgb(0x2e, 0x10, 0x65), Color::White),
        _ => (Color::Rgb(0xa7, 0x8b, 0xfa), Color::White),
    };
    let style = Style::default().bg(bg).fg(fg);
    if tile == 0 {
        style
    } else {
        style.add_modifier(Modifier::BOLD)
    }
}

/// Renders the board centred in `area`.
pub fn render_board(f: &mut Frame, area: Rect, grid: &Grid) {
    let size = GRID_SIZE as u16;
    let width = size * TILE_WIDTH + (size - 1) * GAP + 2;
    let height = size * TILE_HEIGHT + (size - 1) * GAP + 2;
    let board_area = center_rect(area, width, height);

    let frame = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(0xa8, 0x55, 0xf7)));
    let inner = frame.inner(board_area);
    f.render_widget(frame, board_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(track(TILE_HEIGHT))
        .split(inner);

    for (row, tiles) in grid.rows().iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(track(TILE_WIDTH))
            .split(rows[row * 2]);
        for (col, &tile) in tiles.iter().enumerate() {
            render_tile(f, cols[col * 2], tile);
        }
    }
}

/// Alternating tile/gap constraints along one axis.
fn track(tile: u16) -> Vec<Constraint> {
    (0..GRID_SIZE)
        .flat_map(|i| {
            let gap = (i + 1 < GRID_SIZE).then_some(Constraint::Length(GAP));
            std::iter::once(Constraint::Length(tile)).chain(gap)
        })
        .collect()
}

fn render_tile(f: &mut Frame, area: Rect, tile: Tile) {
    let label = if tile == 0 { String::new() } else { tile.to_string() };
    let mut lines = vec![Line::from(""); (area.height.saturating_sub(1) / 2) as usize];
    lines.push(Line::from(label));
    let paragraph = Paragraph::new(lines)
        .style(tile_style(tile))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

//! Stateless rendering of the canvas and mapping of input onto it.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictactoe_core::{Canvas, Position, SurfaceEvent};

/// Width of one cell including its border.
const CELL_WIDTH: u16 = 9;
/// Height of one cell including its border.
const CELL_HEIGHT: u16 = 5;

/// Cell areas from the last frame, used for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardLayout {
    cells: [Rect; 9],
}

impl BoardLayout {
    /// Event for a mouse click at `column`, `row`.
    ///
    /// While the result overlay is showing it covers the whole screen, so
    /// any click dismisses it.
    pub fn hit_test(&self, column: u16, row: u16, overlay_showing: bool) -> Option<SurfaceEvent> {
        if overlay_showing {
            return Some(SurfaceEvent::OverlayClicked);
        }
        Position::ALL
            .into_iter()
            .find(|p| contains(self.cells[p.to_index()], column, row))
            .map(SurfaceEvent::CellClicked)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

/// Event for a left mouse press, if it lands anywhere useful.
///
/// `overlay_showing` should reflect the canvas when the press is handled,
/// not when the layout was drawn.
pub fn mouse_event(
    layout: &BoardLayout,
    mouse: MouseEvent,
    overlay_showing: bool,
) -> Option<SurfaceEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            layout.hit_test(mouse.column, mouse.row, overlay_showing)
        }
        _ => None,
    }
}

/// Keyboard stand-ins for clicks: digits 1-9 pick a cell, Enter or Space
/// dismisses the result.
pub fn key_event(code: KeyCode, overlay_showing: bool) -> Option<SurfaceEvent> {
    if overlay_showing {
        return match code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(SurfaceEvent::OverlayClicked),
            _ => None,
        };
    }
    match code {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index)
            .map(SurfaceEvent::CellClicked),
        _ => None,
    }
}

/// Renders the canvas and returns where everything was drawn.
pub fn draw(frame: &mut Frame, canvas: &Canvas) -> BoardLayout {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3 * CELL_HEIGHT),
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let cells = draw_board(frame, chunks[1], canvas);

    let status = match canvas.overlay() {
        Some(_) => "Click anywhere or press Enter for a new match. q quits.",
        None => "Click a cell (or press 1-9). q quits.",
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    if let Some(message) = canvas.overlay() {
        draw_overlay(frame, area, message);
    }

    BoardLayout { cells }
}

fn draw_board(frame: &mut Frame, area: Rect, canvas: &Canvas) -> [Rect; 9] {
    let board_area = center_rect(area, 3 * CELL_WIDTH, 3 * CELL_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (r, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row);
        for (c, col) in cols.iter().enumerate() {
            cells[r * 3 + c] = *col;
        }
    }

    for position in Position::ALL {
        draw_cell(frame, cells[position.to_index()], canvas, position);
    }
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, canvas: &Canvas, position: Position) {
    let cell = canvas.cell(position);
    let style = match cell.value.as_str() {
        "cross" => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        "nought" => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::DarkGray),
    };

    let paragraph = Paragraph::new(Text::raw(cell.payload.as_str()))
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}

fn draw_overlay(frame: &mut Frame, area: Rect, message: &str) {
    let popup = center_rect(area, 30, 5);
    frame.render_widget(Clear, popup);
    let paragraph = Paragraph::new(format!("\n{message}"))
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Game over")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    frame.render_widget(paragraph, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

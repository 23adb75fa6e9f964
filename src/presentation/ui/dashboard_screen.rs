//! Home screen: greeting, wallet card and the service tiles.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::domain::entities::{ServiceKind, TileCategory, ViewState};

const CATEGORIES: [TileCategory; 4] = [
    TileCategory::Payments,
    TileCategory::Transfers,
    TileCategory::Government,
    TileCategory::Documents,
];

const SAMPLE_BALANCE: &str = "$2,450.75";

const SAMPLE_ACTIVITY: &[(&str, &str, &str)] = &[
    ("Oct 14", "BPL Electricity", "-$75.00"),
    ("Oct 01", "Salary - Ministry of Works", "+$1,850.00"),
    ("Sep 28", "Cable Bahamas", "-$89.99"),
    ("Sep 25", "Transfer from Mark R.", "+$120.00"),
];

const TILE_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub label: &'static str,
    pub view: ViewState,
}

fn tiles_in(category: TileCategory) -> Vec<Tile> {
    if category == TileCategory::Documents {
        return vec![Tile {
            label: "Document Locker",
            view: ViewState::DocumentLocker,
        }];
    }
    ServiceKind::ALL
        .into_iter()
        .filter(|kind| kind.category() == category)
        .map(|kind| Tile {
            label: kind.title(),
            view: ViewState::Service(kind),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    None,
    Open(ViewState),
    Quit,
}

/// Category row and column of the highlighted tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileCursor {
    row: usize,
    col: usize,
}

pub struct DashboardScreen {
    rows: Vec<Vec<Tile>>,
    cursor: TileCursor,
    first_name: Option<String>,
}

impl DashboardScreen {
    #[must_use]
    pub fn new(first_name: Option<String>) -> Self {
        Self {
            rows: CATEGORIES.into_iter().map(tiles_in).collect(),
            cursor: TileCursor::default(),
            first_name,
        }
    }

    /// Restores the cursor from a previous mount.
    #[must_use]
    pub fn with_cursor(mut self, cursor: TileCursor) -> Self {
        self.cursor = cursor;
        self.clamp_col();
        self
    }

    #[must_use]
    pub const fn cursor(&self) -> TileCursor {
        self.cursor
    }

    #[must_use]
    pub fn selected(&self) -> Option<Tile> {
        self.rows
            .get(self.cursor.row)
            .and_then(|row| row.get(self.cursor.col))
            .copied()
    }

    fn clamp_col(&mut self) {
        self.cursor.row = self.cursor.row.min(self.rows.len().saturating_sub(1));
        let len = self.rows.get(self.cursor.row).map_or(0, Vec::len);
        self.cursor.col = self.cursor.col.min(len.saturating_sub(1));
    }

    fn move_row(&mut self, down: bool) {
        let rows = self.rows.len();
        self.cursor.row = if down {
            (self.cursor.row + 1) % rows
        } else {
            self.cursor.row.checked_sub(1).unwrap_or(rows - 1)
        };
        self.clamp_col();
    }

    fn move_col(&mut self, right: bool) {
        let len = self.rows[self.cursor.row].len();
        self.cursor.col = if right {
            (self.cursor.col + 1) % len
        } else {
            self.cursor.col.checked_sub(1).unwrap_or(len - 1)
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DashboardAction {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.move_row(true),
            KeyCode::Up | KeyCode::Char('k') => self.move_row(false),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.move_col(true),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.move_col(false),
            KeyCode::Enter | KeyCode::Char(' ') => {
                return self
                    .selected()
                    .map_or(DashboardAction::None, |tile| DashboardAction::Open(tile.view));
            }
            KeyCode::Char('q') => return DashboardAction::Quit,
            _ => {}
        }
        DashboardAction::None
    }

    fn render_wallet(&self, area: Rect, buf: &mut Buffer) {
        let greeting = self.first_name.as_deref().map_or_else(
            || "Welcome, Guest".to_string(),
            |name| format!("Good day, {name}"),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(0, 171, 201)));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(vec![
            Line::styled(greeting, Style::default().add_modifier(Modifier::BOLD)),
            Line::from(vec![
                Span::styled("Wallet balance  ", Style::default().fg(Color::Gray)),
                Span::styled(
                    SAMPLE_BALANCE,
                    Style::default()
                        .fg(Color::Rgb(255, 199, 44))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ])
        .render(inner, buf);
    }

    fn render_tiles(&self, area: Rect, buf: &mut Buffer) {
        let row_height = TILE_HEIGHT + 1;
        let mut y = area.y;

        for (row_idx, (category, tiles)) in CATEGORIES.iter().zip(&self.rows).enumerate() {
            if y + row_height > area.bottom() {
                break;
            }

            Paragraph::new(Span::styled(
                category.heading(),
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            ))
            .render(Rect::new(area.x, y, area.width, 1), buf);

            let tile_area = Rect::new(area.x, y + 1, area.width, TILE_HEIGHT);
            let columns = Layout::horizontal(vec![Constraint::Ratio(1, 4); 4]).split(tile_area);

            for (col_idx, (tile, cell)) in tiles.iter().zip(columns.iter()).enumerate() {
                let selected = self.cursor.row == row_idx && self.cursor.col == col_idx;
                let (border, text) = if selected {
                    (
                        Style::default().fg(Color::Rgb(255, 199, 44)),
                        Style::default()
                            .fg(Color::Rgb(255, 199, 44))
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    (Style::default().fg(Color::DarkGray), Style::default())
                };
                Paragraph::new(tile.label)
                    .style(text)
                    .centered()
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Rounded)
                            .border_style(border),
                    )
                    .render(*cell, buf);
            }

            y += row_height + 1;
        }
    }

    fn render_activity(area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Recent activity ");

        let lines: Vec<Line> = SAMPLE_ACTIVITY
            .iter()
            .map(|(date, description, amount)| {
                let color = if amount.starts_with('+') {
                    Color::Green
                } else {
                    Color::Red
                };
                Line::from(vec![
                    Span::styled(format!("{date}  "), Style::default().fg(Color::DarkGray)),
                    Span::raw(format!("{description}  ")),
                    Span::styled(*amount, Style::default().fg(color)),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

impl Widget for &DashboardScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [wallet, _, tiles, activity] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(6),
        ])
        .areas(area);

        self.render_wallet(wallet, buf);
        self.render_tiles(tiles, buf);
        DashboardScreen::render_activity(activity, buf);
    }
}

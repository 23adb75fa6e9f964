//! Read-only list of stored identity documents.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::{DocumentStatus, SAMPLE_DOCUMENTS, StoredDocument, SubmissionRecord};
use crate::presentation::events::EventHandler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentAction {
    None,
    Back,
}

const fn status_color(status: DocumentStatus) -> Color {
    match status {
        DocumentStatus::Verified => Color::Green,
        DocumentStatus::Pending => Color::Yellow,
        DocumentStatus::Expired => Color::Red,
    }
}

pub struct DocumentLockerScreen {
    documents: &'static [StoredDocument],
    selected: usize,
}

impl Default for DocumentLockerScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentLockerScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            documents: &SAMPLE_DOCUMENTS,
            selected: 0,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&'static StoredDocument> {
        self.documents.get(self.selected)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DocumentAction {
        if EventHandler::is_back_event(&key) {
            return DocumentAction::Back;
        }
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(self.documents.len().saturating_sub(1));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = self.documents.len().saturating_sub(1);
            }
            _ => {}
        }
        DocumentAction::None
    }

    fn render_detail(document: &StoredDocument, area: Rect, buf: &mut Buffer) {
        let label = Style::default().fg(Color::Gray);
        let lines = vec![
            Line::styled(
                document.title,
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::from(vec![Span::styled("Issuer   ", label), Span::raw(document.issuer)]),
            Line::from(vec![Span::styled("Number   ", label), Span::raw(document.number)]),
            Line::from(vec![
                Span::styled("Issued   ", label),
                Span::raw(document.issued.format(SubmissionRecord::DATE_FORMAT).to_string()),
            ]),
            Line::from(vec![
                Span::styled("Status   ", label),
                Span::styled(
                    document.status.label(),
                    Style::default()
                        .fg(status_color(document.status))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Details "),
            )
            .render(area, buf);
    }
}

impl Widget for &DocumentLockerScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [list_area, detail_area] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(area);

        let items: Vec<ListItem> = self
            .documents
            .iter()
            .map(|doc| {
                ListItem::new(Line::from(vec![
                    Span::styled("● ", Style::default().fg(status_color(doc.status))),
                    Span::raw(doc.title),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Rgb(0, 171, 201)))
                    .title(" Document Locker "),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Rgb(255, 199, 44))
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, list_area, buf, &mut state);

        if let Some(document) = self.selected() {
            DocumentLockerScreen::render_detail(document, detail_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut screen = DocumentLockerScreen::new();
        screen.handle_key(key(KeyCode::Up));
        assert_eq!(screen.selected().map(|d| d.title), Some("Bahamas Passport"));

        for _ in 0..10 {
            screen.handle_key(key(KeyCode::Down));
        }
        assert_eq!(screen.selected().map(|d| d.title), Some("Voter's Card"));
    }

    #[test]
    fn test_escape_goes_back() {
        let mut screen = DocumentLockerScreen::new();
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), DocumentAction::Back);
        assert_eq!(screen.handle_key(key(KeyCode::Down)), DocumentAction::None);
    }

    #[test]
    fn test_detail_shows_status() {
        let mut screen = DocumentLockerScreen::new();
        screen.handle_key(key(KeyCode::End));

        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);
        (&screen).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("VR-0099812"));
        assert!(text.contains(DocumentStatus::Pending.label()));
    }
}

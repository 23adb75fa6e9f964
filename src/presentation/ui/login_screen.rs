//! Login screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginChoice {
    #[default]
    DigitalId,
    Guest,
}

impl LoginChoice {
    const fn label(self) -> &'static str {
        match self {
            Self::DigitalId => "Log in with Digital ID",
            Self::Guest => "Continue as guest",
        }
    }

    const fn toggled(self) -> Self {
        match self {
            Self::DigitalId => Self::Guest,
            Self::Guest => Self::DigitalId,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Login,
    Skip,
    Quit,
}

/// Login screen UI.
#[derive(Debug, Default)]
pub struct LoginScreen {
    choice: LoginChoice,
}

impl LoginScreen {
    /// Creates new login screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns highlighted control.
    #[must_use]
    pub const fn choice(&self) -> LoginChoice {
        self.choice
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {
                self.choice = self.choice.toggled();
                LoginAction::None
            }
            KeyCode::Enter => match self.choice {
                LoginChoice::DigitalId => LoginAction::Login,
                LoginChoice::Guest => LoginAction::Skip,
            },
            KeyCode::Char('l') => LoginAction::Login,
            KeyCode::Char('s' | 'g') => LoginAction::Skip,
            KeyCode::Char('q') | KeyCode::Esc => LoginAction::Quit,
            _ => LoginAction::None,
        }
    }

    fn button(&self, choice: LoginChoice) -> Line<'static> {
        let line = if self.choice == choice {
            Line::from(Span::styled(
                format!("▶ {} ◀", choice.label()),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Rgb(0, 171, 201))
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                format!("  {}  ", choice.label()),
                Style::default().fg(Color::Gray),
            ))
        };
        line.centered()
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(14),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(56),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(0, 171, 201)))
            .title(" The Bahamas Stack ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let [title, _, copy, _, first, _, second, _, hint] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::styled(
            "Welcome",
            Style::default()
                .fg(Color::Rgb(255, 199, 44))
                .add_modifier(Modifier::BOLD),
        ))
        .centered()
        .render(title, buf);

        Paragraph::new(
            "Pay bills, move money and reach government services from one place.",
        )
        .style(Style::default().fg(Color::White))
        .centered()
        .wrap(Wrap { trim: true })
        .render(copy, buf);

        Paragraph::new(self.button(LoginChoice::DigitalId)).render(first, buf);
        Paragraph::new(self.button(LoginChoice::Guest)).render(second, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("↑↓: Choose", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Enter: Continue", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("q: Quit", Style::default().fg(Color::DarkGray)),
        ]))
        .centered()
        .render(hint, buf);
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

//! Fixed-option picker widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Cycles through a fixed option list. Nothing is chosen until the user moves.
#[derive(Debug, Clone)]
pub struct SelectInput {
    label: String,
    placeholder: String,
    options: &'static [&'static str],
    selected: Option<usize>,
    focused: bool,
}

impl SelectInput {
    /// Creates picker over `options`.
    #[must_use]
    pub fn new(label: impl Into<String>, options: &'static [&'static str]) -> Self {
        Self {
            label: label.into(),
            placeholder: String::new(),
            options,
            selected: None,
            focused: false,
        }
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns chosen option, empty when none.
    #[must_use]
    pub fn value(&self) -> &'static str {
        self.selected.map_or("", |i| self.options[i])
    }

    /// Selects next option, wrapping.
    pub fn next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1) % self.options.len()));
    }

    /// Selects previous option, wrapping.
    pub fn previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let last = self.options.len() - 1;
        self.selected = Some(self.selected.map_or(last, |i| i.checked_sub(1).unwrap_or(last)));
    }

    /// Clears the choice.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

impl Widget for &SelectInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());
        let inner = block.inner(area);
        block.render(area, buf);

        let arrow_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let value = match self.selected {
            Some(i) => Span::styled(self.options[i], Style::default().fg(Color::White)),
            None => Span::styled(self.placeholder.as_str(), Style::default().fg(Color::DarkGray)),
        };

        let line = Line::from(vec![
            Span::styled("◀ ", arrow_style),
            value,
            Span::styled(" ▶", arrow_style),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[&str] = &["Fingerprint", "Face Scan"];

    #[test]
    fn test_empty_until_chosen() {
        let mut select = SelectInput::new("Method", OPTIONS);
        assert_eq!(select.value(), "");

        select.next();
        assert_eq!(select.value(), "Fingerprint");
    }

    #[test]
    fn test_wraps_both_ways() {
        let mut select = SelectInput::new("Method", OPTIONS);
        select.previous();
        assert_eq!(select.value(), "Face Scan");
        select.next();
        assert_eq!(select.value(), "Fingerprint");
        select.previous();
        assert_eq!(select.value(), "Face Scan");
    }

    #[test]
    fn test_clear() {
        let mut select = SelectInput::new("Method", OPTIONS);
        select.next();
        select.clear();
        assert_eq!(select.value(), "");
    }
}

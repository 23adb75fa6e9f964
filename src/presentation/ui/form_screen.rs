//! Generic service screen driven by a `ServiceConfig`.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::application::services::{FlowPhase, FormFlow, ScheduledTransition};
use crate::domain::entities::{FormDraft, ServiceConfig, SubmissionRecord};
use crate::domain::errors::SubmissionError;
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::{FieldList, StatusBar};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
    Back,
}

pub struct FormScreen {
    flow: FormFlow,
    fields: FieldList,
    pending_reset: Option<ScheduledTransition>,
}

impl FormScreen {
    #[must_use]
    pub fn new(config: &'static ServiceConfig) -> Self {
        Self {
            flow: FormFlow::new(config),
            fields: FieldList::new(config.fields),
            pending_reset: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &'static ServiceConfig {
        self.flow.config()
    }

    #[must_use]
    pub const fn flow(&self) -> &FormFlow {
        &self.flow
    }

    /// Whether a reset timer is still armed.
    #[must_use]
    pub fn has_pending_reset(&self) -> bool {
        self.pending_reset
            .as_ref()
            .is_some_and(|guard| !guard.is_finished())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        if EventHandler::is_back_event(&key) {
            return FormAction::Back;
        }
        if !self.flow.is_editing() {
            return FormAction::None;
        }
        if EventHandler::is_submit_event(&key) {
            return if self.flow.can_submit() {
                FormAction::Submit
            } else {
                FormAction::None
            };
        }

        if let Some((field, value)) = self.fields.handle_key(key) {
            self.flow.set_field(field, value);
        }
        FormAction::None
    }

    pub fn begin_submit(&mut self) -> Option<FormDraft> {
        self.flow.begin_submit()
    }

    /// Shows the receipt and keeps the reset timer alive for this mount.
    pub fn confirm(&mut self, record: SubmissionRecord, reset: ScheduledTransition) {
        self.flow.confirm(record);
        self.pending_reset = Some(reset);
    }

    pub fn fail(&mut self, error: &SubmissionError) {
        self.flow.fail(error);
    }

    /// Clears every field after the confirmation. Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        self.pending_reset = None;
        if self.flow.reset() {
            self.fields.clear();
            true
        } else {
            false
        }
    }

    fn status(&self) -> StatusBar {
        let collaborator = self.config().collaborator;
        match self.flow.phase() {
            FlowPhase::Editing => {
                if let Some(error) = self.flow.last_error() {
                    let hint = if error.is_retryable() {
                        "Enter: try again"
                    } else {
                        "Edit to continue"
                    };
                    StatusBar::error(error.to_string()).right(hint)
                } else if let Some(missing) = self.flow.missing_field() {
                    StatusBar::warning(format!("{} is required", missing.label))
                } else {
                    StatusBar::success("Ready").right(format!("Enter: {}", self.config().submit_label))
                }
            }
            FlowPhase::Submitting => StatusBar::info(format!("Sending to {collaborator}...")),
            FlowPhase::Confirmed(_) => {
                StatusBar::success("Confirmed").right("This form clears in a moment")
            }
        }
    }

    fn render_receipt(&self, record: &SubmissionRecord, area: Rect, buf: &mut Buffer) {
        let config = self.config();
        let confirmation = record.render(config.confirmation);
        let label = Style::default().fg(Color::Gray);

        let lines = vec![
            Line::styled(
                "✔ Success",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::from(confirmation),
            Line::default(),
            Line::from(vec![
                Span::styled("Transaction ID  ", label),
                Span::raw(record.id.as_str()),
            ]),
            Line::from(vec![
                Span::styled("Date            ", label),
                Span::raw(record.formatted_date()),
            ]),
            Line::from(vec![
                Span::styled("Processed by    ", label),
                Span::raw(record.provider.as_str()),
            ]),
            Line::default(),
            Line::styled(
                config.collaborator.tagline(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Green)),
            )
            .render(area, buf);
    }
}

impl Widget for &FormScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, center, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(72),
            Constraint::Fill(1),
        ])
        .areas(area);

        Clear.render(center, buf);

        let config = self.config();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(0, 171, 201)))
            .title(format!(" {} ", config.title));
        let inner = block.inner(center);
        block.render(center, buf);

        let [subtitle, _, body, _, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Span::styled(config.subtitle, Style::default().fg(Color::Gray)))
            .render(subtitle, buf);

        match self.flow.phase() {
            FlowPhase::Confirmed(record) => self.render_receipt(record, body, buf),
            FlowPhase::Editing | FlowPhase::Submitting => (&self.fields).render(body, buf),
        }

        (&self.status()).render(status, buf);
    }
}

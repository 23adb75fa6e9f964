//! Two-step identity onboarding: personal details, then biometric capture.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph, Widget},
};
use tracing::debug;

use crate::application::services::{BiometricFlow, BiometricStage, ScheduledTransition};
use crate::domain::entities::{FormDraft, KYC_FIELDS, KycProfile};
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::{FieldList, StatusBar};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KycStep {
    Details,
    Biometric,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KycAction {
    None,
    /// Biometric capture began; the shell schedules the stage timers.
    StartCapture,
    Finish(KycProfile),
}

pub struct KycScreen {
    fields: FieldList,
    draft: FormDraft,
    step: KycStep,
    profile: Option<KycProfile>,
    biometric: BiometricFlow,
    pending_step: Option<ScheduledTransition>,
    error: Option<String>,
}

impl Default for KycScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl KycScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: FieldList::new(KYC_FIELDS),
            draft: FormDraft::for_fields(KYC_FIELDS),
            step: KycStep::Details,
            profile: None,
            biometric: BiometricFlow::new(),
            pending_step: None,
            error: None,
        }
    }

    #[must_use]
    pub const fn step(&self) -> KycStep {
        self.step
    }

    #[must_use]
    pub const fn biometric_stage(&self) -> BiometricStage {
        self.biometric.stage()
    }

    /// Continue is enabled once every required detail is present.
    #[must_use]
    pub fn can_continue(&self) -> bool {
        self.draft.first_missing(KYC_FIELDS).is_none()
    }

    /// Keeps the next biometric step armed for as long as this screen is mounted.
    pub fn arm(&mut self, step: ScheduledTransition) {
        self.pending_step = Some(step);
    }

    /// Timer-driven biometric step. Returns the new stage if it moved.
    pub fn advance_biometric(&mut self) -> Option<BiometricStage> {
        self.pending_step = None;
        (self.step == KycStep::Biometric && self.biometric.advance())
            .then(|| self.biometric.stage())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KycAction {
        match self.step {
            KycStep::Details => self.handle_details_key(key),
            KycStep::Biometric => self.handle_biometric_key(key),
        }
    }

    fn handle_details_key(&mut self, key: KeyEvent) -> KycAction {
        if EventHandler::is_submit_event(&key) {
            self.submit_details();
            return KycAction::None;
        }

        if let Some((field, value)) = self.fields.handle_key(key) {
            self.draft.set(field, value);
            self.error = None;
        }
        KycAction::None
    }

    fn submit_details(&mut self) {
        match KycProfile::from_draft(&self.draft) {
            Ok(profile) => {
                debug!(island = %profile.island, method = %profile.capture_method(), "KYC details accepted");
                self.profile = Some(profile);
                self.step = KycStep::Biometric;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }

    fn handle_biometric_key(&mut self, key: KeyEvent) -> KycAction {
        match (self.biometric.stage(), key.code) {
            (BiometricStage::Intro, KeyCode::Enter | KeyCode::Char(' ')) => {
                if self.biometric.start() {
                    KycAction::StartCapture
                } else {
                    KycAction::None
                }
            }
            (BiometricStage::Intro, KeyCode::Esc) => {
                self.step = KycStep::Details;
                KycAction::None
            }
            (BiometricStage::Complete, KeyCode::Enter) => self
                .profile
                .clone()
                .map_or(KycAction::None, KycAction::Finish),
            _ => KycAction::None,
        }
    }

    fn capture_method(&self) -> &str {
        self.profile
            .as_ref()
            .map_or("Fingerprint", KycProfile::capture_method)
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let [fields_area, _, status_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        (&self.fields).render(fields_area, buf);

        let status = match (&self.error, self.draft.first_missing(KYC_FIELDS)) {
            (Some(error), _) => StatusBar::error(error.as_str()),
            (None, Some(missing)) => StatusBar::warning(format!("{} is required", missing.label)),
            (None, None) => StatusBar::success("Ready to continue"),
        };
        let continue_hint = if self.can_continue() {
            "Enter: Continue"
        } else {
            "Continue disabled"
        };
        (&status.right(continue_hint)).render(status_area, buf);
    }

    fn render_biometric(&self, area: Rect, buf: &mut Buffer) {
        let stage = self.biometric.stage();
        let [intro, _, gauge_area, _, label_area, _, hint_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let method = self.capture_method();
        Paragraph::new(vec![
            Line::from(format!("Biometric method: {method}")),
            Line::styled(
                "Keep still while we confirm it's really you.",
                Style::default().fg(Color::Gray),
            ),
        ])
        .render(intro, buf);

        let color = if stage == BiometricStage::Complete {
            Color::Green
        } else {
            Color::Rgb(0, 171, 201)
        };
        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Progress "))
            .gauge_style(Style::default().fg(color))
            .percent(stage.progress())
            .render(gauge_area, buf);

        Paragraph::new(Line::styled(
            stage.label(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .centered()
        .render(label_area, buf);

        let hint = match stage {
            BiometricStage::Intro => "Enter: Start scan | Esc: Edit details",
            BiometricStage::Capturing | BiometricStage::Verifying => "Please wait...",
            BiometricStage::Complete => "Enter: Finish",
        };
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)))
            .render(hint_area, buf);
    }
}

impl Widget for &KycScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, center, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(64),
            Constraint::Fill(1),
        ])
        .areas(area);

        Clear.render(center, buf);

        let (step_label, title) = match self.step {
            KycStep::Details => ("Step 1 of 2", " Verify your identity "),
            KycStep::Biometric => ("Step 2 of 2", " Biometric check "),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(0, 171, 201)))
            .title(title)
            .title_bottom(Line::from(format!(" {step_label} ")).right_aligned());
        let inner = block.inner(center);
        block.render(center, buf);

        match self.step {
            KycStep::Details => self.render_details(inner, buf),
            KycStep::Biometric => self.render_biometric(inner, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use test_case::test_case;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_into(screen: &mut KycScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    /// Fills the details in field order, leaving `skip` empty.
    fn fill_details(screen: &mut KycScreen, skip: Option<&str>) {
        let values = [
            ("full_name", "Jane Knowles"),
            ("telephone", "2425550100"),
            ("nib_number", "12345678"),
            ("address", "12 Bay Street"),
        ];
        for (field, value) in values {
            if skip != Some(field) {
                type_into(screen, value);
            }
            screen.handle_key(key(KeyCode::Tab));
        }
    }

    fn completed_details() -> KycScreen {
        let mut screen = KycScreen::new();
        fill_details(&mut screen, None);
        screen.handle_key(key(KeyCode::Enter));
        screen
    }

    #[test_case(None, true ; "all_required_present")]
    #[test_case(Some("full_name"), false ; "full_name_empty")]
    #[test_case(Some("nib_number"), false ; "nib_empty")]
    #[test_case(Some("address"), false ; "address_empty")]
    #[test_case(Some("telephone"), true ; "telephone_is_optional")]
    fn test_continue_enabled_iff_required_present(skip: Option<&str>, enabled: bool) {
        let mut screen = KycScreen::new();
        fill_details(&mut screen, skip);
        assert_eq!(screen.can_continue(), enabled);
    }

    #[test]
    fn test_continue_tracks_each_keystroke() {
        let mut screen = KycScreen::new();
        fill_details(&mut screen, Some("address"));
        assert!(!screen.can_continue());

        // focus sits on the island picker, one below the address
        screen.handle_key(key(KeyCode::BackTab));
        type_into(&mut screen, "X");
        assert!(screen.can_continue());

        screen.handle_key(key(KeyCode::Backspace));
        assert!(!screen.can_continue());
    }

    #[test]
    fn test_enter_with_missing_field_stays() {
        let mut screen = KycScreen::new();
        fill_details(&mut screen, Some("nib_number"));

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), KycAction::None);
        assert_eq!(screen.step(), KycStep::Details);
        assert_eq!(screen.error.as_deref(), Some("NIB Number is required"));
    }

    #[test]
    fn test_details_lead_to_biometric_intro() {
        let screen = completed_details();
        assert_eq!(screen.step(), KycStep::Biometric);
        assert_eq!(screen.biometric_stage(), BiometricStage::Intro);
        assert_eq!(screen.capture_method(), "Fingerprint");
    }

    #[test]
    fn test_escape_from_intro_returns_to_details() {
        let mut screen = completed_details();
        screen.handle_key(key(KeyCode::Esc));
        assert_eq!(screen.step(), KycStep::Details);
        assert!(screen.can_continue());
    }

    #[test]
    fn test_biometric_run_to_finish() {
        let mut screen = completed_details();

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), KycAction::StartCapture);
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), KycAction::None);
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), KycAction::None);
        assert_eq!(screen.step(), KycStep::Biometric);

        assert_eq!(screen.advance_biometric(), Some(BiometricStage::Verifying));
        assert_eq!(screen.advance_biometric(), Some(BiometricStage::Complete));
        assert_eq!(screen.advance_biometric(), None);

        match screen.handle_key(key(KeyCode::Enter)) {
            KycAction::Finish(profile) => {
                assert_eq!(profile.first_name(), "Jane");
                assert_eq!(profile.nib_number, "12345678");
            }
            other => panic!("expected finish, got {other:?}"),
        }
    }

    #[test]
    fn test_advance_ignored_on_details() {
        let mut screen = KycScreen::new();
        assert_eq!(screen.advance_biometric(), None);
    }
}

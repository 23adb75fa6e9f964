//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

use crate::application::services::{TransitionScheduler, ViewRouter};
use crate::application::use_cases::SubmitFormUseCase;
use crate::domain::entities::{KycProfile, NavAction, Screen};
use crate::domain::keybinding::Keybind;
use crate::domain::ports::{Clock, IdGenerator, SubmissionPort};
use crate::infrastructure::config::{AppConfig, TimingConfig};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::{
    DashboardAction, DashboardScreen, DocumentAction, DocumentLockerScreen, FormAction,
    FormScreen, KycAction, KycScreen, LoginAction, LoginScreen, SplashScreen, TileCursor,
};
use crate::presentation::widgets::{FooterBar, HeaderBar};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

/// Deferred work posted back onto the event loop. Stamped with the mount that
/// requested it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    ResetForm { mount: u64 },
    AdvanceBiometric { mount: u64 },
}

enum CurrentScreen {
    Splash(SplashScreen),
    Login(LoginScreen),
    Kyc(KycScreen),
    Dashboard(DashboardScreen),
    Service(Box<FormScreen>),
    Documents(DocumentLockerScreen),
}

/// What the shell does after a screen consumed a key.
enum ShellCommand {
    None,
    Exit,
    Navigate(NavAction),
    LeaveSplash,
    StartBiometric,
    FinishKyc(KycProfile),
    SubmitForm,
}

pub struct App {
    router: ViewRouter,
    screen: CurrentScreen,
    mounted: Option<Screen>,
    mount_id: u64,
    action_rx: mpsc::UnboundedReceiver<Action>,
    scheduler: TransitionScheduler<Action>,
    submit_form_use_case: SubmitFormUseCase,
    timing: TimingConfig,
    profile: Option<KycProfile>,
    dashboard_cursor: TileCursor,
    exiting: bool,
}

impl App {
    #[must_use]
    pub fn new(
        submission_port: Arc<dyn SubmissionPort>,
        id_generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
        config: &AppConfig,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let scheduler = TransitionScheduler::new(action_tx);
        let router = if config.ui.start_as_guest {
            ViewRouter::guest()
        } else {
            ViewRouter::new()
        };

        let mut app = Self {
            router,
            screen: CurrentScreen::Splash(SplashScreen::new()),
            mounted: None,
            mount_id: 0,
            action_rx,
            scheduler,
            submit_form_use_case: SubmitFormUseCase::new(submission_port, id_generator, clock),
            timing: config.timing,
            profile: None,
            dashboard_cursor: TileCursor::default(),
            exiting: false,
        };

        if !config.ui.enable_animations {
            app.mount();
        }
        app
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!(screen = ?self.mounted, "Starting event loop");
        self.run_event_loop(terminal).await?;
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            let in_splash = matches!(self.screen, CurrentScreen::Splash(_));

            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }

                _ = animation_interval.tick(), if in_splash => {
                    if let CurrentScreen::Splash(splash) = &mut self.screen {
                        splash.tick(ANIMATION_TICK_RATE);
                    }
                }

                maybe_event = terminal_events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(event).await == EventResult::Exit {
                                self.exiting = true;
                            }
                        }
                        Some(Err(e)) => {
                            error!(error = %e, "Terminal event stream failed");
                            return Err(e.into());
                        }
                        None => self.exiting = true,
                    }
                }
            }

            terminal.draw(|frame| self.render(frame))?;
            self.leave_finished_splash();
        }

        Ok(())
    }

    async fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_actionable(&key) => self.handle_key(key).await,
            _ => EventResult::Continue,
        }
    }

    fn leave_finished_splash(&mut self) {
        if let CurrentScreen::Splash(splash) = &self.screen
            && splash.is_complete()
        {
            self.mount();
        }
    }

    /// Replaces the mounted screen with the router's current one.
    ///
    /// Dropping the old screen drops its scheduled transitions.
    fn mount(&mut self) {
        if let CurrentScreen::Dashboard(dashboard) = &self.screen {
            self.dashboard_cursor = dashboard.cursor();
        }

        let target = self.router.screen();
        self.mount_id += 1;
        self.screen = match target {
            Screen::Login => CurrentScreen::Login(LoginScreen::new()),
            Screen::Kyc => CurrentScreen::Kyc(KycScreen::new()),
            Screen::Dashboard => {
                let first_name = self
                    .profile
                    .as_ref()
                    .map(|profile| profile.first_name().to_string());
                CurrentScreen::Dashboard(
                    DashboardScreen::new(first_name).with_cursor(self.dashboard_cursor),
                )
            }
            Screen::Service(kind) => CurrentScreen::Service(Box::new(FormScreen::new(kind.config()))),
            Screen::DocumentLocker => CurrentScreen::Documents(DocumentLockerScreen::new()),
        };
        self.mounted = Some(target);
        debug!(screen = %target, mount = self.mount_id, "Mounted screen");
    }

    fn navigate(&mut self, action: NavAction) {
        if self.router.apply(action) && self.mounted != Some(self.router.screen()) {
            self.mount();
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        let command = match &mut self.screen {
            CurrentScreen::Splash(splash) => {
                splash.skip();
                ShellCommand::LeaveSplash
            }
            CurrentScreen::Login(screen) => match screen.handle_key(key) {
                LoginAction::None => ShellCommand::None,
                LoginAction::Login => ShellCommand::Navigate(NavAction::LoginPressed),
                LoginAction::Skip => ShellCommand::Navigate(NavAction::SkipPressed),
                LoginAction::Quit => ShellCommand::Exit,
            },
            CurrentScreen::Kyc(screen) => match screen.handle_key(key) {
                KycAction::None => ShellCommand::None,
                KycAction::StartCapture => ShellCommand::StartBiometric,
                KycAction::Finish(profile) => ShellCommand::FinishKyc(profile),
            },
            CurrentScreen::Dashboard(screen) => match screen.handle_key(key) {
                DashboardAction::None => ShellCommand::None,
                DashboardAction::Open(view) => ShellCommand::Navigate(NavAction::TilePressed(view)),
                DashboardAction::Quit => ShellCommand::Exit,
            },
            CurrentScreen::Service(screen) => match screen.handle_key(key) {
                FormAction::None => ShellCommand::None,
                FormAction::Submit => ShellCommand::SubmitForm,
                FormAction::Back => ShellCommand::Navigate(NavAction::BackPressed),
            },
            CurrentScreen::Documents(screen) => match screen.handle_key(key) {
                DocumentAction::None => ShellCommand::None,
                DocumentAction::Back => ShellCommand::Navigate(NavAction::BackPressed),
            },
        };

        match command {
            ShellCommand::None => {}
            ShellCommand::Exit => return EventResult::Exit,
            ShellCommand::Navigate(action) => self.navigate(action),
            ShellCommand::LeaveSplash => self.leave_finished_splash(),
            ShellCommand::StartBiometric => self.schedule_biometric_step(),
            ShellCommand::FinishKyc(profile) => {
                info!(island = %profile.island, "KYC completed");
                self.profile = Some(profile);
                self.navigate(NavAction::KycCompleted);
            }
            ShellCommand::SubmitForm => self.handle_form_submit().await,
        }

        EventResult::Continue
    }

    async fn handle_form_submit(&mut self) {
        let mount = self.mount_id;
        let CurrentScreen::Service(screen) = &mut self.screen else {
            return;
        };
        let Some(draft) = screen.begin_submit() else {
            return;
        };
        let config = screen.config();

        match self.submit_form_use_case.execute(config, &draft).await {
            Ok(record) => {
                info!(
                    service = ?config.kind,
                    id = %record.id,
                    reset_in_ms = self.timing.confirmation_reset_ms,
                    "Submission confirmed"
                );
                let reset = self
                    .scheduler
                    .schedule(self.timing.confirmation_reset(), Action::ResetForm { mount });
                screen.confirm(record, reset);
            }
            Err(e) => {
                error!(service = ?config.kind, error = %e, "Submission failed");
                screen.fail(&e);
            }
        }
    }

    fn schedule_biometric_step(&mut self) {
        let step = self.scheduler.schedule(
            self.timing.biometric_step(),
            Action::AdvanceBiometric {
                mount: self.mount_id,
            },
        );
        if let CurrentScreen::Kyc(screen) = &mut self.screen {
            screen.arm(step);
        }
    }

    fn handle_action(&mut self, action: Action) {
        let (Action::ResetForm { mount } | Action::AdvanceBiometric { mount }) = action;
        if mount != self.mount_id {
            debug!(?action, current = self.mount_id, "Discarding action for unmounted screen");
            return;
        }

        match action {
            Action::ResetForm { .. } => {
                if let CurrentScreen::Service(screen) = &mut self.screen {
                    if screen.reset() {
                        info!(service = ?screen.config().kind, "Form reset after confirmation");
                    }
                } else {
                    warn!(?action, "No form mounted to reset");
                }
            }
            Action::AdvanceBiometric { .. } => {
                let advanced = match &mut self.screen {
                    CurrentScreen::Kyc(screen) => screen.advance_biometric(),
                    _ => {
                        warn!(?action, "No biometric flow mounted");
                        None
                    }
                };
                if let Some(stage) = advanced {
                    info!(?stage, "Biometric stage advanced");
                    if stage.is_transit() {
                        self.schedule_biometric_step();
                    }
                }
            }
        }
    }

    fn screen_title(&self) -> Option<&'static str> {
        match &self.screen {
            CurrentScreen::Splash(_) | CurrentScreen::Login(_) => None,
            CurrentScreen::Kyc(_) => Some("Onboarding"),
            CurrentScreen::Dashboard(_) => Some("Home"),
            CurrentScreen::Service(screen) => Some(screen.config().title),
            CurrentScreen::Documents(_) => Some("Document Locker"),
        }
    }

    fn keybindings(&self) -> Vec<Keybind> {
        let mut bindings = match &self.screen {
            CurrentScreen::Splash(_) => Vec::new(),
            CurrentScreen::Login(_) => vec![
                Keybind::plain(KeyCode::Enter, "Continue"),
                Keybind::plain(KeyCode::Char('s'), "Guest"),
            ],
            CurrentScreen::Kyc(_) => vec![
                Keybind::plain(KeyCode::Tab, "Next field"),
                Keybind::plain(KeyCode::Enter, "Continue"),
            ],
            CurrentScreen::Dashboard(_) => vec![
                Keybind::plain(KeyCode::Enter, "Open"),
                Keybind::plain(KeyCode::Char('j'), "Down").hidden(),
                Keybind::plain(KeyCode::Char('q'), "Quit"),
            ],
            CurrentScreen::Service(_) => vec![
                Keybind::plain(KeyCode::Tab, "Next field"),
                Keybind::plain(KeyCode::Enter, "Submit"),
                Keybind::plain(KeyCode::Esc, "Back"),
            ],
            CurrentScreen::Documents(_) => vec![
                Keybind::plain(KeyCode::Down, "Select"),
                Keybind::plain(KeyCode::Esc, "Back"),
            ],
        };
        bindings.push(Keybind::ctrl('q', "Quit").hidden());
        bindings
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if let CurrentScreen::Splash(splash) = &mut self.screen {
            frame.render_widget(splash, area);
            return;
        }

        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let mut header_bar =
            HeaderBar::new(crate::NAME, crate::VERSION).session(self.router.flags());
        if let Some(title) = self.screen_title() {
            header_bar = header_bar.title(title);
        }
        frame.render_widget(header_bar, header);

        match &self.screen {
            CurrentScreen::Splash(_) => {}
            CurrentScreen::Login(screen) => frame.render_widget(screen, body),
            CurrentScreen::Kyc(screen) => frame.render_widget(screen, body),
            CurrentScreen::Dashboard(screen) => frame.render_widget(screen, body),
            CurrentScreen::Service(screen) => frame.render_widget(screen.as_ref(), body),
            CurrentScreen::Documents(screen) => frame.render_widget(screen, body),
        }

        let bindings = self.keybindings();
        frame.render_widget(
            FooterBar::new(&bindings).right_info(Some("C-q quit")),
            footer,
        );
    }
}

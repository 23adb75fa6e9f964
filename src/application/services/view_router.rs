//! Top-level navigation state.

use tracing::{debug, info};

use crate::domain::entities::{NavAction, Screen, SessionFlags, ViewState};

/// Owns the session flags and the current view and resolves the rendered screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewRouter {
    flags: SessionFlags,
    view: ViewState,
}

impl ViewRouter {
    /// Creates a signed-out router on the dashboard view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a router that already skipped login.
    #[must_use]
    pub fn guest() -> Self {
        Self {
            flags: SessionFlags::GUEST,
            view: ViewState::Dashboard,
        }
    }

    /// Returns session flags.
    #[must_use]
    pub const fn flags(&self) -> SessionFlags {
        self.flags
    }

    /// Returns current view.
    #[must_use]
    pub const fn view(&self) -> ViewState {
        self.view
    }

    /// Resolves the screen to render.
    #[must_use]
    pub fn screen(&self) -> Screen {
        if self.flags.needs_login() {
            Screen::Login
        } else if self.flags.contains(SessionFlags::SHOW_KYC) {
            Screen::Kyc
        } else {
            Screen::from(self.view)
        }
    }

    /// Applies a navigation action. Returns whether the rendered screen changed.
    ///
    /// Actions that have no control on the current screen are ignored.
    pub fn apply(&mut self, action: NavAction) -> bool {
        let before = self.screen();

        match (before, action) {
            (Screen::Login, NavAction::LoginPressed) => {
                self.flags.insert(SessionFlags::SHOW_KYC);
            }
            (Screen::Login, NavAction::SkipPressed) => {
                self.flags.insert(SessionFlags::GUEST);
                self.view = ViewState::Dashboard;
            }
            (Screen::Kyc, NavAction::KycCompleted) => {
                self.flags.insert(SessionFlags::LOGGED_IN);
                self.flags.remove(SessionFlags::SHOW_KYC);
                self.view = ViewState::Dashboard;
            }
            (Screen::Dashboard, NavAction::TilePressed(view)) => {
                self.view = view;
            }
            (
                Screen::Dashboard | Screen::Service(_) | Screen::DocumentLocker,
                NavAction::BackPressed,
            ) => {
                self.view = ViewState::Dashboard;
            }
            (screen, action) => {
                debug!(%screen, ?action, "Ignoring navigation action");
                return false;
            }
        }

        let after = self.screen();
        if after != before {
            info!(from = %before, to = %after, ?action, "Navigated");
        }
        after != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ServiceKind;
    use test_case::test_case;

    fn dashboard_router() -> ViewRouter {
        let mut router = ViewRouter::new();
        router.apply(NavAction::SkipPressed);
        router
    }

    #[test]
    fn test_starts_on_login() {
        let router = ViewRouter::new();
        assert_eq!(router.view(), ViewState::Dashboard);
        assert_eq!(router.screen(), Screen::Login);
    }

    #[test]
    fn test_skip_goes_to_dashboard_as_guest() {
        let mut router = ViewRouter::new();
        assert!(router.apply(NavAction::SkipPressed));
        assert!(router.flags().contains(SessionFlags::GUEST));
        assert_eq!(router.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_login_then_kyc_completion() {
        let mut router = ViewRouter::new();

        assert!(router.apply(NavAction::LoginPressed));
        assert_eq!(router.screen(), Screen::Kyc);

        assert!(router.apply(NavAction::KycCompleted));
        assert_eq!(router.screen(), Screen::Dashboard);
        assert!(router.flags().contains(SessionFlags::LOGGED_IN));
        assert!(!router.flags().contains(SessionFlags::SHOW_KYC));
    }

    #[test]
    fn test_kyc_ignores_tiles_and_back() {
        let mut router = ViewRouter::new();
        router.apply(NavAction::LoginPressed);

        assert!(!router.apply(NavAction::TilePressed(ViewState::DocumentLocker)));
        assert!(!router.apply(NavAction::BackPressed));
        assert_eq!(router.screen(), Screen::Kyc);
    }

    #[test]
    fn test_login_ignores_kyc_completion() {
        let mut router = ViewRouter::new();
        assert!(!router.apply(NavAction::KycCompleted));
        assert_eq!(router.screen(), Screen::Login);
    }

    #[test]
    fn test_tile_opens_service() {
        let mut router = dashboard_router();
        let view = ViewState::Service(ServiceKind::CablePayment);

        assert!(router.apply(NavAction::TilePressed(view)));
        assert_eq!(router.screen(), Screen::Service(ServiceKind::CablePayment));
    }

    #[test]
    fn test_tiles_only_work_from_dashboard() {
        let mut router = dashboard_router();
        router.apply(NavAction::TilePressed(ViewState::DocumentLocker));

        assert!(!router.apply(NavAction::TilePressed(ViewState::Service(
            ServiceKind::BplPayment
        ))));
        assert_eq!(router.screen(), Screen::DocumentLocker);
    }

    #[test_case(ViewState::Service(ServiceKind::BplPayment) ; "bpl")]
    #[test_case(ViewState::Service(ServiceKind::WaterSewerage) ; "water")]
    #[test_case(ViewState::Service(ServiceKind::CablePayment) ; "cable")]
    #[test_case(ViewState::Service(ServiceKind::LocalTransfer) ; "local_transfer")]
    #[test_case(ViewState::Service(ServiceKind::InternationalTransfer) ; "international_transfer")]
    #[test_case(ViewState::Service(ServiceKind::BalanceHistory) ; "balance")]
    #[test_case(ViewState::Service(ServiceKind::ReceiveMoney) ; "receive")]
    #[test_case(ViewState::Service(ServiceKind::DriverLicenseRenewal) ; "license")]
    #[test_case(ViewState::Service(ServiceKind::PoliceCertificate) ; "police")]
    #[test_case(ViewState::DocumentLocker ; "documents")]
    fn test_back_always_returns_to_dashboard(view: ViewState) {
        let mut router = dashboard_router();
        router.apply(NavAction::TilePressed(view));
        assert_eq!(router.screen(), Screen::from(view));

        router.apply(NavAction::BackPressed);
        assert_eq!(router.view(), ViewState::Dashboard);
        assert_eq!(router.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_back_on_dashboard_is_noop() {
        let mut router = dashboard_router();
        assert!(!router.apply(NavAction::BackPressed));
        assert_eq!(router.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_exactly_one_screen_for_every_sequence() {
        let actions = [
            NavAction::LoginPressed,
            NavAction::SkipPressed,
            NavAction::KycCompleted,
            NavAction::TilePressed(ViewState::DocumentLocker),
            NavAction::TilePressed(ViewState::Service(ServiceKind::ReceiveMoney)),
            NavAction::BackPressed,
        ];

        // every sequence of three actions
        for a in actions {
            for b in actions {
                for c in actions {
                    let mut router = ViewRouter::new();
                    for action in [a, b, c] {
                        router.apply(action);
                        let screen = router.screen();
                        let login = router.flags().needs_login();
                        let kyc = router.flags().contains(SessionFlags::SHOW_KYC);
                        match screen {
                            Screen::Login => assert!(login),
                            Screen::Kyc => assert!(!login && kyc),
                            Screen::Dashboard | Screen::Service(_) | Screen::DocumentLocker => {
                                assert!(!login && !kyc);
                                assert_eq!(screen, Screen::from(router.view()));
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_guest_constructor() {
        let router = ViewRouter::guest();
        assert_eq!(router.screen(), Screen::Dashboard);
        assert_eq!(router.flags().badge(), "GUEST");
    }
}

//! Navigation tags and router transitions.

use std::fmt;

/// Services backed by the generic form flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    /// BPL electricity bill payment.
    BplPayment,
    /// Water & Sewerage bill payment.
    WaterSewerage,
    /// Cable Bahamas bill payment.
    CablePayment,
    /// Transfer to a local account.
    LocalTransfer,
    /// Transfer to an overseas bank account.
    InternationalTransfer,
    /// Balance and statement request.
    BalanceHistory,
    /// Request money from another user.
    ReceiveMoney,
    /// Driver's license renewal request.
    DriverLicenseRenewal,
    /// Police character certificate request.
    PoliceCertificate,
}

impl ServiceKind {
    /// Every service, in dashboard order.
    pub const ALL: [Self; 9] = [
        Self::BplPayment,
        Self::WaterSewerage,
        Self::CablePayment,
        Self::LocalTransfer,
        Self::InternationalTransfer,
        Self::BalanceHistory,
        Self::ReceiveMoney,
        Self::DriverLicenseRenewal,
        Self::PoliceCertificate,
    ];

    /// Returns the dashboard category.
    #[must_use]
    pub const fn category(self) -> TileCategory {
        match self {
            Self::BplPayment | Self::WaterSewerage | Self::CablePayment => TileCategory::Payments,
            Self::LocalTransfer
            | Self::InternationalTransfer
            | Self::BalanceHistory
            | Self::ReceiveMoney => TileCategory::Transfers,
            Self::DriverLicenseRenewal | Self::PoliceCertificate => TileCategory::Government,
        }
    }
}

/// Dashboard tile grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileCategory {
    /// Utility bills.
    Payments,
    /// Money movement.
    Transfers,
    /// Government service requests.
    Government,
    /// Stored documents.
    Documents,
}

impl TileCategory {
    /// Returns section heading.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Payments => "Pay Bills",
            Self::Transfers => "Money",
            Self::Government => "Government Services",
            Self::Documents => "Documents",
        }
    }
}

/// Post-login screen selected by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Tile menu.
    #[default]
    Dashboard,
    /// One of the form-flow services.
    Service(ServiceKind),
    /// Stored documents.
    DocumentLocker,
}

/// The single screen the shell renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Sign-in choice.
    Login,
    /// Identity onboarding.
    Kyc,
    /// Tile menu.
    Dashboard,
    /// Form-flow service.
    Service(ServiceKind),
    /// Stored documents.
    DocumentLocker,
}

impl From<ViewState> for Screen {
    fn from(view: ViewState) -> Self {
        match view {
            ViewState::Dashboard => Self::Dashboard,
            ViewState::Service(kind) => Self::Service(kind),
            ViewState::DocumentLocker => Self::DocumentLocker,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Kyc => write!(f, "kyc"),
            Self::Dashboard => write!(f, "dashboard"),
            Self::Service(kind) => write!(f, "service:{kind:?}"),
            Self::DocumentLocker => write!(f, "document-locker"),
        }
    }
}

/// User actions that move the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// "Log in" on the login screen.
    LoginPressed,
    /// "Continue as guest" on the login screen.
    SkipPressed,
    /// KYC onboarding finished.
    KycCompleted,
    /// Dashboard tile activated.
    TilePressed(ViewState),
    /// Back from any post-login screen.
    BackPressed,
}

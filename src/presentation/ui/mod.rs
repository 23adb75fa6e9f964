//! UI screens.

mod app;
mod dashboard_screen;
mod document_locker_screen;
mod form_screen;
mod kyc_screen;
mod login_screen;
mod splash_screen;
mod utils;

pub use app::App;
pub use dashboard_screen::{DashboardAction, DashboardScreen, Tile, TileCursor};
pub use document_locker_screen::{DocumentAction, DocumentLockerScreen};
pub use form_screen::{FormAction, FormScreen};
pub use kyc_screen::{KycAction, KycScreen, KycStep};
pub use login_screen::{LoginAction, LoginChoice, LoginScreen};
pub use splash_screen::{SplashScreen, SplashState};

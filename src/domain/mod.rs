//! Domain layer with core entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;

pub use entities::{FormDraft, KycProfile, NavAction, Screen, ServiceKind, SessionFlags, ViewState};
pub use errors::{SubmissionError, ValidationError};
pub use ports::{Clock, IdGenerator, SubmissionPort};

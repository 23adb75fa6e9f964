//! Application layer with use cases and UI-independent state machines.

/// Navigation, form and timer services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use services::{BiometricFlow, FormFlow, TransitionScheduler, ViewRouter};
pub use use_cases::SubmitFormUseCase;

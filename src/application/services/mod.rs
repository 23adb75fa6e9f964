//! Application services.

mod biometric_flow;
mod form_flow;
mod scheduler;
mod view_router;

pub use biometric_flow::{BiometricFlow, BiometricStage};
pub use form_flow::{FlowPhase, FormFlow};
pub use scheduler::{ScheduledTransition, TransitionScheduler};
pub use view_router::ViewRouter;

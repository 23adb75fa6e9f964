//! Domain error types.

mod submission_error;
mod validation_error;

pub use submission_error::SubmissionError;
pub use validation_error::ValidationError;

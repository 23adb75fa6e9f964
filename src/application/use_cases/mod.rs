//! Use case implementations.

mod submit_form_use_case;

pub use submit_form_use_case::SubmitFormUseCase;

//! The Bahamas Stack - a terminal mock-up of a Bahamian super-app.
//!
//! Bill payments, money transfers, government services and a document locker
//! behind a login and KYC onboarding flow. Every external collaborator is
//! simulated; nothing is persisted.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and UI-independent state machines.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and simulated adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "bahamas-stack";

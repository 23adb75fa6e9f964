//! Infrastructure layer with configuration and simulated adapters.

/// Application configuration.
pub mod config;
/// Simulated collaborators, clock and id generation.
pub mod simulation;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager, TimingConfig};
pub use simulation::{SimulatedCollaborators, SystemClock, TimestampIdGenerator};

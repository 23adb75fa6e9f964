use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "bahamas-stack",
    version,
    about = "A terminal simulation of a national digital-services super app",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", env = "BAHAMAS_STACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, env = "BAHAMAS_STACK_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Play the animated splash screen.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Skip the login screen and continue as a guest.
    #[arg(long)]
    pub guest: bool,

    /// Milliseconds a confirmation stays before the form resets.
    #[arg(long, value_name = "MS")]
    pub confirmation_reset_ms: Option<u64>,

    /// Milliseconds between biometric verification stages.
    #[arg(long, value_name = "MS")]
    pub biometric_step_ms: Option<u64>,
}

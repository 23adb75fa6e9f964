//! Simulated biometric capture sequence.

use tracing::debug;

/// Stage of the biometric flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BiometricStage {
    /// Instructions, waiting for the user.
    #[default]
    Intro,
    /// Pretending to read the sensor.
    Capturing,
    /// Pretending to match the template.
    Verifying,
    /// Identity "confirmed".
    Complete,
}

impl BiometricStage {
    /// Hard-coded progress percentage.
    #[must_use]
    pub const fn progress(self) -> u16 {
        match self {
            Self::Intro => 0,
            Self::Capturing => 35,
            Self::Verifying => 75,
            Self::Complete => 100,
        }
    }

    /// Returns display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Intro => "Ready to scan",
            Self::Capturing => "Capturing...",
            Self::Verifying => "Verifying identity...",
            Self::Complete => "Identity verified",
        }
    }

    /// Returns whether this stage advances on a timer.
    #[must_use]
    pub const fn is_transit(self) -> bool {
        matches!(self, Self::Capturing | Self::Verifying)
    }
}

/// Intro → Capturing → Verifying → Complete, no skips.
#[derive(Debug, Clone, Default)]
pub struct BiometricFlow {
    stage: BiometricStage,
}

impl BiometricFlow {
    /// Creates flow at the intro stage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns current stage.
    #[must_use]
    pub const fn stage(&self) -> BiometricStage {
        self.stage
    }

    /// Returns whether verification finished.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.stage, BiometricStage::Complete)
    }

    /// User starts the capture. Only valid from the intro.
    pub fn start(&mut self) -> bool {
        if self.stage != BiometricStage::Intro {
            return false;
        }
        self.stage = BiometricStage::Capturing;
        debug!("Biometric capture started");
        true
    }

    /// Timer-driven step. Only valid from a transit stage.
    pub fn advance(&mut self) -> bool {
        let next = match self.stage {
            BiometricStage::Capturing => BiometricStage::Verifying,
            BiometricStage::Verifying => BiometricStage::Complete,
            BiometricStage::Intro | BiometricStage::Complete => return false,
        };
        debug!(from = ?self.stage, to = ?next, "Biometric stage advanced");
        self.stage = next;
        true
    }
}

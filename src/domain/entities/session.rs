//! Session gating flags.

bitflags::bitflags! {
    /// Flags deciding which top-level branch renders.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SessionFlags: u8 {
        const LOGGED_IN = 1 << 0;
        const GUEST = 1 << 1;
        const SHOW_KYC = 1 << 2;
    }
}

impl SessionFlags {
    /// Returns whether the login screen must be shown.
    #[must_use]
    pub const fn needs_login(self) -> bool {
        !self.intersects(
            Self::LOGGED_IN
                .union(Self::GUEST)
                .union(Self::SHOW_KYC),
        )
    }

    /// Returns a short label for the header badge.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        if self.contains(Self::LOGGED_IN) {
            "VERIFIED"
        } else if self.contains(Self::GUEST) {
            "GUEST"
        } else if self.contains(Self::SHOW_KYC) {
            "ONBOARDING"
        } else {
            "SIGNED OUT"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_flags_need_login() {
        assert!(SessionFlags::empty().needs_login());
        assert_eq!(SessionFlags::empty().badge(), "SIGNED OUT");
    }

    #[test]
    fn test_any_flag_skips_login() {
        assert!(!SessionFlags::GUEST.needs_login());
        assert!(!SessionFlags::SHOW_KYC.needs_login());
        assert!(!SessionFlags::LOGGED_IN.needs_login());
    }

    #[test]
    fn test_logged_in_badge_wins() {
        let flags = SessionFlags::LOGGED_IN | SessionFlags::GUEST;
        assert_eq!(flags.badge(), "VERIFIED");
    }
}

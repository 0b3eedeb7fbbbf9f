//! Passcode interaction modes

/// What the host is collecting the passcode for
///
/// The mode is fixed for a session's lifetime; a new session must be
/// constructed to change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasscodeMode {
    /// Create a new passcode (entry followed by confirmation)
    Create,

    /// Verify an existing passcode (single entry, no confirmation)
    Verify,

    /// Replace an existing passcode (same flow as Create)
    Change,
}

impl PasscodeMode {
    /// Whether this mode re-enters the code in a confirmation phase
    pub fn has_confirmation(&self) -> bool {
        matches!(self, PasscodeMode::Create | PasscodeMode::Change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_modes() {
        assert!(PasscodeMode::Create.has_confirmation());
        assert!(PasscodeMode::Change.has_confirmation());
        assert!(!PasscodeMode::Verify.has_confirmation());
    }
}

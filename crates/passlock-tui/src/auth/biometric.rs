//! Biometric capability seam
//!
//! A successful biometric attempt ends the interaction immediately with an
//! empty placeholder code, bypassing digit validation entirely. A failed
//! attempt surfaces through the controller's error display channel; a
//! user-cancelled attempt surfaces nothing.

use std::collections::VecDeque;

/// Resolution of a biometric attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiometricOutcome {
    /// The platform authenticated the user
    Success,
    /// The attempt failed for any reason other than the user backing out
    Failure,
    /// The user dismissed the prompt; not an error
    UserCancelled,
}

/// Narrow interface over the platform's biometric authentication
///
/// Injected into the host front end, never into the core controller, so
/// every flow stays testable without a sensor.
pub trait BiometricAuthenticator {
    /// Whether the platform can attempt biometric authentication at all
    fn is_available(&self) -> bool;

    /// Run one authentication attempt to completion
    fn authenticate(&mut self) -> BiometricOutcome;
}

/// Authenticator for platforms without a sensor (any terminal)
#[derive(Debug, Default)]
pub struct NoBiometrics;

impl BiometricAuthenticator for NoBiometrics {
    fn is_available(&self) -> bool {
        false
    }

    fn authenticate(&mut self) -> BiometricOutcome {
        // Nothing to prompt with; equivalent to the user backing out
        BiometricOutcome::UserCancelled
    }
}

/// Test double that replays a scripted sequence of outcomes
#[derive(Debug, Default)]
pub struct ScriptedAuthenticator {
    outcomes: VecDeque<BiometricOutcome>,
}

impl ScriptedAuthenticator {
    /// Script the outcomes of successive attempts
    pub fn new(outcomes: impl IntoIterator<Item = BiometricOutcome>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
        }
    }
}

impl BiometricAuthenticator for ScriptedAuthenticator {
    fn is_available(&self) -> bool {
        true
    }

    fn authenticate(&mut self) -> BiometricOutcome {
        self.outcomes
            .pop_front()
            .unwrap_or(BiometricOutcome::UserCancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_biometrics_is_unavailable() {
        let mut auth = NoBiometrics;
        assert!(!auth.is_available());
        assert_eq!(auth.authenticate(), BiometricOutcome::UserCancelled);
    }

    #[test]
    fn test_scripted_authenticator_replays_in_order() {
        let mut auth = ScriptedAuthenticator::new([
            BiometricOutcome::Failure,
            BiometricOutcome::Success,
        ]);
        assert!(auth.is_available());
        assert_eq!(auth.authenticate(), BiometricOutcome::Failure);
        assert_eq!(auth.authenticate(), BiometricOutcome::Success);
        assert_eq!(auth.authenticate(), BiometricOutcome::UserCancelled);
    }
}

//! Platform capabilities the host injects into the flow
//!
//! The core state machine stays free of platform dependencies; anything
//! that touches a sensor lives behind the seams in this module.

mod biometric;

pub use biometric::{BiometricAuthenticator, BiometricOutcome, NoBiometrics, ScriptedAuthenticator};

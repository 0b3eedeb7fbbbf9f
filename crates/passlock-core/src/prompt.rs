//! Prompt text derivation keyed by mode and phase
//!
//! These strings are part of the observable contract between the controller
//! and any host front end; change them and every rendered screen changes.

use crate::controller::Phase;
use crate::mode::PasscodeMode;

/// Title shown above the dot display
pub fn title_text(mode: PasscodeMode, phase: Phase) -> &'static str {
    match (mode, phase) {
        (PasscodeMode::Create, Phase::Entry) => "Create passcode",
        (PasscodeMode::Create, Phase::Confirm) => "Confirm passcode",
        (PasscodeMode::Verify, _) => "Enter passcode",
        (PasscodeMode::Change, Phase::Entry) => "Create new passcode",
        (PasscodeMode::Change, Phase::Confirm) => "Confirm new passcode",
    }
}

/// Subtitle shown below the title, if the mode/phase has one
///
/// Verify mode has no subtitle; the Create entry subtitle embeds the
/// required length.
pub fn subtitle_text(mode: PasscodeMode, phase: Phase, required_length: usize) -> Option<String> {
    match (mode, phase) {
        (PasscodeMode::Create, Phase::Entry) => {
            Some(format!("Enter a {}-digit passcode", required_length))
        }
        (PasscodeMode::Create, Phase::Confirm) => Some("Please re-enter the passcode".to_string()),
        (PasscodeMode::Verify, _) => None,
        (PasscodeMode::Change, Phase::Entry) => Some("Enter new passcode".to_string()),
        (PasscodeMode::Change, Phase::Confirm) => {
            Some("Please re-enter the new passcode".to_string())
        }
    }
}

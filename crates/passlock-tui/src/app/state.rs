//! Application state

use passlock_core::PasscodeController;

/// Current screen/view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Active passcode entry dialog
    #[default]
    Passcode,

    /// Outcome of the last interaction
    Summary,
}

/// How the last passcode interaction ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The interaction produced a code
    ///
    /// The code itself is handed to the completion callback and not retained
    /// here; only its length is kept for display. `via_biometrics` marks the
    /// biometric bypass, which carries an empty placeholder code.
    Succeeded {
        digits: usize,
        via_biometrics: bool,
    },

    /// The user aborted the interaction
    Cancelled,
}

/// Application state
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// The active passcode session, one per interaction
    ///
    /// `None` between interactions; a fresh controller is constructed when
    /// a new interaction begins and discarded once it resolves.
    pub controller: Option<PasscodeController>,

    /// Outcome of the most recently finished interaction
    pub outcome: Option<SessionOutcome>,

    /// Status message to display on the summary screen
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create new application state with no active session
    pub fn new() -> Self {
        Self {
            screen: Screen::Passcode,
            controller: None,
            outcome: None,
            status_message: None,
        }
    }
}

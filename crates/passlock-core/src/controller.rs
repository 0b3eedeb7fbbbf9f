//! Passcode entry state machine
//!
//! One [`PasscodeController`] per interaction: the host constructs it when a
//! passcode screen is presented, forwards digit/delete/cancel input into it,
//! and discards it once a terminal event has fired. Every operation is a
//! total function over the state; nothing here fails or panics.

use std::sync::mpsc::Receiver;

use tracing::debug;
use zeroize::Zeroizing;

use crate::event::{EventEmitter, PasscodeEvent};
use crate::mode::PasscodeMode;
use crate::prompt;

/// Default number of digits in a passcode
pub const DEFAULT_PASSCODE_LENGTH: usize = 4;

/// Error text shown when the confirmation entry does not match
pub const MISMATCH_MESSAGE: &str = "Passcodes do not match";

/// Entry phase within a session
///
/// `Confirm` is reachable only from Create and Change modes after the first
/// entry completes; Verify mode never leaves `Entry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// First (or only) digit collection
    #[default]
    Entry,

    /// Re-entry to confirm a Create/Change passcode
    Confirm,
}

/// Result of evaluating a completed entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// First entry accepted; the session moved to the confirmation phase
    MovedToConfirmation,

    /// The session finished with the given code
    Succeeded(String),

    /// Confirmation digits differed from the first entry. An error is now
    /// showing; the host should schedule [`PasscodeController::reset`] after
    /// its display delay.
    Mismatch,

    /// The entry is not at the required length (or the session already
    /// ended), so there was nothing to evaluate
    Incomplete,
}

/// The passcode entry state machine
///
/// Digit buffers are zeroized on drop; the code only ever exists as a
/// transient in-memory value and is never persisted here.
pub struct PasscodeController {
    mode: PasscodeMode,
    required_length: usize,
    entered: Zeroizing<String>,
    confirmation: Option<Zeroizing<String>>,
    phase: Phase,
    error_active: bool,
    error_message: String,
    finished: bool,
    events: EventEmitter,
}

impl PasscodeController {
    /// Create a session with the default passcode length
    pub fn new(mode: PasscodeMode) -> Self {
        Self::with_length(mode, DEFAULT_PASSCODE_LENGTH)
    }

    /// Create a session with a custom passcode length
    pub fn with_length(mode: PasscodeMode, required_length: usize) -> Self {
        Self {
            mode,
            // A zero-length passcode would be complete before any input
            required_length: required_length.max(1),
            entered: Zeroizing::new(String::new()),
            confirmation: None,
            phase: Phase::Entry,
            error_active: false,
            error_message: String::new(),
            finished: false,
            events: EventEmitter::new(),
        }
    }

    /// Subscribe to terminal events for this session
    pub fn subscribe(&mut self) -> Receiver<PasscodeEvent> {
        self.events.subscribe()
    }

    /// The session's mode, fixed at construction
    pub fn mode(&self) -> PasscodeMode {
        self.mode
    }

    /// The required passcode length, fixed at construction
    pub fn required_length(&self) -> usize {
        self.required_length
    }

    /// Current entry phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of digits entered so far (drives the dot display)
    pub fn entered_count(&self) -> usize {
        self.entered.len()
    }

    /// Whether the current entry has reached the required length
    ///
    /// The host must call [`Self::evaluate_completion`] immediately after
    /// any `add_digit` call that makes this true.
    pub fn is_complete(&self) -> bool {
        self.entered.len() == self.required_length
    }

    /// The digits entered so far
    pub fn entered(&self) -> &str {
        &self.entered
    }

    /// The stashed first entry, once the session has advanced past it
    pub fn confirmation(&self) -> Option<&str> {
        self.confirmation.as_deref().map(String::as_str)
    }

    /// Whether an error is currently showing
    pub fn error_active(&self) -> bool {
        self.error_active
    }

    /// The error text; empty when no error is showing
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Whether a terminal event has been emitted for this session
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Title for the current mode and phase
    pub fn title_text(&self) -> &'static str {
        prompt::title_text(self.mode, self.phase)
    }

    /// Subtitle for the current mode and phase, if any
    pub fn subtitle_text(&self) -> Option<String> {
        prompt::subtitle_text(self.mode, self.phase, self.required_length)
    }

    /// Append a digit to the current entry
    ///
    /// A no-op once the entry is at capacity, but any shown error is
    /// dismissed regardless - entering a digit is the deterministic way an
    /// error clears on the next user action. Callers pass digits 0-9 only.
    pub fn add_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9, "digit out of range");
        if self.finished {
            return;
        }

        if self.entered.len() < self.required_length {
            self.entered.push(char::from(b'0' + digit));
        }

        self.error_active = false;
        self.error_message.clear();
    }

    /// Remove the last entered digit; a no-op when the entry is empty
    pub fn delete_digit(&mut self) {
        if self.finished {
            return;
        }
        self.entered.pop();
    }

    /// Evaluate a completed entry and drive the mode-specific transition
    ///
    /// Called once per completed entry. Verify mode succeeds immediately;
    /// Create/Change stash the first entry and move to confirmation, then
    /// succeed or flag a mismatch on the second. Terminal outcomes are also
    /// emitted to subscribers.
    pub fn evaluate_completion(&mut self) -> Completion {
        if self.finished || !self.is_complete() {
            return Completion::Incomplete;
        }

        match (self.mode, self.phase) {
            (PasscodeMode::Verify, _) => self.succeed(),
            (_, Phase::Entry) => {
                self.confirmation = Some(self.entered.clone());
                self.entered.clear();
                self.phase = Phase::Confirm;
                debug!(mode = ?self.mode, "first entry complete, moving to confirmation");
                Completion::MovedToConfirmation
            }
            (_, Phase::Confirm) => {
                let matches = self
                    .confirmation
                    .as_ref()
                    .is_some_and(|first| first.as_str() == self.entered.as_str());

                if matches {
                    self.succeed()
                } else {
                    debug!(mode = ?self.mode, "confirmation mismatch");
                    self.error_active = true;
                    self.error_message = MISMATCH_MESSAGE.to_string();
                    Completion::Mismatch
                }
            }
        }
    }

    /// Return the session to its exact initial state
    ///
    /// Clears entered and confirmation digits, the phase, and any error.
    /// Idempotent. A failed confirmation restarts the whole create/change
    /// flow from first entry, not just the confirmation step.
    pub fn reset(&mut self) {
        self.entered.clear();
        self.confirmation = None;
        self.phase = Phase::Entry;
        self.error_active = false;
        self.error_message.clear();
    }

    /// Abort the interaction
    ///
    /// Emits exactly one `Cancelled` event per session and mutates nothing
    /// else.
    pub fn cancel(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        debug!(mode = ?self.mode, "passcode entry cancelled");
        self.events.emit(PasscodeEvent::Cancelled);
    }

    /// Surface an error through the controller's display channel
    ///
    /// Used by hosts to funnel collaborator failures (e.g. a failed
    /// biometric attempt) into the same error presentation as a
    /// confirmation mismatch.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_active = true;
        self.error_message = message.into();
    }

    fn succeed(&mut self) -> Completion {
        let code = self.entered.to_string();
        self.finished = true;
        debug!(mode = ?self.mode, "passcode entry succeeded");
        self.events.emit(PasscodeEvent::Succeeded(code.clone()));
        Completion::Succeeded(code)
    }
}

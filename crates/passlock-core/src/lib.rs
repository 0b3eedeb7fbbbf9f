//! Passlock Core - Passcode entry state machine
//!
//! This crate provides the logic for collecting a fixed-length numeric code
//! from a user: tracking entered digits, driving mode-specific transitions
//! (create/verify/change with an optional confirmation phase), validating
//! confirmation matches, and emitting terminal outcomes.
//!
//! The crate is deliberately free of any rendering or platform dependency.
//! A host front end forwards digit and delete events into
//! [`PasscodeController`], renders its observable state, and subscribes to
//! terminal events.

pub mod controller;
pub mod event;
pub mod mode;
pub mod prompt;

pub use controller::{
    Completion, PasscodeController, Phase, DEFAULT_PASSCODE_LENGTH, MISMATCH_MESSAGE,
};
pub use event::PasscodeEvent;
pub use mode::PasscodeMode;

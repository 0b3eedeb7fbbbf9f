//! Passlock TUI Library
//!
//! This library provides the terminal front end for the passlock passcode
//! entry state machine: screens, theming, the deferred-reset timer, and the
//! biometric capability seam.

pub mod app;
pub mod auth;
pub mod ui;

pub use app::App;

//! Application state and event handling

mod config;
mod state;
mod timer;

pub use config::{ConfigError, ModeConfig, TuiConfig};
pub use state::{AppState, Screen, SessionOutcome};
pub use timer::ResetTimer;

use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use tracing::info;

use passlock_core::{Completion, PasscodeController, PasscodeEvent, PasscodeMode};

use crate::auth::{BiometricAuthenticator, BiometricOutcome, NoBiometrics};
use crate::ui::{self, Theme};

/// Main application struct
pub struct App {
    /// Application state
    pub state: AppState,

    /// Persisted preferences
    pub config: TuiConfig,

    /// Visual theme
    pub theme: Theme,

    /// Injected biometric capability
    pub biometric: Box<dyn BiometricAuthenticator>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Tick counter for animations
    pub tick: u64,

    /// Last tick time
    last_tick: Instant,

    /// Deferred full-reset after a confirmation mismatch
    reset_timer: ResetTimer,

    /// Terminal-event subscription for the active session
    session_events: Option<Receiver<PasscodeEvent>>,
}

impl App {
    /// Create an application with persisted config and no biometric sensor,
    /// with the first session already started
    pub fn new() -> Self {
        let mut app = Self::with_parts(TuiConfig::load(), Box::new(NoBiometrics));
        app.start_session(app.config.initial_mode.into());
        app
    }

    /// Create an application from explicit parts, without an active session
    pub fn with_parts(config: TuiConfig, biometric: Box<dyn BiometricAuthenticator>) -> Self {
        Self {
            state: AppState::new(),
            config,
            theme: Theme::default(),
            biometric,
            should_quit: false,
            tick: 0,
            last_tick: Instant::now(),
            reset_timer: ResetTimer::new(),
            session_events: None,
        }
    }

    /// Begin a new passcode interaction
    ///
    /// Constructs a fresh controller for the mode and subscribes to its
    /// terminal events; any state from a previous interaction is dropped.
    pub fn start_session(&mut self, mode: PasscodeMode) {
        let mut controller = PasscodeController::with_length(mode, self.config.passcode_length);
        self.session_events = Some(controller.subscribe());
        self.state.controller = Some(controller);
        self.state.outcome = None;
        self.state.status_message = None;
        self.state.screen = Screen::Passcode;
        self.reset_timer.cancel();
        info!(?mode, "started passcode session");
    }

    /// Run the application main loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let tick_rate = Duration::from_millis(50);

        while !self.should_quit {
            // Draw UI
            terminal.draw(|frame| ui::render(frame, self))?;

            // Handle events
            let timeout = tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }

            // Update tick
            if self.last_tick.elapsed() >= tick_rate {
                self.tick = self.tick.wrapping_add(1);
                self.last_tick = Instant::now();
                self.on_tick();
            }
        }

        Ok(())
    }

    /// Handle key press events
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.state.screen {
            Screen::Passcode => self.handle_passcode_key(key),
            Screen::Summary => self.handle_summary_key(key),
        }
    }

    fn handle_passcode_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(controller) = self.state.controller.as_mut() {
                    controller.add_digit(c as u8 - b'0');
                    // A completed entry is evaluated immediately after the
                    // keystroke that completed it
                    if controller.is_complete()
                        && controller.evaluate_completion() == Completion::Mismatch
                    {
                        self.reset_timer
                            .schedule(Duration::from_millis(self.config.mismatch_reset_ms));
                    }
                }
                self.drain_session_events();
            }
            KeyCode::Backspace => {
                if let Some(controller) = self.state.controller.as_mut() {
                    controller.delete_digit();
                }
            }
            KeyCode::Esc => {
                if let Some(controller) = self.state.controller.as_mut() {
                    controller.cancel();
                }
                self.drain_session_events();
            }
            KeyCode::Char('b') | KeyCode::Char('B') if self.biometric.is_available() => {
                self.attempt_biometrics();
            }
            _ => {}
        }
    }

    fn handle_summary_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('c') => self.start_session(PasscodeMode::Create),
            KeyCode::Char('v') => self.start_session(PasscodeMode::Verify),
            KeyCode::Char('n') => self.start_session(PasscodeMode::Change),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    /// Timer and deferred-work processing, called once per UI tick
    fn on_tick(&mut self) {
        if self.reset_timer.poll() {
            if let Some(controller) = self.state.controller.as_mut() {
                controller.reset();
            }
        }
    }

    /// Run one biometric attempt and apply its outcome
    fn attempt_biometrics(&mut self) {
        match self.biometric.authenticate() {
            BiometricOutcome::Success => {
                // Bypasses digit validation; the completion callback gets an
                // empty placeholder code
                info!("biometric authentication succeeded");
                self.state.outcome = Some(SessionOutcome::Succeeded {
                    digits: 0,
                    via_biometrics: true,
                });
                self.state.status_message = Some("Unlocked with biometrics".to_string());
                self.close_session();
            }
            BiometricOutcome::Failure => {
                if let Some(controller) = self.state.controller.as_mut() {
                    controller.show_error("Biometric authentication failed");
                }
            }
            BiometricOutcome::UserCancelled => {}
        }
    }

    /// Apply terminal events emitted by the active session
    fn drain_session_events(&mut self) {
        let drained: Vec<PasscodeEvent> = match &self.session_events {
            Some(events) => events.try_iter().collect(),
            None => return,
        };

        for event in drained {
            match event {
                PasscodeEvent::Succeeded(code) => {
                    // The code is handed to the host's completion callback
                    // here and deliberately not retained
                    info!(digits = code.len(), "passcode interaction succeeded");
                    self.state.outcome = Some(SessionOutcome::Succeeded {
                        digits: code.len(),
                        via_biometrics: false,
                    });
                    self.state.status_message = Some("Passcode accepted".to_string());
                    self.close_session();
                }
                PasscodeEvent::Cancelled => {
                    info!("passcode interaction cancelled");
                    self.state.outcome = Some(SessionOutcome::Cancelled);
                    self.state.status_message = Some("Entry cancelled".to_string());
                    self.close_session();
                }
            }
        }
    }

    /// Discard the resolved session and show the summary screen
    fn close_session(&mut self) {
        self.state.controller = None;
        self.session_events = None;
        self.reset_timer.cancel();
        self.state.screen = Screen::Summary;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ScriptedAuthenticator;
    use passlock_core::Phase;
    use std::thread::sleep;

    fn test_app(mode: PasscodeMode) -> App {
        test_app_with(mode, TuiConfig::default(), Box::new(NoBiometrics))
    }

    fn test_app_with(
        mode: PasscodeMode,
        config: TuiConfig,
        biometric: Box<dyn BiometricAuthenticator>,
    ) -> App {
        let mut app = App::with_parts(config, biometric);
        app.start_session(mode);
        app
    }

    fn press(app: &mut App, code: &str) {
        for c in code.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_create_flow_reaches_summary() {
        let mut app = test_app(PasscodeMode::Create);
        press(&mut app, "1234");
        assert_eq!(app.state.screen, Screen::Passcode);

        press(&mut app, "1234");
        assert_eq!(app.state.screen, Screen::Summary);
        assert_eq!(
            app.state.outcome,
            Some(SessionOutcome::Succeeded {
                digits: 4,
                via_biometrics: false
            })
        );
        assert!(app.state.controller.is_none());
    }

    #[test]
    fn test_mismatch_schedules_deferred_reset() {
        let config = TuiConfig {
            mismatch_reset_ms: 10,
            ..TuiConfig::default()
        };
        let mut app = test_app_with(PasscodeMode::Create, config, Box::new(NoBiometrics));

        press(&mut app, "1234");
        press(&mut app, "5678");

        let controller = app.state.controller.as_ref().unwrap();
        assert!(controller.error_active());
        assert!(app.reset_timer.is_pending());

        sleep(Duration::from_millis(20));
        app.on_tick();

        let controller = app.state.controller.as_ref().unwrap();
        assert_eq!(controller.phase(), Phase::Entry);
        assert_eq!(controller.entered_count(), 0);
        assert!(!controller.error_active());
        assert!(!app.reset_timer.is_pending());
    }

    #[test]
    fn test_backspace_deletes_a_digit() {
        let mut app = test_app(PasscodeMode::Verify);
        press(&mut app, "12");
        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.state.controller.as_ref().unwrap().entered_count(), 1);
    }

    #[test]
    fn test_escape_cancels_the_interaction() {
        let mut app = test_app(PasscodeMode::Verify);
        press(&mut app, "12");
        app.handle_key(KeyCode::Esc);

        assert_eq!(app.state.screen, Screen::Summary);
        assert_eq!(app.state.outcome, Some(SessionOutcome::Cancelled));
    }

    #[test]
    fn test_biometric_success_bypasses_digit_entry() {
        let auth = ScriptedAuthenticator::new([BiometricOutcome::Success]);
        let mut app = test_app_with(
            PasscodeMode::Verify,
            TuiConfig::default(),
            Box::new(auth),
        );
        press(&mut app, "12");
        app.handle_key(KeyCode::Char('b'));

        assert_eq!(app.state.screen, Screen::Summary);
        assert_eq!(
            app.state.outcome,
            Some(SessionOutcome::Succeeded {
                digits: 0,
                via_biometrics: true
            })
        );
    }

    #[test]
    fn test_biometric_failure_surfaces_error() {
        let auth = ScriptedAuthenticator::new([BiometricOutcome::Failure]);
        let mut app = test_app_with(
            PasscodeMode::Verify,
            TuiConfig::default(),
            Box::new(auth),
        );
        app.handle_key(KeyCode::Char('b'));

        let controller = app.state.controller.as_ref().unwrap();
        assert_eq!(app.state.screen, Screen::Passcode);
        assert!(controller.error_active());
        assert_eq!(controller.error_message(), "Biometric authentication failed");
    }

    #[test]
    fn test_biometric_user_cancel_surfaces_nothing() {
        let auth = ScriptedAuthenticator::new([BiometricOutcome::UserCancelled]);
        let mut app = test_app_with(
            PasscodeMode::Verify,
            TuiConfig::default(),
            Box::new(auth),
        );
        app.handle_key(KeyCode::Char('b'));

        let controller = app.state.controller.as_ref().unwrap();
        assert_eq!(app.state.screen, Screen::Passcode);
        assert!(!controller.error_active());
    }

    #[test]
    fn test_biometric_key_ignored_without_sensor() {
        let mut app = test_app(PasscodeMode::Verify);
        app.handle_key(KeyCode::Char('b'));
        assert_eq!(app.state.screen, Screen::Passcode);
        assert!(app.state.outcome.is_none());
    }

    #[test]
    fn test_digit_entry_dismisses_biometric_error() {
        let auth = ScriptedAuthenticator::new([BiometricOutcome::Failure]);
        let mut app = test_app_with(
            PasscodeMode::Verify,
            TuiConfig::default(),
            Box::new(auth),
        );
        app.handle_key(KeyCode::Char('b'));
        assert!(app.state.controller.as_ref().unwrap().error_active());

        press(&mut app, "1");
        assert!(!app.state.controller.as_ref().unwrap().error_active());
    }

    #[test]
    fn test_summary_keys_start_new_sessions() {
        let mut app = test_app(PasscodeMode::Create);
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.state.screen, Screen::Summary);

        app.handle_key(KeyCode::Char('v'));
        assert_eq!(app.state.screen, Screen::Passcode);
        let controller = app.state.controller.as_ref().unwrap();
        assert_eq!(controller.mode(), PasscodeMode::Verify);
        assert_eq!(controller.entered_count(), 0);
    }

    #[test]
    fn test_quit_from_summary() {
        let mut app = test_app(PasscodeMode::Verify);
        app.handle_key(KeyCode::Esc);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_custom_length_from_config() {
        let config = TuiConfig {
            passcode_length: 6,
            ..TuiConfig::default()
        };
        let mut app = test_app_with(PasscodeMode::Change, config, Box::new(NoBiometrics));

        press(&mut app, "123456");
        assert_eq!(
            app.state.controller.as_ref().unwrap().phase(),
            Phase::Confirm
        );

        press(&mut app, "123456");
        assert_eq!(app.state.screen, Screen::Summary);
        assert_eq!(
            app.state.outcome,
            Some(SessionOutcome::Succeeded {
                digits: 6,
                via_biometrics: false
            })
        );
    }
}

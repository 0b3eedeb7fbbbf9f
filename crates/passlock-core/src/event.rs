//! Terminal events and the host subscription channel

use std::sync::mpsc::{channel, Receiver, Sender};

/// Terminal outcome of a passcode session
///
/// A session ends in exactly one of these; intermediate states (phase
/// changes, mismatch errors) are observable on the controller itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasscodeEvent {
    /// Entry finished successfully with the resulting code
    Succeeded(String),

    /// The user aborted the interaction
    Cancelled,
}

/// Fan-out emitter for terminal events
///
/// Hosts subscribe once per interested party and drain their receiver from
/// their own event loop. Subscribers whose receiver has been dropped are
/// pruned on the next emit.
#[derive(Debug, Default)]
pub struct EventEmitter {
    subscribers: Vec<Sender<PasscodeEvent>>,
}

impl EventEmitter {
    /// Create an emitter with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber and return its receiving end
    pub fn subscribe(&mut self) -> Receiver<PasscodeEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver an event to every live subscriber
    pub fn emit(&mut self, event: PasscodeEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Number of currently registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_reaches_all_subscribers() {
        let mut emitter = EventEmitter::new();
        let rx1 = emitter.subscribe();
        let rx2 = emitter.subscribe();

        emitter.emit(PasscodeEvent::Cancelled);

        assert_eq!(rx1.try_recv(), Ok(PasscodeEvent::Cancelled));
        assert_eq!(rx2.try_recv(), Ok(PasscodeEvent::Cancelled));
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let mut emitter = EventEmitter::new();
        let rx = emitter.subscribe();
        drop(emitter.subscribe());
        assert_eq!(emitter.subscriber_count(), 2);

        emitter.emit(PasscodeEvent::Succeeded("1234".to_string()));

        assert_eq!(emitter.subscriber_count(), 1);
        assert_eq!(rx.try_recv(), Ok(PasscodeEvent::Succeeded("1234".to_string())));
    }

    #[test]
    fn test_emit_without_subscribers_is_noop() {
        let mut emitter = EventEmitter::new();
        emitter.emit(PasscodeEvent::Cancelled);
        assert_eq!(emitter.subscriber_count(), 0);
    }
}

//! Notifier implementations.

use std::sync::mpsc::{self, Receiver, Sender};

use super::event::GameEvent;

/// An observer receiving game events as they happen.
pub trait Notifier {
    fn notify(&mut self, event: &GameEvent);
}

/// Prints events to stdout.
///
/// The win line is bare output; everything else gets the `[NOTIFY]`
/// prefix.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PlayerWon { .. } => println!("\n{}", event),
            _ => println!("[NOTIFY] {}", event),
        }
    }
}

/// Forwards events over an mpsc channel.
///
/// Tests keep the receiver and assert on the event sequence after
/// driving turns. Sends to a dropped receiver are ignored; a departed
/// observer shouldn't take the game down.
#[derive(Debug)]
pub struct ChannelNotifier {
    tx: Sender<GameEvent>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiving end of its channel.
    #[must_use]
    pub fn new() -> (Self, Receiver<GameEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&mut self, event: &GameEvent) {
        let _ = self.tx.send(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_notifier_forwards_events() {
        let (mut notifier, rx) = ChannelNotifier::new();

        notifier.notify(&GameEvent::GameStarted);
        notifier.notify(&GameEvent::GameOver);

        let received: Vec<_> = rx.try_iter().collect();
        assert_eq!(received, vec![GameEvent::GameStarted, GameEvent::GameOver]);
    }

    #[test]
    fn test_dropped_receiver_is_harmless() {
        let (mut notifier, rx) = ChannelNotifier::new();
        drop(rx);

        notifier.notify(&GameEvent::GameStarted);
    }
}

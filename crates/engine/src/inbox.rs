//! Inbound transition queue.
//!
//! The platform delivers transition events asynchronously, one broadcast
//! per OS event. The inbox funnels them into a bounded channel drained by
//! a single worker thread, so the state machine sees events one at a time
//! and in arrival order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender, TrySendError};
use hush_ringer::TransitionEvent;

use crate::service::HushEngine;

/// Default capacity of the inbound event channel.
pub const DEFAULT_INBOX_CAPACITY: usize = 64;

/// Bounded queue in front of the engine.
pub struct TransitionInbox {
    sender: TransitionSender,
    receiver: Option<Receiver<TransitionEvent>>,
}

impl Default for TransitionInbox {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_INBOX_CAPACITY)
    }
}

impl TransitionInbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, rx) = crossbeam_channel::bounded(capacity);
        Self {
            sender: TransitionSender {
                tx,
                dropped: Arc::new(AtomicU64::new(0)),
            },
            receiver: Some(rx),
        }
    }

    /// Get a clone of the sender.
    pub fn sender(&self) -> TransitionSender {
        self.sender.clone()
    }

    /// Take the receiver (can only be called once).
    pub fn take_receiver(&mut self) -> Option<Receiver<TransitionEvent>> {
        self.receiver.take()
    }
}

/// Sender half of the inbox.
#[derive(Clone)]
pub struct TransitionSender {
    tx: Sender<TransitionEvent>,
    dropped: Arc<AtomicU64>,
}

impl TransitionSender {
    /// Enqueue an event without blocking, dropping it if the queue is
    /// full.
    ///
    /// Returns true if enqueued.
    pub fn send(&self, event: TransitionEvent) -> bool {
        match self.tx.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                let dropped = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
                // Rate-limit logging: only every 10th drop.
                if dropped % 10 == 1 {
                    tracing::warn!(
                        dropped,
                        region = %event.region_id,
                        "transition inbox full, dropping events"
                    );
                }
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::debug!("transition inbox closed");
                false
            }
        }
    }

    /// Number of events dropped because the queue was full.
    pub fn dropped_events(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

/// Single worker thread draining an inbox into the engine.
pub struct InboxWorker {
    handle: JoinHandle<()>,
}

impl InboxWorker {
    /// Start draining `receiver` into `engine`.
    ///
    /// The worker exits once every [`TransitionSender`] clone is dropped
    /// and the queue is drained.
    pub fn start(engine: Arc<HushEngine>, receiver: Receiver<TransitionEvent>) -> Self {
        let handle = std::thread::spawn(move || {
            tracing::info!("transition worker started");
            for event in receiver {
                let outcome = engine.on_transition(event);
                tracing::debug!(
                    region = %outcome.directive.region_id,
                    changed = outcome.changed,
                    mode = %outcome.effective_mode,
                    "transition processed"
                );
            }
            tracing::info!("transition worker stopped");
        });
        Self { handle }
    }

    /// Wait for the worker to drain and exit.
    ///
    /// Drop all senders first, or this blocks forever.
    pub fn join(self) {
        let _ = self.handle.join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{NullActuator, NullRegistrar};
    use hush_events::{event_names, InMemoryEventBus};
    use hush_geofence::Place;
    use hush_ringer::RingerMode;

    fn engine(bus: Arc<InMemoryEventBus>) -> Arc<HushEngine> {
        Arc::new(HushEngine::new(
            Arc::new(NullRegistrar),
            Arc::new(NullActuator),
            bus,
        ))
    }

    #[test]
    fn test_worker_drains_in_order() {
        let bus = Arc::new(InMemoryEventBus::new());
        let engine = engine(Arc::clone(&bus));
        engine
            .on_places_changed(vec![Place::with_coordinates("home", "Home", 1.0, 2.0)])
            .unwrap();

        let mut inbox = TransitionInbox::new();
        let sender = inbox.sender();
        let worker = InboxWorker::start(
            Arc::clone(&engine),
            inbox.take_receiver().expect("receiver already taken"),
        );

        assert!(sender.send(TransitionEvent::enter("home")));
        assert!(sender.send(TransitionEvent::exit("home")));
        assert!(sender.send(TransitionEvent::enter("home")));

        drop(inbox);
        drop(sender);
        worker.join();

        assert_eq!(engine.current_mode(), RingerMode::Silent);
        let changes = bus.events_for(event_names::RINGER_CHANGED);
        assert_eq!(changes.len(), 3);
        assert_eq!(changes[0].payload["mode"], "silent");
        assert_eq!(changes[1].payload["mode"], "normal");
        assert_eq!(changes[2].payload["mode"], "silent");
    }

    #[test]
    fn test_full_inbox_drops_and_counts() {
        let inbox = TransitionInbox::with_capacity(1);
        let sender = inbox.sender();

        assert!(sender.send(TransitionEvent::enter("a")));
        // No worker is draining, so the second event has nowhere to go.
        assert!(!sender.send(TransitionEvent::enter("b")));
        assert_eq!(sender.dropped_events(), 1);
    }

    #[test]
    fn test_send_after_receiver_dropped() {
        let mut inbox = TransitionInbox::new();
        let sender = inbox.sender();
        drop(inbox.take_receiver());
        drop(inbox);

        assert!(!sender.send(TransitionEvent::enter("a")));
        // Disconnection is not a drop: the queue was not full.
        assert_eq!(sender.dropped_events(), 0);
    }
}

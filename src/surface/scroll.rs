//! Viewport events and the sticky-header observer
//!
//! The viewport fans out scroll and frame events to subscribers over
//! channels. The observer records only the latest scroll offset and applies
//! it on the next frame, so a burst of scroll events costs at most one
//! sticky-state change.

use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ViewportEvent {
    Scroll { y: f64 },
    Frame,
}

pub(crate) type ListenerId = u64;

/// A live listener registration; pass `id` back to [`Viewport::unsubscribe`]
#[derive(Debug)]
pub(crate) struct Subscription {
    pub(crate) id: ListenerId,
    pub(crate) events: Receiver<ViewportEvent>,
}

#[derive(Debug, Default)]
pub(crate) struct Viewport {
    next_id: ListenerId,
    listeners: Vec<(ListenerId, Sender<ViewportEvent>)>,
}

impl Viewport {
    pub(crate) fn subscribe(&mut self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, tx));
        Subscription { id, events: rx }
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener, _)| *listener != id);
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn scroll_to(&mut self, y: f64) {
        self.dispatch(ViewportEvent::Scroll { y });
    }

    /// Signal a repaint opportunity
    pub(crate) fn frame(&mut self) {
        self.dispatch(ViewportEvent::Frame);
    }

    fn dispatch(&mut self, event: ViewportEvent) {
        // A failed send means the receiver is gone
        self.listeners.retain(|(_, tx)| tx.send(event).is_ok());
    }
}

/// Two-state machine: sticky iff the offset applied at the last frame is
/// strictly above the threshold.
#[derive(Debug, Clone)]
pub(crate) struct ScrollObserver {
    threshold: f64,
    pending: Option<f64>,
}

impl ScrollObserver {
    pub(crate) fn new(threshold: f64) -> Self {
        ScrollObserver {
            threshold,
            pending: None,
        }
    }

    /// Feed one event; returns the new sticky value when it changes
    pub(crate) fn handle(&mut self, event: ViewportEvent, sticky: bool) -> Option<bool> {
        match event {
            ViewportEvent::Scroll { y } => {
                self.pending = Some(y);
                None
            }
            ViewportEvent::Frame => {
                let y = self.pending.take()?;
                let next = y > self.threshold;
                (next != sticky).then_some(next)
            }
        }
    }
}

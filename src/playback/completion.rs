//! One-shot playback completion signal

use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Fires the completion signal; only the first `fire` counts
#[derive(Clone)]
pub struct CompletionTrigger {
    fired: Arc<AtomicBool>,
    sender: Sender<()>,
}

/// Blocks until the signal fires
pub struct CompletionWaiter {
    fired: Arc<AtomicBool>,
    receiver: Receiver<()>,
}

/// Create a connected trigger/waiter pair
pub fn one_shot() -> (CompletionTrigger, CompletionWaiter) {
    let (sender, receiver) = bounded(1);
    let fired = Arc::new(AtomicBool::new(false));
    (
        CompletionTrigger {
            fired: fired.clone(),
            sender,
        },
        CompletionWaiter { fired, receiver },
    )
}

impl CompletionTrigger {
    /// Returns true if this call fired the signal
    pub fn fire(&self) -> bool {
        if self.fired.swap(true, Ordering::AcqRel) {
            return false;
        }
        let _ = self.sender.try_send(());
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}

impl CompletionWaiter {
    /// Block with no timeout. Returns false if every trigger was dropped
    /// without firing.
    pub fn wait(self) -> bool {
        self.receiver.recv().is_ok() || self.fired.load(Ordering::Acquire)
    }
}

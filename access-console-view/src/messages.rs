use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug, Default)]
struct MessageSlot {
    message: Option<String>,
    generation: u64,
    clear_task: Option<JoinHandle<()>>,
}

/// # Documentation
/// A user-facing notice ("User saved") that clears itself after a delay.
///
/// Showing a new message cancels the pending clear of the previous one, so
/// each message stays visible for the full delay. Clones share the slot.
/// [`TransientMessage::show`] must be called inside a tokio runtime.
#[derive(Debug, Clone)]
pub struct TransientMessage {
    slot: Arc<Mutex<MessageSlot>>,
    ttl: Duration,
}

impl TransientMessage {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(MessageSlot::default())),
            ttl,
        }
    }

    /// The message currently visible, if any
    pub fn current(&self) -> Option<String> {
        self.slot.lock().message.clone()
    }

    pub fn show(&self, message: impl Into<String>) {
        let mut slot = self.slot.lock();
        slot.generation += 1;
        slot.message = Some(message.into());
        if let Some(previous) = slot.clear_task.take() {
            previous.abort();
        }

        let generation = slot.generation;
        let shared = Arc::clone(&self.slot);
        let ttl = self.ttl;
        slot.clear_task = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut slot = shared.lock();
            if slot.generation == generation {
                debug!(generation, "transient message expired");
                slot.message = None;
                slot.clear_task = None;
            }
        }));
    }

    /// Hide the message now and cancel its pending expiry
    pub fn clear(&self) {
        let mut slot = self.slot.lock();
        slot.generation += 1;
        slot.message = None;
        if let Some(task) = slot.clear_task.take() {
            task.abort();
        }
    }
}

//! Shared panel plumbing.
//!
//! Every panel owns exactly one frame and one listener id (the frame's
//! numeric id). The binding carries the teardown contract: when the frame
//! is disposed, send DISCONNECT on the panel's task and drop its
//! subscription.

use std::sync::{Arc, Mutex, OnceLock};

use benchdeck_common::{ListenerId, TaskId};
use benchdeck_mux::{ChannelState, Multiplexer};
use serde_json::json;

pub(crate) struct ChannelBinding {
    mux: Multiplexer,
    task: Mutex<TaskId>,
    listener: OnceLock<ListenerId>,
}

impl ChannelBinding {
    pub fn new(mux: Multiplexer, task: TaskId) -> Arc<Self> {
        Arc::new(Self {
            mux,
            task: Mutex::new(task),
            listener: OnceLock::new(),
        })
    }

    /// Record the listener id once the frame (and thus the id) exists.
    pub fn bind(&self, listener: ListenerId) {
        let _ = self.listener.set(listener);
    }

    /// Point the binding at a different task (control panel task switch).
    pub fn retask(&self, task: TaskId) {
        *self.task.lock().unwrap_or_else(|e| e.into_inner()) = task;
    }

    /// Disposal path: DISCONNECT then unsubscribe. Safe to call with the
    /// link already closed; the send degrades to `false`.
    pub fn teardown(&self) {
        let task = *self.task.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(&listener) = self.listener.get() {
            if !self.mux.send(task, ChannelState::Disconnect, json!({})) {
                tracing::debug!(task = %task, "disconnect not sent, link closed");
            }
            self.mux.unsubscribe(listener);
        }
    }
}

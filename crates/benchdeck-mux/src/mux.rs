//! The connection multiplexer: subscribe/unsubscribe/send plus inbound
//! dispatch, over exactly one transport.

use std::sync::{Arc, Mutex, MutexGuard};

use benchdeck_common::{ListenerId, MuxError, TaskId};
use serde_json::Value;

use crate::diag::{DropReason, DropSink, LogDropSink};
use crate::protocol::{ChannelState, ClientFrame, ServerFrame};
use crate::transport::{Connector, ToggleSurface, Transport, TransportEvent};

/// Transport lifecycle. `Closed -> Connecting` is permitted: a closed link
/// may be reopened with a fresh `connect()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Unopened,
    Connecting,
    Open,
    Closed,
}

/// Invoked for every inbound frame matching the subscription's task id.
pub type TaskCallback = Box<dyn FnMut(bool, &Value) + Send>;

struct Subscription {
    listener: ListenerId,
    task: TaskId,
    callback: TaskCallback,
}

struct LinkCore {
    state: LinkState,
    transport: Option<Box<dyn Transport>>,
    toggle: Option<Box<dyn ToggleSurface>>,
}

struct SubTable {
    entries: Vec<Subscription>,
    drops: Box<dyn DropSink>,
}

/// Clonable handle to the one shared connection.
///
/// Link state and the subscription table are guarded separately: dispatch
/// callbacks run under the subscription lock and may call `send`,
/// `connect` or `disconnect` (link lock), but must not re-enter
/// `subscribe`/`unsubscribe`.
#[derive(Clone)]
pub struct Multiplexer {
    connector: Arc<dyn Connector>,
    link: Arc<Mutex<LinkCore>>,
    subs: Arc<Mutex<SubTable>>,
}

impl Multiplexer {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self::with_drop_sink(connector, Box::new(LogDropSink))
    }

    pub fn with_drop_sink(connector: Arc<dyn Connector>, drops: Box<dyn DropSink>) -> Self {
        Self {
            connector,
            link: Arc::new(Mutex::new(LinkCore {
                state: LinkState::Unopened,
                transport: None,
                toggle: None,
            })),
            subs: Arc::new(Mutex::new(SubTable {
                entries: Vec::new(),
                drops,
            })),
        }
    }

    /// Register the UI control that mirrors connection state.
    pub fn register_toggle(&self, toggle: Box<dyn ToggleSurface>) {
        self.lock_link().toggle = Some(toggle);
    }

    pub fn link_state(&self) -> LinkState {
        self.lock_link().state
    }

    pub fn subscription_count(&self) -> usize {
        self.lock_subs().entries.len()
    }

    /// Open the transport and start pumping inbound events.
    ///
    /// Idempotent: while the link is `Open` or `Connecting` this is a
    /// logged no-op, so racing callers cannot create a second transport.
    pub async fn connect(&self) -> Result<(), MuxError> {
        let prior = {
            let mut link = self.lock_link();
            match link.state {
                LinkState::Open | LinkState::Connecting => {
                    tracing::debug!(state = ?link.state, "connect() ignored, link already live");
                    return Ok(());
                }
                prior => {
                    link.state = LinkState::Connecting;
                    prior
                }
            }
        };

        let (transport, mut events) = match self.connector.open().await {
            Ok(pair) => pair,
            Err(e) => {
                self.lock_link().state = prior;
                return Err(e);
            }
        };

        {
            let mut link = self.lock_link();
            link.transport = Some(transport);
            link.state = LinkState::Open;
            if let Some(toggle) = link.toggle.as_mut() {
                toggle.set_connected(true);
            }
        }
        tracing::info!("transport connected");

        let mux = self.clone();
        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                match event {
                    TransportEvent::Message(text) => mux.ingest(&text),
                    TransportEvent::Error(e) => {
                        tracing::warn!(error = %e, "transport error");
                    }
                    TransportEvent::Closed => break,
                }
            }
            mux.finish_close();
        });

        Ok(())
    }

    /// Request an orderly close of the live transport.
    pub fn disconnect(&self) -> Result<(), MuxError> {
        let mut link = self.lock_link();
        if link.state != LinkState::Open {
            return Err(MuxError::NotConnected);
        }
        match link.transport.as_mut() {
            Some(transport) => {
                transport.close();
                Ok(())
            }
            None => Err(MuxError::NotConnected),
        }
    }

    /// Serialize one outbound frame and hand it to the transport.
    ///
    /// Returns `false` without raising when the link is not open; callers
    /// for whom the send is load-bearing must check the result.
    pub fn send(&self, task: TaskId, state: ChannelState, payload: Value) -> bool {
        let mut link = self.lock_link();
        if link.state != LinkState::Open {
            tracing::debug!(task = %task, "send dropped, link not open");
            return false;
        }
        let Some(transport) = link.transport.as_mut() else {
            return false;
        };
        let frame = ClientFrame {
            task_id: task,
            state,
            payload,
        };
        match serde_json::to_string(&frame) {
            Ok(json) => transport.send(json),
            Err(e) => {
                tracing::warn!(task = %task, error = %e, "outbound frame failed to serialize");
                false
            }
        }
    }

    /// Register `callback` for inbound frames tagged with `task`.
    ///
    /// Listener ids are unique across live subscriptions; several listeners
    /// may share a task id and are notified in subscription order.
    pub fn subscribe(
        &self,
        listener: ListenerId,
        task: TaskId,
        callback: impl FnMut(bool, &Value) + Send + 'static,
    ) -> Result<(), MuxError> {
        if self.lock_link().state == LinkState::Unopened {
            return Err(MuxError::NoActiveConnection);
        }
        let mut subs = self.lock_subs();
        if subs.entries.iter().any(|s| s.listener == listener) {
            return Err(MuxError::DuplicateListener(listener));
        }
        subs.entries.push(Subscription {
            listener,
            task,
            callback: Box::new(callback),
        });
        Ok(())
    }

    /// Remove every subscription held by `listener`. Infallible; unknown
    /// ids are a no-op.
    pub fn unsubscribe(&self, listener: ListenerId) {
        self.lock_subs().entries.retain(|s| s.listener != listener);
    }

    /// Feed one raw inbound frame into dispatch.
    ///
    /// This is the entry point used by transport pumps. Malformed frames
    /// and frames with no matching subscription go to the drop sink;
    /// matching callbacks run synchronously in subscription order.
    pub fn ingest(&self, raw: &str) {
        let frame: ServerFrame = match serde_json::from_str(raw) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::debug!(error = %e, "inbound frame unparseable");
                self.lock_subs().drops.frame_dropped(DropReason::ParseFailure, raw);
                return;
            }
        };

        let mut subs = self.lock_subs();
        let SubTable { entries, drops } = &mut *subs;
        let mut delivered = 0usize;
        for sub in entries.iter_mut() {
            if sub.task == frame.task_id {
                (sub.callback)(frame.success, &frame.response);
                delivered += 1;
            }
        }
        if delivered == 0 {
            drops.frame_dropped(DropReason::UnmatchedTask, raw);
        }
    }

    fn finish_close(&self) {
        let mut link = self.lock_link();
        link.transport = None;
        link.state = LinkState::Closed;
        if let Some(toggle) = link.toggle.as_mut() {
            toggle.set_connected(false);
        }
        tracing::info!("transport closed");
    }

    fn lock_link(&self) -> MutexGuard<'_, LinkCore> {
        self.link.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_subs(&self) -> MutexGuard<'_, SubTable> {
        self.subs.lock().unwrap_or_else(|e| e.into_inner())
    }
}

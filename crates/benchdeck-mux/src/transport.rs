//! Transport seams: the multiplexer never touches a socket directly.

use async_trait::async_trait;
use benchdeck_common::MuxError;
use tokio::sync::mpsc;

/// Events a transport's pump delivers to the multiplexer.
#[derive(Debug)]
pub enum TransportEvent {
    /// One inbound text frame, in transport order.
    Message(String),
    /// A transport-level fault. The connection may still close normally after.
    Error(String),
    /// The transport is gone; no further events follow.
    Closed,
}

/// An open, ordered, message-based connection.
///
/// Sends are fire-and-forget: `true` means the frame was handed to the
/// transport, not that the backend received it.
pub trait Transport: Send {
    fn send(&mut self, text: String) -> bool;

    /// Request an orderly close. The matching [`TransportEvent::Closed`]
    /// arrives on the event channel once the close completes.
    fn close(&mut self);
}

/// Opens transports. Injected into the multiplexer by the composition root.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn open(
        &self,
    ) -> Result<(Box<dyn Transport>, mpsc::Receiver<TransportEvent>), MuxError>;
}

/// The UI control mirroring connection state (the header toggle in the
/// original dashboard). Optional; registered by the composition root.
pub trait ToggleSurface: Send {
    fn set_connected(&mut self, connected: bool);
}

//! benchdeck-mux: one websocket, many logical channels.
//!
//! The [`Multiplexer`] owns the single transport connection and routes
//! every inbound frame to the subscribers registered for its task id.
//! Transports are reached through the [`Connector`]/[`Transport`] seams so
//! the composition root injects the real websocket and tests inject fakes.

pub mod diag;
pub mod mux;
pub mod protocol;
pub mod transport;
pub mod ws;

pub use diag::{CountingDropSink, DropCounts, DropReason, DropSink, LogDropSink};
pub use mux::{LinkState, Multiplexer};
pub use protocol::{ChannelState, ClientFrame, ServerFrame};
pub use transport::{Connector, ToggleSurface, Transport, TransportEvent};
pub use ws::WsConnector;

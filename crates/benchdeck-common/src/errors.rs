use crate::ids::{FrameId, ListenerId};

#[derive(Debug, thiserror::Error)]
pub enum MuxError {
    /// `disconnect()` with no live transport, or the transport is already closed.
    #[error("transport is not connected")]
    NotConnected,

    /// `subscribe()` on a multiplexer that was never connected.
    #[error("no active connection has ever been established")]
    NoActiveConnection,

    /// A subscription for this listener id is already live.
    #[error("listener {0} is already subscribed")]
    DuplicateListener(ListenerId),

    #[error("connect failed: {0}")]
    ConnectFailed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// No display surface is registered; showing frames is a configuration error.
    #[error("no display surface is registered")]
    NoSurface,

    #[error("{0} is already attached to the display surface")]
    AlreadyShown(FrameId),

    #[error("{0} does not exist")]
    UnknownFrame(FrameId),
}

#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error(transparent)]
    Mux(#[from] MuxError),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

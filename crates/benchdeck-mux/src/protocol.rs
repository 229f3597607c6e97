//! Wire protocol: one JSON object per websocket text frame.

use benchdeck_common::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether an outbound frame starts or stops the named task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelState {
    Connect,
    Disconnect,
}

/// Frame sent to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientFrame {
    pub task_id: TaskId,
    pub state: ChannelState,
    pub payload: Value,
}

/// Frame received from the backend. `response` is opaque to the mux;
/// streaming tasks carry a base64 image, control tasks leave it reserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerFrame {
    pub task_id: TaskId,
    pub success: bool,
    #[serde(default)]
    pub response: Value,
}

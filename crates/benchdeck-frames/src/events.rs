use benchdeck_common::{FrameId, Point};
use serde::{Deserialize, Serialize};

/// Lifecycle notifications published by the frame manager.
///
/// Chrome and the panel registry observe these through a `ListenerHub`
/// instead of owning the manager.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum FrameEvent {
    Shown(FrameId),
    Focused(FrameId),
    Moved(FrameId, Point),
    Disposed(FrameId),
}

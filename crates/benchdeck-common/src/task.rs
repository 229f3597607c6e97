use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical channel tag multiplexed over the single transport.
///
/// Every outbound request and inbound reply carries one of these; the
/// multiplexer routes replies to the subscribers registered for the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskId {
    Set,
    Circle,
    Nunchuck,
    VideoCam,
    BallOnPlate,
}

impl TaskId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskId::Set => "set",
            TaskId::Circle => "circle",
            TaskId::Nunchuck => "nunchuck",
            TaskId::VideoCam => "video_cam",
            TaskId::BallOnPlate => "ball_on_plate",
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

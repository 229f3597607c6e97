use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one floating frame. Assigned monotonically by the frame
/// manager, never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameId(pub u32);

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame-{}", self.0)
    }
}

/// Identifier of one multiplexer subscription owner. Panels use their
/// frame's numeric id so the two lifecycles stay in lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

impl From<FrameId> for ListenerId {
    fn from(id: FrameId) -> Self {
        ListenerId(id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!(FrameId(3).to_string(), "frame-3");
        assert_eq!(ListenerId(7).to_string(), "listener-7");
    }

    #[test]
    fn listener_from_frame() {
        assert_eq!(ListenerId::from(FrameId(12)), ListenerId(12));
    }
}

//! Focus (z-order) handling for FrameManager.

use benchdeck_common::{FrameId, Point};

use crate::events::FrameEvent;

use super::FrameManager;

impl FrameManager {
    /// Raise a frame to the top of the stack. Returns `false` when the
    /// frame is unknown or already topmost (strict z maximum).
    pub fn focus(&mut self, id: FrameId) -> bool {
        let top = self.z_counter;
        let Some(frame) = self.frames.get_mut(&id.0) else {
            return false;
        };
        if frame.z == top {
            return false;
        }

        frame.z = self.z_counter + 1;
        self.z_counter += 1;
        let at = frame.z;
        if let Some(surface) = self.surface.as_mut() {
            surface.raise(id, at);
        }
        self.events.emit(&FrameEvent::Focused(id));
        true
    }

    /// The topmost shown frame under `at`, if any.
    pub fn hit_test(&self, at: Point) -> Option<FrameId> {
        self.frames
            .values()
            .filter(|f| f.shown && f.bounds().contains(at))
            .max_by_key(|f| f.z)
            .map(|f| f.id)
    }
}

//! Create, show, and dispose operations on the FrameManager.

use benchdeck_common::{FrameError, FrameId};

use crate::events::FrameEvent;
use crate::frame::{Frame, FrameSpec};

use super::FrameManager;

impl FrameManager {
    /// Allocate a frame with a fresh id and a z strictly above every live
    /// frame. The frame is not attached to the surface yet; call
    /// [`FrameManager::show`].
    pub fn create(&mut self, spec: FrameSpec) -> FrameId {
        let id = self.next_id;
        self.next_id += 1;
        let z = self.next_z();

        let frame = Frame::new(FrameId(id), z, spec);
        tracing::debug!(frame = %frame.id, z, title = %frame.title, "frame created");
        self.frames.insert(id, frame);
        FrameId(id)
    }

    /// Attach a created frame to the display surface.
    pub fn show(&mut self, id: FrameId) -> Result<(), FrameError> {
        let frame = self
            .frames
            .get_mut(&id.0)
            .ok_or(FrameError::UnknownFrame(id))?;
        let surface = self.surface.as_mut().ok_or(FrameError::NoSurface)?;
        if frame.shown {
            return Err(FrameError::AlreadyShown(id));
        }

        frame.shown = true;
        surface.attach(id, frame.position, frame.z);
        self.events.emit(&FrameEvent::Shown(id));
        Ok(())
    }

    /// Tear a frame down: run its disposal callback once, detach it, and
    /// release everything registered under its id. Disposing an unknown or
    /// already-disposed frame is a no-op.
    pub fn dispose(&mut self, id: FrameId) {
        let Some(mut frame) = self.frames.remove(&id.0) else {
            return;
        };

        if self.drag.as_ref().is_some_and(|d| d.frame == id.0) {
            self.drag = None;
        }
        if let Some(callback) = frame.on_dispose.take() {
            callback();
        }
        if frame.shown {
            if let Some(surface) = self.surface.as_mut() {
                surface.detach(id);
            }
        }
        tracing::debug!(frame = %id, "frame disposed");
        self.events.emit(&FrameEvent::Disposed(id));
    }
}

//! Pointer-driven drag protocol.
//!
//! Pointer-down anywhere in a frame focuses it; pointer-down on its header
//! additionally begins a drag, capturing the offset between the pointer
//! and the frame's top-left. Every move clamps the candidate position so
//! the header box stays inside the container. Pointer-up and window blur
//! both end the drag.

use benchdeck_common::{clamp_to_bounds, FrameId, Point};

use crate::events::FrameEvent;

use super::types::DragState;
use super::FrameManager;

impl FrameManager {
    /// Route a pointer-down. Returns the frame that was hit, if any.
    pub fn pointer_down(&mut self, at: Point) -> Option<FrameId> {
        let id = self.hit_test(at)?;
        self.focus(id);

        let frame = self.frames.get(&id.0)?;
        if frame.header_bounds().contains(at) {
            self.drag = Some(DragState {
                frame: id.0,
                offset: Point::new(at.x - frame.position.x, at.y - frame.position.y),
            });
            tracing::trace!(frame = %id, "drag started");
        }
        Some(id)
    }

    /// Route a pointer-move. Returns the clamped position while a drag is
    /// active, `None` otherwise.
    pub fn pointer_move(&mut self, at: Point) -> Option<Point> {
        let (frame_key, offset) = {
            let drag = self.drag.as_ref()?;
            (drag.frame, drag.offset)
        };
        let container = self.surface.as_ref()?.size();
        let frame = self.frames.get_mut(&frame_key)?;

        let candidate = Point::new(at.x - offset.x, at.y - offset.y);
        let clamped = clamp_to_bounds(candidate, container, frame.header_box());
        frame.position = clamped;

        let id = frame.id;
        if let Some(surface) = self.surface.as_mut() {
            surface.place(id, clamped);
        }
        self.events.emit(&FrameEvent::Moved(id, clamped));
        Some(clamped)
    }

    /// Route a pointer-up, ending any active drag.
    pub fn pointer_up(&mut self) {
        if self.drag.take().is_some() {
            tracing::trace!("drag ended");
        }
    }

    /// The hosting window lost focus; drags must not outlive it.
    pub fn cancel_drag(&mut self) {
        self.pointer_up();
    }
}

//! Core types and constructors for FrameManager.

use std::collections::HashMap;

use benchdeck_common::{FrameId, ListenerHub, Point};

use crate::events::FrameEvent;
use crate::frame::Frame;
use crate::surface::Surface;

/// First z slot handed out; every later create/focus gets a strictly
/// larger value.
pub const INITIAL_Z: u32 = 1000;

pub(super) struct DragState {
    pub frame: u32,
    /// Pointer offset from the frame's top-left, captured at drag start.
    pub offset: Point,
}

/// Owns every floating frame: registry, z-order counter, drag state, and
/// the display surface the frames are attached to.
pub struct FrameManager {
    pub(super) frames: HashMap<u32, Frame>,
    pub(super) next_id: u32,
    /// Last z assigned. A frame is topmost iff its z equals this.
    pub(super) z_counter: u32,
    pub(super) surface: Option<Box<dyn Surface>>,
    pub(super) drag: Option<DragState>,
    pub(super) events: ListenerHub<FrameEvent>,
}

impl FrameManager {
    pub fn new() -> Self {
        Self {
            frames: HashMap::new(),
            next_id: 1,
            z_counter: INITIAL_Z - 1,
            surface: None,
            drag: None,
            events: ListenerHub::new(),
        }
    }

    pub fn with_surface(surface: Box<dyn Surface>) -> Self {
        let mut mgr = Self::new();
        mgr.surface = Some(surface);
        mgr
    }

    pub fn set_surface(&mut self, surface: Box<dyn Surface>) {
        self.surface = Some(surface);
    }

    // -- Accessors --

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, id: FrameId) -> Option<&Frame> {
        self.frames.get(&id.0)
    }

    /// The frame holding the strict z maximum, if any frame is live.
    pub fn topmost(&self) -> Option<FrameId> {
        self.frames
            .values()
            .find(|f| f.z == self.z_counter)
            .map(|f| f.id)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Lifecycle event hub. Clone it to hold a subscription point.
    pub fn events(&self) -> &ListenerHub<FrameEvent> {
        &self.events
    }

    pub(super) fn next_z(&mut self) -> u32 {
        self.z_counter += 1;
        self.z_counter
    }
}

impl Default for FrameManager {
    fn default() -> Self {
        Self::new()
    }
}

//! Singleton-per-kind panel bookkeeping.
//!
//! A second "open" of a live kind focuses and returns the existing panel
//! instead of building a duplicate. Slots clear themselves when the
//! backing frame is disposed, so the next open builds fresh.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use benchdeck_common::{DeckError, FrameId, ListenerGuard};
use benchdeck_frames::{FrameEvent, FrameManager};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Control,
    Video,
    BallOnPlate,
}

pub struct PanelRegistry {
    slots: Arc<Mutex<HashMap<PanelKind, FrameId>>>,
    _dispose_watch: ListenerGuard,
}

impl PanelRegistry {
    pub fn new(frames: &FrameManager) -> Self {
        let slots: Arc<Mutex<HashMap<PanelKind, FrameId>>> = Arc::default();
        let watched = Arc::clone(&slots);
        let guard = frames.events().listen(move |event| {
            if let FrameEvent::Disposed(id) = event {
                watched
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .retain(|_, frame| frame != id);
            }
        });
        Self {
            slots,
            _dispose_watch: guard,
        }
    }

    /// Return the live frame for `kind` (focused), or build one with
    /// `build` and record it.
    pub fn open_with(
        &self,
        frames: &mut FrameManager,
        kind: PanelKind,
        build: impl FnOnce(&mut FrameManager) -> Result<FrameId, DeckError>,
    ) -> Result<FrameId, DeckError> {
        if let Some(existing) = self.live(kind) {
            tracing::debug!(kind = ?kind, frame = %existing, "panel already open, focusing");
            frames.focus(existing);
            return Ok(existing);
        }

        let frame = build(frames)?;
        self.lock().insert(kind, frame);
        Ok(frame)
    }

    pub fn live(&self, kind: PanelKind) -> Option<FrameId> {
        self.lock().get(&kind).copied()
    }

    pub fn open_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PanelKind, FrameId>> {
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }
}

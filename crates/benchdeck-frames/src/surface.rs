//! The display surface the frames live on (the "playground" container in
//! the hosting page). The manager drives it; rendering is someone else's
//! problem.

use benchdeck_common::{FrameId, Point, Size};

pub trait Surface: Send {
    /// Current container size; drag clamping is computed against this.
    fn size(&self) -> Size;

    fn attach(&mut self, id: FrameId, at: Point, z: u32);

    fn detach(&mut self, id: FrameId);

    fn place(&mut self, id: FrameId, at: Point);

    fn raise(&mut self, id: FrameId, z: u32);
}

/// Fixed-size surface that renders nothing. Useful headless.
pub struct NullSurface {
    size: Size,
}

impl NullSurface {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Surface for NullSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn attach(&mut self, _id: FrameId, _at: Point, _z: u32) {}

    fn detach(&mut self, _id: FrameId) {}

    fn place(&mut self, _id: FrameId, _at: Point) {}

    fn raise(&mut self, _id: FrameId, _z: u32) {}
}

use benchdeck_common::{FrameId, Point, Rect, Size};

/// Everything needed to create a frame. The disposal callback fires exactly
/// once, when the frame is disposed.
pub struct FrameSpec {
    pub title: String,
    pub size: Size,
    pub header_height: f64,
    pub position: Point,
    pub on_dispose: Option<Box<dyn FnOnce() + Send>>,
}

impl FrameSpec {
    pub fn new(title: impl Into<String>, size: Size) -> Self {
        Self {
            title: title.into(),
            size,
            header_height: 28.0,
            position: Point::default(),
            on_dispose: None,
        }
    }

    pub fn at(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn header_height(mut self, height: f64) -> Self {
        self.header_height = height;
        self
    }

    pub fn on_dispose(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_dispose = Some(Box::new(callback));
        self
    }
}

/// One floating frame: position, chrome box, z slot, disposal hook.
pub struct Frame {
    pub id: FrameId,
    pub title: String,
    pub position: Point,
    pub size: Size,
    pub header_height: f64,
    pub(crate) z: u32,
    pub(crate) shown: bool,
    pub(crate) on_dispose: Option<Box<dyn FnOnce() + Send>>,
}

impl Frame {
    pub(crate) fn new(id: FrameId, z: u32, spec: FrameSpec) -> Self {
        Self {
            id,
            title: spec.title,
            position: spec.position,
            size: spec.size,
            header_height: spec.header_height,
            z,
            shown: false,
            on_dispose: spec.on_dispose,
        }
    }

    pub fn z(&self) -> u32 {
        self.z
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// The title-bar strip. Dragging grabs here, and clamping is computed
    /// against this box so a frame can leave everything but its header
    /// off-screen, never the header itself.
    pub fn header_bounds(&self) -> Rect {
        Rect::new(self.position, self.header_box())
    }

    pub fn header_box(&self) -> Size {
        Size::new(self.size.width, self.header_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_bounds_is_top_strip() {
        let spec = FrameSpec::new("Live Cam", Size::new(600.0, 400.0)).at(Point::new(50.0, 60.0));
        let frame = Frame::new(FrameId(1), 1000, spec);

        assert!(frame.header_bounds().contains(Point::new(50.0, 60.0)));
        assert!(frame.header_bounds().contains(Point::new(649.0, 87.0)));
        assert!(!frame.header_bounds().contains(Point::new(649.0, 88.0)));
        assert!(frame.bounds().contains(Point::new(649.0, 459.0)));
    }
}

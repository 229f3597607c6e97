//! benchdeck-panels: the glue layer.
//!
//! Each panel owns one floating frame and one multiplexer subscription for
//! a specific testbed function, and is a singleton per kind. The core
//! subsystems (mux, frames) know nothing about panels.

pub mod ball_on_plate;
pub mod canvas;
pub mod control;
mod panel;
pub mod payload;
pub mod registry;
pub mod video;

pub use ball_on_plate::BallOnPlatePanel;
pub use canvas::{decode_image, Canvas, SharedCanvas};
pub use control::ControlPanel;
pub use payload::{
    BallOnPlateParams, CircleParams, NunchuckParams, PoseParams, TaskPayload, VideoParams,
};
pub use registry::{PanelKind, PanelRegistry};
pub use video::VideoPanel;

pub mod events;
pub mod frame;
pub mod manager;
pub mod surface;

pub use events::FrameEvent;
pub use frame::{Frame, FrameSpec};
pub use manager::FrameManager;
pub use surface::{NullSurface, Surface};

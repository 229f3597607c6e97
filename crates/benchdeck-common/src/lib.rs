pub mod errors;
pub mod geometry;
pub mod ids;
pub mod listeners;
pub mod task;

pub use errors::{DeckError, FrameError, MuxError};
pub use geometry::{clamp_to_bounds, Point, Rect, Size};
pub use ids::{FrameId, ListenerId};
pub use listeners::{ListenerGuard, ListenerHub};
pub use task::TaskId;

pub type Result<T> = std::result::Result<T, DeckError>;

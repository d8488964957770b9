pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{BerthError, ConfigError, DockError};
pub use events::{DockEvent, EventBus};
pub use id::{ContentId, FloatWindowId, PaneId};
pub use types::{
    DockAlignment, DockState, DockStyle, DocumentStyle, Point, Rect, Size, TabStripLocation,
};

pub type Result<T> = std::result::Result<T, BerthError>;

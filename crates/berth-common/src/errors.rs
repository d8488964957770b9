use std::path::PathBuf;

use crate::id::{ContentId, FloatWindowId, PaneId};
use crate::types::DockState;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config write error: {0}")]
    WriteError(String),
}

/// Contract violations raised by the docking engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DockError {
    #[error("invalid dock state: {0:?}")]
    InvalidDockState(DockState),

    #[error("content {content} is not a displaying content of {pane}")]
    InvalidActiveContent { pane: PaneId, content: ContentId },

    #[error("active content of {0} cannot be cleared while it displays contents")]
    ActiveContentRequired(PaneId),

    #[error("invalid content index {index} for {pane}")]
    InvalidContentIndex { pane: PaneId, index: isize },

    #[error("content {content} does not belong to {pane}")]
    ContentNotInPane { pane: PaneId, content: ContentId },

    #[error("unknown pane: {0}")]
    UnknownPane(PaneId),

    #[error("unknown content: {0}")]
    UnknownContent(ContentId),

    #[error("no content with persist string {0:?}")]
    ContentNotFound(String),

    #[error("unknown float window: {0}")]
    UnknownFloatWindow(FloatWindowId),

    #[error("{pane} cannot join a container of different float-ness")]
    IncompatibleContainer { pane: PaneId },

    #[error("a previous pane is required: the container already has panes")]
    PreviousPaneRequired,

    #[error("previous pane {0} is not in the target container")]
    PreviousPaneNotInContainer(PaneId),

    #[error("{0} cannot be docked relative to itself")]
    PreviousPaneIsSelf(PaneId),

    #[error("dock portion must be positive, got {0}")]
    InvalidPortion(f64),

    #[error("cannot switch to system MDI while document panes are nested")]
    DocumentStyleConflict,

    #[error("layout can only be loaded into a panel without contents")]
    LayoutAlreadyInitialized,

    #[error("malformed layout: {0}")]
    MalformedLayout(String),

    #[error("end-user docking is disabled")]
    DockingDisabled,

    #[error("a drag operation is already in progress")]
    DragInProgress,

    #[error("no drag operation is in progress")]
    NoActiveDrag,
}

#[derive(Debug, thiserror::Error)]
pub enum BerthError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dock(#[from] DockError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::WriteError("read-only".into());
        assert_eq!(err.to_string(), "config write error: read-only");
    }

    #[test]
    fn dock_error_display() {
        let err = DockError::InvalidActiveContent {
            pane: PaneId(2),
            content: ContentId(5),
        };
        assert_eq!(
            err.to_string(),
            "content content-5 is not a displaying content of pane-2"
        );

        let err = DockError::InvalidDockState(DockState::Hidden);
        assert_eq!(err.to_string(), "invalid dock state: Hidden");

        let err = DockError::PreviousPaneIsSelf(PaneId(1));
        assert_eq!(err.to_string(), "pane-1 cannot be docked relative to itself");
    }

    #[test]
    fn berth_error_from_dock() {
        let err: BerthError = DockError::DocumentStyleConflict.into();
        assert!(matches!(err, BerthError::Dock(_)));
        assert_eq!(
            err.to_string(),
            "cannot switch to system MDI while document panes are nested"
        );
    }

    #[test]
    fn berth_error_from_config() {
        let err: BerthError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, BerthError::Config(_)));
        assert_eq!(err.to_string(), "config parse error: bad toml");
    }

    #[test]
    fn berth_error_from_fmt() {
        let err: BerthError = std::fmt::Error.into();
        assert!(matches!(err, BerthError::Fmt(_)));
    }

    #[test]
    fn berth_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file gone");
        let err: BerthError = io_err.into();
        assert!(matches!(err, BerthError::Io(_)));
        assert_eq!(err.to_string(), "file gone");
    }
}

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::id::{ContentId, FloatWindowId, PaneId};
use crate::types::DockState;

/// Notifications emitted by the docking engine, in firing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DockEvent {
    ContentAdded(ContentId),
    ContentRemoved(ContentId),
    ContentDockStateChanged {
        content: ContentId,
        old: DockState,
        new: DockState,
    },
    PaneCreated(PaneId),
    PaneDisposed(PaneId),
    PaneDockStateChanged {
        pane: PaneId,
        old: DockState,
        new: DockState,
    },
    ActiveContentChanged {
        pane: PaneId,
        content: Option<ContentId>,
    },
    ActivePaneChanged(Option<PaneId>),
    ActiveDocumentChanged(Option<ContentId>),
    ActiveAutoHideContentChanged(Option<ContentId>),
    FloatWindowCreated(FloatWindowId),
    FloatWindowDisposed(FloatWindowId),
    DocumentDragged,
    LayoutPerformed,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<DockEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DockEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: DockEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// Publish a batch of events drained from a panel, preserving order.
    pub fn publish_all(&self, events: impl IntoIterator<Item = DockEvent>) -> usize {
        let mut sent = 0;
        for event in events {
            tracing::trace!(?event, "publishing dock event");
            sent += self.publish(event);
        }
        sent
    }
}

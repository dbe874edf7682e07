//! Event registry between the UI layer and the controller.
//!
//! Views publish [`UiEvent`]s through an [`EventBus`] handle instead of
//! registering callbacks, so the event-to-handler mapping lives in one place
//! (the controller's `handle` match) and is testable without a real UI.

use tokio::sync::mpsc;

/// Everything the UI layer can ask of the controller
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A recipe was selected (hash change / initial load in the original UI)
    RecipeSelected { id: String },
    /// The search form was submitted
    SearchSubmitted { query: String },
    /// A pagination control was clicked
    PageSelected { page: usize },
    /// The servings stepper was clicked; negative deltas decrement
    ServingsAdjusted { delta: i32 },
    /// The bookmark button on the current recipe was toggled
    BookmarkToggled,
    /// The bookmarks panel was opened
    BookmarksRequested,
}

/// Publishing handle given to views; cheap to clone
#[derive(Clone)]
pub struct EventBus {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl EventBus {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<UiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (EventBus { tx }, rx)
    }

    /// Publish an event; a closed controller loop drops it silently, matching
    /// a detached DOM handler firing after teardown.
    pub fn publish(&self, event: UiEvent) {
        let _ = self.tx.send(event);
    }
}

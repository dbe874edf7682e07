//! Model/controller core of a recipe search and display application.
//!
//! The crate owns the application state (current recipe, search results with
//! pagination, bookmarks), the typed HTTP client for the recipe API and the
//! controller that wires UI events to service calls. Rendering and persistence
//! are seams: implement [`controller::View`] for a UI and
//! [`storage::BookmarkStore`] for durable storage.

pub mod api;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod services;
pub mod state;
pub mod storage;

pub use client::ApiClient;
pub use config::AppConfig;
pub use controller::{Controller, FlowState, Pane, View};
pub use error::ForkfulError;
pub use events::{EventBus, UiEvent};
pub use state::{AppState, Ingredient, Recipe, SearchResultItem, SearchState};
pub use storage::{BookmarkStore, JsonFileStore, MemoryStore};

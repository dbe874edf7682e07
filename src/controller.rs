use log::{debug, error, warn};
use tokio::sync::mpsc;

use crate::client::ApiClient;
use crate::events::UiEvent;
use crate::services::{bookmarks, recipe, search};
use crate::state::{AppState, Recipe, SearchResultItem};
use crate::storage::BookmarkStore;

/// The two panes whose loading lifecycle the controller tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Recipe,
    Results,
}

/// Loading lifecycle of a pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Rendering seam consumed by the controller.
///
/// A real UI implements this against the DOM (or a terminal); tests implement
/// it with a recorder. The controller only ever hands it borrowed state.
pub trait View: Send {
    fn render_spinner(&mut self, pane: Pane);
    fn render_recipe(&mut self, recipe: &Recipe);
    fn render_results(&mut self, items: &[SearchResultItem], page: usize, total_pages: usize);
    fn render_bookmarks(&mut self, bookmarks: &[Recipe]);
    fn render_error(&mut self, pane: Pane, message: &str);
}

/// Wires UI events to service calls and render calls.
///
/// Owns the application state; all service errors stop here. A recipe-pane
/// failure renders the error view, a search failure is logged only, matching
/// the original behavior. No flow ever retries.
pub struct Controller<V: View> {
    state: AppState,
    client: ApiClient,
    store: Box<dyn BookmarkStore>,
    view: V,
    recipe_flow: FlowState,
    search_flow: FlowState,
}

impl<V: View> Controller<V> {
    pub fn new(state: AppState, client: ApiClient, store: Box<dyn BookmarkStore>, view: V) -> Self {
        Controller {
            state,
            client,
            store,
            view,
            recipe_flow: FlowState::Idle,
            search_flow: FlowState::Idle,
        }
    }

    /// Startup: read persisted bookmarks and show them. A storage failure is
    /// not fatal; the session starts with an empty collection.
    pub async fn init(&mut self) {
        if let Err(e) = bookmarks::load_bookmarks(&mut self.state, self.store.as_ref()).await {
            warn!("could not load bookmarks: {e}");
        }
        self.view.render_bookmarks(&self.state.bookmarks);
    }

    /// Drain the event bus until every publisher is gone
    pub async fn run(&mut self, mut events: mpsc::UnboundedReceiver<UiEvent>) {
        while let Some(event) = events.recv().await {
            self.handle(event).await;
        }
    }

    /// The event-to-handler mapping table
    pub async fn handle(&mut self, event: UiEvent) {
        debug!("handling {event:?}");
        match event {
            UiEvent::RecipeSelected { id } => self.control_recipe(&id).await,
            UiEvent::SearchSubmitted { query } => self.control_search(&query).await,
            UiEvent::PageSelected { page } => self.control_pagination(page),
            UiEvent::ServingsAdjusted { delta } => self.control_servings(delta),
            UiEvent::BookmarkToggled => self.control_bookmark_toggle().await,
            UiEvent::BookmarksRequested => self.view.render_bookmarks(&self.state.bookmarks),
        }
    }

    async fn control_recipe(&mut self, id: &str) {
        // guard clause: nothing selected
        if id.is_empty() {
            return;
        }
        self.recipe_flow = FlowState::Loading;
        self.view.render_spinner(Pane::Recipe);

        match recipe::load_recipe(&mut self.state, &self.client, id).await {
            Ok(()) => {
                self.recipe_flow = FlowState::Loaded;
                if let Some(current) = &self.state.recipe {
                    self.view.render_recipe(current);
                }
                // keep the selection highlight and bookmark list current
                self.render_current_results_page(None);
                self.view.render_bookmarks(&self.state.bookmarks);
            }
            Err(e) => {
                error!("loading recipe {id} failed: {e}");
                self.recipe_flow = FlowState::Error;
                self.view.render_error(Pane::Recipe, &e.to_string());
            }
        }
    }

    async fn control_search(&mut self, query: &str) {
        // guard clause: empty submit
        if query.trim().is_empty() {
            return;
        }
        self.search_flow = FlowState::Loading;
        self.view.render_spinner(Pane::Results);

        match search::load_search_results(&mut self.state, &self.client, query).await {
            Ok(()) => {
                self.search_flow = FlowState::Loaded;
                self.render_current_results_page(Some(1));
            }
            Err(e) => {
                error!("search {query:?} failed: {e}");
                self.search_flow = FlowState::Error;
            }
        }
    }

    fn control_pagination(&mut self, page: usize) {
        self.render_current_results_page(Some(page));
    }

    fn control_servings(&mut self, delta: i32) {
        let Some(current) = &self.state.recipe else {
            return;
        };
        // never below 1, and saturate instead of wrapping past u32::MAX
        let new_servings =
            u32::try_from((i64::from(current.servings) + i64::from(delta)).max(1))
                .unwrap_or(u32::MAX);
        match recipe::update_servings(&mut self.state, new_servings) {
            Ok(()) => {
                if let Some(current) = &self.state.recipe {
                    self.view.render_recipe(current);
                }
            }
            Err(e) => error!("updating servings failed: {e}"),
        }
    }

    async fn control_bookmark_toggle(&mut self) {
        let Some(current) = self.state.recipe.clone() else {
            return;
        };
        let result = if current.bookmarked {
            bookmarks::remove_bookmark(&mut self.state, self.store.as_ref(), &current.id).await
        } else {
            bookmarks::add_bookmark(&mut self.state, self.store.as_ref(), current).await
        };

        match result {
            Ok(()) => {
                if let Some(current) = &self.state.recipe {
                    self.view.render_recipe(current);
                }
                self.view.render_bookmarks(&self.state.bookmarks);
            }
            Err(e) => error!("bookmark update failed: {e}"),
        }
    }

    fn render_current_results_page(&mut self, page: Option<usize>) {
        let total = self.state.search.total_pages();
        let items = search::search_results_page(&mut self.state, page).to_vec();
        let page = self.state.search.page;
        self.view.render_results(&items, page, total);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn recipe_flow(&self) -> FlowState {
        self.recipe_flow
    }

    pub fn search_flow(&self) -> FlowState {
        self.search_flow
    }
}

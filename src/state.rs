use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

/// One ingredient line of a recipe
///
/// `quantity` is `None` for lines like "salt to taste"; scaling leaves those
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub quantity: Option<f64>,
    pub unit: String,
    pub description: String,
}

/// A single dish record with metadata and ingredient list
///
/// Identity is `id`. Everything is immutable after load except `servings` and
/// the ingredient quantities (rescaled together) and the `bookmarked` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image: String,
    pub servings: u32,
    pub cooking_time: u32,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub bookmarked: bool,
}

/// Lightweight projection of a recipe for list display
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResultItem {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image: String,
}

/// Current query, its result set and the pagination cursor
#[derive(Debug, Clone)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<SearchResultItem>,
    /// 1-based; within [1, total_pages] once results are non-empty
    pub page: usize,
    pub results_per_page: usize,
}

impl SearchState {
    fn new(results_per_page: usize) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            page: 1,
            results_per_page,
        }
    }

    /// Number of pages the current result set spans (0 when empty)
    pub fn total_pages(&self) -> usize {
        self.results.len().div_ceil(self.results_per_page)
    }
}

/// Token identifying one issued fetch; see [`AppState::begin_recipe_load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// The single mutable application state record
///
/// Created once at startup and passed by `&mut` through the services and the
/// controller; there is no module-level singleton. Only service functions
/// mutate it, and a failed load leaves it untouched.
#[derive(Debug)]
pub struct AppState {
    pub recipe: Option<Recipe>,
    pub search: SearchState,
    /// Unique by recipe id, insertion-ordered
    pub bookmarks: Vec<Recipe>,
    recipe_generation: u64,
    search_generation: u64,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            recipe: None,
            search: SearchState::new(config.results_per_page),
            bookmarks: Vec::new(),
            recipe_generation: 0,
            search_generation: 0,
        }
    }

    /// Mark the start of a recipe fetch and return its token.
    ///
    /// Out-of-order completion of two overlapping fetches could let an older
    /// response overwrite a newer one; only the response whose token is still
    /// current may be applied.
    pub fn begin_recipe_load(&mut self) -> RequestToken {
        self.recipe_generation += 1;
        RequestToken(self.recipe_generation)
    }

    pub fn recipe_token_current(&self, token: RequestToken) -> bool {
        token.0 == self.recipe_generation
    }

    pub fn begin_search_load(&mut self) -> RequestToken {
        self.search_generation += 1;
        RequestToken(self.search_generation)
    }

    pub fn search_token_current(&self, token: RequestToken) -> bool {
        token.0 == self.search_generation
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.iter().any(|r| r.id == id)
    }
}

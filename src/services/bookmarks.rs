use log::debug;

use crate::error::ForkfulError;
use crate::state::{AppState, Recipe};
use crate::storage::BookmarkStore;

/// Add `recipe` to the bookmarks and persist the collection.
///
/// A duplicate id is a no-op. The persisted and in-memory collections are
/// synchronized whenever this returns: the new collection is written to the
/// store before memory is committed, so a persist failure leaves the state at
/// its prior value.
pub async fn add_bookmark(
    state: &mut AppState,
    store: &dyn BookmarkStore,
    mut recipe: Recipe,
) -> Result<(), ForkfulError> {
    if state.is_bookmarked(&recipe.id) {
        debug!("recipe {} already bookmarked", recipe.id);
        return Ok(());
    }

    recipe.bookmarked = true;
    let mut next = state.bookmarks.clone();
    next.push(recipe.clone());
    store.save(&next).await?;

    state.bookmarks = next;
    if let Some(current) = state.recipe.as_mut() {
        if current.id == recipe.id {
            current.bookmarked = true;
        }
    }
    Ok(())
}

/// Remove the bookmark with `id` and persist the collection.
pub async fn remove_bookmark(
    state: &mut AppState,
    store: &dyn BookmarkStore,
    id: &str,
) -> Result<(), ForkfulError> {
    if !state.is_bookmarked(id) {
        return Ok(());
    }

    let next: Vec<Recipe> = state
        .bookmarks
        .iter()
        .filter(|r| r.id != id)
        .cloned()
        .collect();
    store.save(&next).await?;

    state.bookmarks = next;
    if let Some(current) = state.recipe.as_mut() {
        if current.id == id {
            current.bookmarked = false;
        }
    }
    Ok(())
}

/// Startup read of the persisted collection; absent data means empty.
pub async fn load_bookmarks(
    state: &mut AppState,
    store: &dyn BookmarkStore,
) -> Result<(), ForkfulError> {
    state.bookmarks = store.load().await?.unwrap_or_default();
    debug!("loaded {} bookmarks", state.bookmarks.len());
    Ok(())
}

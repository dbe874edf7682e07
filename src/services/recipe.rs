use log::debug;

use crate::client::ApiClient;
use crate::error::ForkfulError;
use crate::state::{AppState, Recipe, RequestToken};

/// Load the recipe `id` and make it the current recipe.
///
/// The fetched record is normalized to the domain schema and its `bookmarked`
/// flag set from the bookmarks collection. On any error the previous current
/// recipe is left untouched. If a newer `load_recipe` started while this one
/// was in flight, the stale response is discarded (last request wins).
pub async fn load_recipe(
    state: &mut AppState,
    client: &ApiClient,
    id: &str,
) -> Result<(), ForkfulError> {
    if id.trim().is_empty() {
        return Err(ForkfulError::Validation("recipe id is empty".to_string()));
    }

    let token = state.begin_recipe_load();
    let recipe = client.get_recipe(id).await?;
    apply_recipe(state, token, recipe);
    Ok(())
}

/// Install a fetched recipe as the current one, unless a newer load has
/// started since `token` was issued. Returns whether the response was applied.
pub(crate) fn apply_recipe(state: &mut AppState, token: RequestToken, mut recipe: Recipe) -> bool {
    if !state.recipe_token_current(token) {
        debug!("discarding stale recipe response for {}", recipe.id);
        return false;
    }
    recipe.bookmarked = state.is_bookmarked(&recipe.id);
    state.recipe = Some(recipe);
    true
}

/// Rescale the current recipe's ingredient quantities to `new_servings`.
///
/// Pure state mutation, no network. Quantities scale proportionally
/// (`old * new / old_servings`); `None` quantities stay `None`.
pub fn update_servings(state: &mut AppState, new_servings: u32) -> Result<(), ForkfulError> {
    if new_servings < 1 {
        return Err(ForkfulError::Validation(
            "servings must be at least 1".to_string(),
        ));
    }
    let recipe = state.recipe.as_mut().ok_or_else(|| {
        ForkfulError::Validation("no recipe loaded to rescale".to_string())
    })?;

    let factor = f64::from(new_servings) / f64::from(recipe.servings);
    for ingredient in &mut recipe.ingredients {
        if let Some(quantity) = ingredient.quantity.as_mut() {
            *quantity *= factor;
        }
    }
    recipe.servings = new_servings;
    Ok(())
}

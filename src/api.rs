//! Wire-format schema of the recipe API.
//!
//! The API speaks snake_case JSON wrapped in a `{status, data, ...}` envelope;
//! these structs decode each payload explicitly and convert into the domain
//! types, so no external field names leak past this module.

use serde::Deserialize;

use crate::state::{Ingredient, Recipe, SearchResultItem};

/// Response envelope: `{status, results?, data?, message?}`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    #[serde(default)]
    pub results: Option<u64>,
    pub data: Option<T>,
    /// Present on `"fail"` responses
    #[serde(default)]
    pub message: Option<String>,
}

/// `data` payload of `GET {api_base}/{id}`
#[derive(Debug, Deserialize)]
pub struct RecipeData {
    pub recipe: WireRecipe,
}

/// `data` payload of `GET {api_base}?search={query}`
#[derive(Debug, Deserialize)]
pub struct SearchData {
    pub recipes: Vec<WireSearchHit>,
}

/// A full recipe as the API serves it
#[derive(Debug, Deserialize)]
pub struct WireRecipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image_url: String,
    pub servings: u32,
    pub cooking_time: u32,
    pub ingredients: Vec<WireIngredient>,
}

#[derive(Debug, Deserialize)]
pub struct WireIngredient {
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: String,
    pub description: String,
}

/// One hit of a search response
#[derive(Debug, Deserialize)]
pub struct WireSearchHit {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
}

impl From<WireRecipe> for Recipe {
    fn from(wire: WireRecipe) -> Self {
        Recipe {
            id: wire.id,
            title: wire.title,
            publisher: wire.publisher,
            source_url: wire.source_url,
            image: wire.image_url,
            servings: wire.servings.max(1),
            cooking_time: wire.cooking_time,
            ingredients: wire.ingredients.into_iter().map(Ingredient::from).collect(),
            bookmarked: false,
        }
    }
}

impl From<WireIngredient> for Ingredient {
    fn from(wire: WireIngredient) -> Self {
        Ingredient {
            quantity: wire.quantity,
            unit: wire.unit,
            description: wire.description,
        }
    }
}

impl From<WireSearchHit> for SearchResultItem {
    fn from(wire: WireSearchHit) -> Self {
        SearchResultItem {
            id: wire.id,
            title: wire.title,
            publisher: wire.publisher,
            image: wire.image_url,
        }
    }
}

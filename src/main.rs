use std::env;

use forkful::{
    AppConfig, AppState, ApiClient, Controller, EventBus, JsonFileStore, Pane, Recipe,
    SearchResultItem, UiEvent, View,
};

/// Plain-text view for the CLI
struct TextView;

impl View for TextView {
    fn render_spinner(&mut self, _pane: Pane) {
        eprintln!("loading...");
    }

    fn render_recipe(&mut self, recipe: &Recipe) {
        println!("{} by {}", recipe.title, recipe.publisher);
        println!(
            "serves {}, ready in {} minutes",
            recipe.servings, recipe.cooking_time
        );
        for ingredient in &recipe.ingredients {
            match ingredient.quantity {
                Some(q) => println!("  {q} {} {}", ingredient.unit, ingredient.description),
                None => println!("  {}", ingredient.description),
            }
        }
        println!("source: {}", recipe.source_url);
    }

    fn render_results(&mut self, items: &[SearchResultItem], page: usize, total_pages: usize) {
        if items.is_empty() {
            println!("no results on page {page}");
            return;
        }
        for item in items {
            println!("{}  {} ({})", item.id, item.title, item.publisher);
        }
        println!("-- page {page} of {total_pages} --");
    }

    fn render_bookmarks(&mut self, bookmarks: &[Recipe]) {
        if !bookmarks.is_empty() {
            println!("{} bookmarked recipe(s)", bookmarks.len());
        }
    }

    fn render_error(&mut self, _pane: Pane, message: &str) {
        eprintln!("error: {message}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("using default configuration: {e}");
        AppConfig::default()
    });

    let mut queued = Vec::new();
    match args.get(1).map(String::as_str) {
        Some("--recipe") => {
            let id = args.get(2).ok_or("usage: forkful --recipe <id>")?;
            queued.push(UiEvent::RecipeSelected { id: id.clone() });
        }
        Some(query) => {
            queued.push(UiEvent::SearchSubmitted {
                query: query.to_string(),
            });
            if let Some(page) = args.get(2) {
                queued.push(UiEvent::PageSelected {
                    page: page.parse()?,
                });
            }
        }
        None => return Err("usage: forkful <query> [page] | forkful --recipe <id>".into()),
    }

    let state = AppState::new(&config);
    let client = ApiClient::new(&config);
    let store = Box::new(JsonFileStore::new(&config.bookmarks_path));
    let mut controller = Controller::new(state, client, store, TextView);
    controller.init().await;

    let (bus, events) = EventBus::new();
    for event in queued {
        bus.publish(event);
    }
    drop(bus);

    controller.run(events).await;
    Ok(())
}

//! Bookmark persistence across sessions through the JSON file store.

use forkful::services::bookmarks::{add_bookmark, load_bookmarks, remove_bookmark};
use forkful::{AppConfig, AppState, Ingredient, JsonFileStore, Recipe};

fn sample(id: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: format!("Recipe {id}"),
        publisher: "Closet Cooking".to_string(),
        source_url: format!("https://example.com/{id}"),
        image: format!("https://example.com/{id}.jpg"),
        servings: 4,
        cooking_time: 45,
        ingredients: vec![
            Ingredient {
                quantity: Some(2.5),
                unit: "cup".to_string(),
                description: "flour".to_string(),
            },
            Ingredient {
                quantity: None,
                unit: String::new(),
                description: "salt to taste".to_string(),
            },
        ],
        bookmarked: false,
    }
}

fn temp_store(name: &str) -> (JsonFileStore, std::path::PathBuf) {
    let path = std::env::temp_dir().join(format!("forkful-{name}-{}.json", std::process::id()));
    (JsonFileStore::new(&path), path)
}

#[tokio::test]
async fn test_bookmarks_survive_a_restart() {
    let (store, path) = temp_store("restart");
    let config = AppConfig::default();

    // session one: bookmark two recipes
    let mut state = AppState::new(&config);
    add_bookmark(&mut state, &store, sample("a")).await.unwrap();
    add_bookmark(&mut state, &store, sample("b")).await.unwrap();

    // session two: fresh state, same store
    let mut restarted = AppState::new(&config);
    load_bookmarks(&mut restarted, &store).await.unwrap();
    assert_eq!(restarted.bookmarks.len(), 2);
    assert_eq!(restarted.bookmarks[0].id, "a");
    assert_eq!(restarted.bookmarks[0].ingredients, sample("a").ingredients);
    assert!(restarted.bookmarks.iter().all(|r| r.bookmarked));

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_removal_is_persisted_immediately() {
    let (store, path) = temp_store("removal");
    let config = AppConfig::default();

    let mut state = AppState::new(&config);
    add_bookmark(&mut state, &store, sample("a")).await.unwrap();
    add_bookmark(&mut state, &store, sample("b")).await.unwrap();
    remove_bookmark(&mut state, &store, "a").await.unwrap();

    let mut restarted = AppState::new(&config);
    load_bookmarks(&mut restarted, &store).await.unwrap();
    assert_eq!(restarted.bookmarks.len(), 1);
    assert_eq!(restarted.bookmarks[0].id, "b");

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_insertion_order_is_preserved() {
    let (store, path) = temp_store("order");
    let config = AppConfig::default();

    let mut state = AppState::new(&config);
    for id in ["c", "a", "b"] {
        add_bookmark(&mut state, &store, sample(id)).await.unwrap();
    }

    let mut restarted = AppState::new(&config);
    load_bookmarks(&mut restarted, &store).await.unwrap();
    let ids: Vec<&str> = restarted.bookmarks.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);

    tokio::fs::remove_file(&path).await.unwrap();
}

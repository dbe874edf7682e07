use async_trait::async_trait;
use log::debug;
use std::path::PathBuf;

use crate::error::ForkfulError;
use crate::state::Recipe;

/// Durable storage for the bookmarks collection.
///
/// The collection is written in full on every mutation; there is no
/// incremental diffing. `load` returns `None` when nothing has been persisted
/// yet.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    async fn load(&self) -> Result<Option<Vec<Recipe>>, ForkfulError>;
    async fn save(&self, bookmarks: &[Recipe]) -> Result<(), ForkfulError>;
}

/// Bookmarks persisted as a JSON array in a single file
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }
}

#[async_trait]
impl BookmarkStore for JsonFileStore {
    async fn load(&self) -> Result<Option<Vec<Recipe>>, ForkfulError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let bookmarks: Vec<Recipe> = serde_json::from_str(&contents)?;
                debug!("loaded {} bookmarks from {:?}", bookmarks.len(), self.path);
                Ok(Some(bookmarks))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, bookmarks: &[Recipe]) -> Result<(), ForkfulError> {
        let contents = serde_json::to_string(bookmarks)?;
        tokio::fs::write(&self.path, contents).await?;
        debug!("saved {} bookmarks to {:?}", bookmarks.len(), self.path);
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    // serialized form, so round trips exercise the same serde path as the
    // file store
    contents: std::sync::Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookmarkStore for MemoryStore {
    async fn load(&self) -> Result<Option<Vec<Recipe>>, ForkfulError> {
        let contents = self.contents.lock().unwrap().clone();
        match contents {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, bookmarks: &[Recipe]) -> Result<(), ForkfulError> {
        let json = serde_json::to_string(bookmarks)?;
        *self.contents.lock().unwrap() = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Ingredient;

    fn sample(id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: "Pizza".to_string(),
            publisher: "Test Kitchen".to_string(),
            source_url: "https://example.com".to_string(),
            image: "https://example.com/p.jpg".to_string(),
            servings: 2,
            cooking_time: 30,
            ingredients: vec![Ingredient {
                quantity: Some(0.5),
                unit: "cup".to_string(),
                description: "tomato sauce".to_string(),
            }],
            bookmarked: true,
        }
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load().await.unwrap().is_none());

        let bookmarks = vec![sample("a"), sample("b")];
        store.save(&bookmarks).await.unwrap();
        assert_eq!(store.load().await.unwrap().unwrap(), bookmarks);
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "forkful-bookmarks-{}.json",
            std::process::id()
        ));
        let store = JsonFileStore::new(&path);
        assert!(store.load().await.unwrap().is_none());

        let bookmarks = vec![sample("a")];
        store.save(&bookmarks).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, bookmarks);

        tokio::fs::remove_file(&path).await.unwrap();
    }
}

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::GameCatalog;
use crate::domain::game::{Game, GameDraft};
use crate::response::CatalogResponse;

/// Cloneable handle to a catalog shared across threads.
///
/// Reads run concurrently; every write is serialized against all other
/// operations, so first-match lookups behave exactly as on a plain
/// [`GameCatalog`].
#[derive(Clone, Default)]
pub struct SharedGameCatalog {
    inner: Arc<RwLock<GameCatalog>>,
}

impl SharedGameCatalog {
    pub fn new(catalog: GameCatalog) -> Self {
        Self { inner: Arc::new(RwLock::new(catalog)) }
    }

    pub fn list(&self) -> CatalogResponse {
        self.read().list()
    }

    pub fn get(&self, id: &str) -> Option<Game> {
        self.read().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn add(&self, candidate: impl Into<GameDraft>) -> CatalogResponse {
        self.write().add(candidate)
    }

    pub fn update(&self, id: &str, new_data: impl Into<GameDraft>) -> CatalogResponse {
        self.write().update(id, new_data)
    }

    pub fn delete(&self, id: &str) -> CatalogResponse {
        self.write().delete(id)
    }

    pub fn snapshot(&self) -> GameCatalog {
        self.read().clone()
    }

    // Operations never leave the catalog half-written, so a poisoned lock
    // still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, GameCatalog> {
        match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, GameCatalog> {
        match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl From<GameCatalog> for SharedGameCatalog {
    fn from(catalog: GameCatalog) -> Self {
        Self::new(catalog)
    }
}

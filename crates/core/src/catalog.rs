use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::CatalogConfig;
use crate::domain::game::{Game, GameDraft, GameId};
use crate::errors::CatalogError;
use crate::response::{status, CatalogResponse};
use crate::seed::{self, SeedError};

pub const GAME_ADDED: &str = "Game added successfully.";
pub const GAME_UPDATED: &str = "Game updated successfully.";
pub const GAME_DELETED: &str = "Game deleted successfully.";

/// What `add` and `update` do with an id that is already stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIdPolicy {
    /// Append anyway; lookups then resolve to the earliest record.
    #[default]
    Allow,
    /// Refuse with a 409 conflict. `update` is refused too when the payload
    /// would give the record an id held by a different record.
    Reject,
}

/// Ordered in-memory collection of games.
///
/// Records keep insertion order: `add` appends, `update` replaces in place and
/// `delete` removes a single record. Lookups by id always resolve to the first
/// match in that order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameCatalog {
    games: Vec<Game>,
    duplicate_ids: DuplicateIdPolicy,
}

impl Default for GameCatalog {
    fn default() -> Self {
        Self::new(seed::default_games())
    }
}

impl GameCatalog {
    pub fn new(games: Vec<Game>) -> Self {
        Self { games, duplicate_ids: DuplicateIdPolicy::default() }
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self, SeedError> {
        let games = match &config.seed_path {
            Some(path) => seed::load_seed_file(path)?,
            None => seed::default_games(),
        };
        info!(
            event_name = "catalog.seeded",
            records = games.len(),
            duplicate_ids = ?config.duplicate_ids,
            "game catalog initialized"
        );

        Ok(Self::new(games).with_duplicate_policy(config.duplicate_ids))
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicateIdPolicy) -> Self {
        self.duplicate_ids = policy;
        self
    }

    pub fn duplicate_policy(&self) -> DuplicateIdPolicy {
        self.duplicate_ids
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn get(&self, id: &str) -> Option<&Game> {
        self.position(id).map(|index| &self.games[index])
    }

    pub fn list(&self) -> CatalogResponse {
        CatalogResponse::data(status::OK, self.games.clone())
    }

    pub fn add(&mut self, candidate: impl Into<GameDraft>) -> CatalogResponse {
        match self.try_add(candidate.into()) {
            Ok(()) => CatalogResponse::message(status::CREATED, GAME_ADDED),
            Err(error) => error.into(),
        }
    }

    pub fn update(&mut self, id: &str, new_data: impl Into<GameDraft>) -> CatalogResponse {
        match self.try_update(id, new_data.into()) {
            Ok(_) => CatalogResponse::message(status::OK, GAME_UPDATED),
            Err(error) => error.into(),
        }
    }

    pub fn delete(&mut self, id: &str) -> CatalogResponse {
        match self.try_delete(id) {
            Ok(_) => CatalogResponse::message(status::OK, GAME_DELETED),
            Err(error) => error.into(),
        }
    }

    pub fn try_add(&mut self, draft: GameDraft) -> Result<(), CatalogError> {
        let game = draft.validate().map_err(|error| rejected("add", error.into()))?;

        let duplicate = self.position(game.id.as_str()).is_some();
        if duplicate && self.duplicate_ids == DuplicateIdPolicy::Reject {
            return Err(rejected("add", CatalogError::DuplicateId { id: game.id }));
        }

        info!(event_name = "catalog.game.added", game_id = %game.id.as_str(), "game added");
        self.games.push(game);
        Ok(())
    }

    /// Replaces the first record with `id`, returning the previous one.
    /// Validation runs before the lookup, the duplicate-id check after it.
    pub fn try_update(&mut self, id: &str, draft: GameDraft) -> Result<Game, CatalogError> {
        let game = draft.validate().map_err(|error| rejected("update", error.into()))?;

        let Some(index) = self.position(id) else {
            return Err(not_found("update", id));
        };

        if self.duplicate_ids == DuplicateIdPolicy::Reject && self.held_elsewhere(&game.id, index) {
            return Err(rejected("update", CatalogError::DuplicateId { id: game.id }));
        }

        info!(event_name = "catalog.game.updated", game_id = %id, "game updated");
        Ok(std::mem::replace(&mut self.games[index], game))
    }

    pub fn try_delete(&mut self, id: &str) -> Result<Game, CatalogError> {
        let Some(index) = self.position(id) else {
            return Err(not_found("delete", id));
        };

        info!(event_name = "catalog.game.deleted", game_id = %id, "game deleted");
        Ok(self.games.remove(index))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.games.iter().position(|game| game.id.as_str() == id)
    }

    fn held_elsewhere(&self, id: &GameId, index: usize) -> bool {
        self.games.iter().enumerate().any(|(other, game)| other != index && game.id == *id)
    }
}

fn not_found(operation: &'static str, id: &str) -> CatalogError {
    rejected(operation, CatalogError::GameNotFound { id: GameId::from(id) })
}

fn rejected(operation: &'static str, error: CatalogError) -> CatalogError {
    match &error {
        CatalogError::InvalidGameData(detail) => warn!(
            event_name = "catalog.game.rejected",
            operation,
            error_kind = error.kind(),
            detail = %detail,
            "game payload failed validation"
        ),
        CatalogError::GameNotFound { id } | CatalogError::DuplicateId { id } => debug!(
            event_name = "catalog.game.rejected",
            operation,
            error_kind = error.kind(),
            game_id = %id.as_str(),
            "catalog lookup refused the operation"
        ),
    }
    error
}

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::game::{Game, GameDraft, GameId};
use crate::errors::DomainError;

pub const DEFAULT_SEED_COUNT: usize = 3;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("could not read seed file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse seed file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: serde_json::Error },
    #[error("seed file must hold exactly {expected} records, found {found}")]
    WrongCount { expected: usize, found: usize },
    #[error("seed record #{index} is invalid: {source}")]
    InvalidRecord { index: usize, source: DomainError },
}

/// The records every catalog starts with unless a seed file replaces them.
pub fn default_games() -> Vec<Game> {
    vec![
        Game {
            id: GameId::from("1"),
            title: "The Legend of Zelda: Breath of the Wild".to_string(),
            genre: "Action-adventure".to_string(),
            year: 2017,
            developer: "Nintendo".to_string(),
            description: "An open-world adventure across the ruins of Hyrule.".to_string(),
        },
        Game {
            id: GameId::from("2"),
            title: "Super Mario Odyssey".to_string(),
            genre: "Platformer".to_string(),
            year: 2017,
            developer: "Nintendo".to_string(),
            description: "Mario travels between kingdoms with his companion Cappy.".to_string(),
        },
        Game {
            id: GameId::from("3"),
            title: "The Witcher 3: Wild Hunt".to_string(),
            genre: "RPG".to_string(),
            year: 2015,
            developer: "CD Projekt Red".to_string(),
            description: "A monster hunter searches for his adopted daughter.".to_string(),
        },
    ]
}

/// Loads a JSON array of exactly [`DEFAULT_SEED_COUNT`] game records. Each
/// record goes through the same validation as a catalog write.
pub fn load_seed_file(path: &Path) -> Result<Vec<Game>, SeedError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| SeedError::ReadFile { path: path.to_path_buf(), source })?;
    let drafts = serde_json::from_str::<Vec<GameDraft>>(&raw)
        .map_err(|source| SeedError::ParseFile { path: path.to_path_buf(), source })?;

    if drafts.len() != DEFAULT_SEED_COUNT {
        return Err(SeedError::WrongCount { expected: DEFAULT_SEED_COUNT, found: drafts.len() });
    }

    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            draft.validate().map_err(|source| SeedError::InvalidRecord { index, source })
        })
        .collect()
}

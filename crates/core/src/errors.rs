use thiserror::Error;

use crate::domain::game::GameId;

pub const INVALID_GAME_DATA: &str = "Invalid Game Data!";
pub const GAME_NOT_FOUND: &str = "Game Not Found!";
pub const GAME_ALREADY_EXISTS: &str = "Game Already Exists!";

/// Why a payload failed validation. Stays internal; callers only ever see
/// [`INVALID_GAME_DATA`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),
    #[error("required field `{0}` is empty")]
    EmptyField(&'static str),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid Game Data!")]
    InvalidGameData(#[from] DomainError),
    #[error("Game Not Found!")]
    GameNotFound { id: GameId },
    #[error("Game Already Exists!")]
    DuplicateId { id: GameId },
}

impl CatalogError {
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidGameData(_) => crate::response::status::BAD_REQUEST,
            Self::GameNotFound { .. } => crate::response::status::NOT_FOUND,
            Self::DuplicateId { .. } => crate::response::status::CONFLICT,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidGameData(_) => "validation",
            Self::GameNotFound { .. } => "not_found",
            Self::DuplicateId { .. } => "conflict",
        }
    }
}

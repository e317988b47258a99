pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod response;
pub mod seed;
pub mod shared;

pub use catalog::{DuplicateIdPolicy, GameCatalog, GAME_ADDED, GAME_DELETED, GAME_UPDATED};
pub use domain::game::{Game, GameDraft, GameId};
pub use errors::{CatalogError, DomainError, GAME_ALREADY_EXISTS, GAME_NOT_FOUND, INVALID_GAME_DATA};
pub use response::CatalogResponse;
pub use seed::SeedError;
pub use shared::SharedGameCatalog;

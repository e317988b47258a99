use serde::{Deserialize, Serialize};

use crate::domain::game::Game;
use crate::errors::CatalogError;

pub mod status {
    pub const OK: u16 = 200;
    pub const CREATED: u16 = 201;
    pub const BAD_REQUEST: u16 = 400;
    pub const NOT_FOUND: u16 = 404;
    pub const CONFLICT: u16 = 409;
}

/// Structured outcome of a catalog operation.
///
/// Serializes to exactly one of `{status, data}`, `{status, message}` or
/// `{status, error}` so adapters can map it onto their transport 1:1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogResponse {
    Data { status: u16, data: Vec<Game> },
    Message { status: u16, message: String },
    Error { status: u16, error: String },
}

impl CatalogResponse {
    pub fn data(status: u16, data: Vec<Game>) -> Self {
        Self::Data { status, data }
    }

    pub fn message(status: u16, message: impl Into<String>) -> Self {
        Self::Message { status, message: message.into() }
    }

    pub fn status(&self) -> u16 {
        match self {
            Self::Data { status, .. } | Self::Message { status, .. } | Self::Error { status, .. } => {
                *status
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() < status::BAD_REQUEST
    }

    pub fn games(&self) -> Option<&[Game]> {
        match self {
            Self::Data { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn message_text(&self) -> Option<&str> {
        match self {
            Self::Message { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn error_text(&self) -> Option<&str> {
        match self {
            Self::Error { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<CatalogError> for CatalogResponse {
    fn from(error: CatalogError) -> Self {
        Self::Error { status: error.status(), error: error.to_string() }
    }
}

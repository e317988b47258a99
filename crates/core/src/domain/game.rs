use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub String);

impl GameId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A validated catalog record. Every field is present and non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub genre: String,
    pub year: i64,
    pub developer: String,
    pub description: String,
}

/// An unvalidated game payload as a caller hands it over.
///
/// Any field may be absent; [`GameDraft::validate`] decides whether the
/// payload is complete enough to become a [`Game`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl GameDraft {
    /// Checks fields in declaration order and reports the first one that is
    /// missing or empty. Values are carried over untouched.
    pub fn validate(self) -> Result<Game, DomainError> {
        Ok(Game {
            id: GameId(required_text("id", self.id)?),
            title: required_text("title", self.title)?,
            genre: required_text("genre", self.genre)?,
            year: required_year(self.year)?,
            developer: required_text("developer", self.developer)?,
            description: required_text("description", self.description)?,
        })
    }

    pub fn is_valid(&self) -> bool {
        self.clone().validate().is_ok()
    }
}

impl From<Game> for GameDraft {
    fn from(game: Game) -> Self {
        Self {
            id: Some(game.id.0),
            title: Some(game.title),
            genre: Some(game.genre),
            year: Some(game.year),
            developer: Some(game.developer),
            description: Some(game.description),
        }
    }
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String, DomainError> {
    match value {
        None => Err(DomainError::MissingField(field)),
        Some(value) if value.is_empty() => Err(DomainError::EmptyField(field)),
        Some(value) => Ok(value),
    }
}

// A zero year is as good as no year.
fn required_year(value: Option<i64>) -> Result<i64, DomainError> {
    match value {
        None => Err(DomainError::MissingField("year")),
        Some(0) => Err(DomainError::EmptyField("year")),
        Some(year) => Ok(year),
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::DomainError;

    use super::{Game, GameDraft, GameId};

    fn complete_draft() -> GameDraft {
        GameDraft {
            id: Some("4".to_string()),
            title: Some("Cyberpunk 2077".to_string()),
            genre: Some("RPG".to_string()),
            year: Some(2020),
            developer: Some("CD Projekt Red".to_string()),
            description: Some("A futuristic RPG set in Night City.".to_string()),
        }
    }

    #[test]
    fn complete_draft_validates_verbatim() {
        let game = complete_draft().validate().expect("complete draft is valid");

        assert_eq!(game.id, GameId("4".to_string()));
        assert_eq!(game.title, "Cyberpunk 2077");
        assert_eq!(game.year, 2020);
        assert_eq!(game.description, "A futuristic RPG set in Night City.");
    }

    #[test]
    fn title_only_payload_reports_missing_id_first() {
        let draft = GameDraft { title: Some("Incomplete Game".to_string()), ..GameDraft::default() };

        assert_eq!(draft.validate(), Err(DomainError::MissingField("id")));
    }

    #[test]
    fn empty_strings_are_rejected() {
        let draft = GameDraft { developer: Some(String::new()), ..complete_draft() };

        assert_eq!(draft.validate(), Err(DomainError::EmptyField("developer")));
    }

    #[test]
    fn whitespace_is_kept_as_is() {
        let draft = GameDraft { genre: Some(" ".to_string()), ..complete_draft() };

        let game = draft.validate().expect("whitespace is not empty");
        assert_eq!(game.genre, " ");
    }

    #[test]
    fn zero_year_counts_as_empty() {
        let draft = GameDraft { year: Some(0), ..complete_draft() };

        assert_eq!(draft.validate(), Err(DomainError::EmptyField("year")));
    }

    #[test]
    fn missing_year_is_reported() {
        let draft = GameDraft { year: None, ..complete_draft() };

        assert!(!draft.is_valid());
        assert_eq!(draft.validate(), Err(DomainError::MissingField("year")));
    }

    #[test]
    fn game_converts_back_into_an_equivalent_draft() {
        let game = complete_draft().validate().expect("valid");
        let draft = GameDraft::from(game.clone());

        assert_eq!(draft.validate(), Ok::<Game, DomainError>(game));
    }

    #[test]
    fn draft_deserializes_from_partial_json() {
        let draft: GameDraft =
            serde_json::from_str(r#"{"title":"Incomplete Game"}"#).expect("partial json parses");

        assert_eq!(draft.title.as_deref(), Some("Incomplete Game"));
        assert!(draft.id.is_none());
        assert!(draft.year.is_none());
    }

    #[test]
    fn game_serializes_with_contract_keys() {
        let game = complete_draft().validate().expect("valid");
        let value = serde_json::to_value(&game).expect("serialize game");

        for key in ["id", "title", "genre", "year", "developer", "description"] {
            assert!(value.get(key).is_some(), "missing key `{key}`");
        }
        assert_eq!(value["id"], "4");
    }
}

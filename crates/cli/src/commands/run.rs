use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gameshelf_core::config::{AppConfig, LoadOptions};
use gameshelf_core::{CatalogResponse, GameCatalog, GameDraft};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::commands::{CommandResult, EXIT_CONFIG, EXIT_SCRIPT_INPUT, EXIT_SEED};

/// One line of an operation script, e.g.
/// `{"op":"update","id":"1","game":{"title":"..."}}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptOp {
    List,
    Add {
        #[serde(default)]
        game: GameDraft,
    },
    Update {
        id: String,
        #[serde(default)]
        game: GameDraft,
    },
    Delete {
        id: String,
    },
}

impl ScriptOp {
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Add { .. } => "add",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }

    pub fn apply(self, catalog: &mut GameCatalog) -> CatalogResponse {
        match self {
            Self::List => catalog.list(),
            Self::Add { game } => catalog.add(game),
            Self::Update { id, game } => catalog.update(&id, game),
            Self::Delete { id } => catalog.delete(&id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptStep {
    pub line: usize,
    pub op: ScriptOp,
}

#[derive(Debug, Serialize)]
struct StepOutcome {
    line: usize,
    op: &'static str,
    response: CatalogResponse,
}

#[derive(Debug, Serialize)]
struct RunReport {
    responses: Vec<StepOutcome>,
    final_count: usize,
}

/// Parses a JSON-lines script. Blank lines and `#` comments are skipped; line
/// numbers refer to the original text.
pub fn parse_script(raw: &str) -> Result<Vec<ScriptStep>> {
    raw.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            (!trimmed.is_empty() && !trimmed.starts_with('#')).then_some((index + 1, trimmed))
        })
        .map(|(line, text)| {
            let op = serde_json::from_str::<ScriptOp>(text)
                .with_context(|| format!("line {line}: not a valid catalog operation"))?;
            Ok(ScriptStep { line, op })
        })
        .collect()
}

pub fn run(options: LoadOptions, script: &Path) -> CommandResult {
    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "run",
                "config_validation",
                format!("configuration issue: {error}"),
                EXIT_CONFIG,
            );
        }
    };

    let mut catalog = match GameCatalog::from_config(&config.catalog) {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("run", "seed_data", error.to_string(), EXIT_SEED);
        }
    };

    let steps = match read_script(script) {
        Ok(steps) => steps,
        Err(error) => {
            return CommandResult::failure(
                "run",
                "script_input",
                format!("{error:#}"),
                EXIT_SCRIPT_INPUT,
            );
        }
    };

    let responses = steps
        .into_iter()
        .map(|step| {
            let op = step.op.name();
            let response = step.op.apply(&mut catalog);
            StepOutcome { line: step.line, op, response }
        })
        .collect::<Vec<_>>();
    let refused = responses.iter().filter(|outcome| !outcome.response.is_success()).count();

    info!(
        event_name = "cli.run.completed",
        operations = responses.len(),
        refused,
        final_count = catalog.len(),
        "operation script replayed"
    );

    let message = format!("applied {} operations ({refused} refused)", responses.len());
    let report = RunReport { responses, final_count: catalog.len() };
    match serde_json::to_value(&report) {
        Ok(data) => CommandResult::success_with_data("run", message, Some(data)),
        Err(error) => CommandResult::failure("run", "serialization", error.to_string(), 1),
    }
}

fn read_script(path: &Path) -> Result<Vec<ScriptStep>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read script `{}`", path.display()))?;
    parse_script(&raw)
}

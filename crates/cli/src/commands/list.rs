use gameshelf_core::config::{AppConfig, LoadOptions};
use gameshelf_core::GameCatalog;

use crate::commands::{CommandResult, EXIT_CONFIG, EXIT_SEED};

pub fn run(options: LoadOptions) -> CommandResult {
    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "list",
                "config_validation",
                format!("configuration issue: {error}"),
                EXIT_CONFIG,
            );
        }
    };

    let catalog = match GameCatalog::from_config(&config.catalog) {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("list", "seed_data", error.to_string(), EXIT_SEED);
        }
    };

    let response = catalog.list();
    match serde_json::to_value(&response) {
        Ok(data) => CommandResult::success_with_data(
            "list",
            format!("{} games in catalog", catalog.len()),
            Some(data),
        ),
        Err(error) => CommandResult::failure("list", "serialization", error.to_string(), 1),
    }
}

use std::collections::HashSet;

use gameshelf_core::config::{AppConfig, LoadOptions};
use gameshelf_core::response::status;
use gameshelf_core::seed::DEFAULT_SEED_COUNT;
use gameshelf_core::{CatalogResponse, GameCatalog, GameDraft};
use serde::Serialize;

use crate::commands::{escape_json, CommandResult, EXIT_CHECK_FAILED, EXIT_CONFIG, EXIT_SEED};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Warn,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(options: LoadOptions, json_output: bool) -> CommandResult {
    let report = build_report(options);
    let exit_code = exit_code_for(&report);

    let output = if json_output {
        serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        })
    } else {
        render_human(&report)
    };

    CommandResult { exit_code, output }
}

/// The first failing check decides the exit code.
fn exit_code_for(report: &DoctorReport) -> u8 {
    report
        .checks
        .iter()
        .find(|check| check.status == CheckStatus::Fail)
        .map_or(0, |check| match check.name {
            "config_validation" => EXIT_CONFIG,
            "seed_data" => EXIT_SEED,
            _ => EXIT_CHECK_FAILED,
        })
}

fn build_report(options: LoadOptions) -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(options) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            match GameCatalog::from_config(&config.catalog) {
                Ok(catalog) => {
                    checks.push(check_seed_data(&catalog));
                    checks.push(check_catalog_contract(catalog));
                }
                Err(error) => {
                    checks.push(DoctorCheck {
                        name: "seed_data",
                        status: CheckStatus::Fail,
                        details: error.to_string(),
                    });
                    checks.push(skipped("catalog_contract", "seed data did not load"));
                }
            }
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(skipped("seed_data", "configuration did not load"));
            checks.push(skipped("catalog_contract", "configuration did not load"));
        }
    }

    let any_fail = checks.iter().any(|check| check.status == CheckStatus::Fail);
    let overall_status = if any_fail { CheckStatus::Fail } else { CheckStatus::Pass };
    let summary = if any_fail {
        "doctor: one or more readiness checks failed".to_string()
    } else {
        "doctor: all readiness checks passed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn skipped(name: &'static str, reason: &str) -> DoctorCheck {
    DoctorCheck { name, status: CheckStatus::Skipped, details: format!("skipped because {reason}") }
}

fn check_seed_data(catalog: &GameCatalog) -> DoctorCheck {
    if catalog.len() != DEFAULT_SEED_COUNT {
        return DoctorCheck {
            name: "seed_data",
            status: CheckStatus::Fail,
            details: format!(
                "{} seed records (expected exactly {DEFAULT_SEED_COUNT})",
                catalog.len()
            ),
        };
    }

    let mut seen = HashSet::new();
    let duplicates = catalog
        .games()
        .iter()
        .filter(|game| !seen.insert(game.id.as_str()))
        .map(|game| game.id.as_str())
        .collect::<Vec<_>>();

    if duplicates.is_empty() {
        return DoctorCheck {
            name: "seed_data",
            status: CheckStatus::Pass,
            details: format!("{} seed records with unique ids", catalog.len()),
        };
    }

    DoctorCheck {
        name: "seed_data",
        status: CheckStatus::Warn,
        details: format!(
            "{} seed records; repeated ids resolve to their first record: {}",
            catalog.len(),
            duplicates.join(", ")
        ),
    }
}

/// Replays add/delete against a scratch copy and confirms the status codes.
fn check_catalog_contract(mut catalog: GameCatalog) -> DoctorCheck {
    let probe_id = probe_id(&catalog);
    let probe = GameDraft {
        id: Some(probe_id.clone()),
        title: Some("Doctor Probe".to_string()),
        genre: Some("Diagnostic".to_string()),
        year: Some(2000),
        developer: Some("gameshelf".to_string()),
        description: Some("Temporary record used by the doctor command.".to_string()),
    };
    let before = catalog.len();

    let expectations: [(&str, CatalogResponse, u16); 4] = [
        ("add", catalog.add(probe), status::CREATED),
        ("invalid add", catalog.add(GameDraft::default()), status::BAD_REQUEST),
        ("delete", catalog.delete(&probe_id), status::OK),
        ("repeat delete", catalog.delete(&probe_id), status::NOT_FOUND),
    ];

    let mismatches = expectations
        .iter()
        .filter(|(_, response, expected)| response.status() != *expected)
        .map(|(label, response, expected)| {
            format!("{label} returned {} (expected {expected})", response.status())
        })
        .collect::<Vec<_>>();

    if mismatches.is_empty() && catalog.len() == before {
        DoctorCheck {
            name: "catalog_contract",
            status: CheckStatus::Pass,
            details: "add/delete probe returned 201, 400, 200, 404".to_string(),
        }
    } else {
        DoctorCheck {
            name: "catalog_contract",
            status: CheckStatus::Fail,
            details: if mismatches.is_empty() {
                format!("catalog size drifted from {before} to {}", catalog.len())
            } else {
                mismatches.join("; ")
            },
        }
    }
}

fn probe_id(catalog: &GameCatalog) -> String {
    (0..)
        .map(|attempt| format!("doctor-probe-{attempt}"))
        .find(|candidate| catalog.get(candidate).is_none())
        .unwrap_or_else(|| "doctor-probe".to_string())
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Warn => "warn",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

pub mod config;
pub mod doctor;
pub mod list;
pub mod run;

use serde::Serialize;
use serde_json::Value;

pub const EXIT_CHECK_FAILED: u8 = 1;
pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_SEED: u8 = 3;
pub const EXIT_SCRIPT_INPUT: u8 = 4;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        Self::success_with_data(command, message, None)
    }

    pub fn success_with_data(
        command: &str,
        message: impl Into<String>,
        data: Option<Value>,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            data,
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            data: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            escape_json(&error.to_string())
        )
    })
}

pub(crate) fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::CommandResult;

    #[test]
    fn success_omits_data_when_absent() {
        let result = CommandResult::success("list", "done");
        let payload: Value = serde_json::from_str(&result.output).expect("json output");

        assert_eq!(result.exit_code, 0);
        assert_eq!(payload["status"], "ok");
        assert!(payload.get("data").is_none());
        assert!(payload["error_class"].is_null());
    }

    #[test]
    fn failure_carries_class_and_exit_code() {
        let result = CommandResult::failure("run", "script_input", "line 3: bad op", 4);
        let payload: Value = serde_json::from_str(&result.output).expect("json output");

        assert_eq!(result.exit_code, 4);
        assert_eq!(payload["error_class"], "script_input");
        assert_eq!(payload["message"], "line 3: bad op");
    }

    #[test]
    fn data_is_embedded_verbatim() {
        let result = CommandResult::success_with_data("list", "ok", Some(json!({ "n": 1 })));
        let payload: Value = serde_json::from_str(&result.output).expect("json output");

        assert_eq!(payload["data"], json!({ "n": 1 }));
    }
}

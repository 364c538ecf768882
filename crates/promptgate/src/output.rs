//! JSON output formatting

use serde::{Deserialize, Serialize};

use promptgate_core::{Answer, PromptError};

const SCHEMA_VERSION: &str = "1";

/// JSON response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse<T> {
    /// Schema version for forward compatibility
    pub schema_version: String,
    /// Command that generated this response
    pub command: String,
    /// Status: "ok", "cancelled" or "error"
    pub status: String,
    /// Command-specific payload
    pub data: T,
    /// Errors that ended the command
    pub issues: Vec<JsonIssue>,
}

impl<T> JsonResponse<T> {
    /// Create a successful response
    pub fn ok(command: &str, data: T) -> Self {
        Self::with_status(command, "ok", data, vec![])
    }

    /// Create a response for a prompt the user backed out of
    pub fn cancelled(command: &str, data: T) -> Self {
        Self::with_status(command, "cancelled", data, vec![])
    }

    /// Create an error response
    pub fn error(command: &str, data: T, issues: Vec<JsonIssue>) -> Self {
        Self::with_status(command, "error", data, issues)
    }

    fn with_status(command: &str, status: &str, data: T, issues: Vec<JsonIssue>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: status.to_string(),
            data,
            issues,
        }
    }
}

impl<T: Serialize> JsonResponse<T> {
    /// Print as pretty JSON on stdout
    pub fn print(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("error: failed to serialize response: {}", e),
        }
    }
}

/// Issue object structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonIssue {
    /// Error code (e.g., "E001")
    pub code: String,
    /// Severity level
    pub severity: String,
    /// Human-readable message
    pub message: String,
}

impl From<&PromptError> for JsonIssue {
    fn from(err: &PromptError) -> Self {
        Self {
            code: err.code().to_string(),
            severity: "error".to_string(),
            message: err.to_string(),
        }
    }
}

/// Data payload for the split command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitData {
    pub tokens: Vec<String>,
}

/// Data payload for the summarize command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryData {
    pub summary: String,
    pub count: usize,
}

/// Data payload for the read-line command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineData {
    pub line: Option<String>,
}

/// Data payload for prompt commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerData<T> {
    /// The confirmed value; absent when cancelled or failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
}

impl<T> From<Answer<T>> for AnswerData<T> {
    fn from(answer: Answer<T>) -> Self {
        Self {
            value: answer.confirmed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope() {
        let response = JsonResponse::ok(
            "split",
            SplitData {
                tokens: vec!["a".to_string(), "b".to_string()],
            },
        );
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["schema_version"], "1");
        assert_eq!(json["command"], "split");
        assert_eq!(json["status"], "ok");
        assert_eq!(json["data"]["tokens"][1], "b");
        assert!(json["issues"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_error_envelope_carries_code() {
        let err = PromptError::Timeout {
            prompt: "Name: ".to_string(),
        };
        let response: JsonResponse<LineData> =
            JsonResponse::error("read-line", LineData { line: None }, vec![(&err).into()]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["issues"][0]["code"], "E001");
        assert_eq!(json["issues"][0]["severity"], "error");
    }

    #[test]
    fn test_cancelled_answer_has_no_value() {
        let data: AnswerData<usize> = Answer::Cancelled.into();
        let response = JsonResponse::cancelled("ask menu", data);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "cancelled");
        assert!(json["data"].get("value").is_none());
    }
}

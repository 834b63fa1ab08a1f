use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A message produced while planning one class, attached to the operation it concerns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: &'static str,
    pub message: String,
    /// Declared name of the operation the diagnostic is about, if any.
    pub operation: Option<String>,
}

impl Diagnostic {
    pub fn error(code: &'static str, message: impl Into<String>, operation: Option<&str>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            operation: operation.map(str::to_owned),
        }
    }

    pub fn warning(code: &'static str, message: impl Into<String>, operation: Option<&str>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            operation: operation.map(str::to_owned),
        }
    }

    pub fn info(code: &'static str, message: impl Into<String>, operation: Option<&str>) -> Self {
        Self {
            severity: Severity::Info,
            code,
            message: message.into(),
            operation: operation.map(str::to_owned),
        }
    }
}

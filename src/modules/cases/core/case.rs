use crate::modules::cases::core::state::CaseState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-facing identity of a case, `{AREA_CODE}-{NNNNNN}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseCode(String);

impl CaseCode {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn compose(prefix: &str, suffix: u32) -> Self {
        Self(format!("{prefix}-{suffix:06}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits printed on the barcode label of the paper file.
    pub fn barcode(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl fmt::Display for CaseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub url: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub code: CaseCode,
    pub title: String,
    pub external_ref: Option<String>,
    pub sender_name: String,
    pub current_area: String,
    pub final_area: String,
    pub state: CaseState,
    pub attachment: Option<DocumentRef>,
    pub process_template: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    pub version: i64,
}

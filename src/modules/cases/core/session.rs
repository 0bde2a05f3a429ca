use serde::{Deserialize, Serialize};

/// Who is calling the workflow. Passed explicitly to every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub display_name: String,
    pub area: Option<String>,
    pub is_admin: bool,
}

impl Session {
    pub fn member(display_name: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            area: Some(area.into()),
            is_admin: false,
        }
    }

    pub fn admin(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            area: None,
            is_admin: true,
        }
    }

    pub fn visibility(&self) -> Visibility<'_> {
        if self.is_admin {
            return Visibility::Everything;
        }
        match self.area.as_deref().map(str::trim) {
            Some(area) if !area.is_empty() => Visibility::Area(area),
            _ => Visibility::Nothing,
        }
    }
}

/// Which cases a caller may list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility<'a> {
    Everything,
    /// Only cases currently held by this area.
    Area(&'a str),
    /// Non-admin caller without an assigned area.
    Nothing,
}

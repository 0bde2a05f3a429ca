use crate::modules::cases::core::case::CaseCode;
use crate::modules::cases::core::state::CaseState;
use crate::modules::cases::use_cases::transfer_case::command::TransferCase;

pub struct TransferCaseBuilder {
    inner: TransferCase,
}

#[allow(dead_code)]
impl TransferCaseBuilder {
    /// Sends the case to Finance from wherever it is, keeping its state.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            inner: TransferCase {
                code: CaseCode::new(code),
                origin_area: String::new(),
                destination_area: "Finance".into(),
                external_ref: "OF-2025-001".into(),
                acting_user: "Ana Pérez".into(),
                notes: None,
                next_state: None,
                expected_version: None,
            },
        }
    }

    pub fn origin_area(mut self, v: impl Into<String>) -> Self {
        self.inner.origin_area = v.into();
        self
    }

    pub fn destination_area(mut self, v: impl Into<String>) -> Self {
        self.inner.destination_area = v.into();
        self
    }

    pub fn external_ref(mut self, v: impl Into<String>) -> Self {
        self.inner.external_ref = v.into();
        self
    }

    pub fn acting_user(mut self, v: impl Into<String>) -> Self {
        self.inner.acting_user = v.into();
        self
    }

    pub fn notes(mut self, v: Option<&str>) -> Self {
        self.inner.notes = v.map(str::to_string);
        self
    }

    pub fn next_state(mut self, v: Option<CaseState>) -> Self {
        self.inner.next_state = v;
        self
    }

    pub fn expected_version(mut self, v: Option<i64>) -> Self {
        self.inner.expected_version = v;
        self
    }

    pub fn build(self) -> TransferCase {
        self.inner
    }
}

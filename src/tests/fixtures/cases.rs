// Builder for stored case rows, so tests only spell out the fields they care about.

use crate::modules::cases::core::case::{Case, CaseCode};
use crate::modules::cases::core::state::CaseState;

pub const FIXED_CREATED_AT: i64 = 1_700_000_000_000;

pub struct CaseBuilder {
    inner: Case,
}

impl Default for CaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CaseBuilder {
    pub fn new() -> Self {
        Self {
            inner: Case {
                code: CaseCode::new("JURI-000001"),
                title: "Solicitud de presupuesto".into(),
                external_ref: None,
                sender_name: "Luis Gómez".into(),
                current_area: "Departamento Jurídico".into(),
                final_area: "Dirección General".into(),
                state: CaseState::EnTransito,
                attachment: None,
                process_template: None,
                created_at: FIXED_CREATED_AT,
                updated_at: FIXED_CREATED_AT,
                version: 1,
            },
        }
    }

    pub fn code(mut self, v: impl Into<String>) -> Self {
        self.inner.code = CaseCode::new(v);
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn sender_name(mut self, v: impl Into<String>) -> Self {
        self.inner.sender_name = v.into();
        self
    }

    pub fn external_ref(mut self, v: Option<&str>) -> Self {
        self.inner.external_ref = v.map(str::to_string);
        self
    }

    pub fn current_area(mut self, v: impl Into<String>) -> Self {
        self.inner.current_area = v.into();
        self
    }

    pub fn final_area(mut self, v: impl Into<String>) -> Self {
        self.inner.final_area = v.into();
        self
    }

    pub fn state(mut self, v: CaseState) -> Self {
        self.inner.state = v;
        self
    }

    pub fn process_template(mut self, v: Option<&str>) -> Self {
        self.inner.process_template = v.map(str::to_string);
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self.inner.updated_at = v;
        self
    }

    pub fn version(mut self, v: i64) -> Self {
        self.inner.version = v;
        self
    }

    pub fn build(self) -> Case {
        self.inner
    }
}

#[cfg(test)]
mod case_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_start_from_a_fresh_case_in_transit() {
        let case = CaseBuilder::default().build();
        assert_eq!(case.state, CaseState::EnTransito);
        assert_eq!(case.version, 1);
        assert_eq!(case.created_at, case.updated_at);
    }

    #[rstest]
    fn it_should_override_the_given_fields() {
        let case = CaseBuilder::new()
            .code("LEGA-000042")
            .current_area("Legal")
            .state(CaseState::Detenido)
            .external_ref(Some("OF-7"))
            .created_at(5)
            .version(3)
            .build();
        assert_eq!(case.code.as_str(), "LEGA-000042");
        assert_eq!(case.current_area, "Legal");
        assert_eq!(case.state, CaseState::Detenido);
        assert_eq!(case.external_ref.as_deref(), Some("OF-7"));
        assert_eq!((case.created_at, case.version), (5, 3));
    }
}

use crate::modules::cases::use_cases::create_case::command::{AttachmentUpload, CreateCase};

pub struct CreateCaseBuilder {
    inner: CreateCase,
}

impl Default for CreateCaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateCaseBuilder {
    /// A case from Legal headed for Finance, without template or attachment.
    pub fn new() -> Self {
        Self {
            inner: CreateCase {
                title: "Solicitud de presupuesto".into(),
                external_ref: Some("OF-2025-001".into()),
                sender_name: "Luis Gómez".into(),
                first_area: "Legal".into(),
                final_area: "Finance".into(),
                process_template: None,
                attachment: None,
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn external_ref(mut self, v: Option<&str>) -> Self {
        self.inner.external_ref = v.map(str::to_string);
        self
    }

    pub fn sender_name(mut self, v: impl Into<String>) -> Self {
        self.inner.sender_name = v.into();
        self
    }

    pub fn first_area(mut self, v: impl Into<String>) -> Self {
        self.inner.first_area = v.into();
        self
    }

    pub fn final_area(mut self, v: impl Into<String>) -> Self {
        self.inner.final_area = v.into();
        self
    }

    pub fn process_template(mut self, v: Option<&str>) -> Self {
        self.inner.process_template = v.map(str::to_string);
        self
    }

    pub fn attachment(mut self, file_name: impl Into<String>, content: &[u8]) -> Self {
        self.inner.attachment = Some(AttachmentUpload {
            file_name: file_name.into(),
            content: content.to_vec(),
        });
        self
    }

    pub fn build(self) -> CreateCase {
        self.inner
    }
}

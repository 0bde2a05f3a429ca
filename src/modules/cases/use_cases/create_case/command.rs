/// File attached at creation time, uploaded before the case row is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentUpload {
    pub file_name: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCase {
    pub title: String,
    /// Oficio number, when the case arrives with one.
    pub external_ref: Option<String>,
    pub sender_name: String,
    pub first_area: String,
    pub final_area: String,
    pub process_template: Option<String>,
    pub attachment: Option<AttachmentUpload>,
}

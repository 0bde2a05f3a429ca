use crate::modules::cases::core::ports::AttachmentStore;
use crate::shared::infrastructure::store::StoreError;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Attachment bucket kept in memory; urls use the `memory://{bucket}/{path}` scheme.
pub struct InMemoryAttachments {
    bucket: String,
    objects: RwLock<HashMap<String, Vec<u8>>>,
    is_offline: bool,
}

impl InMemoryAttachments {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: RwLock::new(HashMap::new()),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn object(&self, path: &str) -> Option<Vec<u8>> {
        self.objects.read().await.get(path).cloned()
    }

    pub async fn object_count(&self) -> usize {
        self.objects.read().await.len()
    }
}

#[async_trait::async_trait]
impl AttachmentStore for InMemoryAttachments {
    async fn upload(&self, path: &str, content: &[u8]) -> Result<String, StoreError> {
        if self.is_offline {
            return Err(StoreError::Unavailable(format!("bucket `{}` offline", self.bucket)));
        }
        self.objects
            .write()
            .await
            .insert(path.to_string(), content.to_vec());
        Ok(format!("memory://{}/{}", self.bucket, path))
    }
}

#[cfg(test)]
mod in_memory_attachments_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_store_the_bytes_and_return_a_url() {
        let store = InMemoryAttachments::new("documentos");
        let url = store.upload("tramites/JURI-000001-oficio.pdf", b"%PDF").await.unwrap();
        assert_eq!(url, "memory://documentos/tramites/JURI-000001-oficio.pdf");
        assert_eq!(
            store.object("tramites/JURI-000001-oficio.pdf").await,
            Some(b"%PDF".to_vec())
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_bucket_is_offline() {
        let mut store = InMemoryAttachments::new("documentos");
        store.toggle_offline();
        assert!(store.upload("x", b"").await.is_err());
    }
}

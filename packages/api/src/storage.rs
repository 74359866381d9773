//! Receipt image storage on S3 compatible object stores.
//!
//! Images are written under their original filename in a single bucket.
//! There is no collision handling: a repeated filename replaces the stored
//! object.

use std::{env, sync::Arc};

use bytes::Bytes;
use object_store::{
    ObjectStore, PutPayload, aws::AmazonS3, aws::AmazonS3Builder, memory::InMemory, path::Path,
};

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("No file part in the request")]
    MissingFile,
    #[error("Uploaded file has no filename")]
    MissingFilename,
    #[error("Storage error: {0}")]
    Storage(#[from] object_store::Error),
}

/// Where receipt images live.
#[derive(Debug, Clone)]
pub enum ReceiptStore {
    Aws(Arc<AmazonS3>),
    Memory(Arc<InMemory>),
}

/// Outcome of a stored receipt image.
#[derive(Debug, Clone)]
pub struct StoredReceipt {
    pub path: String,
    pub size: usize,
}

impl ReceiptStore {
    pub fn as_generic(&self) -> Arc<dyn ObjectStore> {
        match self {
            ReceiptStore::Aws(store) => store.clone(),
            ReceiptStore::Memory(store) => store.clone(),
        }
    }

    /// Writes a receipt image under its original filename. Uploading the
    /// same name again overwrites the previous object.
    pub async fn put_receipt(
        &self,
        filename: &str,
        body: Bytes,
    ) -> Result<StoredReceipt, UploadError> {
        let filename = filename.trim();
        if filename.is_empty() {
            return Err(UploadError::MissingFilename);
        }

        let size = body.len();
        let path = Path::from(filename);
        self.as_generic()
            .put(&path, PutPayload::from_bytes(body))
            .await?;
        tracing::info!(path = %path, size, "stored receipt image");

        Ok(StoredReceipt {
            path: path.to_string(),
            size,
        })
    }
}

/// S3 settings for the receipt bucket, read from the environment.
#[derive(Clone, Debug)]
pub struct ReceiptStoreConfig {
    pub bucket: String,
    pub region: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub endpoint: Option<String>,
}

impl ReceiptStoreConfig {
    /// Reads the bucket settings. `None` when `S3_BUCKET` is unset, in
    /// which case the server runs with uploads disabled.
    pub fn from_env() -> Option<Self> {
        let bucket = env::var("S3_BUCKET")
            .ok()
            .filter(|bucket| !bucket.trim().is_empty())?;

        Some(ReceiptStoreConfig {
            bucket,
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            access_key_id: env::var("S3_KEY")
                .or_else(|_| env::var("AWS_ACCESS_KEY_ID"))
                .ok(),
            secret_access_key: env::var("S3_SECRET_ACCESS_KEY")
                .or_else(|_| env::var("AWS_SECRET_ACCESS_KEY"))
                .ok(),
            endpoint: env::var("AWS_ENDPOINT").ok(),
        })
    }

    /// Builds the S3 backed store for the configured bucket.
    pub fn build_store(&self) -> Result<ReceiptStore, object_store::Error> {
        let mut builder = AmazonS3Builder::new()
            .with_region(&self.region)
            .with_bucket_name(&self.bucket);

        // Static credentials if provided, otherwise the AWS credential chain.
        if let (Some(access_key), Some(secret_key)) =
            (&self.access_key_id, &self.secret_access_key)
        {
            builder = builder
                .with_access_key_id(access_key)
                .with_secret_access_key(secret_key);
        }

        if let Some(endpoint) = &self.endpoint {
            builder = builder.with_endpoint(endpoint);
            if endpoint.starts_with("http://") {
                builder = builder.with_allow_http(true);
            }
        }

        let store = builder.build()?;
        Ok(ReceiptStore::Aws(Arc::new(store)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_store() -> ReceiptStore {
        ReceiptStore::Memory(Arc::new(InMemory::new()))
    }

    #[tokio::test]
    async fn stores_under_exact_filename() {
        let store = memory_store();
        let stored = store
            .put_receipt("receipt-42.jpg", Bytes::from_static(b"jpeg bytes"))
            .await
            .expect("put succeeds");
        assert_eq!(stored.path, "receipt-42.jpg");
        assert_eq!(stored.size, 10);

        let read = store
            .as_generic()
            .get(&Path::from("receipt-42.jpg"))
            .await
            .expect("object exists")
            .bytes()
            .await
            .expect("body reads");
        assert_eq!(read.as_ref(), b"jpeg bytes");
    }

    #[tokio::test]
    async fn same_filename_overwrites() {
        let store = memory_store();
        store
            .put_receipt("receipt.jpg", Bytes::from_static(b"first"))
            .await
            .expect("first put");
        store
            .put_receipt("receipt.jpg", Bytes::from_static(b"second"))
            .await
            .expect("second put");

        let read = store
            .as_generic()
            .get(&Path::from("receipt.jpg"))
            .await
            .expect("object exists")
            .bytes()
            .await
            .expect("body reads");
        assert_eq!(read.as_ref(), b"second");
    }

    #[tokio::test]
    async fn blank_filename_rejected() {
        let store = memory_store();
        let err = store
            .put_receipt("   ", Bytes::from_static(b"x"))
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::MissingFilename));
    }

    #[test]
    fn builds_store_from_static_credentials() {
        let config = ReceiptStoreConfig {
            bucket: "receipts".to_string(),
            region: "ap-southeast-2".to_string(),
            access_key_id: Some("key".to_string()),
            secret_access_key: Some("secret".to_string()),
            endpoint: Some("http://127.0.0.1:9000".to_string()),
        };
        config.build_store().expect("builder accepts the config");
    }
}

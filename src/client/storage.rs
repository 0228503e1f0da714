//! Remote file storage for letter images (`rfs.*`, `domain = image`).

use std::path::Path;

use base64::{Engine as _, engine::general_purpose};

use super::{SendsayClient, SendsayError};
use crate::domain::{ApiResult, Payload};

const STORAGE_DOMAIN: &str = "image";

impl SendsayClient {
    /// Upload the local file `from` to the remote path `to`.
    ///
    /// The file is read with blocking I/O when this method is called, before the returned
    /// future is polled. Callers on an async runtime who cannot block should read the file
    /// themselves and use [`SendsayClient::put_file_bytes`].
    pub fn put_file<'a>(
        &'a self,
        from: impl AsRef<Path>,
        to: &'a str,
    ) -> impl Future<Output = Result<ApiResult, SendsayError>> + Send + 'a {
        let from = from.as_ref();
        let data = std::fs::read(from).map_err(|source| SendsayError::File {
            path: from.to_path_buf(),
            source,
        });
        self.put_read_file(data, to)
    }

    async fn put_read_file(
        &self,
        data: Result<Vec<u8>, SendsayError>,
        to: &str,
    ) -> Result<ApiResult, SendsayError> {
        self.put_file_bytes(&data?, to).await
    }

    /// Upload `data` to the remote path `to`.
    pub async fn put_file_bytes(&self, data: &[u8], to: &str) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("rfs.file.put")
                .field("domain", STORAGE_DOMAIN)
                .field("encoding", "base64")
                .field("data", general_purpose::STANDARD.encode(data))
                .field("path", to)
                .build(),
        )
        .await
    }

    pub async fn mkdir(&self, path: &str) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("rfs.dir.make")
                .field("domain", STORAGE_DOMAIN)
                .field("path", path)
                .build(),
        )
        .await
    }

    /// Remove a remote directory.
    pub async fn rm(&self, path: &str) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("rfs.dir.delete")
                .field("domain", STORAGE_DOMAIN)
                .field("path", path)
                .build(),
        )
        .await
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;

use crate::config::ProviderConfig;
use crate::data_storage::{DataStorage, DataStorageError};

/// Validated parameters for the S3 storage backend.
#[derive(Debug, Clone)]
pub struct AWSS3ValidatedArgs {
    pub bucket_name: String,
}

pub struct AWSS3 {
    client: Client,
    bucket_name: String,
}

impl AWSS3 {
    /// Builds the client from an already loaded provider config. The
    /// handle is stateless across calls and safe to share.
    pub fn new_with_settings(s3_config: &AWSS3ValidatedArgs, provider_config: Arc<ProviderConfig>) -> Self {
        let sdk_config = provider_config.get_aws_client_or_panic();
        // S3-compatible stores (MinIO, LocalStack, hosting providers) expect
        // path-style addressing.
        let client_config = aws_sdk_s3::config::Builder::from(sdk_config).force_path_style(true).build();
        let client = Client::from_conf(client_config);

        Self { client, bucket_name: s3_config.bucket_name.clone() }
    }
}

#[async_trait]
impl DataStorage for AWSS3 {
    async fn get_data(&self, key: &str) -> Result<Option<Bytes>, DataStorageError> {
        let response = match self.client.get_object().bucket(&self.bucket_name).key(key).send().await {
            Ok(response) => response,
            Err(err) if err.as_service_error().is_some_and(|e| e.is_no_such_key()) => return Ok(None),
            Err(err) => {
                tracing::error!(key, error = ?err, "Failed to fetch object");
                return Err(DataStorageError::Request { key: key.to_string(), source: err.into() });
            }
        };

        let data_stream = response.body.collect().await.map_err(|err| {
            tracing::error!(key, error = ?err, "Failed to read object body");
            DataStorageError::BodyRead { key: key.to_string(), source: err }
        })?;

        Ok(Some(data_stream.into_bytes()))
    }

    async fn put_data(&self, data: Bytes, key: &str) -> Result<(), DataStorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key)
            .body(ByteStream::from(data))
            .content_type("application/json")
            .send()
            .await
            .map_err(|err| {
                tracing::error!(key, error = ?err, "Failed to store object");
                DataStorageError::Request { key: key.to_string(), source: err.into() }
            })?;

        tracing::debug!(key, "Stored object");
        Ok(())
    }
}

use thiserror::Error;

/// Failure taxonomy of the blob storage helper. Every failure carries the
/// underlying cause; the helper performs no retries and no local
/// recovery, the caller decides whether to retry, degrade or report.
#[derive(Debug, Error)]
pub enum DataStorageError {
    #[error("storage key must be a non-empty string")]
    EmptyKey,

    #[error("object store request failed for key {key}: {source}")]
    Request {
        key: String,
        #[source]
        source: aws_sdk_s3::Error,
    },

    #[error("failed to read object body for key {key}: {source}")]
    BodyRead {
        key: String,
        #[source]
        source: aws_smithy_types::byte_stream::error::Error,
    },

    #[error("payload for key {key} is not serializable to JSON: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("object at key {key} is not valid JSON: {source}")]
    MalformedBody {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

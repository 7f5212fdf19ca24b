pub mod aws_s3;
pub mod error;

use async_trait::async_trait;
use bytes::Bytes;
use mockall::automock;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use error::DataStorageError;

/// DataStorage trait contains the functions used to store and get blobs
/// from the object store. A blob is created or fully overwritten on every
/// put; there is no partial update, no listing and no deletion. Two
/// writers racing on the same key end up with whichever write the store
/// applies last (last-writer-wins) - callers needing stronger ordering
/// must coordinate outside this trait.
#[automock]
#[async_trait]
pub trait DataStorage: Send + Sync {
    /// Reads the full object at `key`. A missing key is `Ok(None)`, not
    /// an error.
    async fn get_data(&self, key: &str) -> Result<Option<Bytes>, DataStorageError>;

    /// Writes the full object at `key`, overwriting whatever is there.
    async fn put_data(&self, data: Bytes, key: &str) -> Result<(), DataStorageError>;
}

/// Serializes `value` to a UTF-8 JSON body and stores it under `key`.
pub async fn put_json<T>(storage: &dyn DataStorage, key: &str, value: &T) -> Result<(), DataStorageError>
where
    T: Serialize + ?Sized,
{
    if key.is_empty() {
        return Err(DataStorageError::EmptyKey);
    }
    let body =
        serde_json::to_vec(value).map_err(|e| DataStorageError::Serialize { key: key.to_string(), source: e })?;
    storage.put_data(Bytes::from(body), key).await
}

/// Reads the object at `key` and parses it as JSON. A missing key or an
/// empty body is `Ok(None)`; a body that is not valid JSON is a
/// `MalformedBody` failure, distinct from the absent case.
pub async fn get_json<T>(storage: &dyn DataStorage, key: &str) -> Result<Option<T>, DataStorageError>
where
    T: DeserializeOwned,
{
    if key.is_empty() {
        return Err(DataStorageError::EmptyKey);
    }
    let Some(body) = storage.get_data(key).await? else {
        return Ok(None);
    };
    if body.is_empty() {
        return Ok(None);
    }
    let value =
        serde_json::from_slice(&body).map_err(|e| DataStorageError::MalformedBody { key: key.to_string(), source: e })?;
    Ok(Some(value))
}

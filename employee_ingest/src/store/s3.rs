use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use log::{error, info};

use super::{FetchedObject, ObjectStore};
use crate::error::{IngestError, Result};
use crate::event::ObjectLocation;

#[derive(Clone, Debug)]
pub struct S3ObjectStore {
    inner: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, location: &ObjectLocation) -> Result<FetchedObject> {
        let obj = self
            .inner
            .get_object()
            .bucket(&location.bucket)
            .key(&location.key)
            .send()
            .await
            .map_err(|e| {
                let e = object_not_found(location, &e);
                error!("{}", e);
                e
            })?;

        info!(
            "CONTENT TYPE: {}",
            obj.content_type.as_deref().unwrap_or("<none>")
        );

        Ok(FetchedObject::new(
            obj.content_type,
            obj.body.into_async_read(),
        ))
    }
}

/// Any failed fetch (missing bucket or key, wrong region, access) ends the
/// invocation the same way.
pub(crate) fn object_not_found<E>(location: &ObjectLocation, err: &E) -> IngestError
where
    E: std::error::Error,
{
    IngestError::ObjectNotFound {
        bucket: location.bucket.clone(),
        key: location.key.clone(),
        message: DisplayErrorContext(err).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::operation::get_object::GetObjectError;
    use aws_sdk_s3::types::error::NoSuchKey;

    #[test]
    fn missing_key_is_object_not_found() {
        let location = ObjectLocation {
            bucket: "uploads".to_string(),
            key: "employees.csv".to_string(),
        };
        let se = GetObjectError::NoSuchKey(
            NoSuchKey::builder()
                .message("The specified key does not exist.")
                .build(),
        );

        let e = object_not_found(&location, &se);

        match &e {
            IngestError::ObjectNotFound {
                bucket,
                key,
                message,
            } => {
                assert_eq!(bucket, "uploads");
                assert_eq!(key, "employees.csv");
                assert!(message.contains("The specified key does not exist."));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!e.is_fatal());
        assert!(e.to_string().contains("same region as this function"));
    }
}

//! Extracts the uploaded object's coordinates from an S3 notification.
//!
use std::fmt;

use aws_lambda_events::event::s3::S3Event;

use crate::error::{IngestError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

/// Returns the location named by the first record of `event`. Any further
/// records are ignored.
pub fn object_location(event: &S3Event) -> Result<ObjectLocation> {
    let record = event
        .records
        .first()
        .ok_or_else(|| IngestError::InvalidEvent("event contains no records".to_string()))?;

    let bucket = record
        .s3
        .bucket
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| IngestError::InvalidEvent("record has no bucket name".to_string()))?;
    let key = record
        .s3
        .object
        .key
        .as_deref()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| IngestError::InvalidEvent("record has no object key".to_string()))?;

    Ok(ObjectLocation {
        bucket: bucket.to_owned(),
        key: decode_key(key)?,
    })
}

/// S3 notifications URL-encode object keys and write spaces as `+`.
fn decode_key(key: &str) -> Result<String> {
    let key = key.replace('+', " ");
    urlencoding::decode(&key)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| IngestError::InvalidEvent(format!("object key {} is not valid: {}", key, e)))
}

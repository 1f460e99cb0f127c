//! Seams to the two external stores. The handler only ever fetches one
//! object and upserts records keyed by `id`.
//!
use std::fmt;
use std::pin::Pin;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tokio::io::AsyncRead;

use crate::error::Result;
use crate::event::ObjectLocation;
use crate::record::EmployeeRecord;

mod dynamodb;
mod s3;

pub use self::dynamodb::DynamoDbEmployeeTable;
pub use self::s3::S3ObjectStore;

pub struct FetchedObject {
    /// Declared `Content-Type`, returned to the caller as-is.
    pub content_type: Option<String>,
    pub body: Pin<Box<dyn AsyncRead + Send>>,
}

impl FetchedObject {
    pub fn new(content_type: Option<String>, body: impl AsyncRead + Send + 'static) -> Self {
        FetchedObject {
            content_type,
            body: Box::pin(body),
        }
    }
}

impl fmt::Debug for FetchedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchedObject")
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn fetch(&self, location: &ObjectLocation) -> Result<FetchedObject>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait EmployeeTable: Send + Sync {
    /// Inserts the record, or overwrites the one with the same `id`.
    async fn upsert(&self, record: &EmployeeRecord) -> Result<()>;
}

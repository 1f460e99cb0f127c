//! Loads employee rows from an uploaded CSV object into a key-value table.
//!
//! An S3 upload notification names the object; its lines are split on `,`
//! and each row `id,name,salary` is upserted into the table keyed by `id`.
pub mod config;
pub mod error;
pub mod event;
pub mod ingest;
pub mod record;
pub mod rows;
pub mod store;

pub use config::Config;
pub use error::{IngestError, Result};
pub use event::{object_location, ObjectLocation};
pub use ingest::{ingest, IngestSummary};
pub use record::EmployeeRecord;
pub use rows::{read_rows, Row};

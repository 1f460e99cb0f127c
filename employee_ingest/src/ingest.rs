use aws_lambda_events::event::s3::S3Event;
use futures::StreamExt;
use log::{debug, info};

use crate::error::Result;
use crate::event::{object_location, ObjectLocation};
use crate::record::EmployeeRecord;
use crate::rows::read_rows;
use crate::store::{EmployeeTable, ObjectStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    pub location: ObjectLocation,
    pub content_type: Option<String>,
    pub rows_written: usize,
}

/// Loads the object named by `event` into `table`, one upsert per row, in
/// file order. The first failing row stops the run; rows already written
/// stay written.
pub async fn ingest<S, T>(event: &S3Event, objects: &S, table: &T) -> Result<IngestSummary>
where
    S: ObjectStore + ?Sized,
    T: EmployeeTable + ?Sized,
{
    let location = object_location(event)?;
    info!("Ingesting employees from {}", location);

    let object = objects.fetch(&location).await?;
    let content_type = object.content_type;

    let rows = read_rows(object.body);
    futures::pin_mut!(rows);

    let mut rows_written = 0;
    while let Some(row) = rows.next().await {
        let row = row?;
        let record = EmployeeRecord::from_row(&row)?;
        table.upsert(&record).await?;
        rows_written += 1;
        debug!("Wrote employee {} from line {}", record.id, row.line);
    }

    info!("Wrote {} employees from {}", rows_written, location);

    Ok(IngestSummary {
        location,
        content_type,
        rows_written,
    })
}

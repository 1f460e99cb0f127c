use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use log::{debug, error};

use super::EmployeeTable;
use crate::error::{IngestError, Result};
use crate::record::EmployeeRecord;

#[derive(Clone, Debug)]
pub struct DynamoDbEmployeeTable {
    inner: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoDbEmployeeTable {
    pub fn new(inner: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            inner,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl EmployeeTable for DynamoDbEmployeeTable {
    async fn upsert(&self, record: &EmployeeRecord) -> Result<()> {
        let res = self
            .inner
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record.to_item()))
            .send()
            .await;

        match res {
            Ok(_) => {
                debug!("{} was successfully updated", self.table_name);
                Ok(())
            }
            Err(e) => {
                let e = classify_put_error(&self.table_name, e.into_service_error());
                error!("Error writing employee {}: {}", record.id, e);
                Err(e)
            }
        }
    }
}

/// A missing table is told apart from every other rejection.
pub(crate) fn classify_put_error(table: &str, se: PutItemError) -> IngestError {
    match se {
        PutItemError::ResourceNotFoundException(_) => IngestError::TableNotFound(table.to_owned()),
        _ => IngestError::WriteRejected {
            table: table.to_owned(),
            message: DisplayErrorContext(&se).to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::error::{
        ProvisionedThroughputExceededException, ResourceNotFoundException,
    };

    #[test]
    fn missing_table_is_table_not_found() {
        let se = PutItemError::ResourceNotFoundException(
            ResourceNotFoundException::builder()
                .message("Requested resource not found")
                .build(),
        );
        let e = classify_put_error("employee", se);
        assert!(matches!(&e, IngestError::TableNotFound(table) if table == "employee"));
        assert!(e.is_fatal());
    }

    #[test]
    fn throttling_is_write_rejected() {
        let se = PutItemError::ProvisionedThroughputExceededException(
            ProvisionedThroughputExceededException::builder()
                .message("Rate of requests exceeds the allowed throughput")
                .build(),
        );
        let e = classify_put_error("employee", se);
        match &e {
            IngestError::WriteRejected { table, message } => {
                assert_eq!(table, "employee");
                assert!(message.contains("Rate of requests exceeds the allowed throughput"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(e.exit_code(), Some(1));
    }
}

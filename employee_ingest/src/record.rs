//! Maps a row onto the employee item written to the table.
//!
use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use crate::error::{IngestError, Result};
use crate::rows::Row;

pub const ID_ATTRIBUTE: &str = "id";
pub const NAME_ATTRIBUTE: &str = "name";
pub const SALARY_ATTRIBUTE: &str = "salary";

/// An employee keyed by `id`. `id` and `salary` hold the raw numeric text;
/// numeric-ness is checked by the table, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub id: String,
    pub name: String,
    pub salary: String,
}

impl EmployeeRecord {
    pub fn from_row(row: &Row) -> Result<Self> {
        match (row.field(0), row.field(1), row.field(2)) {
            (Some(id), Some(name), Some(salary)) => Ok(EmployeeRecord {
                id: id.to_owned(),
                name: name.to_owned(),
                salary: salary.to_owned(),
            }),
            _ => Err(IngestError::MalformedRow {
                line: row.line,
                fields: row.fields.len(),
            }),
        }
    }

    pub fn to_item(&self) -> HashMap<String, AttributeValue> {
        [
            (ID_ATTRIBUTE.to_string(), AttributeValue::N(self.id.clone())),
            (NAME_ATTRIBUTE.to_string(), AttributeValue::S(self.name.clone())),
            (
                SALARY_ATTRIBUTE.to_string(),
                AttributeValue::N(self.salary.clone()),
            ),
        ]
        .into_iter()
        .collect()
    }
}

impl TryFrom<&Row> for EmployeeRecord {
    type Error = IngestError;

    fn try_from(row: &Row) -> Result<Self> {
        EmployeeRecord::from_row(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_positional_fields_to_typed_attributes() {
        let record = EmployeeRecord::from_row(&Row::parse(1, "7,Alice,50000")).unwrap();
        let item = record.to_item();

        assert_eq!(item.len(), 3);
        assert_eq!(item["id"], AttributeValue::N("7".to_string()));
        assert_eq!(item["name"], AttributeValue::S("Alice".to_string()));
        assert_eq!(item["salary"], AttributeValue::N("50000".to_string()));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let record = EmployeeRecord::try_from(&Row::parse(1, "7,Alice,50000,Paris")).unwrap();
        assert_eq!(record.salary, "50000");
    }

    #[test]
    fn non_numeric_values_pass_through() {
        let record = EmployeeRecord::from_row(&Row::parse(1, "seven,Alice,lots")).unwrap();
        assert_eq!(record.to_item()["id"], AttributeValue::N("seven".to_string()));
    }

    #[test]
    fn short_row_is_malformed() {
        let err = EmployeeRecord::from_row(&Row::parse(5, "7,Alice")).unwrap_err();
        assert!(matches!(err, IngestError::MalformedRow { line: 5, fields: 2 }));
    }
}

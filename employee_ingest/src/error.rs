pub type Result<T> = std::result::Result<T, IngestError>;

/// Exit status used when a write-boundary failure ends the process.
pub const FATAL_EXIT_CODE: i32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
    #[error("Error getting object {key} from bucket {bucket}. Make sure they exist and your bucket is in the same region as this function: {message}")]
    ObjectNotFound {
        bucket: String,
        key: String,
        message: String,
    },
    #[error("Could not decode object content as text lines: {0}")]
    DecodeError(String),
    #[error("Malformed row at line {line}: expected at least 3 fields, got {fields}")]
    MalformedRow { line: usize, fields: usize },
    #[error("The table \"{0}\" can't be found. Be sure that it exists and that you've typed its name correctly!")]
    TableNotFound(String),
    #[error("Write to table \"{table}\" rejected: {message}")]
    WriteRejected { table: String, message: String },
}

impl IngestError {
    /// Write-boundary failures stop all further processing of the invocation.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            IngestError::TableNotFound(_) | IngestError::WriteRejected { .. }
        )
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.is_fatal().then_some(FATAL_EXIT_CODE)
    }
}

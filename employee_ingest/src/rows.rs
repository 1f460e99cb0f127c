//! Decodes an object body into comma-separated rows, one per non-empty line.
//!
use futures::{stream, Stream, StreamExt};
use tokio::io::AsyncRead;
use tokio_util::codec::{FramedRead, LinesCodec};

use crate::error::{IngestError, Result};

pub const FIELD_DELIMITER: char = ',';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number in the source object.
    pub line: usize,
    pub fields: Vec<String>,
}

impl Row {
    pub fn parse(line: usize, text: &str) -> Row {
        Row {
            line,
            fields: split_fields(text),
        }
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}

/// Splits on the bare delimiter, no quoting or escaping. Trailing empty
/// fields are dropped, so `"7,Alice,"` yields two fields.
pub fn split_fields(text: &str) -> Vec<String> {
    let mut fields = text
        .split(FIELD_DELIMITER)
        .map(str::to_owned)
        .collect::<Vec<_>>();
    while fields.len() > 1 && fields.last().map_or(false, |f| f.is_empty()) {
        fields.pop();
    }
    if fields.len() == 1 && fields[0].is_empty() {
        fields.clear();
    }
    fields
}

/// Lazily reads rows from `reader`. Nothing is read until the stream is
/// polled. Lines end at `\n`, `\r\n` or a lone `\r`.
pub fn read_rows<R>(reader: R) -> impl Stream<Item = Result<Row>>
where
    R: AsyncRead + Send + Unpin,
{
    FramedRead::new(reader, LinesCodec::new())
        // LinesCodec already strips the `\r` of a `\r\n` ending.
        .flat_map(|line| {
            let lines: Vec<Result<String>> = match line {
                Ok(line) => line.split('\r').map(|l| Ok(l.to_owned())).collect(),
                Err(e) => vec![Err(IngestError::DecodeError(e.to_string()))],
            };
            stream::iter(lines)
        })
        .enumerate()
        .filter_map(|(i, line)| async move {
            match line {
                Ok(line) if line.is_empty() => None,
                Ok(line) => Some(Ok(Row::parse(i + 1, &line))),
                Err(e) => Some(Err(e)),
            }
        })
}

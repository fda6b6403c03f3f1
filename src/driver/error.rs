//! Errors raised while reading a source.
use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Unable to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to read line {line}")]
    Read {
        /// 1-based number of the line that could not be read.
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    pub fn io_error(&self) -> &io::Error {
        match self {
            ReadError::Open { source, .. } | ReadError::Read { source, .. } => source,
        }
    }
}

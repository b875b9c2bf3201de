//! Error handling for the sorting tool

use std::io;
use thiserror::Error;

/// Custom error type for sorting operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Permission denied: {file}")]
    PermissionDenied { file: String },

    #[error("No such file or directory: {file}")]
    FileNotFound { file: String },

    #[error("Is a directory: {file}")]
    IsDirectory { file: String },

    #[error("Input file {file} is also the output file")]
    InputIsOutput { file: String },

    #[error("Unknown data type: {name}")]
    UnknownDataType { name: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },
}

impl SortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::PermissionDenied { .. }
            | SortError::FileNotFound { .. }
            | SortError::IsDirectory { .. }
            | SortError::Io(_) => crate::SORT_FAILURE,

            _ => crate::EXIT_FAILURE,
        }
    }

    pub fn permission_denied(file: &str) -> Self {
        SortError::PermissionDenied {
            file: file.to_string(),
        }
    }

    pub fn file_not_found(file: &str) -> Self {
        SortError::FileNotFound {
            file: file.to_string(),
        }
    }

    pub fn is_directory(file: &str) -> Self {
        SortError::IsDirectory {
            file: file.to_string(),
        }
    }

    pub fn input_is_output(file: &str) -> Self {
        SortError::InputIsOutput {
            file: file.to_string(),
        }
    }

    pub fn unknown_data_type(name: &str) -> Self {
        SortError::UnknownDataType {
            name: name.to_string(),
        }
    }

    pub fn parse_error(message: &str) -> Self {
        SortError::ParseError {
            message: message.to_string(),
        }
    }
}

/// Result type for sorting operations
pub type SortResult<T> = Result<T, SortError>;

/// Context trait for attaching a file name to I/O failures
pub trait SortContext<T> {
    fn with_context<F>(self, f: F) -> SortResult<T>
    where
        F: FnOnce() -> String;

    fn with_file_context(self, filename: &str) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_context<F>(self, f: F) -> SortResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|io_err| {
            SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", f(), io_err),
            ))
        })
    }

    fn with_file_context(self, filename: &str) -> SortResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::PermissionDenied => SortError::permission_denied(filename),
            io::ErrorKind::NotFound => SortError::file_not_found(filename),
            _ => SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", filename, io_err),
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_context_maps_not_found() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        match result.with_file_context("numbers.txt") {
            Err(SortError::FileNotFound { file }) => assert_eq!(file, "numbers.txt"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_file_context_keeps_other_io_errors() {
        let result: Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "short read"));
        let err = result.with_file_context("words.txt").unwrap_err();
        assert!(matches!(err, SortError::Io(_)));
        assert!(err.to_string().contains("words.txt"));
        assert_eq!(err.exit_code(), crate::SORT_FAILURE);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(SortError::file_not_found("x").exit_code(), crate::SORT_FAILURE);
        assert_eq!(SortError::unknown_data_type("float").exit_code(), crate::EXIT_FAILURE);
        assert_eq!(
            SortError::unknown_data_type("float").to_string(),
            "Unknown data type: float"
        );
    }
}

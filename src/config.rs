//! Configuration management for sorting runs

use crate::error::{SortError, SortResult};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Kind of token read from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// Whitespace-delimited signed integers
    Long,
    /// Whitespace-delimited words
    Word,
    /// Whole lines
    Line,
}

impl DataType {
    /// Parameter value that selects this data type
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Long => "long",
            DataType::Word => "word",
            DataType::Line => "line",
        }
    }
}

impl FromStr for DataType {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(DataType::Long),
            "word" => Ok(DataType::Word),
            "line" => Ok(DataType::Line),
            _ => Err(SortError::unknown_data_type(s)),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortingType {
    /// Ascending by value
    #[default]
    Natural,
    /// Ascending by occurrence count, ties by value
    ByCount,
}

impl SortingType {
    /// Lenient mapping: anything other than `byCount` sorts naturally.
    pub fn from_parameter(value: &str) -> Self {
        match value {
            "byCount" => SortingType::ByCount,
            "natural" => SortingType::Natural,
            other => {
                log::warn!("unknown sorting type {other:?}, falling back to natural");
                SortingType::Natural
            }
        }
    }
}

/// Main configuration structure for a sorting run
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Data type as given on the command line; resolved at dispatch time
    pub data_type: String,
    /// Natural or by-count ordering
    pub sorting_type: SortingType,
    /// Input file (stdin when absent)
    pub input_file: Option<PathBuf>,
    /// Output file (stdout when absent)
    pub output_file: Option<PathBuf>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            data_type: DataType::Long.name().to_string(),
            sorting_type: SortingType::Natural,
            input_file: None,
            output_file: None,
        }
    }
}

impl SortConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_type(mut self, data_type: &str) -> Self {
        self.data_type = data_type.to_string();
        self
    }

    pub fn with_sorting_type(mut self, sorting_type: SortingType) -> Self {
        self.sorting_type = sorting_type;
        self
    }

    pub fn with_input_file(mut self, input_file: Option<PathBuf>) -> Self {
        self.input_file = input_file;
        self
    }

    pub fn with_output_file(mut self, output_file: Option<PathBuf>) -> Self {
        self.output_file = output_file;
        self
    }

    /// Resolve the requested data type.
    ///
    /// An unsupported name is not a configuration failure: the caller reports
    /// it on the output destination and skips the sort.
    pub fn data_type(&self) -> SortResult<DataType> {
        self.data_type.parse()
    }

    /// Check if reading from stdin
    pub fn reading_from_stdin(&self) -> bool {
        self.input_file.is_none()
    }

    /// Check if writing to stdout
    pub fn writing_to_stdout(&self) -> bool {
        self.output_file.is_none()
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if let Some(output) = &self.output_file {
            if output.is_dir() {
                return Err(SortError::is_directory(&output.display().to_string()));
            }
            if let Some(input) = &self.input_file {
                if same_file(input, output) {
                    return Err(SortError::input_is_output(&input.display().to_string()));
                }
            }
        }

        if let Some(input) = &self.input_file {
            if input.is_dir() {
                return Err(SortError::is_directory(&input.display().to_string()));
            }
        }

        Ok(())
    }
}

/// True when both paths name the same file, including through hard links.
///
/// Truncating the output would otherwise pull the pages out from under the
/// mapped input.
#[cfg(unix)]
fn same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (a.metadata(), b.metadata()) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        // the output does not exist yet, so it cannot be the input
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Builder pattern for sort configuration
pub struct SortConfigBuilder {
    config: SortConfig,
}

impl SortConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SortConfig::default(),
        }
    }

    pub fn data_type(mut self, data_type: &str) -> Self {
        self.config.data_type = data_type.to_string();
        self
    }

    pub fn sorting_type(mut self, sorting_type: SortingType) -> Self {
        self.config.sorting_type = sorting_type;
        self
    }

    pub fn by_count(mut self) -> Self {
        self.config.sorting_type = SortingType::ByCount;
        self
    }

    pub fn input_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.input_file = Some(path.into());
        self
    }

    pub fn output_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.output_file = Some(path.into());
        self
    }

    pub fn build(self) -> SortResult<SortConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SortConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

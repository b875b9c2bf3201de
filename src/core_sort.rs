//! Read, aggregate, sort and report in one pass
//!
//! The three data types and two orderings share one generic pipeline; the
//! [`TokenKind`] strategy picks the reader and the token type.

use crate::aggregate::{Aggregate, FrequencyTable, TokenSequence};
use crate::config::{DataType, SortConfig, SortingType};
use crate::error::{SortContext, SortError, SortResult};
use crate::input::InputSource;
use crate::report::Reporter;
use crate::sorter::{sort_by_count, sort_natural};
use crate::token::{Integers, Lines, TokenKind, TokenReader, Words};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Message printed when the input file does not exist
pub const INPUT_NOT_FOUND: &str = "Error: Input file not found.";

/// One sorting run
pub struct CoreSort {
    config: SortConfig,
}

impl CoreSort {
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// Run against the configured input and output.
    ///
    /// The input is opened first so a missing input file never creates or
    /// truncates the output file. A missing input is reported on stdout and
    /// is not an error.
    pub fn sort(&self) -> SortResult<i32> {
        self.config.validate()?;

        let input = match self.open_input() {
            Ok(input) => input,
            Err(SortError::FileNotFound { file }) => {
                log::info!("input file {file} not found");
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{INPUT_NOT_FOUND}")?;
                stdout.flush()?;
                return Ok(crate::EXIT_SUCCESS);
            }
            Err(e) => return Err(e),
        };

        let mut output = self.open_output()?;
        let text = input.text();
        self.sort_text(&text, &mut output)?;
        output.flush()?;
        Ok(crate::EXIT_SUCCESS)
    }

    fn open_input(&self) -> SortResult<InputSource> {
        if self.config.reading_from_stdin() {
            log::debug!("reading standard input");
        }
        match &self.config.input_file {
            Some(path) => InputSource::open(path),
            None => InputSource::stdin(),
        }
    }

    fn open_output(&self) -> SortResult<Box<dyn Write>> {
        if self.config.writing_to_stdout() {
            log::debug!("writing standard output");
        }
        let output: Box<dyn Write> = match &self.config.output_file {
            Some(path) => {
                let file = File::create(path).with_file_context(&path.display().to_string())?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout())),
        };
        Ok(output)
    }

    /// Process buffered input text, writing the report to `out`.
    ///
    /// An unsupported data type is reported on `out` and nothing is sorted.
    pub fn sort_text<W: Write>(&self, text: &str, out: W) -> SortResult<()> {
        let mut reporter = Reporter::new(out);

        let data_type = match self.config.data_type() {
            Ok(data_type) => data_type,
            Err(SortError::UnknownDataType { name }) => {
                log::info!("unknown data type {name:?}, nothing to sort");
                reporter.unknown_data_type(&name)?;
                reporter.flush()?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        log::debug!(
            "sorting {} tokens in {:?} order",
            data_type,
            self.config.sorting_type
        );

        match data_type {
            DataType::Long => self.run::<Integers, _>(text, &mut reporter)?,
            DataType::Word => self.run::<Words, _>(text, &mut reporter)?,
            DataType::Line => self.run::<Lines, _>(text, &mut reporter)?,
        }

        reporter.flush()?;
        Ok(())
    }

    fn run<'a, K, W>(&self, text: &'a str, reporter: &mut Reporter<W>) -> io::Result<()>
    where
        K: TokenKind<'a>,
        W: Write,
    {
        match self.config.sorting_type {
            SortingType::Natural => {
                let mut sequence = TokenSequence::new();
                read_tokens::<K, _, _>(text, &mut sequence, reporter)?;
                let total = sequence.total();
                let sorted = sort_natural(sequence);
                reporter.total(K::DATA_TYPE, total)?;
                reporter.sorted(K::DATA_TYPE, &sorted)
            }
            SortingType::ByCount => {
                let mut table = FrequencyTable::new();
                read_tokens::<K, _, _>(text, &mut table, reporter)?;
                let total = table.total();
                log::debug!("{} distinct values out of {}", table.distinct(), total);
                let ranked = sort_by_count(table);
                reporter.total(K::DATA_TYPE, total)?;
                reporter.ranked(&ranked)
            }
        }
    }
}

/// Feed every well-formed token into `sink`, reporting the rest
fn read_tokens<'a, K, A, W>(text: &'a str, sink: &mut A, reporter: &mut Reporter<W>) -> io::Result<()>
where
    K: TokenKind<'a>,
    A: Aggregate<K::Token>,
    W: Write,
{
    for token in TokenReader::<K>::new(text) {
        match token {
            Ok(token) => sink.add(token),
            Err(malformed) => {
                log::debug!("skipping malformed token {:?}", malformed.chunk);
                reporter.malformed(&malformed)?;
            }
        }
    }
    Ok(())
}

//! Output formatting
//!
//! The reporter owns the destination writer for one run. Diagnostics and
//! results share it, so a diagnostic for a skipped token lands in the same
//! place as the totals that follow it.

use crate::config::DataType;
use crate::sorter::RankedEntry;
use crate::token::MalformedToken;
use std::fmt::Display;
use std::io::{self, Write};

/// Plural noun used in the totals line
pub fn noun(data_type: DataType) -> &'static str {
    match data_type {
        DataType::Long => "numbers",
        DataType::Word => "words",
        DataType::Line => "lines",
    }
}

/// Writes totals, sorted data and diagnostics to one destination
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Report a chunk skipped because it is not a number
    pub fn malformed(&mut self, token: &MalformedToken<'_>) -> io::Result<()> {
        writeln!(self.out, "{token}")
    }

    /// Report a data type that is not supported
    pub fn unknown_data_type(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "Unknown data type: {name}")
    }

    pub fn total(&mut self, data_type: DataType, total: usize) -> io::Result<()> {
        writeln!(self.out, "Total {}: {}.", noun(data_type), total)
    }

    /// Naturally sorted tokens.
    ///
    /// Numbers and words go on one line, each followed by a space. Lines are
    /// printed one per output line.
    pub fn sorted<T: Display>(&mut self, data_type: DataType, tokens: &[T]) -> io::Result<()> {
        match data_type {
            DataType::Line => {
                writeln!(self.out, "Sorted data:")?;
                for token in tokens {
                    writeln!(self.out, "{token}")?;
                }
            }
            DataType::Long | DataType::Word => {
                write!(self.out, "Sorted data: ")?;
                for token in tokens {
                    write!(self.out, "{token} ")?;
                }
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// One line per distinct value, in ranked order
    pub fn ranked<T: Display>(&mut self, entries: &[RankedEntry<T>]) -> io::Result<()> {
        for entry in entries {
            writeln!(
                self.out,
                "{}: {} time(s), {}%",
                entry.value, entry.count, entry.percentage
            )?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

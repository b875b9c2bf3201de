//! Fully buffered input sources
//!
//! Files are memory-mapped, standard input is read to the end. Either way the
//! whole input is in memory before tokenizing starts.

use crate::error::{SortContext, SortResult};
use memmap2::Mmap;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Input bytes held for the duration of one run
pub enum InputSource {
    /// Memory-mapped input file
    Mapped(Mmap),
    /// Bytes read from a stream, or an empty file
    Buffered(Vec<u8>),
}

impl InputSource {
    /// Open an input file, mapping it when it is a non-empty regular file.
    ///
    /// Pipes, character devices and `/proc` entries report a length of 0 and
    /// are read to the end instead. A missing file surfaces as
    /// `SortError::FileNotFound`.
    pub fn open(path: &Path) -> SortResult<Self> {
        let name = path.display().to_string();
        let file = File::open(path).with_file_context(&name)?;
        let metadata = file.metadata().with_file_context(&name)?;

        if !metadata.is_file() || metadata.len() == 0 {
            log::debug!("{name} is not a mappable file, reading it as a stream");
            return Self::from_reader(file);
        }

        // SAFETY: the map is read-only and lives no longer than this run; the
        // file is not expected to be modified while the tool is reading it.
        let mmap = unsafe { Mmap::map(&file) }.with_file_context(&name)?;
        log::debug!("mapped {} bytes from {}", mmap.len(), name);
        Ok(InputSource::Mapped(mmap))
    }

    /// Read a stream to the end
    pub fn from_reader<R: Read>(mut reader: R) -> SortResult<Self> {
        let mut buffer = Vec::new();
        reader
            .read_to_end(&mut buffer)
            .with_context(|| "reading input".to_string())?;
        log::debug!("buffered {} bytes of input", buffer.len());
        Ok(InputSource::Buffered(buffer))
    }

    /// Read all of standard input
    pub fn stdin() -> SortResult<Self> {
        Self::from_reader(io::stdin().lock())
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            InputSource::Mapped(mmap) => &mmap[..],
            InputSource::Buffered(buffer) => buffer.as_slice(),
        }
    }

    /// Input decoded as text; borrowed unless invalid UTF-8 had to be replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SortError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_open_maps_file() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("input.txt");
        fs::write(&path, "3 1 2\n")?;

        let input = InputSource::open(&path)?;
        assert!(matches!(input, InputSource::Mapped(_)));
        assert_eq!(input.text(), "3 1 2\n");
        Ok(())
    }

    #[test]
    fn test_open_empty_file() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("empty.txt");
        fs::write(&path, "")?;

        let input = InputSource::open(&path)?;
        assert!(input.as_bytes().is_empty());
        Ok(())
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_open_reads_zero_length_special_files() -> SortResult<()> {
        // /proc files report a length of 0 but are not empty
        let input = InputSource::open(Path::new("/proc/self/status"))?;
        assert!(matches!(input, InputSource::Buffered(_)));
        assert!(input.text().contains("Name:"));
        Ok(())
    }

    #[test]
    fn test_open_missing_file() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("missing.txt");
        assert!(matches!(
            InputSource::open(&path),
            Err(SortError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() -> SortResult<()> {
        let input = InputSource::from_reader(&b"ab\xffcd"[..])?;
        assert_eq!(input.text(), "ab\u{FFFD}cd");
        Ok(())
    }
}

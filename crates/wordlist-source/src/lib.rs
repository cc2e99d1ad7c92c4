//! Load line-oriented text files (dictionaries, input cases) without copying.
//!
//! A [`LineSource`] owns the raw bytes of one file, either memory-mapped or
//! read into an owned buffer, and hands out borrowed `&str` lines. The whole
//! file is validated as UTF-8 once at load time.
//!
//! Line splitting follows the usual scanner convention:
//! - lines end at `\n`, and one trailing `\r` is dropped;
//! - a final line without a newline is still yielded;
//! - a trailing newline does not produce an extra empty line;
//! - blank interior lines are yielded as empty strings, nothing is trimmed.
//!
//! # Example
//! ```no_run
//! use wordlist_source::{LineSource, LoadMode};
//!
//! # fn main() -> anyhow::Result<()> {
//! let words = LineSource::load_with_mode("/path/to/dictionary.txt", LoadMode::Mmap)?;
//! for word in words.lines() {
//!     println!("{word}");
//! }
//! # Ok(()) }
//! ```

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use memmap2::Mmap;

/// Strategy for loading a file.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LoadMode {
    /// Memory-map the file (fast, zero-copy).
    #[default]
    Mmap,
    /// Read the file into an owned buffer (portable fallback).
    Owned,
}

impl fmt::Display for LoadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoadMode::Mmap => "mmap",
            LoadMode::Owned => "owned",
        })
    }
}

impl FromStr for LoadMode {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "mmap" => Ok(LoadMode::Mmap),
            "owned" => Ok(LoadMode::Owned),
            other => anyhow::bail!("unknown load mode: {other}"),
        }
    }
}

enum Buffer {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Buffer {
    fn as_slice(&self) -> &[u8] {
        match self {
            Buffer::Mmap(m) => m.as_ref(),
            Buffer::Owned(v) => v.as_slice(),
        }
    }
}

/// One loaded text file, split into lines on demand.
pub struct LineSource {
    path: PathBuf,
    mode: LoadMode,
    buffer: Buffer,
}

impl LineSource {
    /// Load `path`, memory-mapping it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_mode(path, LoadMode::Mmap)
    }

    /// Load `path` choosing between mmap and an owned buffer at runtime.
    ///
    /// Empty files are never mapped; they always load as an empty owned buffer.
    pub fn load_with_mode(path: impl AsRef<Path>, mode: LoadMode) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let buffer = load_file(&path, mode)?;
        std::str::from_utf8(buffer.as_slice())
            .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
        Ok(Self { path, mode, buffer })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> LoadMode {
        self.mode
    }

    pub fn byte_len(&self) -> usize {
        self.buffer.as_slice().len()
    }

    pub fn text(&self) -> &str {
        // validated in `load_with_mode`
        std::str::from_utf8(self.buffer.as_slice()).unwrap_or_default()
    }

    pub fn lines(&self) -> Lines<'_> {
        Lines {
            rest: Some(self.text()).filter(|text| !text.is_empty()),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// Owned copy of every line, in file order.
    pub fn to_vec(&self) -> Vec<String> {
        self.lines().map(str::to_string).collect()
    }
}

impl fmt::Debug for LineSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSource")
            .field("path", &self.path)
            .field("mode", &self.mode)
            .field("byte_len", &self.byte_len())
            .finish()
    }
}

/// Iterator over the lines of a [`LineSource`].
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        let line = match rest.find('\n') {
            Some(end) => {
                let tail = &rest[end + 1..];
                self.rest = Some(tail).filter(|tail| !tail.is_empty());
                &rest[..end]
            }
            None => {
                self.rest = None;
                rest
            }
        };
        Some(strip_cr(line))
    }
}

fn load_file(path: &Path, mode: LoadMode) -> Result<Buffer> {
    let mut file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("stat {}", path.display()))?
        .len();
    match mode {
        LoadMode::Mmap if len > 0 => unsafe { Mmap::map(&file) }
            .map(Buffer::Mmap)
            .with_context(|| format!("mmap {}", path.display())),
        LoadMode::Mmap | LoadMode::Owned => {
            let mut buf = Vec::with_capacity(len as usize);
            file.read_to_end(&mut buf)
                .with_context(|| format!("read {}", path.display()))?;
            Ok(Buffer::Owned(buf))
        }
    }
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

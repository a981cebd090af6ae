//! A file-backed source.

use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use flate2::read::GzDecoder;

use crate::document::Document;
use crate::document::Parse;
use crate::source::Error;

/// A source backed by a file on disk.
///
/// Paths ending in `.gz` are decompressed transparently while parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileSource<P>
where
    P: Parse,
{
    /// The path to the document.
    path: PathBuf,

    /// The document parsing collaborator.
    parser: P,
}

impl<P> FileSource<P>
where
    P: Parse,
{
    /// Creates a file-backed source.
    pub fn new(path: impl Into<PathBuf>, parser: P) -> Self {
        Self {
            path: path.into(),
            parser,
        }
    }

    /// Gets the path to the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the source, parsing the file into a document.
    ///
    /// Fails with [`Error::NotFound`] when the path does not exist at
    /// open time.
    pub fn open(&self) -> Result<Document, Error> {
        if !self.path.exists() {
            return Err(Error::NotFound(self.path.clone()));
        }

        tracing::debug!(path = %self.path.display(), "opening file source");

        let file = File::open(&self.path).map_err(Error::Io)?;

        let document = match self.path.extension().and_then(OsStr::to_str) {
            Some("gz") => self.parser.parse(BufReader::new(GzDecoder::new(file))),
            _ => self.parser.parse(BufReader::new(file)),
        };

        document.map_err(Error::Io)
    }
}

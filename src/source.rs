//! IO strategy variants.
//!
//! Three producers of a parsed [`Document`](crate::document::Document):
//! file-backed, in-memory-string-backed, and remote-connection-backed.
//! Each variant owns its underlying source and is generic over the
//! document parsing collaborator; the document it produces is the handle
//! the caller eventually drops to close.

use std::io;
use std::path::PathBuf;

use crate::fetch;

pub mod file;
pub mod remote;
pub mod text;

pub use file::FileSource;
pub use remote::RemoteSource;
pub use text::TextSource;

/// An error related to opening a source.
#[derive(Debug)]
pub enum Error {
    /// The file-backed source's path did not exist at open time.
    NotFound(PathBuf),

    /// An I/O error, including document parse failures.
    Io(io::Error),

    /// The search/fetch collaborator failed.
    Fetch(fetch::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotFound(path) => write!(f, "source not found: {}", path.display()),
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Fetch(err) => write!(f, "fetch error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

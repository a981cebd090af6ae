//! The entity model: lightweight record kinds over a parsed document.
//!
//! Every entity owns exactly one underlying [`Node`](crate::document::Node)
//! (plus, for [`Sequence`], the cleaned letters attached during stream
//! reading) and nothing else. Entities are thin borrowed views; none may
//! outlive the document they were derived from, which the lifetimes here
//! enforce.

pub mod citation;
pub mod feature;
pub mod interval;
pub mod qualifier;
pub mod sequence;
pub mod taxonomy;
pub mod xref;

pub use citation::Citation;
pub use feature::Feature;
pub use interval::Interval;
pub use qualifier::Qualifier;
pub use sequence::Sequence;
pub use taxonomy::TaxonomyReference;
pub use xref::DatabaseReference;

/// An error raised when a required field is absent or structurally
/// malformed.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// A required field was absent.
    MissingField(&'static str),

    /// An integer field could not be parsed.
    InvalidInteger {
        /// The field that failed to parse.
        field: &'static str,
        /// The offending value.
        value: String,
    },

    /// An accession-version string was missing its trailing numeric
    /// version suffix.
    InvalidVersion(String),

    /// An interval carried neither a start/end pair nor a point.
    MissingCoordinates,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingField(field) => write!(f, "missing required field: {field}"),
            Error::InvalidInteger { field, value } => {
                write!(f, "invalid integer in {field}: {value}")
            }
            Error::InvalidVersion(value) => {
                write!(
                    f,
                    "accession-version is missing a numeric version suffix: {value}"
                )
            }
            Error::MissingCoordinates => {
                write!(f, "interval has neither a start/end pair nor a point")
            }
        }
    }
}

impl std::error::Error for Error {}

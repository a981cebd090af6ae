//! The remote search and fetch collaborator.
//!
//! The caller-supplied database selector and output kind are closed
//! enumerations parsed eagerly via [`FromStr`]; an invalid value is a
//! configuration error raised before any network interaction. Transport
//! failures are propagated unchanged, with no retry logic here; backoff
//! policy, if any, belongs to the collaborator implementation.

use std::io::Read;
use std::str::FromStr;

use nonempty::NonEmpty;

#[cfg(feature = "remote")]
pub mod eutils;

/// An error related to the search/fetch collaborator.
#[derive(Debug)]
pub enum Error {
    /// The database selector was outside the closed enumeration.
    InvalidDatabase(String),

    /// The output kind was outside the closed enumeration.
    InvalidOutputKind(String),

    /// The network collaborator failed.
    Transport(Box<dyn std::error::Error + Send + Sync>),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDatabase(value) => {
                write!(f, "configuration error: {value} is not a valid database")
            }
            Error::InvalidOutputKind(value) => {
                write!(f, "configuration error: {value} is not a valid output kind")
            }
            Error::Transport(err) => write!(f, "transport error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// The databases records may be fetched from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Database {
    /// The protein database.
    Protein,
    /// The expressed sequence tag database.
    NucEst,
    /// The core nucleotide database.
    NucCore,
    /// The genome survey sequence database.
    NucGss,
    /// The population study database.
    PopSet,
}

impl Database {
    /// Gets the wire name of the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Database::Protein => "protein",
            Database::NucEst => "nucest",
            Database::NucCore => "nuccore",
            Database::NucGss => "nucgss",
            Database::PopSet => "popset",
        }
    }
}

impl FromStr for Database {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "protein" => Ok(Self::Protein),
            "nucest" => Ok(Self::NucEst),
            "nuccore" => Ok(Self::NucCore),
            "nucgss" => Ok(Self::NucGss),
            "popset" => Ok(Self::PopSet),
            other => Err(Error::InvalidDatabase(other.to_string())),
        }
    }
}

impl std::fmt::Display for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kinds of output a fetch may request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputKind {
    /// Structured exchange records.
    Structured,
    /// Plain sequence text.
    PlainSequence,
}

impl FromStr for OutputKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "structured" => Ok(Self::Structured),
            "plain-sequence" => Ok(Self::PlainSequence),
            other => Err(Error::InvalidOutputKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for OutputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputKind::Structured => write!(f, "structured"),
            OutputKind::PlainSequence => write!(f, "plain-sequence"),
        }
    }
}

/// One page of search results.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchPage {
    /// The matching identifiers, in result order.
    ids: Vec<String>,

    /// The continuation key for requesting the next page, if any.
    continuation: Option<String>,

    /// The total number of matches.
    count: u64,
}

impl SearchPage {
    /// Creates a search page.
    pub fn new(ids: Vec<String>, continuation: Option<String>, count: u64) -> Self {
        Self {
            ids,
            continuation,
            count,
        }
    }

    /// Gets the matching identifiers in result order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Gets the continuation key, if any.
    pub fn continuation(&self) -> Option<&str> {
        self.continuation.as_deref()
    }

    /// Gets the total number of matches.
    pub fn count(&self) -> u64 {
        self.count
    }
}

/// The search/fetch collaborator contract.
///
/// Both operations block; the caller receives a byte stream or an error.
pub trait Fetch {
    /// Searches a database for a term, starting at the given result
    /// offset, optionally resuming from a continuation key.
    fn search(
        &self,
        term: &str,
        database: Database,
        restart: u64,
        continuation: Option<&str>,
    ) -> Result<SearchPage, Error>;

    /// Fetches the records with the given identifiers as a document
    /// stream of the requested kind.
    fn fetch(
        &self,
        ids: &NonEmpty<String>,
        database: Database,
        kind: OutputKind,
    ) -> Result<Box<dyn Read>, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_from_str() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!("protein".parse::<Database>()?, Database::Protein);
        assert_eq!("nucest".parse::<Database>()?, Database::NucEst);
        assert_eq!("nuccore".parse::<Database>()?, Database::NucCore);
        assert_eq!("nucgss".parse::<Database>()?, Database::NucGss);
        assert_eq!("popset".parse::<Database>()?, Database::PopSet);

        let err = "genome".parse::<Database>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "configuration error: genome is not a valid database"
        );

        Ok(())
    }

    #[test]
    fn test_output_kind_from_str() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!("structured".parse::<OutputKind>()?, OutputKind::Structured);
        assert_eq!(
            "plain-sequence".parse::<OutputKind>()?,
            OutputKind::PlainSequence
        );

        let err = "fasta".parse::<OutputKind>().unwrap_err();
        assert!(matches!(err, Error::InvalidOutputKind(_)));

        Ok(())
    }

    #[test]
    fn test_database_round_trips_through_display() -> Result<(), Box<dyn std::error::Error>> {
        for database in [
            Database::Protein,
            Database::NucEst,
            Database::NucCore,
            Database::NucGss,
            Database::PopSet,
        ] {
            assert_eq!(database.to_string().parse::<Database>()?, database);
        }

        Ok(())
    }
}

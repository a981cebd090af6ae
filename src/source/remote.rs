//! A remote-connection-backed source.

use std::io::BufReader;
use std::io::Read as _;

use nonempty::NonEmpty;

use crate::document::Document;
use crate::document::Parse;
use crate::fetch::Database;
use crate::fetch::Fetch;
use crate::fetch::OutputKind;
use crate::source::Error;

/// The handle produced by opening a remote source: a parsed document for
/// structured output, or the raw text for plain-sequence output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Handle {
    /// A parsed structured-record document.
    Structured(Document),

    /// Plain sequence text.
    PlainSequence(String),
}

impl Handle {
    /// Consumes self and gets the parsed document, if this handle is
    /// structured.
    pub fn document(self) -> Option<Document> {
        match self {
            Handle::Structured(document) => Some(document),
            Handle::PlainSequence(_) => None,
        }
    }

    /// Consumes self and gets the plain sequence text, if this handle is
    /// plain.
    pub fn plain_sequence(self) -> Option<String> {
        match self {
            Handle::Structured(_) => None,
            Handle::PlainSequence(text) => Some(text),
        }
    }
}

/// A source backed by the remote search/fetch collaborator.
///
/// The database selector and output kind are typed values from closed
/// enumerations; parsing caller-supplied strings into them (and thereby
/// rejecting invalid configuration) happens before this source is even
/// constructed, so no network interaction can precede validation.
#[derive(Clone, Debug)]
pub struct RemoteSource<F, P>
where
    F: Fetch,
    P: Parse,
{
    /// The identifiers to fetch.
    ids: NonEmpty<String>,

    /// The database to fetch from.
    database: Database,

    /// The requested output kind.
    kind: OutputKind,

    /// The search/fetch collaborator.
    fetcher: F,

    /// The document parsing collaborator.
    parser: P,
}

impl<F, P> RemoteSource<F, P>
where
    F: Fetch,
    P: Parse,
{
    /// Creates a remote source.
    pub fn new(
        ids: NonEmpty<String>,
        database: Database,
        kind: OutputKind,
        fetcher: F,
        parser: P,
    ) -> Self {
        Self {
            ids,
            database,
            kind,
            fetcher,
            parser,
        }
    }

    /// Gets the identifiers to fetch.
    pub fn ids(&self) -> &NonEmpty<String> {
        &self.ids
    }

    /// Gets the database to fetch from.
    pub fn database(&self) -> Database {
        self.database
    }

    /// Gets the requested output kind.
    pub fn kind(&self) -> OutputKind {
        self.kind
    }

    /// Opens the source: delegates to the search/fetch collaborator and
    /// parses or captures the returned stream according to the requested
    /// output kind.
    pub fn open(&self) -> Result<Handle, Error> {
        tracing::debug!(
            database = %self.database,
            kind = %self.kind,
            ids = self.ids.len(),
            "opening remote source"
        );

        let stream = self
            .fetcher
            .fetch(&self.ids, self.database, self.kind)
            .map_err(Error::Fetch)?;

        match self.kind {
            OutputKind::Structured => {
                let document = self
                    .parser
                    .parse(BufReader::new(stream))
                    .map_err(Error::Io)?;

                Ok(Handle::Structured(document))
            }
            OutputKind::PlainSequence => {
                let mut text = String::new();
                BufReader::new(stream)
                    .read_to_string(&mut text)
                    .map_err(Error::Io)?;

                Ok(Handle::PlainSequence(text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::io::Read;

    use super::*;
    use crate::fetch;
    use crate::fetch::SearchPage;
    use crate::source::file::tests::StubParser;

    /// A collaborator stub that replays a canned payload.
    struct StubFetcher {
        /// The canned payload.
        payload: &'static str,
    }

    impl Fetch for StubFetcher {
        fn search(
            &self,
            _: &str,
            _: Database,
            _: u64,
            _: Option<&str>,
        ) -> Result<SearchPage, fetch::Error> {
            Ok(SearchPage::new(vec!["1".to_string()], None, 1))
        }

        fn fetch(
            &self,
            _: &NonEmpty<String>,
            _: Database,
            _: OutputKind,
        ) -> Result<Box<dyn Read>, fetch::Error> {
            Ok(Box::new(Cursor::new(self.payload.as_bytes())))
        }
    }

    /// A collaborator stub that always fails.
    struct FailingFetcher;

    impl Fetch for FailingFetcher {
        fn search(
            &self,
            _: &str,
            _: Database,
            _: u64,
            _: Option<&str>,
        ) -> Result<SearchPage, fetch::Error> {
            Err(fetch::Error::Transport("connection reset".into()))
        }

        fn fetch(
            &self,
            _: &NonEmpty<String>,
            _: Database,
            _: OutputKind,
        ) -> Result<Box<dyn Read>, fetch::Error> {
            Err(fetch::Error::Transport("connection reset".into()))
        }
    }

    #[test]
    fn test_structured_output_is_parsed() -> Result<(), Box<dyn std::error::Error>> {
        let source = RemoteSource::new(
            NonEmpty::new("U00096".to_string()),
            Database::NucCore,
            OutputKind::Structured,
            StubFetcher { payload: "a record" },
            StubParser,
        );

        let document = source.open()?.document().unwrap();
        assert_eq!(document.nodes()[0].text(), Some("a record"));

        Ok(())
    }

    #[test]
    fn test_plain_sequence_output_is_captured_verbatim()
    -> Result<(), Box<dyn std::error::Error>> {
        let source = RemoteSource::new(
            NonEmpty::new("U00096".to_string()),
            Database::NucCore,
            OutputKind::PlainSequence,
            StubFetcher {
                payload: ">U00096\nACGT\n",
            },
            StubParser,
        );

        let text = source.open()?.plain_sequence().unwrap();
        assert_eq!(text, ">U00096\nACGT\n");

        Ok(())
    }

    #[test]
    fn test_transport_failures_propagate_unchanged() {
        let source = RemoteSource::new(
            NonEmpty::new("U00096".to_string()),
            Database::NucCore,
            OutputKind::Structured,
            FailingFetcher,
            StubParser,
        );

        let err = source.open().unwrap_err();
        assert!(matches!(err, Error::Fetch(fetch::Error::Transport(_))));
    }
}

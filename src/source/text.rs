//! An in-memory-string-backed source.

use crate::document::Document;
use crate::document::Parse;
use crate::source::Error;

/// A source wrapping a literal in-memory document. Opening always
/// succeeds, modulo the parse itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextSource<P>
where
    P: Parse,
{
    /// The literal document text.
    text: String,

    /// The document parsing collaborator.
    parser: P,
}

impl<P> TextSource<P>
where
    P: Parse,
{
    /// Creates a string-backed source.
    pub fn new(text: impl Into<String>, parser: P) -> Self {
        Self {
            text: text.into(),
            parser,
        }
    }

    /// Gets the literal document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Opens the source, parsing the wrapped text into a document.
    pub fn open(&self) -> Result<Document, Error> {
        self.parser.parse(self.text.as_bytes()).map_err(Error::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::file::tests::StubParser;

    #[test]
    fn test_open_parses_the_wrapped_text() -> Result<(), Box<dyn std::error::Error>> {
        let source = TextSource::new("one record", StubParser);
        let document = source.open()?;

        assert_eq!(document.nodes().len(), 1);
        assert_eq!(document.nodes()[0].text(), Some("one record"));

        Ok(())
    }
}

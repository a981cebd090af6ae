//! A record stream reader.

use std::slice;

use crate::alphabet::Alphabet;
use crate::clean;
use crate::clean::Clean;
use crate::document::tags;
use crate::document::Document;
use crate::document::Node;
use crate::record::Sequence;

/// An error related to [`Records`].
#[derive(Debug)]
pub enum Error {
    /// The cleaning collaborator rejected a record's letters.
    Clean(clean::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Clean(err) => write!(f, "clean error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A finite, one-pass, ordered stream of the sequence records in a
/// parsed document.
///
/// One [`Sequence`] is yielded per top-level record-tagged node, in
/// document order, with its raw letters extracted and handed to the
/// cleaning collaborator at yield time. Letters are never evaluated for
/// records the consumer does not reach, so partial consumption never
/// materializes the remainder of the stream.
///
/// The stream is not restartable; traversing a document a second time
/// requires re-opening the underlying source.
///
/// # Examples
///
/// ```
/// use seqrecord::clean::Cleaner;
/// use seqrecord::document::Document;
/// use seqrecord::document::Node;
///
/// let document = Document::new(vec![
///     Node::new("INSDSeq")
///         .with_child(Node::new("INSDSeq_primary-accession").with_text("U00096"))
///         .with_child(Node::new("INSDSeq_sequence").with_text("acgt")),
///     Node::new("INSDSeq")
///         .with_child(Node::new("INSDSeq_primary-accession").with_text("U00097"))
///         .with_child(Node::new("INSDSeq_sequence").with_text("ggcc")),
/// ]);
///
/// let records = document
///     .records(Cleaner)
///     .collect::<Result<Vec<_>, _>>()?;
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].primary_accession(), Some("U00096"));
/// assert_eq!(records[1].letters(), "GGCC");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Records<'d, C>
where
    C: Clean,
{
    /// The remaining top-level nodes.
    nodes: slice::Iter<'d, Node>,

    /// The cleaning collaborator.
    cleaner: C,
}

impl<'d, C> Records<'d, C>
where
    C: Clean,
{
    /// Creates a record stream over the given document.
    pub(crate) fn new(document: &'d Document, cleaner: C) -> Self {
        Self {
            nodes: document.nodes().iter(),
            cleaner,
        }
    }
}

impl<'d, C> Iterator for Records<'d, C>
where
    C: Clean,
{
    type Item = Result<Sequence<'d>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.nodes.next()?;

            if node.tag() != tags::RECORD {
                continue;
            }

            // Letters and alphabet are evaluated here, at yield time, and
            // not before.
            let raw = node.text_at(&[tags::SEQUENCE]).unwrap_or_default();
            let alphabet = node
                .text_at(&[tags::MOLTYPE])
                .map(Alphabet::from_moltype)
                .unwrap_or(Alphabet::Dna);

            return match self.cleaner.clean(raw, alphabet) {
                Ok(letters) => {
                    tracing::debug!(
                        accession = node.text_at(&[tags::PRIMARY_ACCESSION]),
                        letters = letters.len(),
                        "yielding record"
                    );

                    Some(Ok(Sequence::new(node, letters)))
                }
                Err(err) => Some(Err(Error::Clean(err))),
            };
        }
    }
}

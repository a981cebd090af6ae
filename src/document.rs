//! A parsed exchange document.
//!
//! A document is an ordered tree of labeled [`Node`]s. This crate does not
//! itself parse the raw document format; producing the tree is the job of
//! a [`Parse`] collaborator, and tests and callers may equally well build
//! documents programmatically with the [`Node`] builders.

use std::io::BufRead;
use std::io::{self};

use crate::clean::Clean;
use crate::reader::Records;

pub mod node;
pub mod tags;

pub use node::Node;

/// A parsed document: the ordered sequence of top-level nodes.
///
/// Dropping the document is what closes the handle produced by an IO
/// strategy variant; every entity derived from the document borrows from
/// it and therefore cannot outlive it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Document {
    /// The ordered top-level nodes.
    nodes: Vec<Node>,
}

impl Document {
    /// Creates a document from an ordered sequence of top-level nodes.
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Gets the top-level nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns a one-pass stream of the sequence records in this document.
    ///
    /// See [`Records`] for the semantics of the stream.
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
    ///         .with_child(Node::new("INSDSeq_primary-accession").with_text("NM_001"))
    ///         .with_child(Node::new("INSDSeq_moltype").with_text("DNA"))
    ///         .with_child(Node::new("INSDSeq_sequence").with_text("acgt acgt")),
    /// ]);
    ///
    /// let records = document
    ///     .records(Cleaner)
    ///     .collect::<Result<Vec<_>, _>>()?;
    ///
    /// assert_eq!(records.len(), 1);
    /// assert_eq!(records[0].letters(), "ACGTACGT");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn records<C>(&self, cleaner: C) -> Records<'_, C>
    where
        C: Clean,
    {
        Records::new(self, cleaner)
    }
}

impl From<Vec<Node>> for Document {
    fn from(nodes: Vec<Node>) -> Self {
        Self::new(nodes)
    }
}

impl FromIterator<Node> for Document {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// The document parsing collaborator.
///
/// Implementations turn a raw byte stream into a [`Document`]. The crate
/// treats parsing as external: an IO strategy variant is generic over any
/// implementation of this trait.
pub trait Parse {
    /// Parses a document from the given reader.
    fn parse<R>(&self, reader: R) -> io::Result<Document>
    where
        R: BufRead;
}

//! A citation attached to a record.

use std::collections::HashMap;

use crate::document::tags;
use crate::document::Node;

/// A citation: one literature reference under a record.
///
/// The year, volume, and page accessors on this kind all surface the raw
/// journal text rather than parsed components; see the notes on each.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Citation<'d> {
    /// The underlying reference node.
    node: &'d Node,
}

impl<'d> Citation<'d> {
    /// Creates a citation view over the given node.
    pub fn new(node: &'d Node) -> Self {
        Self { node }
    }

    /// Gets the underlying node.
    pub fn node(&self) -> &'d Node {
        self.node
    }

    /// Gets the title.
    pub fn title(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::REFERENCE_TITLE])
    }

    /// Gets the journal text.
    pub fn journal(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::REFERENCE_JOURNAL])
    }

    /// Gets the year.
    ///
    /// Currently sourced from the unparsed journal text; callers must not
    /// assume a value independent of [`Citation::journal`].
    pub fn year(&self) -> Option<&'d str> {
        self.journal()
    }

    /// Gets the volume.
    ///
    /// Currently sourced from the unparsed journal text; callers must not
    /// assume a value independent of [`Citation::journal`].
    pub fn volume(&self) -> Option<&'d str> {
        self.journal()
    }

    /// Gets the starting page.
    ///
    /// Currently sourced from the unparsed journal text; callers must not
    /// assume a value independent of [`Citation::journal`].
    pub fn page_start(&self) -> Option<&'d str> {
        self.journal()
    }

    /// Gets the ending page.
    ///
    /// Currently sourced from the unparsed journal text; callers must not
    /// assume a value independent of [`Citation::journal`].
    pub fn page_end(&self) -> Option<&'d str> {
        self.journal()
    }

    /// Gets the ordered author list.
    pub fn authors(&self) -> Vec<&'d str> {
        self.node.texts_at(&[tags::REFERENCE_AUTHORS, tags::AUTHOR])
    }

    /// Gets the PubMed identifier.
    pub fn pubmed(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::REFERENCE_PUBMED])
    }

    /// Gets the cross-reference mapping: database name to object
    /// identifier, one entry per cross-reference child.
    pub fn cross_references(&self) -> HashMap<&'d str, &'d str> {
        self.node
            .children_at(&[tags::REFERENCE_XREF, tags::XREF])
            .into_iter()
            .filter_map(|node| {
                let database = node.text_at(&[tags::XREF_DBNAME])?;
                let id = node.text_at(&[tags::XREF_ID])?;
                Some((database, id))
            })
            .collect()
    }

    /// Gets the remark texts in document order.
    pub fn remarks(&self) -> Vec<&'d str> {
        self.node.texts_at(&[tags::REFERENCE_REMARK])
    }
}

//! A taxonomy view over a record.

use crate::document::tags;
use crate::document::Node;
use crate::record::DatabaseReference;
use crate::record::Feature;

/// A derived view over a record's taxonomy fields: the scientific name,
/// the lineage, and the database references gathered from the record's
/// biological source feature.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TaxonomyReference<'d> {
    /// The underlying record node.
    node: &'d Node,
}

impl<'d> TaxonomyReference<'d> {
    /// Creates a taxonomy view over the given record node.
    pub fn new(node: &'d Node) -> Self {
        Self { node }
    }

    /// Gets the underlying record node.
    pub fn node(&self) -> &'d Node {
        self.node
    }

    /// Gets the scientific name of the source organism.
    pub fn scientific_name(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::ORGANISM])
    }

    /// Gets the taxonomic lineage string.
    pub fn lineage(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::TAXONOMY])
    }

    /// Gets the database references of the record's source feature, in
    /// document order. A record without a source feature yields an empty
    /// list.
    pub fn cross_references(&self) -> Vec<DatabaseReference<'d>> {
        self.node
            .children_at(&[tags::FEATURE_TABLE, tags::FEATURE])
            .into_iter()
            .map(Feature::new)
            .find(|feature| feature.is_source())
            .map(|feature| feature.cross_references())
            .unwrap_or_default()
    }
}

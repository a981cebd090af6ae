//! A name/value annotation attached to a feature.

use crate::document::tags;
use crate::document::Node;

/// A qualifier: a name/value pair attached to a feature, such as
/// `product` = `hypothetical protein`. Multiple qualifiers on one feature
/// may share a name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Qualifier<'d> {
    /// The underlying qualifier node.
    node: &'d Node,
}

impl<'d> Qualifier<'d> {
    /// Creates a qualifier view over the given node.
    pub fn new(node: &'d Node) -> Self {
        Self { node }
    }

    /// Gets the underlying node.
    pub fn node(&self) -> &'d Node {
        self.node
    }

    /// Gets the qualifier name.
    pub fn name(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::QUALIFIER_NAME])
    }

    /// Gets the qualifier value.
    pub fn value(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::QUALIFIER_VALUE])
    }

    /// Indicates whether this qualifier carries a database
    /// cross-reference.
    pub fn is_cross_reference(&self) -> bool {
        self.name() == Some(tags::DB_XREF)
    }
}

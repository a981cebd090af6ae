//! An annotated region of a record.

use crate::document::tags;
use crate::document::Node;
use crate::record::DatabaseReference;
use crate::record::Interval;
use crate::record::Qualifier;
use crate::record::Sequence;
use crate::resolve;
use crate::resolve::Resolved;

/// A feature: an annotated region of a record (a coding region, a
/// regulatory region, and so on) described by one or more intervals.
///
/// A feature is always reached through its parent record's feature table
/// and never outlives the parent document.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Feature<'d> {
    /// The underlying feature node.
    node: &'d Node,
}

impl<'d> Feature<'d> {
    /// Creates a feature view over the given node.
    pub fn new(node: &'d Node) -> Self {
        Self { node }
    }

    /// Gets the underlying node.
    pub fn node(&self) -> &'d Node {
        self.node
    }

    /// Gets the feature key (its functional category label, e.g. `CDS`).
    pub fn key(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::FEATURE_KEY])
    }

    /// Gets the location operator, if present (e.g. `join`).
    pub fn operator(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::FEATURE_OPERATOR])
    }

    /// Gets the textual location descriptor, if present.
    pub fn location(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::FEATURE_LOCATION])
    }

    /// Gets the ordered intervals of this feature.
    pub fn intervals(&self) -> Vec<Interval<'d>> {
        self.node
            .children_at(&[tags::FEATURE_INTERVALS, tags::INTERVAL])
            .into_iter()
            .map(Interval::new)
            .collect()
    }

    /// Gets the ordered qualifiers of this feature.
    pub fn qualifiers(&self) -> Vec<Qualifier<'d>> {
        self.node
            .children_at(&[tags::FEATURE_QUALS, tags::QUALIFIER])
            .into_iter()
            .map(Qualifier::new)
            .collect()
    }

    /// Gets the value of the first qualifier with the given name.
    pub fn qualifier_value(&self, name: &str) -> Option<&'d str> {
        self.qualifiers()
            .into_iter()
            .find(|qualifier| qualifier.name() == Some(name))
            .and_then(|qualifier| qualifier.value())
    }

    /// Gets the values of every qualifier with the given name, in document
    /// order.
    pub fn qualifier_values(&self, name: &str) -> Vec<&'d str> {
        self.qualifiers()
            .into_iter()
            .filter(|qualifier| qualifier.name() == Some(name))
            .filter_map(|qualifier| qualifier.value())
            .collect()
    }

    /// Gets the database cross-references among this feature's qualifiers.
    pub fn cross_references(&self) -> Vec<DatabaseReference<'d>> {
        self.qualifiers()
            .into_iter()
            .filter_map(|qualifier| DatabaseReference::from_qualifier(&qualifier))
            .collect()
    }

    /// Indicates whether this is the biological source feature.
    pub fn is_source(&self) -> bool {
        self.key() == Some(tags::SOURCE_KEY)
    }

    /// Resolves this feature's intervals, annotating each with its
    /// strand-aware reading-frame phase. See [`resolve::resolve`].
    pub fn resolve(&self) -> Result<Vec<Resolved<'d>>, resolve::Error> {
        resolve::resolve(self)
    }

    /// Renders this feature's effective letters against the parent
    /// record. See [`resolve::feature_sequence`].
    pub fn sequence(&self, parent: &Sequence<'d>) -> Result<String, resolve::Error> {
        resolve::feature_sequence(self, parent)
    }
}

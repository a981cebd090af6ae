//! A database cross-reference derived from a qualifier.

use crate::document::Node;
use crate::record::Qualifier;

/// A database cross-reference: a view over a `db_xref` qualifier whose
/// value has the form `<database>:<id>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DatabaseReference<'d> {
    /// The underlying qualifier node.
    node: &'d Node,
}

impl<'d> DatabaseReference<'d> {
    /// Derives a database reference from a qualifier. Returns [`None`]
    /// when the qualifier does not carry a cross-reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqrecord::document::Node;
    /// use seqrecord::record::DatabaseReference;
    /// use seqrecord::record::Qualifier;
    ///
    /// let node = Node::new("INSDQualifier")
    ///     .with_child(Node::new("INSDQualifier_name").with_text("db_xref"))
    ///     .with_child(Node::new("INSDQualifier_value").with_text("UniProtKB:P12345"));
    ///
    /// let reference = DatabaseReference::from_qualifier(&Qualifier::new(&node)).unwrap();
    /// assert_eq!(reference.database(), Some("UniProtKB"));
    /// assert_eq!(reference.id(), Some("P12345"));
    /// ```
    pub fn from_qualifier(qualifier: &Qualifier<'d>) -> Option<Self> {
        match qualifier.is_cross_reference() {
            true => Some(Self {
                node: qualifier.node(),
            }),
            false => None,
        }
    }

    /// Gets the underlying node.
    pub fn node(&self) -> &'d Node {
        self.node
    }

    /// Gets the database name: the portion of the value before the first
    /// colon, or the whole value when no colon is present.
    pub fn database(&self) -> Option<&'d str> {
        self.value()
            .map(|value| value.split_once(':').map(|(db, _)| db).unwrap_or(value))
    }

    /// Gets the object identifier: the portion of the value after the
    /// first colon. A malformed value without a colon yields [`None`].
    pub fn id(&self) -> Option<&'d str> {
        self.value().and_then(|value| {
            value.split_once(':').map(|(_, id)| id)
        })
    }

    /// Gets the raw qualifier value.
    fn value(&self) -> Option<&'d str> {
        Qualifier::new(self.node).value()
    }
}

//! A top-level annotated sequence record.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::tags;
use crate::document::Node;
use crate::record::Citation;
use crate::record::Error;
use crate::record::Feature;
use crate::record::TaxonomyReference;

/// Matches the trailing `.N` version suffix of an accession-version
/// string.
static VERSION_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.(\d+)$").unwrap());

/// A sequence record: one top-level entry holding an accession, a
/// description, letters, features, and citations.
///
/// A record is created once during stream reading, with its letters
/// already cleaned and case-normalized, and is immutable thereafter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sequence<'d> {
    /// The underlying record node.
    node: &'d Node,

    /// The cleaned letters attached during stream reading.
    letters: String,
}

impl<'d> Sequence<'d> {
    /// Creates a sequence record over the given node with the given
    /// cleaned letters.
    pub fn new(node: &'d Node, letters: String) -> Self {
        Self { node, letters }
    }

    /// Gets the underlying node.
    pub fn node(&self) -> &'d Node {
        self.node
    }

    /// Gets the cleaned letters.
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Gets the locus name.
    pub fn locus(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::LOCUS])
    }

    /// Gets the primary accession.
    pub fn primary_accession(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::PRIMARY_ACCESSION])
    }

    /// Gets the versioned accession string (`<accession>.<version>`).
    pub fn accession_version(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::ACCESSION_VERSION])
    }

    /// Parses the integer version from the accession-version string.
    ///
    /// Fails with a format error when the accession-version field is
    /// absent or lacks a trailing dotted numeric suffix.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqrecord::document::Node;
    /// use seqrecord::record::Sequence;
    ///
    /// let node = Node::new("INSDSeq")
    ///     .with_child(Node::new("INSDSeq_accession-version").with_text("NM_001.3"));
    ///
    /// let record = Sequence::new(&node, String::new());
    /// assert_eq!(record.version()?, 3);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn version(&self) -> Result<u64, Error> {
        let text = self
            .accession_version()
            .ok_or(Error::MissingField(tags::ACCESSION_VERSION))?;

        let captures = VERSION_SUFFIX
            .captures(text)
            .ok_or_else(|| Error::InvalidVersion(text.to_string()))?;

        captures
            .get(1)
            .unwrap()
            .as_str()
            .parse::<u64>()
            .map_err(|_| Error::InvalidVersion(text.to_string()))
    }

    /// Gets the secondary accessions in document order.
    pub fn secondary_accessions(&self) -> Vec<&'d str> {
        self.node
            .texts_at(&[tags::SECONDARY_ACCESSIONS, tags::SECONDARY_ACCESSION])
    }

    /// Gets the other sequence identifiers in document order.
    pub fn other_ids(&self) -> Vec<&'d str> {
        self.node.texts_at(&[tags::OTHER_SEQIDS, tags::SEQID])
    }

    /// Gets the creation date text.
    pub fn created(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::CREATE_DATE])
    }

    /// Gets the last-update date text.
    pub fn updated(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::UPDATE_DATE])
    }

    /// Gets the definition (description) text.
    pub fn definition(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::DEFINITION])
    }

    /// Gets the molecule type code.
    pub fn moltype(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::MOLTYPE])
    }

    /// Gets the scientific name of the source organism.
    pub fn organism(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::ORGANISM])
    }

    /// Gets the taxonomic lineage string.
    pub fn lineage(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::TAXONOMY])
    }

    /// Gets the keywords in document order.
    pub fn keywords(&self) -> Vec<&'d str> {
        self.node.texts_at(&[tags::KEYWORDS, tags::KEYWORD])
    }

    /// Gets the features of this record in document order.
    pub fn features(&self) -> Vec<Feature<'d>> {
        self.node
            .children_at(&[tags::FEATURE_TABLE, tags::FEATURE])
            .into_iter()
            .map(Feature::new)
            .collect()
    }

    /// Gets the citations of this record in document order.
    pub fn citations(&self) -> Vec<Citation<'d>> {
        self.node
            .children_at(&[tags::REFERENCES, tags::REFERENCE])
            .into_iter()
            .map(Citation::new)
            .collect()
    }

    /// Gets the biological source feature, if present.
    pub fn source_feature(&self) -> Option<Feature<'d>> {
        self.features().into_iter().find(Feature::is_source)
    }

    /// Gets the taxonomy view over this record.
    pub fn taxonomy(&self) -> TaxonomyReference<'d> {
        TaxonomyReference::new(self.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Node {
        Node::new(tags::RECORD)
            .with_child(Node::new(tags::LOCUS).with_text("ECOTHRA"))
            .with_child(Node::new(tags::PRIMARY_ACCESSION).with_text("NM_001"))
            .with_child(Node::new(tags::ACCESSION_VERSION).with_text("NM_001.3"))
            .with_child(
                Node::new(tags::SECONDARY_ACCESSIONS)
                    .with_child(Node::new(tags::SECONDARY_ACCESSION).with_text("X00001"))
                    .with_child(Node::new(tags::SECONDARY_ACCESSION).with_text("X00002")),
            )
            .with_child(
                Node::new(tags::OTHER_SEQIDS)
                    .with_child(Node::new(tags::SEQID).with_text("gi|12345")),
            )
            .with_child(Node::new(tags::CREATE_DATE).with_text("01-JAN-1995"))
            .with_child(Node::new(tags::UPDATE_DATE).with_text("30-JUN-2006"))
            .with_child(Node::new(tags::DEFINITION).with_text("aspartokinase I"))
            .with_child(Node::new(tags::MOLTYPE).with_text("DNA"))
            .with_child(Node::new(tags::ORGANISM).with_text("Escherichia coli"))
            .with_child(Node::new(tags::TAXONOMY).with_text("Bacteria; Pseudomonadota"))
            .with_child(
                Node::new(tags::KEYWORDS)
                    .with_child(Node::new(tags::KEYWORD).with_text("RefSeq")),
            )
            .with_child(
                Node::new(tags::FEATURE_TABLE)
                    .with_child(
                        Node::new(tags::FEATURE)
                            .with_child(Node::new(tags::FEATURE_KEY).with_text("source")),
                    )
                    .with_child(
                        Node::new(tags::FEATURE)
                            .with_child(Node::new(tags::FEATURE_KEY).with_text("CDS")),
                    ),
            )
            .with_child(
                Node::new(tags::REFERENCES)
                    .with_child(Node::new(tags::REFERENCE)),
            )
    }

    #[test]
    fn test_metadata_accessors() {
        let node = record();
        let sequence = Sequence::new(&node, "ACGT".to_string());

        assert_eq!(sequence.locus(), Some("ECOTHRA"));
        assert_eq!(sequence.primary_accession(), Some("NM_001"));
        assert_eq!(sequence.secondary_accessions(), vec!["X00001", "X00002"]);
        assert_eq!(sequence.other_ids(), vec!["gi|12345"]);
        assert_eq!(sequence.created(), Some("01-JAN-1995"));
        assert_eq!(sequence.updated(), Some("30-JUN-2006"));
        assert_eq!(sequence.definition(), Some("aspartokinase I"));
        assert_eq!(sequence.moltype(), Some("DNA"));
        assert_eq!(sequence.organism(), Some("Escherichia coli"));
        assert_eq!(sequence.lineage(), Some("Bacteria; Pseudomonadota"));
        assert_eq!(sequence.keywords(), vec!["RefSeq"]);
        assert_eq!(sequence.letters(), "ACGT");
    }

    #[test]
    fn test_version_parses_the_trailing_suffix() -> Result<(), Box<dyn std::error::Error>> {
        let node = record();
        let sequence = Sequence::new(&node, String::new());

        assert_eq!(sequence.version()?, 3);

        Ok(())
    }

    #[test]
    fn test_version_fails_without_a_numeric_suffix() {
        let node = Node::new(tags::RECORD)
            .with_child(Node::new(tags::ACCESSION_VERSION).with_text("NM_001"));
        let sequence = Sequence::new(&node, String::new());

        let err = sequence.version().unwrap_err();
        assert!(matches!(err, Error::InvalidVersion(_)));
        assert_eq!(
            err.to_string(),
            "accession-version is missing a numeric version suffix: NM_001"
        );
    }

    #[test]
    fn test_version_fails_when_the_field_is_absent() {
        let node = Node::new(tags::RECORD);
        let sequence = Sequence::new(&node, String::new());

        let err = sequence.version().unwrap_err();
        assert!(matches!(err, Error::MissingField(tags::ACCESSION_VERSION)));
    }

    #[test]
    fn test_features_and_source_feature() {
        let node = record();
        let sequence = Sequence::new(&node, String::new());

        let features = sequence.features();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].key(), Some("source"));
        assert_eq!(features[1].key(), Some("CDS"));

        assert!(sequence.source_feature().unwrap().is_source());
        assert_eq!(sequence.citations().len(), 1);
    }
}

//! Cross-cutting query capabilities.
//!
//! Structurally different record kinds expose a common query surface
//! through a set of narrow traits, each with defaults that answer
//! "absent" (a [`None`] or an empty list) rather than failing. A kind
//! overrides only the capabilities it supports, so generic code can walk
//! heterogeneous entities uniformly: querying a capability an entity does
//! not carry is a silent empty answer, not an error.
//!
//! This is capability composition, not inheritance; there is no deep
//! hierarchy to descend.
//!
//! # Examples
//!
//! Collecting database references works identically for any entity that
//! carries the [`CrossReferences`] capability:
//!
//! ```
//! use seqrecord::capability::CrossReferences;
//! use seqrecord::document::Node;
//! use seqrecord::record::Feature;
//!
//! fn databases(entity: &impl CrossReferences) -> Vec<String> {
//!     entity
//!         .database_references()
//!         .iter()
//!         .filter_map(|r| r.database().map(String::from))
//!         .collect()
//! }
//!
//! let node = Node::new("INSDFeature").with_child(
//!     Node::new("INSDFeature_quals").with_child(
//!         Node::new("INSDQualifier")
//!             .with_child(Node::new("INSDQualifier_name").with_text("db_xref"))
//!             .with_child(Node::new("INSDQualifier_value").with_text("GeneID:945803")),
//!     ),
//! );
//!
//! assert_eq!(databases(&Feature::new(&node)), vec!["GeneID".to_string()]);
//! ```

use crate::alphabet::Alphabet;
use crate::record;
use crate::record::Citation;
use crate::record::DatabaseReference;
use crate::record::Feature;
use crate::record::Interval;
use crate::record::Qualifier;
use crate::record::Sequence;
use crate::record::TaxonomyReference;
use crate::resolve::Resolved;

/// The identity of an entity: accessions, version, and dates.
pub trait Identity {
    /// Gets the primary accession.
    fn accession(&self) -> Option<&str> {
        None
    }

    /// Gets the secondary accessions.
    fn accessions(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Gets the integer version. An entity without a version answers
    /// `Ok(None)`; an entity that carries a malformed accession-version
    /// fails loudly.
    fn version(&self) -> Result<Option<u64>, record::Error> {
        Ok(None)
    }

    /// Gets the creation date text.
    fn created(&self) -> Option<&str> {
        None
    }

    /// Gets the last-update date text.
    fn updated(&self) -> Option<&str> {
        None
    }
}

/// The free-text description of an entity.
pub trait Describe {
    /// Gets the description text.
    fn description(&self) -> Option<&str> {
        None
    }
}

/// The sequence data carried by an entity.
pub trait SequenceData {
    /// Gets the cleaned letters.
    fn letters(&self) -> Option<&str> {
        None
    }

    /// Gets the alphabet the letters are drawn from.
    fn alphabet(&self) -> Option<Alphabet> {
        None
    }

    /// Indicates whether the letters are amino acids.
    fn is_protein(&self) -> bool {
        false
    }

    /// Gets the molecule type code.
    fn moltype(&self) -> Option<&str> {
        None
    }

    /// Gets the keywords.
    fn keywords(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// The features carried by an entity.
pub trait FeatureList {
    /// Gets the features in document order.
    fn features(&self) -> Vec<Feature<'_>> {
        Vec::new()
    }
}

/// The intervals carried by an entity.
pub trait IntervalList {
    /// Gets the intervals in document order.
    fn intervals(&self) -> Vec<Interval<'_>> {
        Vec::new()
    }
}

/// The citations carried by an entity.
pub trait CitationList {
    /// Gets the citations in document order.
    fn citations(&self) -> Vec<Citation<'_>> {
        Vec::new()
    }
}

/// The database cross-references reachable from an entity.
pub trait CrossReferences {
    /// Gets the database references in document order.
    fn database_references(&self) -> Vec<DatabaseReference<'_>> {
        Vec::new()
    }
}

/// Gene-level annotation carried by an entity.
pub trait GeneInfo {
    /// Gets the gene symbol.
    fn gene(&self) -> Option<&str> {
        None
    }

    /// Gets the locus tag.
    fn locus_tag(&self) -> Option<&str> {
        None
    }

    /// Gets the gene synonyms.
    fn gene_synonyms(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// Protein-level annotation carried by an entity.
pub trait ProteinInfo {
    /// Gets the product name.
    fn product(&self) -> Option<&str> {
        None
    }

    /// Gets the protein identifier.
    fn protein_id(&self) -> Option<&str> {
        None
    }
}

/// The evidence basis of an annotation.
pub trait Evidence {
    /// Gets the evidence text.
    fn evidence(&self) -> Option<&str> {
        None
    }
}

/// Free-form remarks attached to an entity.
pub trait Notes {
    /// Gets the remarks in document order.
    fn notes(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// Translation-related annotation carried by an entity.
pub trait TranslationInfo {
    /// Gets the signed reading-frame phase.
    fn frame(&self) -> Option<i8> {
        None
    }

    /// Gets the codon start offset.
    fn codon_start(&self) -> Option<u8> {
        None
    }

    /// Gets the conceptual translation text.
    fn translation(&self) -> Option<&str> {
        None
    }
}

/// A generic name/value surface over an entity.
pub trait NamedValue {
    /// Gets the name.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Gets the value.
    fn value(&self) -> Option<&str> {
        None
    }
}

/// The taxonomy of an entity's source organism.
pub trait Taxonomy {
    /// Gets the scientific name.
    fn scientific_name(&self) -> Option<&str> {
        None
    }

    /// Gets the lineage string.
    fn lineage(&self) -> Option<&str> {
        None
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Sequence
////////////////////////////////////////////////////////////////////////////////////////

impl Identity for Sequence<'_> {
    fn accession(&self) -> Option<&str> {
        self.primary_accession()
    }

    fn accessions(&self) -> Vec<&str> {
        self.secondary_accessions()
    }

    fn version(&self) -> Result<Option<u64>, record::Error> {
        Sequence::version(self).map(Some)
    }

    fn created(&self) -> Option<&str> {
        Sequence::created(self)
    }

    fn updated(&self) -> Option<&str> {
        Sequence::updated(self)
    }
}

impl Describe for Sequence<'_> {
    fn description(&self) -> Option<&str> {
        self.definition()
    }
}

impl SequenceData for Sequence<'_> {
    fn letters(&self) -> Option<&str> {
        Some(Sequence::letters(self))
    }

    fn alphabet(&self) -> Option<Alphabet> {
        self.moltype().map(Alphabet::from_moltype)
    }

    fn is_protein(&self) -> bool {
        SequenceData::alphabet(self)
            .map(|alphabet| alphabet.is_protein())
            .unwrap_or(false)
    }

    fn moltype(&self) -> Option<&str> {
        Sequence::moltype(self)
    }

    fn keywords(&self) -> Vec<&str> {
        Sequence::keywords(self)
    }
}

impl FeatureList for Sequence<'_> {
    fn features(&self) -> Vec<Feature<'_>> {
        Sequence::features(self)
    }
}

impl CitationList for Sequence<'_> {
    fn citations(&self) -> Vec<Citation<'_>> {
        Sequence::citations(self)
    }
}

impl CrossReferences for Sequence<'_> {
    fn database_references(&self) -> Vec<DatabaseReference<'_>> {
        self.source_feature()
            .map(|feature| feature.cross_references())
            .unwrap_or_default()
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Feature
////////////////////////////////////////////////////////////////////////////////////////

impl Identity for Feature<'_> {
    fn accessions(&self) -> Vec<&str> {
        let mut accessions = Vec::new();

        for interval in self.intervals() {
            if let Some(accession) = interval.accession() {
                if !accessions.contains(&accession) {
                    accessions.push(accession);
                }
            }
        }

        accessions
    }
}

impl IntervalList for Feature<'_> {
    fn intervals(&self) -> Vec<Interval<'_>> {
        Feature::intervals(self)
    }
}

impl CrossReferences for Feature<'_> {
    fn database_references(&self) -> Vec<DatabaseReference<'_>> {
        self.cross_references()
    }
}

impl GeneInfo for Feature<'_> {
    fn gene(&self) -> Option<&str> {
        self.qualifier_value("gene")
    }

    fn locus_tag(&self) -> Option<&str> {
        self.qualifier_value("locus_tag")
    }

    fn gene_synonyms(&self) -> Vec<&str> {
        self.qualifier_values("gene_synonym")
    }
}

impl ProteinInfo for Feature<'_> {
    fn product(&self) -> Option<&str> {
        self.qualifier_value("product")
    }

    fn protein_id(&self) -> Option<&str> {
        self.qualifier_value("protein_id")
    }
}

impl Evidence for Feature<'_> {
    fn evidence(&self) -> Option<&str> {
        self.qualifier_value("evidence")
    }
}

impl Notes for Feature<'_> {
    fn notes(&self) -> Vec<&str> {
        self.qualifier_values("note")
    }
}

impl TranslationInfo for Feature<'_> {
    fn codon_start(&self) -> Option<u8> {
        self.qualifier_value("codon_start")
            .and_then(|value| value.parse().ok())
    }

    fn translation(&self) -> Option<&str> {
        self.qualifier_value("translation")
    }
}

impl NamedValue for Feature<'_> {
    fn name(&self) -> Option<&str> {
        self.key()
    }

    fn value(&self) -> Option<&str> {
        self.location()
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Interval
////////////////////////////////////////////////////////////////////////////////////////

impl Identity for Interval<'_> {
    fn accession(&self) -> Option<&str> {
        Interval::accession(self)
    }
}

impl TranslationInfo for Resolved<'_> {
    fn frame(&self) -> Option<i8> {
        Some(Resolved::frame(self))
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Qualifier
////////////////////////////////////////////////////////////////////////////////////////

impl Notes for Qualifier<'_> {
    fn notes(&self) -> Vec<&str> {
        self.value().into_iter().collect()
    }
}

impl NamedValue for Qualifier<'_> {
    fn name(&self) -> Option<&str> {
        Qualifier::name(self)
    }

    fn value(&self) -> Option<&str> {
        Qualifier::value(self)
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// TaxonomyReference
////////////////////////////////////////////////////////////////////////////////////////

impl CrossReferences for TaxonomyReference<'_> {
    fn database_references(&self) -> Vec<DatabaseReference<'_>> {
        self.cross_references()
    }
}

impl Taxonomy for TaxonomyReference<'_> {
    fn scientific_name(&self) -> Option<&str> {
        TaxonomyReference::scientific_name(self)
    }

    fn lineage(&self) -> Option<&str> {
        TaxonomyReference::lineage(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::tags;
    use crate::document::Node;

    fn qualifier(name: &str, value: &str) -> Node {
        Node::new(tags::QUALIFIER)
            .with_child(Node::new(tags::QUALIFIER_NAME).with_text(name))
            .with_child(Node::new(tags::QUALIFIER_VALUE).with_text(value))
    }

    #[test]
    fn test_defaults_answer_absent_rather_than_failing()
    -> Result<(), Box<dyn std::error::Error>> {
        // A qualifier carries no identity, sequence data, features, or
        // intervals; each query is a silent empty answer.
        let node = qualifier("note", "remark");
        let entity = Qualifier::new(&node);

        assert_eq!(Identity::accession(&entity), None);
        assert_eq!(Identity::version(&entity)?, None);
        assert!(Describe::description(&entity).is_none());
        assert!(SequenceData::letters(&entity).is_none());
        assert!(!SequenceData::is_protein(&entity));
        assert!(FeatureList::features(&entity).is_empty());
        assert!(IntervalList::intervals(&entity).is_empty());
        assert!(CitationList::citations(&entity).is_empty());
        assert!(CrossReferences::database_references(&entity).is_empty());
        assert!(TranslationInfo::frame(&entity).is_none());
        assert!(Taxonomy::lineage(&entity).is_none());

        Ok(())
    }

    impl Describe for Qualifier<'_> {}
    impl SequenceData for Qualifier<'_> {}
    impl FeatureList for Qualifier<'_> {}
    impl IntervalList for Qualifier<'_> {}
    impl CitationList for Qualifier<'_> {}
    impl CrossReferences for Qualifier<'_> {}
    impl TranslationInfo for Qualifier<'_> {}
    impl Taxonomy for Qualifier<'_> {}
    impl Identity for Qualifier<'_> {}

    #[test]
    fn test_qualifier_answers_name_value_and_notes() {
        let node = qualifier("note", "plasmid-borne");
        let entity = Qualifier::new(&node);

        assert_eq!(NamedValue::name(&entity), Some("note"));
        assert_eq!(NamedValue::value(&entity), Some("plasmid-borne"));
        assert_eq!(Notes::notes(&entity), vec!["plasmid-borne"]);
    }

    #[test]
    fn test_feature_gene_protein_and_translation_info() {
        let node = Node::new(tags::FEATURE)
            .with_child(Node::new(tags::FEATURE_KEY).with_text("CDS"))
            .with_child(Node::new(tags::FEATURE_LOCATION).with_text("1..9"))
            .with_child(
                Node::new(tags::FEATURE_QUALS)
                    .with_child(qualifier("gene", "thrA"))
                    .with_child(qualifier("locus_tag", "b0002"))
                    .with_child(qualifier("gene_synonym", "Hs"))
                    .with_child(qualifier("product", "aspartokinase I"))
                    .with_child(qualifier("protein_id", "NP_414543.1"))
                    .with_child(qualifier("codon_start", "2"))
                    .with_child(qualifier("translation", "MRV"))
                    .with_child(qualifier("evidence", "experimental")),
            );
        let feature = Feature::new(&node);

        assert_eq!(GeneInfo::gene(&feature), Some("thrA"));
        assert_eq!(GeneInfo::locus_tag(&feature), Some("b0002"));
        assert_eq!(GeneInfo::gene_synonyms(&feature), vec!["Hs"]);
        assert_eq!(ProteinInfo::product(&feature), Some("aspartokinase I"));
        assert_eq!(ProteinInfo::protein_id(&feature), Some("NP_414543.1"));
        assert_eq!(Evidence::evidence(&feature), Some("experimental"));
        assert_eq!(TranslationInfo::codon_start(&feature), Some(2));
        assert_eq!(TranslationInfo::translation(&feature), Some("MRV"));
        assert_eq!(TranslationInfo::frame(&feature), None);
        assert_eq!(NamedValue::name(&feature), Some("CDS"));
        assert_eq!(NamedValue::value(&feature), Some("1..9"));
    }

    #[test]
    fn test_feature_accessions_come_from_remote_intervals() {
        let node = Node::new(tags::FEATURE).with_child(
            Node::new(tags::FEATURE_INTERVALS)
                .with_child(
                    Node::new(tags::INTERVAL)
                        .with_child(Node::new(tags::INTERVAL_FROM).with_text("1"))
                        .with_child(Node::new(tags::INTERVAL_TO).with_text("5"))
                        .with_child(Node::new(tags::INTERVAL_ACCESSION).with_text("AF171097.1")),
                )
                .with_child(
                    Node::new(tags::INTERVAL)
                        .with_child(Node::new(tags::INTERVAL_POINT).with_text("7"))
                        .with_child(Node::new(tags::INTERVAL_ACCESSION).with_text("AF171097.1")),
                ),
        );
        let feature = Feature::new(&node);

        assert_eq!(Identity::accessions(&feature), vec!["AF171097.1"]);
        assert_eq!(Identity::accession(&feature), None);
    }

    #[test]
    fn test_sequence_identity_and_data() -> Result<(), Box<dyn std::error::Error>> {
        let node = Node::new(tags::RECORD)
            .with_child(Node::new(tags::PRIMARY_ACCESSION).with_text("NM_001"))
            .with_child(Node::new(tags::ACCESSION_VERSION).with_text("NM_001.3"))
            .with_child(Node::new(tags::MOLTYPE).with_text("mRNA"))
            .with_child(Node::new(tags::DEFINITION).with_text("aspartokinase I"));
        let sequence = Sequence::new(&node, "ACGU".to_string());

        assert_eq!(Identity::accession(&sequence), Some("NM_001"));
        assert_eq!(Identity::version(&sequence)?, Some(3));
        assert_eq!(Describe::description(&sequence), Some("aspartokinase I"));
        assert_eq!(SequenceData::letters(&sequence), Some("ACGU"));
        assert_eq!(SequenceData::alphabet(&sequence), Some(Alphabet::Rna));
        assert!(!SequenceData::is_protein(&sequence));

        Ok(())
    }
}

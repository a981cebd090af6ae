//! The recognized element vocabulary of the exchange document.
//!
//! These are the INSDSeq element names used by the GenBank exchange
//! dialect. The crate assumes, but does not validate, overall schema
//! conformance beyond the per-field presence checks made by each entity.

/// A top-level sequence record.
pub const RECORD: &str = "INSDSeq";

/// The locus name of a record.
pub const LOCUS: &str = "INSDSeq_locus";

/// The molecule type code of a record.
pub const MOLTYPE: &str = "INSDSeq_moltype";

/// The creation date of a record.
pub const CREATE_DATE: &str = "INSDSeq_create-date";

/// The last-update date of a record.
pub const UPDATE_DATE: &str = "INSDSeq_update-date";

/// The definition (description) text of a record.
pub const DEFINITION: &str = "INSDSeq_definition";

/// The primary accession of a record.
pub const PRIMARY_ACCESSION: &str = "INSDSeq_primary-accession";

/// The versioned accession (`<accession>.<version>`) of a record.
pub const ACCESSION_VERSION: &str = "INSDSeq_accession-version";

/// The container of secondary accessions.
pub const SECONDARY_ACCESSIONS: &str = "INSDSeq_secondary-accessions";

/// A single secondary accession.
pub const SECONDARY_ACCESSION: &str = "INSDSecondary-accn";

/// The container of other sequence identifiers.
pub const OTHER_SEQIDS: &str = "INSDSeq_other-seqids";

/// A single other sequence identifier.
pub const SEQID: &str = "INSDSeqid";

/// The container of keywords.
pub const KEYWORDS: &str = "INSDSeq_keywords";

/// A single keyword.
pub const KEYWORD: &str = "INSDKeyword";

/// The scientific name of the source organism.
pub const ORGANISM: &str = "INSDSeq_organism";

/// The taxonomic lineage of the source organism.
pub const TAXONOMY: &str = "INSDSeq_taxonomy";

/// The container of citations.
pub const REFERENCES: &str = "INSDSeq_references";

/// A single citation.
pub const REFERENCE: &str = "INSDReference";

/// The feature table of a record.
pub const FEATURE_TABLE: &str = "INSDSeq_feature-table";

/// A single feature.
pub const FEATURE: &str = "INSDFeature";

/// The raw sequence letters of a record.
pub const SEQUENCE: &str = "INSDSeq_sequence";

/// The key (functional category) of a feature.
pub const FEATURE_KEY: &str = "INSDFeature_key";

/// The location descriptor text of a feature.
pub const FEATURE_LOCATION: &str = "INSDFeature_location";

/// The location operator of a feature.
pub const FEATURE_OPERATOR: &str = "INSDFeature_operator";

/// The interval container of a feature.
pub const FEATURE_INTERVALS: &str = "INSDFeature_intervals";

/// A single interval.
pub const INTERVAL: &str = "INSDInterval";

/// The qualifier container of a feature.
pub const FEATURE_QUALS: &str = "INSDFeature_quals";

/// A single qualifier.
pub const QUALIFIER: &str = "INSDQualifier";

/// The start coordinate of an interval.
pub const INTERVAL_FROM: &str = "INSDInterval_from";

/// The end coordinate of an interval.
pub const INTERVAL_TO: &str = "INSDInterval_to";

/// The single-point coordinate of an interval.
pub const INTERVAL_POINT: &str = "INSDInterval_point";

/// The accession override of a remote interval.
pub const INTERVAL_ACCESSION: &str = "INSDInterval_accession";

/// The reverse-strand marker of an interval. Carries a boolean-valued
/// `value` attribute.
pub const INTERVAL_ISCOMP: &str = "INSDInterval_iscomp";

/// The attribute holding boolean flags such as the complement marker.
pub const VALUE_ATTRIBUTE: &str = "value";

/// The name of a qualifier.
pub const QUALIFIER_NAME: &str = "INSDQualifier_name";

/// The value of a qualifier.
pub const QUALIFIER_VALUE: &str = "INSDQualifier_value";

/// The title of a citation.
pub const REFERENCE_TITLE: &str = "INSDReference_title";

/// The journal text of a citation.
pub const REFERENCE_JOURNAL: &str = "INSDReference_journal";

/// The author container of a citation.
pub const REFERENCE_AUTHORS: &str = "INSDReference_authors";

/// A single author.
pub const AUTHOR: &str = "INSDAuthor";

/// The PubMed identifier of a citation.
pub const REFERENCE_PUBMED: &str = "INSDReference_pubmed";

/// The cross-reference container of a citation.
pub const REFERENCE_XREF: &str = "INSDReference_xref";

/// A single citation cross-reference.
pub const XREF: &str = "INSDXref";

/// The database name of a citation cross-reference.
pub const XREF_DBNAME: &str = "INSDXref_dbname";

/// The object identifier of a citation cross-reference.
pub const XREF_ID: &str = "INSDXref_id";

/// The remark text of a citation.
pub const REFERENCE_REMARK: &str = "INSDReference_remark";

/// The reserved qualifier name marking a database cross-reference.
pub const DB_XREF: &str = "db_xref";

/// The feature key identifying the biological source feature.
pub const SOURCE_KEY: &str = "source";

//! `seqrecord` is a crate for modeling annotated biological sequence
//! exchange records and resolving their feature coordinates.
//!
//! The crate provides two main points of entry:
//!
//! - Reading records out of a parsed exchange document and querying them
//!   through a uniform set of capability traits.
//! - Resolving a feature's intervals into strand-aware reading-frame
//!   phases and rendering frame-consistent sequence extracts.
//!
//! ## Reading records
//!
//! A [`Document`] is an ordered tree of labeled [`Node`]s, produced by a
//! [`document::Parse`] collaborator (or built programmatically, as the
//! examples here do). [`Document::records()`] yields the records within
//! it as a lazy, one-pass stream, attaching each record's letters after
//! they pass through a [`clean::Clean`] collaborator.
//!
//! Entities derived from a record — features, intervals, qualifiers,
//! citations, cross-references — are thin views into the document tree.
//! Rather than inspecting concrete kinds, downstream code should query
//! the [`capability`] traits, which answer "absent" for anything a kind
//! does not carry.
//!
//! ```
//! use seqrecord::clean::Cleaner;
//! use seqrecord::document::Document;
//! use seqrecord::document::Node;
//!
//! let document = Document::new(vec![
//!     Node::new("INSDSeq")
//!         .with_child(Node::new("INSDSeq_primary-accession").with_text("U00096"))
//!         .with_child(Node::new("INSDSeq_definition").with_text("Escherichia coli K-12"))
//!         .with_child(Node::new("INSDSeq_moltype").with_text("DNA"))
//!         .with_child(Node::new("INSDSeq_sequence").with_text("aaa ccc ggg ttt")),
//! ]);
//!
//! for result in document.records(Cleaner) {
//!     let record = result?;
//!     assert_eq!(record.primary_accession(), Some("U00096"));
//!     assert_eq!(record.letters(), "AAACCCGGGTTT");
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Resolving features
//!
//! A feature spliced from several intervals carries a residual codon
//! phase from each interval into the next. [`resolve::resolve()`]
//! annotates every interval with its signed frame (the sign encodes the
//! strand), and [`resolve::feature_sequence()`] renders the feature's
//! effective letters, reverse-complementing reverse-strand intervals so
//! that the concatenation preserves codon phase for translation.
//!
//! ```
//! use seqrecord::clean::Cleaner;
//! use seqrecord::document::Document;
//! use seqrecord::document::Node;
//!
//! let document = Document::new(vec![
//!     Node::new("INSDSeq")
//!         .with_child(Node::new("INSDSeq_moltype").with_text("DNA"))
//!         .with_child(Node::new("INSDSeq_sequence").with_text("aaacccgggttt"))
//!         .with_child(
//!             Node::new("INSDSeq_feature-table").with_child(
//!                 Node::new("INSDFeature")
//!                     .with_child(Node::new("INSDFeature_key").with_text("CDS"))
//!                     .with_child(
//!                         Node::new("INSDFeature_intervals")
//!                             .with_child(
//!                                 Node::new("INSDInterval")
//!                                     .with_child(Node::new("INSDInterval_from").with_text("1"))
//!                                     .with_child(Node::new("INSDInterval_to").with_text("3")),
//!                             )
//!                             .with_child(
//!                                 Node::new("INSDInterval")
//!                                     .with_child(Node::new("INSDInterval_from").with_text("7"))
//!                                     .with_child(Node::new("INSDInterval_to").with_text("9"))
//!                                     .with_child(
//!                                         Node::new("INSDInterval_iscomp")
//!                                             .with_attribute("value", "true"),
//!                                     ),
//!                             ),
//!                     ),
//!             ),
//!         ),
//! ]);
//!
//! let record = document.records(Cleaner).next().unwrap()?;
//! let feature = record.features()[0];
//!
//! let resolved = feature.resolve()?;
//! assert_eq!(resolved[0].frame(), 1);
//! assert_eq!(resolved[1].frame(), -1);
//!
//! assert_eq!(feature.sequence(&record)?, "AAACCC");
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Sources
//!
//! Documents are opened through one of three IO strategy variants:
//! [`source::FileSource`] (with transparent `.gz` decompression),
//! [`source::TextSource`], or [`source::RemoteSource`], which delegates
//! to a [`fetch::Fetch`] collaborator. A blocking E-utilities client
//! implementing that collaborator is available behind the `remote`
//! feature.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod alphabet;
pub mod capability;
pub mod clean;
pub mod document;
pub mod fetch;
pub mod reader;
pub mod record;
pub mod resolve;
pub mod source;

pub use document::Document;
pub use document::Node;
pub use reader::Records;
pub use record::Sequence;

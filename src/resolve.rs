//! Interval and reading-frame resolution.
//!
//! A feature spliced from several non-contiguous intervals (exons) does
//! not, in general, have codon boundaries aligned with its exon
//! boundaries. Walking the intervals in document order while carrying the
//! residual phase from one exon into the next lets a downstream
//! translator start each exon's reading at the correct in-codon offset
//! instead of restarting at phase zero. The sign of each resolved frame
//! encodes the strand, so consumers need not re-query the complement
//! flag.

use crate::alphabet::reverse_complement;
use crate::record;
use crate::record::Feature;
use crate::record::Interval;
use crate::record::Sequence;

/// An error related to interval resolution or sequence extraction.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// An interval was structurally malformed.
    Format(record::Error),

    /// Coordinate extraction fell outside the parent letters. Never
    /// silently clamped.
    OutOfBounds {
        /// The interval's start coordinate as stored.
        start: u64,
        /// The interval's end coordinate as stored.
        end: u64,
        /// The parent's letter count.
        length: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Format(err) => write!(f, "format error: {err}"),
            Error::OutOfBounds { start, end, length } => write!(
                f,
                "interval {start}..{end} falls outside the parent letters (length {length})"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Gets the in-codon offset consumed by a phase.
const fn offset(phase: u8) -> u8 {
    match phase {
        1 => 0,
        2 => 1,
        _ => 2,
    }
}

/// Gets the phase carried into the next interval from a length remainder.
const fn next_phase(remainder: u8) -> u8 {
    match remainder {
        0 => 1,
        1 => 3,
        _ => 2,
    }
}

/// An interval annotated with its resolved reading-frame phase.
///
/// The frame is a derived value computed during resolution; the original
/// interval is never mutated. Its magnitude is the phase (1, 2, or 3) and
/// its sign is the strand: negative for reverse-strand intervals.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Resolved<'d> {
    /// The underlying interval.
    interval: Interval<'d>,

    /// The signed reading-frame phase.
    frame: i8,
}

impl<'d> Resolved<'d> {
    /// Gets the underlying interval.
    pub fn interval(&self) -> &Interval<'d> {
        &self.interval
    }

    /// Gets the signed reading-frame phase.
    pub fn frame(&self) -> i8 {
        self.frame
    }

    /// Renders this interval's letters against the parent record.
    pub fn sequence(&self, parent: &Sequence<'d>) -> Result<String, Error> {
        interval_sequence(&self.interval, parent)
    }
}

/// Resolves a feature's ordered intervals, annotating each with its
/// strand-aware reading-frame phase.
///
/// The phase starts at 1 and is carried across intervals: each interval's
/// length, less the in-codon offset its phase consumes, determines the
/// phase of the interval that follows.
///
/// Resolution is a pure function of the intervals' lengths and complement
/// flags; resolving the same feature twice yields identical frames.
///
/// # Examples
///
/// ```
/// use seqrecord::document::Node;
/// use seqrecord::record::Feature;
/// use seqrecord::resolve::resolve;
///
/// let node = Node::new("INSDFeature").with_child(
///     Node::new("INSDFeature_intervals")
///         .with_child(
///             Node::new("INSDInterval")
///                 .with_child(Node::new("INSDInterval_from").with_text("1"))
///                 .with_child(Node::new("INSDInterval_to").with_text("100")),
///         )
///         .with_child(
///             Node::new("INSDInterval")
///                 .with_child(Node::new("INSDInterval_from").with_text("201"))
///                 .with_child(Node::new("INSDInterval_to").with_text("277")),
///         ),
/// );
///
/// let feature = Feature::new(&node);
/// let resolved = resolve(&feature)?;
///
/// assert_eq!(resolved[0].frame(), 1);
/// assert_eq!(resolved[1].frame(), 3);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn resolve<'d>(feature: &Feature<'d>) -> Result<Vec<Resolved<'d>>, Error> {
    let mut phase: u8 = 1;
    let mut resolved = Vec::new();

    for interval in feature.intervals() {
        let length = interval.length().map_err(Error::Format)?;

        let frame = match interval.is_complement() {
            true => -(phase as i8),
            false => phase as i8,
        };

        let adjusted = length as i64 - i64::from(offset(phase));
        phase = next_phase(adjusted.rem_euclid(3) as u8);

        resolved.push(Resolved { interval, frame });
    }

    Ok(resolved)
}

/// Renders a feature's effective letters against the parent record.
///
/// Each resolved interval's letters are extracted from the parent (1-based,
/// inclusive at both ends), reverse-complemented when the interval reads
/// on the reverse strand, and concatenated in interval order.
pub fn feature_sequence(feature: &Feature<'_>, parent: &Sequence<'_>) -> Result<String, Error> {
    let mut letters = String::new();

    for resolved in resolve(feature)? {
        letters.push_str(&extract(resolved.interval(), parent.letters())?);
    }

    Ok(letters)
}

/// Renders a single interval's letters against the parent record, using
/// the same extraction and complementation rule as
/// [`feature_sequence`].
pub fn interval_sequence(interval: &Interval<'_>, parent: &Sequence<'_>) -> Result<String, Error> {
    extract(interval, parent.letters())
}

/// Extracts an interval's letters from the parent's cleaned letters.
///
/// The document stores the numerically lower coordinate first regardless
/// of strand, so the slice is taken between the numeric minimum and
/// maximum of the bounds.
fn extract(interval: &Interval<'_>, letters: &str) -> Result<String, Error> {
    let (start, end) = interval.bounds().map_err(Error::Format)?;
    let (lower, upper) = (start.min(end), start.max(end));

    if lower == 0 || upper as usize > letters.len() {
        return Err(Error::OutOfBounds {
            start,
            end,
            length: letters.len(),
        });
    }

    let slice = &letters[(lower as usize - 1)..(upper as usize)];

    match interval.is_complement() {
        true => Ok(reverse_complement(slice)),
        false => Ok(slice.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::tags;
    use crate::document::Node;

    fn span(from: u64, to: u64, complement: bool) -> Node {
        let mut node = Node::new(tags::INTERVAL)
            .with_child(Node::new(tags::INTERVAL_FROM).with_text(from.to_string()))
            .with_child(Node::new(tags::INTERVAL_TO).with_text(to.to_string()));

        if complement {
            node = node.with_child(
                Node::new(tags::INTERVAL_ISCOMP).with_attribute(tags::VALUE_ATTRIBUTE, "true"),
            );
        }

        node
    }

    fn feature_node(intervals: Vec<Node>) -> Node {
        let mut container = Node::new(tags::FEATURE_INTERVALS);
        for interval in intervals {
            container = container.with_child(interval);
        }

        Node::new(tags::FEATURE).with_child(container)
    }

    fn record_node(letters_tag_text: &str) -> Node {
        Node::new(tags::RECORD)
            .with_child(Node::new(tags::SEQUENCE).with_text(letters_tag_text))
    }

    #[test]
    fn test_phase_recurrence_across_three_reverse_exons()
    -> Result<(), Box<dyn std::error::Error>> {
        // Exon lengths 100, 77, and 50, all on the reverse strand.
        //
        //   m1 = 1; 100 - 0 = 100; 100 mod 3 = 1 -> m2 = 3
        //   m2 = 3;  77 - 2 =  75;  75 mod 3 = 0 -> m3 = 1
        //   m3 = 1;  50 - 0 =  50;  50 mod 3 = 2 -> m4 = 2
        let node = feature_node(vec![
            span(1, 100, true),
            span(201, 277, true),
            span(301, 350, true),
        ]);
        let feature = Feature::new(&node);

        let resolved = resolve(&feature)?;
        let frames = resolved.iter().map(Resolved::frame).collect::<Vec<_>>();
        assert_eq!(frames, vec![-1, -3, -1]);

        Ok(())
    }

    #[test]
    fn test_resolution_is_deterministic() -> Result<(), Box<dyn std::error::Error>> {
        let node = feature_node(vec![span(1, 10, false), span(20, 31, true), span(40, 45, false)]);
        let feature = Feature::new(&node);

        let first = resolve(&feature)?
            .iter()
            .map(Resolved::frame)
            .collect::<Vec<_>>();
        let second = resolve(&feature)?
            .iter()
            .map(Resolved::frame)
            .collect::<Vec<_>>();
        assert_eq!(first, second);

        Ok(())
    }

    #[test]
    fn test_point_interval_has_length_one_and_resolves()
    -> Result<(), Box<dyn std::error::Error>> {
        let node = feature_node(vec![Node::new(tags::INTERVAL)
            .with_child(Node::new(tags::INTERVAL_POINT).with_text("5"))]);
        let feature = Feature::new(&node);

        let resolved = resolve(&feature)?;
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].frame(), 1);
        assert_eq!(resolved[0].interval().length()?, 1);

        Ok(())
    }

    #[test]
    fn test_malformed_interval_fails_resolution() {
        let node = feature_node(vec![Node::new(tags::INTERVAL)]);
        let feature = Feature::new(&node);

        let err = resolve(&feature).unwrap_err();
        assert!(matches!(
            err,
            Error::Format(record::Error::MissingCoordinates)
        ));
    }

    #[test]
    fn test_interval_extraction_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let record = record_node("ACGTACGTAC");
        let parent = Sequence::new(&record, "ACGTACGTAC".to_string());

        // Forward strand: letters[start-1..end], 1-based inclusive.
        let forward = span(2, 5, false);
        assert_eq!(interval_sequence(&Interval::new(&forward), &parent)?, "CGTA");

        // Reverse strand: the reverse complement of the same slice.
        let reverse = span(2, 5, true);
        assert_eq!(interval_sequence(&Interval::new(&reverse), &parent)?, "TACG");

        Ok(())
    }

    #[test]
    fn test_reverse_strand_bounds_slice_by_numeric_min_and_max()
    -> Result<(), Box<dyn std::error::Error>> {
        let record = record_node("ACGTACGTAC");
        let parent = Sequence::new(&record, "ACGTACGTAC".to_string());

        // Stored with start > end, as some producers write reverse-strand
        // spans.
        let node = span(5, 2, true);
        assert_eq!(interval_sequence(&Interval::new(&node), &parent)?, "TACG");

        Ok(())
    }

    #[test]
    fn test_extraction_out_of_bounds_is_an_error() {
        let record = record_node("ACGT");
        let parent = Sequence::new(&record, "ACGT".to_string());

        let node = span(2, 9, false);
        let err = interval_sequence(&Interval::new(&node), &parent).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfBounds {
                start: 2,
                end: 9,
                length: 4
            }
        );

        let node = span(0, 3, false);
        let err = interval_sequence(&Interval::new(&node), &parent).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { .. }));
    }

    #[test]
    fn test_feature_sequence_concatenates_in_interval_order()
    -> Result<(), Box<dyn std::error::Error>> {
        let record = record_node("AAACCCGGGTTT");
        let parent = Sequence::new(&record, "AAACCCGGGTTT".to_string());

        let node = feature_node(vec![span(1, 3, false), span(7, 9, false)]);
        let feature = Feature::new(&node);

        assert_eq!(feature_sequence(&feature, &parent)?, "AAAGGG");

        Ok(())
    }

    #[test]
    fn test_feature_sequence_reverse_complements_reverse_intervals()
    -> Result<(), Box<dyn std::error::Error>> {
        let record = record_node("AAACCCGGGTTT");
        let parent = Sequence::new(&record, "AAACCCGGGTTT".to_string());

        let node = feature_node(vec![span(1, 3, false), span(7, 9, true)]);
        let feature = Feature::new(&node);

        assert_eq!(feature_sequence(&feature, &parent)?, "AAACCC");

        Ok(())
    }

    #[test]
    fn test_single_interval_feature_matches_interval_rendering()
    -> Result<(), Box<dyn std::error::Error>> {
        let record = record_node("ACGTACGTAC");
        let parent = Sequence::new(&record, "ACGTACGTAC".to_string());

        let node = feature_node(vec![span(3, 8, false)]);
        let feature = Feature::new(&node);

        let from_feature = feature_sequence(&feature, &parent)?;
        let from_interval = interval_sequence(&feature.intervals()[0], &parent)?;
        assert_eq!(from_feature, from_interval);

        Ok(())
    }
}

//! A contiguous coordinate span (or single point) within a record.
//!
//! Coordinates are 1-based and inclusive at both ends, exactly as stored
//! in the document. For a reverse-strand interval the document still
//! stores the numerically lower coordinate first, so consumers slicing
//! letters must use the numeric minimum and maximum rather than assuming
//! `start < end`.

use crate::document::tags;
use crate::document::Node;
use crate::record::Error;

/// A coordinate span within a record.
///
/// Exactly one of the start/end pair or the point is meaningful per
/// interval; [`Interval::bounds`] fails loudly when neither is present.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Interval<'d> {
    /// The underlying interval node.
    node: &'d Node,
}

impl<'d> Interval<'d> {
    /// Creates an interval view over the given node.
    pub fn new(node: &'d Node) -> Self {
        Self { node }
    }

    /// Gets the underlying node.
    pub fn node(&self) -> &'d Node {
        self.node
    }

    /// Gets the start and end coordinates.
    ///
    /// A point interval collapses to `(point, point)`. An interval with
    /// neither a start/end pair nor a point is structurally malformed and
    /// fails with [`Error::MissingCoordinates`].
    ///
    /// # Examples
    ///
    /// ```
    /// use seqrecord::document::Node;
    /// use seqrecord::record::Interval;
    ///
    /// let node = Node::new("INSDInterval")
    ///     .with_child(Node::new("INSDInterval_from").with_text("10"))
    ///     .with_child(Node::new("INSDInterval_to").with_text("30"));
    ///
    /// let interval = Interval::new(&node);
    /// assert_eq!(interval.bounds()?, (10, 30));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn bounds(&self) -> Result<(u64, u64), Error> {
        let from = self.node.text_at(&[tags::INTERVAL_FROM]);
        let to = self.node.text_at(&[tags::INTERVAL_TO]);

        match (from, to) {
            (Some(from), Some(to)) => Ok((
                parse_coordinate(tags::INTERVAL_FROM, from)?,
                parse_coordinate(tags::INTERVAL_TO, to)?,
            )),
            _ => match self.point()? {
                Some(point) => Ok((point, point)),
                None => Err(Error::MissingCoordinates),
            },
        }
    }

    /// Gets the start coordinate.
    pub fn start(&self) -> Result<u64, Error> {
        self.bounds().map(|(start, _)| start)
    }

    /// Gets the end coordinate. Equals the start coordinate when the
    /// interval is a single point.
    pub fn end(&self) -> Result<u64, Error> {
        self.bounds().map(|(_, end)| end)
    }

    /// Gets the single-point coordinate, if this interval is a point.
    pub fn point(&self) -> Result<Option<u64>, Error> {
        self.node
            .text_at(&[tags::INTERVAL_POINT])
            .map(|text| parse_coordinate(tags::INTERVAL_POINT, text))
            .transpose()
    }

    /// Gets the number of letters the interval spans. A point interval has
    /// length 1.
    pub fn length(&self) -> Result<u64, Error> {
        self.bounds().map(|(start, end)| start.abs_diff(end) + 1)
    }

    /// Indicates whether the interval reads on the reverse strand.
    pub fn is_complement(&self) -> bool {
        self.node
            .attribute_at(&[tags::INTERVAL_ISCOMP], tags::VALUE_ATTRIBUTE)
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    /// Gets the accession override of a remote interval, if present. A
    /// remote interval references a different parent record than the
    /// feature that owns it.
    pub fn accession(&self) -> Option<&'d str> {
        self.node.text_at(&[tags::INTERVAL_ACCESSION])
    }
}

/// Parses a coordinate field into an integer.
fn parse_coordinate(field: &'static str, value: &str) -> Result<u64, Error> {
    value.parse::<u64>().map_err(|_| Error::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

//! Query-string helpers over a query view.
//!
//! Everything here only splits on delimiters and hands back ranges relative
//! to the query; nothing is decoded or copied.

use core::iter::FusedIterator;
use core::ops::Range;

use crate::code_unit::CodeUnit;

/// Count the `=` units in `query`.
/// This is a raw count, not a count of well-formed pairs: `a=b=c` counts 2
/// and `flag` counts 0.
pub fn count_assignments<C: CodeUnit>(query: &[C]) -> usize {
    C::count(query, C::ASSIGN)
}

/// Range of the `index`-th `&`-separated segment of `query`.
///
/// Rescans from the start on every call. The cursor moves forward at most
/// `min(index, count_assignments(query))` times and clamps at the end of the
/// query, so an index past the last segment yields an empty range at the end,
/// and a query with fewer `=` than segments can yield an earlier segment.
pub fn segment_at<C: CodeUnit>(query: &[C], index: usize) -> Range<usize> {
    let len = query.len();
    let segment_end =
        |from: usize| C::find(&query[from..], C::PAIR_SEPARATOR).map_or(len, |pos| from + pos);

    let mut start = 0;
    let mut end = segment_end(start);
    for _ in 0..index.min(count_assignments(query)) {
        start = (end + 1).min(len);
        end = segment_end(start);
    }
    start..end
}

/// Split one segment at its first `=` into key and value ranges.
/// A segment without `=` is all key with an empty value at its end.
pub fn split_pair<C: CodeUnit>(segment: &[C]) -> (Range<usize>, Range<usize>) {
    let len = segment.len();
    match C::find(segment, C::ASSIGN) {
        Some(pos) => (0..pos, pos + 1..len),
        None => (0..len, len..len),
    }
}

/// Iterator over the ranges of every `&`-separated segment of a query.
/// An empty query has no segments; otherwise empty segments between
/// adjacent `&` are kept.
#[derive(Debug, Clone)]
pub struct SegmentRanges<'a, C> {
    query: &'a [C],
    pos: usize,
    finished: bool,
}

impl<'a, C: CodeUnit> SegmentRanges<'a, C> {
    pub fn new(query: &'a [C]) -> Self {
        Self {
            query,
            pos: 0,
            finished: query.is_empty(),
        }
    }
}

impl<C: CodeUnit> Iterator for SegmentRanges<'_, C> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let start = self.pos;
        if let Some(offset) = C::find(&self.query[start..], C::PAIR_SEPARATOR) {
            self.pos = start + offset + 1;
            Some(start..start + offset)
        } else {
            self.finished = true;
            Some(start..self.query.len())
        }
    }
}

impl<C: CodeUnit> FusedIterator for SegmentRanges<'_, C> {}

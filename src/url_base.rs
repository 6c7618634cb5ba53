use crate::checkers::parse_port;
use crate::code_unit::CodeUnit;
use crate::error::Result;
use crate::query::{SegmentRanges, count_assignments, segment_at, split_pair};
use crate::url_components::{Span, UrlComponents};

/// Base trait for URL view types
/// Provides the common read-only interface for `Url` and `WideUrl`.
///
/// Implementors supply the buffer, the parsed components and a way to turn a
/// span into a view; every accessor and query helper is derived from those.
pub trait UrlBase {
    /// Encoding of the owned buffer
    type Unit: CodeUnit;

    /// Borrowed view type handed back by the accessors (`str` or `[Unit]`)
    type View: ?Sized;

    /// The whole buffer as code units
    fn units(&self) -> &[Self::Unit];

    /// Component spans, always current with the buffer
    fn components(&self) -> &UrlComponents;

    /// Resolve a span against the buffer (zero-copy)
    fn view(&self, span: Span) -> &Self::View;

    /// Resolve a span to raw code units, empty when out of bounds
    fn units_of(&self, span: Span) -> &[Self::Unit] {
        self.units().get(span.range()).unwrap_or(&[])
    }

    // Getters (8 methods)

    /// Text before `"://"`, or the whole input when there is none
    fn scheme(&self) -> &Self::View {
        self.view(self.components().scheme)
    }

    fn username(&self) -> &Self::View {
        self.view(self.components().username)
    }

    fn password(&self) -> &Self::View {
        self.view(self.components().password)
    }

    fn host(&self) -> &Self::View {
        self.view(self.components().host)
    }

    fn port(&self) -> &Self::View {
        self.view(self.components().port)
    }

    /// Path without its leading `/`
    fn path(&self) -> &Self::View {
        self.view(self.components().path)
    }

    /// Query without its leading `?`
    fn querys(&self) -> &Self::View {
        self.view(self.components().query)
    }

    /// Fragment without its leading `#`
    fn fragment(&self) -> &Self::View {
        self.view(self.components().fragment)
    }

    // Has checks (4 methods)

    /// Check if URL has credentials (username or password)
    fn has_credentials(&self) -> bool {
        let components = self.components();
        !components.username.is_empty() || !components.password.is_empty()
    }

    fn has_port(&self) -> bool {
        !self.components().port.is_empty()
    }

    fn has_query(&self) -> bool {
        !self.components().query.is_empty()
    }

    fn has_fragment(&self) -> bool {
        !self.components().fragment.is_empty()
    }

    // Query helpers

    /// Number of `=` in the query view
    fn query_count(&self) -> usize {
        count_assignments(self.units_of(self.components().query))
    }

    /// The `index`-th `&`-separated segment of the query view.
    /// Out-of-range indices degrade to an empty or earlier segment instead of
    /// failing; check `query_count` first when that matters.
    fn query_at(&self, index: usize) -> &Self::View {
        let query = self.components().query;
        let relative = segment_at(self.units_of(query), index);
        self.view(query.narrow(relative))
    }

    /// Every `&`-separated segment of the query view, in order
    fn query_segments(&self) -> impl Iterator<Item = &Self::View> {
        let query = self.components().query;
        SegmentRanges::new(self.units_of(query))
            .map(move |relative| self.view(query.narrow(relative)))
    }

    /// Every query segment split at its first `=` into `(key, value)`
    fn query_pairs(&self) -> impl Iterator<Item = (&Self::View, &Self::View)> {
        let query = self.components().query;
        SegmentRanges::new(self.units_of(query)).map(move |relative| {
            let segment = query.narrow(relative);
            let (key, value) = split_pair(self.units_of(segment));
            (
                self.view(segment.narrow(key)),
                self.view(segment.narrow(value)),
            )
        })
    }

    /// The port view as a number.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingPort` if the port view is empty and
    /// `ParseError::InvalidPort` if it is not a decimal `u16`.
    fn port_number(&self) -> Result<u16> {
        parse_port(self.units_of(self.components().port))
    }
}

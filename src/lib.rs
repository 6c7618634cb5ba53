//! Zero-copy URL splitting.
//!
//! A [`Url`] owns its text and hands out the scheme, user-info, host, port,
//! path, query and fragment as borrowed views into it. Splitting is a single
//! forward scan over literal delimiters that never fails; missing delimiters
//! just leave the later components empty.
//!
//! ```
//! use urlview::Url;
//!
//! let url = Url::parse("http://example.com:80/p?x=1&y=2");
//! assert_eq!(url.host(), "example.com");
//! assert_eq!(url.port(), "80");
//! assert_eq!(url.query_count(), 2);
//! assert_eq!(url.query_at(1), "y=2");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod checkers;
mod code_unit;
mod error;
mod parser;
mod query;
mod url_base;
mod url_components;
mod url_view;
mod wide_url;

// Public API
pub use code_unit::CodeUnit;
pub use error::{ParseError, Result};
pub use parser::parse_components;
pub use query::SegmentRanges;
pub use url_base::UrlBase;
pub use url_components::{Span, UrlComponents};
pub use url_view::UrlView as Url;
pub use wide_url::{Utf16Url, Utf32Url, WideUrl};

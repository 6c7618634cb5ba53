/// A single element of encoded URL text.
///
/// The splitter is written once against this trait and monomorphized per
/// encoding: `u8` for UTF-8 bytes, `u16` for UTF-16, `u32` and `char` for
/// UTF-32. Every delimiter the parser looks for is ASCII, so each encoding
/// carries the same table, just widened to its own unit type.
pub trait CodeUnit: Copy + Eq + core::hash::Hash + core::fmt::Debug {
    /// `"://"`, ends the scheme
    const SCHEME_SEPARATOR: [Self; 3];
    /// `@`, ends the user-info
    const USERINFO_END: Self;
    /// `:`, splits username from password
    const PASSWORD_SEPARATOR: Self;
    /// `/`, ends the authority
    const PATH_START: Self;
    /// `:`, splits host from port
    const PORT_SEPARATOR: Self;
    /// `?`, ends the path
    const QUERY_START: Self;
    /// `#`, ends the query
    const FRAGMENT_START: Self;
    /// `=`, counted by `query_count`
    const ASSIGN: Self;
    /// `&`, separates query segments
    const PAIR_SEPARATOR: Self;

    /// Scalar value of this unit, used for digit conversion.
    fn to_u32(self) -> u32;

    /// Position of the first `needle` in `haystack`.
    fn find(haystack: &[Self], needle: Self) -> Option<usize> {
        haystack.iter().position(|&unit| unit == needle)
    }

    /// Position of the first occurrence of the `needle` sequence in `haystack`.
    fn find_seq(haystack: &[Self], needle: &[Self]) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        haystack
            .windows(needle.len())
            .position(|window| window == needle)
    }

    /// Number of `needle` units in `haystack`.
    fn count(haystack: &[Self], needle: Self) -> usize {
        haystack.iter().filter(|&&unit| unit == needle).count()
    }
}

/// Delimiter table shared by every encoding, widened from ASCII bytes.
macro_rules! delimiter_table {
    ($unit:ty) => {
        const SCHEME_SEPARATOR: [Self; 3] = [b':' as $unit, b'/' as $unit, b'/' as $unit];
        const USERINFO_END: Self = b'@' as $unit;
        const PASSWORD_SEPARATOR: Self = b':' as $unit;
        const PATH_START: Self = b'/' as $unit;
        const PORT_SEPARATOR: Self = b':' as $unit;
        const QUERY_START: Self = b'?' as $unit;
        const FRAGMENT_START: Self = b'#' as $unit;
        const ASSIGN: Self = b'=' as $unit;
        const PAIR_SEPARATOR: Self = b'&' as $unit;
    };
}

/// UTF-8 bytes take the SIMD-accelerated `memchr` paths.
impl CodeUnit for u8 {
    delimiter_table!(u8);

    fn to_u32(self) -> u32 {
        u32::from(self)
    }

    fn find(haystack: &[Self], needle: Self) -> Option<usize> {
        memchr::memchr(needle, haystack)
    }

    fn find_seq(haystack: &[Self], needle: &[Self]) -> Option<usize> {
        memchr::memmem::find(haystack, needle)
    }

    fn count(haystack: &[Self], needle: Self) -> usize {
        memchr::memchr_iter(needle, haystack).count()
    }
}

impl CodeUnit for u16 {
    delimiter_table!(u16);

    fn to_u32(self) -> u32 {
        u32::from(self)
    }
}

impl CodeUnit for u32 {
    delimiter_table!(u32);

    fn to_u32(self) -> u32 {
        self
    }
}

impl CodeUnit for char {
    delimiter_table!(char);

    fn to_u32(self) -> u32 {
        u32::from(self)
    }
}

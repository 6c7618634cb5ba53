/// Single forward scan that splits URL text into component spans.
/// Delimiters are matched literally and the first occurrence always wins;
/// every search runs over the unconsumed tail only.
use crate::code_unit::CodeUnit;
use crate::url_components::{Span, UrlComponents};

/// Find `needle` at or after `from`, returning an absolute position.
fn find_from<C: CodeUnit>(input: &[C], from: usize, needle: C) -> Option<usize> {
    C::find(&input[from..], needle).map(|pos| from + pos)
}

/// Split the components of a URL.
///
/// `{scheme}://{username}:{password}@{host}:{port}/{path}?{query}#{fragment}`
///
/// Never fails: when a delimiter is missing the remainder goes to the
/// component being scanned and every later component stays empty at the end
/// of the input.
///
/// # Examples
///
/// ```
/// use urlview::parse_components;
///
/// let input = "ftp://files.example.org/pub?list";
/// let components = parse_components(input.as_bytes());
/// assert_eq!(&input[components.host.range()], "files.example.org");
/// assert_eq!(&input[components.path.range()], "pub");
/// assert_eq!(&input[components.query.range()], "list");
/// assert!(components.fragment.is_empty());
/// ```
pub fn parse_components<C: CodeUnit>(input: &[C]) -> UrlComponents {
    let len = input.len();
    let mut components = UrlComponents::empty_at(len);

    // Without "://" there is no structure beyond the scheme
    let Some(scheme_end) = C::find_seq(input, &C::SCHEME_SEPARATOR) else {
        components.scheme = Span::new(0, len);
        return components;
    };
    components.scheme = Span::new(0, scheme_end);

    let authority_start = scheme_end + C::SCHEME_SEPARATOR.len();
    let Some(path_slash) = find_from(input, authority_start, C::PATH_START) else {
        // Unsplit: user-info and port are only recognised before a '/'
        components.username = Span::empty_at(authority_start);
        components.password = Span::empty_at(authority_start);
        components.host = Span::new(authority_start, len);
        return components;
    };
    split_authority(input, Span::new(authority_start, path_slash), &mut components);

    let path_start = path_slash + 1;
    let Some(query_mark) = find_from(input, path_start, C::QUERY_START) else {
        components.path = Span::new(path_start, len);
        return components;
    };
    components.path = Span::new(path_start, query_mark);

    let query_start = query_mark + 1;
    let Some(hash_mark) = find_from(input, query_start, C::FRAGMENT_START) else {
        components.query = Span::new(query_start, len);
        return components;
    };
    components.query = Span::new(query_start, hash_mark);
    components.fragment = Span::new(hash_mark + 1, len);

    components
}

/// Split `[user[:pass]@]host[:port]` within `authority`.
fn split_authority<C: CodeUnit>(input: &[C], authority: Span, components: &mut UrlComponents) {
    let segment = &input[authority.range()];
    let mut host_start = authority.start;

    if let Some(at) = C::find(segment, C::USERINFO_END) {
        let userinfo = &segment[..at];
        let userinfo_end = authority.start + at;
        if let Some(colon) = C::find(userinfo, C::PASSWORD_SEPARATOR) {
            components.username = Span::new(authority.start, authority.start + colon);
            components.password = Span::new(authority.start + colon + 1, userinfo_end);
        } else {
            components.username = Span::new(authority.start, userinfo_end);
            components.password = Span::empty_at(userinfo_end);
        }
        host_start = userinfo_end + 1;
    } else {
        components.username = Span::empty_at(authority.start);
        components.password = Span::empty_at(authority.start);
    }

    let host_info = &input[host_start..authority.end];
    if let Some(colon) = C::find(host_info, C::PORT_SEPARATOR) {
        components.host = Span::new(host_start, host_start + colon);
        components.port = Span::new(host_start + colon + 1, authority.end);
    } else {
        components.host = Span::new(host_start, authority.end);
        components.port = Span::empty_at(authority.end);
    }
}

use percent_encoding::{percent_encode, AsciiSet, PercentEncode, CONTROLS, NON_ALPHANUMERIC};

/// Bytes escaped in query strings and fragments. Everything outside
/// `[A-Za-z0-9_\-.~!$&'()*+,;=%:@/?]` is percent-encoded.
const QUERY_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Bytes escaped in assembled path sequences. Everything outside
/// `[A-Za-z0-9_\-.~:@&=+$,/;%]` is percent-encoded.
const SEQUENCE_ESCAPE: &AsciiSet = &QUERY_ESCAPE
    .add(b'!')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'?');

/// Bytes escaped in individual query keys and values: everything but
/// `[A-Za-z0-9\-._~]`, so `&`, `=` and friends never leak into the
/// pair structure.
const FORM_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// How a sequence turns its joined string into the rendered form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeStrategy {
    /// Percent-encode with the path reserved set (the default).
    Uri,
    /// Leave the joined string untouched.
    Raw,
    /// Caller-supplied encoder.
    Custom(fn(&str) -> String),
}

impl Default for EncodeStrategy {
    #[inline]
    fn default() -> Self {
        EncodeStrategy::Uri
    }
}

impl EncodeStrategy {
    pub fn apply(&self, raw: &str) -> String {
        match self {
            EncodeStrategy::Uri => encode_uri(raw),
            EncodeStrategy::Raw => raw.to_owned(),
            EncodeStrategy::Custom(encoder) => encoder(raw),
        }
    }
}

/// Encode `raw` for use as a path, keeping the path reserved set intact.
pub fn encode_uri(raw: &str) -> String {
    encode_with(raw, SEQUENCE_ESCAPE)
}

/// Encode `raw` for use as a query string or fragment.
pub fn encode_query(raw: &str) -> String {
    encode_with(raw, QUERY_ESCAPE)
}

pub(crate) fn encode_form(raw: &str) -> PercentEncode<'_> {
    percent_encode(raw.as_bytes(), FORM_ESCAPE)
}

// A `%` introducing a well-formed escape passes through so already-encoded
// input is not encoded twice; a bare `%` re-encodes as `%25`.
fn encode_with(raw: &str, escape: &'static AsciiSet) -> String {
    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(bytes.len());
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            out.extend(percent_encode(&bytes[start..i], escape));
            let well_formed = bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit);
            out.push_str(if well_formed { "%" } else { "%25" });
            i += 1;
            start = i;
        } else {
            i += 1;
        }
    }
    out.extend(percent_encode(&bytes[start..], escape));
    out
}

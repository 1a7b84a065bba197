mod encode;
pub mod file;
pub mod http;
pub mod query;
#[cfg(feature = "url")]
mod url;

use std::{
    borrow::Cow,
    cmp,
    convert::Infallible,
    env, fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    mem, slice,
    str::FromStr,
};

pub use encode::{encode_query, encode_uri, EncodeStrategy};
pub use file::FilePath;
pub use http::{HttpUri, HttpUriError};
pub use query::QueryParams;
#[cfg(feature = "url")]
pub use url::IntoUrlError;

pub const DEFAULT_SEPARATOR: char = '/';

#[derive(thiserror::Error, Debug)]
pub enum UriSequenceError {
    #[error("InvalidArgumentError {{ given = {given} }}")]
    InvalidArgumentError { given: Cow<'static, str> },
    #[error("EnvironmentError {{ reason = {reason} }}")]
    EnvironmentError { reason: Cow<'static, str> },
}

/// Anything that carries a [`UriSequence`] for its path portion.
pub trait Sequenced {
    fn sequence(&self) -> &UriSequence;

    fn sequence_mut(&mut self) -> &mut UriSequence;

    #[inline]
    fn segments(&self) -> &[String] {
        self.sequence().segments()
    }

    #[inline]
    fn separator(&self) -> char {
        self.sequence().separator()
    }

    #[inline]
    fn depth(&self) -> usize {
        self.sequence().depth()
    }
}

/// The raw pieces of a sequence, as handed out by [`UriSequence::to_array`]
/// and accepted back by [`UriSequence::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceParts {
    pub segments: Vec<String>,
    pub separator: char,
}

/// An ordered list of path segments joined by a separator.
///
/// Empty segments and `.`/`..` are kept exactly as parsed; nothing is
/// collapsed until [`normalize`](UriSequence::normalize) is called. RFC 7230
/// ties the meaning of `""` versus `"/"` to context, so the caller decides
/// when collapsing is safe.
///
/// A sequence is absolute when its first segment is the separator itself or
/// ends with `:` (drive style, e.g. `c:`). The empty sequence means "no
/// path" and is distinct from the root `[separator]`.
#[derive(Debug, Clone)]
pub struct UriSequence {
    segments: Vec<String>,
    separator: char,
    encoder: EncodeStrategy,
}

fn is_sep_segment(segment: &str, separator: char) -> bool {
    segment.len() == separator.len_utf8() && segment.starts_with(separator)
}

fn is_root_marker(segment: &str, separator: char) -> bool {
    is_sep_segment(segment, separator) || segment.ends_with(':')
}

impl UriSequence {
    #[inline]
    pub fn new() -> UriSequence {
        UriSequence::with_separator(DEFAULT_SEPARATOR)
    }

    #[inline]
    pub fn with_separator(separator: char) -> UriSequence {
        UriSequence {
            segments: Vec::new(),
            separator,
            encoder: EncodeStrategy::default(),
        }
    }

    pub fn from_string<S: AsRef<str>>(path: S) -> UriSequence {
        UriSequence::from_string_with(path, DEFAULT_SEPARATOR)
    }

    pub fn from_string_with<S: AsRef<str>>(path: S, separator: char) -> UriSequence {
        let mut sequence = UriSequence::with_separator(separator);
        sequence.set_path(path.as_ref());
        sequence
    }

    pub fn from_segments<I, S>(segments: I) -> UriSequence
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UriSequence::from_segments_with(segments, DEFAULT_SEPARATOR)
    }

    pub fn from_segments_with<I, S>(segments: I, separator: char) -> UriSequence
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sequence = UriSequence::with_separator(separator);
        sequence.set_segments(segments);
        sequence
    }

    pub fn from_parts(parts: SequenceParts) -> UriSequence {
        UriSequence {
            segments: parts.segments,
            separator: parts.separator,
            encoder: EncodeStrategy::default(),
        }
    }

    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[inline]
    pub fn separator(&self) -> char {
        self.separator
    }

    #[inline]
    pub fn encoder(&self) -> EncodeStrategy {
        self.encoder
    }

    /// Segment count, root marker included: `/var/www` has depth 3.
    #[inline]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.segments.iter(),
        }
    }

    pub fn set_segments<I, S>(&mut self, segments: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.segments = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Re-parse `path` with the current separator and replace the segments.
    pub fn set_path(&mut self, path: &str) -> &mut Self {
        self.segments = self.parse_segments(path);
        self
    }

    pub fn set_separator(&mut self, separator: char) -> &mut Self {
        self.separator = separator;
        self
    }

    pub fn set_encoder(&mut self, encoder: EncodeStrategy) -> &mut Self {
        self.encoder = encoder;
        self
    }

    // Splitting on the separator leaves an empty head for strings that
    // start with it; that head is folded into the root marker. Runs of
    // separators stay as empty segments until normalize().
    fn parse_segments(&self, path: &str) -> Vec<String> {
        let separator = self.separator;
        if path.is_empty() {
            return Vec::new();
        }
        if is_sep_segment(path, separator) {
            return vec![separator.to_string()];
        }
        let mut segments: Vec<String> = path.split(separator).map(str::to_owned).collect();
        if segments.first().is_some_and(|first| first.is_empty()) {
            segments[0] = separator.to_string();
        }
        segments
    }

    pub fn is_absolute(&self) -> bool {
        self.segments
            .first()
            .is_some_and(|first| is_root_marker(first, self.separator))
    }

    /// Append `other`'s segments, stripping its leading separator segment so
    /// absoluteness is never duplicated mid-sequence.
    pub fn append(&mut self, other: &UriSequence) -> &mut Self {
        let mut tail = other.segments.as_slice();
        if tail
            .first()
            .is_some_and(|first| is_sep_segment(first, other.separator))
        {
            tail = &tail[1..];
        }
        self.segments.extend(tail.iter().cloned());
        self
    }

    /// Put `other`'s segments in front of this sequence. The combined result
    /// is absolute exactly when either side was; a separator marker is
    /// re-prepended in that case unless the head is already a root marker.
    pub fn prepend(&mut self, other: &UriSequence) -> &mut Self {
        let was_absolute = self.is_absolute() || other.is_absolute();
        if self
            .segments
            .first()
            .is_some_and(|first| is_sep_segment(first, self.separator))
        {
            self.segments.remove(0);
        }
        let mut merged = other.segments.clone();
        merged.append(&mut self.segments);
        if merged
            .first()
            .is_some_and(|first| is_sep_segment(first, other.separator))
        {
            merged.remove(0);
        }
        if was_absolute
            && !merged
                .first()
                .is_some_and(|first| is_root_marker(first, self.separator))
        {
            merged.insert(0, self.separator.to_string());
        }
        self.segments = merged;
        self
    }

    /// Collapse `""`, `.` and `..` segments in place.
    ///
    /// A leading `~` is replaced by the home directory from `HOME` (or
    /// `USERPROFILE`); use [`normalize_with_home`](Self::normalize_with_home)
    /// to supply the home directory explicitly.
    pub fn normalize(&mut self) -> Result<&mut Self, UriSequenceError> {
        if self.segments.first().is_some_and(|first| first == "~") {
            let home = env::var("HOME")
                .or_else(|_| env::var("USERPROFILE"))
                .map_err(|_| UriSequenceError::EnvironmentError {
                    reason: Cow::Borrowed("no HOME or USERPROFILE in the environment"),
                })?;
            return Ok(self.normalize_with_home(&home));
        }
        let segments = mem::take(&mut self.segments);
        self.segments = self.normalized(segments);
        Ok(self)
    }

    pub fn normalize_with_home(&mut self, home: &str) -> &mut Self {
        if self.segments.first().is_some_and(|first| first == "~") {
            let mut expanded = self.parse_segments(home);
            expanded.extend(self.segments.drain(..).skip(1));
            self.segments = expanded;
        }
        let segments = mem::take(&mut self.segments);
        self.segments = self.normalized(segments);
        self
    }

    fn normalized(&self, segments: Vec<String>) -> Vec<String> {
        if segments.is_empty() {
            return segments;
        }
        let separator = self.separator;
        let is_root = is_root_marker(&segments[0], separator);
        let last = segments.len() - 1;

        let mut kept: Vec<String> = Vec::with_capacity(segments.len());
        for (i, segment) in segments.into_iter().enumerate() {
            let removable =
                segment.is_empty() || segment == "." || is_sep_segment(&segment, separator);
            if removable {
                let root_survives = i == 0 && is_root;
                // a trailing separator means "this is a directory"
                let trailing_survives = i == last && segment.is_empty();
                if !root_survives && !trailing_survives {
                    continue;
                }
            }
            kept.push(segment);
        }

        let mut out: Vec<String> = Vec::with_capacity(kept.len());
        for segment in kept {
            if segment != ".." {
                out.push(segment);
                continue;
            }
            match out.last() {
                // never walk above the root
                Some(previous) if is_root_marker(previous, separator) => {}
                Some(previous) if previous != ".." => {
                    out.pop();
                }
                _ => out.push(segment),
            }
        }
        out
    }

    /// Subtract the common leading prefix of the two sequences and keep the
    /// remainder of the longer one.
    ///
    /// When exactly one side is absolute there is no shared prefix to speak
    /// of and the absolute side wins outright (empty result if both render
    /// to the same string). With `toggle` the deeper sequence is the one
    /// masked; without it, `self` always is.
    pub fn mask(&self, other: &UriSequence, toggle: bool) -> UriSequence {
        let self_absolute = self.is_absolute();
        if self_absolute != other.is_absolute() {
            if self.to_string() == other.to_string() {
                return self.derived(Vec::new());
            }
            let winner = if self_absolute { self } else { other };
            return self.derived(winner.segments.clone());
        }

        let (long, short) = if toggle && other.depth() > self.depth() {
            (other, self)
        } else {
            (self, other)
        };

        let mut shared = 0;
        for (i, segment) in long.segments.iter().enumerate() {
            match short.segments.get(i) {
                Some(candidate) if candidate == segment => shared += 1,
                _ => break,
            }
        }
        self.derived(long.segments[shared..].to_vec())
    }

    /// Extract the common leading prefix of the two sequences:
    /// `/var/www/html` joint `/var/www/` is `/var/www`.
    pub fn joint(&self, other: &UriSequence) -> UriSequence {
        let (long, short) = if other.depth() > self.depth() {
            (other, self)
        } else {
            (self, other)
        };

        let mut similar: Vec<String> = Vec::new();
        for (i, segment) in long.segments.iter().enumerate() {
            match short.segments.get(i) {
                Some(candidate) if candidate == segment => similar.push(segment.clone()),
                _ => break,
            }
        }
        self.derived(similar)
    }

    /// Resolve `other` against this sequence, RFC 3986 style: an absolute
    /// `other` replaces the base outright, a relative one replaces the last
    /// segment.
    ///
    /// ```
    /// use uriseq::UriSequence;
    ///
    /// let base = UriSequence::from_string("/foo/");
    /// assert_eq!(base.merge(&UriSequence::from_string("bar")).to_string(), "/foo/bar");
    /// ```
    pub fn merge(&self, other: &UriSequence) -> UriSequence {
        if other.is_absolute() {
            return other.clone();
        }
        let mut base = self.mask(other, true).split(0, Some(-1));
        base.append(other);
        base
    }

    /// Slice out a sub-sequence. Negative `start` counts from the end, a
    /// negative `length` stops that many segments before the end, and no
    /// `length` runs to the end.
    pub fn split(&self, start: isize, length: Option<isize>) -> UriSequence {
        let len = self.segments.len() as isize;
        let begin = if start < 0 {
            cmp::max(len + start, 0)
        } else {
            cmp::min(start, len)
        };
        let end = match length {
            None => len,
            Some(length) if length < 0 => cmp::max(len + length, begin),
            Some(length) => cmp::min(begin + length, len),
        };
        self.derived(self.segments[begin as usize..end as usize].to_vec())
    }

    pub fn to_array(&self) -> SequenceParts {
        SequenceParts {
            segments: self.segments.clone(),
            separator: self.separator,
        }
    }

    /// The joined string with no encoding applied.
    pub fn to_raw_string(&self) -> String {
        self.assemble()
    }

    fn derived(&self, segments: Vec<String>) -> UriSequence {
        UriSequence {
            segments,
            separator: self.separator,
            encoder: self.encoder,
        }
    }

    // A root-marker head would double the separator if joined naively, so
    // it is dropped and the separator written back by hand. A bare empty
    // head is not a root and renders as nothing.
    fn assemble(&self) -> String {
        if self.segments.is_empty() {
            return String::new();
        }
        let separator = self.separator;
        if self.segments.len() == 1 && is_sep_segment(&self.segments[0], separator) {
            return separator.to_string();
        }

        let first = &self.segments[0];
        let (rooted, body) = if is_sep_segment(first, separator) {
            (true, &self.segments[1..])
        } else if first.is_empty() {
            (false, &self.segments[1..])
        } else {
            (false, &self.segments[..])
        };

        let mut out = String::new();
        if rooted {
            out.push(separator);
        }
        let mut join = false;
        for segment in body {
            if join {
                out.push(separator);
            }
            out.push_str(segment);
            join = true;
        }
        out
    }
}

impl Default for UriSequence {
    #[inline]
    fn default() -> Self {
        UriSequence::new()
    }
}

impl fmt::Display for UriSequence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.encoder.apply(&self.assemble()))
    }
}

impl FromStr for UriSequence {
    type Err = Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UriSequence::from_string(s))
    }
}

impl<T: ?Sized + AsRef<str>> From<&T> for UriSequence {
    #[inline]
    fn from(s: &T) -> UriSequence {
        UriSequence::from_string(s.as_ref())
    }
}

impl From<String> for UriSequence {
    #[inline]
    fn from(s: String) -> UriSequence {
        UriSequence::from_string(&s)
    }
}

impl From<SequenceParts> for UriSequence {
    #[inline]
    fn from(parts: SequenceParts) -> UriSequence {
        UriSequence::from_parts(parts)
    }
}

impl PartialEq for UriSequence {
    #[inline]
    fn eq(&self, other: &UriSequence) -> bool {
        self.separator == other.separator && self.segments == other.segments
    }
}

impl Eq for UriSequence {}

impl Hash for UriSequence {
    fn hash<H: Hasher>(&self, h: &mut H) {
        self.separator.hash(h);
        for segment in &self.segments {
            segment.hash(h);
        }
    }
}

impl<P: AsRef<str>> Extend<P> for UriSequence {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for path in iter {
            let other = UriSequence::from_string_with(path.as_ref(), self.separator);
            self.append(&other);
        }
    }

    #[cfg(rust_comp_feature = "unstable_features")]
    #[inline]
    fn extend_one(&mut self, path: P) {
        let other = UriSequence::from_string_with(path.as_ref(), self.separator);
        self.append(&other);
    }
}

impl<P: AsRef<str>> FromIterator<P> for UriSequence {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> UriSequence {
        let mut sequence = UriSequence::new();
        sequence.extend(iter);
        sequence
    }
}

impl Sequenced for UriSequence {
    #[inline]
    fn sequence(&self) -> &UriSequence {
        self
    }

    #[inline]
    fn sequence_mut(&mut self) -> &mut UriSequence {
        self
    }
}

#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        self.inner.next().map(String::as_str)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a str> {
        self.inner.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a UriSequence {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(path: &str) -> UriSequence {
        UriSequence::from_string(path)
    }

    #[test]
    fn test_parse_absolute_path() {
        let sequence = seq("/var/www/html");
        assert_eq!(sequence.segments(), ["/", "var", "www", "html"]);
        assert!(sequence.is_absolute());
        assert_eq!(sequence.depth(), 4);
    }

    #[test]
    fn test_parse_root_and_empty() {
        assert_eq!(seq("/").segments(), ["/"]);
        assert!(seq("/").is_absolute());
        assert!(seq("").segments().is_empty());
        assert!(!seq("").is_absolute());
        assert_eq!(seq("/").to_string(), "/");
        assert_eq!(seq("").to_string(), "");
    }

    #[test]
    fn test_parse_keeps_separator_runs() {
        let sequence = seq("a//b");
        assert_eq!(sequence.segments(), ["a", "", "b"]);
        assert_eq!(sequence.to_string(), "a//b");
    }

    #[test]
    fn test_parse_with_backslash_separator() {
        let sequence = UriSequence::from_string_with(r"\var\www", '\\');
        assert_eq!(sequence.segments(), ["\\", "var", "www"]);
        assert!(sequence.is_absolute());
    }

    #[test]
    fn test_drive_marker_is_absolute() {
        assert!(seq("c:/users/payam").is_absolute());
        assert!(!seq("var/www").is_absolute());
    }

    #[test]
    fn test_normalize_drops_dot_and_parent() {
        let mut sequence = UriSequence::from_segments(["a", ".", "b", ".."]);
        sequence.normalize().unwrap();
        assert_eq!(sequence.segments(), ["a"]);
    }

    #[test]
    fn test_normalize_never_climbs_above_root() {
        let mut sequence = UriSequence::from_segments(["/", "..", "etc"]);
        sequence.normalize().unwrap();
        assert_eq!(sequence.segments(), ["/", "etc"]);

        let mut drive = UriSequence::from_segments(["c:", "..", "x"]);
        drive.normalize().unwrap();
        assert_eq!(drive.segments(), ["c:", "x"]);
    }

    #[test]
    fn test_normalize_keeps_leading_parent() {
        let mut sequence = UriSequence::from_segments(["..", "a"]);
        sequence.normalize().unwrap();
        assert_eq!(sequence.segments(), ["..", "a"]);

        let mut stacked = UriSequence::from_segments(["a", "..", "..", "b"]);
        stacked.normalize().unwrap();
        assert_eq!(stacked.segments(), ["..", "b"]);
    }

    #[test]
    fn test_normalize_preserves_trailing_separator() {
        let mut sequence = seq("/var//./www/");
        sequence.normalize().unwrap();
        assert_eq!(sequence.segments(), ["/", "var", "www", ""]);
        assert_eq!(sequence.to_string(), "/var/www/");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for path in ["/var/../www/", "a/./b/..", "../x", "//a//b//", "/.."] {
            let mut once = seq(path);
            once.normalize().unwrap();
            let mut twice = once.clone();
            twice.normalize().unwrap();
            assert_eq!(once, twice, "normalize not idempotent for {path:?}");
        }
    }

    #[test]
    fn test_normalize_expands_home() {
        let mut sequence = seq("~/docs/notes.txt");
        sequence.normalize_with_home("/home/payam");
        assert_eq!(sequence.segments(), ["/", "home", "payam", "docs", "notes.txt"]);
    }

    #[test]
    fn test_append_strips_root_of_appended() {
        let mut sequence = seq("/var");
        sequence.append(&seq("/www/html"));
        assert_eq!(sequence.segments(), ["/", "var", "www", "html"]);
    }

    #[test]
    fn test_append_keeps_trailing_empty() {
        let mut sequence = seq("a/");
        sequence.append(&seq("b"));
        assert_eq!(sequence.segments(), ["a", "", "b"]);
    }

    #[test]
    fn test_prepend_marks_result_absolute() {
        let mut relative = seq("b");
        relative.prepend(&seq("/a"));
        assert_eq!(relative.to_string(), "/a/b");

        let mut absolute = seq("/b");
        absolute.prepend(&seq("a"));
        assert_eq!(absolute.to_string(), "/a/b");

        let mut plain = seq("b");
        plain.prepend(&seq("a"));
        assert_eq!(plain.to_string(), "a/b");
        assert!(!plain.is_absolute());
    }

    #[test]
    fn test_prepend_keeps_drive_marker() {
        let mut sequence = seq("b");
        sequence.prepend(&seq("c:/a"));
        assert_eq!(sequence.segments(), ["c:", "a", "b"]);
        assert!(sequence.is_absolute());
    }

    #[test]
    fn test_mask_subtracts_common_prefix() {
        let masked = seq("/var/www/html").mask(&seq("/var/www/"), true);
        assert_eq!(masked.segments(), ["html"]);
        assert_eq!(masked.to_string(), "html");
    }

    #[test]
    fn test_mask_mismatched_absoluteness() {
        assert_eq!(seq("/uri").mask(&seq("contact"), true).to_string(), "/uri");
        assert_eq!(seq("contact").mask(&seq("/uri"), true).to_string(), "/uri");
    }

    #[test]
    fn test_mask_equal_depth_keeps_self_long() {
        assert_eq!(seq("/uri/").mask(&seq("/uri/contact"), true).to_string(), "");
        assert_eq!(
            seq("/uri/").mask(&seq("/uri/contact/"), true).to_string(),
            "contact/"
        );
    }

    #[test]
    fn test_mask_without_toggle() {
        let masked = seq("/var/www/").mask(&seq("/var/www/html"), false);
        assert_eq!(masked.to_string(), "");
    }

    #[test]
    fn test_joint_common_prefix() {
        let similar = seq("/var/www/html").joint(&seq("/var/www/"));
        assert_eq!(similar.to_string(), "/var/www");
    }

    #[test]
    fn test_joint_is_prefix_of_both() {
        let a = seq("/var/www/html");
        let b = seq("/var/log/nginx");
        let similar = a.joint(&b);
        assert!(a.segments().starts_with(similar.segments()));
        assert!(b.segments().starts_with(similar.segments()));
        assert_eq!(similar.to_string(), "/var");
    }

    #[test]
    fn test_merge_absolute_wins() {
        assert_eq!(seq(".").merge(&seq("/bar")).to_string(), "/bar");
        assert_eq!(seq("/foo").merge(&seq("/bar")).to_string(), "/bar");
    }

    #[test]
    fn test_merge_relative_replaces_last_segment() {
        assert_eq!(seq("/foo").merge(&seq("bar")).to_string(), "/bar");
        assert_eq!(seq("/foo/").merge(&seq("bar")).to_string(), "/foo/bar");
        assert_eq!(seq("a/b").merge(&seq("c")).to_string(), "a/c");
    }

    #[test]
    fn test_split_slices_with_negative_indexes() {
        let sequence = seq("/var/www/html");
        assert_eq!(sequence.split(1, None).segments(), ["var", "www", "html"]);
        assert_eq!(sequence.split(-1, None).segments(), ["html"]);
        assert_eq!(sequence.split(0, Some(-1)).segments(), ["/", "var", "www"]);
        assert_eq!(sequence.split(1, Some(2)).segments(), ["var", "www"]);
        assert_eq!(sequence.split(10, None).depth(), 0);
        assert!(!sequence.split(0, Some(-1)).segments().contains(&"html".to_owned()));
    }

    #[test]
    fn test_append_then_mask_recovers_appended() {
        let base = seq("/var/www");
        let tail = seq("html/index");
        let mut combined = base.clone();
        combined.append(&tail);
        assert_eq!(combined.mask(&base, true).segments(), tail.segments());
    }

    #[test]
    fn test_to_string_encodes_unsafe_characters() {
        let sequence = UriSequence::from_segments(["", "my file.txt"]);
        assert_eq!(sequence.to_string(), "my%20file.txt");
    }

    #[test]
    fn test_to_string_root_without_doubled_separator() {
        assert_eq!(seq("/var/www").to_string(), "/var/www");
        assert_eq!(UriSequence::from_segments(["/", "var"]).to_string(), "/var");
    }

    #[test]
    fn test_raw_and_custom_encoders() {
        let mut sequence = UriSequence::from_segments(["my file.txt"]);
        sequence.set_encoder(EncodeStrategy::Raw);
        assert_eq!(sequence.to_string(), "my file.txt");
        assert_eq!(sequence.to_raw_string(), "my file.txt");

        let shout: fn(&str) -> String = str::to_uppercase;
        sequence.set_encoder(EncodeStrategy::Custom(shout));
        assert_eq!(sequence.to_string(), "MY FILE.TXT");
    }

    #[test]
    fn test_parts_round_trip() {
        let sequence = UriSequence::from_string_with(r"\var\www\html", '\\');
        let parts = sequence.to_array();
        assert_eq!(UriSequence::from_parts(parts), sequence);
    }

    #[test]
    fn test_extend_appends_parsed_paths() {
        let mut sequence = seq("a");
        sequence.extend(["b/c", "/d"]);
        assert_eq!(sequence.segments(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_iteration_yields_segments() {
        let sequence = seq("/var/www");
        let collected: Vec<&str> = (&sequence).into_iter().collect();
        assert_eq!(collected, ["/", "var", "www"]);
        assert_eq!(sequence.iter().next_back(), Some("www"));
    }
}

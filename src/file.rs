use std::{borrow::Cow, fmt};

use crate::{Sequenced, UriSequence, UriSequenceError, DEFAULT_SEPARATOR};

/// A file location: a directory [`UriSequence`] plus the file's basename
/// and extension kept as separate fields.
///
/// `/path/to/name.ext` parses into the sequence `/path/to`, basename
/// `name` and extension `ext`; a trailing separator or a `.`/`..` tail
/// means the whole string is a directory and there is no file part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePath {
    path: UriSequence,
    basename: String,
    extension: Option<String>,
}

// A leading dot marks a hidden file, not an empty stem, and `..` never
// splits.
fn rsplit_file_at_dot(file: &str) -> (Option<&str>, Option<&str>) {
    if file == ".." {
        return (Some(file), None);
    }

    let mut iter = file.rsplitn(2, '.');
    let after = iter.next();
    let before = iter.next();
    if before == Some("") {
        (Some(file), None)
    } else {
        (before, after)
    }
}

impl FilePath {
    #[inline]
    pub fn new() -> FilePath {
        FilePath::with_separator(DEFAULT_SEPARATOR)
    }

    pub fn with_separator(separator: char) -> FilePath {
        FilePath {
            path: UriSequence::with_separator(separator),
            basename: String::new(),
            extension: None,
        }
    }

    pub fn from_string<S: AsRef<str>>(path: S) -> FilePath {
        FilePath::from_string_with(path, DEFAULT_SEPARATOR)
    }

    pub fn from_string_with<S: AsRef<str>>(path: S, separator: char) -> FilePath {
        let raw = path.as_ref();
        let mut parsed = FilePath::with_separator(separator);

        if raw.is_empty() {
            return parsed;
        }
        if raw.ends_with(separator) {
            parsed.path.set_path(raw);
            return parsed;
        }

        let (directory, file) = match raw.rfind(separator) {
            Some(0) => raw.split_at(separator.len_utf8()),
            Some(at) => (&raw[..at], &raw[at + separator.len_utf8()..]),
            None => ("", raw),
        };
        if file == "." || file == ".." {
            parsed.path.set_path(raw);
            return parsed;
        }

        let (before, after) = rsplit_file_at_dot(file);
        parsed.path.set_path(directory);
        parsed.basename = before.or(after).unwrap_or("").to_owned();
        parsed.extension = before.and(after).map(str::to_owned);
        parsed
    }

    #[inline]
    pub fn path(&self) -> &UriSequence {
        &self.path
    }

    #[inline]
    pub fn path_mut(&mut self) -> &mut UriSequence {
        &mut self.path
    }

    #[inline]
    pub fn basename(&self) -> &str {
        &self.basename
    }

    #[inline]
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Basename and extension joined with a dot; the dot is omitted when
    /// there is no extension.
    pub fn filename(&self) -> String {
        match self.extension.as_deref() {
            Some(extension) if !extension.is_empty() => {
                format!("{}.{}", self.basename, extension)
            }
            _ => self.basename.clone(),
        }
    }

    pub fn set_path<P: Into<UriSequence>>(&mut self, path: P) -> &mut Self {
        let separator = self.path.separator();
        self.path = path.into();
        self.path.set_separator(separator);
        self
    }

    pub fn set_basename<S: Into<String>>(&mut self, basename: S) -> &mut Self {
        self.basename = basename.into();
        self
    }

    pub fn set_extension<S: Into<String>>(
        &mut self,
        extension: S,
    ) -> Result<&mut Self, UriSequenceError> {
        let extension = extension.into();
        if extension.contains(self.path.separator()) {
            return Err(UriSequenceError::InvalidArgumentError {
                given: Cow::Owned(extension),
            });
        }
        self.extension = (!extension.is_empty()).then_some(extension);
        Ok(self)
    }

    #[inline]
    pub fn is_absolute(&self) -> bool {
        self.path.is_absolute()
    }

    pub fn normalize(&mut self) -> Result<&mut Self, UriSequenceError> {
        self.path.normalize()?;
        Ok(self)
    }

    pub fn normalize_with_home(&mut self, home: &str) -> &mut Self {
        self.path.normalize_with_home(home);
        self
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = self.path.separator();
        let mut out = self.path.to_raw_string();
        let filename = self.filename();
        if !filename.is_empty() {
            if !out.is_empty() && !out.ends_with(separator) {
                out.push(separator);
            }
            out.push_str(&filename);
        }
        formatter.write_str(&self.path.encoder().apply(&out))
    }
}

impl<T: ?Sized + AsRef<str>> From<&T> for FilePath {
    #[inline]
    fn from(path: &T) -> FilePath {
        FilePath::from_string(path.as_ref())
    }
}

impl Sequenced for FilePath {
    #[inline]
    fn sequence(&self) -> &UriSequence {
        &self.path
    }

    #[inline]
    fn sequence_mut(&mut self) -> &mut UriSequence {
        &mut self.path
    }
}

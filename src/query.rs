use std::fmt;

use percent_encoding::percent_decode_str;

use crate::encode::encode_form;

/// Ordered query-string parameters.
///
/// Parsing never fails: malformed chunks decay to bare keys with empty
/// values and empty chunks are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

fn decode_component(raw: &str) -> String {
    let folded = raw.replace('+', " ");
    percent_decode_str(&folded).decode_utf8_lossy().into_owned()
}

impl QueryParams {
    #[inline]
    pub fn new() -> QueryParams {
        QueryParams { params: Vec::new() }
    }

    pub fn parse(query: &str) -> QueryParams {
        let mut params = Vec::new();
        for chunk in query.trim_start_matches('?').split('&') {
            if chunk.is_empty() {
                continue;
            }
            let (key, value) = match chunk.split_once('=') {
                Some((key, value)) => (key, value),
                None => (chunk, ""),
            };
            params.push((decode_component(key), decode_component(value)));
        }
        QueryParams { params }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value.as_str())
    }

    /// Replace the first value stored under `key`, or push a new pair;
    /// insertion order is preserved either way.
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(candidate, _)| *candidate == key) {
            Some(pair) => pair.1 = value,
            None => self.params.push((key, value)),
        }
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.params.iter().position(|(candidate, _)| candidate == key)?;
        Some(self.params.remove(index).1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    #[inline]
    pub fn clear(&mut self) -> &mut Self {
        self.params.clear();
        self
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut join = false;
        for (key, value) in &self.params {
            if join {
                formatter.write_str("&")?;
            }
            write!(formatter, "{}={}", encode_form(key), encode_form(value))?;
            join = true;
        }
        Ok(())
    }
}

impl From<&str> for QueryParams {
    #[inline]
    fn from(query: &str) -> QueryParams {
        QueryParams::parse(query)
    }
}

impl From<String> for QueryParams {
    #[inline]
    fn from(query: String) -> QueryParams {
        QueryParams::parse(&query)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> QueryParams {
        QueryParams {
            params: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for QueryParams {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

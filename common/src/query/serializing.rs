use std::{borrow::Cow, fmt};

use super::{FilterName, ParsedQuery};

/// Turns a parsed query into `?query=..&at=..&notebook=..`.
///
/// All three parameters are always present, in [`FilterName::ALL`] order. Absent
/// filters are sent empty and values are percent-encoded.
pub fn serialize(parsed: &ParsedQuery) -> String {
    let mut serialized = String::new();
    for (i, filter) in FilterName::ALL.into_iter().enumerate() {
        serialized.push(if i == 0 { '?' } else { '&' });
        serialized.push_str(filter.as_str());
        serialized.push('=');
        serialized.push_str(&urlencoding::encode(parsed.get(filter).unwrap_or_default()));
    }
    serialized
}

impl ParsedQuery {
    pub fn to_query_string(&self) -> String {
        serialize(self)
    }

    /// Reads back a url query string. Unknown parameters are skipped and
    /// undecodable values are kept as they are.
    pub fn from_query_string(query_string: &str) -> ParsedQuery {
        let query_string = query_string.strip_prefix('?').unwrap_or(query_string);
        let mut parsed = ParsedQuery::default();
        let mut query_seen = false;

        for pair in query_string.split('&').filter(|pair| !pair.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            let Some(filter) = FilterName::from_name(name) else { continue };
            let value = urlencoding::decode(value).unwrap_or(Cow::Borrowed(value));
            match filter {
                FilterName::Query if !query_seen => {
                    parsed.query = value.into_owned();
                    query_seen = true;
                }
                FilterName::Query => (),
                _ => parsed.set_first(filter, &value),
            }
        }

        parsed
    }
}

impl fmt::Display for ParsedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

use std::{convert::Infallible, str::FromStr};

use pest::{Parser, iterators::Pair};
use pest_derive::Parser;

use super::{FilterName, ParsedQuery};

#[derive(Parser)]
#[grammar = "query/query.pest"]
struct QueryParser;

/// The value following a marker, empty when the marker stands alone.
fn marker_value<'i>(marker: Pair<'i, Rule>) -> &'i str {
    marker.into_inner().next().map(|value| value.as_str().trim()).unwrap_or_default()
}

/// Interprets search-box text.
///
/// `@value` sets `at`, `+value` sets `notebook` and whatever is left becomes the
/// free-text `query`. Never fails: malformed markers only leave filters unset.
pub fn parse(raw: &str) -> ParsedQuery {
    let tokens = match QueryParser::parse(Rule::query, raw) {
        Ok(mut pairs) => pairs.next().map(Pair::into_inner),
        Err(_) => None,
    };
    // the grammar accepts any input
    let Some(tokens) = tokens else {
        return ParsedQuery { query: raw.trim().to_owned(), ..Default::default() };
    };

    let mut parsed = ParsedQuery::default();
    let mut residual = String::with_capacity(raw.len());
    for token in tokens {
        let filter = match token.as_rule() {
            Rule::text => {
                residual.push_str(token.as_str());
                continue;
            }
            Rule::at => FilterName::At,
            Rule::notebook => FilterName::Notebook,
            _ => continue,
        };
        residual.truncate(residual.trim_end().len());
        parsed.set_first(filter, marker_value(token));
    }

    parsed.query = residual.trim().to_owned();
    parsed
}

impl FromStr for ParsedQuery {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}

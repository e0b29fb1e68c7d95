mod parsing;
pub use parsing::parse;
mod serializing;
pub use serializing::serialize;

use serde::{Deserialize, Serialize};

/// Names of the parameters a search request carries, in the order they are sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterName {
    // free text
    Query,
    // @value
    At,
    // +value
    Notebook,
}

impl FilterName {
    pub const ALL: [FilterName; 3] = [FilterName::Query, FilterName::At, FilterName::Notebook];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterName::Query => "query",
            FilterName::At => "at",
            FilterName::Notebook => "notebook",
        }
    }

    pub fn from_name(name: &str) -> Option<FilterName> {
        FilterName::ALL.into_iter().find(|filter| filter.as_str() == name)
    }
}

/// A search-box string split into free text and named filters.
///
/// Built fresh for every search with [`parse`] and turned into a url query
/// string with [`serialize`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub query: String,
    pub at: Option<String>,
    pub notebook: Option<String>,
}

impl ParsedQuery {
    pub fn get(&self, filter: FilterName) -> Option<&str> {
        match filter {
            FilterName::Query => Some(self.query.as_str()),
            FilterName::At => self.at.as_deref(),
            FilterName::Notebook => self.notebook.as_deref(),
        }
    }

    /// Whether any named filter (anything but the free text) is set.
    pub fn has_filters(&self) -> bool {
        self.at.is_some() || self.notebook.is_some()
    }

    /// Stores `value` unless the filter already holds one. Empty values are ignored.
    fn set_first(&mut self, filter: FilterName, value: &str) {
        let slot = match filter {
            // residual text, assembled by the caller
            FilterName::Query => return,
            FilterName::At => &mut self.at,
            FilterName::Notebook => &mut self.notebook,
        };
        if !value.is_empty() {
            slot.get_or_insert_with(|| value.to_owned());
        }
    }
}

use super::*;

/// What a search returned.
///
/// Current servers answer with note records. Older ones render the result
/// cards themselves and send an html fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResults {
    Notes(Vec<Note>),
    Html(String),
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        match self {
            SearchResults::Notes(notes) => notes.is_empty(),
            SearchResults::Html(html) => html.trim().is_empty(),
        }
    }
}

fn looks_like_html(text: &str) -> bool {
    let text = text.trim_start();
    text.is_empty() || text.starts_with('<')
}

impl ApiClient {
    pub async fn search(&self, query: &ParsedQuery) -> Result<SearchResults, ApiError> {
        info!("Searching for {query:?}");
        let text = self.request(self.http.get(self.url(format!("/search{query}")))).await?;

        match serde_json::from_str::<Vec<Note>>(&text) {
            Ok(notes) => {
                debug!("Got {} notes", notes.len());
                Ok(SearchResults::Notes(notes))
            }
            Err(_) if looks_like_html(&text) => {
                debug!("Got an html fragment of {} bytes", text.len());
                Ok(SearchResults::Html(text))
            }
            Err(e) => Err(e.into()),
        }
    }
}

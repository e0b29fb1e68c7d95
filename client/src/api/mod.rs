use crate::prelude::*;

mod search;
mod notes;
mod notebooks;
pub use search::*;

#[derive(Debug)]
pub enum ApiError {
    Reqwest(reqwest::Error),
    Json(serde_json::Error),
    Io(io::Error),
    /// Rejected locally, before anything was sent.
    InvalidInput(&'static str),
    BadRequest(String),
    Server(String),
    Unknown(StatusCode, String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Reqwest(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Json(e)
    }
}

impl From<io::Error> for ApiError {
    fn from(e: io::Error) -> Self {
        ApiError::Io(e)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Reqwest(e) => write!(f, "Request failed: {e}"),
            ApiError::Json(e) => write!(f, "Invalid response: {e}"),
            ApiError::Io(e) => write!(f, "Io error: {e}"),
            ApiError::InvalidInput(e) => write!(f, "{e}"),
            ApiError::BadRequest(e) => write!(f, "{e}"),
            ApiError::Server(e) => write!(f, "Server error: {e}"),
            ApiError::Unknown(status, e) => write!(f, "Unexpected response ({status}): {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Where a note's image can be downloaded and its details viewed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteLinks {
    pub download: String,
    pub view: String,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    server: String,
    http: Client,
}

impl ApiClient {
    pub fn new(server: impl Into<String>) -> ApiClient {
        ApiClient::with_client(server, Client::new())
    }

    pub fn with_client(server: impl Into<String>, http: Client) -> ApiClient {
        let mut server = server.into();
        server.truncate(server.trim_end_matches('/').len());
        ApiClient { server, http }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    fn url(&self, path: impl AsRef<str>) -> String {
        format!("{}{}", self.server, path.as_ref())
    }

    pub fn links(&self, note: &Note) -> NoteLinks {
        let uuid = urlencoding::encode(&note.uuid);
        NoteLinks {
            download: self.url(format!("/uploads/{uuid}")),
            view: self.url(format!("/note/{uuid}")),
        }
    }

    /// Sends the request and returns the body of a successful response.
    async fn request(&self, request: RequestBuilder) -> Result<String, ApiError> {
        use ApiError::*;

        let response = request.send().await?;
        let status = response.status();
        debug!("{} {status}", response.url());
        let text = response.text().await?;

        match status.as_u16() {
            200 => Ok(text),
            400 => Err(BadRequest(error_message(text))),
            500 => Err(Server(text)),
            _ => Err(Unknown(status, text)),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: impl AsRef<str>) -> Result<T, ApiError> {
        let text = self.request(self.http.get(self.url(path))).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// For endpoints answering with a bare status body.
    async fn expect_ok(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let text = self.request(request).await?;
        let body: StatusBody = serde_json::from_str(&text)?;
        match body.status {
            Status::Ok => {
                if let Some(message) = body.message {
                    trace!("Server says: {message}");
                }
                Ok(())
            }
            Status::Error => Err(ApiError::BadRequest(body.message.unwrap_or_default())),
        }
    }
}

/// Error replies carry a status body, but proxies in front of the server may not.
fn error_message(text: String) -> String {
    match serde_json::from_str::<StatusBody>(&text) {
        Ok(StatusBody { message: Some(message), .. }) => message,
        _ => text,
    }
}

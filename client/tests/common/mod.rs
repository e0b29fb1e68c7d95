#![allow(dead_code)]

pub use logger::*;

pub use clearfile::prelude::*;
pub use serde_json::{json, Value};
pub use std::{collections::HashMap, sync::{Arc, Mutex}};

use futures::TryStreamExt;
use warp::{Buf, Filter, Reply, http::StatusCode, multipart::FormData, reply::Response};

pub const RECEIPT_UUID: &str = "0b7c2a4e-6f1d-4c4e-9a55-1f2d3c4b5a69";
pub const LETTER_UUID: &str = "5d1e8f90-3b2a-4e7c-8d6f-0a9b8c7d6e5f";
/// Deleting this note makes the mock server fail like an unhandled exception would.
pub const CRASHING_UUID: &str = "crash";

/// A multipart field as the mock server received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub file_name: Option<String>,
    pub data: Vec<u8>,
}

/// Everything the mock server was sent, for assertions.
#[derive(Debug, Default)]
pub struct Received {
    pub searches: Vec<ParsedQuery>,
    pub uploads: Vec<Vec<Field>>,
    pub deleted_notes: Vec<String>,
    pub deleted_tags: Vec<i64>,
    pub notebooks: Vec<String>,
    pub updates: Vec<Value>,
}

pub fn sample_notes() -> Vec<Value> {
    vec![
        json!({
            "uuid": RECEIPT_UUID,
            "name": "Grocery receipt",
            "tags": [{"id": 1, "tag": "groceries"}, {"id": 2, "tag": "march"}],
            "ocr_text": "FRESH MARKET TOTAL 12.50",
            "location": "home",
            "notebook": {"id": 1, "name": "Bills"}
        }),
        json!({
            "uuid": LETTER_UUID,
            "name": "Letter from the bank",
            "tags": [{"id": 3, "tag": "bank"}],
            "ocr_text": "Dear customer",
            "location": null
        }),
    ]
}

fn ok() -> Response {
    warp::reply::json(&json!({"status": "ok", "message": null})).into_response()
}

fn bad_request(message: &str) -> Response {
    warp::reply::with_status(warp::reply::json(&json!({"status": "error", "message": message})), StatusCode::BAD_REQUEST).into_response()
}

/// Reads every part to the end before asking the form for the next one.
async fn read_form(mut form: FormData) -> Result<Vec<Field>, warp::Error> {
    let mut fields = Vec::new();
    while let Some(mut part) = form.try_next().await? {
        let name = part.name().to_owned();
        let file_name = part.filename().map(str::to_owned);
        let mut data = Vec::new();
        while let Some(chunk) = part.data().await {
            data.extend_from_slice(chunk?.chunk());
        }
        fields.push(Field { name, file_name, data });
    }
    Ok(fields)
}

/// A stand-in for the clearfile server, listening on an ephemeral local port.
pub struct MockServer {
    pub url: String,
    pub received: Arc<Mutex<Received>>,
}

impl MockServer {
    /// With `html_results`, searches answer the way older servers did: with rendered result cards.
    pub async fn start(html_results: bool) -> MockServer {
        init_logger();
        let received = Arc::new(Mutex::new(Received::default()));

        let state = Arc::clone(&received);
        let search = warp::get()
            .and(warp::path!("search"))
            .and(warp::query::raw().or(warp::any().map(String::new)).unify())
            .map(move |raw: String| {
                let params = ParsedQuery::from_query_string(&raw);
                let notebook = params.notebook.clone();
                state.lock().unwrap().searches.push(params);
                if html_results {
                    return warp::reply::html("\n<li class=\"clearfile-search-result\"><b>Grocery receipt</b></li>\n").into_response();
                }
                let notes = sample_notes()
                    .into_iter()
                    .filter(|note| match &notebook {
                        Some(notebook) => note["notebook"]["name"].as_str().is_some_and(|name| name.eq_ignore_ascii_case(notebook)),
                        None => true,
                    })
                    .collect::<Vec<_>>();
                warp::reply::json(&notes).into_response()
            });

        let note = warp::get()
            .and(warp::path!("note" / String))
            .map(|uuid: String| {
                match sample_notes().into_iter().find(|note| note["uuid"] == uuid.as_str()) {
                    Some(note) => warp::reply::json(&note).into_response(),
                    None => bad_request("Invalid UUID for note."),
                }
            });

        let state = Arc::clone(&received);
        let upload = warp::post()
            .and(warp::path!("upload"))
            .and(warp::multipart::form().max_length(1_000_000))
            .and_then(move |form: FormData| {
                let state = Arc::clone(&state);
                async move {
                    let fields = read_form(form).await.map_err(|_| warp::reject())?;
                    let has = |name: &str| fields.iter().any(|field| field.name == name);
                    let reply = match has("image") && has("title") {
                        true => ok(),
                        false => bad_request("Client must supply both an image and a title field for note uploads."),
                    };
                    state.lock().unwrap().uploads.push(fields);
                    Ok::<_, warp::Rejection>(reply)
                }
            });

        let state = Arc::clone(&received);
        let delete_note = warp::get()
            .and(warp::path!("delete" / "note" / String))
            .map(move |uuid: String| {
                if uuid == CRASHING_UUID {
                    return warp::reply::with_status("Internal Server Error", StatusCode::INTERNAL_SERVER_ERROR).into_response();
                }
                state.lock().unwrap().deleted_notes.push(uuid);
                ok()
            });

        let state = Arc::clone(&received);
        let delete_tag = warp::get()
            .and(warp::path!("delete" / "tag" / String))
            .map(move |id: String| {
                let Ok(id) = id.parse::<i64>() else {
                    return bad_request("Tag must be an integer.");
                };
                state.lock().unwrap().deleted_tags.push(id);
                ok()
            });

        let state = Arc::clone(&received);
        let add_notebook = warp::get()
            .and(warp::path!("add" / "notebook"))
            .and(warp::query::<HashMap<String, String>>())
            .map(move |params: HashMap<String, String>| {
                let Some(name) = params.get("name") else {
                    return bad_request("Client must supply a valid notebook name.");
                };
                state.lock().unwrap().notebooks.push(name.to_owned());
                ok()
            });

        let state = Arc::clone(&received);
        let update_note = warp::post()
            .and(warp::path!("update" / "note"))
            .and(warp::body::json())
            .map(move |body: Value| {
                if body.get("uuid").is_none() {
                    return bad_request("Client must supply UUID to server.");
                }
                state.lock().unwrap().updates.push(body);
                ok()
            });

        let routes = search
            .or(note)
            .or(upload)
            .or(delete_note)
            .or(delete_tag)
            .or(add_notebook)
            .or(update_note);

        let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        MockServer {
            url: format!("http://{addr}"),
            received,
        }
    }

    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.url.as_str())
    }

    pub fn received(&self) -> std::sync::MutexGuard<'_, Received> {
        self.received.lock().unwrap()
    }
}

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Absent until the server has stored the tag.
    #[serde(default)]
    pub id: Option<i64>,
    pub tag: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    pub id: i64,
    pub name: String,
}

/// A scanned note as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub ocr_text: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notebook: Option<Notebook>,
}

impl Note {
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|tag| tag.tag.as_str()).collect()
    }
}

/// Changes to apply to a note. Fields left to `None` are not sent.
///
/// Tags are a full replacement list; the server works out which ones to add and remove.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteUpdate {
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl NoteUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.notebook.is_none() && self.location.is_none() && self.tags.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

/// Body of every server reply that carries no data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBody {
    pub status: Status,
    #[serde(default)]
    pub message: Option<String>,
}

use super::*;
use reqwest::{header::CONTENT_TYPE, multipart::{Form, Part}};

impl ApiClient {
    pub async fn note(&self, uuid: &str) -> Result<Note, ApiError> {
        self.get(format!("/note/{}", urlencoding::encode(uuid))).await
    }

    /// Uploads an image as a new note. The server reads its text and picks the tags.
    pub async fn upload(&self, title: &str, image: &Path) -> Result<(), ApiError> {
        if title.trim().is_empty() {
            return Err(ApiError::InvalidInput("A note needs a title"));
        }
        let data = tokio::fs::read(image).await?;
        let file_name = image
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("upload"));
        info!("Uploading {} ({} bytes) as {title:?}", image.display(), data.len());

        let form = Form::new()
            .text("title", title.to_owned())
            .part("image", Part::bytes(data).file_name(file_name));
        self.expect_ok(self.http.post(self.url("/upload")).multipart(form)).await
    }

    pub async fn delete_note(&self, uuid: &str) -> Result<(), ApiError> {
        info!("Deleting note {uuid}");
        self.expect_ok(self.http.get(self.url(format!("/delete/note/{}", urlencoding::encode(uuid))))).await
    }

    pub async fn delete_tag(&self, id: i64) -> Result<(), ApiError> {
        info!("Deleting tag {id}");
        self.expect_ok(self.http.get(self.url(format!("/delete/tag/{id}")))).await
    }

    pub async fn update_note(&self, update: &NoteUpdate) -> Result<(), ApiError> {
        if update.is_empty() {
            return Err(ApiError::InvalidInput("Nothing to update"));
        }
        info!("Updating note {}", update.uuid);
        let request = self.http
            .post(self.url("/update/note"))
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(update)?);
        self.expect_ok(request).await
    }
}

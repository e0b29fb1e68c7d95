use super::*;

impl ApiClient {
    pub async fn add_notebook(&self, name: &str) -> Result<(), ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::InvalidInput("A notebook needs a name"));
        }
        info!("Adding notebook {name}");
        let url = self.url(format!("/add/notebook?name={}", urlencoding::encode(name)));
        self.expect_ok(self.http.get(url)).await
    }
}

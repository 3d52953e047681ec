use super::{
    client::ApiClient,
    types::{ApiError, BookRecord},
};

impl ApiClient {
    pub async fn list_books(&self) -> Result<Vec<BookRecord>, ApiError> {
        self.get_json("/books").await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::ApiClient;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn lists_the_catalog() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/books");
            then.status(200).json_body(serde_json::json!([
                {
                    "id": "b1",
                    "title": "The Name of the Wind",
                    "author": "Patrick Rothfuss",
                    "created_at": "2025-11-02T09:30:00Z"
                }
            ]));
        });

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let books = api.list_books().await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].author, "Patrick Rothfuss");
    }
}

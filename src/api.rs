//! Book catalog API client.
//!
//! Declarative binding of the five logical operations to HTTP verbs and
//! paths under `/livros` on a fixed origin. Serialization is by field
//! name with no versioning; the server ignores fields it does not know.

use std::sync::Arc;

use crate::error::ApiError;
use crate::models::Book;
use crate::traits::{Headers, HttpClient, Response};

/// Production origin of the book catalog service.
pub const DEFAULT_BASE_URL: &str = "https://libraryapi-1-ws4a.onrender.com";

/// Client for the book catalog REST API.
///
/// Stateless beyond the base URL; every call is an independent HTTP
/// round-trip through the injected [`HttpClient`].
#[derive(Clone)]
pub struct BookApi {
    /// Base URL for the catalog API
    base_url: String,
    /// Transport used for all requests
    client: Arc<dyn HttpClient>,
}

impl BookApi {
    /// Create a new BookApi against the production origin.
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL)
    }

    /// Create a new BookApi with a custom base URL.
    ///
    /// A trailing slash on the base URL is tolerated.
    pub fn with_base_url(client: Arc<dyn HttpClient>, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/livros", self.base_url)
    }

    fn resource_url(&self, id: &str) -> String {
        format!("{}/livros/{}", self.base_url, id)
    }

    fn json_headers() -> Headers {
        Headers::from([("Content-Type".to_string(), "application/json".to_string())])
    }

    /// Fetch the full book collection, in server order.
    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let url = self.collection_url();
        tracing::debug!(%url, "listing books");
        let response = self.client.get(&url, &Headers::new()).await?;
        check_status(&response)?;
        response.json().map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Fetch a single book by id.
    pub async fn get_book(&self, id: &str) -> Result<Book, ApiError> {
        let url = self.resource_url(id);
        tracing::debug!(%url, "fetching book");
        let response = self.client.get(&url, &Headers::new()).await?;
        check_status(&response)?;
        response.json().map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Create a book; returns the server-assigned entity including its id.
    pub async fn create_book(&self, book: &Book) -> Result<Book, ApiError> {
        let url = self.collection_url();
        let body = serde_json::to_string(book).map_err(|e| ApiError::Serialize(e.to_string()))?;
        tracing::debug!(%url, titulo = %book.titulo, "creating book");
        let response = self.client.post(&url, &body, &Self::json_headers()).await?;
        check_status(&response)?;
        response.json().map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Replace the book stored at `id`.
    pub async fn update_book(&self, id: &str, book: &Book) -> Result<Book, ApiError> {
        let url = self.resource_url(id);
        let body = serde_json::to_string(book).map_err(|e| ApiError::Serialize(e.to_string()))?;
        tracing::debug!(%url, "updating book");
        let response = self.client.put(&url, &body, &Self::json_headers()).await?;
        check_status(&response)?;
        response.json().map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Delete the book stored at `id`.
    ///
    /// Any 2xx status counts as success; the response body is ignored.
    pub async fn delete_book(&self, id: &str) -> Result<(), ApiError> {
        let url = self.resource_url(id);
        tracing::debug!(%url, "deleting book");
        let response = self.client.delete(&url, &Headers::new()).await?;
        check_status(&response)?;
        Ok(())
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Server {
        status: response.status,
        message: response.text().unwrap_or_default(),
    })
}

//! Observable book list state.
//!
//! [`BookStore`] owns the in-memory snapshot of the book list and keeps it
//! eventually consistent with the server by refetching the full collection
//! after every mutation. The snapshot lives in a `tokio::sync::watch`
//! channel and is only ever replaced wholesale, never mutated in place;
//! overlapping refetches race with last-completion-wins semantics.
//!
//! The store is the terminal error boundary: submit and refetch failures
//! are logged and discarded, leaving the previous snapshot visible.
//! Surfacing an explicit error state to callers is tracked in DESIGN.md.

use std::sync::Arc;

use tokio::sync::watch;

use crate::models::Book;
use crate::repository::BookRepository;

/// Holder of the observable book list snapshot.
///
/// Cheap to clone; clones share the same snapshot channel. Mutation
/// methods take `&self` and may run as independent tasks — no mutual
/// exclusion is imposed between overlapping calls.
#[derive(Clone)]
pub struct BookStore {
    repository: Arc<BookRepository>,
    snapshot: Arc<watch::Sender<Vec<Book>>>,
}

impl BookStore {
    /// Create a store and perform the initial fetch.
    ///
    /// A failed initial fetch leaves the snapshot empty; no error escapes.
    pub async fn new(repository: BookRepository) -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        let store = Self {
            repository: Arc::new(repository),
            snapshot: Arc::new(tx),
        };
        store.fetch_books().await;
        store
    }

    /// Current snapshot of the book list.
    pub fn books(&self) -> Vec<Book> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Book>> {
        self.snapshot.subscribe()
    }

    /// Replace the snapshot with the remote list.
    ///
    /// On failure the previous snapshot stays in place and the error is
    /// logged, not propagated.
    pub async fn fetch_books(&self) {
        match self.repository.get_all_books().await {
            Ok(books) => {
                self.snapshot.send_replace(books);
            }
            Err(err) => {
                tracing::warn!(error = %err, "book list fetch failed, keeping previous snapshot");
            }
        }
    }

    /// Create a book from raw form fields, then refetch.
    ///
    /// The year field is parsed from text, defaulting to 0 when it is not
    /// a valid integer. The refetch runs whether or not the insert
    /// succeeded.
    #[allow(clippy::too_many_arguments)]
    pub async fn add_book(
        &self,
        imagem: &str,
        titulo: &str,
        isbn: &str,
        autor: &str,
        editora: &str,
        ano_publicacao: &str,
        genero: &str,
        preco: &str,
    ) {
        let book = Book {
            id: None,
            imagem: imagem.to_string(),
            titulo: titulo.to_string(),
            isbn: isbn.to_string(),
            autor: autor.to_string(),
            editora: editora.to_string(),
            ano_publicacao: ano_publicacao.parse().unwrap_or(0),
            genero: genero.to_string(),
            preco: preco.to_string(),
        };
        if let Err(err) = self.repository.insert(&book).await {
            tracing::warn!(error = %err, titulo = %book.titulo, "book creation failed");
        }
        self.fetch_books().await;
    }

    /// Submit a full replace of `book`, then refetch.
    pub async fn update_book(&self, book: &Book) {
        if let Err(err) = self.repository.update(book).await {
            tracing::warn!(error = %err, "book update failed");
        }
        self.fetch_books().await;
    }

    /// Delete `book`, then refetch.
    pub async fn delete_book(&self, book: &Book) {
        if let Err(err) = self.repository.delete(book).await {
            tracing::warn!(error = %err, "book deletion failed");
        }
        self.fetch_books().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::api::BookApi;
    use crate::traits::{HttpError, Response};
    use bytes::Bytes;

    fn repository_over(mock: &MockHttpClient) -> BookRepository {
        BookRepository::new(BookApi::with_base_url(Arc::new(mock.clone()), "http://mock"))
    }

    fn list_body(entries: &[(&str, &str)]) -> String {
        let items: Vec<String> = entries
            .iter()
            .map(|(id, titulo)| {
                format!(
                    r#"{{"id":"{id}","imagem":"","titulo":"{titulo}","isbn":"","autor":"","editora":"","anoPublicacao":2000,"genero":"","preco":"10"}}"#
                )
            })
            .collect();
        format!("[{}]", items.join(","))
    }

    #[tokio::test]
    async fn initial_fetch_fills_snapshot() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "GET",
            "http://mock/livros",
            MockResponse::Success(Response::new(
                200,
                Bytes::from(list_body(&[("1", "A"), ("2", "B")])),
            )),
        );

        let store = BookStore::new(repository_over(&mock)).await;
        let books = store.books();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].titulo, "A");
    }

    #[tokio::test]
    async fn failed_initial_fetch_leaves_snapshot_empty() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "GET",
            "http://mock/livros",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let store = BookStore::new(repository_over(&mock)).await;
        assert!(store.books().is_empty());
    }

    #[tokio::test]
    async fn failed_refetch_keeps_previous_snapshot() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "GET",
            "http://mock/livros",
            MockResponse::Success(Response::new(200, Bytes::from(list_body(&[("1", "A")])))),
        );

        let store = BookStore::new(repository_over(&mock)).await;
        assert_eq!(store.books().len(), 1);

        // Later fetches fail; the previously displayed list must survive
        mock.set_response(
            "GET",
            "http://mock/livros",
            MockResponse::Error(HttpError::Timeout("30s".to_string())),
        );
        store.fetch_books().await;

        assert_eq!(store.books().len(), 1);
        assert_eq!(store.books()[0].titulo, "A");
    }

    #[tokio::test]
    async fn repeated_fetch_yields_equal_snapshots() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "GET",
            "http://mock/livros",
            MockResponse::Success(Response::new(
                200,
                Bytes::from(list_body(&[("1", "A"), ("2", "B")])),
            )),
        );

        let store = BookStore::new(repository_over(&mock)).await;
        let first = store.books();
        store.fetch_books().await;
        assert_eq!(first, store.books());
    }

    #[tokio::test]
    async fn add_book_parses_year_with_zero_fallback() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "GET",
            "http://mock/livros",
            MockResponse::Success(Response::new(200, Bytes::from("[]"))),
        );
        mock.set_response(
            "POST",
            "http://mock/livros",
            MockResponse::Success(Response::new(
                201,
                Bytes::from(
                    r#"{"id":"1","imagem":"","titulo":"X","isbn":"","autor":"","editora":"","anoPublicacao":2020,"genero":"","preco":"10"}"#,
                ),
            )),
        );

        let store = BookStore::new(repository_over(&mock)).await;
        store
            .add_book("", "X", "", "", "", "2020", "", "10")
            .await;
        store
            .add_book("", "Y", "", "", "", "abc", "", "10")
            .await;

        let posts: Vec<serde_json::Value> = mock
            .get_requests()
            .iter()
            .filter(|r| r.method == "POST")
            .map(|r| serde_json::from_str(r.body.as_deref().unwrap()).unwrap())
            .collect();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0]["anoPublicacao"], 2020);
        assert_eq!(posts[1]["anoPublicacao"], 0);
    }

    #[tokio::test]
    async fn add_book_refetches_even_after_failed_insert() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "GET",
            "http://mock/livros",
            MockResponse::Success(Response::new(200, Bytes::from("[]"))),
        );
        mock.set_response(
            "POST",
            "http://mock/livros",
            MockResponse::Success(Response::new(500, Bytes::from("boom"))),
        );

        let store = BookStore::new(repository_over(&mock)).await;
        mock.clear_requests();

        store.add_book("", "X", "", "", "", "2020", "", "10").await;

        let methods: Vec<String> = mock.get_requests().iter().map(|r| r.method.clone()).collect();
        assert_eq!(methods, vec!["POST".to_string(), "GET".to_string()]);
    }

    #[tokio::test]
    async fn subscribe_sees_snapshot_replacement() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "GET",
            "http://mock/livros",
            MockResponse::Success(Response::new(200, Bytes::from("[]"))),
        );

        let store = BookStore::new(repository_over(&mock)).await;
        let mut rx = store.subscribe();

        mock.set_response(
            "GET",
            "http://mock/livros",
            MockResponse::Success(Response::new(200, Bytes::from(list_body(&[("1", "A")])))),
        );
        store.fetch_books().await;

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 1);
    }
}

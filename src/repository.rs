//! Domain-level book operations over the API client.
//!
//! A thin pass-through that hides id-presence checks from callers. The
//! repository retains no data and performs no retry or partial-failure
//! handling; every failure propagates as-is.

use crate::api::BookApi;
use crate::error::ApiError;
use crate::models::Book;

/// Repository translating domain intents into API calls.
#[derive(Clone)]
pub struct BookRepository {
    api: BookApi,
}

impl BookRepository {
    /// Create a repository over the given API client.
    pub fn new(api: BookApi) -> Self {
        Self { api }
    }

    /// Fetch the full remote list verbatim, no filtering or sorting.
    pub async fn get_all_books(&self) -> Result<Vec<Book>, ApiError> {
        self.api.list_books().await
    }

    /// Submit a creation.
    ///
    /// The server-returned entity (with its assigned id) is dropped:
    /// callers resynchronize through a full refetch instead. The response
    /// is still parsed, so a malformed creation response surfaces as
    /// [`ApiError::Parse`].
    pub async fn insert(&self, book: &Book) -> Result<(), ApiError> {
        self.api.create_book(book).await?;
        Ok(())
    }

    /// Submit a full replace of `book`.
    ///
    /// Silent no-op when `book.id` is `None` — an unsaved book has
    /// nothing to replace, and no network call is made.
    pub async fn update(&self, book: &Book) -> Result<(), ApiError> {
        if let Some(id) = &book.id {
            self.api.update_book(id, book).await?;
        }
        Ok(())
    }

    /// Delete the book keyed by `book.id`.
    ///
    /// Silent no-op when `book.id` is `None`, matching [`Self::update`].
    pub async fn delete(&self, book: &Book) -> Result<(), ApiError> {
        if let Some(id) = &book.id {
            self.api.delete_book(id).await?;
        }
        Ok(())
    }
}

//! livraria - async client and state store for a remote book catalog
//!
//! The crate is layered leaf-first: the [`models::Book`] entity, the
//! [`traits::HttpClient`] transport abstraction with its [`adapters`],
//! the typed [`api::BookApi`] binding, the [`repository::BookRepository`]
//! pass-through, and the [`store::BookStore`] holding the observable
//! list snapshot.

pub mod adapters;
pub mod api;
pub mod error;
pub mod models;
pub mod repository;
pub mod store;
pub mod traits;

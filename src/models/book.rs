use serde::{Deserialize, Serialize};

/// A book record from the catalog API.
///
/// Field names mirror the wire contract, which uses Portuguese attribute
/// names. The only divergence is `ano_publicacao`, renamed on the wire to
/// `anoPublicacao`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Server-assigned identifier. `None` only for a locally constructed
    /// book that has not been submitted yet; omitted from serialized
    /// output so creation payloads carry no id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Cover image URL
    pub imagem: String,
    /// Title
    pub titulo: String,
    pub isbn: String,
    /// Author
    pub autor: String,
    /// Publisher
    pub editora: String,
    /// Publication year; 0 when the submitting form field could not be parsed
    #[serde(rename = "anoPublicacao")]
    pub ano_publicacao: i32,
    /// Genre
    pub genero: String,
    /// Price, kept as the raw string the server stores (no currency semantics)
    pub preco: String,
}

//! Libro (book) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Libro row; `existencia` is the number of copies available to loan and
/// never goes negative
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Libro {
    pub id_libro: i32,
    pub titulo: String,
    pub autor: String,
    pub isbn: String,
    pub existencia: i32,
}

/// Create libro request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateLibro {
    pub titulo: Option<String>,
    pub autor: Option<String>,
    pub isbn: Option<String>,
    pub existencia: Option<i32>,
}

/// Update libro request; absent or empty text fields keep the stored value,
/// `existencia` is applied whenever supplied (zero included)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateLibro {
    pub titulo: Option<String>,
    pub autor: Option<String>,
    pub isbn: Option<String>,
    pub existencia: Option<i32>,
}

/// Body of the stock-only endpoint (`PUT /libros/:id/existencia`)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateExistencia {
    pub existencia: Option<i32>,
}

/// Validated column values handed to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibroDatos {
    pub titulo: String,
    pub autor: String,
    pub isbn: String,
    pub existencia: i32,
}

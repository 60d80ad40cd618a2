//! Resenia (review) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Resenia row. Reviews reference a libro and a usuario but do not require
/// any prior loan.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Resenia {
    pub id_resenia: i32,
    pub id_libro: i32,
    pub id_usuario: i32,
    pub calificacion: i32,
    pub comentario: String,
    pub fecha: NaiveDate,
}

/// Create resenia request; ids and a nonzero calificación are required
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateResenia {
    pub id_libro: Option<i32>,
    pub id_usuario: Option<i32>,
    pub calificacion: Option<i32>,
    pub comentario: Option<String>,
}

/// Update resenia request; absent or zero calificación keeps the stored one
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateResenia {
    pub calificacion: Option<i32>,
    pub comentario: Option<String>,
}

/// Validated column values handed to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReseniaDatos {
    pub id_libro: i32,
    pub id_usuario: i32,
    pub calificacion: i32,
    pub comentario: String,
    pub fecha: NaiveDate,
}

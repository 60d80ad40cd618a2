//! Usuario (library member) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Usuario row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Usuario {
    pub id_usuario: i32,
    pub nombre: String,
    pub email: String,
    pub telefono: String,
}

/// Create usuario request; `nombre` and `email` are validated as required
/// by the service, so missing fields answer 400 instead of a decode error
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUsuario {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
}

/// Update usuario request; absent or empty fields keep the stored value
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateUsuario {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
}

/// Validated column values handed to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsuarioDatos {
    pub nombre: String,
    pub email: String,
    pub telefono: String,
}

//! API handlers for the biblioteca REST endpoints

pub mod health;
pub mod libros;
pub mod openapi;
pub mod prestamos;
pub mod resenias;
pub mod usuarios;

use axum::{
    http::{Method, StatusCode, Uri},
    Json,
};
use serde::Serialize;
use serde_json::json;

/// Uniform `{success, data?, message}` envelope used by every endpoint
#[derive(Serialize)]
pub struct Respuesta<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
}

impl<T: Serialize> Respuesta<T> {
    /// 200 envelope with a data payload
    pub fn ok(data: T, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            message: message.into(),
        })
    }

    /// 201 envelope with the created entity
    pub fn created(data: T, message: impl Into<String>) -> (StatusCode, Json<Self>) {
        (
            StatusCode::CREATED,
            Json(Self {
                success: true,
                data: Some(data),
                message: message.into(),
            }),
        )
    }
}

impl Respuesta<()> {
    /// Envelope with no data payload (deletes)
    pub fn solo_mensaje(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            data: None,
            message: message.into(),
        })
    }
}

/// API info served at the root path
pub async fn raiz() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": "API RESTful de Biblioteca",
        "endpoints": {
            "usuarios": "/usuarios",
            "libros": "/libros",
            "prestamos": "/prestamos",
            "resenias": "/resenias"
        },
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Unmatched routes answer with the envelope and the route list
pub async fn fallback(method: Method, uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": format!("Ruta {} {} no encontrada", method, uri.path()),
            "availableRoutes": [
                "GET /",
                "GET /usuarios",
                "GET /usuarios/:id",
                "POST /usuarios",
                "GET /libros",
                "GET /libros/disponibles",
                "GET /prestamos",
                "GET /resenias"
            ],
        })),
    )
}

//! Usuario endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::usuario::{CreateUsuario, UpdateUsuario, Usuario},
};

use super::Respuesta;

/// List all usuarios
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "usuarios",
    responses(
        (status = 200, description = "Usuarios obtenidos correctamente")
    )
)]
pub async fn list_usuarios(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Respuesta<Vec<Usuario>>>> {
    let usuarios = state.services.usuarios.list().await?;
    Ok(Respuesta::ok(usuarios, "Usuarios obtenidos correctamente"))
}

/// Get a usuario by ID
#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = "usuarios",
    params(
        ("id" = i32, Path, description = "Usuario ID")
    ),
    responses(
        (status = 200, description = "Usuario obtenido correctamente", body = Usuario),
        (status = 404, description = "Usuario no encontrado")
    )
)]
pub async fn get_usuario(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Respuesta<Usuario>>> {
    let usuario = state.services.usuarios.get(id).await?;
    Ok(Respuesta::ok(usuario, "Usuario obtenido correctamente"))
}

/// Create a new usuario
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "usuarios",
    request_body = CreateUsuario,
    responses(
        (status = 201, description = "Usuario creado correctamente", body = Usuario),
        (status = 400, description = "Nombre y email son requeridos")
    )
)]
pub async fn create_usuario(
    State(state): State<crate::AppState>,
    Json(datos): Json<CreateUsuario>,
) -> AppResult<(StatusCode, Json<Respuesta<Usuario>>)> {
    let usuario = state.services.usuarios.create(datos).await?;
    Ok(Respuesta::created(usuario, "Usuario creado correctamente"))
}

/// Update an existing usuario
#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    tag = "usuarios",
    params(
        ("id" = i32, Path, description = "Usuario ID")
    ),
    request_body = UpdateUsuario,
    responses(
        (status = 200, description = "Usuario actualizado correctamente", body = Usuario),
        (status = 404, description = "Usuario no encontrado")
    )
)]
pub async fn update_usuario(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(datos): Json<UpdateUsuario>,
) -> AppResult<Json<Respuesta<Usuario>>> {
    let usuario = state.services.usuarios.update(id, datos).await?;
    Ok(Respuesta::ok(usuario, "Usuario actualizado correctamente"))
}

/// Delete a usuario
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    tag = "usuarios",
    params(
        ("id" = i32, Path, description = "Usuario ID")
    ),
    responses(
        (status = 200, description = "Usuario eliminado correctamente"),
        (status = 404, description = "Usuario no encontrado")
    )
)]
pub async fn delete_usuario(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Respuesta<()>>> {
    state.services.usuarios.delete(id).await?;
    Ok(Respuesta::solo_mensaje("Usuario eliminado correctamente"))
}

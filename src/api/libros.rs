//! Libro endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::libro::{CreateLibro, Libro, UpdateExistencia, UpdateLibro},
};

use super::Respuesta;

/// List all libros
#[utoipa::path(
    get,
    path = "/libros",
    tag = "libros",
    responses(
        (status = 200, description = "Libros obtenidos correctamente")
    )
)]
pub async fn list_libros(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Respuesta<Vec<Libro>>>> {
    let libros = state.services.libros.list().await?;
    Ok(Respuesta::ok(libros, "Libros obtenidos correctamente"))
}

/// List libros with stock available
#[utoipa::path(
    get,
    path = "/libros/disponibles",
    tag = "libros",
    responses(
        (status = 200, description = "Libros disponibles obtenidos correctamente")
    )
)]
pub async fn list_libros_disponibles(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Respuesta<Vec<Libro>>>> {
    let libros = state.services.libros.list_available().await?;
    Ok(Respuesta::ok(
        libros,
        "Libros disponibles obtenidos correctamente",
    ))
}

/// Get a libro by ID
#[utoipa::path(
    get,
    path = "/libros/{id}",
    tag = "libros",
    params(
        ("id" = i32, Path, description = "Libro ID")
    ),
    responses(
        (status = 200, description = "Libro obtenido correctamente", body = Libro),
        (status = 404, description = "Libro no encontrado")
    )
)]
pub async fn get_libro(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Respuesta<Libro>>> {
    let libro = state.services.libros.get(id).await?;
    Ok(Respuesta::ok(libro, "Libro obtenido correctamente"))
}

/// Create a new libro
#[utoipa::path(
    post,
    path = "/libros",
    tag = "libros",
    request_body = CreateLibro,
    responses(
        (status = 201, description = "Libro creado correctamente", body = Libro),
        (status = 400, description = "Título y autor son requeridos")
    )
)]
pub async fn create_libro(
    State(state): State<crate::AppState>,
    Json(datos): Json<CreateLibro>,
) -> AppResult<(StatusCode, Json<Respuesta<Libro>>)> {
    let libro = state.services.libros.create(datos).await?;
    Ok(Respuesta::created(libro, "Libro creado correctamente"))
}

/// Update an existing libro
#[utoipa::path(
    put,
    path = "/libros/{id}",
    tag = "libros",
    params(
        ("id" = i32, Path, description = "Libro ID")
    ),
    request_body = UpdateLibro,
    responses(
        (status = 200, description = "Libro actualizado correctamente", body = Libro),
        (status = 404, description = "Libro no encontrado")
    )
)]
pub async fn update_libro(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(datos): Json<UpdateLibro>,
) -> AppResult<Json<Respuesta<Libro>>> {
    let libro = state.services.libros.update(id, datos).await?;
    Ok(Respuesta::ok(libro, "Libro actualizado correctamente"))
}

/// Update only the stock of a libro
#[utoipa::path(
    put,
    path = "/libros/{id}/existencia",
    tag = "libros",
    params(
        ("id" = i32, Path, description = "Libro ID")
    ),
    request_body = UpdateExistencia,
    responses(
        (status = 200, description = "Existencia actualizada correctamente", body = Libro),
        (status = 400, description = "La existencia debe ser un número mayor o igual a 0"),
        (status = 404, description = "Libro no encontrado")
    )
)]
pub async fn update_existencia(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(datos): Json<UpdateExistencia>,
) -> AppResult<Json<Respuesta<Libro>>> {
    let libro = state.services.libros.set_stock(id, datos).await?;
    Ok(Respuesta::ok(libro, "Existencia actualizada correctamente"))
}

/// Delete a libro
#[utoipa::path(
    delete,
    path = "/libros/{id}",
    tag = "libros",
    params(
        ("id" = i32, Path, description = "Libro ID")
    ),
    responses(
        (status = 200, description = "Libro eliminado correctamente"),
        (status = 404, description = "Libro no encontrado")
    )
)]
pub async fn delete_libro(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Respuesta<()>>> {
    state.services.libros.delete(id).await?;
    Ok(Respuesta::solo_mensaje("Libro eliminado correctamente"))
}

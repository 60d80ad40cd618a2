//! Prestamo endpoints
//!
//! POST, PUT and DELETE run through the loan lifecycle service, which is
//! where the stock bookkeeping happens.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::prestamo::{CreatePrestamo, Prestamo, UpdatePrestamo},
};

use super::Respuesta;

/// List all prestamos
#[utoipa::path(
    get,
    path = "/prestamos",
    tag = "prestamos",
    responses(
        (status = 200, description = "Préstamos obtenidos correctamente")
    )
)]
pub async fn list_prestamos(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Respuesta<Vec<Prestamo>>>> {
    let prestamos = state.services.prestamos.list().await?;
    Ok(Respuesta::ok(prestamos, "Préstamos obtenidos correctamente"))
}

/// List prestamos of a usuario
#[utoipa::path(
    get,
    path = "/prestamos/usuario/{id_usuario}",
    tag = "prestamos",
    params(
        ("id_usuario" = i32, Path, description = "Usuario ID")
    ),
    responses(
        (status = 200, description = "Préstamos del usuario obtenidos correctamente")
    )
)]
pub async fn list_prestamos_por_usuario(
    State(state): State<crate::AppState>,
    Path(id_usuario): Path<i32>,
) -> AppResult<Json<Respuesta<Vec<Prestamo>>>> {
    let prestamos = state.services.prestamos.list_by_usuario(id_usuario).await?;
    Ok(Respuesta::ok(
        prestamos,
        format!(
            "Préstamos del usuario {} obtenidos correctamente",
            id_usuario
        ),
    ))
}

/// List prestamos of a libro
#[utoipa::path(
    get,
    path = "/prestamos/libro/{id_libro}",
    tag = "prestamos",
    params(
        ("id_libro" = i32, Path, description = "Libro ID")
    ),
    responses(
        (status = 200, description = "Préstamos del libro obtenidos correctamente")
    )
)]
pub async fn list_prestamos_por_libro(
    State(state): State<crate::AppState>,
    Path(id_libro): Path<i32>,
) -> AppResult<Json<Respuesta<Vec<Prestamo>>>> {
    let prestamos = state.services.prestamos.list_by_libro(id_libro).await?;
    Ok(Respuesta::ok(
        prestamos,
        format!("Préstamos del libro {} obtenidos correctamente", id_libro),
    ))
}

/// Get a prestamo by ID
#[utoipa::path(
    get,
    path = "/prestamos/{id}",
    tag = "prestamos",
    params(
        ("id" = i32, Path, description = "Prestamo ID")
    ),
    responses(
        (status = 200, description = "Préstamo obtenido correctamente", body = Prestamo),
        (status = 404, description = "Préstamo no encontrado")
    )
)]
pub async fn get_prestamo(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Respuesta<Prestamo>>> {
    let prestamo = state.services.prestamos.get(id).await?;
    Ok(Respuesta::ok(prestamo, "Préstamo obtenido correctamente"))
}

/// Create a new prestamo (takes one copy of the libro)
#[utoipa::path(
    post,
    path = "/prestamos",
    tag = "prestamos",
    request_body = CreatePrestamo,
    responses(
        (status = 201, description = "Préstamo creado correctamente", body = Prestamo),
        (status = 400, description = "Datos faltantes o sin existencia disponible"),
        (status = 404, description = "Usuario o libro no encontrado")
    )
)]
pub async fn create_prestamo(
    State(state): State<crate::AppState>,
    Json(datos): Json<CreatePrestamo>,
) -> AppResult<(StatusCode, Json<Respuesta<Prestamo>>)> {
    let prestamo = state.services.prestamos.create(datos).await?;
    Ok(Respuesta::created(prestamo, "Préstamo creado correctamente"))
}

/// Update a prestamo; returning it gives the copy back
#[utoipa::path(
    put,
    path = "/prestamos/{id}",
    tag = "prestamos",
    params(
        ("id" = i32, Path, description = "Prestamo ID")
    ),
    request_body = UpdatePrestamo,
    responses(
        (status = 200, description = "Préstamo actualizado correctamente", body = Prestamo),
        (status = 400, description = "Estado de préstamo inválido"),
        (status = 404, description = "Préstamo no encontrado")
    )
)]
pub async fn update_prestamo(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(datos): Json<UpdatePrestamo>,
) -> AppResult<Json<Respuesta<Prestamo>>> {
    let prestamo = state.services.prestamos.update(id, datos).await?;
    Ok(Respuesta::ok(prestamo, "Préstamo actualizado correctamente"))
}

/// Delete a prestamo; an active one gives the copy back
#[utoipa::path(
    delete,
    path = "/prestamos/{id}",
    tag = "prestamos",
    params(
        ("id" = i32, Path, description = "Prestamo ID")
    ),
    responses(
        (status = 200, description = "Préstamo eliminado correctamente"),
        (status = 404, description = "Préstamo no encontrado")
    )
)]
pub async fn delete_prestamo(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Respuesta<()>>> {
    state.services.prestamos.delete(id).await?;
    Ok(Respuesta::solo_mensaje("Préstamo eliminado correctamente"))
}

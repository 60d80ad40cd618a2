//! Resenia endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::resenia::{CreateResenia, Resenia, UpdateResenia},
};

use super::Respuesta;

/// List all resenias
#[utoipa::path(
    get,
    path = "/resenias",
    tag = "resenias",
    responses(
        (status = 200, description = "Reseñas obtenidas correctamente")
    )
)]
pub async fn list_resenias(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Respuesta<Vec<Resenia>>>> {
    let resenias = state.services.resenias.list().await?;
    Ok(Respuesta::ok(resenias, "Reseñas obtenidas correctamente"))
}

/// List resenias of a libro
#[utoipa::path(
    get,
    path = "/resenias/libro/{id_libro}",
    tag = "resenias",
    params(
        ("id_libro" = i32, Path, description = "Libro ID")
    ),
    responses(
        (status = 200, description = "Reseñas del libro obtenidas correctamente")
    )
)]
pub async fn list_resenias_por_libro(
    State(state): State<crate::AppState>,
    Path(id_libro): Path<i32>,
) -> AppResult<Json<Respuesta<Vec<Resenia>>>> {
    let resenias = state.services.resenias.list_by_libro(id_libro).await?;
    Ok(Respuesta::ok(
        resenias,
        format!("Reseñas del libro {} obtenidas correctamente", id_libro),
    ))
}

/// Get a resenia by ID
#[utoipa::path(
    get,
    path = "/resenias/{id}",
    tag = "resenias",
    params(
        ("id" = i32, Path, description = "Resenia ID")
    ),
    responses(
        (status = 200, description = "Reseña obtenida correctamente", body = Resenia),
        (status = 404, description = "Reseña no encontrada")
    )
)]
pub async fn get_resenia(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Respuesta<Resenia>>> {
    let resenia = state.services.resenias.get(id).await?;
    Ok(Respuesta::ok(resenia, "Reseña obtenida correctamente"))
}

/// Create a new resenia
#[utoipa::path(
    post,
    path = "/resenias",
    tag = "resenias",
    request_body = CreateResenia,
    responses(
        (status = 201, description = "Reseña creada correctamente", body = Resenia),
        (status = 400, description = "Datos faltantes o calificación fuera de rango"),
        (status = 404, description = "Libro o usuario no encontrado")
    )
)]
pub async fn create_resenia(
    State(state): State<crate::AppState>,
    Json(datos): Json<CreateResenia>,
) -> AppResult<(StatusCode, Json<Respuesta<Resenia>>)> {
    let resenia = state.services.resenias.create(datos).await?;
    Ok(Respuesta::created(resenia, "Reseña creada correctamente"))
}

/// Update an existing resenia
#[utoipa::path(
    put,
    path = "/resenias/{id}",
    tag = "resenias",
    params(
        ("id" = i32, Path, description = "Resenia ID")
    ),
    request_body = UpdateResenia,
    responses(
        (status = 200, description = "Reseña actualizada correctamente", body = Resenia),
        (status = 400, description = "La calificación debe estar entre 1 y 5"),
        (status = 404, description = "Reseña no encontrada")
    )
)]
pub async fn update_resenia(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(datos): Json<UpdateResenia>,
) -> AppResult<Json<Respuesta<Resenia>>> {
    let resenia = state.services.resenias.update(id, datos).await?;
    Ok(Respuesta::ok(resenia, "Reseña actualizada correctamente"))
}

/// Delete a resenia
#[utoipa::path(
    delete,
    path = "/resenias/{id}",
    tag = "resenias",
    params(
        ("id" = i32, Path, description = "Resenia ID")
    ),
    responses(
        (status = 200, description = "Reseña eliminada correctamente"),
        (status = 404, description = "Reseña no encontrada")
    )
)]
pub async fn delete_resenia(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Respuesta<()>>> {
    state.services.resenias.delete(id).await?;
    Ok(Respuesta::solo_mensaje("Reseña eliminada correctamente"))
}

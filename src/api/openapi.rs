//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, libros, prestamos, resenias, usuarios};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca API",
        version = "1.0.0",
        description = "API RESTful de Biblioteca: usuarios, libros, préstamos y reseñas"
    ),
    paths(
        // Health
        health::health_check,
        // Usuarios
        usuarios::list_usuarios,
        usuarios::get_usuario,
        usuarios::create_usuario,
        usuarios::update_usuario,
        usuarios::delete_usuario,
        // Libros
        libros::list_libros,
        libros::list_libros_disponibles,
        libros::get_libro,
        libros::create_libro,
        libros::update_libro,
        libros::update_existencia,
        libros::delete_libro,
        // Prestamos
        prestamos::list_prestamos,
        prestamos::list_prestamos_por_usuario,
        prestamos::list_prestamos_por_libro,
        prestamos::get_prestamo,
        prestamos::create_prestamo,
        prestamos::update_prestamo,
        prestamos::delete_prestamo,
        // Resenias
        resenias::list_resenias,
        resenias::list_resenias_por_libro,
        resenias::get_resenia,
        resenias::create_resenia,
        resenias::update_resenia,
        resenias::delete_resenia,
    ),
    components(
        schemas(
            // Usuarios
            crate::models::usuario::Usuario,
            crate::models::usuario::CreateUsuario,
            crate::models::usuario::UpdateUsuario,
            // Libros
            crate::models::libro::Libro,
            crate::models::libro::CreateLibro,
            crate::models::libro::UpdateLibro,
            crate::models::libro::UpdateExistencia,
            // Prestamos
            crate::models::prestamo::Prestamo,
            crate::models::prestamo::EstadoPrestamo,
            crate::models::prestamo::CreatePrestamo,
            crate::models::prestamo::UpdatePrestamo,
            // Resenias
            crate::models::resenia::Resenia,
            crate::models::resenia::CreateResenia,
            crate::models::resenia::UpdateResenia,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorBody,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "usuarios", description = "Gestión de usuarios"),
        (name = "libros", description = "Gestión de libros y existencia"),
        (name = "prestamos", description = "Gestión de préstamos"),
        (name = "resenias", description = "Gestión de reseñas")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

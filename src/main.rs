//! Biblioteca Server - API RESTful de Biblioteca
//!
//! JSON API over usuarios, libros, prestamos and resenias.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblioteca_server::{
    api,
    config::{AppConfig, StorageBackend},
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("biblioteca_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Biblioteca Server v{}", env!("CARGO_PKG_VERSION"));

    // Build the repository for the configured backend
    let repository = match config.storage.backend {
        StorageBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .min_connections(config.database.min_connections)
                .connect(&config.database.url)
                .await
                .expect("Failed to connect to database");

            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .expect("Failed to run database migrations");

            tracing::info!("Database migrations completed");

            Repository::postgres(pool)
        }
        StorageBackend::Memoria => {
            tracing::info!("Using in-memory storage, data is lost on shutdown");
            Repository::en_memoria()
        }
    };

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create services and application state
    let services = Services::new(repository);

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let rutas = Router::new()
        // Root and health
        .route("/", get(api::raiz))
        .route("/health", get(api::health::health_check))
        // Usuarios
        .route("/usuarios", get(api::usuarios::list_usuarios))
        .route("/usuarios", post(api::usuarios::create_usuario))
        .route("/usuarios/:id", get(api::usuarios::get_usuario))
        .route("/usuarios/:id", put(api::usuarios::update_usuario))
        .route("/usuarios/:id", delete(api::usuarios::delete_usuario))
        // Libros
        .route("/libros", get(api::libros::list_libros))
        .route("/libros", post(api::libros::create_libro))
        .route("/libros/disponibles", get(api::libros::list_libros_disponibles))
        .route("/libros/:id", get(api::libros::get_libro))
        .route("/libros/:id", put(api::libros::update_libro))
        .route("/libros/:id", delete(api::libros::delete_libro))
        .route("/libros/:id/existencia", put(api::libros::update_existencia))
        // Prestamos
        .route("/prestamos", get(api::prestamos::list_prestamos))
        .route("/prestamos", post(api::prestamos::create_prestamo))
        .route(
            "/prestamos/usuario/:id_usuario",
            get(api::prestamos::list_prestamos_por_usuario),
        )
        .route(
            "/prestamos/libro/:id_libro",
            get(api::prestamos::list_prestamos_por_libro),
        )
        .route("/prestamos/:id", get(api::prestamos::get_prestamo))
        .route("/prestamos/:id", put(api::prestamos::update_prestamo))
        .route("/prestamos/:id", delete(api::prestamos::delete_prestamo))
        // Resenias
        .route("/resenias", get(api::resenias::list_resenias))
        .route("/resenias", post(api::resenias::create_resenia))
        .route(
            "/resenias/libro/:id_libro",
            get(api::resenias::list_resenias_por_libro),
        )
        .route("/resenias/:id", get(api::resenias::get_resenia))
        .route("/resenias/:id", put(api::resenias::update_resenia))
        .route("/resenias/:id", delete(api::resenias::delete_resenia))
        .fallback(api::fallback)
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    rutas
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

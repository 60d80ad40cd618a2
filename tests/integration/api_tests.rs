//! API integration tests
//!
//! These run against a live server (postgres or memoria backend) on
//! localhost:8080.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Helper to create a usuario and return its id
async fn crear_usuario(client: &Client) -> i64 {
    let response = client
        .post(format!("{}/usuarios", BASE_URL))
        .json(&json!({
            "nombre": "Usuario de prueba",
            "email": "prueba@biblioteca.test",
            "telefono": "5550000"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["data"]["id_usuario"].as_i64().expect("No usuario ID")
}

/// Helper to create a libro with the given stock and return its id
async fn crear_libro(client: &Client, existencia: i64) -> i64 {
    let response = client
        .post(format!("{}/libros", BASE_URL))
        .json(&json!({
            "titulo": "Libro de prueba",
            "autor": "Autor de prueba",
            "isbn": "978-0-00-000000-0",
            "existencia": existencia
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["data"]["id_libro"].as_i64().expect("No libro ID")
}

async fn existencia_de(client: &Client, id_libro: i64) -> i64 {
    let response = client
        .get(format!("{}/libros/{}", BASE_URL, id_libro))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    body["data"]["existencia"].as_i64().expect("No existencia")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_raiz() {
    let client = Client::new();

    let response = client
        .get(format!("{}/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(body["endpoints"]["libros"], "/libros");
}

#[tokio::test]
#[ignore]
async fn test_usuario_crud() {
    let client = Client::new();
    let id = crear_usuario(&client).await;

    // Get
    let response = client
        .get(format!("{}/usuarios/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["nombre"], "Usuario de prueba");

    // Update; empty email keeps the stored one
    let response = client
        .put(format!("{}/usuarios/{}", BASE_URL, id))
        .json(&json!({
            "nombre": "Usuario renombrado",
            "email": ""
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["nombre"], "Usuario renombrado");
    assert_eq!(body["data"]["email"], "prueba@biblioteca.test");

    // Delete
    let response = client
        .delete(format!("{}/usuarios/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/usuarios/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_crear_usuario_sin_email() {
    let client = Client::new();

    let response = client
        .post(format!("{}/usuarios", BASE_URL))
        .json(&json!({ "nombre": "Sin email" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Nombre y email son requeridos");
}

#[tokio::test]
#[ignore]
async fn test_existencia_negativa_rechazada() {
    let client = Client::new();
    let id_libro = crear_libro(&client, 2).await;

    let response = client
        .put(format!("{}/libros/{}/existencia", BASE_URL, id_libro))
        .json(&json!({ "existencia": -1 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "La existencia debe ser un número mayor o igual a 0"
    );

    // Cleanup
    let _ = client
        .delete(format!("{}/libros/{}", BASE_URL, id_libro))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_flujo_de_prestamo() {
    let client = Client::new();
    let id_usuario = crear_usuario(&client).await;
    let id_libro = crear_libro(&client, 1).await;

    // Create loan: takes the only copy
    let response = client
        .post(format!("{}/prestamos", BASE_URL))
        .json(&json!({
            "id_usuario": id_usuario,
            "id_libro": id_libro
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let id_prestamo = body["data"]["id_prestamo"].as_i64().expect("No prestamo ID");
    assert_eq!(body["data"]["estado"], "activo");
    assert_eq!(existencia_de(&client, id_libro).await, 0);

    // A second loan finds no stock
    let response = client
        .post(format!("{}/prestamos", BASE_URL))
        .json(&json!({
            "id_usuario": id_usuario,
            "id_libro": id_libro
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "No hay existencia disponible para este libro");

    // Return the loan: the copy comes back
    let response = client
        .put(format!("{}/prestamos/{}", BASE_URL, id_prestamo))
        .json(&json!({ "estado": "devuelto" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["estado"], "devuelto");
    assert_eq!(existencia_de(&client, id_libro).await, 1);

    // Returning again changes nothing
    let response = client
        .put(format!("{}/prestamos/{}", BASE_URL, id_prestamo))
        .json(&json!({ "estado": "devuelto" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(existencia_de(&client, id_libro).await, 1);

    // Cleanup
    let _ = client
        .delete(format!("{}/prestamos/{}", BASE_URL, id_prestamo))
        .send()
        .await;
    let _ = client
        .delete(format!("{}/libros/{}", BASE_URL, id_libro))
        .send()
        .await;
    let _ = client
        .delete(format!("{}/usuarios/{}", BASE_URL, id_usuario))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_eliminar_prestamo_activo_repone_existencia() {
    let client = Client::new();
    let id_usuario = crear_usuario(&client).await;
    let id_libro = crear_libro(&client, 3).await;

    let response = client
        .post(format!("{}/prestamos", BASE_URL))
        .json(&json!({
            "id_usuario": id_usuario,
            "id_libro": id_libro
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let id_prestamo = body["data"]["id_prestamo"].as_i64().expect("No prestamo ID");
    assert_eq!(existencia_de(&client, id_libro).await, 2);

    let response = client
        .delete(format!("{}/prestamos/{}", BASE_URL, id_prestamo))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(existencia_de(&client, id_libro).await, 3);

    // Cleanup
    let _ = client
        .delete(format!("{}/libros/{}", BASE_URL, id_libro))
        .send()
        .await;
    let _ = client
        .delete(format!("{}/usuarios/{}", BASE_URL, id_usuario))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_calificacion_fuera_de_rango() {
    let client = Client::new();
    let id_usuario = crear_usuario(&client).await;
    let id_libro = crear_libro(&client, 1).await;

    let response = client
        .post(format!("{}/resenias", BASE_URL))
        .json(&json!({
            "id_libro": id_libro,
            "id_usuario": id_usuario,
            "calificacion": 6,
            "comentario": "Demasiado buena"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "La calificación debe estar entre 1 y 5");

    // Cleanup
    let _ = client
        .delete(format!("{}/libros/{}", BASE_URL, id_libro))
        .send()
        .await;
    let _ = client
        .delete(format!("{}/usuarios/{}", BASE_URL, id_usuario))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_ruta_desconocida() {
    let client = Client::new();

    let response = client
        .get(format!("{}/no-existe", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Ruta GET /no-existe no encontrada");
    assert!(body["availableRoutes"].is_array());
}

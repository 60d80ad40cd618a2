//! Usuario management service

use crate::{
    error::{AppError, AppResult},
    models::usuario::{CreateUsuario, UpdateUsuario, Usuario, UsuarioDatos},
    repository::Repository,
};

use super::or_keep;

#[derive(Clone)]
pub struct UsuariosService {
    repository: Repository,
}

impl UsuariosService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Usuario>> {
        self.repository.usuarios.list().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Usuario> {
        self.repository
            .usuarios
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))
    }

    pub async fn create(&self, datos: CreateUsuario) -> AppResult<Usuario> {
        let nombre = datos.nombre.unwrap_or_default();
        let email = datos.email.unwrap_or_default();
        if nombre.is_empty() || email.is_empty() {
            return Err(AppError::Validation(
                "Nombre y email son requeridos".to_string(),
            ));
        }

        self.repository
            .usuarios
            .create(UsuarioDatos {
                nombre,
                email,
                telefono: datos.telefono.unwrap_or_default(),
            })
            .await
    }

    pub async fn update(&self, id: i32, datos: UpdateUsuario) -> AppResult<Usuario> {
        let actual = self.get(id).await?;

        let datos = UsuarioDatos {
            nombre: or_keep(datos.nombre, actual.nombre),
            email: or_keep(datos.email, actual.email),
            telefono: or_keep(datos.telefono, actual.telefono),
        };

        self.repository
            .usuarios
            .update(id, datos)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repository.usuarios.delete(id).await? {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }
        Ok(())
    }
}

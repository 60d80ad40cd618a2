//! In-memory backend
//!
//! Plain vectors behind mutexes, with max+1 id assignment. Mirrors the
//! persisted schema closely enough that the services cannot tell the
//! difference; used for demo mode and as the test substitute for the
//! Postgres stores.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    error::AppResult,
    models::{
        libro::{Libro, LibroDatos},
        prestamo::{EstadoPrestamo, Prestamo, PrestamoDatos},
        resenia::{Resenia, ReseniaDatos},
        usuario::{Usuario, UsuarioDatos},
    },
};

use super::{LibroStore, PrestamoStore, ReseniaStore, UsuarioStore};

/// Shared tables
#[derive(Default)]
pub struct Datos {
    usuarios: Mutex<Vec<Usuario>>,
    libros: Mutex<Vec<Libro>>,
    prestamos: Mutex<Vec<Prestamo>>,
    resenias: Mutex<Vec<Resenia>>,
}

fn lock<T>(tabla: &Mutex<Vec<T>>) -> MutexGuard<'_, Vec<T>> {
    tabla.lock().expect("lock poisoned")
}

fn next_id(ids: impl Iterator<Item = i32>) -> i32 {
    ids.max().map_or(1, |mayor| mayor + 1)
}

pub struct MemUsuarioStore {
    datos: Arc<Datos>,
}

impl MemUsuarioStore {
    pub fn new(datos: Arc<Datos>) -> Self {
        Self { datos }
    }
}

#[async_trait]
impl UsuarioStore for MemUsuarioStore {
    async fn list(&self) -> AppResult<Vec<Usuario>> {
        Ok(lock(&self.datos.usuarios).clone())
    }

    async fn get(&self, id: i32) -> AppResult<Option<Usuario>> {
        Ok(lock(&self.datos.usuarios)
            .iter()
            .find(|u| u.id_usuario == id)
            .cloned())
    }

    async fn create(&self, datos: UsuarioDatos) -> AppResult<Usuario> {
        let mut usuarios = lock(&self.datos.usuarios);
        let usuario = Usuario {
            id_usuario: next_id(usuarios.iter().map(|u| u.id_usuario)),
            nombre: datos.nombre,
            email: datos.email,
            telefono: datos.telefono,
        };
        usuarios.push(usuario.clone());
        Ok(usuario)
    }

    async fn update(&self, id: i32, datos: UsuarioDatos) -> AppResult<Option<Usuario>> {
        let mut usuarios = lock(&self.datos.usuarios);
        Ok(usuarios.iter_mut().find(|u| u.id_usuario == id).map(|u| {
            u.nombre = datos.nombre;
            u.email = datos.email;
            u.telefono = datos.telefono;
            u.clone()
        }))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut usuarios = lock(&self.datos.usuarios);
        let antes = usuarios.len();
        usuarios.retain(|u| u.id_usuario != id);
        Ok(usuarios.len() < antes)
    }
}

pub struct MemLibroStore {
    datos: Arc<Datos>,
}

impl MemLibroStore {
    pub fn new(datos: Arc<Datos>) -> Self {
        Self { datos }
    }
}

#[async_trait]
impl LibroStore for MemLibroStore {
    async fn list(&self) -> AppResult<Vec<Libro>> {
        Ok(lock(&self.datos.libros).clone())
    }

    async fn list_available(&self) -> AppResult<Vec<Libro>> {
        Ok(lock(&self.datos.libros)
            .iter()
            .filter(|l| l.existencia > 0)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i32) -> AppResult<Option<Libro>> {
        Ok(lock(&self.datos.libros)
            .iter()
            .find(|l| l.id_libro == id)
            .cloned())
    }

    async fn create(&self, datos: LibroDatos) -> AppResult<Libro> {
        let mut libros = lock(&self.datos.libros);
        let libro = Libro {
            id_libro: next_id(libros.iter().map(|l| l.id_libro)),
            titulo: datos.titulo,
            autor: datos.autor,
            isbn: datos.isbn,
            existencia: datos.existencia,
        };
        libros.push(libro.clone());
        Ok(libro)
    }

    async fn update(&self, id: i32, datos: LibroDatos) -> AppResult<Option<Libro>> {
        let mut libros = lock(&self.datos.libros);
        Ok(libros.iter_mut().find(|l| l.id_libro == id).map(|l| {
            l.titulo = datos.titulo;
            l.autor = datos.autor;
            l.isbn = datos.isbn;
            l.existencia = datos.existencia;
            l.clone()
        }))
    }

    async fn set_stock(&self, id: i32, existencia: i32) -> AppResult<Option<Libro>> {
        let mut libros = lock(&self.datos.libros);
        Ok(libros.iter_mut().find(|l| l.id_libro == id).map(|l| {
            l.existencia = existencia;
            l.clone()
        }))
    }

    async fn decrement_stock(&self, id: i32) -> AppResult<bool> {
        let mut libros = lock(&self.datos.libros);
        match libros
            .iter_mut()
            .find(|l| l.id_libro == id && l.existencia > 0)
        {
            Some(libro) => {
                libro.existencia -= 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn increment_stock(&self, id: i32) -> AppResult<()> {
        let mut libros = lock(&self.datos.libros);
        if let Some(libro) = libros.iter_mut().find(|l| l.id_libro == id) {
            libro.existencia += 1;
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut libros = lock(&self.datos.libros);
        let antes = libros.len();
        libros.retain(|l| l.id_libro != id);
        Ok(libros.len() < antes)
    }
}

pub struct MemPrestamoStore {
    datos: Arc<Datos>,
}

impl MemPrestamoStore {
    pub fn new(datos: Arc<Datos>) -> Self {
        Self { datos }
    }
}

#[async_trait]
impl PrestamoStore for MemPrestamoStore {
    async fn list(&self) -> AppResult<Vec<Prestamo>> {
        Ok(lock(&self.datos.prestamos).clone())
    }

    async fn list_by_usuario(&self, id_usuario: i32) -> AppResult<Vec<Prestamo>> {
        Ok(lock(&self.datos.prestamos)
            .iter()
            .filter(|p| p.id_usuario == id_usuario)
            .cloned()
            .collect())
    }

    async fn list_by_libro(&self, id_libro: i32) -> AppResult<Vec<Prestamo>> {
        Ok(lock(&self.datos.prestamos)
            .iter()
            .filter(|p| p.id_libro == id_libro)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i32) -> AppResult<Option<Prestamo>> {
        Ok(lock(&self.datos.prestamos)
            .iter()
            .find(|p| p.id_prestamo == id)
            .cloned())
    }

    async fn create(&self, datos: PrestamoDatos) -> AppResult<Prestamo> {
        let mut prestamos = lock(&self.datos.prestamos);
        let prestamo = Prestamo {
            id_prestamo: next_id(prestamos.iter().map(|p| p.id_prestamo)),
            id_usuario: datos.id_usuario,
            id_libro: datos.id_libro,
            fecha_prestamo: datos.fecha_prestamo,
            fecha_devolucion: datos.fecha_devolucion,
            estado: EstadoPrestamo::Activo,
        };
        prestamos.push(prestamo.clone());
        Ok(prestamo)
    }

    async fn update(
        &self,
        id: i32,
        fecha_devolucion: Option<NaiveDate>,
        estado: EstadoPrestamo,
    ) -> AppResult<Option<Prestamo>> {
        let mut prestamos = lock(&self.datos.prestamos);
        Ok(prestamos.iter_mut().find(|p| p.id_prestamo == id).map(|p| {
            p.fecha_devolucion = fecha_devolucion;
            p.estado = estado;
            p.clone()
        }))
    }

    async fn mark_returned(&self, id: i32) -> AppResult<bool> {
        let mut prestamos = lock(&self.datos.prestamos);
        match prestamos
            .iter_mut()
            .find(|p| p.id_prestamo == id && p.estado == EstadoPrestamo::Activo)
        {
            Some(prestamo) => {
                prestamo.estado = EstadoPrestamo::Devuelto;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<Option<Prestamo>> {
        let mut prestamos = lock(&self.datos.prestamos);
        let posicion = prestamos.iter().position(|p| p.id_prestamo == id);
        Ok(posicion.map(|i| prestamos.remove(i)))
    }
}

pub struct MemReseniaStore {
    datos: Arc<Datos>,
}

impl MemReseniaStore {
    pub fn new(datos: Arc<Datos>) -> Self {
        Self { datos }
    }
}

#[async_trait]
impl ReseniaStore for MemReseniaStore {
    async fn list(&self) -> AppResult<Vec<Resenia>> {
        Ok(lock(&self.datos.resenias).clone())
    }

    async fn list_by_libro(&self, id_libro: i32) -> AppResult<Vec<Resenia>> {
        Ok(lock(&self.datos.resenias)
            .iter()
            .filter(|r| r.id_libro == id_libro)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i32) -> AppResult<Option<Resenia>> {
        Ok(lock(&self.datos.resenias)
            .iter()
            .find(|r| r.id_resenia == id)
            .cloned())
    }

    async fn create(&self, datos: ReseniaDatos) -> AppResult<Resenia> {
        let mut resenias = lock(&self.datos.resenias);
        let resenia = Resenia {
            id_resenia: next_id(resenias.iter().map(|r| r.id_resenia)),
            id_libro: datos.id_libro,
            id_usuario: datos.id_usuario,
            calificacion: datos.calificacion,
            comentario: datos.comentario,
            fecha: datos.fecha,
        };
        resenias.push(resenia.clone());
        Ok(resenia)
    }

    async fn update(
        &self,
        id: i32,
        calificacion: i32,
        comentario: String,
    ) -> AppResult<Option<Resenia>> {
        let mut resenias = lock(&self.datos.resenias);
        Ok(resenias.iter_mut().find(|r| r.id_resenia == id).map(|r| {
            r.calificacion = calificacion;
            r.comentario = comentario;
            r.clone()
        }))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut resenias = lock(&self.datos.resenias);
        let antes = resenias.len();
        resenias.retain(|r| r.id_resenia != id);
        Ok(resenias.len() < antes)
    }
}

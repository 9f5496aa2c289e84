//! # Handlers de Operaciones
//! src/handlers/mod.rs
//!
//! Implementación de las seis operaciones del servidor:
//! - `/ping`: respuesta fija "pong"
//! - `/echo`: devuelve el resto del request
//! - `/write`: reemplaza el registro compartido
//! - `/read`: lee el registro compartido
//! - `/stats`: snapshot de los contadores
//! - file-serve: cualquier otro GET sirve un archivo
//!
//! Toda falla local de un handler se resuelve dentro del handler o se
//! reporta como `HandlerError` al worker, que responde 400 y cierra la
//! conexión. Ninguna falla de un request mata al worker.

pub mod basic;
pub mod file;
pub mod register;

pub use basic::{echo_handler, ping_handler, stats_handler};
pub use file::file_handler;
pub use register::{read_handler, write_handler};

use std::io;

/// Errores recuperables de un handler
///
/// El worker los convierte en una respuesta 400 en vez de abortar.
#[derive(Debug)]
pub enum HandlerError {
    /// Write sin header `Content-Length` utilizable (ausente, cero o no numérico)
    MissingContentLength,

    /// Write sin terminador de headers (no hay body que copiar)
    MissingBody,

    /// Error de I/O sobre la conexión
    Io(io::Error),
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandlerError::MissingContentLength => {
                write!(f, "Missing or invalid Content-Length header")
            }
            HandlerError::MissingBody => write!(f, "Request has no header/body terminator"),
            HandlerError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for HandlerError {}

impl From<io::Error> for HandlerError {
    fn from(e: io::Error) -> Self {
        HandlerError::Io(e)
    }
}

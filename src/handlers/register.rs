//! # Handlers del Registro Compartido
//! src/handlers/register.rs
//!
//! Operaciones que acceden al registro compartido:
//! - /write: reemplaza el contenido (POST con Content-Length)
//! - /read: lee el contenido actual

use crate::handlers::HandlerError;
use crate::http::{request, Reply};
use crate::server::writer::ResponseWriter;
use crate::state::register::MAX_REGISTER_SIZE;
use crate::state::SharedRegister;
use std::io::Write;

/// Handler para `POST /write`
///
/// Contrato: el request debe traer un header `Content-Length` con valor
/// mayor que cero; si falta, es cero o no es numérico, el handler falla
/// con `MissingContentLength` y el worker responde 400 (nunca aborta).
///
/// El largo declarado se recorta a la capacidad del registro (1024) y a
/// los bytes realmente presentes después del terminador de headers. El
/// body de la respuesta es el contenido tal como quedó almacenado.
pub fn write_handler<W: Write>(
    conn: &mut W,
    writer: &ResponseWriter,
    register: &SharedRegister,
    raw: &[u8],
) -> Result<(), HandlerError> {
    let offset = request::body_offset(raw).ok_or(HandlerError::MissingBody)?;

    let declared = match request::content_length(raw) {
        Some(n) if n > 0 => n,
        _ => return Err(HandlerError::MissingContentLength),
    };

    let available = &raw[offset..];
    let take = declared.min(MAX_REGISTER_SIZE).min(available.len());

    let stored = register.store(&available[..take]);

    let reply = Reply::ok(stored);
    writer.send_response(conn, &reply)?;
    Ok(())
}

/// Handler para `GET /read`
///
/// Lee el contenido actual del registro bajo su lock, sin mutarlo.
/// Antes del primer write devuelve el sentinel `<empty>`.
pub fn read_handler<W: Write>(
    conn: &mut W,
    writer: &ResponseWriter,
    register: &SharedRegister,
) -> Result<(), HandlerError> {
    let content = register.load();
    let reply = Reply::ok(content);
    writer.send_response(conn, &reply)?;
    Ok(())
}

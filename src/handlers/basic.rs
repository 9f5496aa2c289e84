//! # Handlers Básicos
//! src/handlers/basic.rs
//!
//! Operaciones sin acceso al registro compartido:
//! - /ping: respuesta fija
//! - /echo: devuelve el resto del request
//! - /stats: snapshot de los contadores de tráfico

use crate::handlers::HandlerError;
use crate::http::{request, Reply};
use crate::server::writer::ResponseWriter;
use std::io::Write;

/// Handler para `GET /ping`
///
/// Sin acceso a estado. Responde siempre lo mismo:
///
/// ```text
/// HTTP/1.1 200 OK\r\nContent-Length: 4\r\n\r\npong
/// ```
pub fn ping_handler<W: Write>(conn: &mut W, writer: &ResponseWriter) -> Result<(), HandlerError> {
    let reply = Reply::ok(b"pong".to_vec());
    writer.send_response(conn, &reply)?;
    Ok(())
}

/// Handler para `GET /echo`
///
/// El body de la respuesta es todo lo que sigue a la request line, hasta
/// el terminador de línea en blanco (o hasta el final del buffer si no
/// hay terminador). Sin acceso a estado.
///
/// # Ejemplo de intercambio
/// ```text
/// → GET /echo HTTP/1.1\r\nhola\r\n\r\n
/// ← HTTP/1.1 200 OK\r\nContent-Length: 4\r\n\r\nhola
/// ```
pub fn echo_handler<W: Write>(
    conn: &mut W,
    writer: &ResponseWriter,
    raw: &[u8],
) -> Result<(), HandlerError> {
    let body = request::echo_body(raw);
    let reply = Reply::ok(body.to_vec());
    writer.send_response(conn, &reply)?;
    Ok(())
}

/// Handler para `GET /stats`
///
/// Formatea los cinco contadores en un body de texto. El snapshot se toma
/// bajo un único lock, así que los cinco valores son consistentes entre
/// sí. El envío de esta misma respuesta se contabiliza después, como
/// cualquier otra.
///
/// # Body de ejemplo
/// ```text
/// Requests: 3
/// Header bytes: 114
/// Body bytes: 42
/// Errors: 1
/// Error bytes: 24
/// ```
pub fn stats_handler<W: Write>(conn: &mut W, writer: &ResponseWriter) -> Result<(), HandlerError> {
    let body = writer.stats().format_body();
    let reply = Reply::ok_text(&body);
    writer.send_response(conn, &reply)?;
    Ok(())
}

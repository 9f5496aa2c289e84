//! # Handler de File-Serve
//! src/handlers/file.rs
//!
//! Sirve un archivo relativo al working directory del proceso, en chunks
//! acotados, usando el contrato de envío garantizado por chunk.
//!
//! El path se usa tal cual llega, relativo al working directory del
//! proceso, sin sandboxing.

use crate::handlers::HandlerError;
use crate::http::{response, StatusCode};
use crate::server::writer::{send_all, ResponseWriter};
use std::fs::File;
use std::io::{Read, Write};

/// Tamaño de chunk para el streaming del archivo
pub const FILE_CHUNK_SIZE: usize = 1024;

/// Handler para `GET /<path>` (cualquier path que no sea una operación fija)
///
/// - Si el archivo no se puede abrir: responde el literal 404 y termina.
///   El 404 no actualiza los contadores de error.
/// - Si se abre: envía el head con `Content-Length` igual al tamaño del
///   archivo y luego el contenido en chunks de 1024 bytes. Los bytes de
///   head se suman al enviar el head, los de body chunk a chunk, y el
///   request se cuenta al completar el stream.
pub fn file_handler<W: Write>(
    conn: &mut W,
    writer: &ResponseWriter,
    path: &str,
) -> Result<(), HandlerError> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            send_all(conn, &response::error_literal(StatusCode::NotFound))?;
            return Ok(());
        }
    };

    let file_size = file.metadata()?.len() as usize;

    let head = response::ok_head(file_size);
    send_all(conn, &head)?;
    writer.stats().record_head_bytes(head.len());

    let mut chunk = vec![0u8; FILE_CHUNK_SIZE];
    loop {
        let n = file.read(&mut chunk)?;
        if n == 0 {
            break;
        }

        send_all(conn, &chunk[..n])?;
        writer.stats().record_body_bytes(n);
    }

    writer.stats().record_request();
    Ok(())
}

//! # Envío Garantizado de Respuestas
//! src/server/writer.rs
//!
//! El transporte puede aceptar menos bytes de los pedidos en cada write.
//! Este módulo garantiza la transmisión completa: primero todos los bytes
//! del head, después todos los del body, sin reordenar. Tras cada envío
//! actualiza los contadores de tráfico bajo el lock de estadísticas.

use crate::http::{response, Reply, StatusCode};
use crate::stats::StatsCollector;
use std::io::{self, ErrorKind, Write};

/// Escritor de respuestas con contabilidad de tráfico
///
/// Es genérico sobre el transporte (`io::Write`) para poder probarlo con
/// transportes que escriben de a pedazos.
pub struct ResponseWriter {
    stats: StatsCollector,
}

impl ResponseWriter {
    /// Crea un writer que contabiliza sobre el collector dado
    pub fn new(stats: StatsCollector) -> Self {
        Self { stats }
    }

    /// Envía una respuesta exitosa completa: head, luego body
    ///
    /// Al completar, suma 1 request y los bytes de head/body enviados.
    pub fn send_response<W: Write>(&self, conn: &mut W, reply: &Reply) -> io::Result<()> {
        send_all(conn, reply.head())?;
        send_all(conn, reply.body())?;

        self.stats
            .record_response(reply.head().len(), reply.body().len());

        Ok(())
    }

    /// Envía una respuesta de error literal (sin body)
    ///
    /// Al completar, suma 1 error y los bytes del literal.
    pub fn send_error<W: Write>(&self, conn: &mut W, status: StatusCode) -> io::Result<()> {
        let literal = response::error_literal(status);
        send_all(conn, &literal)?;

        self.stats.record_error(literal.len());

        Ok(())
    }

    /// Acceso al collector (file-serve contabiliza chunk a chunk)
    pub fn stats(&self) -> &StatsCollector {
        &self.stats
    }
}

/// Escribe el buffer completo sobre un transporte que puede aceptar
/// escrituras parciales
///
/// Reintenta hasta entregar todos los bytes. Un write que retorna 0 se
/// convierte en `WriteZero` en vez de quedar en loop; `Interrupted` se
/// reintenta.
pub fn send_all<W: Write>(conn: &mut W, buffer: &[u8]) -> io::Result<()> {
    let mut remaining = buffer;

    while !remaining.is_empty() {
        match conn.write(remaining) {
            Ok(0) => {
                return Err(io::Error::new(
                    ErrorKind::WriteZero,
                    "transport accepted zero bytes",
                ));
            }
            Ok(n) => remaining = &remaining[n..],
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Transporte que acepta como máximo `chunk` bytes por write
    struct PartialTransport {
        written: Vec<u8>,
        chunk: usize,
    }

    impl PartialTransport {
        fn new(chunk: usize) -> Self {
            Self {
                written: Vec::new(),
                chunk,
            }
        }
    }

    impl Write for PartialTransport {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let take = buf.len().min(self.chunk);
            self.written.extend_from_slice(&buf[..take]);
            Ok(take)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Transporte que deja de aceptar bytes después de `limit`
    struct BrokenTransport {
        accepted: usize,
        limit: usize,
    }

    impl Write for BrokenTransport {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.accepted >= self.limit {
                return Ok(0);
            }
            let take = buf.len().min(self.limit - self.accepted);
            self.accepted += take;
            Ok(take)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    // ==================== send_all ====================

    #[test]
    fn test_send_all_full_write() {
        let mut conn = PartialTransport::new(1024);
        send_all(&mut conn, b"hello").unwrap();
        assert_eq!(conn.written, b"hello");
    }

    #[test]
    fn test_send_all_one_byte_at_a_time() {
        let mut conn = PartialTransport::new(1);
        send_all(&mut conn, b"todo completo").unwrap();
        assert_eq!(conn.written, b"todo completo");
    }

    #[test]
    fn test_send_all_empty_buffer() {
        let mut conn = PartialTransport::new(4);
        send_all(&mut conn, b"").unwrap();
        assert!(conn.written.is_empty());
    }

    #[test]
    fn test_send_all_write_zero_is_error() {
        let mut conn = BrokenTransport {
            accepted: 0,
            limit: 3,
        };
        let err = send_all(&mut conn, b"demasiado largo").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WriteZero);
    }

    // ==================== send_response ====================

    #[test]
    fn test_send_response_head_then_body() {
        let stats = StatsCollector::new();
        let writer = ResponseWriter::new(stats.clone());
        let mut conn = PartialTransport::new(3);

        let reply = Reply::ok(b"pong".to_vec());
        writer.send_response(&mut conn, &reply).unwrap();

        // Head completo primero, body completo después
        let expected = b"HTTP/1.1 200 OK\r\nContent-Length: 4\r\n\r\npong";
        assert_eq!(conn.written, expected.to_vec());
    }

    #[test]
    fn test_send_response_updates_counters() {
        let stats = StatsCollector::new();
        let writer = ResponseWriter::new(stats.clone());
        let mut conn = PartialTransport::new(1);

        let reply = Reply::ok(b"pong".to_vec());
        writer.send_response(&mut conn, &reply).unwrap();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.requests, 1);
        assert_eq!(snapshot.header_bytes, reply.head().len() as u64);
        assert_eq!(snapshot.body_bytes, 4);
        assert_eq!(snapshot.errors, 0);
    }

    #[test]
    fn test_send_response_failure_does_not_count() {
        let stats = StatsCollector::new();
        let writer = ResponseWriter::new(stats.clone());
        let mut conn = BrokenTransport {
            accepted: 0,
            limit: 5,
        };

        let reply = Reply::ok(b"pong".to_vec());
        assert!(writer.send_response(&mut conn, &reply).is_err());

        // La contabilidad es post-hoc: un envío fallido no suma
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.requests, 0);
        assert_eq!(snapshot.header_bytes, 0);
    }

    // ==================== send_error ====================

    #[test]
    fn test_send_error_literal_and_counters() {
        let stats = StatsCollector::new();
        let writer = ResponseWriter::new(stats.clone());
        let mut conn = PartialTransport::new(2);

        writer
            .send_error(&mut conn, StatusCode::BadRequest)
            .unwrap();

        assert_eq!(conn.written, b"HTTP/1.1 400 Bad Request");

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.errors, 1);
        assert_eq!(snapshot.error_bytes, 24);
        assert_eq!(snapshot.requests, 0);
    }
}

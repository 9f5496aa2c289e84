//! # Construcción de Responses
//!
//! Este módulo construye las respuestas del servidor en el formato exacto
//! del protocolo de wire.
//!
//! ## Formato de una respuesta exitosa
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Length: <N>\r\n
//! \r\n
//! <exactamente N bytes de body>
//! ```
//!
//! ## Formato de una respuesta de error
//!
//! Los errores son literales sin body y sin CRLF final:
//!
//! ```text
//! HTTP/1.1 400 Bad Request
//! HTTP/1.1 404 Not Found
//! ```

use super::StatusCode;

/// Respuesta como par head + body
///
/// El head es la status line más el header `Content-Length` y el
/// terminador; el body son exactamente `Content-Length` bytes. El
/// `ResponseWriter` garantiza la entrega completa de ambos, en ese orden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    head: Vec<u8>,
    body: Vec<u8>,
}

impl Reply {
    /// Crea una respuesta 200 OK con el body dado
    ///
    /// El `Content-Length` se calcula automáticamente.
    ///
    /// # Ejemplo
    /// ```
    /// use request_server::http::Reply;
    ///
    /// let reply = Reply::ok(b"pong".to_vec());
    /// assert_eq!(reply.head(), b"HTTP/1.1 200 OK\r\nContent-Length: 4\r\n\r\n");
    /// assert_eq!(reply.body(), b"pong");
    /// ```
    pub fn ok(body: Vec<u8>) -> Self {
        Self {
            head: ok_head(body.len()),
            body,
        }
    }

    /// Crea una respuesta 200 OK desde un string
    pub fn ok_text(body: &str) -> Self {
        Self::ok(body.as_bytes().to_vec())
    }

    /// Obtiene el head (status line + headers + línea en blanco)
    pub fn head(&self) -> &[u8] {
        &self.head
    }

    /// Obtiene el body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Construye el head de una respuesta 200 OK para un body de `content_length` bytes
///
/// File-serve lo usa suelto porque envía el body en chunks después del head.
pub fn ok_head(content_length: usize) -> Vec<u8> {
    format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\n\r\n",
        StatusCode::Ok,
        content_length
    )
    .into_bytes()
}

/// Construye la respuesta literal de un error (sin body, sin CRLF final)
///
/// # Ejemplo
/// ```
/// use request_server::http::{response, StatusCode};
///
/// assert_eq!(
///     response::error_literal(StatusCode::NotFound),
///     b"HTTP/1.1 404 Not Found"
/// );
/// ```
pub fn error_literal(status: StatusCode) -> Vec<u8> {
    format!("HTTP/1.1 {}", status).into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_reply_head_format() {
        let reply = Reply::ok(b"pong".to_vec());
        assert_eq!(
            reply.head(),
            b"HTTP/1.1 200 OK\r\nContent-Length: 4\r\n\r\n"
        );
        assert_eq!(reply.body(), b"pong");
    }

    #[test]
    fn test_ok_reply_empty_body() {
        let reply = Reply::ok(Vec::new());
        assert_eq!(
            reply.head(),
            b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n"
        );
        assert!(reply.body().is_empty());
    }

    #[test]
    fn test_ok_text() {
        let reply = Reply::ok_text("hola");
        assert_eq!(reply.body(), b"hola");
        let head = String::from_utf8(reply.head().to_vec()).unwrap();
        assert!(head.contains("Content-Length: 4"));
    }

    #[test]
    fn test_ok_head_standalone() {
        let head = ok_head(1234);
        assert_eq!(
            head,
            b"HTTP/1.1 200 OK\r\nContent-Length: 1234\r\n\r\n".to_vec()
        );
    }

    #[test]
    fn test_error_literal_400() {
        assert_eq!(
            error_literal(StatusCode::BadRequest),
            b"HTTP/1.1 400 Bad Request".to_vec()
        );
    }

    #[test]
    fn test_error_literal_404() {
        assert_eq!(
            error_literal(StatusCode::NotFound),
            b"HTTP/1.1 404 Not Found".to_vec()
        );
    }

    #[test]
    fn test_error_literal_has_no_trailing_crlf() {
        let literal = error_literal(StatusCode::BadRequest);
        assert!(!literal.ends_with(b"\r\n"));
    }
}

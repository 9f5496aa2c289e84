//! # Clasificación de Requests
//! src/http/request.rs
//!
//! Este módulo parsea la request line una sola vez y la clasifica en una
//! de las seis operaciones del servidor.
//!
//! ## Formato de un Request
//!
//! ```text
//! GET /ping HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! <body opcional>
//! ```
//!
//! ## Operaciones reconocidas
//!
//! | Request line            | Operación  |
//! |-------------------------|------------|
//! | `GET /ping HTTP/1.1`    | Ping       |
//! | `GET /echo HTTP/1.1`    | Echo       |
//! | `POST /write HTTP/1.1`  | Write      |
//! | `GET /read HTTP/1.1`    | Read       |
//! | `GET /stats HTTP/1.1`   | Stats      |
//! | `GET /<path> HTTP/1.1`  | File-serve |
//!
//! Cualquier otra cosa es un `ParseError` que el worker responde con 400.

/// Tamaño máximo de un request (bytes leídos del socket)
pub const MAX_REQUEST_SIZE: usize = 2048;

/// Operación a la que se despacha un request clasificado
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    /// GET /ping - respuesta fija "pong"
    Ping,

    /// GET /echo - devuelve el resto del request como body
    Echo,

    /// POST /write - reemplaza el contenido del registro compartido
    Write,

    /// GET /read - lee el contenido del registro compartido
    Read,

    /// GET /stats - snapshot de los contadores de tráfico
    Stats,

    /// GET /<path> - sirve un archivo relativo al working directory.
    /// El path va sin el '/' inicial, sin sandboxing.
    File(String),
}

/// Errores que pueden ocurrir durante la clasificación
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request vacío
    EmptyRequest,

    /// La request line no termina en CRLF
    MissingRequestLine,

    /// Formato inválido de la request line
    InvalidRequestLine,

    /// Método HTTP no soportado
    UnsupportedMethod(String),

    /// Target no válido para el método (ej: POST a un path distinto de /write)
    UnsupportedTarget(String),

    /// Versión HTTP incorrecta (debe ser HTTP/1.0 o HTTP/1.1)
    InvalidHttpVersion(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyRequest => write!(f, "Empty request"),
            ParseError::MissingRequestLine => write!(f, "Request line not terminated by CRLF"),
            ParseError::InvalidRequestLine => write!(f, "Invalid request line format"),
            ParseError::UnsupportedMethod(m) => write!(f, "Unsupported HTTP method: {}", m),
            ParseError::UnsupportedTarget(t) => write!(f, "Unsupported target: {}", t),
            ParseError::InvalidHttpVersion(v) => write!(f, "Invalid HTTP version: {}", v),
        }
    }
}

impl std::error::Error for ParseError {}

impl RequestKind {
    /// Clasifica un request crudo en una de las seis operaciones
    ///
    /// Parsea la request line (hasta el primer CRLF) exactamente una vez
    /// y decide por método + path. Primero se prueban los paths fijos;
    /// cualquier otro GET es file-serve.
    ///
    /// # Ejemplo
    /// ```
    /// use request_server::http::RequestKind;
    ///
    /// let kind = RequestKind::classify(b"GET /ping HTTP/1.1\r\n\r\n").unwrap();
    /// assert_eq!(kind, RequestKind::Ping);
    ///
    /// let kind = RequestKind::classify(b"GET /index.html HTTP/1.1\r\n\r\n").unwrap();
    /// assert_eq!(kind, RequestKind::File("index.html".to_string()));
    /// ```
    pub fn classify(buffer: &[u8]) -> Result<Self, ParseError> {
        if buffer.is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        // Request line = bytes hasta el primer CRLF
        let line_end = find_subsequence(buffer, b"\r\n")
            .ok_or(ParseError::MissingRequestLine)?;

        let line = std::str::from_utf8(&buffer[..line_end])
            .map_err(|_| ParseError::InvalidRequestLine)?;

        // Debe tener exactamente 3 partes: METHOD PATH VERSION
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidRequestLine);
        }

        let (method, target, version) = (parts[0], parts[1], parts[2]);

        if !version.starts_with("HTTP/1.") {
            return Err(ParseError::InvalidHttpVersion(version.to_string()));
        }

        if !target.starts_with('/') {
            return Err(ParseError::InvalidRequestLine);
        }

        match method {
            "GET" => Ok(match target {
                "/ping" => RequestKind::Ping,
                "/echo" => RequestKind::Echo,
                "/read" => RequestKind::Read,
                "/stats" => RequestKind::Stats,
                path => RequestKind::File(path[1..].to_string()),
            }),
            "POST" => {
                if target == "/write" {
                    Ok(RequestKind::Write)
                } else {
                    Err(ParseError::UnsupportedTarget(target.to_string()))
                }
            }
            other => Err(ParseError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Extrae el body de un request de echo
///
/// El body es todo lo que sigue a la request line, hasta el terminador
/// de línea en blanco (`\r\n\r\n`) o hasta el final del buffer si no
/// hay terminador.
///
/// # Ejemplo
/// ```
/// use request_server::http::request::echo_body;
///
/// let raw = b"GET /echo HTTP/1.1\r\nhola mundo\r\n\r\n";
/// assert_eq!(echo_body(raw), b"hola mundo");
/// ```
pub fn echo_body(buffer: &[u8]) -> &[u8] {
    let start = match find_subsequence(buffer, b"\r\n") {
        Some(pos) => pos + 2,
        None => return &[],
    };

    let end = find_subsequence(buffer, b"\r\n\r\n").unwrap_or(buffer.len());

    if start >= end {
        return &[];
    }

    &buffer[start..end]
}

/// Busca el header `Content-Length` en las líneas de header y retorna
/// su valor numérico
///
/// Los headers van desde el fin de la request line hasta la línea en
/// blanco. El nombre se compara sin distinguir mayúsculas.
///
/// Retorna `None` si el header no está o su valor no es un número.
pub fn content_length(buffer: &[u8]) -> Option<usize> {
    let headers_start = find_subsequence(buffer, b"\r\n")? + 2;
    let headers_end = find_subsequence(buffer, b"\r\n\r\n").unwrap_or(buffer.len());

    if headers_start >= headers_end {
        return None;
    }

    let headers = std::str::from_utf8(&buffer[headers_start..headers_end]).ok()?;

    for line in headers.split("\r\n") {
        if let Some(colon_pos) = line.find(':') {
            let name = line[..colon_pos].trim();
            let value = line[colon_pos + 1..].trim();

            if name.eq_ignore_ascii_case("Content-Length") {
                return value.parse().ok();
            }
        }
    }

    None
}

/// Retorna el offset del primer byte del body (justo después de `\r\n\r\n`)
///
/// `None` si el request no tiene terminador de headers.
pub fn body_offset(buffer: &[u8]) -> Option<usize> {
    find_subsequence(buffer, b"\r\n\r\n").map(|pos| pos + 4)
}

/// Busca una subsecuencia de bytes y retorna la posición de su inicio
fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

//! # Módulo HTTP
//!
//! Este módulo implementa el subconjunto de HTTP/1.1 que habla el
//! servidor, sin usar librerías de alto nivel. Incluye:
//!
//! - Clasificación de requests en las seis operaciones
//! - Construcción de responses (head + body)
//! - Manejo de status codes
//!
//! ### Formato de Request
//!
//! ```text
//! GET /ping HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! <body opcional>
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Length: 4\r\n
//! \r\n
//! pong
//! ```
//!
//! Las respuestas de error (400/404) son literales sin body.

pub mod request;   // Clasificación de requests
pub mod response;  // Construcción de responses
pub mod status;    // Códigos de estado

// Re-exportamos los tipos principales para facilitar su uso
pub use request::{ParseError, RequestKind, MAX_REQUEST_SIZE};
pub use response::Reply;
pub use status::StatusCode;

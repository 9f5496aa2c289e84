//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Este módulo implementa el núcleo concurrente del servidor:
//! 1. El acceptor acepta conexiones y las encola
//! 2. La cola acotada desacopla llegada de procesamiento
//! 3. El pool de workers atiende conexión por conexión
//! 4. El response writer garantiza la entrega completa

pub mod queue;
pub mod tcp;
pub mod writer;

// Re-exportar para facilitar el uso
pub use queue::ConnectionQueue;
pub use tcp::Server;
pub use writer::ResponseWriter;

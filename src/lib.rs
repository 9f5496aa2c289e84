//! # Request Server
//! src/lib.rs
//!
//! Servidor de requests concurrente implementado desde cero para demostrar
//! conceptos de sistemas operativos: productor/consumidor, sincronización,
//! exclusión mutua y manejo de recursos compartidos.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Clasificación de requests y construcción de responses
//! - `server`: Acceptor, cola acotada, pool de workers y envío garantizado
//! - `handlers`: Implementación de las seis operaciones (ping, echo, write,
//!   read, stats, file-serve)
//! - `state`: Estado compartido del proceso (registro + contexto)
//! - `stats`: Contadores acumulativos de tráfico
//! - `config`: Configuración por CLI y variables de entorno
//!
//! ## Flujo de datos
//!
//! ```text
//! Acceptor → ConnectionQueue → Worker → RequestKind → Handler
//!          → (SharedRegister / StatsCollector) → ResponseWriter
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```ignore
//! use request_server::server::Server;
//! use request_server::config::Config;
//!
//! let mut server = Server::new(Config::default());
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod handlers;
pub mod http;
pub mod server;
pub mod state;
pub mod stats;

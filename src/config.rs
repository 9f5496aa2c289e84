//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor con soporte completo
//! para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./request_server --port 8080 --workers 4 --queue-capacity 10
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! SERVER_PORT=8080 SERVER_HOST=0.0.0.0 ./request_server
//! ```

use clap::Parser;

/// Configuración del servidor concurrente
#[derive(Debug, Clone, Parser)]
#[command(name = "request_server")]
#[command(about = "Servidor de requests concurrente para Principios de Sistemas Operativos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8080", env = "SERVER_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "SERVER_HOST")]
    pub host: String,

    /// Número de workers del pool (consumidores de la cola)
    #[arg(long, default_value = "4", env = "SERVER_WORKERS")]
    pub workers: usize,

    /// Capacidad de la cola acotada entre acceptor y workers
    #[arg(long = "queue-capacity", default_value = "10", env = "QUEUE_CAPACITY")]
    pub queue_capacity: usize,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use request_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.workers == 0 {
            return Err("Workers must be >= 1".to_string());
        }

        if self.queue_capacity == 0 {
            return Err("Queue capacity must be >= 1".to_string());
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("⚙️  Configuración:");
        println!("   Address:        {}", self.address());
        println!("   Workers:        {}", self.workers);
        println!("   Queue capacity: {}", self.queue_capacity);
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            workers: 4,
            queue_capacity: 10,
        }
    }
}

//! # Request Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor. Parsea la configuración desde CLI/env,
//! la valida y arranca el servidor (acceptor + pool de workers).

use request_server::config::Config;
use request_server::server::Server;

fn main() {
    println!("=================================");
    println!("  RedUnix Request Server");
    println!("  Principios de Sistemas Operativos");
    println!("=================================\n");

    // Crear configuración (CLI args + variables de entorno)
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.print_summary();

    // Crear el servidor
    let mut server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}

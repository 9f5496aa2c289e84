//! # Estado Compartido del Servidor
//! src/state/mod.rs
//!
//! Encapsula todo el estado mutable del proceso en un objeto explícito
//! (`ServerContext`) en vez de variables globales sueltas. El contexto se
//! clona en cada worker al construir el pool; los clones comparten el
//! mismo registro y los mismos contadores.

pub mod register;

pub use register::SharedRegister;

use crate::stats::StatsCollector;

/// Contexto con el estado compartido del proceso
///
/// `Clone` es barato: cada campo envuelve su estado en un `Arc`.
#[derive(Clone)]
pub struct ServerContext {
    /// Registro compartido (escrito por Write, leído por Read)
    pub register: SharedRegister,

    /// Contadores acumulativos de tráfico
    pub stats: StatsCollector,
}

impl ServerContext {
    /// Crea un contexto nuevo con el registro en su sentinel y los
    /// contadores en cero
    pub fn new() -> Self {
        Self {
            register: SharedRegister::new(),
            stats: StatsCollector::new(),
        }
    }
}

impl Default for ServerContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_initial_state() {
        let context = ServerContext::new();
        assert_eq!(context.register.load(), b"<empty>");
        assert_eq!(context.stats.snapshot().requests, 0);
    }

    #[test]
    fn test_context_clone_shares_state() {
        let context = ServerContext::new();
        let alias = context.clone();

        context.register.store(b"dato");
        context.stats.record_request();

        assert_eq!(alias.register.load(), b"dato");
        assert_eq!(alias.stats.snapshot().requests, 1);
    }
}

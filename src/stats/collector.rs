//! # Collector de Estadísticas
//! src/stats/collector.rs
//!
//! Recolecta los cinco contadores acumulativos de tráfico del servidor:
//! requests atendidos, bytes de head, bytes de body, respuestas de error
//! y bytes de error. Los cinco viven bajo un único mutex para que el
//! snapshot sea internamente consistente.

use std::sync::{Arc, Mutex};

/// Collector de estadísticas thread-safe
///
/// `Clone` comparte los mismos contadores (el estado vive detrás de un `Arc`).
#[derive(Clone)]
pub struct StatsCollector {
    inner: Arc<Mutex<StatsData>>,
}

/// Datos internos de estadísticas
///
/// Los cinco contadores son monotónicamente no-decrecientes durante la
/// vida del proceso.
struct StatsData {
    /// Requests atendidos con respuesta exitosa
    requests: u64,

    /// Bytes de head enviados
    header_bytes: u64,

    /// Bytes de body enviados
    body_bytes: u64,

    /// Respuestas de error enviadas
    errors: u64,

    /// Bytes de respuestas de error enviados
    error_bytes: u64,
}

impl StatsCollector {
    /// Crea un nuevo collector con los contadores en cero
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StatsData {
                requests: 0,
                header_bytes: 0,
                body_bytes: 0,
                errors: 0,
                error_bytes: 0,
            })),
        }
    }

    /// Registra una respuesta exitosa completa (head + body)
    pub fn record_response(&self, head_bytes: usize, body_bytes: usize) {
        let mut data = self.inner.lock().unwrap();
        data.requests += 1;
        data.header_bytes += head_bytes as u64;
        data.body_bytes += body_bytes as u64;
    }

    /// Registra una respuesta de error
    pub fn record_error(&self, error_bytes: usize) {
        let mut data = self.inner.lock().unwrap();
        data.errors += 1;
        data.error_bytes += error_bytes as u64;
    }

    /// Suma bytes de head (file-serve envía el head por separado)
    pub fn record_head_bytes(&self, n: usize) {
        let mut data = self.inner.lock().unwrap();
        data.header_bytes += n as u64;
    }

    /// Suma bytes de body (file-serve los contabiliza chunk a chunk)
    pub fn record_body_bytes(&self, n: usize) {
        let mut data = self.inner.lock().unwrap();
        data.body_bytes += n as u64;
    }

    /// Incrementa el contador de requests (file-serve, al terminar el stream)
    pub fn record_request(&self) {
        let mut data = self.inner.lock().unwrap();
        data.requests += 1;
    }

    /// Obtiene un snapshot consistente de los cinco contadores
    ///
    /// Los cinco valores se leen bajo el mismo lock.
    pub fn snapshot(&self) -> StatsSnapshot {
        let data = self.inner.lock().unwrap();
        StatsSnapshot {
            requests: data.requests,
            header_bytes: data.header_bytes,
            body_bytes: data.body_bytes,
            errors: data.errors,
            error_bytes: data.error_bytes,
        }
    }

    /// Formatea el body textual de la operación Stats
    ///
    /// # Ejemplo
    /// ```
    /// use request_server::stats::StatsCollector;
    ///
    /// let stats = StatsCollector::new();
    /// assert_eq!(
    ///     stats.format_body(),
    ///     "Requests: 0\nHeader bytes: 0\nBody bytes: 0\nErrors: 0\nError bytes: 0"
    /// );
    /// ```
    pub fn format_body(&self) -> String {
        let snapshot = self.snapshot();
        format!(
            "Requests: {}\nHeader bytes: {}\nBody bytes: {}\nErrors: {}\nError bytes: {}",
            snapshot.requests,
            snapshot.header_bytes,
            snapshot.body_bytes,
            snapshot.errors,
            snapshot.error_bytes
        )
    }
}

impl Default for StatsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot de estadísticas (para uso externo)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub requests: u64,
    pub header_bytes: u64,
    pub body_bytes: u64,
    pub errors: u64,
    pub error_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_initial_counters_are_zero() {
        let stats = StatsCollector::new();
        let snapshot = stats.snapshot();

        assert_eq!(snapshot.requests, 0);
        assert_eq!(snapshot.header_bytes, 0);
        assert_eq!(snapshot.body_bytes, 0);
        assert_eq!(snapshot.errors, 0);
        assert_eq!(snapshot.error_bytes, 0);
    }

    #[test]
    fn test_record_response() {
        let stats = StatsCollector::new();

        stats.record_response(38, 4);
        stats.record_response(38, 10);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.requests, 2);
        assert_eq!(snapshot.header_bytes, 76);
        assert_eq!(snapshot.body_bytes, 14);
        assert_eq!(snapshot.errors, 0);
    }

    #[test]
    fn test_record_error() {
        let stats = StatsCollector::new();

        stats.record_error(24);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.errors, 1);
        assert_eq!(snapshot.error_bytes, 24);
        assert_eq!(snapshot.requests, 0);
    }

    #[test]
    fn test_incremental_file_accounting() {
        // file-serve contabiliza head, chunks y request por separado
        let stats = StatsCollector::new();

        stats.record_head_bytes(40);
        stats.record_body_bytes(1024);
        stats.record_body_bytes(512);
        stats.record_request();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.requests, 1);
        assert_eq!(snapshot.header_bytes, 40);
        assert_eq!(snapshot.body_bytes, 1536);
    }

    #[test]
    fn test_format_body_exact() {
        let stats = StatsCollector::new();
        stats.record_response(38, 4);
        stats.record_error(24);

        assert_eq!(
            stats.format_body(),
            "Requests: 1\nHeader bytes: 38\nBody bytes: 4\nErrors: 1\nError bytes: 24"
        );
    }

    #[test]
    fn test_clone_shares_counters() {
        let stats = StatsCollector::new();
        let alias = stats.clone();

        stats.record_response(10, 5);
        assert_eq!(alias.snapshot().requests, 1);
    }

    #[test]
    fn test_counters_monotonic_under_concurrency() {
        let stats = StatsCollector::new();

        let mut handles = Vec::new();
        for _ in 0..4 {
            let stats = stats.clone();
            handles.push(thread::spawn(move || {
                for _ in 0..250 {
                    stats.record_response(38, 4);
                    stats.record_error(24);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.requests, 1000);
        assert_eq!(snapshot.errors, 1000);
        assert_eq!(snapshot.header_bytes, 38_000);
        assert_eq!(snapshot.body_bytes, 4_000);
        assert_eq!(snapshot.error_bytes, 24_000);
    }

    #[test]
    fn test_snapshot_is_internally_consistent() {
        // Cada record_response suma 1 request y 38/4 bytes; un snapshot
        // tomado en cualquier momento debe respetar esa proporción
        let stats = StatsCollector::new();

        let writer = {
            let stats = stats.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    stats.record_response(38, 4);
                }
            })
        };

        for _ in 0..100 {
            let snapshot = stats.snapshot();
            assert_eq!(snapshot.header_bytes, snapshot.requests * 38);
            assert_eq!(snapshot.body_bytes, snapshot.requests * 4);
        }

        writer.join().unwrap();
    }
}

//! # Registro Compartido
//! src/state/register.rs
//!
//! Implementa el registro mutable compartido del proceso: un único buffer
//! de hasta 1024 bytes protegido por un mutex. Write lo reemplaza
//! completo (nunca append) y Read lo consulta.

use std::sync::{Arc, Mutex};

/// Tamaño máximo del registro en bytes
pub const MAX_REGISTER_SIZE: usize = 1024;

/// Contenido inicial (sentinel) del registro
const INITIAL_CONTENT: &[u8] = b"<empty>";

/// Registro compartido thread-safe
///
/// `Clone` comparte el mismo registro (el estado vive detrás de un `Arc`).
///
/// # Ejemplo
/// ```
/// use request_server::state::SharedRegister;
///
/// let register = SharedRegister::new();
/// assert_eq!(register.load(), b"<empty>");
///
/// register.store(b"hola");
/// assert_eq!(register.load(), b"hola");
/// ```
#[derive(Clone)]
pub struct SharedRegister {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedRegister {
    /// Crea un registro nuevo con el contenido sentinel `<empty>`
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(INITIAL_CONTENT.to_vec())),
        }
    }

    /// Reemplaza el contenido completo del registro
    ///
    /// El payload se trunca a `MAX_REGISTER_SIZE` bytes. Retorna una copia
    /// de lo que quedó almacenado, tomada bajo el mismo lock del reemplazo
    /// (es la confirmación que Write devuelve al cliente).
    pub fn store(&self, payload: &[u8]) -> Vec<u8> {
        let take = payload.len().min(MAX_REGISTER_SIZE);
        let mut content = self.inner.lock().unwrap();
        content.clear();
        content.extend_from_slice(&payload[..take]);
        content.clone()
    }

    /// Lee una copia del contenido actual del registro
    pub fn load(&self) -> Vec<u8> {
        let content = self.inner.lock().unwrap();
        content.clone()
    }

    /// Retorna el tamaño actual del contenido
    pub fn len(&self) -> usize {
        let content = self.inner.lock().unwrap();
        content.len()
    }

    /// Verifica si el registro está vacío (nunca lo está: arranca con el sentinel)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SharedRegister {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_initial_sentinel() {
        let register = SharedRegister::new();
        assert_eq!(register.load(), b"<empty>");
        assert_eq!(register.len(), 7);
    }

    #[test]
    fn test_store_replaces_content() {
        let register = SharedRegister::new();

        register.store(b"primero");
        register.store(b"segundo");

        // Reemplazo completo, no append
        assert_eq!(register.load(), b"segundo");
    }

    #[test]
    fn test_store_returns_stored_copy() {
        let register = SharedRegister::new();
        let stored = register.store(b"contenido");
        assert_eq!(stored, b"contenido");
        assert_eq!(stored, register.load());
    }

    #[test]
    fn test_store_truncates_to_capacity() {
        let register = SharedRegister::new();

        let payload = vec![b'x'; MAX_REGISTER_SIZE + 500];
        let stored = register.store(&payload);

        assert_eq!(stored.len(), MAX_REGISTER_SIZE);
        assert_eq!(register.len(), MAX_REGISTER_SIZE);
    }

    #[test]
    fn test_store_exact_capacity() {
        let register = SharedRegister::new();

        let payload = vec![b'y'; MAX_REGISTER_SIZE];
        let stored = register.store(&payload);

        assert_eq!(stored, payload);
    }

    #[test]
    fn test_store_empty_payload() {
        let register = SharedRegister::new();
        let stored = register.store(b"");
        assert!(stored.is_empty());
        assert!(register.is_empty());
    }

    #[test]
    fn test_clone_shares_state() {
        let register = SharedRegister::new();
        let alias = register.clone();

        register.store(b"compartido");
        assert_eq!(alias.load(), b"compartido");
    }

    #[test]
    fn test_concurrent_writes_are_not_interleaved() {
        // Dos escritores concurrentes: al final el registro contiene
        // exactamente el payload de uno de los dos, nunca una mezcla
        let register = SharedRegister::new();

        let payload_a = vec![b'a'; 512];
        let payload_b = vec![b'b'; 512];

        let mut handles = Vec::new();
        for payload in [payload_a.clone(), payload_b.clone()] {
            let register = register.clone();
            handles.push(thread::spawn(move || {
                for _ in 0..200 {
                    register.store(&payload);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let content = register.load();
        assert!(content == payload_a || content == payload_b);
    }
}

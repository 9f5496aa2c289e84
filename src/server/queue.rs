//! # Cola Acotada de Conexiones
//! src/server/queue.rs
//!
//! Implementa la cola FIFO acotada entre el acceptor (productor único) y
//! el pool de workers (consumidores). Es el buffer acotado clásico:
//! un mutex serializa el acceso a la cola y dos condition variables hacen
//! de señales contadoras, una para "hay trabajo" y otra para "hay espacio".
//!
//! - `enqueue` bloquea mientras la cola esté llena (backpressure hacia el
//!   accept backlog del SO)
//! - `dequeue` bloquea mientras la cola esté vacía (los workers ociosos
//!   no hacen spin)

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};

/// Cola FIFO acotada thread-safe
///
/// `Clone` comparte la misma cola (el estado vive detrás de un `Arc`);
/// así cada worker recibe su propio handle del mismo buffer.
pub struct ConnectionQueue<T> {
    inner: Arc<QueueInner<T>>,
}

struct QueueInner<T> {
    /// Buffer FIFO, nunca crece más allá de `capacity`
    items: Mutex<VecDeque<T>>,

    /// Señal "hay trabajo pendiente" (despierta consumidores)
    not_empty: Condvar,

    /// Señal "hay espacio libre" (despierta al productor)
    not_full: Condvar,

    /// Capacidad máxima de la cola
    capacity: usize,
}

impl<T> ConnectionQueue<T> {
    /// Crea una cola nueva con la capacidad dada
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "queue capacity must be >= 1");
        Self {
            inner: Arc::new(QueueInner {
                items: Mutex::new(VecDeque::with_capacity(capacity)),
                not_empty: Condvar::new(),
                not_full: Condvar::new(),
                capacity,
            }),
        }
    }

    /// Encola un elemento al final
    ///
    /// Bloquea hasta que haya un slot libre. Al insertar, despierta a un
    /// consumidor.
    pub fn enqueue(&self, item: T) {
        let mut items = self.inner.items.lock().unwrap();

        while items.len() >= self.inner.capacity {
            items = self.inner.not_full.wait(items).unwrap();
        }

        items.push_back(item);
        self.inner.not_empty.notify_one();
    }

    /// Desencola el elemento más antiguo
    ///
    /// Bloquea hasta que haya un elemento disponible. Al extraer, despierta
    /// al productor si estaba esperando espacio.
    pub fn dequeue(&self) -> T {
        let mut items = self.inner.items.lock().unwrap();

        loop {
            if let Some(item) = items.pop_front() {
                self.inner.not_full.notify_one();
                return item;
            }

            items = self.inner.not_empty.wait(items).unwrap();
        }
    }

    /// Intenta desencolar sin bloquear
    ///
    /// Retorna `Some(item)` si había algo, `None` si la cola está vacía
    pub fn try_dequeue(&self) -> Option<T> {
        let mut items = self.inner.items.lock().unwrap();
        let item = items.pop_front();
        if item.is_some() {
            self.inner.not_full.notify_one();
        }
        item
    }

    /// Retorna el número de elementos encolados actualmente
    pub fn len(&self) -> usize {
        let items = self.inner.items.lock().unwrap();
        items.len()
    }

    /// Verifica si la cola está vacía
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Retorna la capacidad máxima
    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    /// Verifica si la cola está llena
    pub fn is_full(&self) -> bool {
        self.len() >= self.inner.capacity
    }
}

impl<T> Clone for ConnectionQueue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

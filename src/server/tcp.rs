//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor: un acceptor que encola conexiones en la
//! cola acotada y un pool fijo de workers que las procesa. Cada conexión
//! es propiedad exclusiva de un worker desde que la desencola hasta que
//! la cierra.

use crate::config::Config;
use crate::handlers;
use crate::handlers::HandlerError;
use crate::http::{RequestKind, StatusCode, MAX_REQUEST_SIZE};
use crate::server::queue::ConnectionQueue;
use crate::server::writer::ResponseWriter;
use crate::state::ServerContext;
use std::io::{self, Read};
use std::net::{TcpListener, TcpStream};
use std::thread;

/// Servidor concurrente con acceptor + pool de workers
pub struct Server {
    config: Config,
    context: ServerContext,
}

impl Server {
    /// Crea el servidor con la configuración dada
    pub fn new(config: Config) -> Self {
        Self {
            config,
            context: ServerContext::new(),
        }
    }

    /// Acceso al contexto compartido (útil en tests)
    pub fn context(&self) -> &ServerContext {
        &self.context
    }

    /// Hace bind en la dirección configurada y atiende indefinidamente
    pub fn run(&mut self) -> io::Result<()> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        println!("[+] Servidor escuchando en {}", address);
        println!("[*] Pool de {} workers, cola de capacidad {}\n",
            self.config.workers, self.config.queue_capacity);

        self.serve(listener)
    }

    /// Atiende sobre un listener ya creado
    ///
    /// Arranca el pool de workers y entra al loop del acceptor: cada
    /// conexión aceptada se encola; si la cola está llena, `enqueue`
    /// bloquea al acceptor (backpressure hacia el backlog del SO).
    ///
    /// No hay protocolo de shutdown: el servidor corre indefinidamente.
    pub fn serve(&self, listener: TcpListener) -> io::Result<()> {
        let queue = ConnectionQueue::new(self.config.queue_capacity);
        self.spawn_workers(&queue);

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => queue.enqueue(stream),
                Err(e) => eprintln!("   ❌ Error al aceptar conexión: {}", e),
            }
        }

        Ok(())
    }

    /// Arranca el pool fijo de workers
    fn spawn_workers(&self, queue: &ConnectionQueue<TcpStream>) {
        for i in 0..self.config.workers {
            let queue = queue.clone();
            let context = self.context.clone();

            thread::spawn(move || Self::worker_loop(i, queue, context));
        }
    }

    /// Loop principal del worker
    ///
    /// Desencola una conexión, la atiende y la cierra (el drop del stream
    /// cierra el socket exactamente una vez). Un request fallido se
    /// registra y el worker sigue vivo.
    fn worker_loop(id: usize, queue: ConnectionQueue<TcpStream>, context: ServerContext) {
        println!("🔧 Worker {} started", id);

        loop {
            let mut stream = queue.dequeue();

            if let Err(e) = Self::handle_connection(&mut stream, &context) {
                eprintln!("   ❌ Worker {}: error de conexión: {}", id, e);
            }
        }
    }

    /// Atiende una conexión completa: leer, clasificar, despachar
    ///
    /// Lee una sola vez hasta `MAX_REQUEST_SIZE` bytes. Si el peer cerró
    /// sin enviar nada (0 bytes), no hay respuesta. Un request que no
    /// clasifica recibe el literal 400.
    pub fn handle_connection(stream: &mut TcpStream, context: &ServerContext) -> io::Result<()> {
        let writer = ResponseWriter::new(context.stats.clone());

        let mut buffer = vec![0u8; MAX_REQUEST_SIZE];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            // Peer cerró antes de enviar nada: cerrar sin responder
            return Ok(());
        }

        let request = &buffer[..bytes_read];

        match RequestKind::classify(request) {
            Ok(kind) => Self::dispatch(stream, &writer, context, kind, request),
            Err(_) => writer.send_error(stream, StatusCode::BadRequest),
        }
    }

    /// Despacha el request clasificado a su handler
    ///
    /// Una falla local del handler (ej: write sin Content-Length) se
    /// convierte en 400; un error de I/O se propaga al worker, que solo
    /// lo registra.
    fn dispatch(
        stream: &mut TcpStream,
        writer: &ResponseWriter,
        context: &ServerContext,
        kind: RequestKind,
        request: &[u8],
    ) -> io::Result<()> {
        let result = match kind {
            RequestKind::Ping => handlers::ping_handler(stream, writer),
            RequestKind::Echo => handlers::echo_handler(stream, writer, request),
            RequestKind::Write => {
                handlers::write_handler(stream, writer, &context.register, request)
            }
            RequestKind::Read => handlers::read_handler(stream, writer, &context.register),
            RequestKind::Stats => handlers::stats_handler(stream, writer),
            RequestKind::File(path) => handlers::file_handler(stream, writer, &path),
        };

        match result {
            Ok(()) => Ok(()),
            Err(HandlerError::Io(e)) => Err(e),
            Err(_) => writer.send_error(stream, StatusCode::BadRequest),
        }
    }
}

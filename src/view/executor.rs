//! # Ejecutor Serial
//! src/view/executor.rs
//!
//! Abstracción para mandar closures al "hilo de render": un contexto de un
//! solo hilo que ejecuta las acciones en el orden en que se enviaron.
//! Quien envía retorna de inmediato, sin esperar a que la acción corra.
//!
//! ```text
//! submit(a) ─┐
//! submit(b) ─┼──► [canal FIFO] ──► hilo "render": a(), b(), c()
//! submit(c) ─┘
//! ```

use std::io;
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Acción diferida sin argumentos
pub type Action = Box<dyn FnOnce() + Send + 'static>;

/// Contexto que ejecuta acciones de a una, en orden de envío
pub trait SerialExecutor {
    /// Encola una acción. No bloquea ni garantiza cuándo se ejecuta.
    fn submit(&self, action: Action);
}

/// Ejecutor respaldado por un hilo dedicado
pub struct ThreadExecutor {
    name: String,
    sender: Option<Sender<Action>>,
    handle: Option<JoinHandle<()>>,
}

impl ThreadExecutor {
    /// Lanza el hilo del ejecutor
    pub fn spawn(name: &str) -> io::Result<Self> {
        let (sender, receiver) = mpsc::channel::<Action>();
        let thread_name = name.to_string();

        let handle = thread::Builder::new()
            .name(thread_name.clone())
            .spawn(move || {
                debug!(thread = %thread_name, "executor started");
                // Termina cuando se sueltan todos los senders
                for action in receiver {
                    action();
                }
                debug!(thread = %thread_name, "executor stopped");
            })?;

        Ok(Self {
            name: name.to_string(),
            sender: Some(sender),
            handle: Some(handle),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Deja de aceptar acciones, espera a que se ejecuten las pendientes
    /// y termina el hilo
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        drop(self.sender.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!(thread = %self.name, "executor thread panicked");
            }
        }
    }
}

impl SerialExecutor for ThreadExecutor {
    fn submit(&self, action: Action) {
        let delivered = match &self.sender {
            Some(sender) => sender.send(action).is_ok(),
            None => false,
        };
        if !delivered {
            warn!(thread = %self.name, "executor is not running; action dropped");
        }
    }
}

impl Drop for ThreadExecutor {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_runs_actions_in_submission_order() {
        let executor = ThreadExecutor::spawn("render-test").unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for i in 0..100 {
            let seen = Arc::clone(&seen);
            executor.submit(Box::new(move || seen.lock().unwrap().push(i)));
        }
        executor.shutdown();

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_actions_run_on_the_executor_thread() {
        let executor = ThreadExecutor::spawn("render-thread").unwrap();
        let thread_name = Arc::new(Mutex::new(None));

        let slot = Arc::clone(&thread_name);
        executor.submit(Box::new(move || {
            *slot.lock().unwrap() = thread::current().name().map(str::to_string);
        }));
        drop(executor);

        assert_eq!(thread_name.lock().unwrap().as_deref(), Some("render-thread"));
    }

    #[test]
    fn test_name() {
        let executor = ThreadExecutor::spawn("render").unwrap();
        assert_eq!(executor.name(), "render");
    }
}

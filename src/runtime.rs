//! # Runtime del Motor de Render
//! src/runtime.rs
//!
//! Inicialización única del runtime embebido. La llama la raíz de
//! composición (`main`); llamadas repetidas no hacen nada.

use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

#[derive(Debug, Default)]
pub struct Runtime {
    initialized: AtomicBool,
}

impl Runtime {
    pub const fn new() -> Self {
        Self {
            initialized: AtomicBool::new(false),
        }
    }

    /// Ejecuta `startup` solo la primera vez
    ///
    /// Retorna `true` si esta llamada hizo la inicialización.
    pub fn init<F: FnOnce()>(&self, startup: F) -> bool {
        if self
            .initialized
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            startup();
            debug!("runtime initialized");
            true
        } else {
            false
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }
}

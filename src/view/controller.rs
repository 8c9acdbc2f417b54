//! # Controlador de la Vista Web
//! src/view/controller.rs
//!
//! Guarda el nivel de zoom y reenvía cada operación al motor de
//! render a través de un `SerialExecutor`.
//!
//! | operación    | efecto sobre el zoom        |
//! |--------------|-----------------------------|
//! | `zoom_in`    | +0.1                        |
//! | `zoom_out`   | -0.1, nunca por debajo 0.2  |
//! | `reset_zoom` | 1.0                         |

use crate::view::executor::SerialExecutor;
use std::sync::Arc;

/// Zoom inicial
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Incremento de cada zoom in/out
pub const ZOOM_STEP: f64 = 0.1;

/// Zoom mínimo
pub const MIN_ZOOM: f64 = 0.2;

/// Motor de render que muestra la página.
///
/// Sus métodos se invocan solo desde el hilo del ejecutor.
pub trait WebEngine: Send + Sync + 'static {
    fn load(&self, url: &str);

    fn reload(&self);

    fn set_zoom(&self, zoom: f64);
}

/// Proxy entre la UI y el motor de render
pub struct WebViewController<E, X> {
    engine: Arc<E>,
    executor: X,
    zoom: f64,
}

impl<E: WebEngine, X: SerialExecutor> WebViewController<E, X> {
    pub fn new(engine: Arc<E>, executor: X) -> Self {
        Self {
            engine,
            executor,
            zoom: DEFAULT_ZOOM,
        }
    }

    /// Zoom actual (el último enviado al motor)
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn executor(&self) -> &X {
        &self.executor
    }

    pub fn load(&self, url: &str) {
        let engine = Arc::clone(&self.engine);
        let url = url.to_string();
        self.executor.submit(Box::new(move || engine.load(&url)));
    }

    pub fn reload(&self) {
        let engine = Arc::clone(&self.engine);
        self.executor.submit(Box::new(move || engine.reload()));
    }

    pub fn zoom_in(&mut self) {
        self.update_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.update_zoom((self.zoom - ZOOM_STEP).max(MIN_ZOOM));
    }

    pub fn reset_zoom(&mut self) {
        self.update_zoom(DEFAULT_ZOOM);
    }

    fn update_zoom(&mut self, value: f64) {
        self.zoom = value;
        let engine = Arc::clone(&self.engine);
        self.executor.submit(Box::new(move || engine.set_zoom(value)));
    }
}

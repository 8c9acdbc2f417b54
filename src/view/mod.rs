//! # Módulo de la Vista
//! src/view/mod.rs
//!
//! Todo lo que toca al motor de render pasa por aquí:
//!
//! - `executor`: envío de closures al hilo de render
//! - `controller`: zoom y navegación
//! - `menu`: barra de menú y sus acciones

pub mod controller;
pub mod executor;
pub mod menu;

pub use controller::{WebEngine, WebViewController};
pub use executor::{Action, SerialExecutor, ThreadExecutor};
pub use menu::{build_menu, MenuAction, MenuActions, MenuBar};

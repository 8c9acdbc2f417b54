//! # Configuración del Cliente
//! src/config/mod.rs
//!
//! - `client`: el valor `Configuration` y sus valores por defecto
//! - `resolver`: CLI + entorno → `ParseOutcome`
//! - `usage`: texto de ayuda
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./flappybingus-client --server localhost:4000 \
//!   --path /arena \
//!   --width 1440 --height 900 \
//!   --fullscreen --no-menu
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! FLAPPYBINGUS_SERVER_URL=https://bingus.example.com FLAPPYBINGUS_CLIENT_WIDTH=900 ./flappybingus-client
//! ```

pub mod client;
pub mod resolver;
pub mod usage;

pub use client::Configuration;
pub use resolver::{resolve, ParseOutcome};
pub use usage::usage;

//! # Módulo de URLs
//! src/url/mod.rs
//!
//! - `normalizer`: validación y forma canónica de la URL del servidor
//! - `game`: URL final del juego (base + path)

pub mod game;
pub mod normalizer;

pub use game::game_url;
pub use normalizer::{normalize, NormalizedUrl};

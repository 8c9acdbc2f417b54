//! # FlappyBingus Client
//! src/lib.rs
//!
//! Cliente de escritorio para FlappyBingus. El núcleo convierte argumentos
//! de la CLI y variables de entorno en una configuración validada; el resto
//! conecta esa configuración con la ventana y el motor de render.
//!
//! ## Arquitectura
//!
//! - `url`: normalización de la URL del servidor y URL del juego
//! - `config`: `Configuration`, resolución CLI + entorno, texto de ayuda
//! - `view`: ejecutor serial, zoom/navegación y menú
//! - `launcher`: navegador del sistema
//! - `runtime`: inicialización única del runtime de render
//! - `runner`: códigos de salida, salida de texto y fábrica de ventanas
//! - `shell`: ventana de consola usada por el binario
//! - `logging`: subscriber de `tracing`
//! - `error`: tipos de error
//!
//! ## Ejemplo de uso
//!
//! ```
//! use std::collections::HashMap;
//! use flappybingus_client::config::{resolve, ParseOutcome};
//!
//! let env = HashMap::from([("FLAPPYBINGUS_CLIENT_WIDTH".to_string(), "900".to_string())]);
//! match resolve(&["--server", "bingus.example.com"], &env) {
//!     ParseOutcome::Config(config) => {
//!         assert_eq!(config.server_url(), "http://bingus.example.com");
//!         assert_eq!(config.width(), 900);
//!     }
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

pub mod config;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod runner;
pub mod runtime;
pub mod shell;
pub mod url;
pub mod view;

pub use config::{resolve, Configuration, ParseOutcome};
pub use error::{ConfigError, LaunchError, ResolveError, UrlError};
pub use runner::{ClientRunner, Output, Window, WindowFactory};
pub use url::{normalize, NormalizedUrl};

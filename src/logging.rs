//! # Logging
//! src/logging.rs
//!
//! Subscriber de `tracing` para el binario. El nivel se toma de `RUST_LOG`
//! (por defecto `info`) y todo va a stderr: stdout queda libre para la
//! ayuda y el resumen.

use tracing_subscriber::EnvFilter;

/// Nivel usado cuando `RUST_LOG` no está definido o no es válido
pub const DEFAULT_FILTER: &str = "info";

/// Instala el subscriber global. Si ya había uno, no hace nada.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init();
        init();
        tracing::info!("logging initialized twice");
    }
}

//! # Resolución de la Configuración
//! src/config/resolver.rs
//!
//! Convierte argumentos de línea de comandos y variables de entorno en una
//! `Configuration` validada.
//!
//! ## Precedencia (de menor a mayor)
//!
//! ```text
//! valores por defecto → variables de entorno → flags de la CLI
//! ```
//!
//! Los errores se ACUMULAN: el escaneo nunca se detiene en el primer
//! problema, así el usuario ve todos los errores de una vez. `--help`
//! tiene prioridad sobre cualquier error.
//!
//! ## Caso borde conocido
//!
//! Un flag de valor seguido de otro token que empieza con `--` reporta
//! `Missing value for <flag>` y ese segundo token se salta: no se
//! reinterpreta como opción en la misma pasada.
//!
//! ```text
//! --width --fullscreen   →  ["Missing value for --width"], fullscreen = false
//! ```

use crate::config::client::{
    Configuration, DEFAULT_HEIGHT, DEFAULT_PATH, DEFAULT_SERVER, DEFAULT_TITLE, DEFAULT_WIDTH,
};
use crate::error::ResolveError;
use crate::url;
use std::collections::HashMap;
use tracing::debug;

/// URL del servidor
pub const ENV_SERVER_URL: &str = "FLAPPYBINGUS_SERVER_URL";

/// Path del juego dentro del servidor
pub const ENV_PATH: &str = "FLAPPYBINGUS_PATH";

/// Ancho de la ventana
pub const ENV_CLIENT_WIDTH: &str = "FLAPPYBINGUS_CLIENT_WIDTH";

/// Alto de la ventana
pub const ENV_CLIENT_HEIGHT: &str = "FLAPPYBINGUS_CLIENT_HEIGHT";

/// Título de la ventana
pub const ENV_CLIENT_TITLE: &str = "FLAPPYBINGUS_CLIENT_TITLE";

/// Resultado de una resolución. Exactamente una variante por llamada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Se pidió ayuda (`-h`/`--help`); los errores se descartan
    Help,

    /// Lista no vacía de errores, en orden de detección
    Errors(Vec<ResolveError>),

    /// Configuración válida lista para abrir la ventana
    Config(Configuration),
}

impl ParseOutcome {
    pub fn is_help(&self) -> bool {
        matches!(self, ParseOutcome::Help)
    }

    pub fn config(&self) -> Option<&Configuration> {
        match self {
            ParseOutcome::Config(config) => Some(config),
            _ => None,
        }
    }

    pub fn errors(&self) -> &[ResolveError] {
        match self {
            ParseOutcome::Errors(errors) => errors,
            _ => &[],
        }
    }

    /// Mensajes de error tal como se muestran al usuario
    pub fn error_messages(&self) -> Vec<String> {
        self.errors().iter().map(ToString::to_string).collect()
    }
}

/// Resuelve la configuración de arranque
///
/// No hace I/O: solo lee `args` y `env`.
///
/// # Ejemplo
///
/// ```
/// use std::collections::HashMap;
/// use flappybingus_client::config::{resolve, ParseOutcome};
///
/// let outcome = resolve(&["--server", "localhost:4000", "--fullscreen"], &HashMap::new());
/// let config = outcome.config().unwrap();
/// assert_eq!(config.server_url(), "http://localhost:4000");
/// assert!(config.fullscreen());
///
/// assert_eq!(resolve(&["--help", "--nope"], &HashMap::new()), ParseOutcome::Help);
/// ```
pub fn resolve<S: AsRef<str>>(args: &[S], env: &HashMap<String, String>) -> ParseOutcome {
    let mut errors = Vec::new();

    // 1. Defaults + entorno
    let mut server = env_or(env, ENV_SERVER_URL, DEFAULT_SERVER);
    let mut title = env_or(env, ENV_CLIENT_TITLE, DEFAULT_TITLE);
    let mut path = env_or(env, ENV_PATH, DEFAULT_PATH);
    let mut width = env_dimension(env, ENV_CLIENT_WIDTH, DEFAULT_WIDTH, &mut errors);
    let mut height = env_dimension(env, ENV_CLIENT_HEIGHT, DEFAULT_HEIGHT, &mut errors);
    let mut fullscreen = false;
    let mut show_menu = true;
    let mut help_requested = false;

    // 2. Flags, de izquierda a derecha
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_ref();
        match arg {
            "-h" | "--help" => help_requested = true,
            "--server" => {
                i += 1;
                if let Some(value) = read_value(args, i, arg, &mut errors) {
                    server = value.to_string();
                }
            }
            "--path" => {
                i += 1;
                if let Some(value) = read_value(args, i, arg, &mut errors) {
                    path = value.to_string();
                }
            }
            "--width" => {
                i += 1;
                if let Some(value) = read_value(args, i, arg, &mut errors) {
                    if let Some(parsed) = parse_positive(value, "Width", &mut errors) {
                        width = parsed;
                    }
                }
            }
            "--height" => {
                i += 1;
                if let Some(value) = read_value(args, i, arg, &mut errors) {
                    if let Some(parsed) = parse_positive(value, "Height", &mut errors) {
                        height = parsed;
                    }
                }
            }
            "--title" => {
                i += 1;
                if let Some(value) = read_value(args, i, arg, &mut errors) {
                    title = value.to_string();
                }
            }
            "--fullscreen" => fullscreen = true,
            "--windowed" => fullscreen = false,
            "--no-menu" => show_menu = false,
            other => errors.push(ResolveError::unknown_option(other)),
        }
        i += 1;
    }

    // 3. La ayuda corta todo lo demás
    if help_requested {
        debug!(discarded_errors = errors.len(), "help requested");
        return ParseOutcome::Help;
    }

    // 4. URL del servidor
    match url::normalize(&server) {
        Ok(normalized) => server = normalized.into_string(),
        Err(e) => errors.push(e.into()),
    }

    // 5. Path y título en blanco vuelven al valor por defecto
    if path.trim().is_empty() {
        path = DEFAULT_PATH.to_string();
    }
    if title.trim().is_empty() {
        title = DEFAULT_TITLE.to_string();
    }

    // 6. Errores acumulados
    if !errors.is_empty() {
        debug!(count = errors.len(), "configuration rejected");
        return ParseOutcome::Errors(errors);
    }

    // 7. Configuración final
    match Configuration::new(server, path, width, height, title, fullscreen, show_menu) {
        Ok(config) => {
            debug!(server = config.server_url(), path = config.path(), "configuration resolved");
            ParseOutcome::Config(config)
        }
        Err(e) => ParseOutcome::Errors(vec![e.into()]),
    }
}

fn env_or(env: &HashMap<String, String>, key: &str, default: &str) -> String {
    env.get(key).cloned().unwrap_or_else(|| default.to_string())
}

/// Dimensión desde el entorno. En error se conserva el valor por defecto
/// y la etiqueta es el nombre de la variable.
fn env_dimension(
    env: &HashMap<String, String>,
    key: &str,
    default: u32,
    errors: &mut Vec<ResolveError>,
) -> u32 {
    match env.get(key) {
        Some(raw) => parse_positive(raw, key, errors).unwrap_or(default),
        None => default,
    }
}

/// Lee el valor de un flag en `args[index]`
///
/// Falta el valor si no hay más tokens o si el siguiente token empieza
/// con `--`.
fn read_value<'a, S: AsRef<str>>(
    args: &'a [S],
    index: usize,
    flag: &str,
    errors: &mut Vec<ResolveError>,
) -> Option<&'a str> {
    match args.get(index).map(|value| value.as_ref()) {
        Some(value) if !value.starts_with("--") => Some(value),
        _ => {
            errors.push(ResolveError::missing_value(flag));
            None
        }
    }
}

/// Parsea un entero estrictamente positivo que cabe en 32 bits con signo
fn parse_positive(raw: &str, label: &str, errors: &mut Vec<ResolveError>) -> Option<u32> {
    match raw.trim().parse::<i32>() {
        Ok(value) if value > 0 => Some(value.unsigned_abs()),
        _ => {
            errors.push(ResolveError::invalid_integer(label));
            None
        }
    }
}

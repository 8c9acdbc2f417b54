//! # Runner del Cliente
//! src/runner.rs
//!
//! Une la resolución de la configuración con la creación de la ventana y
//! traduce el resultado a un código de salida:
//!
//! | resultado | salida                                   | código |
//! |-----------|------------------------------------------|--------|
//! | `Help`    | ayuda por stdout                         | 0      |
//! | `Errors`  | banner + ` - <error>` + ayuda por stderr | 2      |
//! | `Config`  | se crea y muestra la ventana             | 0      |

use crate::config::usage::CLIENT_NAME;
use crate::config::{self, Configuration, ParseOutcome};
use crate::error::ResolveError;
use std::collections::HashMap;
use std::ffi::OsString;
use std::fmt::Display;
use std::io::Write;
use tracing::{info, warn};

/// Código de salida: ayuda mostrada o ventana lanzada
pub const EXIT_OK: i32 = 0;

/// Código de salida: configuración inválida
pub const EXIT_USAGE: i32 = 2;

/// Salida de texto línea por línea
pub trait Output {
    fn println(&mut self, line: &str);

    fn errln(&mut self, line: &str);
}

/// Salida estándar del proceso
#[derive(Debug, Clone, Copy, Default)]
pub struct StdOutput;

impl Output for StdOutput {
    fn println(&mut self, line: &str) {
        let _ = writeln!(std::io::stdout(), "{}", line);
    }

    fn errln(&mut self, line: &str) {
        let _ = writeln!(std::io::stderr(), "{}", line);
    }
}

/// Ventana lista para mostrarse
pub trait Window {
    fn show(self);
}

/// Crea ventanas a partir de una configuración válida
pub trait WindowFactory {
    type Window: Window;

    fn create(&self, config: &Configuration) -> Self::Window;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ClientRunner;

impl ClientRunner {
    pub fn new() -> Self {
        Self
    }

    /// Resuelve la configuración y lanza la ventana
    ///
    /// Retorna el código de salida del proceso.
    pub fn run<S, O, F>(
        &self,
        args: &[S],
        env: &HashMap<String, String>,
        output: &mut O,
        factory: &F,
    ) -> i32
    where
        S: AsRef<str>,
        O: Output,
        F: WindowFactory,
    {
        match config::resolve(args, env) {
            ParseOutcome::Help => {
                output.println(&config::usage());
                EXIT_OK
            }
            ParseOutcome::Errors(errors) => report(output, &errors),
            ParseOutcome::Config(config) => {
                info!(server = config.server_url(), path = config.path(), "launching client window");
                factory.create(&config).show();
                EXIT_OK
            }
        }
    }
}

impl ClientRunner {
    /// Igual que [`ClientRunner::run`] pero con los argumentos del sistema
    ///
    /// Un argumento que no es UTF-8 no puede ser un flag conocido: se
    /// reporta como opción desconocida y no se resuelve nada más.
    pub fn run_os<O, F>(
        &self,
        args: &[OsString],
        env: &HashMap<String, String>,
        output: &mut O,
        factory: &F,
    ) -> i32
    where
        O: Output,
        F: WindowFactory,
    {
        let mut utf8 = Vec::with_capacity(args.len());
        let mut errors = Vec::new();
        for arg in args {
            match arg.to_str() {
                Some(arg) => utf8.push(arg),
                None => errors.push(ResolveError::unknown_option(arg.to_string_lossy())),
            }
        }

        if errors.is_empty() {
            self.run(&utf8, env, output, factory)
        } else {
            report(output, &errors)
        }
    }
}

fn report<O: Output>(output: &mut O, errors: &[ResolveError]) -> i32 {
    warn!(count = errors.len(), "invalid configuration");
    print_errors(output, errors);
    output.errln("");
    output.errln(&config::usage());
    EXIT_USAGE
}

/// Escribe el banner de error y una línea ` - <error>` por cada error
pub fn print_errors<O: Output, E: Display>(output: &mut O, errors: &[E]) {
    output.errln(&format!("{} failed to start:", CLIENT_NAME));
    for error in errors {
        output.errln(&format!(" - {}", error));
    }
}

//! # FlappyBingus Client - Entry Point
//! src/main.rs
//!
//! Raíz de composición: logging, runtime, lanzador del navegador y runner.

use flappybingus_client::launcher::{DesktopBrowserLauncher, SystemDesktop};
use flappybingus_client::logging;
use flappybingus_client::runner::{ClientRunner, StdOutput};
use flappybingus_client::runtime::Runtime;
use flappybingus_client::shell::ConsoleWindowFactory;
use std::collections::HashMap;
use std::ffi::OsString;
use std::sync::Arc;
use tracing::{debug, info};

fn main() {
    logging::init();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    // Las variables que no son UTF-8 no pueden ser configuración válida
    let env: HashMap<String, String> = std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect();

    let runtime = Runtime::new();
    runtime.init(|| info!("render runtime started"));

    let launcher = Arc::new(DesktopBrowserLauncher::new(SystemDesktop));
    let factory = ConsoleWindowFactory::new(launcher);

    let code = ClientRunner::new().run_os(&args, &env, &mut StdOutput, &factory);
    debug!(code, "client exiting");
    std::process::exit(code);
}

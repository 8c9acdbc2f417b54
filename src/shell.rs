//! # Shell de Consola
//! src/shell.rs
//!
//! Ventana que usa el binario. No embebe un motor web: la página se
//! muestra en el navegador del sistema y el menú se maneja desde la
//! terminal, escribiendo la etiqueta del ítem o la tecla de su atajo.
//!
//! ```text
//! > r            → Reload
//! > zoom in      → Zoom In
//! > quit         → cierra el cliente
//! ```

use crate::config::Configuration;
use crate::launcher::BrowserLauncher;
use crate::runner::{Window, WindowFactory};
use crate::view::{build_menu, MenuActions, MenuBar, ThreadExecutor, WebEngine, WebViewController};
use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, error, info, warn};

/// Nombre del hilo de render
pub const RENDER_THREAD: &str = "render";

/// Comandos que terminan la sesión
const QUIT_COMMANDS: [&str; 3] = ["quit", "exit", "q"];

/// Motor que delega la página en el navegador del sistema
pub struct ExternalBrowserEngine<L> {
    launcher: Arc<L>,
    current: Mutex<Option<String>>,
}

impl<L: BrowserLauncher> ExternalBrowserEngine<L> {
    pub fn new(launcher: Arc<L>) -> Self {
        Self {
            launcher,
            current: Mutex::new(None),
        }
    }

    /// Última URL cargada
    pub fn current_url(&self) -> Option<String> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn open(&self, url: &str) {
        if let Err(e) = self.launcher.open(url) {
            error!(url, error = %e, "could not display page");
        }
    }
}

impl<L> WebEngine for ExternalBrowserEngine<L>
where
    L: BrowserLauncher + Send + Sync + 'static,
{
    fn load(&self, url: &str) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(url.to_string());
        self.open(url);
    }

    fn reload(&self) {
        match self.current_url() {
            Some(url) => self.open(&url),
            None => warn!("reload requested before any page was loaded"),
        }
    }

    fn set_zoom(&self, zoom: f64) {
        // El navegador externo maneja su propio zoom
        info!(zoom, "zoom level changed");
    }
}

/// Acciones del menú para la ventana de consola
pub struct ShellActions<L> {
    controller: WebViewController<ExternalBrowserEngine<L>, ThreadExecutor>,
    launcher: Arc<L>,
    game_url: String,
}

impl<L> MenuActions for ShellActions<L>
where
    L: BrowserLauncher + Send + Sync + 'static,
{
    fn reload(&mut self) {
        self.controller.reload();
    }

    fn open_external(&mut self) {
        if let Err(e) = self.launcher.open(&self.game_url) {
            error!(url = %self.game_url, error = %e, "could not open browser");
        }
    }

    fn zoom_in(&mut self) {
        self.controller.zoom_in();
    }

    fn zoom_out(&mut self) {
        self.controller.zoom_out();
    }

    fn reset_zoom(&mut self) {
        self.controller.reset_zoom();
    }
}

/// Lee comandos de `input` hasta `quit` o fin de entrada
///
/// Sin menú solo se aceptan los comandos de salida.
pub fn drive<R, W, A>(input: R, out: &mut W, menu: Option<&MenuBar>, actions: &mut A) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    A: MenuActions,
{
    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if QUIT_COMMANDS.iter().any(|quit| command.eq_ignore_ascii_case(quit)) {
            break;
        }

        match menu {
            Some(menu) => match menu.find(command) {
                Some(item) => {
                    debug!(item = item.label, "menu item activated");
                    item.action.dispatch(actions);
                }
                None => writeln!(out, "Unknown command: {}", command)?,
            },
            None => writeln!(out, "Menu is disabled; type 'quit' to exit")?,
        }
    }
    Ok(())
}

/// Fábrica de ventanas de consola
pub struct ConsoleWindowFactory<L> {
    launcher: Arc<L>,
}

impl<L> ConsoleWindowFactory<L> {
    pub fn new(launcher: Arc<L>) -> Self {
        Self { launcher }
    }
}

impl<L> WindowFactory for ConsoleWindowFactory<L>
where
    L: BrowserLauncher + Send + Sync + 'static,
{
    type Window = ConsoleWindow<L>;

    fn create(&self, config: &Configuration) -> ConsoleWindow<L> {
        ConsoleWindow {
            config: config.clone(),
            launcher: Arc::clone(&self.launcher),
        }
    }
}

pub struct ConsoleWindow<L> {
    config: Configuration,
    launcher: Arc<L>,
}

impl<L> ConsoleWindow<L> {
    pub fn config(&self) -> &Configuration {
        &self.config
    }
}

impl<L> Window for ConsoleWindow<L>
where
    L: BrowserLauncher + Send + Sync + 'static,
{
    fn show(self) {
        println!("{}", self.config.summary());
        println!();

        match self.config.to_json() {
            Ok(json) => debug!(config = %json, "window configuration"),
            Err(e) => warn!(error = %e, "could not serialize configuration"),
        }

        let game_url = match self.config.game_url() {
            Ok(url) => url,
            Err(e) => {
                error!(error = %e, "cannot build game URL");
                return;
            }
        };

        let executor = match ThreadExecutor::spawn(RENDER_THREAD) {
            Ok(executor) => executor,
            Err(e) => {
                error!(error = %e, "cannot start render thread");
                return;
            }
        };

        if self.config.fullscreen() {
            info!("fullscreen requested; the system browser manages its own window");
        }

        let engine = Arc::new(ExternalBrowserEngine::new(Arc::clone(&self.launcher)));
        let controller = WebViewController::new(engine, executor);
        controller.load(&game_url);

        let menu = self.config.show_menu().then(build_menu);
        match &menu {
            Some(menu) => {
                print!("{}", menu);
                println!("Type a menu item or its key, 'quit' to exit.");
            }
            None => println!("Type 'quit' to exit."),
        }

        let mut actions = ShellActions {
            controller,
            launcher: self.launcher,
            game_url,
        };

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = drive(stdin.lock(), &mut out, menu.as_ref(), &mut actions) {
            error!(error = %e, "console input failed");
        }

        info!("client window closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LaunchError;
    use std::io::Cursor;

    #[derive(Default)]
    struct RecordingLauncher {
        opened: Mutex<Vec<String>>,
    }

    impl BrowserLauncher for RecordingLauncher {
        fn open(&self, url: &str) -> Result<(), LaunchError> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingActions {
        calls: Vec<&'static str>,
    }

    impl MenuActions for CountingActions {
        fn reload(&mut self) {
            self.calls.push("reload");
        }

        fn open_external(&mut self) {
            self.calls.push("open_external");
        }

        fn zoom_in(&mut self) {
            self.calls.push("zoom_in");
        }

        fn zoom_out(&mut self) {
            self.calls.push("zoom_out");
        }

        fn reset_zoom(&mut self) {
            self.calls.push("reset_zoom");
        }
    }

    // ==================== Motor externo ====================

    #[test]
    fn test_engine_load_and_reload_open_browser() {
        let launcher = Arc::new(RecordingLauncher::default());
        let engine = ExternalBrowserEngine::new(Arc::clone(&launcher));

        engine.load("http://localhost:3000/");
        engine.reload();
        engine.set_zoom(1.5);

        assert_eq!(engine.current_url().as_deref(), Some("http://localhost:3000/"));
        assert_eq!(
            *launcher.opened.lock().unwrap(),
            vec!["http://localhost:3000/", "http://localhost:3000/"]
        );
    }

    #[test]
    fn test_engine_reload_without_page_does_nothing() {
        let launcher = Arc::new(RecordingLauncher::default());
        let engine = ExternalBrowserEngine::new(Arc::clone(&launcher));

        engine.reload();
        assert!(launcher.opened.lock().unwrap().is_empty());
    }

    // ==================== Consola ====================

    #[test]
    fn test_drive_dispatches_menu_commands() {
        let menu = build_menu();
        let mut actions = CountingActions::default();
        let mut out = Vec::new();
        let input = Cursor::new("r\nopen in browser\n=\n-\n0\n\nbogus\nquit\nreload\n");

        drive(input, &mut out, Some(&menu), &mut actions).unwrap();

        assert_eq!(
            actions.calls,
            vec!["reload", "open_external", "zoom_in", "zoom_out", "reset_zoom"]
        );
        assert_eq!(String::from_utf8(out).unwrap(), "Unknown command: bogus\n");
    }

    #[test]
    fn test_drive_without_menu_ignores_actions() {
        let mut actions = CountingActions::default();
        let mut out = Vec::new();

        drive(Cursor::new("r\nEXIT\n"), &mut out, None, &mut actions).unwrap();

        assert!(actions.calls.is_empty());
        assert!(String::from_utf8(out).unwrap().contains("Menu is disabled"));
    }

    #[test]
    fn test_drive_stops_at_end_of_input() {
        let menu = build_menu();
        let mut actions = CountingActions::default();
        let mut out = Vec::new();

        drive(Cursor::new("0"), &mut out, Some(&menu), &mut actions).unwrap();
        assert_eq!(actions.calls, vec!["reset_zoom"]);
    }

    #[test]
    fn test_shell_actions_reach_the_engine() {
        let launcher = Arc::new(RecordingLauncher::default());
        let engine = Arc::new(ExternalBrowserEngine::new(Arc::clone(&launcher)));
        let executor = ThreadExecutor::spawn("render-shell-test").unwrap();
        let controller = WebViewController::new(Arc::clone(&engine), executor);
        controller.load("http://localhost:3000/");

        let mut actions = ShellActions {
            controller,
            launcher: Arc::clone(&launcher),
            game_url: "http://localhost:3000/".to_string(),
        };
        actions.reload();
        actions.open_external();
        actions.zoom_in();
        assert!((actions.controller.zoom() - 1.1).abs() < 1e-9);

        // Soltar las acciones espera al hilo de render
        drop(actions);

        assert_eq!(launcher.opened.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_factory_copies_configuration() {
        let launcher = Arc::new(RecordingLauncher::default());
        let factory = ConsoleWindowFactory::new(launcher);
        let config = Configuration::default();

        let window = factory.create(&config);
        assert_eq!(window.config(), &config);
    }
}

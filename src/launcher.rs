//! # Navegador del Sistema
//! src/launcher.rs
//!
//! Abre la URL del juego en el navegador por defecto ("Open in Browser").
//! `DesktopFacade` aísla las llamadas a la plataforma para poder probar
//! `DesktopBrowserLauncher` sin abrir nada.

use crate::error::LaunchError;
use std::io;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use tracing::{info, warn};

/// Capacidades de escritorio de la plataforma
pub trait DesktopFacade {
    fn is_desktop_supported(&self) -> bool;

    fn is_browse_supported(&self) -> bool;

    fn browse(&self, url: &str) -> io::Result<()>;
}

/// Abre URLs fuera del cliente
pub trait BrowserLauncher {
    fn open(&self, url: &str) -> Result<(), LaunchError>;
}

/// Lanzador basado en un `DesktopFacade`
#[derive(Debug, Clone, Default)]
pub struct DesktopBrowserLauncher<D> {
    desktop: D,
}

impl<D: DesktopFacade> DesktopBrowserLauncher<D> {
    pub fn new(desktop: D) -> Self {
        Self { desktop }
    }
}

impl<D: DesktopFacade> BrowserLauncher for DesktopBrowserLauncher<D> {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        if !self.desktop.is_desktop_supported() || !self.desktop.is_browse_supported() {
            return Err(LaunchError::Unsupported);
        }

        self.desktop.browse(url).map_err(|source| LaunchError::Browse {
            url: url.to_string(),
            source,
        })?;

        info!(url, "opened in system browser");
        Ok(())
    }
}

/// Escritorio real: delega en el abridor de URLs de cada plataforma
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDesktop;

impl SystemDesktop {
    /// Abridor de URLs para `os` (valores de `std::env::consts::OS`)
    ///
    /// Ninguno pasa por un shell: la URL llega como un solo argumento
    /// aunque tenga `&` en la query.
    fn opener(os: &str, url: &str) -> Command {
        let mut command = match os {
            "windows" => {
                let mut command = Command::new("rundll32");
                command.arg("url.dll,FileProtocolHandler");
                command
            }
            "macos" => Command::new("open"),
            _ => Command::new("xdg-open"),
        };
        command.arg(url);
        command
    }
}

impl DesktopFacade for SystemDesktop {
    fn is_desktop_supported(&self) -> bool {
        cfg!(any(
            target_os = "windows",
            target_os = "macos",
            target_os = "linux",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd"
        ))
    }

    fn is_browse_supported(&self) -> bool {
        if !self.is_desktop_supported() {
            return false;
        }
        if cfg!(any(target_os = "windows", target_os = "macos")) {
            return true;
        }
        // En X11/Wayland hace falta una sesión gráfica
        std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
    }

    fn browse(&self, url: &str) -> io::Result<()> {
        let child = Self::opener(std::env::consts::OS, url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Err(e) = reap(child) {
            warn!(error = %e, "cannot wait for browser opener");
        }
        Ok(())
    }
}

/// Espera al abridor en un hilo aparte para que no quede como zombie
fn reap(mut child: Child) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("browser-opener".to_string())
        .spawn(move || match child.wait() {
            Ok(status) if !status.success() => warn!(%status, "browser opener failed"),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "lost track of browser opener"),
        })
}

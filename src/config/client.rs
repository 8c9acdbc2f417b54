//! # Configuración del Cliente
//! src/config/client.rs
//!
//! Valor inmutable con todo lo necesario para abrir la ventana del juego.
//! Se construye una sola vez al arrancar (ver `config::resolver`).

use crate::error::{ConfigError, UrlError};
use crate::url;
use serde::Serialize;

/// URL del servidor por defecto
pub const DEFAULT_SERVER: &str = "http://localhost:3000";

/// Path del juego por defecto
pub const DEFAULT_PATH: &str = "/";

/// Título de la ventana por defecto
pub const DEFAULT_TITLE: &str = "FlappyBingus";

/// Ancho de la ventana por defecto (px)
pub const DEFAULT_WIDTH: u32 = 1280;

/// Alto de la ventana por defecto (px)
pub const DEFAULT_HEIGHT: u32 = 720;

/// Configuración de arranque del cliente
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    server_url: String,
    path: String,
    width: u32,
    height: u32,
    title: String,
    fullscreen: bool,
    show_menu: bool,
}

impl Configuration {
    /// Crea una configuración validando las dimensiones
    ///
    /// # Errores
    ///
    /// Retorna `ConfigError` si el ancho o el alto son 0. Cualquier camino
    /// que construya una `Configuration` pasa por aquí.
    pub fn new(
        server_url: impl Into<String>,
        path: impl Into<String>,
        width: u32,
        height: u32,
        title: impl Into<String>,
        fullscreen: bool,
        show_menu: bool,
    ) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::NonPositiveWidth);
        }
        if height == 0 {
            return Err(ConfigError::NonPositiveHeight);
        }

        Ok(Self {
            server_url: server_url.into(),
            path: path.into(),
            width,
            height,
            title: title.into(),
            fullscreen,
            show_menu,
        })
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Path tal como llegó (`arena` queda `arena`)
    ///
    /// La barra inicial solo está garantizada en [`Configuration::game_url`].
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn show_menu(&self) -> bool {
        self.show_menu
    }

    /// URL completa del juego (servidor + path)
    ///
    /// # Ejemplo
    /// ```
    /// use flappybingus_client::config::Configuration;
    ///
    /// let config = Configuration::new("http://localhost:3000", "/", 800, 600, "Bingus", false, true).unwrap();
    /// assert_eq!(config.game_url().unwrap(), "http://localhost:3000/");
    /// ```
    pub fn game_url(&self) -> Result<String, UrlError> {
        url::game_url(&self.server_url, &self.path)
    }

    /// Serializa la configuración a JSON (para logs estructurados)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Resumen legible de la configuración, una línea por campo
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        lines.push("╔══════════════════════════════════════════════════════════════╗".to_string());
        lines.push("║              FlappyBingus Client Configuration               ║".to_string());
        lines.push("╚══════════════════════════════════════════════════════════════╝".to_string());
        lines.push(format!("   Server:       {}", self.server_url));
        lines.push(format!("   Path:         {}", self.path));
        lines.push(format!("   Window:       {}x{}", self.width, self.height));
        lines.push(format!("   Title:        {}", self.title));
        lines.push(format!(
            "   Mode:         {}",
            if self.fullscreen { "fullscreen" } else { "windowed" }
        ));
        lines.push(format!(
            "   Menu:         {}",
            if self.show_menu { "visible" } else { "hidden" }
        ));
        lines.join("\n")
    }
}

impl Default for Configuration {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER.to_string(),
            path: DEFAULT_PATH.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            fullscreen: false,
            show_menu: true,
        }
    }
}

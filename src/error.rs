//! # Errores del Cliente
//! src/error.rs
//!
//! Taxonomía de errores del cliente. El texto de `Display` de cada variante
//! es exactamente el mensaje que ve el usuario, así que los tests comparan
//! contra `to_string()`.
//!
//! - `UrlError`: la URL del servidor no es válida
//! - `ResolveError`: errores acumulados al resolver la configuración
//! - `ConfigError`: violación del contrato de `Configuration::new`
//! - `LaunchError`: no se pudo abrir el navegador del sistema

use thiserror::Error;

/// Errores de normalización de la URL del servidor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// Entrada vacía o solo espacios
    #[error("Server URL is required")]
    Required,

    /// La entrada no es una URI sintácticamente válida
    #[error("Invalid server URL: {input}")]
    Syntax {
        /// Entrada original, sin recortar
        input: String,
    },

    /// Esquema distinto de `http` o `https`
    #[error("Server URL must start with http:// or https://")]
    Scheme,

    /// Falta el host o está en blanco
    #[error("Server URL must include a host")]
    MissingHost,
}

impl UrlError {
    pub fn syntax(input: impl Into<String>) -> Self {
        Self::Syntax {
            input: input.into(),
        }
    }
}

/// Errores que el resolver acumula, en orden de detección
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Flag de valor sin valor a continuación
    #[error("Missing value for {flag}")]
    MissingValue { flag: String },

    /// Token no reconocido
    #[error("Unknown option: {option}")]
    UnknownOption { option: String },

    /// Ancho o alto no numérico o no positivo.
    /// `label` es `Width`/`Height` para flags y el nombre de la variable
    /// para valores del entorno.
    #[error("{label} must be a positive integer")]
    InvalidInteger { label: String },

    #[error(transparent)]
    InvalidUrl(#[from] UrlError),

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

impl ResolveError {
    pub fn missing_value(flag: impl Into<String>) -> Self {
        Self::MissingValue { flag: flag.into() }
    }

    pub fn unknown_option(option: impl Into<String>) -> Self {
        Self::UnknownOption {
            option: option.into(),
        }
    }

    pub fn invalid_integer(label: impl Into<String>) -> Self {
        Self::InvalidInteger {
            label: label.into(),
        }
    }
}

/// Errores de construcción de `Configuration`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("width must be positive")]
    NonPositiveWidth,

    #[error("height must be positive")]
    NonPositiveHeight,
}

/// Errores al abrir una URL en el navegador del sistema
#[derive(Debug, Error)]
pub enum LaunchError {
    /// La plataforma no soporta abrir un navegador
    #[error("Desktop browsing is not supported on this platform.")]
    Unsupported,

    /// El navegador no pudo lanzarse
    #[error("Unable to open browser for {url}")]
    Browse {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_error_messages() {
        assert_eq!(UrlError::Required.to_string(), "Server URL is required");
        assert_eq!(
            UrlError::Scheme.to_string(),
            "Server URL must start with http:// or https://"
        );
        assert_eq!(
            UrlError::MissingHost.to_string(),
            "Server URL must include a host"
        );
        assert_eq!(
            UrlError::syntax("http://bad host").to_string(),
            "Invalid server URL: http://bad host"
        );
    }

    #[test]
    fn test_resolve_error_messages() {
        assert_eq!(
            ResolveError::missing_value("--width").to_string(),
            "Missing value for --width"
        );
        assert_eq!(
            ResolveError::unknown_option("--nope").to_string(),
            "Unknown option: --nope"
        );
        assert_eq!(
            ResolveError::invalid_integer("Height").to_string(),
            "Height must be a positive integer"
        );
    }

    #[test]
    fn test_resolve_error_is_transparent_for_urls() {
        let error = ResolveError::from(UrlError::MissingHost);
        assert_eq!(error.to_string(), "Server URL must include a host");
    }

    #[test]
    fn test_launch_error_keeps_source() {
        use std::error::Error as _;

        let error = LaunchError::Browse {
            url: "http://localhost".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "xdg-open"),
        };
        assert_eq!(error.to_string(), "Unable to open browser for http://localhost");
        assert!(error.source().is_some());
    }
}

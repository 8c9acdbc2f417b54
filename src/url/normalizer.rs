//! # Normalización de URLs del Servidor
//! src/url/normalizer.rs
//!
//! Valida y canoniza la URL del servidor que llega por CLI o por entorno.
//!
//! ## Algoritmo
//!
//! 1. Recortar espacios. Si queda vacía → `Server URL is required`
//! 2. Si no contiene `://`, anteponer `http://` (ej: `localhost:8080`)
//! 3. Separar en componentes (RFC 3986, apéndice B) y validar sintaxis
//! 4. El esquema debe ser exactamente `http` o `https`, y debe haber host
//! 5. Si el path mide más de 1 y termina en `/`, quitar UNA barra final
//! 6. Reensamblar; query y fragmento se copian tal cual
//!
//! ```text
//! localhost:8080                  → http://localhost:8080
//! https://example.com/game/       → https://example.com/game
//! https://example.com/            → https://example.com/
//! https://example.com/game?x=1#y  → https://example.com/game?x=1#y
//! ```

use crate::error::UrlError;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Expresión regular del apéndice B de RFC 3986.
/// Grupos: 1 esquema, 2 autoridad, 3 path, 4 query, 5 fragmento.
static URI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$")
        .expect("URI pattern is a valid regex")
});

static SCHEME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*$").expect("scheme pattern is a valid regex")
});

/// Nombres de host por etiquetas (`localhost`, `bingus.example.com`, `127.0.0.1`)
static HOSTNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?\.)*[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?\.?$",
    )
    .expect("hostname pattern is a valid regex")
});

/// Literales IPv6 entre corchetes (`[::1]`)
static IPV6_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[[0-9A-Fa-f:.]+\]$").expect("IPv6 pattern is a valid regex")
});

/// Caracteres ASCII permitidos además de letras, dígitos y `%XX`
const ALLOWED_PUNCTUATION: &str = "-._~:/?#[]@!$&'()*+,;=";

/// URL canónica producida por [`normalize`]
///
/// Solo se construye a partir de una normalización exitosa.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedUrl(String);

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for NormalizedUrl {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

/// Normaliza la URL del servidor
///
/// # Errores
///
/// * `UrlError::Required` - entrada vacía o solo espacios
/// * `UrlError::Syntax` - la entrada no es una URI válida
/// * `UrlError::Scheme` - esquema distinto de http/https
/// * `UrlError::MissingHost` - sin host
///
/// # Ejemplo
///
/// ```
/// use flappybingus_client::url::normalize;
///
/// let url = normalize("localhost:8080").unwrap();
/// assert_eq!(url.as_str(), "http://localhost:8080");
/// ```
pub fn normalize(input: &str) -> Result<NormalizedUrl, UrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Required);
    }

    // Inferencia de esquema para entradas tipo host:puerto
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    let mut parts = UriParts::parse(&candidate, input)?;

    // La raíz "/" se conserva: así la normalización es idempotente
    if parts.path.len() > 1 && parts.path.ends_with('/') {
        parts.path.pop();
    }

    Ok(NormalizedUrl(parts.to_string()))
}

/// Componentes de una URI http/https absoluta
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UriParts {
    pub scheme: String,
    pub userinfo: Option<String>,
    pub host: String,
    pub port: Option<u32>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl UriParts {
    /// Separa y valida `candidate`. `original` es lo que se reporta en
    /// los errores de sintaxis.
    ///
    /// El orden de validación es sintaxis → esquema → host.
    pub(crate) fn parse(candidate: &str, original: &str) -> Result<Self, UrlError> {
        if candidate.starts_with(':') || !has_legal_characters(candidate) {
            return Err(UrlError::syntax(original));
        }

        let captures = URI_PATTERN
            .captures(candidate)
            .ok_or_else(|| UrlError::syntax(original))?;

        let scheme = match captures.get(1) {
            Some(scheme) if !SCHEME_PATTERN.is_match(scheme.as_str()) => {
                return Err(UrlError::syntax(original));
            }
            Some(scheme) => scheme.as_str(),
            None => return Err(UrlError::Scheme),
        };

        // Comparación exacta: "HTTP" no se acepta
        if scheme != "http" && scheme != "https" {
            return Err(UrlError::Scheme);
        }

        // Con corchetes la autoridad solo puede ser de servidor: si no lo es,
        // el error es de sintaxis y no de host
        let authority = captures.get(2).map_or("", |m| m.as_str());
        let (userinfo, host, port) = split_authority(authority).ok_or_else(|| {
            if authority.contains(['[', ']']) {
                UrlError::syntax(original)
            } else {
                UrlError::MissingHost
            }
        })?;

        Ok(Self {
            scheme: scheme.to_string(),
            userinfo: userinfo.map(str::to_string),
            host: host.to_string(),
            port,
            path: captures.get(3).map_or("", |m| m.as_str()).to_string(),
            query: captures.get(4).map(|m| m.as_str().to_string()),
            fragment: captures.get(5).map(|m| m.as_str().to_string()),
        })
    }
}

impl fmt::Display for UriParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://", self.scheme)?;
        if let Some(userinfo) = &self.userinfo {
            write!(f, "{}@", userinfo)?;
        }
        f.write_str(&self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

/// Separa `[userinfo@]host[:puerto]`
///
/// Retorna `None` cuando no hay un host de servidor válido: autoridad vacía,
/// host en blanco, caracteres no permitidos en el host o puerto no numérico.
fn split_authority(authority: &str) -> Option<(Option<&str>, &str, Option<u32>)> {
    let (userinfo, host_port) = match authority.rsplit_once('@') {
        Some((userinfo, rest)) => (Some(userinfo), rest),
        None => (None, authority),
    };

    let (host, port) = if host_port.starts_with('[') {
        let end = host_port.find(']')? + 1;
        let (host, rest) = host_port.split_at(end);
        let port = if rest.is_empty() {
            ""
        } else {
            rest.strip_prefix(':')?
        };
        if !IPV6_PATTERN.is_match(host) {
            return None;
        }
        (host, port)
    } else {
        let (host, port) = host_port.rsplit_once(':').unwrap_or((host_port, ""));
        if !is_server_host(host) {
            return None;
        }
        (host, port)
    };

    let port = if port.is_empty() {
        None
    } else if port.bytes().all(|b| b.is_ascii_digit()) {
        Some(port.parse::<u32>().ok()?)
    } else {
        return None;
    };

    Some((userinfo, host, port))
}

/// Nombre de host o dirección IPv4
///
/// En un nombre con varias etiquetas la última debe empezar con letra:
/// `a.1b` no es host de servidor, `1.2.3.4` sí.
fn is_server_host(host: &str) -> bool {
    if !HOSTNAME_PATTERN.is_match(host) {
        return false;
    }
    if is_ipv4(host) {
        return true;
    }

    let labels: Vec<&str> = host.strip_suffix('.').unwrap_or(host).split('.').collect();
    match labels.as_slice() {
        [_] => true,
        [.., last] => last.starts_with(|c: char| c.is_ascii_alphabetic()),
        [] => false,
    }
}

fn is_ipv4(host: &str) -> bool {
    let octets: Vec<&str> = host.split('.').collect();
    octets.len() == 4
        && octets
            .iter()
            .all(|octet| (1..=3).contains(&octet.len()) && octet.parse::<u8>().is_ok())
}

/// Verifica que todos los caracteres puedan aparecer en una URI
///
/// Los `%` deben ir seguidos de dos dígitos hexadecimales. Se aceptan
/// caracteres no ASCII que no sean de control ni espacios.
pub(crate) fn has_legal_characters(input: &str) -> bool {
    let bytes = input.as_bytes();
    input.char_indices().all(|(i, c)| match c {
        '%' => bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)),
        c if c.is_ascii_alphanumeric() => true,
        c if c.is_ascii() => ALLOWED_PUNCTUATION.contains(c),
        c => !c.is_control() && !c.is_whitespace(),
    })
}

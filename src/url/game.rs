//! # URL del Juego
//! src/url/game.rs
//!
//! Combina la URL base del servidor con el path del juego.
//! El path se trata como referencia absoluta: reemplaza el path, la query y
//! el fragmento de la base (RFC 3986, sección 5.2).

use crate::error::UrlError;
use crate::url::normalizer::{has_legal_characters, UriParts};

/// Construye la URL que se carga en la vista
///
/// * path en blanco → `/`
/// * path sin `/` inicial → se le antepone
/// * segmentos `.` y `..` → se resuelven
///
/// # Ejemplo
///
/// ```
/// use flappybingus_client::url::game_url;
///
/// let url = game_url("http://localhost:3000/base", "play").unwrap();
/// assert_eq!(url, "http://localhost:3000/play");
/// ```
pub fn game_url(base: &str, path: &str) -> Result<String, UrlError> {
    let base_parts = UriParts::parse(base.trim(), base)?;

    let trimmed = path.trim();
    let reference = if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    };

    if !has_legal_characters(&reference) {
        return Err(UrlError::syntax(path));
    }

    let (rest, fragment) = match reference.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment.to_string())),
        None => (reference.as_str(), None),
    };
    let (reference_path, query) = match rest.split_once('?') {
        Some((reference_path, query)) => (reference_path, Some(query.to_string())),
        None => (rest, None),
    };

    let resolved = UriParts {
        path: remove_dot_segments(reference_path),
        query,
        fragment,
        ..base_parts
    };

    Ok(resolved.to_string())
}

/// Elimina los segmentos `.` y `..` de un path absoluto
fn remove_dot_segments(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/').skip(1) {
        match segment {
            "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut output = String::with_capacity(path.len());
    for segment in &segments {
        output.push('/');
        output.push_str(segment);
    }

    // "/a/." y "/a/.." apuntan a un directorio
    if path.ends_with("/.") || path.ends_with("/..") || output.is_empty() {
        output.push('/');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_url_for_root() {
        assert_eq!(game_url("http://localhost:3000", "/").unwrap(), "http://localhost:3000/");
    }

    #[test]
    fn test_builds_url_for_custom_path() {
        assert_eq!(
            game_url("http://localhost:3000/base", "play").unwrap(),
            "http://localhost:3000/play"
        );
    }

    #[test]
    fn test_falls_back_to_root_when_path_blank() {
        assert_eq!(game_url("http://localhost:3000", "   ").unwrap(), "http://localhost:3000/");
    }

    #[test]
    fn test_replaces_base_query_and_fragment() {
        assert_eq!(
            game_url("https://example.com/game?x=1#y", "/arena?mode=duo").unwrap(),
            "https://example.com/arena?mode=duo"
        );
    }

    #[test]
    fn test_keeps_reference_fragment() {
        assert_eq!(
            game_url("https://example.com", "/play#scores").unwrap(),
            "https://example.com/play#scores"
        );
    }

    #[test]
    fn test_resolves_dot_segments() {
        assert_eq!(
            game_url("http://localhost:3000", "/a/b/../c/./d").unwrap(),
            "http://localhost:3000/a/c/d"
        );
    }

    #[test]
    fn test_rejects_illegal_path() {
        assert_eq!(
            game_url("http://localhost:3000", "my game"),
            Err(UrlError::syntax("my game"))
        );
    }

    #[test]
    fn test_rejects_invalid_base() {
        assert_eq!(game_url("ftp://localhost", "/"), Err(UrlError::Scheme));
    }

    #[test]
    fn test_remove_dot_segments() {
        assert_eq!(remove_dot_segments("/"), "/");
        assert_eq!(remove_dot_segments("/a/"), "/a/");
        assert_eq!(remove_dot_segments("/a/.."), "/");
        assert_eq!(remove_dot_segments("/a/."), "/a/");
        assert_eq!(remove_dot_segments("/../a"), "/a");
    }
}

//! # Texto de Ayuda
//! src/config/usage.rs
//!
//! Describe la superficie de la CLI con `clap` y la renderiza como texto de
//! ayuda. El parsing real lo hace `config::resolver`, que acumula todos los
//! errores en vez de cortar en el primero.

use crate::config::client::{
    DEFAULT_HEIGHT, DEFAULT_PATH, DEFAULT_SERVER, DEFAULT_TITLE, DEFAULT_WIDTH,
};
use crate::config::resolver::{
    ENV_CLIENT_HEIGHT, ENV_CLIENT_TITLE, ENV_CLIENT_WIDTH, ENV_PATH, ENV_SERVER_URL,
};
use clap::{Arg, ArgAction, Command};

/// Nombre del binario
pub const BIN_NAME: &str = "flappybingus-client";

/// Primera línea de la ayuda y del banner de errores
pub const CLIENT_NAME: &str = "FlappyBingus Desktop Client";

const HELP_TEMPLATE: &str = "\
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

/// Definición de la CLI
pub fn command() -> Command {
    Command::new(BIN_NAME)
        .about(CLIENT_NAME)
        .help_template(HELP_TEMPLATE)
        .arg(
            Arg::new("server")
                .long("server")
                .value_name("url")
                .env(ENV_SERVER_URL)
                .hide_env_values(true)
                .default_value(DEFAULT_SERVER)
                .help("Base server URL"),
        )
        .arg(
            Arg::new("path")
                .long("path")
                .value_name("path")
                .env(ENV_PATH)
                .hide_env_values(true)
                .default_value(DEFAULT_PATH)
                .help("Path to load within the server"),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_name("px")
                .env(ENV_CLIENT_WIDTH)
                .hide_env_values(true)
                .default_value(DEFAULT_WIDTH.to_string())
                .help("Window width"),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_name("px")
                .env(ENV_CLIENT_HEIGHT)
                .hide_env_values(true)
                .default_value(DEFAULT_HEIGHT.to_string())
                .help("Window height"),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .value_name("text")
                .env(ENV_CLIENT_TITLE)
                .hide_env_values(true)
                .default_value(DEFAULT_TITLE)
                .help("Window title"),
        )
        .arg(
            Arg::new("fullscreen")
                .long("fullscreen")
                .action(ArgAction::SetTrue)
                .help("Start in fullscreen mode"),
        )
        .arg(
            Arg::new("windowed")
                .long("windowed")
                .action(ArgAction::SetTrue)
                .help("Start in windowed mode"),
        )
        .arg(
            Arg::new("no-menu")
                .long("no-menu")
                .action(ArgAction::SetTrue)
                .help("Hide the menu bar"),
        )
}

/// Texto de ayuda completo
pub fn usage() -> String {
    command().render_help().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn test_usage_starts_with_client_name() {
        let text = usage();
        assert_eq!(text.lines().next(), Some(CLIENT_NAME));
    }

    #[test]
    fn test_usage_lists_every_flag() {
        let text = usage();
        for flag in [
            "--server", "--path", "--width", "--height", "--title",
            "--fullscreen", "--windowed", "--no-menu", "--help",
        ] {
            assert!(text.contains(flag), "usage should mention {}", flag);
        }
    }

    #[test]
    fn test_usage_lists_environment_variables() {
        let text = usage();
        for key in [ENV_SERVER_URL, ENV_PATH, ENV_CLIENT_WIDTH, ENV_CLIENT_HEIGHT, ENV_CLIENT_TITLE] {
            assert!(text.contains(key), "usage should mention {}", key);
        }
    }

    #[test]
    fn test_usage_shows_defaults() {
        let text = usage();
        assert!(text.contains(DEFAULT_SERVER));
        assert!(text.contains("1280"));
        assert!(text.contains("720"));
    }
}

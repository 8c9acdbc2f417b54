//! # Menú del Cliente
//! src/view/menu.rs
//!
//! Modelo de la barra de menú, independiente de cualquier toolkit.
//!
//! ```text
//! Game                     View
//! ├─ Reload        Ctrl+R  ├─ Zoom In     Ctrl+=
//! └─ Open in Browser       ├─ Zoom Out    Ctrl+-
//!                          └─ Reset Zoom  Ctrl+0
//! ```
//!
//! Cada ítem guarda un `MenuAction`; al activarlo se despacha sobre una
//! implementación de `MenuActions` fijada al construir la ventana.

use std::fmt;

/// Operaciones que puede disparar el menú
pub trait MenuActions {
    fn reload(&mut self);

    fn open_external(&mut self);

    fn zoom_in(&mut self);

    fn zoom_out(&mut self);

    fn reset_zoom(&mut self);
}

/// Acción asociada a un ítem del menú
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Reload,
    OpenExternal,
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

impl MenuAction {
    /// Invoca la operación correspondiente
    pub fn dispatch<A: MenuActions>(self, actions: &mut A) {
        match self {
            MenuAction::Reload => actions.reload(),
            MenuAction::OpenExternal => actions.open_external(),
            MenuAction::ZoomIn => actions.zoom_in(),
            MenuAction::ZoomOut => actions.zoom_out(),
            MenuAction::ResetZoom => actions.reset_zoom(),
        }
    }
}

/// Atajo de teclado (siempre con Ctrl)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accelerator {
    pub key: char,
}

impl Accelerator {
    pub const fn ctrl(key: char) -> Self {
        Self { key }
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ctrl+{}", self.key.to_ascii_uppercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub accelerator: Option<Accelerator>,
    pub action: MenuAction,
}

impl MenuItem {
    fn new(label: &'static str, accelerator: Option<Accelerator>, action: MenuAction) -> Self {
        Self {
            label,
            accelerator,
            action,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub title: &'static str,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuBar {
    pub menus: Vec<Menu>,
}

impl MenuBar {
    /// Busca un ítem por etiqueta (sin distinguir mayúsculas) o por la
    /// tecla de su atajo
    pub fn find(&self, input: &str) -> Option<&MenuItem> {
        let input = input.trim();
        let mut chars = input.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c.to_ascii_lowercase()),
            _ => None,
        };

        self.items().find(|item| {
            item.label.eq_ignore_ascii_case(input)
                || (key.is_some() && item.accelerator.map(|a| a.key) == key)
        })
    }

    /// Todos los ítems, menú por menú
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.menus.iter().flat_map(|menu| menu.items.iter())
    }
}

impl fmt::Display for MenuBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for menu in &self.menus {
            writeln!(f, "{}", menu.title)?;
            for item in &menu.items {
                match item.accelerator {
                    Some(accelerator) => writeln!(f, "  {:<18} {}", item.label, accelerator)?,
                    None => writeln!(f, "  {}", item.label)?,
                }
            }
        }
        Ok(())
    }
}

/// Construye la barra de menú del cliente
pub fn build_menu() -> MenuBar {
    let game = Menu {
        title: "Game",
        items: vec![
            MenuItem::new("Reload", Some(Accelerator::ctrl('r')), MenuAction::Reload),
            MenuItem::new("Open in Browser", None, MenuAction::OpenExternal),
        ],
    };

    let view = Menu {
        title: "View",
        items: vec![
            MenuItem::new("Zoom In", Some(Accelerator::ctrl('=')), MenuAction::ZoomIn),
            MenuItem::new("Zoom Out", Some(Accelerator::ctrl('-')), MenuAction::ZoomOut),
            MenuItem::new("Reset Zoom", Some(Accelerator::ctrl('0')), MenuAction::ResetZoom),
        ],
    };

    MenuBar {
        menus: vec![game, view],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingActions {
        reloads: u32,
        externals: u32,
        zoom_ins: u32,
        zoom_outs: u32,
        zoom_resets: u32,
    }

    impl MenuActions for CountingActions {
        fn reload(&mut self) {
            self.reloads += 1;
        }

        fn open_external(&mut self) {
            self.externals += 1;
        }

        fn zoom_in(&mut self) {
            self.zoom_ins += 1;
        }

        fn zoom_out(&mut self) {
            self.zoom_outs += 1;
        }

        fn reset_zoom(&mut self) {
            self.zoom_resets += 1;
        }
    }

    #[test]
    fn test_builds_menu_and_wires_actions() {
        let menu_bar = build_menu();
        let mut actions = CountingActions::default();

        let game = &menu_bar.menus[0];
        let view = &menu_bar.menus[1];
        assert_eq!(game.title, "Game");
        assert_eq!(view.title, "View");

        for item in game.items.iter().chain(view.items.iter()) {
            item.action.dispatch(&mut actions);
        }

        assert_eq!(actions.reloads, 1);
        assert_eq!(actions.externals, 1);
        assert_eq!(actions.zoom_ins, 1);
        assert_eq!(actions.zoom_outs, 1);
        assert_eq!(actions.zoom_resets, 1);
    }

    #[test]
    fn test_item_order_and_accelerators() {
        let menu_bar = build_menu();
        let labels: Vec<_> = menu_bar.items().map(|item| item.label).collect();
        assert_eq!(labels, vec!["Reload", "Open in Browser", "Zoom In", "Zoom Out", "Reset Zoom"]);

        let reload = &menu_bar.menus[0].items[0];
        assert_eq!(reload.accelerator.map(|a| a.to_string()).as_deref(), Some("Ctrl+R"));
        assert_eq!(menu_bar.menus[0].items[1].accelerator, None);
    }

    #[test]
    fn test_find_by_label_or_key() {
        let menu_bar = build_menu();
        assert_eq!(menu_bar.find("reload").map(|i| i.action), Some(MenuAction::Reload));
        assert_eq!(menu_bar.find("Open in browser").map(|i| i.action), Some(MenuAction::OpenExternal));
        assert_eq!(menu_bar.find("R").map(|i| i.action), Some(MenuAction::Reload));
        assert_eq!(menu_bar.find("=").map(|i| i.action), Some(MenuAction::ZoomIn));
        assert_eq!(menu_bar.find(" - ").map(|i| i.action), Some(MenuAction::ZoomOut));
        assert_eq!(menu_bar.find("0").map(|i| i.action), Some(MenuAction::ResetZoom));
        assert!(menu_bar.find("x").is_none());
        assert!(menu_bar.find("").is_none());
    }

    #[test]
    fn test_display_lists_items() {
        let text = build_menu().to_string();
        assert!(text.contains("Game"));
        assert!(text.contains("Zoom Out"));
        assert!(text.contains("Ctrl+0"));
    }
}

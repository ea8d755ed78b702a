//! Logical menu state for the dialogs the move learner opens.
//!
//! Rendering is someone else's job. What lives here is which menu is active,
//! the text it shows and which option is highlighted.

use schema::MenuName;
use serde::{Deserialize, Serialize};

/// Text and choices shown in a dialog box
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    pub text: String,
    pub options: Vec<String>,
}

impl Dialog {
    /// Plain announcement with nothing to choose
    pub fn text(text: impl Into<String>) -> Self {
        Dialog {
            text: text.into(),
            options: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }
}

/// The dialog/menu collaborator the move learner drives.
#[cfg_attr(test, mockall::automock)]
pub trait MenuService {
    /// Open (or replace the contents of) a menu and make it the active one
    fn open_dialog(&mut self, menu: MenuName, dialog: Dialog);

    /// Name of the currently active menu, if any
    fn active_menu_name(&self) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveMenu {
    pub name: MenuName,
    pub dialog: Dialog,
    pub selected: usize,
}

/// In-memory menu subsystem. Keeps a single active menu plus a history of
/// every dialog that was opened.
#[derive(Debug, Clone, Default)]
pub struct MenuGrapher {
    active: Option<ActiveMenu>,
    history: Vec<(MenuName, Dialog)>,
}

impl MenuGrapher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_menu(&self) -> Option<&ActiveMenu> {
        self.active.as_ref()
    }

    /// Text shown by the active menu
    pub fn active_text(&self) -> Option<&str> {
        self.active.as_ref().map(|menu| menu.dialog.text.as_str())
    }

    /// Highlight an option of the active menu, returning its label.
    /// Out of range indices leave the selection unchanged.
    pub fn select_option(&mut self, index: usize) -> Option<&str> {
        let menu = self.active.as_mut()?;
        if index >= menu.dialog.options.len() {
            return None;
        }
        menu.selected = index;
        menu.dialog.options.get(index).map(String::as_str)
    }

    /// Label of the highlighted option of the active menu
    pub fn selected_option(&self) -> Option<&str> {
        let menu = self.active.as_ref()?;
        menu.dialog.options.get(menu.selected).map(String::as_str)
    }

    /// Close the active menu. Returns the menu that was closed.
    pub fn close_menu(&mut self) -> Option<ActiveMenu> {
        self.active.take()
    }

    /// Every dialog opened so far, oldest first
    pub fn history(&self) -> &[(MenuName, Dialog)] {
        &self.history
    }
}

impl MenuService for MenuGrapher {
    fn open_dialog(&mut self, menu: MenuName, dialog: Dialog) {
        tracing::debug!(menu = %menu, text = %dialog.text, "opening dialog");
        self.history.push((menu, dialog.clone()));
        self.active = Some(ActiveMenu {
            name: menu,
            dialog,
            selected: 0,
        });
    }

    fn active_menu_name(&self) -> Option<String> {
        self.active.as_ref().map(|menu| menu.name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_open_dialog_sets_active_menu() {
        let mut menus = MenuGrapher::new();
        assert_eq!(menus.active_menu_name(), None);

        menus.open_dialog(MenuName::GeneralText, Dialog::text("Hello!"));

        assert_eq!(menus.active_menu_name().as_deref(), Some("GeneralText"));
        assert_eq!(menus.active_text(), Some("Hello!"));
        assert_eq!(menus.history().len(), 1);
    }

    #[test]
    fn test_option_selection() {
        let mut menus = MenuGrapher::new();
        menus.open_dialog(
            MenuName::GeneralText,
            Dialog::text("Delete a move?").with_options(vec!["Yes".into(), "No".into()]),
        );

        assert_eq!(menus.selected_option(), Some("Yes"));
        assert_eq!(menus.select_option(1), Some("No"));
        assert_eq!(menus.selected_option(), Some("No"));
        assert_eq!(menus.select_option(5), None);
        assert_eq!(menus.selected_option(), Some("No"));
    }

    #[test]
    fn test_reopening_resets_selection() {
        let mut menus = MenuGrapher::new();
        let prompt = Dialog::text("Delete a move?").with_options(vec!["Yes".into(), "No".into()]);
        menus.open_dialog(MenuName::GeneralText, prompt.clone());
        menus.select_option(1);

        menus.open_dialog(MenuName::GeneralText, prompt);

        assert_eq!(menus.selected_option(), Some("Yes"));
        assert_eq!(menus.history().len(), 2);
    }

    #[test]
    fn test_close_menu() {
        let mut menus = MenuGrapher::new();
        menus.open_dialog(MenuName::GeneralText, Dialog::text("Bye!"));

        let closed = menus.close_menu();

        assert_eq!(closed.map(|menu| menu.name), Some(MenuName::GeneralText));
        assert_eq!(menus.active_menu_name(), None);
        assert_eq!(menus.select_option(0), None);
    }
}

//! Local UI chrome state (profile menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session state so the
//! header and menu can re-render without touching auth.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::menu_math::MenuPlacement;

/// Open/closed state of the floating profile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MenuState {
    #[default]
    Closed,
    Open(MenuPlacement),
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }
}

/// UI state shared by the header, the profile menu and the global click listener.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub menu: MenuState,
}

impl UiState {
    /// Trigger-icon click: close when open, otherwise open at `placement`.
    pub fn toggle_menu(&mut self, placement: MenuPlacement) {
        self.menu = if self.menu.is_open() { MenuState::Closed } else { MenuState::Open(placement) };
    }

    pub fn close_menu(&mut self) {
        self.menu = MenuState::Closed;
    }
}

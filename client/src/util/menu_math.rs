//! Placement math for the floating profile menu.

#[cfg(test)]
#[path = "menu_math_test.rs"]
mod menu_math_test;

/// Minimum distance between the menu's left edge and the viewport edge.
pub const MENU_MIN_INSET_PX: f64 = 10.0;
/// Vertical gap between the trigger icon and the menu.
pub const MENU_GAP_PX: f64 = 10.0;

/// Viewport-relative bounding box, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Fixed-position coordinates for an open menu.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuPlacement {
    pub top: f64,
    pub left: f64,
}

impl MenuPlacement {
    pub fn style(self) -> String {
        format!("top: {}px; left: {}px;", self.top, self.left)
    }
}

/// Right-align the menu with the icon, clamp the left edge to the inset, and
/// drop it below the icon by the fixed gap.
pub fn place_menu(icon: Rect, menu_width: f64) -> MenuPlacement {
    let width = if menu_width.is_finite() { menu_width.max(0.0) } else { 0.0 };
    let left = (icon.right - width).max(MENU_MIN_INSET_PX);
    MenuPlacement { top: icon.bottom + MENU_GAP_PX, left }
}

/// Whether a click elsewhere on the page should close an open menu.
pub fn outside_click_closes(open: bool, inside_menu: bool, on_icon: bool) -> bool {
    open && !inside_menu && !on_icon
}

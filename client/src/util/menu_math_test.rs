use super::*;

fn icon_at(left: f64, right: f64) -> Rect {
    Rect { left, top: 8.0, right, bottom: 48.0 }
}

#[test]
fn place_menu_right_aligns_with_icon() {
    let placement = place_menu(icon_at(760.0, 800.0), 200.0);
    assert_eq!(placement, MenuPlacement { top: 58.0, left: 600.0 });
}

#[test]
fn place_menu_never_crosses_min_inset() {
    // Icon near the left edge: right - width would go negative.
    let placement = place_menu(icon_at(0.0, 40.0), 220.0);
    assert_eq!(placement.left, MENU_MIN_INSET_PX);
}

#[test]
fn place_menu_clamps_even_when_icon_is_flush_right_on_narrow_viewport() {
    for viewport in [120.0, 200.0, 320.0, 1280.0] {
        let icon = icon_at(viewport - 40.0, viewport);
        let placement = place_menu(icon, 300.0);
        assert!(placement.left >= MENU_MIN_INSET_PX, "viewport {viewport}");
        assert_eq!(placement.top, icon.bottom + MENU_GAP_PX);
    }
}

#[test]
fn place_menu_ignores_nonsense_widths() {
    assert_eq!(place_menu(icon_at(60.0, 100.0), f64::NAN).left, 100.0);
    assert_eq!(place_menu(icon_at(60.0, 100.0), -50.0).left, 100.0);
}

#[test]
fn placement_style_uses_pixels() {
    assert_eq!(MenuPlacement { top: 58.0, left: 600.5 }.style(), "top: 58px; left: 600.5px;");
}

#[test]
fn outside_click_only_closes_open_menu_from_elsewhere() {
    assert!(outside_click_closes(true, false, false));
    assert!(!outside_click_closes(true, true, false));
    assert!(!outside_click_closes(true, false, true));
    assert!(!outside_click_closes(false, false, false));
}

//! Small `web-sys` helpers for the fixed element identifiers the site uses.
//!
//! Off-browser every lookup reads as absent so callers degrade to no-ops.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use super::menu_math::Rect;

pub const PROFILE_ICON_ID: &str = "profileIcon";
pub const PROFILE_MENU_ID: &str = "profileMenu";
pub const PROGRESS_CIRCLE_SELECTOR: &str = "#courseProgressCircle span";

#[cfg(feature = "hydrate")]
fn element(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Bounding box of the element with `id`.
pub fn element_rect(id: &str) -> Option<Rect> {
    #[cfg(feature = "hydrate")]
    {
        let rect = element(id)?.get_bounding_client_rect();
        Some(Rect { left: rect.left(), top: rect.top(), right: rect.right(), bottom: rect.bottom() })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Rendered width of a possibly hidden element. The element is laid out
/// invisibly for the measurement; reactive styles take over on the next render.
pub fn measure_hidden_width(id: &str) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let el = element(id)?.dyn_into::<web_sys::HtmlElement>().ok()?;
        let style = el.style();
        let _ = style.set_property("visibility", "hidden");
        let _ = style.set_property("display", "flex");
        Some(f64::from(el.offset_width()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Whether `target` is the element with `id` or one of its descendants.
#[cfg(feature = "hydrate")]
pub fn target_within(target: Option<&web_sys::EventTarget>, id: &str) -> bool {
    use wasm_bindgen::JsCast;

    let Some(node) = target.and_then(|t| t.dyn_ref::<web_sys::Node>()) else {
        return false;
    };
    element(id).is_some_and(|el| el.contains(Some(node)))
}

/// Path of the current page, or `/` off-browser.
pub fn current_path() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "/".to_owned()
    }
}

/// Percentage shown on the tutorial progress circle, if the page has one.
pub fn visual_course_progress() -> Option<u32> {
    #[cfg(feature = "hydrate")]
    {
        let doc = web_sys::window()?.document()?;
        let text = doc.query_selector(PROGRESS_CIRCLE_SELECTOR).ok()??.text_content()?;
        parse_percent_text(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Leading integer of text such as `"40%"`.
pub fn parse_percent_text(text: &str) -> Option<u32> {
    let digits: String = text.trim().chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Full page navigation, used after sign-out so every page-level effect is
/// dropped.
pub fn hard_navigate(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

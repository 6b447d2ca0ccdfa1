//! Small browser side effects that have no reactive equivalent.
//!
//! Every helper is best effort: a missing `window`, `document` or element is
//! skipped, and outside the browser build the helpers are no-ops.

#[cfg(feature = "csr")]
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Add or remove `class` on `<body>`.
pub fn set_body_class(class: &str, present: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let classes = body.class_list();
        let result = if present { classes.add_1(class) } else { classes.remove_1(class) };
        if let Err(err) = result {
            leptos::logging::warn!("body class {class} update failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (class, present);
    }
}

/// Smoothly scroll `element` to the vertical center of the viewport.
#[cfg(feature = "csr")]
pub fn scroll_into_view_centered(element: &web_sys::Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Whether the viewport is narrow enough to start with the sidebar hidden.
#[must_use]
pub fn is_mobile_viewport() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let width = match window.inner_width() {
            Ok(width) => width.as_f64().unwrap_or(f64::INFINITY),
            Err(_) => f64::INFINITY,
        };
        width <= crate::consts::MOBILE_BREAKPOINT_PX
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Current calendar year from the browser clock.
#[must_use]
pub fn current_year() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Seed for cosmetic randomness, taken from the wall clock.
#[must_use]
pub fn clock_seed() -> u64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now().to_bits()
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}

/// Ask for confirmation, then try to close the window.
///
/// Browsers ignore `window.close()` for tabs the script did not open, so
/// this is best effort and reports nothing back.
pub fn confirm_and_close_window(message: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.confirm_with_message(message) {
            Ok(true) => {
                if let Err(err) = window.close() {
                    leptos::logging::warn!("window.close failed: {err:?}");
                }
            }
            Ok(false) => {}
            Err(err) => leptos::logging::warn!("confirm prompt failed: {err:?}"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}

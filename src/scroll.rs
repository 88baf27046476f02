//! Scroll Position Helpers
//!
//! Infinite scroll trigger: load more once the viewport reaches the
//! bottom of the document.

use wasm_bindgen::JsCast;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    /// `window.innerHeight`
    pub viewport_height: f64,
    /// `document.documentElement.scrollTop`
    pub scroll_top: f64,
    /// `document.documentElement.offsetHeight`
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn at_bottom(&self, threshold_px: f64) -> bool {
        self.viewport_height + self.scroll_top >= self.document_height - threshold_px
    }
}

/// A scroll event should start a fetch only at the bottom and while idle
pub fn should_load_more(metrics: &ScrollMetrics, loading: bool, threshold_px: f64) -> bool {
    !loading && metrics.at_bottom(threshold_px)
}

/// Read current metrics from the browser window
pub fn read_scroll_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let root = window
        .document()?
        .document_element()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;

    Some(ScrollMetrics {
        viewport_height,
        scroll_top: f64::from(root.scroll_top()),
        document_height: f64::from(root.offset_height()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics {
            viewport_height: 800.0,
            scroll_top,
            document_height: 2000.0,
        }
    }

    #[test]
    fn test_at_bottom() {
        assert!(metrics(1200.0).at_bottom(0.0));
        assert!(!metrics(1199.0).at_bottom(0.0));
        assert!(metrics(1199.5).at_bottom(1.0));
        assert!(!metrics(600.0).at_bottom(1.0));
    }

    #[test]
    fn test_no_fetch_while_loading() {
        assert!(!should_load_more(&metrics(1200.0), true, 1.0));
        assert!(should_load_more(&metrics(1200.0), false, 1.0));
        assert!(!should_load_more(&metrics(100.0), false, 1.0));
    }
}

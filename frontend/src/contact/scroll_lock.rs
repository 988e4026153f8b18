//! Background scroll suppression while the contact modal is open.
//!
//! [`ScrollLock`] is a guard: it hides the page scrollbar when acquired and
//! puts the original body styles back when dropped, so whatever path closes
//! the modal (button, Escape, navigation that unmounts the provider) the
//! page is left scrollable.

use log::debug;
use web_sys::{HtmlElement, Window};

/// The element whose scrolling gets suppressed.
pub trait ScrollSurface {
    fn style(&self, property: &str) -> String;
    fn set_style(&self, property: &str, value: &str);
    /// Width of the vertical scrollbar currently taking layout space.
    fn gutter_width(&self) -> f64;
}

pub struct BodyScrollSurface {
    window: Window,
    body: HtmlElement,
}

impl BodyScrollSurface {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let body = window.document()?.body()?;
        Some(Self { window, body })
    }
}

impl ScrollSurface for BodyScrollSurface {
    fn style(&self, property: &str) -> String {
        self.body
            .style()
            .get_property_value(property)
            .unwrap_or_default()
    }

    fn set_style(&self, property: &str, value: &str) {
        let style = self.body.style();
        let _ = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
    }

    fn gutter_width(&self) -> f64 {
        let inner = self
            .window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        let client = self
            .window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| el.client_width() as f64)
            .unwrap_or(inner);
        (inner - client).max(0.0)
    }
}

pub struct ScrollLock<S: ScrollSurface> {
    surface: S,
    overflow: String,
    padding_right: String,
}

impl<S: ScrollSurface> ScrollLock<S> {
    pub fn acquire(surface: S) -> Self {
        let overflow = surface.style("overflow");
        let padding_right = surface.style("padding-right");
        let gutter = surface.gutter_width();

        surface.set_style("overflow", "hidden");
        if gutter > 0.0 {
            surface.set_style("padding-right", &format!("{}px", gutter));
        }
        debug!("scroll locked (gutter {}px)", gutter);

        Self {
            surface,
            overflow,
            padding_right,
        }
    }
}

impl<S: ScrollSurface> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        self.surface.set_style("overflow", &self.overflow);
        self.surface.set_style("padding-right", &self.padding_right);
        debug!("scroll unlocked");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory body; clones share the same style map.
    #[derive(Clone, Default)]
    pub(crate) struct FakeSurface {
        pub styles: Rc<RefCell<HashMap<String, String>>>,
        pub gutter: f64,
    }

    impl FakeSurface {
        pub fn with_gutter(gutter: f64) -> Self {
            Self {
                gutter,
                ..Default::default()
            }
        }

        pub fn get(&self, property: &str) -> Option<String> {
            self.styles.borrow().get(property).cloned()
        }
    }

    impl ScrollSurface for FakeSurface {
        fn style(&self, property: &str) -> String {
            self.get(property).unwrap_or_default()
        }

        fn set_style(&self, property: &str, value: &str) {
            let mut styles = self.styles.borrow_mut();
            if value.is_empty() {
                styles.remove(property);
            } else {
                styles.insert(property.to_string(), value.to_string());
            }
        }

        fn gutter_width(&self) -> f64 {
            self.gutter
        }
    }

    #[test]
    fn lock_hides_overflow_and_pads_the_gutter() {
        let surface = FakeSurface::with_gutter(15.0);
        let lock = ScrollLock::acquire(surface.clone());

        assert_eq!(surface.get("overflow").as_deref(), Some("hidden"));
        assert_eq!(surface.get("padding-right").as_deref(), Some("15px"));
        drop(lock);
    }

    #[test]
    fn dropping_the_lock_restores_original_styles() {
        let surface = FakeSurface::with_gutter(17.0);
        surface.set_style("overflow", "auto");
        surface.set_style("padding-right", "4px");

        drop(ScrollLock::acquire(surface.clone()));

        assert_eq!(surface.get("overflow").as_deref(), Some("auto"));
        assert_eq!(surface.get("padding-right").as_deref(), Some("4px"));
    }

    #[test]
    fn styles_absent_before_the_lock_are_removed_after() {
        let surface = FakeSurface::with_gutter(0.0);

        let lock = ScrollLock::acquire(surface.clone());
        assert_eq!(surface.get("padding-right"), None);
        drop(lock);

        assert!(surface.styles.borrow().is_empty());
    }
}

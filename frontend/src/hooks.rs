//! Scroll-driven presentation helpers shared by the landing sections.

use web_sys::{Element, Event};
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Pixels a section must enter the viewport before it is revealed.
const REVEAL_MARGIN: f64 = 80.0;

pub fn in_view(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin && bottom > margin
}

/// Vertical translation for a background moving at `speed` of the scroll.
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    (scroll_y.max(0.0) * speed).round()
}

/// Moves `delta` slides from `current`, wrapping both ways.
pub fn carousel_step(current: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).rem_euclid(len as isize) as usize
}

/// `true` once the referenced element has scrolled into view; never flips back.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state(|| false);

    let check = {
        let revealed = revealed.clone();
        move || {
            if *revealed {
                return;
            }
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let viewport = web_sys::window()
                .and_then(|w| w.inner_height().ok())
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            let rect = element.get_bounding_client_rect();
            if in_view(rect.top(), rect.bottom(), viewport, REVEAL_MARGIN) {
                revealed.set(true);
            }
        }
    };

    {
        let check = check.clone();
        use_effect_with_deps(
            move |_| {
                check();
                || ()
            },
            (),
        );
    }
    use_event_with_window("scroll", move |_: Event| check());

    *revealed
}

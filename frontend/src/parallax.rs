use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::config::PARALLAX_FACTOR;

pub fn parallax_offset(scroll_top: f64) -> f64 {
    scroll_top * PARALLAX_FACTOR
}

pub fn background_position_y(scroll_top: f64) -> String {
    format!("{}px", parallax_offset(scroll_top))
}

fn current_scroll_top() -> f64 {
    let Some(window) = window() else {
        return 0.0;
    };
    window
        .scroll_y()
        .ok()
        .filter(|y| *y > 0.0)
        .or_else(|| {
            window
                .document()
                .and_then(|d| d.document_element())
                .map(|el| el.scroll_top() as f64)
        })
        .unwrap_or(0.0)
}

fn apply(hero: &NodeRef) {
    if let Some(hero) = hero.cast::<HtmlElement>() {
        let _ = hero
            .style()
            .set_property("background-position-y", &background_position_y(current_scroll_top()));
    }
}

/// Moves the hero background at a fraction of the scroll speed.
#[hook]
pub fn use_parallax(hero: NodeRef) {
    use_effect_with_deps(
        move |hero| {
            let hero = hero.clone();
            let destructor: Box<dyn FnOnce()> = match window() {
                Some(window) => {
                    let callback = Closure::<dyn Fn()>::new({
                        let hero = hero.clone();
                        move || apply(&hero)
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    // Initial sample
                    apply(&hero);
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                }
                None => Box::new(|| ()),
            };
            move || destructor()
        },
        hero,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_three_tenths_of_scroll() {
        for scroll in [0.0, 1.0, 10.0, 333.0, 1200.5, 50_000.0] {
            assert_eq!(parallax_offset(scroll), scroll * 0.3);
        }
    }

    #[test]
    fn top_of_page_has_no_offset() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(background_position_y(0.0), "0px");
    }

    #[test]
    fn formats_css_length() {
        assert_eq!(background_position_y(100.0), "30px");
    }
}

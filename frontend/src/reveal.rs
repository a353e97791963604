use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    js_sys, window, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::scheduler::{schedule, TaskKind};

pub const REVEAL_SELECTOR: &str = ".fade-in";
pub const VISIBLE_CLASS: &str = "visible";

/// One-way hidden -> visible bookkeeping for the watched elements.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Records an intersection. True only the first time, when the caller
    /// should mark the element and stop watching it.
    pub fn intersect(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    /// Marks everything still hidden and returns those indices.
    pub fn force_remaining(&mut self) -> Vec<usize> {
        self.revealed
            .iter_mut()
            .enumerate()
            .filter(|(_, seen)| !**seen)
            .map(|(i, seen)| {
                *seen = true;
                i
            })
            .collect()
    }

    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|seen| !**seen).count()
    }
}

fn collect_watched() -> Vec<Element> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn reveal(element: &Element) {
    let _ = element.class_list().add_1(VISIBLE_CLASS);
}

/// Adds `visible` to every `.fade-in` element the first time at least 10% of
/// it enters the viewport. Whatever is still hidden after the fallback delay
/// is revealed anyway, whether or not the observer ever fired.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        move |_| {
            let elements = Rc::new(collect_watched());
            let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));
            debug!("Watching {} entrance-animated elements", elements.len());

            let callback = {
                let elements = elements.clone();
                let tracker = tracker.clone();
                Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                continue;
                            };
                            if !entry.is_intersecting() {
                                continue;
                            }
                            let target = entry.target();
                            if let Some(index) = elements.iter().position(|el| *el == target) {
                                if tracker.borrow_mut().intersect(index) {
                                    reveal(&target);
                                }
                            }
                            observer.unobserve(&target);
                        }
                    },
                )
            };

            let observer = if elements.is_empty() {
                None
            } else {
                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
                match IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    Ok(observer) => {
                        for element in elements.iter() {
                            observer.observe(element);
                        }
                        Some(observer)
                    }
                    Err(e) => {
                        warn!("IntersectionObserver unavailable: {:?}", e);
                        None
                    }
                }
            };

            let fallback = schedule(TaskKind::RevealFallback, move || {
                let pending = tracker.borrow().pending();
                if pending > 0 {
                    debug!("Fallback revealing {} of {} elements", pending, elements.len());
                }
                let forced = tracker.borrow_mut().force_remaining();
                for index in forced {
                    if let Some(element) = elements.get(index) {
                        reveal(element);
                    }
                }
            });

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(fallback);
                drop(callback);
            }
        },
        (),
    );
}

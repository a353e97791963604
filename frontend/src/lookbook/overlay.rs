use std::rc::Rc;

use log::debug;
use web_sys::{js_sys, Element};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config::asset_url;
use crate::lookbook::gesture::{DragRotator, SwipeTracker};
use crate::lookbook::navigation::{Layout, NavigationModel, Step, SurfaceSize};
use crate::lookbook::state::{LookbookAction, LookbookState};
use crate::scheduler::{CancelTrigger, TaskKind, TaskSlot};

#[derive(Properties, PartialEq)]
pub struct AlbumOverlayProps {
    pub state: Rc<LookbookState>,
    pub touch: bool,
    pub on_action: Callback<LookbookAction>,
}

fn measure(surface: &NodeRef) -> Option<SurfaceSize> {
    let element = surface.cast::<Element>()?;
    Some(SurfaceSize {
        width: element.client_width() as f64,
        height: element.client_height() as f64,
    })
}

/// Pointer x relative to the surface's left edge, and the surface width.
fn pointer_position(surface: &NodeRef, e: &MouseEvent) -> Option<(f64, f64)> {
    let rect = surface.cast::<Element>()?.get_bounding_client_rect();
    Some((e.client_x() as f64 - rect.left(), rect.width()))
}

fn first_touch(e: &TouchEvent) -> Option<(f64, f64)> {
    e.touches()
        .get(0)
        .map(|t| (t.client_x() as f64, t.client_y() as f64))
}

#[function_component]
pub fn AlbumOverlay(props: &AlbumOverlayProps) -> Html {
    let state = &props.state;
    let model = state.model();
    let open = state.is_open();

    let overlay_ref = use_node_ref();
    let surface_ref = use_node_ref();
    let swipe = use_mut_ref(|| SwipeTracker::for_model(model));
    let drag = use_mut_ref(DragRotator::default);
    let first_render = use_mut_ref(TaskSlot::default);

    // Nothing can be positioned until the overlay is shown and laid out, so
    // every open measures its surface one tick later.
    {
        let surface_ref = surface_ref.clone();
        let on_action = props.on_action.clone();
        let first_render = first_render.clone();
        use_effect_with_deps(
            move |&(_, open)| {
                if open {
                    let surface_ref = surface_ref.clone();
                    first_render
                        .borrow_mut()
                        .arm(TaskKind::FirstRender, move || {
                            if let Some(size) = measure(&surface_ref) {
                                debug!("Lookbook surface {}x{}", size.width, size.height);
                                on_action.emit(LookbookAction::SurfaceMeasured(size));
                            }
                        });
                }
                move || {
                    first_render.borrow_mut().cancel(CancelTrigger::Unmount);
                }
            },
            (state.generation(), open),
        );
    }

    {
        let surface_ref = surface_ref.clone();
        let on_action = props.on_action.clone();
        use_event_with_window("resize", move |_: Event| {
            if !open {
                return;
            }
            if let Some(size) = measure(&surface_ref) {
                on_action.emit(LookbookAction::SurfaceMeasured(size));
            }
        });
    }

    let on_background = {
        let overlay_ref = overlay_ref.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target_dyn_into::<Element>();
            if target.is_some() && target == overlay_ref.cast::<Element>() {
                on_action.emit(LookbookAction::CloseAlbum);
            }
        })
    };

    let on_close = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_action.emit(LookbookAction::CloseAlbum);
        })
    };

    let step_button = |step: Step| {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_action.emit(LookbookAction::Advance(step));
        })
    };

    let (ontouchstart, ontouchmove, ontouchend) = if props.touch {
        let start = {
            let swipe = swipe.clone();
            Callback::from(move |e: TouchEvent| {
                if let Some((x, y)) = first_touch(&e) {
                    swipe.borrow_mut().start(x, y);
                }
            })
        };
        let moved = {
            let swipe = swipe.clone();
            let on_action = props.on_action.clone();
            Callback::from(move |e: TouchEvent| {
                let step = first_touch(&e).and_then(|(x, y)| swipe.borrow_mut().update(x, y));
                if let Some(step) = step {
                    on_action.emit(LookbookAction::Advance(step));
                }
            })
        };
        let end = {
            let swipe = swipe.clone();
            Callback::from(move |_: TouchEvent| swipe.borrow_mut().end())
        };
        (Some(start), Some(moved), Some(end))
    } else {
        (None, None, None)
    };

    let pointer_drag = model == NavigationModel::Orbit && !props.touch;
    let (onmousedown, onmousemove, onmouseup, onmouseleave) = if pointer_drag {
        let down = {
            let drag = drag.clone();
            let surface_ref = surface_ref.clone();
            Callback::from(move |e: MouseEvent| {
                if let Some((x, _)) = pointer_position(&surface_ref, &e) {
                    drag.borrow_mut().press(x);
                }
            })
        };
        let moved = {
            let drag = drag.clone();
            let surface_ref = surface_ref.clone();
            let on_action = props.on_action.clone();
            Callback::from(move |e: MouseEvent| {
                let step = pointer_position(&surface_ref, &e).and_then(|(x, width)| {
                    drag.borrow_mut().pointer_moved(x, width, js_sys::Date::now())
                });
                if let Some(step) = step {
                    on_action.emit(LookbookAction::Advance(step));
                }
            })
        };
        let release = {
            let drag = drag.clone();
            Callback::from(move |_: MouseEvent| drag.borrow_mut().release())
        };
        (Some(down), Some(moved), Some(release.clone()), Some(release))
    } else {
        (None, None, None, None)
    };

    let zoom_on_click = |src: &String| {
        let src = src.clone();
        let drag = drag.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| {
            if drag.borrow_mut().take_stepped() {
                return;
            }
            on_action.emit(LookbookAction::OpenZoom(src.clone()));
        })
    };

    let images: &[String] = state.active().map(|a| a.images.as_slice()).unwrap_or(&[]);

    let surface = match state.layout(props.touch) {
        Layout::Empty => html! {},
        Layout::Strip {
            translate_percent,
            show_controls,
        } => html! {
            <>
                <div class="slide-wrapper" style={format!("transform: translateX({}%);", translate_percent)}>
                    { for images.iter().map(|src| html! {
                        <img src={asset_url(src)} alt="" draggable="false" onclick={zoom_on_click(src)} />
                    }) }
                </div>
                if show_controls {
                    <>
                        <button class="prev-slide" onclick={step_button(Step::Prev)}>{"❮"}</button>
                        <button class="next-slide" onclick={step_button(Step::Next)}>{"❯"}</button>
                    </>
                }
            </>
        },
        Layout::Ring {
            image_size,
            placements,
        } => html! {
            <>
                { for images.iter().zip(placements.iter()).map(|(src, placement)| html! {
                    <img
                        class={classes!("orbit-image", placement.front.then(|| "front"))}
                        src={asset_url(src)}
                        alt=""
                        draggable="false"
                        style={format!(
                            "left: {:.1}px; top: {:.1}px; width: {:.1}px; height: {:.1}px; --angle: {:.4}rad;",
                            placement.left, placement.top, image_size, image_size, placement.angle
                        )}
                        onclick={zoom_on_click(src)}
                    />
                }) }
            </>
        },
    };

    let counter = match (state.current_index(), state.active()) {
        (Some(index), Some(active)) if open && active.len() > 1 => html! {
            <div class="slide-counter">{format!("{} / {}", index + 1, active.len())}</div>
        },
        _ => html! {},
    };

    let surface_class = match model {
        NavigationModel::Carousel => "album-slider",
        NavigationModel::Orbit => "album-orbit",
    };

    html! {
        <div
            id="album-overlay"
            ref={overlay_ref}
            class={classes!("album-overlay", open.then(|| "active"))}
            data-album={state.active().map(|a| a.album_id.clone())}
            onclick={on_background}
        >
            <button class="close-overlay" onclick={on_close}>{"×"}</button>
            <div
                class={surface_class}
                ref={surface_ref}
                data-cursor={state.cursor().map(|c| c.to_string())}
                data-current={state.current_image().map(str::to_string)}
                {ontouchstart}
                {ontouchmove}
                {ontouchend}
                {onmousedown}
                {onmousemove}
                {onmouseup}
                {onmouseleave}
            >
                { surface }
            </div>
            { counter }
        </div>
    }
}

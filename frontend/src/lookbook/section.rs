use std::rc::Rc;

use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::lookbook::catalog::AlbumCatalog;
use crate::lookbook::covers::AlbumCovers;
use crate::lookbook::navigation::{NavigationModel, Step};
use crate::lookbook::overlay::AlbumOverlay;
use crate::lookbook::state::{LookbookAction, LookbookState};
use crate::lookbook::zoom::ZoomOverlay;

#[derive(Properties, PartialEq)]
pub struct LookbookProps {
    pub catalog: Rc<AlbumCatalog>,
    pub model: NavigationModel,
    pub touch: bool,
}

pub fn key_to_step(key: &str) -> Option<Step> {
    match key {
        "ArrowLeft" => Some(Step::Prev),
        "ArrowRight" => Some(Step::Next),
        _ => None,
    }
}

#[function_component]
pub fn Lookbook(props: &LookbookProps) -> Html {
    let state = {
        let catalog = props.catalog.clone();
        let model = props.model;
        use_reducer(move || LookbookState::new(catalog, model))
    };

    let on_action = {
        let state = state.clone();
        Callback::from(move |action: LookbookAction| state.dispatch(action))
    };

    // Arrow keys only step while the overlay is open; the reducer drops
    // advances otherwise.
    {
        let on_action = on_action.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(step) = key_to_step(&e.key()) {
                on_action.emit(LookbookAction::Advance(step));
            }
        });
    }

    if props.catalog.is_empty() {
        return html! {};
    }

    let on_open = on_action.reform(LookbookAction::OpenAlbum);
    let on_close_zoom = on_action.reform(|_: ()| LookbookAction::CloseZoom);

    html! {
        <>
            <AlbumCovers
                catalog={props.catalog.clone()}
                model={props.model}
                touch={props.touch}
                {on_open}
            />
            <AlbumOverlay
                state={Rc::new((*state).clone())}
                touch={props.touch}
                {on_action}
            />
            <ZoomOverlay zoom={state.zoom().clone()} on_close={on_close_zoom} />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_steps() {
        assert_eq!(key_to_step("ArrowLeft"), Some(Step::Prev));
        assert_eq!(key_to_step("ArrowRight"), Some(Step::Next));
        assert_eq!(key_to_step("ArrowUp"), None);
        assert_eq!(key_to_step("Enter"), None);
    }
}

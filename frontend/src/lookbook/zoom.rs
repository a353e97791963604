use web_sys::Element;
use yew::prelude::*;

use crate::config::asset_url;
use crate::lookbook::state::ZoomState;

#[derive(Properties, PartialEq)]
pub struct ZoomOverlayProps {
    pub zoom: ZoomState,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn ZoomOverlay(props: &ZoomOverlayProps) -> Html {
    let overlay_ref = use_node_ref();

    let onclick = {
        let overlay_ref = overlay_ref.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target_dyn_into::<Element>();
            if target.is_some() && target == overlay_ref.cast::<Element>() {
                on_close.emit(());
            }
        })
    };

    let (active, image) = match &props.zoom {
        ZoomState::Open(src) => (true, html! { <img src={asset_url(src)} alt="" /> }),
        ZoomState::Closed => (false, html! {}),
    };

    html! {
        <div
            id="zoom-overlay"
            ref={overlay_ref}
            class={classes!("zoom-overlay", active.then(|| "active"))}
            {onclick}
        >
            { image }
        </div>
    }
}

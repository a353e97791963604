use std::rc::Rc;

use yew::prelude::*;

use crate::config::asset_url;
use crate::lookbook::catalog::{Album, AlbumCatalog};
use crate::lookbook::navigation::NavigationModel;
use crate::scheduler::{CancelTrigger, TaskKind, TaskSlot};

#[derive(Properties, PartialEq)]
pub struct AlbumCoversProps {
    pub catalog: Rc<AlbumCatalog>,
    pub model: NavigationModel,
    pub touch: bool,
    pub on_open: Callback<String>,
}

#[function_component]
pub fn AlbumCovers(props: &AlbumCoversProps) -> Html {
    let long_press = use_mut_ref(TaskSlot::default);

    {
        let long_press = long_press.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    long_press.borrow_mut().cancel(CancelTrigger::Unmount);
                }
            },
            (),
        );
    }

    let render_cover = |album: &Album| -> Html {
        let disabled = props.catalog.is_disabled(&album.id);
        let cover = album.cover().map(asset_url).unwrap_or_default();
        let title = album.title.clone().unwrap_or_else(|| album.id.clone());

        let mut onclick = None;
        let mut onmouseenter = None;
        let mut ontouchstart = None;
        let mut ontouchmove = None;
        let mut ontouchend = None;

        if !disabled {
            let id = album.id.clone();
            let on_open = props.on_open.clone();
            match (props.model, props.touch) {
                (NavigationModel::Carousel, touch) => {
                    onclick = Some({
                        let id = id.clone();
                        let on_open = on_open.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_open.emit(id.clone());
                        })
                    });
                    if touch {
                        // Open on release and suppress the delayed click.
                        ontouchend = Some(Callback::from(move |e: TouchEvent| {
                            e.prevent_default();
                            on_open.emit(id.clone());
                        }));
                    }
                }
                (NavigationModel::Orbit, false) => {
                    onmouseenter = Some(Callback::from(move |_: MouseEvent| {
                        on_open.emit(id.clone());
                    }));
                }
                (NavigationModel::Orbit, true) => {
                    ontouchstart = Some({
                        let long_press = long_press.clone();
                        Callback::from(move |_: TouchEvent| {
                            let id = id.clone();
                            let on_open = on_open.clone();
                            long_press
                                .borrow_mut()
                                .arm(TaskKind::LongPress, move || on_open.emit(id));
                        })
                    });
                    ontouchmove = Some({
                        let long_press = long_press.clone();
                        Callback::from(move |_: TouchEvent| {
                            long_press.borrow_mut().cancel(CancelTrigger::PointerMove);
                        })
                    });
                    ontouchend = Some({
                        let long_press = long_press.clone();
                        Callback::from(move |_: TouchEvent| {
                            long_press.borrow_mut().cancel(CancelTrigger::PointerRelease);
                        })
                    });
                }
            }
        }

        html! {
            <div
                key={album.id.clone()}
                class={classes!("album", disabled.then(|| "disabled"))}
                data-album={album.id.clone()}
                {onclick}
                {onmouseenter}
                {ontouchstart}
                {ontouchmove}
                {ontouchend}
            >
                <img src={cover} alt={title.clone()} loading="lazy" draggable="false" />
                <div class="album-caption">
                    <span class="album-title">{title}</span>
                    if disabled {
                        <span class="album-badge">{"Coming soon"}</span>
                    }
                </div>
            </div>
        }
    };

    html! {
        <div class="album-grid fade-in">
            { for props.catalog.albums().map(render_cover) }
        </div>
    }
}

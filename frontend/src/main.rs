use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod parallax;
mod phrases;
mod reveal;
mod scheduler;
mod lookbook;
mod components {
    pub mod phrase_generator;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

const SECTIONS: &[(&str, &str)] = &[
    ("#concept", "Concetto"),
    ("#lookbook", "Lookbook"),
];

/// Scroll offset past which the nav bar gets its solid `scrolled` background.
const NAV_SCROLLED_PX: f64 = 120.0;

fn nav_is_scrolled(scroll_top: f64) -> bool {
    scroll_top > NAV_SCROLLED_PX
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = match window() {
                Some(window) => {
                    let scroll_callback = Closure::<dyn Fn()>::new(move || {
                        let scroll_top = web_sys::window()
                            .and_then(|w| w.scroll_y().ok())
                            .unwrap_or(0.0);
                        is_scrolled.set(nav_is_scrolled(scroll_top));
                    });

                    let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());

                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    })
                }
                None => Box::new(|| ()),
            };
            move || destructor()
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"(un)lucky"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for SECTIONS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 900;
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(15, 15, 15, 0.9);
                    backdrop-filter: blur(8px);
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                }
                .nav-logo, .nav-link {
                    color: #f5f5f5;
                    text-decoration: none;
                }
                .nav-logo {
                    font-weight: 700;
                    font-size: 1.3rem;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #f5f5f5;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1rem 2rem;
                        background: rgba(15, 15, 15, 0.95);
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

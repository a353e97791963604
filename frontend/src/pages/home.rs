use log::info;
use yew::prelude::*;

use crate::components::phrase_generator::PhraseGenerator;
use crate::config::SiteConfig;
use crate::lookbook::gesture::is_touch_device;
use crate::lookbook::Lookbook;
use crate::parallax::use_parallax;
use crate::reveal::use_reveal_on_scroll;

#[function_component]
pub fn Home() -> Html {
    let config = use_memo(|_| SiteConfig::load(), ());
    let catalog = {
        let config = config.clone();
        use_memo(move |_| config.catalog.clone(), ())
    };
    let touch = *use_memo(|_| is_touch_device(), ());
    let hero_ref = use_node_ref();

    use_parallax(hero_ref.clone());
    use_reveal_on_scroll();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            info!("Home mounted (touch: {})", touch);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="unlucky-page">
            <header id="hero" class="hero" ref={hero_ref}>
                <div class="hero-content fade-in">
                    <h1 class="hero-title">{"(un)lucky"}</h1>
                    <p class="hero-subtitle">{"La fortuna non si aspetta. Si indossa."}</p>
                    <a href="#lookbook" class="hero-cta">{"Scopri il lookbook"}</a>
                </div>
            </header>

            <section id="concept" class="concept">
                <div class="concept-text fade-in">
                    <h2>{"Il concetto"}</h2>
                    <p>
                        {"(un)lucky nasce dall’idea che la fortuna sia una scelta quotidiana: \
                          sbagliare, rischiare e ricominciare fanno parte dello stesso gesto."}
                    </p>
                </div>
                <div class="concept-phrase fade-in">
                    <PhraseGenerator />
                </div>
            </section>

            <section id="lookbook" class="lookbook">
                <h2 class="fade-in">{"Lookbook"}</h2>
                // The overlays inside are `position: fixed`, so no animated
                // (transformed) wrapper may sit between them and the viewport.
                <Lookbook
                    {catalog}
                    model={config.navigation}
                    {touch}
                />
            </section>

            <footer class="footer fade-in">
                <p>{"© (un)lucky"}</p>
            </footer>

            <style>
                {r#"
                .unlucky-page {
                    min-height: 100vh;
                    background: #0f0f0f;
                    color: #f5f5f5;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    overflow-x: hidden;
                }

                .fade-in {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }

                .fade-in.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    background-image: linear-gradient(rgba(0, 0, 0, 0.45), rgba(0, 0, 0, 0.45)), url('/assets/hero.jpg');
                    background-size: cover;
                    background-position: center 0px;
                    padding: 0 2rem;
                }

                .hero-title {
                    font-size: 4.5rem;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    margin: 0 0 1rem;
                }

                .hero-subtitle {
                    font-size: 1.3rem;
                    color: #ccc;
                    margin-bottom: 2rem;
                }

                .hero-cta {
                    display: inline-block;
                    padding: 1rem 2rem;
                    border: 1px solid #f5f5f5;
                    color: #f5f5f5;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .hero-cta:hover {
                    background: #f5f5f5;
                    color: #0f0f0f;
                }

                .concept {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                    display: grid;
                    gap: 3rem;
                }

                .concept h2, .lookbook h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1.5rem;
                }

                .concept p {
                    color: #aaa;
                    font-size: 1.2rem;
                    line-height: 1.6;
                }

                .phrase-display {
                    min-height: 3rem;
                    font-size: 1.6rem;
                    font-style: italic;
                    color: #f5f5f5 !important;
                    transition: opacity 0.6s ease;
                }

                .phrase-button {
                    padding: 0.8rem 1.6rem;
                    background: transparent;
                    color: #f5f5f5;
                    border: 1px solid #f5f5f5;
                    cursor: pointer;
                }

                .lookbook {
                    padding: 6rem 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .album-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }

                .album {
                    position: relative;
                    cursor: pointer;
                    overflow: hidden;
                }

                .album img {
                    width: 100%;
                    aspect-ratio: 3 / 4;
                    object-fit: cover;
                    display: block;
                    transition: transform 0.4s ease;
                }

                .album:hover img {
                    transform: scale(1.03);
                }

                .album.disabled {
                    cursor: default;
                    filter: grayscale(1);
                    opacity: 0.6;
                }

                .album.disabled:hover img {
                    transform: none;
                }

                .album-caption {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 1rem;
                    display: flex;
                    justify-content: space-between;
                    background: linear-gradient(transparent, rgba(0, 0, 0, 0.7));
                }

                .album-badge {
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .album-overlay, .zoom-overlay {
                    position: fixed;
                    inset: 0;
                    display: none;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.92);
                    z-index: 1000;
                }

                .zoom-overlay {
                    z-index: 1100;
                    cursor: zoom-out;
                }

                .album-overlay.active, .zoom-overlay.active {
                    display: flex;
                }

                .zoom-overlay img {
                    max-width: 92vw;
                    max-height: 92vh;
                    object-fit: contain;
                }

                .close-overlay {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    font-size: 2rem;
                    background: none;
                    border: none;
                    color: #f5f5f5;
                    cursor: pointer;
                    z-index: 2;
                }

                .album-slider {
                    position: relative;
                    width: min(90vw, 720px);
                    overflow: hidden;
                }

                .slide-wrapper {
                    display: flex;
                    transition: transform 0.4s ease;
                }

                .slide-wrapper img {
                    flex: 0 0 100%;
                    width: 100%;
                    max-height: 85vh;
                    object-fit: contain;
                    cursor: zoom-in;
                    user-select: none;
                }

                .prev-slide, .next-slide {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    background: rgba(0, 0, 0, 0.4);
                    color: #f5f5f5;
                    border: none;
                    font-size: 2rem;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                }

                .prev-slide { left: 0.5rem; }
                .next-slide { right: 0.5rem; }

                .slide-counter {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: #aaa;
                    font-size: 0.9rem;
                    letter-spacing: 0.1em;
                }

                .album-orbit {
                    position: relative;
                    width: min(90vw, 90vh);
                    height: min(90vw, 90vh);
                    user-select: none;
                }

                .orbit-image {
                    position: absolute;
                    object-fit: cover;
                    border-radius: 50%;
                    transition: left 0.5s ease, top 0.5s ease, transform 0.5s ease;
                    cursor: zoom-in;
                }

                .orbit-image.front {
                    transform: scale(1.15);
                    box-shadow: 0 0 24px rgba(255, 255, 255, 0.25);
                }

                .footer {
                    text-align: center;
                    padding: 3rem 2rem;
                    color: #666;
                }

                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 3rem;
                    }

                    .prev-slide, .next-slide {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}

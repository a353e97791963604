use log::debug;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::phrases::PhrasePicker;

#[derive(Properties, PartialEq)]
pub struct PhraseGeneratorProps {
    #[prop_or_default]
    pub picker: PhrasePicker,
    #[prop_or(AttrValue::Static("Premi il pulsante e scopri la tua frase."))]
    pub placeholder: AttrValue,
}

/// Restarts the opacity transition even when the text did not change:
/// hide, force a layout read, show.
fn replay_fade(display: &NodeRef) {
    if let Some(element) = display.cast::<HtmlElement>() {
        let style = element.style();
        let _ = style.set_property("opacity", "0");
        let _ = element.offset_width();
        let _ = style.set_property("opacity", "1");
    }
}

#[function_component]
pub fn PhraseGenerator(props: &PhraseGeneratorProps) -> Html {
    let display_ref = use_node_ref();
    // (phrase, number of draws)
    let phrase = use_state(|| (None::<&'static str>, 0u32));

    {
        let display_ref = display_ref.clone();
        use_effect_with_deps(
            move |draws| {
                if *draws > 0 {
                    replay_fade(&display_ref);
                }
                || ()
            },
            phrase.1,
        );
    }

    let onclick = {
        let phrase = phrase.clone();
        let picker = props.picker;
        Callback::from(move |_: MouseEvent| {
            let next = picker.next_phrase();
            debug!("New phrase: {}", next);
            phrase.set((Some(next), phrase.1.wrapping_add(1)));
        })
    };

    html! {
        <div class="phrase-generator">
            <p id="phrase-display" class="phrase-display" ref={display_ref}>
                { phrase.0.map(str::to_string).unwrap_or_else(|| props.placeholder.to_string()) }
            </p>
            <button id="generate-phrase" class="phrase-button" {onclick}>
                {"Genera una frase"}
            </button>
        </div>
    }
}

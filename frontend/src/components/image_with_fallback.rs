use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ImageWithFallbackProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    /// Text or emoji shown when the image cannot be displayed
    #[prop_or(AttrValue::from("🍽️"))]
    pub fallback: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Whether the placeholder should be rendered instead of the `<img>`
pub fn shows_fallback(src: &str, load_failed: bool) -> bool {
    load_failed || src.trim().is_empty()
}

/// Image that swaps to a placeholder when loading fails, so a broken or
/// missing asset never breaks the layout
#[function_component(ImageWithFallback)]
pub fn image_with_fallback(props: &ImageWithFallbackProps) -> Html {
    let load_failed = use_state(|| false);
    let loading = use_state(|| true);

    if shows_fallback(&props.src, *load_failed) {
        let label = if props.alt.is_empty() {
            AttrValue::from("Image placeholder")
        } else {
            props.alt.clone()
        };
        return html! {
            <div class={classes!("image-fallback", props.class.clone())} role="img" aria-label={label}>
                {props.fallback.clone()}
            </div>
        };
    }

    let onerror = {
        let load_failed = load_failed.clone();
        let loading = loading.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            log::warn!(target: "image_with_fallback", "failed to load {}", src);
            load_failed.set(true);
            loading.set(false);
        })
    };
    let onload = {
        let loading = loading.clone();
        Callback::from(move |_: Event| loading.set(false))
    };
    let style = format!("opacity: {}; transition: opacity 0.3s", if *loading { 0 } else { 1 });

    html! {
        <img
            src={props.src.clone()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            {style}
            {onerror}
            {onload}
            loading="lazy"
        />
    }
}

use shared::format::guest_noun;
use shared::{BookingConfig, GuestCounter as Counter};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GuestCounterProps {
    pub value: u32,
    pub config: BookingConfig,
    pub on_increment: Callback<()>,
    pub on_decrement: Callback<()>,
    #[prop_or_default]
    pub has_error: bool,
}

#[function_component(GuestCounter)]
pub fn guest_counter(props: &GuestCounterProps) -> Html {
    let counter = Counter::new(props.value, &props.config);
    let on_decrement = props.on_decrement.reform(|_: MouseEvent| ());
    let on_increment = props.on_increment.reform(|_: MouseEvent| ());

    html! {
        <div class="guest-counter-container">
            <div id="guests" class={classes!("guest-counter", props.has_error.then_some("error"))}>
                <button
                    type="button"
                    class="counter-button decrement"
                    onclick={on_decrement}
                    disabled={!counter.can_decrement()}
                    aria-label="Decrease number of guests"
                    aria-invalid={if props.has_error { "true" } else { "false" }}
                >
                    {"−"}
                </button>
                <div class="counter-display" aria-live="polite">
                    <span class="counter-value">{counter.value()}</span>
                    <span class="counter-label">{guest_noun(counter.value())}</span>
                </div>
                <button
                    type="button"
                    class="counter-button increment"
                    onclick={on_increment}
                    disabled={!counter.can_increment()}
                    aria-label="Increase number of guests"
                >
                    {"+"}
                </button>
            </div>
            <input type="hidden" name="guests" value={counter.value().to_string()} readonly=true />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{is_disabled, mount};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn buttons_at(value: u32) -> (bool, bool) {
        let view = mount::<GuestCounter>(GuestCounterProps {
            value,
            config: BookingConfig::default(),
            on_increment: Callback::noop(),
            on_decrement: Callback::noop(),
            has_error: false,
        })
        .await;
        let state = (is_disabled(&view.find(".decrement")), is_disabled(&view.find(".increment")));
        view.unmount();
        state
    }

    #[wasm_bindgen_test]
    async fn test_buttons_disabled_at_bounds() {
        assert_eq!(buttons_at(1).await, (true, false));
        assert_eq!(buttons_at(5).await, (false, false));
        assert_eq!(buttons_at(10).await, (false, true));
    }

    #[wasm_bindgen_test]
    async fn test_label_follows_count() {
        let view = mount::<GuestCounter>(GuestCounterProps {
            value: 1,
            config: BookingConfig::default(),
            on_increment: Callback::noop(),
            on_decrement: Callback::noop(),
            has_error: false,
        })
        .await;
        assert_eq!(view.find(".counter-label").text_content().as_deref(), Some("Guest"));
        view.unmount();
    }
}

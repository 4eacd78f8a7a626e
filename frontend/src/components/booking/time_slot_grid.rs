use shared::format::slot_label;
use shared::TimeSlot;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimeSlotGridProps {
    pub slots: Vec<TimeSlot>,
    pub on_select: Callback<String>,
    #[prop_or_default]
    pub has_error: bool,
}

/// Fixed evening slots; only those in the day's availability can be picked
#[function_component(TimeSlotGrid)]
pub fn time_slot_grid(props: &TimeSlotGridProps) -> Html {
    html! {
        <div class="time-slot-container">
            <div
                id="time"
                class={classes!("time-slot-grid", props.has_error.then_some("has-error"))}
                role="radiogroup"
                aria-label="Select time slot"
                aria-invalid={if props.has_error { "true" } else { "false" }}
                aria-describedby={props.has_error.then_some("time-error")}
            >
                {for props.slots.iter().map(|slot| {
                    let label = slot_label(&slot.time);
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let time = slot.time.clone();
                        let available = slot.available;
                        Callback::from(move |_: MouseEvent| {
                            if available {
                                on_select.emit(time.clone());
                            }
                        })
                    };
                    html! {
                        <button
                            key={slot.time.clone()}
                            type="button"
                            name="time"
                            class={classes!(
                                "time-slot",
                                slot.selected.then_some("selected"),
                                (!slot.available).then_some("unavailable")
                            )}
                            disabled={!slot.available}
                            role="radio"
                            aria-checked={if slot.selected { "true" } else { "false" }}
                            aria-label={format!("{} {}", label, if slot.available { "available" } else { "unavailable" })}
                            {onclick}
                        >
                            {label.clone()}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{is_disabled, mount};
    use shared::selectors::grid_rows;
    use shared::{AvailableTimes, BookingConfig};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_unavailable_slots_are_disabled() {
        let available = AvailableTimes::new(vec!["17:00".to_string(), "19:00".to_string()]);
        let slots = grid_rows(&BookingConfig::default(), &available, Some("19:00"));
        let view = mount::<TimeSlotGrid>(TimeSlotGridProps {
            slots,
            on_select: Callback::noop(),
            has_error: false,
        })
        .await;

        assert_eq!(view.count(".time-slot"), 10);
        assert_eq!(view.count(".time-slot[disabled]"), 8);
        assert!(!is_disabled(&view.find("button[aria-label='5:00 PM available']")));
        assert!(is_disabled(&view.find("button[aria-label='5:30 PM unavailable']")));

        let selected = view.find(".time-slot.selected");
        assert_eq!(selected.get_attribute("aria-checked").as_deref(), Some("true"));
        assert_eq!(selected.text_content().as_deref(), Some("7:00 PM"));
        view.unmount();
    }
}

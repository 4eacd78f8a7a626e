use chrono::NaiveDate;
use shared::format::{date_picker_label, day_cell, medium_date};
use shared::DateWindow;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    /// Selected reservation date, `None` until the guest picks one
    pub value: Option<NaiveDate>,
    /// Days offered, starting today
    pub window: DateWindow,
    pub on_select: Callback<NaiveDate>,
    #[prop_or_default]
    pub has_error: bool,
}

#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let is_open = use_state(|| false);
    let container_ref = use_node_ref();

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    // Close when clicking anywhere outside the picker
    {
        let is_open = is_open.clone();
        let container_ref = container_ref.clone();
        use_effect_with(*is_open, move |open| {
            let listener = if *open {
                window().map(|w| {
                    gloo::events::EventListener::new(&w, "click", move |e| {
                        let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                            return;
                        };
                        if let Some(container) = container_ref.cast::<Element>() {
                            if !container.contains(Some(target.as_ref())) {
                                is_open.set(false);
                            }
                        }
                    })
                })
            } else {
                None
            };
            move || drop(listener)
        });
    }

    let days = props.window.days();

    html! {
        <div class="date-picker-container" ref={container_ref}>
            <button
                type="button"
                id="date"
                name="date"
                class={classes!(
                    "date-picker-trigger",
                    props.has_error.then_some("error"),
                    props.value.is_some().then_some("selected")
                )}
                aria-label="Select date"
                aria-invalid={if props.has_error { "true" } else { "false" }}
                aria-describedby={props.has_error.then_some("date-error")}
                onclick={toggle}
            >
                <span class="calendar-icon" aria-hidden="true">{"📅"}</span>
                <span>{date_picker_label(props.value)}</span>
            </button>

            {if *is_open {
                html! {
                    <div class="date-picker-content">
                        <div class="date-picker-calendar">
                            <div class="calendar-header">
                                <h3>{"Select Date"}</h3>
                                <p class="calendar-hint">{format!("Available for the next {} days", days.len())}</p>
                            </div>
                            <div class="calendar-grid">
                                {for days.iter().map(|&date| {
                                    let selectable = props.window.is_selectable(date);
                                    let is_selected = props.value == Some(date);
                                    let (day_number, day_name) = day_cell(date);
                                    let onclick = {
                                        let on_select = props.on_select.clone();
                                        let is_open = is_open.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            if selectable {
                                                on_select.emit(date);
                                                is_open.set(false);
                                            }
                                        })
                                    };
                                    html! {
                                        <button
                                            key={date.to_string()}
                                            type="button"
                                            class={classes!(
                                                "calendar-day",
                                                (!selectable).then_some("disabled"),
                                                is_selected.then_some("selected")
                                            )}
                                            disabled={!selectable}
                                            aria-label={format!("Select {}", medium_date(date))}
                                            {onclick}
                                        >
                                            <span class="day-number">{day_number}</span>
                                            <span class="day-name">{day_name}</span>
                                        </button>
                                    }
                                })}
                            </div>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

use shared::Field;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::date_picker::DatePicker;
use super::guest_counter::GuestCounter;
use super::occasion_radio_group::OccasionRadioGroup;
use super::time_slot_grid::TimeSlotGrid;
use crate::hooks::use_booking_form::{BookingFormState, UseBookingFormActions};

#[derive(Properties, PartialEq)]
pub struct BookingFormViewProps {
    pub state: BookingFormState,
    pub actions: UseBookingFormActions,
}

fn input_value(e: &InputEvent) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

fn error_message(state: &BookingFormState, field: Field) -> Html {
    match state.error(field) {
        Some(message) => html! {
            <span id={format!("{}-error", field.name())} class="error-message" role="alert">
                {message.to_string()}
            </span>
        },
        None => html! {},
    }
}

#[function_component(BookingFormView)]
pub fn booking_form_view(props: &BookingFormViewProps) -> Html {
    let state = &props.state;
    let actions = &props.actions;

    let text_input = |field: Field, label: &'static str, input_type: &'static str, autocomplete: &'static str, placeholder: &'static str| {
        let has_error = state.error(field).is_some();
        let value = state.draft.text(field).unwrap_or_default().to_string();
        let oninput = {
            let set_text = actions.set_text.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(value) = input_value(&e) {
                    set_text.emit((field, value));
                }
            })
        };
        let onblur = actions.blur.reform(move |_: FocusEvent| field);
        let required = field.is_required();
        html! {
            <div class="form-group">
                <label for={field.name()}>
                    {label}
                    {if required {
                        html! { <span class="required" aria-label="required">{" *"}</span> }
                    } else {
                        html! {}
                    }}
                </label>
                <input
                    type={input_type}
                    id={field.name()}
                    name={field.name()}
                    class={classes!(has_error.then_some("error"))}
                    {value}
                    {oninput}
                    {onblur}
                    {placeholder}
                    autocomplete={autocomplete}
                    aria-required={if required { "true" } else { "false" }}
                    aria-invalid={if has_error { "true" } else { "false" }}
                    aria-describedby={has_error.then(|| format!("{}-error", field.name()))}
                />
                {error_message(state, field)}
            </div>
        }
    };

    let onsubmit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let on_select_date = actions.select_date.clone();
    let on_select_time = actions.select_time.clone();

    let special_requests_input = {
        let set_text = actions.set_text.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                set_text.emit((Field::SpecialRequests, value));
            }
        })
    };

    html! {
        <form class="booking-form" {onsubmit} novalidate=true aria-label="Table reservation form">
            <fieldset>
                <legend>{"Reservation Details"}</legend>

                <div class="form-group">
                    <label for="date">
                        {"Date"}<span class="required" aria-label="required">{" *"}</span>
                    </label>
                    <DatePicker
                        value={state.draft.date}
                        window={state.date_window.clone()}
                        on_select={on_select_date}
                        has_error={state.error(Field::Date).is_some()}
                    />
                    {error_message(state, Field::Date)}
                </div>

                <div class="form-group">
                    <label id="time-label">
                        {"Time"}<span class="required" aria-label="required">{" *"}</span>
                    </label>
                    <TimeSlotGrid
                        slots={state.time_slots.clone()}
                        on_select={on_select_time}
                        has_error={state.error(Field::Time).is_some()}
                    />
                    {error_message(state, Field::Time)}
                </div>

                <div class="form-group">
                    <label>
                        {"Number of Guests"}<span class="required" aria-label="required">{" *"}</span>
                    </label>
                    <GuestCounter
                        value={state.draft.guests}
                        config={state.config.clone()}
                        on_increment={actions.increment_guests.clone()}
                        on_decrement={actions.decrement_guests.clone()}
                        has_error={state.error(Field::Guests).is_some()}
                    />
                    {error_message(state, Field::Guests)}
                </div>

                <div class="form-group">
                    <label>{"Occasion"}</label>
                    <OccasionRadioGroup
                        value={state.draft.occasion}
                        on_change={actions.select_occasion.clone()}
                    />
                </div>
            </fieldset>

            <fieldset>
                <legend>{"Contact Information"}</legend>
                <div class="form-row">
                    {text_input(Field::FirstName, "First Name", "text", "given-name", "John")}
                    {text_input(Field::LastName, "Last Name", "text", "family-name", "Doe")}
                </div>
                {text_input(Field::Email, "Email", "email", "email", "john.doe@example.com")}
                {text_input(Field::Phone, "Phone", "tel", "tel", "(312) 555-0123")}

                <div class="form-group">
                    <label for="specialRequests">{"Special Requests (Optional)"}</label>
                    <textarea
                        id="specialRequests"
                        name="specialRequests"
                        rows="4"
                        value={state.draft.special_requests.clone()}
                        oninput={special_requests_input}
                        placeholder="Any dietary restrictions, seating preferences, or special occasions we should know about?"
                    />
                </div>
            </fieldset>

            {match &state.submit_error {
                Some(message) => html! {
                    <div class="submit-error" role="alert">{message.clone()}</div>
                },
                None => html! {},
            }}

            <button
                type="submit"
                class="submit-button"
                disabled={!state.can_submit}
                aria-label="Submit reservation"
            >
                {"Reserve a Table"}
            </button>
        </form>
    }
}

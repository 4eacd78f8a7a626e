use yew::prelude::*;

use crate::components::booking::{BookingFormView, ConfirmationView};
use crate::hooks::use_booking_form;
use crate::services::api::BookingServices;

#[function_component(BookingPage)]
pub fn booking_page() -> Html {
    let services = use_context::<BookingServices>().unwrap_or_else(BookingServices::from_window);
    let booking = use_booking_form(&services);
    let state = booking.state;

    html! {
        <section class="booking-page" aria-labelledby="booking-title">
            {match state.confirmation.clone() {
                Some(record) => html! {
                    <ConfirmationView {record} config={state.config.clone()} />
                },
                None => html! {
                    <>
                        <div class="booking-header">
                            <h1 id="booking-title">{"Reserve a Table"}</h1>
                            <p>{"Book your table at Little Lemon. We look forward to serving you!"}</p>
                        </div>
                        <BookingFormView state={state.clone()} actions={booking.actions} />
                    </>
                },
            }}
        </section>
    }
}

use shared::calendar_link::google_calendar_url;
use shared::format::{long_date, party_size, slot_label};
use shared::{BookingConfig, ConfirmationRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmationViewProps {
    pub record: ConfirmationRecord,
    pub config: BookingConfig,
}

#[function_component(ConfirmationView)]
pub fn confirmation_view(props: &ConfirmationViewProps) -> Html {
    let record = &props.record;
    let draft = &record.reservation;
    let date = draft.date.map(long_date).unwrap_or_default();
    let time = draft.time.as_deref().map(slot_label).unwrap_or_default();
    let calendar_url = google_calendar_url(record, &props.config);

    let row = |label: &'static str, value: String| {
        html! {
            <div class="detail-row">
                <span class="detail-label">{label}</span>
                <span class="detail-value">{value}</span>
            </div>
        }
    };

    html! {
        <div class="booking-confirmation" role="status" aria-live="polite">
            <div class="confirmation-icon" aria-hidden="true">{"✓"}</div>
            <h2>{"Reservation Confirmed!"}</h2>
            <p class="confirmation-message">
                {format!("Thank you, {}! Your table has been reserved.", draft.first_name)}
            </p>

            <div class="confirmation-details">
                {row("Confirmation Number:", record.id.to_string())}
                {row("Date:", date)}
                {row("Time:", time)}
                {row("Party Size:", party_size(draft.guests))}
                {row("Occasion:", draft.occasion.label().to_string())}
                {row("Name:", draft.full_name())}
                {row("Email:", draft.email.clone())}
                {row("Phone:", draft.phone.clone())}
                {if draft.special_requests.trim().is_empty() {
                    html! {}
                } else {
                    row("Special Requests:", draft.special_requests.clone())
                }}
            </div>

            <div class="confirmation-actions">
                {match calendar_url {
                    Some(url) => html! {
                        <a href={url} target="_blank" rel="noopener noreferrer" class="calendar-link">
                            {"Add to Google Calendar"}
                        </a>
                    },
                    None => html! {},
                }}
            </div>

            <p class="confirmation-note">
                {format!("A confirmation email has been sent to {}", draft.email)}
            </p>
        </div>
    }
}

use crate::config::BookingConfig;
use crate::models::ConfirmationRecord;
use crate::validation::parse_slot;
use chrono::{Duration, NaiveDateTime};

pub const EVENT_TITLE: &str = "Reservation at Little Lemon";
pub const EVENT_LOCATION: &str = "Little Lemon Restaurant, Chicago";

const GOOGLE_TEMPLATE_URL: &str = "https://calendar.google.com/calendar/render?action=TEMPLATE";

/// Start of the reserved table, if the record carries a valid date and time
pub fn reservation_start(record: &ConfirmationRecord) -> Option<NaiveDateTime> {
    let date = record.reservation.date?;
    let time = parse_slot(record.reservation.time.as_deref()?)?;
    Some(date.and_time(time))
}

/// "Add to Calendar" link for a confirmed reservation. Times are floating
/// local times so the event lands at the restaurant's wall-clock time.
pub fn google_calendar_url(record: &ConfirmationRecord, config: &BookingConfig) -> Option<String> {
    let start = reservation_start(record)?;
    let end = start + Duration::minutes(i64::from(config.reservation_length_minutes));
    let draft = &record.reservation;

    let details = format!(
        "Reservation for {}\nParty size: {} guests\nOccasion: {}\nConfirmation: {}",
        draft.full_name(),
        draft.guests,
        draft.occasion,
        record.id
    );

    Some(format!(
        "{}&text={}&dates={}/{}&details={}&location={}",
        GOOGLE_TEMPLATE_URL,
        urlencoding::encode(EVENT_TITLE),
        start.format("%Y%m%dT%H%M%S"),
        end.format("%Y%m%dT%H%M%S"),
        urlencoding::encode(&details),
        urlencoding::encode(EVENT_LOCATION),
    ))
}

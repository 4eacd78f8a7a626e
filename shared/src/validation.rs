//! Field validators for the reservation form.
//!
//! Every validator is a pure function of the field value and a
//! [`ValidationContext`]. Failures are returned as [`FieldError`] values whose
//! `Display` output is the message shown next to the field; nothing here
//! panics or logs.

use crate::config::BookingConfig;
use crate::models::{Field, ReservationDraft};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum trimmed length of first and last names
pub const MIN_NAME_LENGTH: usize = 2;

/// Minimum number of digits in a phone number
pub const MIN_PHONE_DIGITS: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s\-()]+$").expect("phone pattern is valid"));

/// Validation failure of a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("First name is required")]
    FirstNameRequired,
    #[error("First name must be at least 2 characters")]
    FirstNameTooShort,
    #[error("Last name is required")]
    LastNameRequired,
    #[error("Last name must be at least 2 characters")]
    LastNameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Please enter a valid phone number (at least 10 digits)")]
    InvalidPhone,
    #[error("Date is required")]
    DateRequired,
    #[error("Please select today or a future date")]
    DateInPast,
    #[error("Time is required")]
    TimeRequired,
    #[error("Please select a valid time")]
    InvalidTime,
    #[error("Please select a future time")]
    TimeInPast,
    #[error("Number of guests must be at least {0}")]
    TooFewGuests(u32),
    #[error("Maximum {0} guests per reservation")]
    TooManyGuests(u32),
}

/// Everything a validator may look at besides the field value itself
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    /// Local wall-clock time at which validation runs
    pub now: NaiveDateTime,
    /// Reservation date currently selected, used by the time validator
    pub date: Option<NaiveDate>,
    pub config: &'a BookingConfig,
}

impl<'a> ValidationContext<'a> {
    pub fn new(now: NaiveDateTime, date: Option<NaiveDate>, config: &'a BookingConfig) -> Self {
        Self { now, date, config }
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }
}

fn validate_name(value: &str, required: FieldError, too_short: FieldError) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(required)
    } else if trimmed.chars().count() < MIN_NAME_LENGTH {
        Err(too_short)
    } else {
        Ok(())
    }
}

pub fn validate_first_name(value: &str) -> Result<(), FieldError> {
    validate_name(value, FieldError::FirstNameRequired, FieldError::FirstNameTooShort)
}

pub fn validate_last_name(value: &str) -> Result<(), FieldError> {
    validate_name(value, FieldError::LastNameRequired, FieldError::LastNameTooShort)
}

/// Accepts `local@domain.tld` shaped addresses without whitespace
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::EmailRequired)
    } else if !EMAIL_RE.is_match(value) {
        Err(FieldError::InvalidEmail)
    } else {
        Ok(())
    }
}

/// Accepts digits, spaces, hyphens and parentheses with at least ten digits.
/// No national format is enforced.
pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::PhoneRequired);
    }
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if !PHONE_CHARS_RE.is_match(value) || digits < MIN_PHONE_DIGITS {
        return Err(FieldError::InvalidPhone);
    }
    Ok(())
}

/// Date must be today or later; time of day is ignored
pub fn validate_date(date: Option<NaiveDate>, ctx: &ValidationContext<'_>) -> Result<(), FieldError> {
    match date {
        None => Err(FieldError::DateRequired),
        Some(date) if date < ctx.today() => Err(FieldError::DateInPast),
        Some(_) => Ok(()),
    }
}

/// Parse an "HH:MM" slot
pub fn parse_slot(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M").ok()
}

/// Time is required; when the reservation is for today it must be strictly
/// later than the current clock time
pub fn validate_time(time: Option<&str>, ctx: &ValidationContext<'_>) -> Result<(), FieldError> {
    let time = match time {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Err(FieldError::TimeRequired),
    };
    let slot = parse_slot(time).ok_or(FieldError::InvalidTime)?;
    if ctx.date == Some(ctx.today()) && slot <= ctx.now.time() {
        return Err(FieldError::TimeInPast);
    }
    Ok(())
}

pub fn validate_guest_count(count: u32, config: &BookingConfig) -> Result<(), FieldError> {
    if count < config.min_guests {
        Err(FieldError::TooFewGuests(config.min_guests))
    } else if count > config.max_guests {
        Err(FieldError::TooManyGuests(config.max_guests))
    } else {
        Ok(())
    }
}

/// Read a raw guest count; blank or non-numeric input counts as zero guests
pub fn parse_guests(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

/// Run the validator belonging to `field` against the draft
pub fn validate_field(
    field: Field,
    draft: &ReservationDraft,
    ctx: &ValidationContext<'_>,
) -> Result<(), FieldError> {
    match field {
        Field::FirstName => validate_first_name(&draft.first_name),
        Field::LastName => validate_last_name(&draft.last_name),
        Field::Email => validate_email(&draft.email),
        Field::Phone => validate_phone(&draft.phone),
        Field::Date => validate_date(draft.date, ctx),
        Field::Time => validate_time(draft.time.as_deref(), ctx),
        Field::Guests => validate_guest_count(draft.guests, ctx.config),
        Field::Occasion | Field::SpecialRequests => Ok(()),
    }
}

/// Validate every required field. An empty map means the draft can be submitted.
pub fn validate_draft(draft: &ReservationDraft, ctx: &ValidationContext<'_>) -> BTreeMap<Field, FieldError> {
    Field::REQUIRED
        .iter()
        .filter_map(|&field| validate_field(field, draft, ctx).err().map(|e| (field, e)))
        .collect()
}

/// Per-field errors and the set of fields the user has interacted with
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationState {
    errors: BTreeMap<Field, FieldError>,
    touched: BTreeSet<Field>,
    submit_error: Option<String>,
}

impl ValidationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn record(&mut self, field: Field, result: Result<(), FieldError>) {
        match result {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(e) => {
                self.errors.insert(field, e);
            }
        }
    }

    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn replace_errors(&mut self, errors: BTreeMap<Field, FieldError>) {
        self.errors = errors;
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Error to display: only shown once the field has been touched
    pub fn visible_error(&self, field: Field) -> Option<&FieldError> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn errors(&self) -> &BTreeMap<Field, FieldError> {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn set_submit_error(&mut self, message: impl Into<String>) {
        self.submit_error = Some(message.into());
    }

    pub fn clear_submit_error(&mut self) {
        self.submit_error = None;
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }
}

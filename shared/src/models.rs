use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields of the reservation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Date,
    Time,
    Guests,
    Occasion,
    SpecialRequests,
}

impl Field {
    /// Fields that must hold a valid value before the reservation can be submitted
    pub const REQUIRED: [Field; 7] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Date,
        Field::Time,
        Field::Guests,
    ];

    /// Every field, in form order
    pub const ALL: [Field; 9] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Date,
        Field::Time,
        Field::Guests,
        Field::Occasion,
        Field::SpecialRequests,
    ];

    /// Form control name, also used to derive element ids (`"<name>-error"`)
    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Date => "date",
            Field::Time => "time",
            Field::Guests => "guests",
            Field::Occasion => "occasion",
            Field::SpecialRequests => "specialRequests",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Occasion selected for a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Occasion {
    #[default]
    Birthday,
    Anniversary,
    Business,
}

impl Occasion {
    /// Fixed display order of the occasion selector
    pub const ALL: [Occasion; 3] = [Occasion::Birthday, Occasion::Anniversary, Occasion::Business];

    /// Value submitted with the reservation
    pub fn value(&self) -> &'static str {
        match self {
            Occasion::Birthday => "Birthday",
            Occasion::Anniversary => "Anniversary",
            Occasion::Business => "Business",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Occasion::Birthday => "Birthday",
            Occasion::Anniversary => "Anniversary",
            Occasion::Business => "Business Meeting",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.value() == value)
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// In-progress reservation data, also the payload handed to the submitter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    pub date: Option<NaiveDate>,
    /// Selected slot in "HH:MM" form
    pub time: Option<String>,
    pub guests: u32,
    pub occasion: Occasion,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: String,
}

impl ReservationDraft {
    pub fn new(default_guests: u32) -> Self {
        Self {
            date: None,
            time: None,
            guests: default_guests,
            occasion: Occasion::default(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            special_requests: String::new(),
        }
    }

    /// Current value of a free-text field, `None` for typed fields
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::Email => Some(&self.email),
            Field::Phone => Some(&self.phone),
            Field::SpecialRequests => Some(&self.special_requests),
            _ => None,
        }
    }

    pub(crate) fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::Email => Some(&mut self.email),
            Field::Phone => Some(&mut self.phone),
            Field::SpecialRequests => Some(&mut self.special_requests),
            _ => None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

impl Default for ReservationDraft {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Display code issued once a reservation is accepted, e.g. `LL482913`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfirmationId(String);

impl ConfirmationId {
    /// Prefix followed by the trailing six digits of the epoch-millisecond timestamp
    pub fn from_timestamp_millis(prefix: &str, epoch_millis: i64) -> Self {
        Self(format!("{}{:06}", prefix, epoch_millis.rem_euclid(1_000_000)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfirmationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of an accepted reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationRecord {
    pub id: ConfirmationId,
    pub reservation: ReservationDraft,
    pub confirmed_at: DateTime<FixedOffset>,
}

//! Booking domain for the Little Lemon site: reservation models, field
//! validators, the availability resolver and the form controller shared by
//! the frontend and its tests.

pub mod availability;
pub mod booking_form;
pub mod calendar_link;
pub mod clock;
pub mod config;
pub mod format;
pub mod models;
pub mod selectors;
pub mod validation;

pub use availability::{AvailabilityLookup, AvailableTimes, SeededAvailability};
pub use booking_form::{BookingForm, BookingState, ReservationSubmitter, SubmissionError};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{BookingConfig, ConfigError};
pub use models::{ConfirmationId, ConfirmationRecord, Field, Occasion, ReservationDraft};
pub use selectors::{DateWindow, GuestCounter, TimeSlot};
pub use validation::{FieldError, ValidationContext, ValidationState};

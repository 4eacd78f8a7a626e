//! Reservation form controller.
//!
//! [`BookingForm`] owns the draft, the validation state and the availability
//! set for one page view. It starts in [`BookingState::Editing`] and moves to
//! [`BookingState::Confirmed`] after a successful submit; there is no way
//! back. The availability lookup, the submission function and the clock are
//! injected at construction.

use crate::availability::{AvailabilityLookup, AvailableTimes};
use crate::clock::Clock;
use crate::config::BookingConfig;
use crate::models::{ConfirmationId, ConfirmationRecord, Field, Occasion, ReservationDraft};
use crate::selectors::{time_slot_grid, GuestCounter};
use crate::validation::{parse_guests, validate_draft, validate_field, FieldError, ValidationContext, ValidationState};
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::rc::Rc;
use thiserror::Error;

/// External reservation endpoint. Returns whether the reservation was accepted.
pub trait ReservationSubmitter {
    fn submit(&self, draft: &ReservationDraft) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<Field>),
    #[error("Failed to submit reservation. Please try again.")]
    Rejected,
    #[error("reservation is already confirmed")]
    AlreadyConfirmed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingState {
    Editing,
    Confirmed(ConfirmationRecord),
}

pub struct BookingForm {
    config: BookingConfig,
    clock: Rc<dyn Clock>,
    lookup: Option<Rc<dyn AvailabilityLookup>>,
    submitter: Option<Rc<dyn ReservationSubmitter>>,
    draft: ReservationDraft,
    validation: ValidationState,
    available: AvailableTimes,
    state: BookingState,
}

impl BookingForm {
    pub fn new(
        config: BookingConfig,
        clock: Rc<dyn Clock>,
        lookup: Option<Rc<dyn AvailabilityLookup>>,
        submitter: Option<Rc<dyn ReservationSubmitter>>,
    ) -> Self {
        let today = clock.now().date_naive();
        let available = AvailableTimes::initialize(lookup.as_deref(), today, &config);
        let draft = ReservationDraft::new(config.default_guests);
        Self {
            config,
            clock,
            lookup,
            submitter,
            draft,
            validation: ValidationState::new(),
            available,
            state: BookingState::Editing,
        }
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self.state, BookingState::Confirmed(_))
    }

    pub fn confirmation(&self) -> Option<&ConfirmationRecord> {
        match &self.state {
            BookingState::Confirmed(record) => Some(record),
            BookingState::Editing => None,
        }
    }

    pub fn available_times(&self) -> &AvailableTimes {
        &self.available
    }

    pub fn validation(&self) -> &ValidationState {
        &self.validation
    }

    pub fn visible_error(&self, field: Field) -> Option<&FieldError> {
        self.validation.visible_error(field)
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.validation.is_touched(field)
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.validation.submit_error()
    }

    /// Today's date according to the injected clock
    pub fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    fn context(&self) -> ValidationContext<'_> {
        ValidationContext::new(self.clock.now().naive_local(), self.draft.date, &self.config)
    }

    fn editing(&self) -> bool {
        !self.is_confirmed()
    }

    /// Update a free-text field and clear its error
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        if !self.editing() {
            return;
        }
        match self.draft.text_mut(field) {
            Some(slot) => {
                *slot = value.into();
                self.validation.clear(field);
            }
            None => warn!("set_text called for non-text field {}", field),
        }
    }

    /// Set the party size from raw input; unreadable input becomes zero
    pub fn set_guests(&mut self, raw: &str) {
        if !self.editing() {
            return;
        }
        self.draft.guests = parse_guests(raw);
        self.validation.clear(Field::Guests);
    }

    pub fn increment_guests(&mut self) {
        if !self.editing() {
            return;
        }
        self.draft.guests = GuestCounter::new(self.draft.guests, &self.config).increment().value();
        self.validation.clear(Field::Guests);
    }

    pub fn decrement_guests(&mut self) {
        if !self.editing() {
            return;
        }
        self.draft.guests = GuestCounter::new(self.draft.guests, &self.config).decrement().value();
        self.validation.clear(Field::Guests);
    }

    pub fn select_occasion(&mut self, occasion: Occasion) {
        if !self.editing() {
            return;
        }
        self.draft.occasion = occasion;
    }

    /// Set the reservation date, refresh availability and drop a selected
    /// time the new set no longer offers
    pub fn select_date(&mut self, date: NaiveDate) {
        if !self.editing() {
            return;
        }
        self.draft.date = Some(date);
        self.validation.clear(Field::Date);
        self.available.update(date, self.lookup.as_deref());

        if let Some(time) = self.draft.time.as_deref() {
            if !self.available.contains(time) {
                info!("selected time {} not available on {}, clearing", time, date);
                self.draft.time = None;
                self.validation.clear(Field::Time);
            } else if self.validation.is_touched(Field::Time) {
                let result = validate_field(Field::Time, &self.draft, &self.context());
                self.validation.record(Field::Time, result);
            }
        }
    }

    /// Select a slot from the grid. Slots outside the grid or not currently
    /// available are ignored. Returns whether the selection was taken.
    pub fn select_time(&mut self, time: &str) -> bool {
        if !self.editing() {
            return false;
        }
        let in_grid = time_slot_grid(&self.config).iter().any(|slot| slot == time);
        if !in_grid || !self.available.contains(time) {
            debug!("ignoring selection of unavailable slot {}", time);
            return false;
        }
        self.draft.time = Some(time.to_string());
        self.validation.touch(Field::Time);
        self.validation.clear(Field::Time);
        true
    }

    /// Mark a field as touched and record its current validation result
    pub fn blur(&mut self, field: Field) {
        if !self.editing() {
            return;
        }
        self.validation.touch(field);
        if let Err(e) = validate_field(field, &self.draft, &self.context()) {
            self.validation.record(field, Err(e));
        }
    }

    /// The single validation routine behind both `can_submit` and `submit`
    pub fn validate_all(&self) -> BTreeMap<Field, FieldError> {
        validate_draft(&self.draft, &self.context())
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        self.editing() && self.validate_all().is_empty()
    }

    /// Validate everything and hand the draft to the submitter.
    ///
    /// With no submitter installed the reservation is treated as accepted.
    pub fn submit(&mut self) -> Result<&ConfirmationRecord, SubmissionError> {
        if !self.editing() {
            return Err(SubmissionError::AlreadyConfirmed);
        }
        self.validation.touch_all();
        self.validation.clear_submit_error();

        let errors = self.validate_all();
        if !errors.is_empty() {
            let fields: Vec<Field> = errors.keys().copied().collect();
            debug!("submit blocked by invalid fields: {:?}", fields);
            self.validation.replace_errors(errors);
            return Err(SubmissionError::Invalid(fields));
        }
        self.validation.replace_errors(BTreeMap::new());

        let accepted = match &self.submitter {
            Some(submitter) => submitter.submit(&self.draft),
            None => {
                info!("no submitter installed, accepting reservation locally");
                true
            }
        };
        if !accepted {
            warn!("reservation submission rejected");
            self.validation.set_submit_error(SubmissionError::Rejected.to_string());
            return Err(SubmissionError::Rejected);
        }

        let now = self.clock.now();
        let id = ConfirmationId::from_timestamp_millis(&self.config.confirmation_prefix, now.timestamp_millis());
        info!("reservation confirmed: {}", id);
        self.state = BookingState::Confirmed(ConfirmationRecord {
            id,
            reservation: self.draft.clone(),
            confirmed_at: now,
        });
        match &self.state {
            BookingState::Confirmed(record) => Ok(record),
            BookingState::Editing => Err(SubmissionError::Rejected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use std::cell::{Cell, RefCell};

    struct StaticLookup(Vec<&'static str>);

    impl AvailabilityLookup for StaticLookup {
        fn available_times(&self, _date: NaiveDate) -> Option<Vec<String>> {
            Some(self.0.iter().map(|t| t.to_string()).collect())
        }
    }

    /// Lookup whose answer can be swapped between calls
    struct ScriptedLookup(RefCell<Vec<String>>);

    impl AvailabilityLookup for ScriptedLookup {
        fn available_times(&self, _date: NaiveDate) -> Option<Vec<String>> {
            Some(self.0.borrow().clone())
        }
    }

    struct RecordingSubmitter {
        accept: bool,
        received: RefCell<Vec<ReservationDraft>>,
    }

    impl RecordingSubmitter {
        fn new(accept: bool) -> Rc<Self> {
            Rc::new(Self {
                accept,
                received: RefCell::new(Vec::new()),
            })
        }
    }

    impl ReservationSubmitter for RecordingSubmitter {
        fn submit(&self, draft: &ReservationDraft) -> bool {
            self.received.borrow_mut().push(draft.clone());
            self.accept
        }
    }

    struct CountingSubmitter(Cell<u32>);

    impl ReservationSubmitter for CountingSubmitter {
        fn submit(&self, _draft: &ReservationDraft) -> bool {
            self.0.set(self.0.get() + 1);
            true
        }
    }

    const NOW: &str = "2026-10-14T22:00:00+00:00";

    fn clock(rfc3339: &str) -> Rc<dyn Clock> {
        Rc::new(FixedClock::parse(rfc3339).unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn form_with(
        lookup: Option<Rc<dyn AvailabilityLookup>>,
        submitter: Option<Rc<dyn ReservationSubmitter>>,
    ) -> BookingForm {
        BookingForm::new(BookingConfig::default(), clock(NOW), lookup, submitter)
    }

    fn fill_contact(form: &mut BookingForm) {
        form.set_text(Field::FirstName, "John");
        form.set_text(Field::LastName, "Doe");
        form.set_text(Field::Email, "john.doe@example.com");
        form.set_text(Field::Phone, "(555) 123-4567");
    }

    #[test]
    fn test_initial_state() {
        let form = form_with(None, None);
        assert_eq!(*form.state(), BookingState::Editing);
        assert_eq!(form.draft().guests, 2);
        assert_eq!(form.draft().occasion, Occasion::Birthday);
        assert_eq!(form.available_times().len(), 6);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_blur_shows_field_error_and_edit_clears_it() {
        let mut form = form_with(None, None);
        form.blur(Field::FirstName);
        assert_eq!(form.visible_error(Field::FirstName), Some(&FieldError::FirstNameRequired));

        form.set_text(Field::FirstName, "J");
        assert_eq!(form.visible_error(Field::FirstName), None);

        form.blur(Field::FirstName);
        assert_eq!(form.visible_error(Field::FirstName), Some(&FieldError::FirstNameTooShort));

        form.set_text(Field::FirstName, "Jo");
        form.blur(Field::FirstName);
        assert_eq!(form.visible_error(Field::FirstName), None);
        assert!(form.is_touched(Field::FirstName));
    }

    #[test]
    fn test_guest_errors_on_blur() {
        let mut form = form_with(None, None);
        form.set_guests("11");
        form.blur(Field::Guests);
        assert_eq!(
            form.visible_error(Field::Guests).map(|e| e.to_string()),
            Some("Maximum 10 guests per reservation".to_string())
        );

        form.set_guests("0");
        form.blur(Field::Guests);
        assert!(form
            .visible_error(Field::Guests)
            .map(|e| e.to_string())
            .unwrap()
            .contains("must be at least 1"));
    }

    #[test]
    fn test_guest_counter_steps_are_clamped() {
        let mut form = form_with(None, None);
        for _ in 0..20 {
            form.increment_guests();
        }
        assert_eq!(form.draft().guests, 10);
        for _ in 0..20 {
            form.decrement_guests();
        }
        assert_eq!(form.draft().guests, 1);
    }

    #[test]
    fn test_date_change_clears_unavailable_time() {
        let lookup = Rc::new(ScriptedLookup(RefCell::new(vec!["18:00".into(), "19:00".into()])));
        let mut form = form_with(Some(lookup.clone()), None);

        form.select_date(date(2026, 10, 20));
        assert!(form.select_time("19:00"));
        assert_eq!(form.draft().time.as_deref(), Some("19:00"));

        *lookup.0.borrow_mut() = vec!["17:00".into(), "18:00".into()];
        form.select_date(date(2026, 10, 21));
        assert_eq!(form.available_times().as_slice(), &["17:00".to_string(), "18:00".to_string()]);
        assert_eq!(form.draft().time, None);
    }

    #[test]
    fn test_date_change_to_fully_booked_day_clears_time() {
        let lookup = Rc::new(ScriptedLookup(RefCell::new(vec!["19:00".into()])));
        let mut form = form_with(Some(lookup.clone()), None);

        form.select_date(date(2026, 10, 20));
        assert!(form.select_time("19:00"));
        form.blur(Field::Time);

        lookup.0.borrow_mut().clear();
        form.select_date(date(2026, 10, 21));
        assert!(form.available_times().is_empty());
        assert_eq!(form.draft().time, None);
        // The cleared time is reported again only on the next blur or submit
        assert_eq!(form.visible_error(Field::Time), None);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_date_change_keeps_time_still_offered() {
        let lookup: Rc<dyn AvailabilityLookup> = Rc::new(StaticLookup(vec!["17:00", "19:00"]));
        let mut form = form_with(Some(lookup), None);
        form.select_date(date(2026, 10, 20));
        assert!(form.select_time("19:00"));
        form.select_date(date(2026, 10, 22));
        assert_eq!(form.draft().time.as_deref(), Some("19:00"));
    }

    #[test]
    fn test_date_change_revalidates_touched_time() {
        // 22:00 "now": 21:00 is fine tomorrow but in the past today
        let lookup: Rc<dyn AvailabilityLookup> = Rc::new(StaticLookup(vec!["21:00"]));
        let mut form = form_with(Some(lookup), None);
        form.select_date(date(2026, 10, 15));
        assert!(form.select_time("21:00"));
        assert_eq!(form.visible_error(Field::Time), None);

        form.select_date(date(2026, 10, 14));
        assert_eq!(form.visible_error(Field::Time), Some(&FieldError::TimeInPast));

        form.select_date(date(2026, 10, 16));
        assert_eq!(form.visible_error(Field::Time), None);
    }

    #[test]
    fn test_unavailable_slot_selection_is_noop() {
        let lookup: Rc<dyn AvailabilityLookup> = Rc::new(StaticLookup(vec!["17:00"]));
        let mut form = form_with(Some(lookup), None);
        form.select_date(date(2026, 10, 20));

        assert!(!form.select_time("17:30"));
        assert!(!form.select_time("23:00"));
        assert_eq!(form.draft().time, None);
        assert!(!form.is_touched(Field::Time));
    }

    #[test]
    fn test_time_today_must_be_in_future() {
        // Fallback list includes 21:00; now is 22:00 on the same day
        let mut form = form_with(None, None);
        fill_contact(&mut form);
        form.select_date(date(2026, 10, 14));
        assert!(form.select_time("21:00"));

        assert!(!form.can_submit());
        let err = form.submit().unwrap_err();
        assert_eq!(err, SubmissionError::Invalid(vec![Field::Time]));
        assert_eq!(
            form.visible_error(Field::Time).map(|e| e.to_string()),
            Some("Please select a future time".to_string())
        );
        assert!(!form.is_confirmed());
    }

    #[test]
    fn test_submit_marks_everything_touched() {
        let mut form = form_with(None, None);
        let err = form.submit().unwrap_err();

        match err {
            SubmissionError::Invalid(fields) => {
                assert!(fields.contains(&Field::FirstName));
                assert!(fields.contains(&Field::Date));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        for field in Field::ALL {
            assert!(form.is_touched(field));
        }
        assert_eq!(form.visible_error(Field::Email), Some(&FieldError::EmailRequired));
        assert_eq!(form.submit_error(), None);
    }

    #[test]
    fn test_successful_submission_confirms() {
        let submitter = RecordingSubmitter::new(true);
        let mut form = form_with(None, Some(submitter.clone()));
        fill_contact(&mut form);
        form.select_date(date(2026, 10, 15));
        assert!(form.select_time("19:00"));
        form.select_occasion(Occasion::Anniversary);
        form.set_text(Field::SpecialRequests, "Window seat");

        assert!(form.can_submit());
        let record = form.submit().unwrap().clone();

        let expected_millis = FixedClock::parse(NOW).unwrap().now().timestamp_millis();
        assert!(record.id.as_str().starts_with("LL"));
        assert_eq!(record.id, ConfirmationId::from_timestamp_millis("LL", expected_millis));
        assert_eq!(record.reservation.first_name, "John");
        assert_eq!(record.reservation.occasion, Occasion::Anniversary);
        assert_eq!(record.reservation.special_requests, "Window seat");

        let received = submitter.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0], record.reservation);
        assert_eq!(form.confirmation(), Some(&record));
    }

    #[test]
    fn test_confirmed_form_is_read_only() {
        let submitter = Rc::new(CountingSubmitter(Cell::new(0)));
        let mut form = form_with(None, Some(submitter.clone()));
        fill_contact(&mut form);
        form.select_date(date(2026, 10, 15));
        form.select_time("18:00");
        form.submit().unwrap();

        form.set_text(Field::FirstName, "Changed");
        form.select_date(date(2026, 10, 30));
        form.increment_guests();
        assert_eq!(form.draft().first_name, "John");
        assert_eq!(form.draft().date, Some(date(2026, 10, 15)));
        assert_eq!(form.draft().guests, 2);
        assert!(!form.can_submit());
        assert_eq!(form.submit().unwrap_err(), SubmissionError::AlreadyConfirmed);
        assert_eq!(submitter.0.get(), 1);
    }

    #[test]
    fn test_rejected_submission_stays_editing() {
        let submitter = RecordingSubmitter::new(false);
        let mut form = form_with(None, Some(submitter.clone()));
        fill_contact(&mut form);
        form.select_date(date(2026, 10, 15));
        form.select_time("20:00");

        assert_eq!(form.submit().unwrap_err(), SubmissionError::Rejected);
        assert_eq!(*form.state(), BookingState::Editing);
        assert_eq!(
            form.submit_error(),
            Some("Failed to submit reservation. Please try again.")
        );
        assert_eq!(submitter.received.borrow().len(), 1);

        // Still editable; a retry runs the submitter again
        form.set_text(Field::FirstName, "Johnny");
        assert_eq!(form.draft().first_name, "Johnny");
        assert_eq!(form.submit().unwrap_err(), SubmissionError::Rejected);
        assert_eq!(submitter.received.borrow().len(), 2);
    }

    #[test]
    fn test_can_submit_agrees_with_submit() {
        // Walk through a sequence of edits and check the enabled state
        // predicts the submit outcome at every step
        let steps: Vec<Box<dyn Fn(&mut BookingForm)>> = vec![
            Box::new(|f| f.set_text(Field::FirstName, "John")),
            Box::new(|f| f.set_text(Field::LastName, "Doe")),
            Box::new(|f| f.set_text(Field::Email, "john@example.com")),
            Box::new(|f| f.set_text(Field::Phone, "555 123 4567")),
            Box::new(|f| f.select_date(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap())),
            Box::new(|f| {
                f.select_time("21:00");
            }),
            Box::new(|f| f.select_date(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())),
            Box::new(|f| {
                f.select_time("17:00");
            }),
            Box::new(|f| f.set_guests("12")),
            Box::new(|f| f.set_guests("3")),
        ];

        for prefix in 0..=steps.len() {
            let mut form = form_with(None, Some(RecordingSubmitter::new(true)));
            for step in &steps[..prefix] {
                step(&mut form);
            }
            let enabled = form.can_submit();
            let outcome = form.submit();
            assert_eq!(enabled, outcome.is_ok(), "disagreement after {} steps", prefix);
        }
    }
}

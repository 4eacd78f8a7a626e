use chrono::NaiveDate;
use shared::selectors::{grid_rows, DateWindow};
use shared::{
    BookingConfig, BookingForm, ConfirmationRecord, Field, Occasion, ReservationDraft, SubmissionError,
    SystemClock, TimeSlot,
};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

use crate::services::api::BookingServices;

/// Render snapshot of the booking form controller
#[derive(Clone, PartialEq)]
pub struct BookingFormState {
    pub draft: ReservationDraft,
    pub config: BookingConfig,
    pub today: NaiveDate,
    pub date_window: DateWindow,
    pub time_slots: Vec<TimeSlot>,
    /// Errors of touched fields, as display messages
    pub errors: BTreeMap<Field, String>,
    pub submit_error: Option<String>,
    pub can_submit: bool,
    pub confirmation: Option<ConfirmationRecord>,
}

impl BookingFormState {
    pub(crate) fn from_form(form: &BookingForm) -> Self {
        let draft = form.draft().clone();
        let errors = Field::ALL
            .iter()
            .filter_map(|&field| form.visible_error(field).map(|e| (field, e.to_string())))
            .collect();
        let today = form.today();
        Self {
            time_slots: grid_rows(form.config(), form.available_times(), draft.time.as_deref()),
            date_window: DateWindow::from_config(today, form.config()),
            draft,
            config: form.config().clone(),
            today,
            errors,
            submit_error: form.submit_error().map(str::to_string),
            can_submit: form.can_submit(),
            confirmation: form.confirmation().cloned(),
        }
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

#[derive(Clone, PartialEq)]
pub struct UseBookingFormActions {
    pub set_text: Callback<(Field, String)>,
    pub blur: Callback<Field>,
    pub select_date: Callback<NaiveDate>,
    pub select_time: Callback<String>,
    pub increment_guests: Callback<()>,
    pub decrement_guests: Callback<()>,
    pub select_occasion: Callback<Occasion>,
    pub submit: Callback<()>,
}

pub struct UseBookingFormResult {
    pub state: BookingFormState,
    pub actions: UseBookingFormActions,
}

/// One controller per mounted booking page; state is gone on reload
#[hook]
pub fn use_booking_form(services: &BookingServices) -> UseBookingFormResult {
    let form = {
        let services = services.clone();
        use_mut_ref(move || {
            BookingForm::new(
                services.config,
                Rc::new(SystemClock),
                services.lookup,
                services.submitter,
            )
        })
    };
    let update = use_force_update();

    let set_text = {
        let form = form.clone();
        let update = update.clone();
        use_callback((), move |(field, value): (Field, String), _| {
            form.borrow_mut().set_text(field, value);
            update.force_update();
        })
    };

    let blur = {
        let form = form.clone();
        let update = update.clone();
        use_callback((), move |field: Field, _| {
            form.borrow_mut().blur(field);
            update.force_update();
        })
    };

    let select_date = {
        let form = form.clone();
        let update = update.clone();
        use_callback((), move |date: NaiveDate, _| {
            log::debug!(target: "booking_form", "date selected: {}", date);
            form.borrow_mut().select_date(date);
            update.force_update();
        })
    };

    let select_time = {
        let form = form.clone();
        let update = update.clone();
        use_callback((), move |time: String, _| {
            if form.borrow_mut().select_time(&time) {
                update.force_update();
            }
        })
    };

    let increment_guests = {
        let form = form.clone();
        let update = update.clone();
        use_callback((), move |_: (), _| {
            form.borrow_mut().increment_guests();
            update.force_update();
        })
    };

    let decrement_guests = {
        let form = form.clone();
        let update = update.clone();
        use_callback((), move |_: (), _| {
            form.borrow_mut().decrement_guests();
            update.force_update();
        })
    };

    let select_occasion = {
        let form = form.clone();
        let update = update.clone();
        use_callback((), move |occasion: Occasion, _| {
            form.borrow_mut().select_occasion(occasion);
            update.force_update();
        })
    };

    let submit = {
        let form = form.clone();
        let update = update.clone();
        use_callback((), move |_: (), _| {
            let result = form.borrow_mut().submit().map(|record| record.id.clone());
            match result {
                Ok(id) => log::info!(target: "booking_form", "confirmed {}", id),
                Err(SubmissionError::Invalid(fields)) => {
                    log::debug!(target: "booking_form", "invalid fields: {:?}", fields);
                    focus_first_error(&fields);
                }
                Err(e) => log::warn!(target: "booking_form", "submit failed: {}", e),
            }
            update.force_update();
        })
    };

    let state = BookingFormState::from_form(&form.borrow());

    let actions = UseBookingFormActions {
        set_text,
        blur,
        select_date,
        select_time,
        increment_guests,
        decrement_guests,
        select_occasion,
        submit,
    };

    UseBookingFormResult { state, actions }
}

/// Fields in the order the booking form renders them
const FORM_ORDER: [Field; 9] = [
    Field::Date,
    Field::Time,
    Field::Guests,
    Field::Occasion,
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Phone,
    Field::SpecialRequests,
];

/// The invalid field that appears first on screen
pub(crate) fn first_in_form_order(fields: &[Field]) -> Option<Field> {
    FORM_ORDER.into_iter().find(|field| fields.contains(field))
}

/// CSS selector of the element that takes focus for `field`. The time grid
/// and the guest counter have no single input, so an enabled button is used.
pub(crate) fn focus_selector(field: Field) -> String {
    match field {
        Field::Date => "#date".to_string(),
        Field::Time => "#time .time-slot:not([disabled])".to_string(),
        Field::Guests => "#guests .counter-button:not([disabled])".to_string(),
        _ => format!("[name=\"{}\"]", field.name()),
    }
}

/// Move keyboard focus to the first field on screen that failed validation
pub(crate) fn focus_first_error(fields: &[Field]) {
    use wasm_bindgen::JsCast;

    let Some(field) = first_in_form_order(fields) else {
        return;
    };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match document.query_selector(&focus_selector(field)) {
        Ok(Some(element)) => {
            if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
                let _ = element.focus();
            }
        }
        _ => log::debug!(target: "booking_form", "no focus target for {}", field),
    }
}

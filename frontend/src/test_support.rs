//! Mounting and fixture helpers shared by the browser tests.

use chrono::NaiveDate;
use shared::{AvailabilityLookup, BookingConfig, BookingForm, Field, FixedClock};
use std::rc::Rc;
use std::time::Duration;
use web_sys::Element;
use yew::{AppHandle, BaseComponent, Callback};

use crate::hooks::use_booking_form::UseBookingFormActions;

pub const NOW: &str = "2026-10-14T10:00:00+00:00";

/// Same slots for every date
pub struct FixedTimes(pub Vec<&'static str>);

impl AvailabilityLookup for FixedTimes {
    fn available_times(&self, _date: NaiveDate) -> Option<Vec<String>> {
        Some(self.0.iter().map(|t| t.to_string()).collect())
    }
}

pub fn booking_form(times: &[&'static str]) -> BookingForm {
    BookingForm::new(
        BookingConfig::default(),
        Rc::new(FixedClock::parse(NOW).unwrap()),
        Some(Rc::new(FixedTimes(times.to_vec()))),
        None,
    )
}

/// A form that passes validation, reserved for 19:00 on 2026-10-20
pub fn complete_form() -> BookingForm {
    let mut form = booking_form(&["17:00", "19:00"]);
    form.select_date(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
    assert!(form.select_time("19:00"));
    form.set_text(Field::FirstName, "John");
    form.set_text(Field::LastName, "Doe");
    form.set_text(Field::Email, "john.doe@example.com");
    form.set_text(Field::Phone, "(312) 555-0123");
    form
}

pub fn noop_actions() -> UseBookingFormActions {
    UseBookingFormActions {
        set_text: Callback::noop(),
        blur: Callback::noop(),
        select_date: Callback::noop(),
        select_time: Callback::noop(),
        increment_guests: Callback::noop(),
        decrement_guests: Callback::noop(),
        select_occasion: Callback::noop(),
        submit: Callback::noop(),
    }
}

pub struct Mounted<C: BaseComponent> {
    handle: AppHandle<C>,
    pub root: Element,
}

impl<C: BaseComponent> Mounted<C> {
    pub fn find(&self, selector: &str) -> Element {
        self.root
            .query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("nothing matches {selector}"))
    }

    pub fn count(&self, selector: &str) -> u32 {
        self.root.query_selector_all(selector).unwrap().length()
    }

    pub fn unmount(self) {
        self.handle.destroy();
        self.root.remove();
    }
}

/// Render `C` into a fresh element attached to the document body and wait
/// for the first render to land
pub async fn mount<C: BaseComponent>(props: C::Properties) -> Mounted<C> {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    let handle = yew::Renderer::<C>::with_root_and_props(root.clone(), props).render();
    yew::platform::time::sleep(Duration::from_millis(10)).await;
    Mounted { handle, root }
}

pub fn is_disabled(element: &Element) -> bool {
    element.has_attribute("disabled")
}

use chrono::NaiveDate;
use js_sys::{Array, Function, Reflect, JSON};
use shared::{AvailabilityLookup, BookingConfig, ReservationDraft, ReservationSubmitter};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};

const FETCH_HOOK: &str = "fetchAPI";
const SUBMIT_HOOK: &str = "submitAPI";

/// Look up a function installed on `window` by the hosting page
fn window_function(name: &str) -> Option<Function> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn js_error_text(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Adapter for the availability and submission functions a hosting page may
/// install as `window.fetchAPI(date)` and `window.submitAPI(formData)`.
///
/// The functions are looked up on every call, so a script that installs them
/// after the app has started is still picked up.
#[derive(Clone, Copy, Default)]
pub struct WindowApi;

impl WindowApi {
    pub fn new() -> Self {
        Self
    }

    fn draft_to_js(draft: &ReservationDraft) -> Result<JsValue, String> {
        let json = serde_json::to_string(draft).map_err(|e| format!("Failed to serialize reservation: {}", e))?;
        JSON::parse(&json).map_err(|e| format!("Failed to build reservation object: {}", js_error_text(&e)))
    }
}

impl AvailabilityLookup for WindowApi {
    fn available_times(&self, date: NaiveDate) -> Option<Vec<String>> {
        let fetch = window_function(FETCH_HOOK)?;
        let arg = JsValue::from_str(&date.format("%Y-%m-%d").to_string());
        match fetch.call1(&JsValue::NULL, &arg) {
            Ok(value) if Array::is_array(&value) => Some(
                Array::from(&value)
                    .iter()
                    .filter_map(|item| item.as_string())
                    .collect(),
            ),
            Ok(_) => {
                log::warn!(target: "api", "{} did not return an array for {}", FETCH_HOOK, date);
                None
            }
            Err(e) => {
                log::error!(target: "api", "{} failed for {}: {}", FETCH_HOOK, date, js_error_text(&e));
                None
            }
        }
    }
}

impl ReservationSubmitter for WindowApi {
    fn submit(&self, draft: &ReservationDraft) -> bool {
        let Some(submit) = window_function(SUBMIT_HOOK) else {
            log::info!(
                target: "api",
                "Form submitted: {}",
                serde_json::to_string(draft).unwrap_or_default()
            );
            return true;
        };
        let payload = match Self::draft_to_js(draft) {
            Ok(payload) => payload,
            Err(e) => {
                log::error!(target: "api", "{}", e);
                return false;
            }
        };
        match submit.call1(&JsValue::NULL, &payload) {
            Ok(result) => result.is_truthy(),
            Err(e) => {
                log::error!(target: "api", "{} failed: {}", SUBMIT_HOOK, js_error_text(&e));
                false
            }
        }
    }
}

/// Availability that prefers the page's `fetchAPI` hook and falls back to
/// the built-in seeded schedule when the hook is missing
#[cfg(feature = "demo-api")]
#[derive(Clone, Copy, Default)]
pub struct DemoAvailability;

#[cfg(feature = "demo-api")]
impl AvailabilityLookup for DemoAvailability {
    fn available_times(&self, date: NaiveDate) -> Option<Vec<String>> {
        WindowApi.available_times(date).or_else(|| shared::SeededAvailability.available_times(date))
    }
}

/// Collaborators injected into the booking form, provided through context
#[derive(Clone)]
pub struct BookingServices {
    pub config: BookingConfig,
    pub lookup: Option<Rc<dyn AvailabilityLookup>>,
    pub submitter: Option<Rc<dyn ReservationSubmitter>>,
}

impl BookingServices {
    /// Services backed by the page's window hooks
    pub fn from_window() -> Self {
        #[cfg(feature = "demo-api")]
        let lookup: Rc<dyn AvailabilityLookup> = Rc::new(DemoAvailability);
        #[cfg(not(feature = "demo-api"))]
        let lookup: Rc<dyn AvailabilityLookup> = Rc::new(WindowApi::new());

        Self {
            config: BookingConfig::default(),
            lookup: Some(lookup),
            submitter: Some(Rc::new(WindowApi::new())),
        }
    }
}

fn same_rc<T: ?Sized>(a: &Option<Rc<T>>, b: &Option<Rc<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

impl PartialEq for BookingServices {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && same_rc(&self.lookup, &other.lookup)
            && same_rc(&self.submitter, &other.submitter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn install(name: &str, args: &str, body: &str) {
        let window = web_sys::window().unwrap();
        let function = Function::new_with_args(args, body);
        Reflect::set(&window, &JsValue::from_str(name), &function).unwrap();
    }

    fn uninstall(name: &str) {
        let window = web_sys::window().unwrap();
        Reflect::delete_property(&window, &JsValue::from_str(name)).unwrap();
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_missing_fetch_hook_is_unavailable() {
        uninstall(FETCH_HOOK);
        assert_eq!(WindowApi::new().available_times(date()), None);
    }

    #[wasm_bindgen_test]
    fn test_fetch_hook_receives_iso_date() {
        install(FETCH_HOOK, "date", "return date === '2026-10-20' ? ['17:00', '18:30'] : [];");
        let times = WindowApi::new().available_times(date());
        uninstall(FETCH_HOOK);
        assert_eq!(times, Some(vec!["17:00".to_string(), "18:30".to_string()]));
    }

    #[wasm_bindgen_test]
    fn test_fetch_hook_non_array_is_unavailable() {
        install(FETCH_HOOK, "date", "return 'nope';");
        let times = WindowApi::new().available_times(date());
        uninstall(FETCH_HOOK);
        assert_eq!(times, None);
    }

    #[wasm_bindgen_test]
    fn test_missing_submit_hook_accepts() {
        uninstall(SUBMIT_HOOK);
        assert!(WindowApi::new().submit(&ReservationDraft::new(2)));
    }

    #[wasm_bindgen_test]
    fn test_submit_hook_result_is_used() {
        install(SUBMIT_HOOK, "data", "return data.guests === 4;");
        let api = WindowApi::new();
        let accepted = api.submit(&ReservationDraft::new(4));
        let rejected = api.submit(&ReservationDraft::new(2));
        uninstall(SUBMIT_HOOK);
        assert!(accepted);
        assert!(!rejected);
    }

    #[wasm_bindgen_test]
    fn test_throwing_submit_hook_rejects() {
        install(SUBMIT_HOOK, "data", "throw new Error('offline');");
        let accepted = WindowApi::new().submit(&ReservationDraft::new(2));
        uninstall(SUBMIT_HOOK);
        assert!(!accepted);
    }
}

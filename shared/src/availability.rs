use crate::config::BookingConfig;
use chrono::{Datelike, NaiveDate};
use log::{debug, warn};

/// External source of bookable times for a date.
///
/// Returns `None` when the lookup is not installed (for example when the
/// page has no `fetchAPI` hook), which is different from returning an empty
/// list for a fully booked day.
pub trait AvailabilityLookup {
    fn available_times(&self, date: NaiveDate) -> Option<Vec<String>>;
}

/// Bookable "HH:MM" times for the currently selected date, in lookup order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AvailableTimes {
    times: Vec<String>,
}

impl AvailableTimes {
    pub fn new(times: Vec<String>) -> Self {
        Self { times }
    }

    /// Times for today's date, or the configured fallback list when no lookup answers
    pub fn initialize(
        lookup: Option<&dyn AvailabilityLookup>,
        today: NaiveDate,
        config: &BookingConfig,
    ) -> Self {
        match lookup.and_then(|l| l.available_times(today)) {
            Some(times) => {
                debug!("initial availability for {}: {:?}", today, times);
                Self { times }
            }
            None => {
                debug!("no availability lookup, using fallback times");
                Self {
                    times: config.fallback_times.clone(),
                }
            }
        }
    }

    /// Replace the set with the lookup result for `date`. Without a lookup the
    /// current set is kept. Returns whether the set changed.
    pub fn update(&mut self, date: NaiveDate, lookup: Option<&dyn AvailabilityLookup>) -> bool {
        match lookup.and_then(|l| l.available_times(date)) {
            Some(times) => {
                debug!("availability for {}: {:?}", date, times);
                let changed = times != self.times;
                self.times = times;
                changed
            }
            None => {
                warn!("availability lookup unavailable for {}, keeping previous times", date);
                false
            }
        }
    }

    pub fn contains(&self, time: &str) -> bool {
        self.times.iter().any(|t| t == time)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.times
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }
}

/// Deterministic stand-in for the restaurant's availability service.
///
/// Seeds a multiplicative congruential generator with the day of the month
/// and keeps each half-hour slot from 17:00 to 23:30 when its draw is below
/// one half, so the same calendar day always yields the same list.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeededAvailability;

const MODULUS: u64 = (1 << 35) - 31;
const MULTIPLIER: u64 = 185_852;

struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    fn new(seed: u64) -> Self {
        Self { state: seed % MODULUS }
    }

    fn next_f64(&mut self) -> f64 {
        self.state = self.state * MULTIPLIER % MODULUS;
        self.state as f64 / MODULUS as f64
    }
}

impl SeededAvailability {
    pub fn times_for(date: NaiveDate) -> Vec<String> {
        let mut random = SeededRandom::new(u64::from(date.day()));
        let mut result = Vec::new();
        for hour in 17..=23 {
            if random.next_f64() < 0.5 {
                result.push(format!("{}:00", hour));
            }
            if random.next_f64() < 0.5 {
                result.push(format!("{}:30", hour));
            }
        }
        result
    }
}

impl AvailabilityLookup for SeededAvailability {
    fn available_times(&self, date: NaiveDate) -> Option<Vec<String>> {
        Some(Self::times_for(date))
    }
}

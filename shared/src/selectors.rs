//! Models behind the booking form's pickers: the rolling date window, the
//! fixed time-slot grid and the bounded guest counter.

use crate::availability::AvailableTimes;
use crate::config::BookingConfig;
use chrono::{Duration, NaiveDate, NaiveTime};

/// Rolling window of bookable days starting today
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    days: u32,
}

impl DateWindow {
    pub fn starting(today: NaiveDate, days: u32) -> Self {
        Self { start: today, days }
    }

    pub fn from_config(today: NaiveDate, config: &BookingConfig) -> Self {
        Self::starting(today, config.booking_window_days)
    }

    pub fn first(&self) -> NaiveDate {
        self.start
    }

    pub fn last(&self) -> NaiveDate {
        self.start + Duration::days(i64::from(self.days.saturating_sub(1)))
    }

    /// Every day of the window, in order
    pub fn days(&self) -> Vec<NaiveDate> {
        (0..self.days)
            .map(|offset| self.start + Duration::days(i64::from(offset)))
            .collect()
    }

    /// Days before today, or beyond the window, cannot be picked
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        self.days > 0 && date >= self.start && date <= self.last()
    }
}

/// The fixed half-hour slots shown in the grid, independent of availability
pub fn time_slot_grid(config: &BookingConfig) -> Vec<String> {
    let step = Duration::minutes(i64::from(config.slot_step_minutes.max(1)));
    let mut slots = Vec::new();
    let mut current: NaiveTime = config.first_slot;
    while current <= config.last_slot {
        slots.push(current.format("%H:%M").to_string());
        let (next, wrapped) = current.overflowing_add_signed(step);
        if wrapped != 0 {
            break;
        }
        current = next;
    }
    slots
}

/// One rendered cell of the time grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub time: String,
    pub available: bool,
    pub selected: bool,
}

/// Grid cells marked against the availability set and the current selection
pub fn grid_rows(config: &BookingConfig, available: &AvailableTimes, selected: Option<&str>) -> Vec<TimeSlot> {
    time_slot_grid(config)
        .into_iter()
        .map(|time| TimeSlot {
            available: available.contains(&time),
            selected: selected == Some(time.as_str()),
            time,
        })
        .collect()
}

/// Party size stepper clamped to `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestCounter {
    value: u32,
    min: u32,
    max: u32,
}

impl GuestCounter {
    pub fn new(value: u32, config: &BookingConfig) -> Self {
        Self {
            value: value.clamp(config.min_guests, config.max_guests),
            min: config.min_guests,
            max: config.max_guests,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn can_increment(&self) -> bool {
        self.value < self.max
    }

    pub fn can_decrement(&self) -> bool {
        self.value > self.min
    }

    pub fn increment(self) -> Self {
        Self {
            value: (self.value + 1).min(self.max),
            ..self
        }
    }

    pub fn decrement(self) -> Self {
        Self {
            value: self.value.saturating_sub(1).max(self.min),
            ..self
        }
    }
}

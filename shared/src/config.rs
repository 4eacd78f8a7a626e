use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunable booking rules. The frontend runs with [`BookingConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Smallest party size accepted
    pub min_guests: u32,
    /// Largest party size accepted
    pub max_guests: u32,
    /// Party size a fresh form starts with
    pub default_guests: u32,
    /// Number of days (starting today) offered by the date picker
    pub booking_window_days: u32,
    /// First slot shown in the time grid
    pub first_slot: NaiveTime,
    /// Last slot shown in the time grid (inclusive)
    pub last_slot: NaiveTime,
    pub slot_step_minutes: u32,
    /// Times used on first load when no availability lookup is installed
    pub fallback_times: Vec<String>,
    pub confirmation_prefix: String,
    /// Length of the calendar event created for a confirmed reservation
    pub reservation_length_minutes: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            min_guests: 1,
            max_guests: 10,
            default_guests: 2,
            booking_window_days: 30,
            first_slot: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or(NaiveTime::MIN),
            last_slot: NaiveTime::from_hms_opt(21, 30, 0).unwrap_or(NaiveTime::MIN),
            slot_step_minutes: 30,
            fallback_times: ["17:00", "18:00", "19:00", "20:00", "21:00", "22:00"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            confirmation_prefix: "LL".to_string(),
            reservation_length_minutes: 120,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("min_guests ({min}) must be at least 1 and not exceed max_guests ({max})")]
    GuestBounds { min: u32, max: u32 },
    #[error("default_guests ({0}) is outside the guest bounds")]
    DefaultGuests(u32),
    #[error("booking window must cover at least one day")]
    EmptyWindow,
    #[error("slot step must be a positive number of minutes")]
    ZeroSlotStep,
    #[error("first slot {first} is after last slot {last}")]
    SlotOrder { first: NaiveTime, last: NaiveTime },
}

impl BookingConfig {
    /// Check the invariants the form controller relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_guests == 0 || self.min_guests > self.max_guests {
            return Err(ConfigError::GuestBounds {
                min: self.min_guests,
                max: self.max_guests,
            });
        }
        if !(self.min_guests..=self.max_guests).contains(&self.default_guests) {
            return Err(ConfigError::DefaultGuests(self.default_guests));
        }
        if self.booking_window_days == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        if self.slot_step_minutes == 0 {
            return Err(ConfigError::ZeroSlotStep);
        }
        if self.first_slot > self.last_slot {
            return Err(ConfigError::SlotOrder {
                first: self.first_slot,
                last: self.last_slot,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BookingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fallback_times.len(), 6);
        assert_eq!(config.fallback_times[0], "17:00");
        assert_eq!(config.fallback_times[5], "22:00");
    }

    #[test]
    fn test_invalid_guest_bounds() {
        let config = BookingConfig {
            min_guests: 5,
            max_guests: 2,
            ..BookingConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::GuestBounds { min: 5, max: 2 })
        );

        let config = BookingConfig {
            default_guests: 11,
            ..BookingConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::DefaultGuests(11)));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: BookingConfig =
            serde_json::from_str(r#"{"max_guests": 8, "confirmation_prefix": "XY"}"#).unwrap();
        assert_eq!(config.max_guests, 8);
        assert_eq!(config.confirmation_prefix, "XY");
        assert_eq!(config.min_guests, 1);
        assert_eq!(config.booking_window_days, 30);
    }
}

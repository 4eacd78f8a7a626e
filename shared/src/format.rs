use crate::validation::parse_slot;
use chrono::NaiveDate;

/// "Wednesday, October 14, 2026"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Text on the date picker trigger
pub fn date_picker_label(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => long_date(date),
        None => "Select a date".to_string(),
    }
}

/// "October 14, 2026", used in accessible labels
pub fn medium_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Day-of-month and short weekday shown in a date picker cell
pub fn day_cell(date: NaiveDate) -> (String, String) {
    (date.format("%-d").to_string(), date.format("%a").to_string())
}

/// "17:30" -> "5:30 PM"; unreadable input is returned as is
pub fn slot_label(time: &str) -> String {
    match parse_slot(time) {
        Some(t) => t.format("%-I:%M %p").to_string(),
        None => time.to_string(),
    }
}

pub fn party_size(guests: u32) -> String {
    if guests == 1 {
        "1 guest".to_string()
    } else {
        format!("{} guests", guests)
    }
}

/// "Guest" / "Guests" under the counter value
pub fn guest_noun(guests: u32) -> &'static str {
    if guests == 1 {
        "Guest"
    } else {
        "Guests"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 4).unwrap();
        assert_eq!(long_date(date), "Sunday, October 4, 2026");
        assert_eq!(medium_date(date), "October 4, 2026");
        assert_eq!(day_cell(date), ("4".to_string(), "Sun".to_string()));
        assert_eq!(date_picker_label(None), "Select a date");
    }

    #[test]
    fn test_slot_label() {
        assert_eq!(slot_label("17:30"), "5:30 PM");
        assert_eq!(slot_label("21:00"), "9:00 PM");
        assert_eq!(slot_label("dinner"), "dinner");
    }

    #[test]
    fn test_party_size() {
        assert_eq!(party_size(1), "1 guest");
        assert_eq!(party_size(4), "4 guests");
        assert_eq!(guest_noun(1), "Guest");
        assert_eq!(guest_noun(2), "Guests");
    }
}

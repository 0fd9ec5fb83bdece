//! Classification of due dates, relative to the current day
//!
//! The current day is always given by the caller, so that a whole list is classified against the same day.

use chrono::{Datelike, Duration, NaiveDate};
use csscolorparser::Color;


/// A human-friendly label for a due date: `Today`, `Tomorrow`, `Jan 5`, or `Jan 5, 2025` for dates in another year
pub fn label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "Today".to_string();
    }
    if Some(date) == today.checked_add_signed(Duration::days(1)) {
        return "Tomorrow".to_string();
    }

    if date.year() == today.year() {
        date.format("%b %-d").to_string()
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}


/// How close a due date is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UrgencyBand {
    /// The due date has passed
    Overdue,
    DueToday,
    /// Due in one or two days
    DueSoon,
    Normal,
}

impl UrgencyBand {
    pub fn classify(date: NaiveDate, today: NaiveDate) -> Self {
        // Both are whole days, so the difference needs no rounding
        let days_diff = date.signed_duration_since(today).num_days();
        match days_diff {
            d if d < 0 => UrgencyBand::Overdue,
            0 => UrgencyBand::DueToday,
            1..=2 => UrgencyBand::DueSoon,
            _ => UrgencyBand::Normal,
        }
    }

    /// The color this band is displayed with
    pub fn color(&self) -> Color {
        match self {
            UrgencyBand::Overdue  => Color::from_rgb_u8(0xFF, 0x3B, 0x30),
            UrgencyBand::DueToday => Color::from_rgb_u8(0xFF, 0x95, 0x00),
            UrgencyBand::DueSoon  => Color::from_rgb_u8(0xFF, 0xCC, 0x00),
            UrgencyBand::Normal   => Color::from_rgb_u8(0x8E, 0x8E, 0x93),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn labels() {
        let today = day(2024, 6, 10);
        assert_eq!(label(day(2024, 6, 10), today), "Today");
        assert_eq!(label(day(2024, 6, 11), today), "Tomorrow");
        assert_eq!(label(day(2024, 6, 9), today), "Jun 9");
        assert_eq!(label(day(2024, 1, 5), today), "Jan 5");
        assert_eq!(label(day(2025, 1, 5), today), "Jan 5, 2025");
        assert_eq!(label(day(2023, 12, 31), today), "Dec 31, 2023");
    }

    #[test]
    fn tomorrow_across_a_year_boundary() {
        let today = day(2024, 12, 31);
        assert_eq!(label(day(2025, 1, 1), today), "Tomorrow");
        assert_eq!(label(day(2025, 1, 2), today), "Jan 2, 2025");
    }

    #[test]
    fn bands() {
        let today = day(2024, 6, 10);
        assert_eq!(UrgencyBand::classify(day(2024, 6, 9), today), UrgencyBand::Overdue);
        assert_eq!(UrgencyBand::classify(day(2023, 6, 10), today), UrgencyBand::Overdue);
        assert_eq!(UrgencyBand::classify(day(2024, 6, 10), today), UrgencyBand::DueToday);
        assert_eq!(UrgencyBand::classify(day(2024, 6, 11), today), UrgencyBand::DueSoon);
        assert_eq!(UrgencyBand::classify(day(2024, 6, 12), today), UrgencyBand::DueSoon);
        assert_eq!(UrgencyBand::classify(day(2024, 6, 13), today), UrgencyBand::Normal);
        assert_eq!(UrgencyBand::classify(day(2024, 6, 20), today), UrgencyBand::Normal);
    }

    #[test]
    fn colors() {
        assert_eq!(UrgencyBand::Overdue.color().to_hex_string(), "#ff3b30");
        assert_eq!(UrgencyBand::Normal.color().to_hex_string(), "#8e8e93");
        assert_ne!(UrgencyBand::DueToday.color().to_hex_string(), UrgencyBand::DueSoon.color().to_hex_string());
    }
}

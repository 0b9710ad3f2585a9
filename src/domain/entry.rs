use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::currency::LocaleConfig;

/// One recorded income/expense event.
///
/// The display strings (`time`, `date`, `day`) are captured once at creation
/// with the locale active at that moment and never recomputed, so entries
/// keep the wording they were recorded with even if the locale changes later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub id: u64,
    pub time: String,
    pub date: String,
    pub income: u64,
    pub expense: u64,
    pub note: String,
    pub day: String,
}

impl Entry {
    /// Builds an entry from a wall-clock instant, deriving the locale-formatted
    /// display strings.
    pub fn capture(
        id: u64,
        income: u64,
        expense: u64,
        note: impl Into<String>,
        now: DateTime<Local>,
        locale: &LocaleConfig,
    ) -> Self {
        let date = now.date_naive();
        Self {
            id,
            time: locale.format_time(now.time()),
            date: locale.format_date(date),
            income,
            expense,
            note: note.into(),
            day: locale.weekday_label(date.weekday()).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn capture_derives_localized_display_strings() {
        let locale = LocaleConfig::indonesian();
        // 2026-08-05 is a Wednesday.
        let now = Local.with_ymd_and_hms(2026, 8, 5, 14, 30, 5).unwrap();
        let entry = Entry::capture(7, 5000, 2000, "Makan siang", now, &locale);

        assert_eq!(entry.id, 7);
        assert_eq!(entry.time, "14.30.05");
        assert_eq!(entry.date, "5/8/2026");
        assert_eq!(entry.day, "Rabu");
        assert_eq!(entry.income, 5000);
        assert_eq!(entry.expense, 2000);
        assert_eq!(entry.note, "Makan siang");
    }

    #[test]
    fn serde_roundtrip_preserves_all_fields() {
        let locale = LocaleConfig::indonesian();
        let now = Local.with_ymd_and_hms(2026, 8, 5, 9, 0, 0).unwrap();
        let entry = Entry::capture(1, 3000, 1000, "Jajan", now, &locale);

        let json = serde_json::to_string(&entry).unwrap();
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}

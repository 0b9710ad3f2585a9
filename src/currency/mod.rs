use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("IDR")
    }
}

/// Which component leads in a numeric short date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateOrder {
    DayFirst,
    MonthFirst,
}

/// Locale-aware formatting preferences.
///
/// Display strings captured on an entry (weekday, date, time) are derived
/// from these settings at creation time and stay frozen afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub time_separator: char,
    pub hour12: bool,
    pub date_order: DateOrder,
}

impl LocaleConfig {
    /// Indonesian conventions: `Senin`, `5/8/2026`, `14.30.05`, `5.000`.
    pub fn indonesian() -> Self {
        Self {
            language_tag: "id-ID".into(),
            decimal_separator: ',',
            grouping_separator: '.',
            time_separator: '.',
            hour12: false,
            date_order: DateOrder::DayFirst,
        }
    }

    /// Resolves a BCP 47 language tag to built-in conventions, falling back
    /// to `en-US` for tags we do not know.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "id-ID" | "id" => Self::indonesian(),
            _ => Self::default(),
        }
    }

    pub fn weekday_label(&self, weekday: Weekday) -> &'static str {
        match self.language_tag.as_str() {
            "id-ID" | "id" => match weekday {
                Weekday::Mon => "Senin",
                Weekday::Tue => "Selasa",
                Weekday::Wed => "Rabu",
                Weekday::Thu => "Kamis",
                Weekday::Fri => "Jumat",
                Weekday::Sat => "Sabtu",
                Weekday::Sun => "Minggu",
            },
            _ => match weekday {
                Weekday::Mon => "Monday",
                Weekday::Tue => "Tuesday",
                Weekday::Wed => "Wednesday",
                Weekday::Thu => "Thursday",
                Weekday::Fri => "Friday",
                Weekday::Sat => "Saturday",
                Weekday::Sun => "Sunday",
            },
        }
    }

    /// Short numeric date without zero padding, component order per locale.
    pub fn format_date(&self, date: NaiveDate) -> String {
        match self.date_order {
            DateOrder::DayFirst => format!("{}/{}/{}", date.day(), date.month(), date.year()),
            DateOrder::MonthFirst => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        }
    }

    pub fn format_time(&self, time: NaiveTime) -> String {
        let sep = self.time_separator;
        if self.hour12 {
            let (is_pm, hour) = time.hour12();
            format!(
                "{}{sep}{:02}{sep}{:02} {}",
                hour,
                time.minute(),
                time.second(),
                if is_pm { "PM" } else { "AM" }
            )
        } else {
            format!(
                "{:02}{sep}{:02}{sep}{:02}",
                time.hour(),
                time.minute(),
                time.second()
            )
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            time_separator: ':',
            hour12: true,
            date_order: DateOrder::MonthFirst,
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "IDR" => "Rp".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "IDR" | "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(locale.decimal_separator) {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part, locale.grouping_separator);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        insert_grouping(&mut body, locale.grouping_separator);
    }
    body
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator);
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Renders a whole-unit amount as symbol plus grouped digits, `Rp 5.000`.
pub fn format_amount(amount: u64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let precision = minor_units_for(code.as_str());
    let body = format_number(locale, amount as f64, precision);
    format!("{} {}", symbol_for(code.as_str()), body)
}

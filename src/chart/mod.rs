use crate::currency::{format_amount, CurrencyCode, LocaleConfig};
use crate::domain::Entry;

/// Both line series in a frontend-agnostic shape.
///
/// The core generates these; the frontend just renders them. The x
/// coordinate is the entry's position in the sequence, so the chart is
/// ordered by creation sequence rather than by timestamp value.
#[derive(Debug, Clone, Default)]
pub struct ChartSeries {
    pub income: Vec<(f64, f64)>,
    pub expense: Vec<(f64, f64)>,
    pub x_labels: Vec<String>,
    pub y_max: f64,
}

impl ChartSeries {
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut series = Self::default();
        for (position, entry) in entries.iter().enumerate() {
            let x = position as f64;
            series.income.push((x, entry.income as f64));
            series.expense.push((x, entry.expense as f64));
            series.x_labels.push(entry.time.clone());
            series.y_max = series
                .y_max
                .max(entry.income as f64)
                .max(entry.expense as f64);
        }
        // Leave headroom so the top line does not hug the frame.
        series.y_max = (series.y_max * 1.1).max(1.0);
        series
    }

    pub fn len(&self) -> usize {
        self.income.len()
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty()
    }
}

/// Hover/selection card content for one entry: note, weekday, date, time,
/// and both amounts as locale-formatted currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub note: String,
    pub day: String,
    pub date: String,
    pub time: String,
    pub income_display: String,
    pub expense_display: String,
}

impl Tooltip {
    pub fn for_entry(entry: &Entry, code: &CurrencyCode, locale: &LocaleConfig) -> Self {
        Self {
            note: entry.note.clone(),
            day: entry.day.clone(),
            date: entry.date.clone(),
            time: entry.time.clone(),
            income_display: format_amount(entry.income, code, locale),
            expense_display: format_amount(entry.expense, code, locale),
        }
    }
}

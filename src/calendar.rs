use chrono::{Datelike, Days, NaiveDate};

use crate::menu::MealFlags;
use crate::scrape;

/// Which meals a venue serves, by date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSchedule {
    /// The same meal set every day.
    Daily(MealFlags),
    /// A per-weekday table, Monday first.
    Weekly([MealFlags; 7]),
}

/// Per-venue rules for which dates and meals exist, and how the source's
/// date labels map onto actual service dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarPolicy {
    /// Days to add to the raw label before using it as an output key.
    /// Bruin Plate labels a menu with the day before it is served, so its
    /// policy carries +1.
    pub date_offset_days: i64,
    pub schedule: MealSchedule,
}

impl Default for CalendarPolicy {
    fn default() -> Self {
        Self {
            date_offset_days: 0,
            schedule: MealSchedule::Daily(MealFlags::all()),
        }
    }
}

impl CalendarPolicy {
    #[must_use]
    pub fn available_meals(&self, date: NaiveDate) -> MealFlags {
        match self.schedule {
            MealSchedule::Daily(flags) => flags,
            MealSchedule::Weekly(table) => {
                table[date.weekday().num_days_from_monday() as usize]
            }
        }
    }

    /// Parses a raw `YYYY-MM-DD` option label and applies the offset. The
    /// result is the actual service date used as the output key.
    pub fn adjust_label(&self, raw: &str) -> scrape::Result<NaiveDate> {
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| scrape::Error::invalid_date_label(raw))?;
        let shifted = if self.date_offset_days >= 0 {
            date.checked_add_days(Days::new(self.date_offset_days.unsigned_abs()))
        } else {
            date.checked_sub_days(Days::new(self.date_offset_days.unsigned_abs()))
        };
        shifted.ok_or_else(|| scrape::Error::invalid_date_label(raw))
    }
}

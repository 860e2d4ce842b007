//! Weekly birthday scheduling
//!
//! Projects every stored birthday onto the seven days starting at a reference
//! date and buckets the matching names by the weekday they should be greeted
//! on. Birthdays falling on a Saturday or Sunday are greeted on Monday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::debug;

use crate::models::{AddressBook, Birthday};

/// Number of days covered by a report, starting with the reference day
pub const WINDOW_DAYS: i64 = 7;

/// One calendar day of a weekly report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub weekday: Weekday,
    /// Names bucketed to this weekday, in address book order
    pub names: Vec<String>,
}

impl DayEntry {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Upcoming birthdays for the seven days starting at `today`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyReport {
    today: NaiveDate,
    days: Vec<DayEntry>,
}

impl WeeklyReport {
    /// The reference date the report was computed for
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Seven consecutive days, the first one being `today`
    pub fn days(&self) -> &[DayEntry] {
        &self.days
    }

    /// Names bucketed to `weekday`
    pub fn names_for(&self, weekday: Weekday) -> &[String] {
        self.days
            .iter()
            .find(|d| d.weekday == weekday)
            .map(|d| d.names.as_slice())
            .unwrap_or_default()
    }

    /// Whether no birthday falls into the window at all
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(DayEntry::is_empty)
    }
}

/// Build the weekly report for `book` relative to `today`
pub fn weekly_report(book: &AddressBook, today: NaiveDate) -> WeeklyReport {
    // Indexed by Weekday::num_days_from_monday
    let mut buckets: [Vec<String>; 7] = Default::default();

    for record in book.records() {
        let Some(birthday) = record.birthday() else {
            continue;
        };
        let Some(occurrence) = next_occurrence(birthday, today) else {
            debug!(name = %record.name(), "birthday has no occurrence in a representable year");
            continue;
        };

        let delta_days = (occurrence - today).num_days();
        if delta_days >= WINDOW_DAYS {
            continue;
        }

        let weekday = greeting_weekday(occurrence.weekday());
        debug!(
            name = %record.name(),
            %occurrence,
            delta_days,
            bucket = ?weekday,
            "birthday in window"
        );
        buckets[weekday.num_days_from_monday() as usize].push(record.name().to_string());
    }

    let days = (0..WINDOW_DAYS)
        .map(|offset| {
            let date = today + Duration::days(offset);
            let weekday = date.weekday();
            let names = std::mem::take(&mut buckets[weekday.num_days_from_monday() as usize]);
            DayEntry {
                date,
                weekday,
                names,
            }
        })
        .collect();

    WeeklyReport { today, days }
}

/// The weekday a birthday on `weekday` is greeted on
pub fn greeting_weekday(weekday: Weekday) -> Weekday {
    match weekday {
        Weekday::Sat | Weekday::Sun => Weekday::Mon,
        other => other,
    }
}

/// The first occurrence of `birthday` on or after `today`
///
/// Returns `None` only when the target year is outside chrono's range.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in(birthday, today.year())?;
    if this_year < today {
        occurrence_in(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// The day `birthday` is observed on in `year`
///
/// February 29 is observed on February 28 in non-leap years.
pub fn occurrence_in(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.is_leap_day() {
            debug!(year, "leap-day birthday observed on February 28");
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

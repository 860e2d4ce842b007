//! Weekly birthday report formatting

use chrono::Weekday;

use crate::services::WeeklyReport;

/// Full English name of a weekday
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One line per day of the report, starting with today
///
/// An empty today reads "No birthdays this week."; any other empty day reads
/// "{Weekday}: No birthdays.".
pub fn format_weekly_report(report: &WeeklyReport) -> Vec<String> {
    let today = report.today();
    report
        .days()
        .iter()
        .map(|day| {
            let label = weekday_name(day.weekday);
            if !day.names.is_empty() {
                format!("{}: {}", label, day.names.join(", "))
            } else if day.date == today {
                "No birthdays this week.".to_string()
            } else {
                format!("{}: No birthdays.", label)
            }
        })
        .collect()
}

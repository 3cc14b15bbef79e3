use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Seconds from midnight to 23:59:59
const LAST_SECOND_OF_DAY: i64 = 24 * 60 * 60 - 1;

/// Inclusive timestamp range covering one calendar day.
///
/// The upper bound is `23:59:59` exactly, so a quote stamped within
/// the final second (e.g. `23:59:59.500`) falls outside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DayWindow {
    pub fn for_date(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN);
        DayWindow {
            start,
            end: start + Duration::seconds(LAST_SECOND_OF_DAY),
        }
    }

    pub fn contains(&self, at: &NaiveDateTime) -> bool {
        self.start <= *at && *at <= self.end
    }
}

// Test fixtures - reusable test data
// Provides consistent months and events across the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use month_grid_layout::Event;

/// Route `log` output through the test harness (RUST_LOG=trace to see placements)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn on(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        on(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
    }

    /// March 2026 starts on a Sunday, so with a Sunday-first grid day N is cell N - 1
    pub fn march_2026() -> NaiveDate {
        on(2026, 3, 1)
    }

    /// January 2025 starts on a Wednesday (three leading cells)
    pub fn january_2025() -> NaiveDate {
        on(2025, 1, 1)
    }
}

/// Sample events for testing
pub mod events {
    use super::dates::at;
    use super::*;

    /// A timed event within one March 2026 day
    pub fn march_meeting(id: &str, day: u32, hour: u32) -> Event {
        Event::new(id, id, at(2026, 3, day, hour, 0), at(2026, 3, day, hour + 1, 0))
    }

    /// An event spanning whole March 2026 days, `first..=last`
    pub fn march_span(id: &str, first: u32, last: u32) -> Event {
        Event::new(id, id, at(2026, 3, first, 9, 0), at(2026, 3, last, 17, 0))
    }

    /// Conference Mon-Fri plus a review on Wed and a demo on Thu (week of 9 March 2026)
    pub fn busy_week() -> Vec<Event> {
        vec![
            march_meeting("review", 11, 10),
            march_span("conference", 9, 13),
            march_meeting("demo", 12, 14),
        ]
    }
}

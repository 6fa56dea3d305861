// Reference month model
// Identifies which month grid to render

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::error::{GridError, GridResult};
use crate::utils::date::{days_in_month, parse_date};

/// A (year, month) pair naming the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ReferenceMonth {
    year: i32,
    month: u32,
}

impl ReferenceMonth {
    /// Create a reference month, validating that its first and last day exist.
    pub fn new(year: i32, month: u32) -> GridResult<Self> {
        if days_in_month(year, month).is_none() {
            return Err(GridError::InvalidDate(format!(
                "no such month {:04}-{:02}",
                year, month
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> GridResult<Self> {
        Self::new(date.year(), date.month())
    }

    /// Parse `YYYY-MM`, `YYYY-MM-DD` or any accepted event timestamp.
    pub fn parse(input: &str) -> GridResult<Self> {
        let trimmed = input.trim();
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d") {
            return Self::from_date(date);
        }
        Self::from_date(parse_date(trimmed)?)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_of_month(&self) -> NaiveDate {
        // Both endpoints were checked in `new`.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month).unwrap_or(28)
    }

    pub fn last_of_month(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.days_in_month()).unwrap_or_default()
    }

    /// Whether `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following month.
    pub fn next(&self) -> GridResult<Self> {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// The preceding month.
    pub fn previous(&self) -> GridResult<Self> {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }
}

impl fmt::Display for ReferenceMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_new_rejects_bad_month() {
        assert!(matches!(
            ReferenceMonth::new(2025, 13),
            Err(GridError::InvalidDate(_))
        ));
        assert!(ReferenceMonth::new(2025, 0).is_err());
    }

    #[test_case("2025-03" ; "year month")]
    #[test_case("2025-03-17" ; "full date")]
    #[test_case("2025-03-31T23:59:00" ; "timestamp")]
    #[test_case(" 2025-03 " ; "padded")]
    fn test_parse_variants(input: &str) {
        let month = ReferenceMonth::parse(input).unwrap();
        assert_eq!(month, ReferenceMonth::new(2025, 3).unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            ReferenceMonth::parse("March"),
            Err(GridError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_bounds() {
        let month = ReferenceMonth::new(2024, 2).unwrap();
        assert_eq!(month.first_of_month(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(month.last_of_month(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(month.days_in_month(), 29);
        assert!(month.contains(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    }

    #[test]
    fn test_navigation_wraps_year() {
        let december = ReferenceMonth::new(2025, 12).unwrap();
        assert_eq!(december.next().unwrap(), ReferenceMonth::new(2026, 1).unwrap());

        let january = ReferenceMonth::new(2026, 1).unwrap();
        assert_eq!(january.previous().unwrap(), december);
        assert_eq!(january.to_string(), "2026-01");
    }
}

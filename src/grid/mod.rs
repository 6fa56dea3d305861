//! Fixed 6x7 month grid.
//!
//! Every month renders as exactly six weeks so the view never changes height
//! when navigating. Cells are addressed by a single index `0..42`, row-major.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::error::{GridError, GridResult};
use crate::models::month::ReferenceMonth;
use crate::utils::date::days_between;

/// Number of days in a grid row
pub const DAYS_PER_WEEK: usize = 7;
/// Number of rows in every month grid
pub const WEEKS_PER_GRID: usize = 6;
/// Total cells in every month grid
pub const GRID_CELLS: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The day grid for one displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub month: ReferenceMonth,
    /// 0 = Sunday .. 6 = Saturday
    pub first_day_of_week: u8,
    /// Cells before day 1 (adjacent-month days)
    pub leading_offset: usize,
    pub days_in_month: u32,
    /// `Some(day)` for days of the displayed month, `None` elsewhere. Always 42 long.
    pub cells: Vec<Option<u32>>,
    /// Date shown at cell 0
    origin: NaiveDate,
    /// Date shown at cell 41
    last_visible: NaiveDate,
}

/// Build the grid for the month containing `reference`.
///
/// Fails only when the six-week window around the month falls outside the
/// representable date range.
pub fn build_grid(reference: NaiveDate, first_day_of_week: u8) -> GridResult<MonthGrid> {
    let month = ReferenceMonth::from_date(reference)?;
    MonthGrid::new(month, first_day_of_week)
}

/// Build the grid for a month given as text (`YYYY-MM`, a date, or a timestamp).
pub fn build_grid_from_str(reference: &str, first_day_of_week: u8) -> GridResult<MonthGrid> {
    MonthGrid::new(ReferenceMonth::parse(reference)?, first_day_of_week)
}

impl MonthGrid {
    pub fn new(month: ReferenceMonth, first_day_of_week: u8) -> GridResult<Self> {
        let first_day_of_week = first_day_of_week % 7;
        let first_of_month = month.first_of_month();
        let days_in_month = month.days_in_month();

        let leading_offset = ((first_of_month.weekday().num_days_from_sunday() as i32
            - first_day_of_week as i32
            + 7)
            % 7) as usize;

        let origin = first_of_month
            .checked_sub_days(Days::new(leading_offset as u64))
            .ok_or_else(|| GridError::InvalidDate(format!("grid for {} starts out of range", month)))?;
        let last_visible = origin
            .checked_add_days(Days::new(GRID_CELLS as u64 - 1))
            .ok_or_else(|| GridError::InvalidDate(format!("grid for {} ends out of range", month)))?;

        let mut cells = vec![None; GRID_CELLS];
        for day in 1..=days_in_month {
            cells[leading_offset + day as usize - 1] = Some(day);
        }

        Ok(Self {
            month,
            first_day_of_week,
            leading_offset,
            days_in_month,
            cells,
            origin,
            last_visible,
        })
    }

    pub fn first_of_month(&self) -> NaiveDate {
        self.month.first_of_month()
    }

    pub fn last_of_month(&self) -> NaiveDate {
        self.month.last_of_month()
    }

    /// Date displayed at cell 0 (may belong to the previous month).
    pub fn origin(&self) -> NaiveDate {
        self.origin
    }

    /// Date displayed at cell 41 (may belong to the next month).
    pub fn last_visible(&self) -> NaiveDate {
        self.last_visible
    }

    /// Concrete date shown at `cell`, including adjacent-month days.
    pub fn date_at(&self, cell: usize) -> Option<NaiveDate> {
        if cell >= GRID_CELLS {
            return None;
        }
        self.origin.checked_add_days(Days::new(cell as u64))
    }

    /// Cell index showing `date`, if it is inside the six-week window.
    pub fn cell_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = days_between(self.origin, date);
        (0..GRID_CELLS as i64)
            .contains(&offset)
            .then_some(offset as usize)
    }

    /// Grid row (week) containing `cell`.
    pub fn week_of(cell: usize) -> usize {
        cell / DAYS_PER_WEEK
    }

    /// Short weekday names in column order.
    pub fn weekday_labels(&self) -> [&'static str; DAYS_PER_WEEK] {
        let start = self.first_day_of_week as usize;
        std::array::from_fn(|i| DAY_NAMES[(start + i) % DAYS_PER_WEEK])
    }

    /// Count of cells that belong to the displayed month.
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

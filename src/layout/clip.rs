//! Clipping events to the visible window and mapping them onto grid cells.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::grid::{MonthGrid, GRID_CELLS};
use crate::models::event::Event;
use crate::utils::date::days_between;

/// Which dates an event may occupy on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipMode {
    /// Only days of the displayed month; adjacent-month cells stay empty.
    #[default]
    Month,
    /// Every date the six-week grid shows, including adjacent-month days.
    Grid,
}

/// An event's position on the grid after clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClippedSpan {
    pub start_cell: usize,
    /// Consecutive cells covered; `clip` never produces 0
    pub span: usize,
    pub effective_start: NaiveDate,
    pub effective_end: NaiveDate,
}

impl ClippedSpan {
    /// Last cell covered (inclusive). Equals `start_cell` for a zero span.
    pub fn end_cell(&self) -> usize {
        (self.start_cell + self.span).saturating_sub(1).max(self.start_cell)
    }

    /// Cells covered, as a half-open range.
    pub fn cells(&self) -> std::ops::Range<usize> {
        self.start_cell..self.start_cell + self.span
    }

    pub fn overlaps(&self, other: &ClippedSpan) -> bool {
        self.start_cell <= other.end_cell() && other.start_cell <= self.end_cell()
    }
}

/// A clipped span together with the event it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClippedEvent<'a> {
    pub event: &'a Event,
    pub span: ClippedSpan,
}

/// Clip `event` to the window selected by `mode`.
///
/// Works at calendar-day granularity. An event whose end precedes its start
/// is treated as a single day at its start date. Returns `None` when the event
/// does not touch the window.
pub fn clip(event: &Event, grid: &MonthGrid, mode: ClipMode) -> Option<ClippedSpan> {
    let start = event.start.date();
    let end = if event.is_malformed() {
        log::debug!(
            "Event '{}' ends before it starts ({} < {}); treating as single day",
            event.id,
            event.end,
            event.start
        );
        start
    } else {
        event.end.date()
    };

    let (window_start, window_end) = match mode {
        ClipMode::Month => (grid.first_of_month(), grid.last_of_month()),
        ClipMode::Grid => (grid.origin(), grid.last_visible()),
    };

    if end < window_start || start > window_end {
        log::trace!(
            "Event '{}' ({} to {}) outside {} window",
            event.id,
            start,
            end,
            grid.month
        );
        return None;
    }

    let effective_start = start.max(window_start);
    let effective_end = end.min(window_end);

    // Window start is never before the grid origin, so this is non-negative.
    let start_cell = days_between(grid.origin(), effective_start).max(0) as usize;
    let span = (days_between(effective_start, effective_end) + 1).max(1) as usize;
    let span = span.min(GRID_CELLS - start_cell);

    Some(ClippedSpan {
        start_cell,
        span,
        effective_start,
        effective_end,
    })
}

/// Clip every event, dropping those outside the window. Input order is kept.
pub fn clip_all<'a>(events: &'a [Event], grid: &MonthGrid, mode: ClipMode) -> Vec<ClippedEvent<'a>> {
    events
        .iter()
        .filter_map(|event| clip(event, grid, mode).map(|span| ClippedEvent { event, span }))
        .collect()
}

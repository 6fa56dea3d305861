//! Per-week render instructions.

use serde::Serialize;

use super::packing::ProcessedEvent;
use crate::grid::{DAYS_PER_WEEK, WEEKS_PER_GRID};
use crate::models::event::Event;

/// One event bar as drawn inside a single week strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekEvent<'a> {
    pub event: &'a Event,
    /// Column (0..7) where the bar begins in this week
    pub offset_in_week: usize,
    /// Columns the bar covers in this week
    pub visible_span_in_week: usize,
    pub row: usize,
    /// The event started in an earlier week
    pub continues_before: bool,
    /// The event carries on into a later week
    pub continues_after: bool,
}

/// Bars for one grid row, plus the vertical space they need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekLayout<'a> {
    pub week_index: usize,
    /// Ordered by row, then column
    pub events: Vec<WeekEvent<'a>>,
    /// Highest row used, `None` for an empty week
    pub max_row: Option<usize>,
}

impl<'a> WeekLayout<'a> {
    /// Rows to reserve above the day numbers.
    pub fn row_count(&self) -> usize {
        self.max_row.map_or(0, |row| row + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// First cell index of this week.
    pub fn week_start(&self) -> usize {
        self.week_index * DAYS_PER_WEEK
    }
}

/// Select and position the events visible in grid row `week_index`.
///
/// Rows come straight from the month-wide packing, so nothing is recomputed
/// here. A `week_index` past the last grid row yields an empty layout.
pub fn events_for_week<'a>(week_index: usize, processed: &[ProcessedEvent<'a>]) -> WeekLayout<'a> {
    if week_index >= WEEKS_PER_GRID {
        log::warn!("Week index {} outside the {}-week grid", week_index, WEEKS_PER_GRID);
        return WeekLayout {
            week_index,
            events: Vec::new(),
            max_row: None,
        };
    }

    let week_start = week_index * DAYS_PER_WEEK;
    let week_end = week_start + DAYS_PER_WEEK;

    let mut events: Vec<WeekEvent<'a>> = processed
        .iter()
        .filter(|p| p.span > 0 && p.start_cell < week_end && p.end_cell() >= week_start)
        .map(|p| {
            let first = p.start_cell.max(week_start);
            let last = (p.start_cell + p.span).min(week_end);
            WeekEvent {
                event: p.event,
                offset_in_week: first - week_start,
                visible_span_in_week: last - first,
                row: p.row,
                continues_before: p.start_cell < week_start,
                continues_after: p.start_cell + p.span > week_end,
            }
        })
        .collect();

    events.sort_by_key(|e| (e.row, e.offset_in_week));
    let max_row = events.iter().map(|e| e.row).max();

    WeekLayout {
        week_index,
        events,
        max_row,
    }
}

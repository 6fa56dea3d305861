//! Month-grid event layout.
//!
//! The pipeline runs in one direction and is recomputed in full on every
//! call: build the grid, clip each event to it, pack rows month-wide, then
//! slice the result into six week strips for the renderer.

mod clip;
mod packing;
mod week;

pub use clip::{clip, clip_all, ClipMode, ClippedEvent, ClippedSpan};
pub use packing::{assign_rows, ProcessedEvent};
pub use week::{events_for_week, WeekEvent, WeekLayout};

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::GridConfig;
use crate::error::GridResult;
use crate::grid::{build_grid, MonthGrid, GRID_CELLS, WEEKS_PER_GRID};
use crate::models::event::Event;

/// Everything a month view needs to draw its event bars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthLayout<'a> {
    pub grid: MonthGrid,
    /// Visible events in placement order
    pub events: Vec<ProcessedEvent<'a>>,
    /// Always six entries, one per grid row
    pub weeks: Vec<WeekLayout<'a>>,
}

impl<'a> MonthLayout<'a> {
    pub fn week(&self, week_index: usize) -> Option<&WeekLayout<'a>> {
        self.weeks.get(week_index)
    }

    /// Row assigned to the event with `id`, if it is visible this month.
    pub fn row_of(&self, id: &str) -> Option<usize> {
        self.events
            .iter()
            .find(|p| p.event.id == id)
            .map(|p| p.row)
    }

    pub fn processed(&self, id: &str) -> Option<&ProcessedEvent<'a>> {
        self.events.iter().find(|p| p.event.id == id)
    }

    /// Number of events covering `cell`.
    pub fn max_cell_depth(&self, cell: usize) -> usize {
        if cell >= GRID_CELLS {
            return 0;
        }
        self.events
            .iter()
            .filter(|p| p.cells().contains(&cell))
            .count()
    }

    /// Most rows any single week needs.
    pub fn max_row_count(&self) -> usize {
        self.weeks
            .iter()
            .map(WeekLayout::row_count)
            .max()
            .unwrap_or(0)
    }
}

/// Lay out `events` on the month containing `reference`.
pub fn layout_month<'a>(
    reference: NaiveDate,
    events: &'a [Event],
    config: &GridConfig,
) -> GridResult<MonthLayout<'a>> {
    config.validate()?;
    let grid = build_grid(reference, config.first_day_of_week)?;
    let clipped = clip_all(events, &grid, config.clip_mode);
    let visible = clipped.len();
    let processed = assign_rows(clipped);

    let weeks: Vec<WeekLayout<'a>> = (0..WEEKS_PER_GRID)
        .map(|week_index| events_for_week(week_index, &processed))
        .collect();

    log::debug!(
        "Laid out {} ({:?} clipping): {} of {} events visible, {} rows max",
        grid.month,
        config.clip_mode,
        visible,
        events.len(),
        weeks.iter().map(WeekLayout::row_count).max().unwrap_or(0)
    );

    Ok(MonthLayout {
        grid,
        events: processed,
        weeks,
    })
}

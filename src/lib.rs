// Month Grid Layout Library
// Exports the grid builder, event models and the row-packing engine

pub mod config;
pub mod error;
pub mod grid;
pub mod layout;
pub mod models;
pub mod utils;

pub use config::GridConfig;
pub use error::{GridError, GridResult};
pub use grid::{build_grid, MonthGrid};
pub use layout::{
    assign_rows, clip, events_for_week, layout_month, ClipMode, ClippedEvent, ClippedSpan,
    MonthLayout, ProcessedEvent, WeekEvent, WeekLayout,
};
pub use models::event::Event;
pub use models::month::ReferenceMonth;

// Event module
// Pre-materialized calendar event as handed to the layout engine

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::utils::date::{days_between, parse_timestamp};

/// A single concrete event occurrence.
///
/// The engine only reads `start` and `end`; `calendar_id` and `title` are
/// carried through to the render output untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ApiEvent")]
pub struct Event {
    pub id: String,
    pub calendar_id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Event {
    /// Create an event with no calendar reference.
    ///
    /// `end < start` is accepted here; the clipper normalizes such events to a
    /// single day instead of rejecting them.
    ///
    /// # Examples
    /// ```
    /// use month_grid_layout::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap().and_hms_opt(9, 0, 0).unwrap();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::new("evt-1", "Team Meeting", start, end);
    /// assert_eq!(event.duration_days(), 1);
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            calendar_id: String::new(),
            title: title.into(),
            start,
            end,
        }
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Parse an event from string timestamps.
    pub fn parse(
        id: impl Into<String>,
        calendar_id: impl Into<String>,
        title: impl Into<String>,
        start: &str,
        end: &str,
    ) -> GridResult<Self> {
        Ok(Self {
            id: id.into(),
            calendar_id: calendar_id.into(),
            title: title.into(),
            start: parse_timestamp(start)?,
            end: parse_timestamp(end)?,
        })
    }

    /// True when the event ends before it starts.
    pub fn is_malformed(&self) -> bool {
        self.end < self.start
    }

    /// Number of calendar days the unclipped event touches, at least 1.
    pub fn duration_days(&self) -> usize {
        let days = days_between(self.start.date(), self.end.date()) + 1;
        days.max(1) as usize
    }
}

/// Event shape as delivered by the remote API, timestamps still as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEvent {
    pub id: String,
    #[serde(default)]
    pub calendar_id: String,
    #[serde(default)]
    pub title: String,
    pub start: String,
    pub end: String,
}

impl TryFrom<ApiEvent> for Event {
    type Error = GridError;

    fn try_from(raw: ApiEvent) -> GridResult<Self> {
        Event::parse(raw.id, raw.calendar_id, raw.title, &raw.start, &raw.end)
    }
}

/// Read a JSON array of API events.
///
/// Unparseable timestamps surface as [`GridError::InvalidDate`] rather than a
/// generic JSON error, so callers can tell bad data from a bad payload.
pub fn events_from_json(json: &str) -> GridResult<Vec<Event>> {
    let raw: Vec<ApiEvent> = serde_json::from_str(json)?;
    raw.into_iter().map(Event::try_from).collect()
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<String>,
    calendar_id: Option<String>,
    title: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn calendar_id(mut self, calendar_id: impl Into<String>) -> Self {
        self.calendar_id = Some(calendar_id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Build the event
    pub fn build(self) -> GridResult<Event> {
        let id = self.id.ok_or(GridError::MissingField("id"))?;
        let start = self.start.ok_or(GridError::MissingField("start"))?;
        let end = self.end.ok_or(GridError::MissingField("end"))?;

        Ok(Event {
            id,
            calendar_id: self.calendar_id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            start,
            end,
        })
    }
}

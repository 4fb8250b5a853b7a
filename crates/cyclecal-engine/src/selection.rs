use cyclecal_types::CalendarDate;
use serde::Serialize;

/// Click-driven date selection.
///
/// `Empty` -> `StartOnly` on the first click. From `StartOnly`, a click
/// before the start moves the start, any other click closes the range
/// (clicking the start itself gives a one-day range). A closed `Range`
/// restarts on the next click wherever it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Empty,
    StartOnly(CalendarDate),
    /// Inclusive, `start <= end`.
    Range(CalendarDate, CalendarDate),
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_click(&mut self, clicked: CalendarDate) -> SelectedSet {
        let next = match *self {
            SelectionState::Range(..) | SelectionState::Empty => {
                SelectionState::StartOnly(clicked)
            }
            SelectionState::StartOnly(start) if clicked < start => {
                SelectionState::StartOnly(clicked)
            }
            SelectionState::StartOnly(start) => SelectionState::Range(start, clicked),
        };
        tracing::debug!(from = ?self, to = ?next, %clicked, "selection transition");
        *self = next;
        self.selected()
    }

    pub fn clear(&mut self) {
        *self = SelectionState::Empty;
    }

    pub fn range(&self) -> SelectionRange {
        match *self {
            SelectionState::Empty => SelectionRange::default(),
            SelectionState::StartOnly(start) => SelectionRange {
                start: Some(start),
                end: None,
            },
            SelectionState::Range(start, end) => SelectionRange {
                start: Some(start),
                end: Some(end),
            },
        }
    }

    /// The dates to highlight, derived from the current state.
    pub fn selected(&self) -> SelectedSet {
        match *self {
            SelectionState::Empty => SelectedSet::empty(),
            SelectionState::StartOnly(start) => SelectedSet::span(start, start),
            SelectionState::Range(start, end) => SelectedSet::span(start, end),
        }
    }
}

/// Start/end view of a [`SelectionState`]. `end` is only ever set together
/// with an earlier-or-equal `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SelectionRange {
    pub start: Option<CalendarDate>,
    pub end: Option<CalendarDate>,
}

impl SelectionRange {
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.end.is_some()
    }
}

/// Contiguous inclusive run of selected dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectedSet {
    bounds: Option<(CalendarDate, CalendarDate)>,
}

impl SelectedSet {
    pub fn empty() -> Self {
        Self { bounds: None }
    }

    fn span(start: CalendarDate, end: CalendarDate) -> Self {
        debug_assert!(start <= end);
        Self {
            bounds: Some((start, end)),
        }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.bounds
            .is_some_and(|(start, end)| start <= date && date <= end)
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    pub fn len(&self) -> usize {
        self.bounds
            .map_or(0, |(start, end)| end.days_since(start) as usize + 1)
    }

    pub fn first(&self) -> Option<CalendarDate> {
        self.bounds.map(|(start, _)| start)
    }

    pub fn last(&self) -> Option<CalendarDate> {
        self.bounds.map(|(_, end)| end)
    }

    pub fn iter(&self) -> impl Iterator<Item = CalendarDate> + use<> {
        let bounds = self.bounds;
        let end = bounds.map(|(_, end)| end);
        std::iter::successors(bounds.map(|(start, _)| start), CalendarDate::succ)
            .take_while(move |date| end.is_some_and(|end| *date <= end))
    }
}

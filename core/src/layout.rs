// SPDX-FileCopyrightText: 2026 The weekplan authors
//
// SPDX-License-Identifier: Apache-2.0

//! Day-grid layout for overlapping events.
//!
//! Given the events of a single day, [`layout`] assigns every event a grid
//! row plus a horizontal lane so that concurrent events are drawn side by
//! side instead of on top of each other. The engine is a pure function:
//! it holds no state between calls and never touches the renderer.

use std::{error::Error, fmt};

use crate::event::{Event, Weekday};

/// Skin alternation for successive clusters, purely cosmetic. The renderer
/// maps the two values to its two event colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualVariant {
    Primary,
    Alternate,
}

impl VisualVariant {
    fn from_parity(counter: u32) -> Self {
        if counter % 2 == 0 {
            VisualVariant::Primary
        } else {
            VisualVariant::Alternate
        }
    }
}

/// Computed layout parameters for one event.
///
/// Rows are relative to the grid's first displayed hour; horizontal values
/// are expressed as a lane index plus the cluster's lane count, so the
/// renderer can divide whatever width it has available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Position of the source event in the input slice.
    pub index: usize,

    /// Grid row, i.e. `start_hour - grid_start_hour`.
    pub row: u8,

    /// Number of rows spanned, equal to the event duration.
    pub row_span: u8,

    /// Horizontal lane assigned to the event within its cluster.
    pub level: u32,

    /// Highest lane used by any event in this event's cluster.
    pub max_level: u32,

    /// Whether a later-lane event overlaps this one. If not, the event's
    /// box extends to the cluster's right edge instead of one lane.
    pub has_following_overlap: bool,

    /// Skin for the renderer, alternating per cluster.
    pub variant: VisualVariant,
}

impl Placement {
    /// Width of a single lane given the total available width.
    pub fn lane_width(&self, available: f64) -> f64 {
        available / f64::from(self.max_level + 1)
    }

    /// Horizontal offset of this event's box.
    pub fn offset(&self, available: f64) -> f64 {
        f64::from(self.level) * self.lane_width(available)
    }

    /// Width of this event's box. Events with no following overlap widen
    /// to consume the remaining width from their lane to the right edge.
    pub fn width(&self, available: f64) -> f64 {
        if self.has_following_overlap {
            self.lane_width(available)
        } else {
            available - self.offset(available)
        }
    }
}

/// Contract violations by the layout caller.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The input mixes events from different days.
    MixedDays { expected: Weekday, found: Weekday },

    /// An event starts before the first displayed hour.
    StartsBeforeGrid {
        uid: String,
        start_hour: u8,
        grid_start_hour: u8,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MixedDays { expected, found } => {
                write!(f, "Expected events for {expected} only, found {found}")
            }
            Self::StartsBeforeGrid {
                uid,
                start_hour,
                grid_start_hour,
            } => write!(
                f,
                "Event {uid} starts at {start_hour} before the grid start hour {grid_start_hour}"
            ),
        }
    }
}

impl Error for LayoutError {}

/// Computes placements for all events of one day.
///
/// The input must already be filtered to a single day; `grid_start_hour` is
/// the first hour row the grid displays. Returns exactly one placement per
/// event, in input order.
pub fn layout(events: &[Event], grid_start_hour: u8) -> Result<Vec<Placement>, LayoutError> {
    if events.is_empty() {
        return Ok(Vec::new());
    }

    let day = events[0].day;
    for event in events {
        if event.day != day {
            return Err(LayoutError::MixedDays {
                expected: day,
                found: event.day,
            });
        }
        if event.start_hour < grid_start_hour {
            return Err(LayoutError::StartsBeforeGrid {
                uid: event.uid.clone(),
                start_hour: event.start_hour,
                grid_start_hour,
            });
        }
    }

    // Order by ascending start hour, longer events first on ties, so the
    // visually largest event anchors its cluster in the leftmost lane.
    // The sort is stable: fully identical events keep their input order.
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by(|&a, &b| {
        events[a]
            .start_hour
            .cmp(&events[b].start_hour)
            .then(span(&events[b]).cmp(&span(&events[a])))
    });

    let pass = Pass { events, order };

    // The sorted sequence is a run of disjoint clusters. For each cluster,
    // discover the maximum lane depth first, then emit placements with the
    // same recursion so every member shares the width divisor.
    let mut placements = Vec::with_capacity(events.len());
    let mut cursor = 0;
    let mut cluster_counter = 0;
    while cursor < pass.order.len() {
        let mut probe = cursor;
        let max_level = pass.discover_max_level(&mut probe, 0);

        let variant = VisualVariant::from_parity(cluster_counter);
        cluster_counter += 1;

        pass.place(
            &mut cursor,
            0,
            max_level,
            variant,
            grid_start_hour,
            &mut placements,
        );
        debug_assert_eq!(cursor, probe);
    }

    placements.sort_unstable_by_key(|p| p.index);
    Ok(placements)
}

/// Duration with the defensive clamp: a non-positive duration is out of
/// contract but tolerated as one hour.
fn span(event: &Event) -> u8 {
    event.duration.max(1)
}

struct Pass<'a> {
    events: &'a [Event],
    order: Vec<usize>,
}

impl Pass<'_> {
    /// The sorted order guarantees that once an event does not overlap the
    /// immediately following one, it cannot overlap any later one either.
    fn overlaps_next(&self, head: usize, cursor: usize) -> bool {
        let head = &self.events[head];
        let next = &self.events[self.order[cursor]];
        head.start_hour + span(head) > next.start_hour
    }

    /// First pass: walk one cluster and report the deepest lane reached,
    /// consuming the same events the placement pass will.
    fn discover_max_level(&self, cursor: &mut usize, level: u32) -> u32 {
        let head = self.order[*cursor];
        *cursor += 1;

        let mut max_level = level;
        while *cursor < self.order.len() && self.overlaps_next(head, *cursor) {
            max_level = max_level.max(self.discover_max_level(cursor, level + 1));
        }
        max_level
    }

    /// Second pass: place one cluster member and, before it, every event
    /// overlapping it one lane deeper. The head of each recursion gets the
    /// shallowest lane still free.
    fn place(
        &self,
        cursor: &mut usize,
        level: u32,
        max_level: u32,
        variant: VisualVariant,
        grid_start_hour: u8,
        out: &mut Vec<Placement>,
    ) {
        let head = self.order[*cursor];
        *cursor += 1;

        let mut has_following_overlap = false;
        while *cursor < self.order.len() && self.overlaps_next(head, *cursor) {
            has_following_overlap = true;
            self.place(cursor, level + 1, max_level, variant, grid_start_hour, out);
        }

        let event = &self.events[head];
        out.push(Placement {
            index: head,
            row: event.start_hour - grid_start_hour,
            row_span: span(event),
            level,
            max_level,
            has_following_overlap,
            variant,
        });
    }
}

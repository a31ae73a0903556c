// SPDX-FileCopyrightText: 2026 The weekplan authors
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal renderer for one day of the grid.
//!
//! Consumes the placements computed by the layout engine and paints each
//! event as a box at its row and lane. The renderer is the only place that
//! turns lane arithmetic into columns; the engine never sees a terminal.

use colored::Colorize;
use unicode_width::UnicodeWidthChar;
use weekplan_core::{Event, Placement, VisualVariant, Weekday};

/// Cell reserved by the second column of a wide character.
const WIDE_FILLER: char = '\0';

/// Columns taken by the hour gutter, e.g. `" 6:00 "`.
const GUTTER: usize = 6;

#[derive(Debug, Clone, Copy)]
pub struct DayView {
    /// First hour row shown.
    pub start_hour: u8,

    /// Hour at which the grid ends (exclusive).
    pub end_hour: u8,

    /// Columns available for event boxes, excluding the gutter.
    pub width: usize,

    /// Paint boxes with color skins. When off, boxes fall back to shade
    /// characters so piped output stays readable.
    pub color: bool,
}

impl DayView {
    /// Renders one day into a multi-line string, one row per hour.
    pub fn render(&self, day: Weekday, events: &[Event], placements: &[Placement]) -> String {
        let rows = usize::from(self.end_hour.saturating_sub(self.start_hour));
        let mut canvas = vec![vec![(' ', None); self.width]; rows];

        for placement in placements {
            self.paint(&mut canvas, placement, &events[placement.index]);
        }

        let mut out = String::new();
        if self.color {
            out.push_str(&format!("{}\n", day.to_string().bold()));
        } else {
            out.push_str(&format!("{day}\n"));
        }
        for (r, row) in canvas.iter().enumerate() {
            let hour = self.start_hour + r as u8;
            let line = format!("{hour:>2}:00 {}", self.stringify(row));
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }

    fn paint(
        &self,
        canvas: &mut [Vec<(char, Option<VisualVariant>)>],
        placement: &Placement,
        event: &Event,
    ) {
        let rows = canvas.len();
        let available = self.width as f64;

        let x0 = (placement.offset(available).round() as usize).min(self.width);
        let w = (placement.width(available).round() as usize).max(1);
        let x1 = (x0 + w).min(self.width);
        if x0 >= x1 {
            return;
        }

        let top = usize::from(placement.row);
        let bottom = (top + usize::from(placement.row_span)).min(rows);
        for row in canvas.iter_mut().take(bottom).skip(top) {
            for cell in &mut row[x0..x1] {
                *cell = (' ', Some(placement.variant));
            }
        }

        // Label on the first row, inset one column from the lane edge.
        if top < bottom {
            let mut x = x0 + 1;
            for ch in event.text.chars() {
                let w = ch.width().unwrap_or(0);
                if w == 0 || x + w > x1 {
                    break;
                }
                canvas[top][x] = (ch, Some(placement.variant));
                for filler in 1..w {
                    canvas[top][x + filler] = (WIDE_FILLER, Some(placement.variant));
                }
                x += w;
            }
        }
    }

    /// Joins one canvas row, styling runs of cells that share a variant.
    fn stringify(&self, row: &[(char, Option<VisualVariant>)]) -> String {
        let mut out = String::new();
        let mut run = String::new();
        let mut run_variant: Option<VisualVariant> = None;

        let mut flush = |run: &mut String, variant: Option<VisualVariant>, out: &mut String| {
            if run.is_empty() {
                return;
            }
            match (self.color, variant) {
                (true, Some(VisualVariant::Primary)) => {
                    out.push_str(&run.black().on_green().to_string());
                }
                (true, Some(VisualVariant::Alternate)) => {
                    out.push_str(&run.black().on_cyan().to_string());
                }
                _ => out.push_str(run),
            }
            run.clear();
        };

        for &(ch, variant) in row {
            if ch == WIDE_FILLER {
                continue;
            }
            if variant != run_variant {
                flush(&mut run, run_variant, &mut out);
                run_variant = variant;
            }
            match (ch, variant, self.color) {
                // shade empty box cells when no colors are available
                (' ', Some(VisualVariant::Primary), false) => run.push('░'),
                (' ', Some(VisualVariant::Alternate), false) => run.push('▒'),
                _ => run.push(ch),
            }
        }
        flush(&mut run, run_variant, &mut out);

        out.trim_end().to_string()
    }
}

/// Columns an event area gets for a requested total width.
pub fn event_area_width(total: usize) -> usize {
    total.saturating_sub(GUTTER).max(16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use weekplan_core::layout;

    fn event(uid: &str, start_hour: u8, duration: u8, text: &str) -> Event {
        Event {
            uid: uid.into(),
            day: Weekday::Monday,
            start_hour,
            duration,
            text: text.into(),
        }
    }

    fn view() -> DayView {
        DayView {
            start_hour: 6,
            end_hour: 20,
            width: 40,
            color: false,
        }
    }

    fn render(events: &[Event]) -> Vec<String> {
        let placements = layout(events, 6).unwrap();
        view()
            .render(Weekday::Monday, events, &placements)
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn empty_day_renders_bare_grid() {
        let lines = render(&[]);
        assert_eq!(lines[0], "Monday");
        assert_eq!(lines.len(), 15); // header + 14 hour rows
        assert_eq!(lines[1], " 6:00");
        assert_eq!(lines[14], "19:00");
    }

    #[test]
    fn single_event_spans_full_width_and_rows() {
        let lines = render(&[event("a", 7, 2, "gym")]);

        // 7:00 row carries the label, 8:00 row only the box fill
        let first = &lines[2];
        assert!(first.starts_with(" 7:00 "));
        assert!(first.contains("gym"));
        assert_eq!(first.chars().count() - GUTTER, 40);

        let second = &lines[3];
        assert!(second.starts_with(" 8:00 ░"));
        assert!(!second.contains("gym"));

        // the row before the event is empty
        assert_eq!(lines[1], " 6:00");
    }

    #[test]
    fn overlapping_events_split_into_lanes() {
        let events = [event("a", 9, 3, "deep work"), event("b", 10, 1, "standup")];
        let lines = render(&events);

        // 10:00 row: lane 0 fill for "deep work", "standup" label from column 20
        let row10 = &lines[5];
        assert!(row10.starts_with("10:00 ░"));
        let label_col = row10.chars().position(|c| c == 's').unwrap();
        assert_eq!(label_col, GUTTER + 20 + 1);

        // 11:00 row: only lane 0 remains occupied
        let row11 = &lines[6];
        assert!(row11.contains('░'));
        assert!(!row11.contains('▒') && !row11.contains("standup"));
    }

    #[test]
    fn second_cluster_uses_alternate_shade() {
        let events = [event("a", 7, 1, "one"), event("b", 12, 1, "two")];
        let lines = render(&events);

        assert!(lines[2].contains('░'));
        assert!(lines[7].contains('▒'));
    }

    #[test]
    fn long_labels_are_clipped_to_the_lane() {
        let text = "a very long label that cannot possibly fit in one lane";
        let events = [event("a", 9, 1, text), event("b", 9, 1, "b")];
        let lines = render(&events);

        let row = &lines[4];
        // lane 0 is 20 columns; the label must not bleed into lane 1
        let rendered: String = row.chars().skip(GUTTER).take(20).collect();
        assert!(rendered.starts_with("░a very long label"));
        assert!(!row.contains("cannot"));
    }

    #[test]
    fn event_area_width_reserves_gutter() {
        assert_eq!(event_area_width(46), 40);
        assert_eq!(event_area_width(10), 16); // floor for narrow terminals
    }
}

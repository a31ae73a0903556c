// SPDX-FileCopyrightText: 2026 The weekplan authors
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use unicode_width::UnicodeWidthStr;
use weekplan_core::Event;

use crate::util::{OutputFormat, format_hour};

/// Columns shown in the uid column; uuids are unwieldy in full.
const SHORT_UID: usize = 8;

/// Formats a list of events as an aligned table or as JSON.
#[derive(Debug, Clone, Copy)]
pub struct EventFormatter {
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new() -> Self {
        Self {
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self, events: &[Event]) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(events).unwrap_or_else(|e| format!("[] // {e}"))
            }
            OutputFormat::Table => self.format_table(events),
        }
    }

    fn format_table(&self, events: &[Event]) -> String {
        let columns = [
            EventColumn::Id,
            EventColumn::Day,
            EventColumn::TimeRange,
            EventColumn::Text,
        ];

        let table: Vec<Vec<Cow<'_, str>>> = events
            .iter()
            .map(|event| columns.iter().map(|col| col.format(event)).collect())
            .collect();

        let widths = column_widths(&columns, &table);

        let mut out = String::new();
        for cells in &table {
            let mut line = String::new();
            for (i, (cell, width)) in cells.iter().zip(&widths).enumerate() {
                line.push_str(cell);
                if i < cells.len() - 1 {
                    let pad = width.saturating_sub(cell.width());
                    line.push_str(&" ".repeat(pad));
                    line.push_str("  ");
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

impl Default for EventFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
enum EventColumn {
    Id,
    Day,
    TimeRange,
    Text,
}

impl EventColumn {
    fn format<'a>(&self, event: &'a Event) -> Cow<'a, str> {
        match self {
            EventColumn::Id => event.uid.chars().take(SHORT_UID).collect::<String>().into(),
            EventColumn::Day => event.day.to_string().into(),
            EventColumn::TimeRange => format!(
                "{}~{}",
                format_hour(event.start_hour),
                format_hour(event.end_hour())
            )
            .into(),
            EventColumn::Text => Cow::from(&event.text),
        }
    }
}

fn column_widths(columns: &[EventColumn], table: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
    let mut widths = vec![0; columns.len()];
    for row in table {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }
    widths
}

// SPDX-FileCopyrightText: 2026 The weekplan authors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io;
use std::path::PathBuf;

use tokio::fs;
use uuid::Uuid;

use crate::config::Config;
use crate::event::{Event, EventDraft, EventPatch, Weekday};
use crate::layout::{Placement, layout};
use crate::store::EventStore;

const DATA_FILE: &str = "events.json";

/// weekplan application core.
///
/// Owns the event store, applies the edit-form validation rules, and keeps
/// the collection persisted as JSON under the state directory. Every
/// mutation is written through immediately.
#[derive(Debug)]
pub struct Planner {
    config: Config,
    store: EventStore,
    data_path: PathBuf,
}

impl Planner {
    /// Creates a new planner instance with the given configuration, loading
    /// the persisted event collection. A missing data file is not an error:
    /// the planner starts with an empty week.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;

        let state_dir = config
            .state_dir
            .clone()
            .ok_or("State directory is not available")?;
        let data_path = state_dir.join(DATA_FILE);

        let events = load_events(&data_path).await?;
        tracing::debug!(count = events.len(), path = %data_path.display(), "loaded events");

        Ok(Self {
            config,
            store: EventStore::from_events(events),
            data_path,
        })
    }

    /// The active configuration, normalized.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// All events across the week, in insertion order.
    pub fn events(&self) -> &[Event] {
        self.store.events()
    }

    /// Snapshot of one day's events, in insertion order.
    pub fn day_events(&self, day: Weekday) -> Vec<Event> {
        self.store.day_events(day)
    }

    /// Computes grid placements for one day. Returns the day's events along
    /// with one placement per event, in matching order.
    pub fn day_layout(&self, day: Weekday) -> Result<(Vec<Event>, Vec<Placement>), Box<dyn Error>> {
        let events = self.store.day_events(day);
        let placements = layout(&events, self.config.grid_start_hour)?;
        Ok((events, placements))
    }

    /// Looks up an event by uid.
    pub fn get_event(&self, uid: &str) -> Option<&Event> {
        self.store.get(uid)
    }

    /// Adds a new event from the given draft.
    pub async fn new_event(&mut self, draft: EventDraft) -> Result<Event, Box<dyn Error>> {
        validate_text(&draft.text)?;
        self.validate_window(draft.start_hour, draft.end_hour)?;

        let event = draft.into_event(Uuid::new_v4().to_string());
        tracing::debug!(uid = %event.uid, day = %event.day, "adding event");
        self.store.add(event.clone());
        self.save().await?;
        Ok(event)
    }

    /// Applies a patch to an existing event.
    pub async fn update_event(
        &mut self,
        uid: &str,
        patch: EventPatch,
    ) -> Result<Event, Box<dyn Error>> {
        let event = self.store.get(uid).ok_or("Event not found")?;

        if let Some(text) = &patch.text {
            validate_text(text)?;
        }
        let (start, end) = patch.window_for(event);
        self.validate_window(start, end)?;

        tracing::debug!(uid, "updating event");
        let updated = self
            .store
            .update(uid, &patch)
            .ok_or("Event not found")?
            .clone();
        self.save().await?;
        Ok(updated)
    }

    /// Removes an event.
    pub async fn remove_event(&mut self, uid: &str) -> Result<Event, Box<dyn Error>> {
        let removed = self.store.remove(uid).ok_or("Event not found")?;
        tracing::debug!(uid, "removed event");
        self.save().await?;
        Ok(removed)
    }

    /// The edit-form hour caps: events must lie inside the displayed grid
    /// window and span at least one hour.
    fn validate_window(&self, start_hour: u8, end_hour: u8) -> Result<(), Box<dyn Error>> {
        let grid_start = self.config.grid_start_hour;
        let grid_end = self.config.grid_end_hour;

        if start_hour < grid_start || end_hour > grid_end {
            return Err(format!(
                "Event must lie between {grid_start}:00 and {grid_end}:00"
            )
            .into());
        }
        if end_hour <= start_hour {
            return Err("Event must end after it starts".into());
        }
        Ok(())
    }

    async fn save(&self) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.data_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| format!("Failed to create state directory: {e}"))?;
        }

        let json = serde_json::to_string_pretty(self.store.events())?;
        fs::write(&self.data_path, json)
            .await
            .map_err(|e| format!("Failed to write {}: {e}", self.data_path.display()))?;
        Ok(())
    }
}

async fn load_events(path: &PathBuf) -> Result<Vec<Event>, Box<dyn Error>> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(format!("Failed to read {}: {e}", path.display()).into()),
    };

    let events: Vec<Event> = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?;
    Ok(events)
}

fn validate_text(text: &str) -> Result<(), Box<dyn Error>> {
    if text.trim().is_empty() {
        return Err("Event text must not be empty".into());
    }
    Ok(())
}

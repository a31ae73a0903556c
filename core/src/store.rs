// SPDX-FileCopyrightText: 2026 The weekplan authors
//
// SPDX-License-Identifier: Apache-2.0

use crate::event::{Event, EventPatch, Weekday};

/// In-memory collection of all events across the week.
///
/// The store is the upstream collaborator of the layout engine: it hands out
/// read-only, filtered-by-day snapshots and tracks a generation counter so
/// callers know when placements must be recomputed. It never runs layout
/// itself.
#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: Vec<Event>,
    generation: u64,
}

impl EventStore {
    /// Creates a store from an already loaded collection.
    pub fn from_events(events: Vec<Event>) -> Self {
        Self {
            events,
            generation: 0,
        }
    }

    /// All events, in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the store holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Bumped on every mutation. A caller that cached placements can compare
    /// generations instead of diffing the collection.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Snapshot of the events for one day, in insertion order. The snapshot
    /// is detached from the store and stays valid across later mutations.
    pub fn day_events(&self, day: Weekday) -> Vec<Event> {
        self.events.iter().filter(|e| e.day == day).cloned().collect()
    }

    /// Looks up an event by uid.
    pub fn get(&self, uid: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.uid == uid)
    }

    /// Adds a new event.
    pub fn add(&mut self, event: Event) {
        self.events.push(event);
        self.generation += 1;
    }

    /// Applies a patch to the event with the given uid.
    pub fn update(&mut self, uid: &str, patch: &EventPatch) -> Option<&Event> {
        let event = self.events.iter_mut().find(|e| e.uid == uid)?;
        patch.apply_to(event);
        self.generation += 1;
        Some(event)
    }

    /// Removes and returns the event with the given uid.
    pub fn remove(&mut self, uid: &str) -> Option<Event> {
        let pos = self.events.iter().position(|e| e.uid == uid)?;
        self.generation += 1;
        Some(self.events.remove(pos))
    }
}

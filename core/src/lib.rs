// SPDX-FileCopyrightText: 2026 The weekplan authors
//
// SPDX-License-Identifier: Apache-2.0

//! weekplan core: the weekly event model, the overlap layout engine, and
//! JSON persistence of the event collection.

mod config;
mod event;
mod layout;
mod planner;
mod store;

pub use crate::{
    config::{APP_NAME, Config},
    event::{Event, EventDraft, EventPatch, Weekday},
    layout::{LayoutError, Placement, VisualVariant, layout},
    planner::Planner,
    store::EventStore,
};

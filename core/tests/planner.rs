// SPDX-FileCopyrightText: 2026 The weekplan authors
//
// SPDX-License-Identifier: Apache-2.0

//! Planner integration tests: CRUD, validation, persistence round trips,
//! and day layout through the full stack.

use tempfile::TempDir;
use weekplan_core::{Config, EventDraft, EventPatch, Planner, Weekday};

fn test_config(state_dir: &TempDir) -> Config {
    Config {
        state_dir: Some(state_dir.path().to_owned()),
        ..Default::default()
    }
}

fn draft(day: Weekday, start_hour: u8, end_hour: u8, text: &str) -> EventDraft {
    EventDraft {
        day,
        start_hour,
        end_hour,
        text: text.into(),
    }
}

#[tokio::test]
async fn new_event_persists_to_disk() {
    let dir = TempDir::new().unwrap();
    let mut planner = Planner::new(test_config(&dir)).await.unwrap();

    let event = planner
        .new_event(draft(Weekday::Monday, 9, 11, "team meeting"))
        .await
        .unwrap();
    assert_eq!(event.duration, 2);

    let data_path = dir.path().join("events.json");
    assert!(data_path.exists(), "data file should be written");

    // A fresh planner over the same state dir sees the event
    let reloaded = Planner::new(test_config(&dir)).await.unwrap();
    let stored = reloaded.get_event(&event.uid).unwrap();
    assert_eq!(stored.text, "team meeting");
    assert_eq!(stored.day, Weekday::Monday);
}

#[tokio::test]
async fn missing_data_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let planner = Planner::new(test_config(&dir)).await.unwrap();
    assert!(planner.events().is_empty());
}

#[tokio::test]
async fn update_event_moves_and_renames() {
    let dir = TempDir::new().unwrap();
    let mut planner = Planner::new(test_config(&dir)).await.unwrap();

    let event = planner
        .new_event(draft(Weekday::Wednesday, 10, 11, "dentist"))
        .await
        .unwrap();

    let patch = EventPatch {
        day: Some(Weekday::Thursday),
        start_hour: Some(14),
        end_hour: Some(16),
        text: Some("dentist, new office".into()),
    };
    let updated = planner.update_event(&event.uid, patch).await.unwrap();

    assert_eq!(updated.day, Weekday::Thursday);
    assert_eq!(updated.start_hour, 14);
    assert_eq!(updated.duration, 2);

    let reloaded = Planner::new(test_config(&dir)).await.unwrap();
    assert_eq!(reloaded.get_event(&event.uid).unwrap().start_hour, 14);
    assert!(reloaded.day_events(Weekday::Wednesday).is_empty());
}

#[tokio::test]
async fn remove_event_deletes_from_disk() {
    let dir = TempDir::new().unwrap();
    let mut planner = Planner::new(test_config(&dir)).await.unwrap();

    let event = planner
        .new_event(draft(Weekday::Friday, 9, 10, "review"))
        .await
        .unwrap();
    let removed = planner.remove_event(&event.uid).await.unwrap();
    assert_eq!(removed.uid, event.uid);

    let reloaded = Planner::new(test_config(&dir)).await.unwrap();
    assert!(reloaded.events().is_empty());

    let err = planner.remove_event(&event.uid).await.unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn drafts_outside_the_grid_window_are_rejected() {
    let dir = TempDir::new().unwrap();
    let mut planner = Planner::new(test_config(&dir)).await.unwrap();

    // default window is 6..20
    assert!(
        planner
            .new_event(draft(Weekday::Monday, 5, 7, "too early"))
            .await
            .is_err()
    );
    assert!(
        planner
            .new_event(draft(Weekday::Monday, 19, 21, "too late"))
            .await
            .is_err()
    );
    assert!(
        planner
            .new_event(draft(Weekday::Monday, 10, 10, "zero hours"))
            .await
            .is_err()
    );
    assert!(
        planner
            .new_event(draft(Weekday::Monday, 10, 11, "   "))
            .await
            .is_err()
    );
    assert!(planner.events().is_empty());
}

#[tokio::test]
async fn patches_are_validated_against_the_window() {
    let dir = TempDir::new().unwrap();
    let mut planner = Planner::new(test_config(&dir)).await.unwrap();

    let event = planner
        .new_event(draft(Weekday::Monday, 9, 10, "call"))
        .await
        .unwrap();

    let patch = EventPatch {
        end_hour: Some(21),
        ..Default::default()
    };
    assert!(planner.update_event(&event.uid, patch).await.is_err());

    let patch = EventPatch {
        text: Some(String::new()),
        ..Default::default()
    };
    assert!(planner.update_event(&event.uid, patch).await.is_err());

    // the event is untouched by rejected patches
    assert_eq!(planner.get_event(&event.uid).unwrap().end_hour(), 10);
}

#[tokio::test]
async fn day_layout_matches_the_stored_day() {
    let dir = TempDir::new().unwrap();
    let mut planner = Planner::new(test_config(&dir)).await.unwrap();

    planner
        .new_event(draft(Weekday::Tuesday, 9, 12, "workshop"))
        .await
        .unwrap();
    planner
        .new_event(draft(Weekday::Tuesday, 10, 11, "standup"))
        .await
        .unwrap();
    planner
        .new_event(draft(Weekday::Saturday, 10, 11, "football"))
        .await
        .unwrap();

    let (events, placements) = planner.day_layout(Weekday::Tuesday).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(placements.len(), 2);

    // the longer event anchors lane 0, the overlapping one is pushed right
    assert_eq!(placements[0].level, 0);
    assert_eq!(placements[1].level, 1);
    assert_eq!(placements[0].row, 3); // 9 - grid start 6

    let (events, placements) = planner.day_layout(Weekday::Sunday).unwrap();
    assert!(events.is_empty());
    assert!(placements.is_empty());
}

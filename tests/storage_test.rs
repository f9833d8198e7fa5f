// ABOUTME: Tests for the key-value stores and typed repositories
// ABOUTME: In-memory and file backends, change events, and tolerant schedule loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use chrono::{Duration, Utc};
use pulsefit::constants::storage_keys::{HISTORY_PREFIX, POOL_HISTORY_PREFIX, SCHEDULE_PREFIX};
use pulsefit::intelligence::bmi;
use pulsefit::models::{Goal, Intensity, TaskCategory, UserProfile, Weekday};
use pulsefit::storage::{
    user_key, FileStore, HistoryRepository, InMemoryStore, KeyValueStore, ProfileRepository,
    ScheduleRepository, StoreEventKind,
};
use std::sync::Arc;

fn memory_store() -> Arc<dyn KeyValueStore> {
    Arc::new(InMemoryStore::new())
}

#[tokio::test]
async fn test_memory_store_basic_operations() -> Result<()> {
    let store = InMemoryStore::new();
    assert!(store.is_empty().await);

    store.put("a", "1".to_owned()).await?;
    assert_eq!(store.get("a").await?, Some("1".to_owned()));
    assert_eq!(store.len().await, 1);

    assert!(store.delete("a").await?);
    assert!(!store.delete("a").await?);
    assert_eq!(store.get("a").await?, None);
    Ok(())
}

#[tokio::test]
async fn test_subscribers_see_changes() -> Result<()> {
    let store = InMemoryStore::new();
    let mut events = store.subscribe();

    store.put("schedule:alex", "[]".to_owned()).await?;
    store.delete("schedule:alex").await?;
    // Deleting a missing key is silent
    store.delete("schedule:alex").await?;

    let first = events.recv().await?;
    assert_eq!(first.key, "schedule:alex");
    assert_eq!(first.kind, StoreEventKind::Put);
    assert_eq!(events.recv().await?.kind, StoreEventKind::Delete);
    assert!(events.try_recv().is_err());
    Ok(())
}

#[tokio::test]
async fn test_file_store_persists_across_instances() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let store = FileStore::open(dir.path().join("data")).await?;
    store.put("profile:alex", "{\"x\":1}".to_owned()).await?;
    assert!(store.path_for("profile:alex").exists());
    assert!(store
        .path_for("profile:alex")
        .starts_with(dir.path().join("data")));

    let reopened = FileStore::open(dir.path().join("data")).await?;
    assert_eq!(
        reopened.get("profile:alex").await?,
        Some("{\"x\":1}".to_owned())
    );
    assert!(reopened.delete("profile:alex").await?);
    assert_eq!(reopened.get("profile:alex").await?, None);
    assert!(!reopened.delete("profile:alex").await?);
    Ok(())
}

#[tokio::test]
async fn test_file_store_keys_cannot_escape_root() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::open(dir.path()).await?;
    let path = store.path_for("../../etc/passwd");
    assert_eq!(path.parent(), Some(dir.path()));
    Ok(())
}

#[tokio::test]
async fn test_file_store_distinct_keys_use_distinct_files() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::open(dir.path()).await?;

    let keys = [
        "schedule:progress_alice",
        "schedule_progress:alice",
        "profile:a.b",
        "profile:a_b",
        "profile:a_2Eb",
        "profile:a b",
        "profile:A.B",
    ];
    let paths: std::collections::HashSet<_> = keys.iter().map(|k| store.path_for(k)).collect();
    assert_eq!(paths.len(), keys.len());

    for (i, key) in keys.iter().enumerate() {
        store.put(key, i.to_string()).await?;
    }
    for (i, key) in keys.iter().enumerate() {
        assert_eq!(store.get(key).await?, Some(i.to_string()));
    }
    Ok(())
}

#[tokio::test]
async fn test_similar_user_names_keep_separate_progress() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(dir.path()).await?);
    let repo = ScheduleRepository::new(store);

    let mut progress = pulsefit::models::ScheduleProgress::default();
    progress.set_completed(Weekday::Monday, true);
    repo.save_progress("a.b", &progress).await?;

    assert!(!repo.load_progress("a_b").await?.is_completed(Weekday::Monday));
    assert!(repo.load_progress("a.b").await?.is_completed(Weekday::Monday));
    Ok(())
}

#[tokio::test]
async fn test_profile_round_trip() -> Result<()> {
    let repo = ProfileRepository::new(memory_store());
    assert!(repo.load("alex").await?.is_none());

    let profile = UserProfile {
        name: "Alex".to_owned(),
        age: 34,
        gender: "female".to_owned(),
        height_cm: 168.0,
        weight_kg: 64.0,
    };
    repo.save("alex", &profile).await?;
    assert_eq!(repo.load("alex").await?, Some(profile));
    assert!(repo.load("sam").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_history_is_newest_first() -> Result<()> {
    let repo = HistoryRepository::new(memory_store());
    let now = Utc::now();

    let mut older = bmi::measure(80.0, 180.0)?;
    older.recorded_at = now - Duration::days(2);
    let mut newer = bmi::measure(78.0, 180.0)?;
    newer.recorded_at = now;

    repo.append("alex", newer.clone()).await?;
    repo.append("alex", older.clone()).await?;

    let list = repo.list("alex").await?;
    assert_eq!(list, vec![newer.clone(), older.clone()]);
    assert_eq!(repo.latest("alex").await?, Some(newer.clone()));

    assert!(repo.delete("alex", newer.id).await?);
    assert!(!repo.delete("alex", newer.id).await?);
    assert_eq!(repo.latest("alex").await?, Some(older));

    repo.clear("alex").await?;
    assert!(repo.list("alex").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_malformed_history_is_an_error() -> Result<()> {
    let store = memory_store();
    store
        .put(&user_key(HISTORY_PREFIX, "alex"), "{broken".to_owned())
        .await?;
    assert!(HistoryRepository::new(store).list("alex").await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_malformed_schedule_loads_as_empty() -> Result<()> {
    let store = memory_store();
    store
        .put(&user_key(SCHEDULE_PREFIX, "alex"), "not json".to_owned())
        .await?;
    let repo = ScheduleRepository::new(store);
    assert!(repo.load_schedule("alex").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_schedule_accepts_description_alias() -> Result<()> {
    let store = memory_store();
    let raw = r#"[
        {"day": "Mon", "description": "Brisk walk", "category": "cardio",
         "duration": 20, "intensity": "low", "notes": "Easy pace"},
        {"day": "Wednesday", "task": "Yoga", "category": "flexibility",
         "duration": 15, "intensity": "low"}
    ]"#;
    store
        .put(&user_key(SCHEDULE_PREFIX, "alex"), raw.to_owned())
        .await?;

    let schedule = ScheduleRepository::new(store).load_schedule("alex").await?;
    assert_eq!(schedule.days(), vec![Weekday::Monday, Weekday::Wednesday]);
    let monday = schedule.task_for(Weekday::Monday).unwrap();
    assert_eq!(monday.description, "Brisk walk");
    assert_eq!(monday.category, TaskCategory::Cardio);
    assert_eq!(monday.duration_minutes, 20);
    assert!(schedule.task_for(Weekday::Wednesday).unwrap().notes.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_saved_schedule_uses_persisted_field_names() -> Result<()> {
    let store = memory_store();
    let repo = ScheduleRepository::new(Arc::clone(&store));
    let raw = r#"[{"day":"Friday","task":"Row","category":"cardio","duration":25,"intensity":"medium","notes":""}]"#;
    store
        .put(&user_key(SCHEDULE_PREFIX, "alex"), raw.to_owned())
        .await?;
    let schedule = repo.load_schedule("alex").await?;
    repo.save_schedule("alex", &schedule).await?;

    let stored: serde_json::Value =
        serde_json::from_str(&store.get(&user_key(SCHEDULE_PREFIX, "alex")).await?.unwrap())?;
    let first = &stored[0];
    assert_eq!(first["task"], "Row");
    assert_eq!(first["duration"], 25);
    assert!(first.get("description").is_none());
    Ok(())
}

#[tokio::test]
async fn test_pool_history_defaults_empty() -> Result<()> {
    let repo = ScheduleRepository::new(memory_store());
    assert!(repo
        .load_pool_history("alex", Goal::WeightLoss, Intensity::Low)
        .await?
        .is_empty());
    repo.save_pool_history("alex", Goal::WeightLoss, Intensity::Low, &[2, 0])
        .await?;
    assert_eq!(
        repo.load_pool_history("alex", Goal::WeightLoss, Intensity::Low)
            .await?,
        vec![2, 0]
    );
    Ok(())
}

#[tokio::test]
async fn test_pool_history_is_kept_per_goal_and_intensity() -> Result<()> {
    let store = memory_store();
    let repo = ScheduleRepository::new(Arc::clone(&store));
    repo.save_pool_history("alex", Goal::WeightLoss, Intensity::Low, &[1])
        .await?;
    repo.save_pool_history("alex", Goal::Build, Intensity::High, &[0, 2])
        .await?;

    assert_eq!(
        repo.load_pool_history("alex", Goal::WeightLoss, Intensity::Low)
            .await?,
        vec![1]
    );
    assert_eq!(
        repo.load_pool_history("alex", Goal::Build, Intensity::High)
            .await?,
        vec![0, 2]
    );
    assert!(repo
        .load_pool_history("alex", Goal::Build, Intensity::Low)
        .await?
        .is_empty());

    // A document in the old single-list shape is ignored rather than misread
    store
        .put(&user_key(POOL_HISTORY_PREFIX, "sam"), "[1, 0]".to_owned())
        .await?;
    assert!(repo
        .load_pool_history("sam", Goal::WeightLoss, Intensity::Low)
        .await?
        .is_empty());
    Ok(())
}

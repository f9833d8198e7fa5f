// ABOUTME: Weekly schedule data model: weekdays, day tasks, task pools, and progress
// ABOUTME: Weekday indices are Monday-first (0 = Monday) everywhere in the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::discovery::{FocusArea, Intensity};
use crate::constants::schedule::DAYS_PER_POOL;

/// Day of the week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Index 0
    #[serde(alias = "Mon", alias = "monday")]
    Monday,
    /// Index 1
    #[serde(alias = "Tue", alias = "tuesday")]
    Tuesday,
    /// Index 2
    #[serde(alias = "Wed", alias = "wednesday")]
    Wednesday,
    /// Index 3
    #[serde(alias = "Thu", alias = "thursday")]
    Thursday,
    /// Index 4
    #[serde(alias = "Fri", alias = "friday")]
    Friday,
    /// Index 5
    #[serde(alias = "Sat", alias = "saturday")]
    Saturday,
    /// Index 6
    #[serde(alias = "Sun", alias = "sunday")]
    Sunday,
}

impl Weekday {
    /// All weekdays in Monday-first order
    pub const ALL: [Self; DAYS_PER_POOL] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Monday-first index (Monday = 0, Sunday = 6)
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Weekday for a Monday-first index
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < DAYS_PER_POOL {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Three-letter abbreviation used as the progress key
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }

    /// Full English name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Parse a full name or abbreviation, case-insensitively
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        Self::ALL.into_iter().find(|day| {
            label == day.name().to_lowercase() || label == day.abbreviation().to_lowercase()
        })
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Self::ALL[day.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of activity a day task asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    /// Endurance work
    Cardio,
    /// Resistance training
    Strength,
    /// Stretching and mobility
    Flexibility,
    /// Combined session
    Mixed,
    /// Diet-focused task
    Nutrition,
    /// Rest or active recovery
    Recovery,
    /// Category not recognized
    #[serde(other)]
    Unknown,
}

impl TaskCategory {
    /// Whether this category is a training category the focus area can emphasize
    #[must_use]
    pub const fn matches_focus(&self, focus: FocusArea) -> bool {
        matches!(
            (self, focus),
            (Self::Cardio, FocusArea::Cardio)
                | (Self::Strength, FocusArea::Strength)
                | (Self::Flexibility, FocusArea::Flexibility)
                | (Self::Mixed, FocusArea::Mixed)
        )
    }

    /// Categories whose durations never receive a focus boost
    #[must_use]
    pub const fn is_boost_exempt(&self) -> bool {
        matches!(self, Self::Nutrition | Self::Recovery)
    }

    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cardio => "cardio",
            Self::Strength => "strength",
            Self::Flexibility => "flexibility",
            Self::Mixed => "mixed",
            Self::Nutrition => "nutrition",
            Self::Recovery => "recovery",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day's task in a weekly schedule
///
/// Serialized with the persisted field names (`task`, `duration`); `description`
/// is accepted as an alias of `task` on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTask {
    /// Weekday this task belongs to
    pub day: Weekday,
    /// What to do
    #[serde(rename = "task", alias = "description")]
    pub description: String,
    /// Activity category
    pub category: TaskCategory,
    /// Planned duration in whole minutes
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    /// Effort level
    pub intensity: Intensity,
    /// Coaching notes
    #[serde(default)]
    pub notes: String,
}

impl DayTask {
    /// Copy of this task with a different duration
    #[must_use]
    pub fn with_duration(&self, duration_minutes: u32) -> Self {
        Self {
            duration_minutes,
            ..self.clone()
        }
    }
}

/// A complete candidate week: exactly one task per weekday, Monday first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskPool {
    tasks: [DayTask; DAYS_PER_POOL],
}

impl TaskPool {
    /// Wrap seven tasks as a pool
    #[must_use]
    pub const fn new(tasks: [DayTask; DAYS_PER_POOL]) -> Self {
        Self { tasks }
    }

    /// Tasks in authored order
    #[must_use]
    pub fn tasks(&self) -> &[DayTask] {
        &self.tasks
    }

    /// Task labeled with the given weekday
    #[must_use]
    pub fn task_for(&self, day: Weekday) -> Option<&DayTask> {
        self.tasks.iter().find(|task| task.day == day)
    }

    /// Whether position `i` holds the task for Monday-first weekday `i`
    #[must_use]
    pub fn is_week_ordered(&self) -> bool {
        self.tasks
            .iter()
            .zip(Weekday::ALL)
            .all(|(task, day)| task.day == day)
    }
}

/// Final weekly plan after day filtering and duration adjustments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjustedSchedule {
    tasks: Vec<DayTask>,
}

impl AdjustedSchedule {
    /// Wrap an ordered task list
    #[must_use]
    pub const fn new(tasks: Vec<DayTask>) -> Self {
        Self { tasks }
    }

    /// Schedule with no tasks
    #[must_use]
    pub const fn empty() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Tasks in week order
    #[must_use]
    pub fn tasks(&self) -> &[DayTask] {
        &self.tasks
    }

    /// Consume into the task list
    #[must_use]
    pub fn into_tasks(self) -> Vec<DayTask> {
        self.tasks
    }

    /// Task scheduled on the given weekday, if that day is active
    #[must_use]
    pub fn task_for(&self, day: Weekday) -> Option<&DayTask> {
        self.tasks.iter().find(|task| task.day == day)
    }

    /// Active weekdays in order
    #[must_use]
    pub fn days(&self) -> Vec<Weekday> {
        self.tasks.iter().map(|task| task.day).collect()
    }

    /// Number of active days
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no days are scheduled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Sum of all planned minutes
    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        self.tasks.iter().map(|task| task.duration_minutes).sum()
    }
}

/// Completion flags keyed by weekday abbreviation (`"Mon"` ... `"Sun"`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleProgress {
    completed: BTreeMap<String, bool>,
}

impl ScheduleProgress {
    /// Whether the task for `day` is marked complete
    #[must_use]
    pub fn is_completed(&self, day: Weekday) -> bool {
        self.completed
            .get(day.abbreviation())
            .copied()
            .unwrap_or(false)
    }

    /// Mark the task for `day` complete or incomplete
    pub fn set_completed(&mut self, day: Weekday, completed: bool) {
        self.completed
            .insert(day.abbreviation().to_owned(), completed);
    }

    /// Flip the completion flag for `day`, returning the new value
    pub fn toggle(&mut self, day: Weekday) -> bool {
        let completed = !self.is_completed(day);
        self.set_completed(day, completed);
        completed
    }

    /// Number of scheduled days marked complete
    #[must_use]
    pub fn completed_count(&self, schedule: &AdjustedSchedule) -> usize {
        schedule
            .tasks()
            .iter()
            .filter(|task| self.is_completed(task.day))
            .count()
    }

    /// `completed / total` over the scheduled days; 0.0 for an empty schedule
    #[must_use]
    pub fn completion_ratio(&self, schedule: &AdjustedSchedule) -> f64 {
        if schedule.is_empty() {
            return 0.0;
        }
        self.completed_count(schedule) as f64 / schedule.len() as f64
    }
}

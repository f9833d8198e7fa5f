// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for pulsefit-cli
// ABOUTME: Consistent rendering of profiles, BMI records, and weekly plans

use pulsefit::intelligence::bmi::round_one_decimal;
use pulsefit::models::{AdjustedSchedule, BmiRecord, ScheduleProgress, UserProfile};

/// Print a profile
pub fn display_profile(profile: &UserProfile) {
    println!("   Name: {}", profile.name);
    println!("   Age: {}", profile.age);
    if !profile.gender.is_empty() {
        println!("   Gender: {}", profile.gender);
    }
    println!("   Height: {:.0} cm", profile.height_cm);
    println!("   Weight: {:.1} kg", profile.weight_kg);
}

/// Print one BMI record on a single line
pub fn display_bmi_record(record: &BmiRecord) {
    println!(
        "{}  BMI {:.1} ({})  {:.1} kg / {:.0} cm  [{}]",
        record.recorded_at.format("%Y-%m-%d %H:%M"),
        round_one_decimal(record.bmi),
        record.category,
        record.weight_kg,
        record.height_cm,
        record.id
    );
}

/// Print a weekly plan with completion marks
pub fn display_schedule(schedule: &AdjustedSchedule, progress: &ScheduleProgress) {
    println!("\nYour weekly plan ({} min total)", schedule.total_minutes());
    println!("{}", "=".repeat(60));
    for task in schedule.tasks() {
        let mark = if progress.is_completed(task.day) {
            "[x]"
        } else {
            "[ ]"
        };
        println!(
            "{mark} {:<4} {:<36} {:>3} min  {} / {}",
            task.day.abbreviation(),
            task.description,
            task.duration_minutes,
            task.category,
            task.intensity
        );
        if !task.notes.is_empty() {
            println!("         {}", task.notes);
        }
    }
}

/// Print a bulleted list
pub fn display_lines(lines: &[String]) {
    for line in lines {
        println!("• {line}");
    }
}

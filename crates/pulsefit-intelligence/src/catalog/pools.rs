// ABOUTME: Authored weekly task pools for every goal and intensity combination
// ABOUTME: Each pool lists seven tasks in Monday-to-Sunday order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulsefit_core::constants::schedule::DAYS_PER_POOL;
use pulsefit_core::models::Intensity::{High, Low, Medium};
use pulsefit_core::models::TaskCategory::{
    Cardio, Flexibility, Mixed, Nutrition, Recovery, Strength,
};
use pulsefit_core::models::{DayTask, Intensity, TaskCategory, TaskPool, Weekday};

/// One authored day; the weekday comes from its position in the pool
#[derive(Debug, Clone, Copy)]
pub struct TaskTemplate {
    description: &'static str,
    category: TaskCategory,
    minutes: u32,
    intensity: Intensity,
    notes: &'static str,
}

impl TaskTemplate {
    fn to_task(self, day: Weekday) -> DayTask {
        DayTask {
            day,
            description: self.description.to_owned(),
            category: self.category,
            duration_minutes: self.minutes,
            intensity: self.intensity,
            notes: self.notes.to_owned(),
        }
    }
}

/// Seven authored days, Monday first
pub type PoolTemplate = [TaskTemplate; DAYS_PER_POOL];

/// Materialize a template into an owned pool
pub fn build_pool(template: &PoolTemplate) -> TaskPool {
    TaskPool::new(std::array::from_fn(|i| {
        template[i].to_task(Weekday::ALL[i])
    }))
}

const fn task(
    description: &'static str,
    category: TaskCategory,
    minutes: u32,
    intensity: Intensity,
    notes: &'static str,
) -> TaskTemplate {
    TaskTemplate {
        description,
        category,
        minutes,
        intensity,
        notes,
    }
}

// ============================================================================
// Weight loss
// ============================================================================

pub const WEIGHT_LOSS_LOW: &[PoolTemplate] = &[
    [
        task("Brisk walk around the neighborhood", Cardio, 20, Low, "Keep a pace where you can still hold a conversation"),
        task("Full-body stretching routine", Flexibility, 15, Low, "Hold each stretch for 20-30 seconds"),
        task("Stationary bike at an easy pace", Cardio, 25, Low, "Aim for a steady cadence, no sprints"),
        task("Plan balanced meals for the rest of the week", Nutrition, 15, Low, "Fill half the plate with vegetables"),
        task("Bodyweight circuit: wall push-ups, chair squats, step-ups", Mixed, 20, Low, "Rest 60 seconds between rounds"),
        task("Leisure walk or easy hike", Cardio, 30, Low, "Choose a route with gentle hills if possible"),
        task("Rest day with light mobility", Recovery, 15, Low, "Focus on sleep and hydration"),
    ],
    [
        task("Low-impact cardio video", Cardio, 20, Low, "March in place if jumps feel uncomfortable"),
        task("Resistance band upper-body session", Strength, 20, Low, "Two sets of 12 per exercise"),
        task("Swimming or water walking", Cardio, 25, Low, "Water supports the joints while you burn calories"),
        task("Gentle yoga flow", Flexibility, 20, Low, "Breathe slowly through each pose"),
        task("Walking intervals: 3 min brisk, 2 min easy", Cardio, 25, Low, "Repeat five times"),
        task("Prepare high-protein snacks for the week", Nutrition, 20, Low, "Greek yogurt, boiled eggs, and cut vegetables"),
        task("Foam rolling and a restful walk", Recovery, 15, Low, "Keep it relaxed"),
    ],
];

pub const WEIGHT_LOSS_MEDIUM: &[PoolTemplate] = &[
    [
        task("Jog-walk intervals", Cardio, 30, Medium, "Jog 2 minutes, walk 1 minute"),
        task("Full-body dumbbell circuit", Strength, 30, Medium, "Three rounds of squats, rows, presses, and lunges"),
        task("Cycling at a moderate pace", Cardio, 35, Medium, "Hold a pace that makes talking slightly hard"),
        task("Core and mobility session", Flexibility, 20, Low, "Planks, bird dogs, and hip openers"),
        task("Circuit training: burpees, kettlebell swings, mountain climbers", Mixed, 30, Medium, "40 seconds on, 20 seconds off"),
        task("Long brisk walk or easy jog", Cardio, 40, Medium, "Keep the effort steady throughout"),
        task("Meal prep and rest", Nutrition, 20, Low, "Cook lean proteins and whole grains for the week"),
    ],
    [
        task("Rowing machine session", Cardio, 30, Medium, "Drive with the legs, then pull with the arms"),
        task("Lower-body strength: goblet squats, deadlifts, step-ups", Strength, 30, Medium, "Three sets of 10"),
        task("Dance or aerobics class", Cardio, 35, Medium, "Have fun and keep moving"),
        task("Active recovery walk", Recovery, 20, Low, "Easy pace to loosen up the legs"),
        task("Upper-body strength and core", Strength, 30, Medium, "Push-ups, rows, overhead press, planks"),
        task("Hike with elevation", Cardio, 45, Medium, "Bring water and take breaks as needed"),
        task("Stretching and weekly food journal review", Flexibility, 20, Low, "Note which meals kept you full longest"),
    ],
    [
        task("Brisk walk with a weighted backpack", Cardio, 35, Medium, "Start light, around 5% of bodyweight"),
        task("Total-body resistance machines", Strength, 30, Medium, "Two sets of 12 on each station"),
        task("Elliptical intervals", Cardio, 30, Medium, "Alternate 2 minutes moderate and 1 minute hard"),
        task("Pilates core session", Flexibility, 25, Medium, "Control matters more than speed"),
        task("Boxing fitness workout", Mixed, 30, Medium, "Shadowbox or use a heavy bag"),
        task("Cycling outing", Cardio, 45, Medium, "Pick a scenic route"),
        task("Restorative stretching", Recovery, 20, Low, "Stay off your feet when you can"),
    ],
];

pub const WEIGHT_LOSS_HIGH: &[PoolTemplate] = &[
    [
        task("HIIT sprints: 30 s hard, 90 s easy", Cardio, 25, High, "Warm up for 5 minutes first"),
        task("Heavy compound lifts: squats, bench press, rows", Strength, 45, High, "Four sets of 6-8 reps"),
        task("Tempo run", Cardio, 35, High, "Run at a comfortably hard pace"),
        task("Metabolic conditioning circuit", Mixed, 35, High, "Minimal rest between stations"),
        task("Cycling intervals", Cardio, 40, High, "Five 4-minute hard efforts"),
        task("Full-body strength and plyometrics", Strength, 40, High, "Box jumps, lunges, pull-ups"),
        task("Recovery: mobility and an easy walk", Recovery, 25, Low, "Prioritize sleep tonight"),
    ],
    [
        task("Stair or hill repeats", Cardio, 30, High, "Walk down to recover"),
        task("Kettlebell complex", Strength, 35, High, "Swings, cleans, presses, and squats"),
        task("Rowing intervals: 500 m hard, 2 min easy", Cardio, 35, High, "Keep the stroke rate controlled"),
        task("Yoga for athletes", Flexibility, 30, Medium, "Open the hips and hamstrings"),
        task("Tabata training", Mixed, 25, High, "Eight rounds of 20 s work, 10 s rest per exercise"),
        task("Long run or ride", Cardio, 60, Medium, "Steady aerobic effort"),
        task("Refuel and plan the week's meals", Nutrition, 25, Low, "Keep a modest calorie deficit, not a crash diet"),
    ],
];

// ============================================================================
// Maintain
// ============================================================================

pub const MAINTAIN_LOW: &[PoolTemplate] = &[
    [
        task("30-minute walk", Cardio, 30, Low, "Any comfortable pace"),
        task("Light bodyweight strength", Strength, 20, Low, "Squats, wall push-ups, glute bridges"),
        task("Gentle yoga", Flexibility, 25, Low, "Focus on posture"),
        task("Easy bike ride", Cardio, 25, Low, "Enjoy the outdoors"),
        task("Balance and core routine", Mixed, 20, Low, "Single-leg stands and dead bugs"),
        task("Recreational activity: gardening, dancing, or a casual sport", Mixed, 30, Low, "Stay active in a way you enjoy"),
        task("Rest and stretch", Recovery, 15, Low, "Light stretching before bed"),
    ],
    [
        task("Easy swim", Cardio, 25, Low, "Mix strokes to keep it interesting"),
        task("Pilates basics", Flexibility, 25, Low, "Control each movement"),
        task("Neighborhood walk with a friend", Cardio, 30, Low, "Keep it social"),
        task("Resistance band full-body session", Strength, 20, Low, "Two sets of 12-15"),
        task("Stretch and mobility flow", Flexibility, 20, Low, "Shoulders, hips, and spine"),
        task("Plan a week of balanced meals", Nutrition, 20, Low, "Keep portions consistent"),
        task("Restful day", Recovery, 10, Low, "A short walk if you feel like it"),
    ],
];

pub const MAINTAIN_MEDIUM: &[PoolTemplate] = &[
    [
        task("Steady jog", Cardio, 30, Medium, "Conversational pace"),
        task("Full-body strength with dumbbells", Strength, 35, Medium, "Three sets of 10-12"),
        task("Yoga flow", Flexibility, 30, Medium, "Move with the breath"),
        task("Cycling or elliptical", Cardio, 35, Medium, "Moderate steady effort"),
        task("Circuit workout", Mixed, 30, Medium, "Alternate upper- and lower-body moves"),
        task("Sport or active outing", Mixed, 45, Medium, "Tennis, basketball, or a hike"),
        task("Active recovery and meal prep", Recovery, 20, Low, "Gentle walk, then cook for the week"),
    ],
    [
        task("Swim laps", Cardio, 30, Medium, "Rest at the wall as needed"),
        task("Push-pull strength session", Strength, 35, Medium, "Bench, rows, presses, pull-downs"),
        task("Brisk hill walk", Cardio, 35, Medium, "Use your arms for drive"),
        task("Mobility and core", Flexibility, 25, Medium, "Deep squats, cat-cow, side planks"),
        task("Leg day: squats, lunges, hip thrusts", Strength, 35, Medium, "Three sets of 10"),
        task("Group fitness class", Mixed, 45, Medium, "Try something new"),
        task("Review weekly nutrition", Nutrition, 15, Low, "Check protein and fiber intake"),
    ],
    [
        task("Tempo walk or jog", Cardio, 30, Medium, "Hold a steady rhythm"),
        task("Kettlebell basics", Strength, 30, Medium, "Swings, goblet squats, and presses"),
        task("Swim or aqua aerobics", Cardio, 30, Medium, "Low impact, full body"),
        task("Vinyasa yoga", Flexibility, 30, Medium, "Link breath and movement"),
        task("Bodyweight strength ladder", Strength, 25, Medium, "Push-ups, squats, lunges"),
        task("Outdoor adventure", Mixed, 60, Medium, "Hike, paddle, or bike"),
        task("Weekly meal planning", Nutrition, 20, Low, "Plan for variety and color"),
    ],
];

pub const MAINTAIN_HIGH: &[PoolTemplate] = &[
    [
        task("Interval run", Cardio, 35, High, "Six 3-minute hard efforts"),
        task("Strength: heavy squats and presses", Strength, 45, High, "Five sets of 5"),
        task("Power yoga", Flexibility, 40, Medium, "Strong holds and smooth transitions"),
        task("Cycling threshold session", Cardio, 40, High, "Two 12-minute efforts"),
        task("High-intensity workout of the day", Mixed, 35, High, "Scale weights to keep good form"),
        task("Long endurance session", Cardio, 60, Medium, "Run, ride, or hike"),
        task("Recovery: foam rolling and stretching", Recovery, 25, Low, "Go easy on the body"),
    ],
    [
        task("Rowing pyramid intervals", Cardio, 35, High, "1-2-3-2-1 minute hard efforts"),
        task("Olympic lifting technique and strength", Strength, 45, High, "Cleans and front squats"),
        task("Trail run", Cardio, 45, Medium, "Watch your footing"),
        task("Advanced mobility session", Flexibility, 30, Medium, "Loaded stretching"),
        task("Upper-body hypertrophy", Strength, 45, High, "Four sets of 8-12"),
        task("Sprint and agility drills", Mixed, 35, High, "Ladder drills and shuttle runs"),
        task("Refuel and plan the week", Nutrition, 20, Low, "Match carbohydrates to training load"),
    ],
];

// ============================================================================
// Build muscle
// ============================================================================

pub const BUILD_LOW: &[PoolTemplate] = &[
    [
        task("Bodyweight strength: squats, push-ups, rows", Strength, 25, Low, "Two sets of 8-10, stop short of failure"),
        task("Easy walk", Cardio, 20, Low, "Keep it relaxed"),
        task("Resistance band upper body", Strength, 25, Low, "Slow and controlled reps"),
        task("Stretching routine", Flexibility, 15, Low, "Target chest, hips, and hamstrings"),
        task("Lower-body strength: glute bridges, split squats, calf raises", Strength, 25, Low, "Two sets of 10-12"),
        task("Protein-focused meal planning", Nutrition, 20, Low, "Include protein at every meal"),
        task("Rest day", Recovery, 10, Low, "Muscles grow while you rest"),
    ],
    [
        task("Dumbbell full-body basics", Strength, 25, Low, "Light weights, perfect form"),
        task("Gentle yoga", Flexibility, 20, Low, "Breathe deeply"),
        task("Machine circuit at the gym", Strength, 30, Low, "One set of 12 on each machine"),
        task("Easy cycling", Cardio, 20, Low, "Low resistance"),
        task("Core and stability", Mixed, 20, Low, "Planks, bird dogs, and dead bugs"),
        task("Push-up and squat practice", Strength, 20, Low, "Track your reps for next week"),
        task("Recovery walk and stretching", Recovery, 15, Low, "Stay loose"),
    ],
];

pub const BUILD_MEDIUM: &[PoolTemplate] = &[
    [
        task("Upper body: bench press, rows, shoulder press", Strength, 40, Medium, "Three sets of 8-10"),
        task("Moderate cardio", Cardio, 25, Medium, "Bike or elliptical"),
        task("Lower body: squats, Romanian deadlifts, lunges", Strength, 40, Medium, "Three sets of 8-10"),
        task("Mobility session", Flexibility, 20, Low, "Hips and thoracic spine"),
        task("Full-body hypertrophy circuit", Strength, 40, Medium, "Supersets with 60 s rest"),
        task("Athletic conditioning", Mixed, 30, Medium, "Sled pushes, carries, jumps"),
        task("Meal prep for muscle gain", Nutrition, 25, Low, "Aim for a small calorie surplus"),
    ],
    [
        task("Push day: chest, shoulders, triceps", Strength, 40, Medium, "Add a little weight each week"),
        task("Pull day: back and biceps", Strength, 40, Medium, "Pull-ups or lat pull-downs"),
        task("Easy cardio and stretching", Cardio, 25, Low, "Recovery pace"),
        task("Leg day: squats and accessories", Strength, 45, Medium, "Three to four sets"),
        task("Yoga for strength athletes", Flexibility, 25, Medium, "Improve range of motion"),
        task("Full-body compound session", Strength, 40, Medium, "Deadlifts, presses, rows"),
        task("Rest and recovery", Recovery, 15, Low, "Sleep 7-9 hours"),
    ],
    [
        task("Lower-body strength", Strength, 40, Medium, "Front squats, hip thrusts, step-ups"),
        task("Upper-body strength", Strength, 40, Medium, "Incline press, rows, dips"),
        task("Mobility and core", Flexibility, 25, Low, "Hanging knee raises and hip openers"),
        task("Full-body dumbbell complex", Strength, 35, Medium, "Minimal rest between moves"),
        task("Moderate conditioning", Cardio, 25, Medium, "Rower or bike"),
        task("Arms and shoulders", Strength, 35, Medium, "Curls, lateral raises, triceps extensions"),
        task("Recovery day", Recovery, 15, Low, "Eat enough to support growth"),
    ],
];

pub const BUILD_HIGH: &[PoolTemplate] = &[
    [
        task("Heavy squat day", Strength, 50, High, "Five sets of 5 with long rests"),
        task("Heavy bench and rows", Strength, 50, High, "Five sets of 5"),
        task("Conditioning intervals", Cardio, 25, High, "Short, intense efforts"),
        task("Deadlift and posterior chain", Strength, 50, High, "Work up to a heavy triple"),
        task("Overhead press and accessories", Strength, 45, High, "Four sets of 6-8"),
        task("Strongman-style circuit", Mixed, 40, High, "Farmer carries, sled, sandbag"),
        task("Recovery and mobility", Recovery, 25, Low, "Foam roll and stretch"),
    ],
    [
        task("Push hypertrophy", Strength, 50, High, "Four sets of 8-12, last set near failure"),
        task("Pull hypertrophy", Strength, 50, High, "Weighted pull-ups and rows"),
        task("Legs: squats, leg press, hamstring curls", Strength, 55, High, "Four sets of 8-12"),
        task("Mobility and light cardio", Flexibility, 30, Low, "Keep the heart rate low"),
        task("Upper-body power", Strength, 45, High, "Explosive presses and medicine ball throws"),
        task("Lower-body power and plyometrics", Mixed, 45, High, "Box jumps, jump squats, sprints"),
        task("High-protein meal prep", Nutrition, 30, Low, "1.6-2.2 g protein per kg bodyweight"),
    ],
];

// ============================================================================
// Fallback
// ============================================================================

/// Balanced starter week served when the goal or intensity is not recognized
pub const DEFAULT_POOLS: &[PoolTemplate] = &[[
    task("Brisk walk", Cardio, 25, Low, "Comfortable but purposeful pace"),
    task("Bodyweight strength basics", Strength, 20, Low, "Squats, push-ups, and glute bridges"),
    task("Stretching routine", Flexibility, 20, Low, "Hold each stretch for 30 seconds"),
    task("Easy bike ride or swim", Cardio, 25, Low, "Keep the effort light"),
    task("Mixed circuit", Mixed, 20, Medium, "Alternate strength and cardio moves"),
    task("Plan healthy meals", Nutrition, 15, Low, "Vegetables, lean protein, whole grains"),
    task("Rest", Recovery, 10, Low, "Recharge for next week"),
]];

// ABOUTME: User profile model holding the personal details the coach and tips rely on
// ABOUTME: Stores name, age, gender text, and body measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Personal details captured at onboarding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Free-text gender as entered by the user
    pub gender: String,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
}

impl UserProfile {
    /// One-line summary used as prompt context for the coach
    #[must_use]
    pub fn context_line(&self) -> String {
        format!(
            "Name: {}, age {}, gender {}, height {:.0} cm, weight {:.1} kg",
            self.name, self.age, self.gender, self.height_cm, self.weight_kg
        )
    }
}

// ABOUTME: Weekly schedule generator composing catalog lookup, pool selection, and adjustment
// ABOUTME: Previously used pool indices are passed in by the caller, never held globally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use pulsefit_core::models::{AdjustedSchedule, DiscoveryParameters};
use tracing::{info, warn};

use crate::adjuster::ScheduleAdjuster;
use crate::catalog::TaskPoolCatalog;
use crate::config::IntelligenceConfig;
use crate::selector::{EntropySource, MixedEntropy, PoolSelector};

/// Output of one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSchedule {
    /// Index of the selected pool within the candidate list
    pub pool_index: usize,
    /// Whether the goal and intensity pair was unknown and the default pool served
    pub fell_back: bool,
    /// Adjusted weekly plan
    pub schedule: AdjustedSchedule,
}

/// Catalog, selector, and adjuster wired together
pub struct ScheduleGenerator<'c, E: EntropySource = MixedEntropy> {
    catalog: &'c TaskPoolCatalog,
    selector: PoolSelector<E>,
    adjuster: ScheduleAdjuster,
}

impl ScheduleGenerator<'static, MixedEntropy> {
    /// Generator over the built-in catalog with global tuning and production entropy
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(
            TaskPoolCatalog::builtin(),
            PoolSelector::default(),
            ScheduleAdjuster::new(IntelligenceConfig::global().schedule.clone()),
        )
    }
}

impl<'c, E: EntropySource> ScheduleGenerator<'c, E> {
    /// Generator from explicit parts
    #[must_use]
    pub const fn new(
        catalog: &'c TaskPoolCatalog,
        selector: PoolSelector<E>,
        adjuster: ScheduleAdjuster,
    ) -> Self {
        Self {
            catalog,
            selector,
            adjuster,
        }
    }

    /// Generate a weekly schedule
    ///
    /// `previous` holds pool indices to avoid. Returns `None` only when the
    /// catalog has no pool to offer for the request, default included.
    pub fn generate(
        &mut self,
        params: &DiscoveryParameters,
        previous: &HashSet<usize>,
    ) -> Option<GeneratedSchedule> {
        let lookup = self.catalog.lookup(params.goal, params.intensity);
        if lookup.is_default() {
            warn!(
                goal = %params.goal,
                intensity = %params.intensity,
                "No task pools for goal and intensity, using default pool"
            );
        }

        let selection = self.selector.select(lookup.pools(), previous)?;
        let schedule = self.adjuster.adjust(selection.pool, params);

        info!(
            goal = %params.goal,
            intensity = %params.intensity,
            pool_index = selection.index,
            days = schedule.len(),
            total_minutes = schedule.total_minutes(),
            "Generated weekly schedule"
        );

        Some(GeneratedSchedule {
            pool_index: selection.index,
            fell_back: lookup.is_default(),
            schedule,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::selector::SeededEntropy;
    use pulsefit_core::models::{
        BmiCategory, ExperienceLevel, FocusArea, Goal, Intensity, Weekday,
    };
    use std::collections::HashMap;

    fn params(goal: Goal, intensity: Intensity) -> DiscoveryParameters {
        DiscoveryParameters {
            bmi_category: BmiCategory::Normal,
            goal,
            intensity,
            days_per_week: 7,
            focus_area: FocusArea::Mixed,
            experience_level: ExperienceLevel::Intermediate,
        }
    }

    #[test]
    fn test_unknown_pair_falls_back() {
        let mut generator = ScheduleGenerator::new(
            TaskPoolCatalog::builtin(),
            PoolSelector::new(SeededEntropy::new(7)),
            ScheduleAdjuster::default(),
        );
        let generated = generator
            .generate(&params(Goal::Unknown, Intensity::Low), &HashSet::new())
            .unwrap();
        assert!(generated.fell_back);
        assert_eq!(generated.pool_index, 0);
        assert_eq!(generated.schedule.len(), 7);
    }

    #[test]
    fn test_known_pair_avoids_previous() {
        let mut generator = ScheduleGenerator::new(
            TaskPoolCatalog::builtin(),
            PoolSelector::new(SeededEntropy::new(11)),
            ScheduleAdjuster::default(),
        );
        let previous: HashSet<usize> = [0].into_iter().collect();
        for _ in 0..20 {
            let generated = generator
                .generate(&params(Goal::Build, Intensity::High), &previous)
                .unwrap();
            assert!(!generated.fell_back);
            assert_ne!(generated.pool_index, 0);
            assert_eq!(generated.schedule.days()[0], Weekday::Monday);
        }
    }

    #[test]
    fn test_empty_catalog_generates_nothing() {
        let catalog = TaskPoolCatalog::new(HashMap::new(), Vec::new());
        let mut generator = ScheduleGenerator::new(
            &catalog,
            PoolSelector::new(SeededEntropy::new(1)),
            ScheduleAdjuster::default(),
        );
        assert!(generator
            .generate(&params(Goal::Maintain, Intensity::Low), &HashSet::new())
            .is_none());
    }
}

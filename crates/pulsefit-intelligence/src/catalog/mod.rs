// ABOUTME: Task pool catalog mapping goal and intensity to candidate weekly pools
// ABOUTME: Unknown pairs resolve to a default pool instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Task Pool Catalog
//!
//! Static table of authored weekly pools. Every recognized goal and intensity
//! pair has several pools so the selector can vary the plan between
//! generations; anything else is served the default pool.

mod pools;

pub use pools::{build_pool, PoolTemplate, TaskTemplate};

use std::collections::HashMap;
use std::sync::OnceLock;

use pulsefit_core::models::{Goal, Intensity, TaskPool};

use crate::config::ConfigError;

/// Result of a catalog lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogLookup<'a> {
    /// Pools authored for the requested pair
    Found(&'a [TaskPool]),
    /// Requested pair unknown; the default pools were returned
    Default(&'a [TaskPool]),
}

impl<'a> CatalogLookup<'a> {
    /// Candidate pools regardless of how they were resolved
    #[must_use]
    pub const fn pools(&self) -> &'a [TaskPool] {
        match self {
            Self::Found(pools) | Self::Default(pools) => pools,
        }
    }

    /// Whether the lookup fell back to the default pools
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Default(_))
    }
}

/// Goal and intensity to candidate pools
#[derive(Debug, Clone)]
pub struct TaskPoolCatalog {
    pools: HashMap<(Goal, Intensity), Vec<TaskPool>>,
    default_pools: Vec<TaskPool>,
}

static BUILTIN_CATALOG: OnceLock<TaskPoolCatalog> = OnceLock::new();

impl TaskPoolCatalog {
    /// Catalog from explicit pools
    #[must_use]
    pub const fn new(
        pools: HashMap<(Goal, Intensity), Vec<TaskPool>>,
        default_pools: Vec<TaskPool>,
    ) -> Self {
        Self {
            pools,
            default_pools,
        }
    }

    /// The authored catalog shipped with the application
    pub fn builtin() -> &'static Self {
        BUILTIN_CATALOG.get_or_init(|| {
            let authored: [((Goal, Intensity), &[PoolTemplate]); 9] = [
                ((Goal::WeightLoss, Intensity::Low), pools::WEIGHT_LOSS_LOW),
                ((Goal::WeightLoss, Intensity::Medium), pools::WEIGHT_LOSS_MEDIUM),
                ((Goal::WeightLoss, Intensity::High), pools::WEIGHT_LOSS_HIGH),
                ((Goal::Maintain, Intensity::Low), pools::MAINTAIN_LOW),
                ((Goal::Maintain, Intensity::Medium), pools::MAINTAIN_MEDIUM),
                ((Goal::Maintain, Intensity::High), pools::MAINTAIN_HIGH),
                ((Goal::Build, Intensity::Low), pools::BUILD_LOW),
                ((Goal::Build, Intensity::Medium), pools::BUILD_MEDIUM),
                ((Goal::Build, Intensity::High), pools::BUILD_HIGH),
            ];

            let pools = authored
                .into_iter()
                .map(|(key, templates)| (key, templates.iter().map(build_pool).collect()))
                .collect();
            let default_pools = pools::DEFAULT_POOLS.iter().map(build_pool).collect();

            Self::new(pools, default_pools)
        })
    }

    /// Candidate pools for a goal and intensity
    ///
    /// Unknown or missing pairs return [`CatalogLookup::Default`]. A pair with
    /// an empty pool list is treated as missing.
    #[must_use]
    pub fn lookup(&self, goal: Goal, intensity: Intensity) -> CatalogLookup<'_> {
        match self.pools.get(&(goal, intensity)) {
            Some(pools) if !pools.is_empty() => CatalogLookup::Found(pools),
            _ => CatalogLookup::Default(&self.default_pools),
        }
    }

    /// Number of authored pairs
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.pools.len()
    }

    /// Check catalog structure
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCatalog`] when a recognized pair has fewer
    /// than two pools, the default list is empty, a pool is not ordered Monday
    /// to Sunday, or a task has a zero duration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_pools.is_empty() {
            return Err(ConfigError::InvalidCatalog(
                "default pool list is empty".to_owned(),
            ));
        }

        for goal in Goal::KNOWN {
            for intensity in Intensity::KNOWN {
                let count = self.pools.get(&(goal, intensity)).map_or(0, Vec::len);
                if count < 2 {
                    return Err(ConfigError::InvalidCatalog(format!(
                        "{goal}/{intensity} has {count} pools, expected at least 2"
                    )));
                }
            }
        }

        let labeled = self
            .pools
            .iter()
            .flat_map(|((goal, intensity), pools)| {
                pools
                    .iter()
                    .enumerate()
                    .map(move |(i, pool)| (format!("{goal}/{intensity} pool {i}"), pool))
            })
            .chain(
                self.default_pools
                    .iter()
                    .enumerate()
                    .map(|(i, pool)| (format!("default pool {i}"), pool)),
            );

        for (label, pool) in labeled {
            if !pool.is_week_ordered() {
                return Err(ConfigError::InvalidCatalog(format!(
                    "{label} is not ordered Monday to Sunday"
                )));
            }
            if let Some(task) = pool.tasks().iter().find(|t| t.duration_minutes == 0) {
                return Err(ConfigError::InvalidCatalog(format!(
                    "{label} has a zero-minute task on {}",
                    task.day
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsefit_core::models::{DayTask, TaskCategory, Weekday};

    fn single_pool(day_offset: usize) -> TaskPool {
        TaskPool::new(std::array::from_fn(|i| DayTask {
            day: Weekday::ALL[(i + day_offset) % 7],
            description: format!("task {i}"),
            category: TaskCategory::Cardio,
            duration_minutes: 20,
            intensity: Intensity::Low,
            notes: String::new(),
        }))
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert!(TaskPoolCatalog::builtin().validate().is_ok());
        assert_eq!(TaskPoolCatalog::builtin().key_count(), 9);
    }

    #[test]
    fn test_unknown_pair_uses_default() {
        let lookup = TaskPoolCatalog::builtin().lookup(Goal::Unknown, Intensity::High);
        assert!(lookup.is_default());
        assert_eq!(lookup.pools().len(), 1);
    }

    #[test]
    fn test_empty_pair_treated_as_missing() {
        let mut pools = HashMap::new();
        pools.insert((Goal::Build, Intensity::Low), Vec::new());
        let catalog = TaskPoolCatalog::new(pools, vec![single_pool(0)]);
        assert!(catalog.lookup(Goal::Build, Intensity::Low).is_default());
    }

    #[test]
    fn test_validate_rejects_misordered_pool() {
        let mut pools = HashMap::new();
        for goal in Goal::KNOWN {
            for intensity in Intensity::KNOWN {
                pools.insert((goal, intensity), vec![single_pool(0), single_pool(0)]);
            }
        }
        let catalog = TaskPoolCatalog::new(pools.clone(), vec![single_pool(0)]);
        assert!(catalog.validate().is_ok());

        pools.insert(
            (Goal::Maintain, Intensity::Medium),
            vec![single_pool(0), single_pool(1)],
        );
        let catalog = TaskPoolCatalog::new(pools, vec![single_pool(0)]);
        assert!(matches!(
            catalog.validate(),
            Err(ConfigError::InvalidCatalog(_))
        ));
    }
}

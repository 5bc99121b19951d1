//! The draw engine: partitions a team pool into equally sized groups with
//! no two teams from the same country sharing a group.
//!
//! A pure function of (RNG, pool, group count). The primary strategy is the
//! randomized greedy placement: shuffle the pool, fill groups round by
//! round, picking uniformly among the teams whose country is not yet in the
//! group, abandoning the attempt on a dead end. Attempts are bounded; once
//! the bound is exhausted a constructive pass (largest country first into
//! the least-filled eligible group) finds a partition whenever one exists.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::domain::team::{Country, Team};

use super::entity::{Group, GroupTeam};
use super::settings::DrawSettings;

/// Randomized attempts before switching to the constructive pass
pub const MAX_RANDOM_ATTEMPTS: usize = 64;

/// Failures of the engine proper. The validator prevents all of these on
/// the service path; they surface only when the engine is driven directly
/// with an unchecked pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("pool of {pool} teams cannot be split evenly into {groups} groups")]
    UnevenPool { pool: usize, groups: usize },

    #[error("{requested} groups requested but only {available} group names exist")]
    TooManyGroups { requested: usize, available: usize },

    #[error("no valid partition found after {attempts} attempts")]
    Unsatisfiable { attempts: usize },
}

/// Stateless draw engine configured with the group-name alphabet
#[derive(Debug, Clone, Copy)]
pub struct DrawEngine {
    settings: DrawSettings,
}

impl DrawEngine {
    pub fn new(settings: DrawSettings) -> Self {
        Self { settings }
    }

    /// Partition `teams` into `group_count` country-distinct groups.
    ///
    /// Returns exactly `group_count` groups of `teams.len() / group_count`
    /// members each, covering the pool exactly once.
    pub fn execute<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        teams: &[Team],
        group_count: usize,
    ) -> Result<Vec<Group>, EngineError> {
        if group_count == 0 || teams.len() % group_count != 0 {
            return Err(EngineError::UnevenPool {
                pool: teams.len(),
                groups: group_count,
            });
        }

        let available = self.settings.group_names().len();
        if group_count > available {
            return Err(EngineError::TooManyGroups {
                requested: group_count,
                available,
            });
        }

        let teams_per_group = teams.len() / group_count;

        for _ in 0..MAX_RANDOM_ATTEMPTS {
            if let Some(groups) = self.random_attempt(rng, teams, group_count, teams_per_group) {
                return Ok(groups);
            }
        }

        self.constructive(rng, teams, group_count, teams_per_group)
            .ok_or(EngineError::Unsatisfiable {
                attempts: MAX_RANDOM_ATTEMPTS,
            })
    }

    fn empty_groups(&self, group_count: usize) -> Vec<Group> {
        self.settings
            .group_names_for(group_count)
            .iter()
            .map(|name| Group::new(*name))
            .collect()
    }

    /// One randomized greedy pass. Returns None on a dead end.
    fn random_attempt<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        teams: &[Team],
        group_count: usize,
        teams_per_group: usize,
    ) -> Option<Vec<Group>> {
        let mut pool: Vec<&Team> = teams.iter().collect();
        pool.shuffle(rng);

        let mut groups = self.empty_groups(group_count);

        for _round in 0..teams_per_group {
            for group in groups.iter_mut() {
                let candidates: Vec<usize> = pool
                    .iter()
                    .enumerate()
                    .filter(|(_, team)| !group.contains_country(team.country()))
                    .map(|(index, _)| index)
                    .collect();

                if candidates.is_empty() {
                    return None;
                }

                let chosen = candidates[rng.gen_range(0..candidates.len())];
                let team = pool.swap_remove(chosen);
                group.push(GroupTeam::from(team));
            }
        }

        Some(groups)
    }

    /// Deterministic completion: place countries in descending size order,
    /// each team into the least-filled group that has capacity and does not
    /// yet contain the country. Succeeds whenever no country exceeds the
    /// group count. Team order within a country is shuffled so the result
    /// still varies between runs.
    fn constructive<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        teams: &[Team],
        group_count: usize,
        teams_per_group: usize,
    ) -> Option<Vec<Group>> {
        let mut by_country: HashMap<&Country, Vec<&Team>> = HashMap::new();
        for team in teams {
            by_country.entry(team.country()).or_default().push(team);
        }

        let mut buckets: Vec<Vec<&Team>> = by_country.into_values().collect();
        for bucket in buckets.iter_mut() {
            bucket.shuffle(rng);
        }
        buckets.shuffle(rng);
        buckets.sort_by_key(|bucket| std::cmp::Reverse(bucket.len()));

        let mut groups = self.empty_groups(group_count);

        for bucket in buckets {
            for team in bucket {
                let mut best: Option<(usize, usize)> = None;
                for (index, group) in groups.iter().enumerate() {
                    if group.len() >= teams_per_group
                        || group.contains_country(team.country())
                    {
                        continue;
                    }
                    if best.is_none_or(|(_, len)| group.len() < len) {
                        best = Some((index, group.len()));
                    }
                }

                let (index, _) = best?;
                groups[index].push(GroupTeam::from(team));
            }
        }

        Some(groups)
    }
}

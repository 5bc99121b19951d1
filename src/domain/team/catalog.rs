//! Seed catalog for the league's team pool.
//!
//! An explicit reference table rather than hidden global state: 32 teams,
//! four per country across eight countries, which satisfies the divisibility
//! and pigeonhole preconditions for both allowed group counts.

use super::entity::{Country, Team};

/// (team name, country) pairs used to bootstrap an empty catalog
pub const SEED_TEAMS: &[(&str, &str)] = &[
    ("Istanbul", "Turkey"),
    ("Ankara", "Turkey"),
    ("Izmir", "Turkey"),
    ("Antalya", "Turkey"),
    ("Berlin", "Germany"),
    ("Frankfurt", "Germany"),
    ("Munich", "Germany"),
    ("Dortmund", "Germany"),
    ("Paris", "France"),
    ("Marseille", "France"),
    ("Nice", "France"),
    ("Lyon", "France"),
    ("Amsterdam", "Netherlands"),
    ("Rotterdam", "Netherlands"),
    ("The Hague", "Netherlands"),
    ("Eindhoven", "Netherlands"),
    ("Lisbon", "Portugal"),
    ("Porto", "Portugal"),
    ("Braga", "Portugal"),
    ("Coimbra", "Portugal"),
    ("Rome", "Italy"),
    ("Milan", "Italy"),
    ("Venice", "Italy"),
    ("Naples", "Italy"),
    ("Seville", "Spain"),
    ("Madrid", "Spain"),
    ("Barcelona", "Spain"),
    ("Granada", "Spain"),
    ("Brussels", "Belgium"),
    ("Bruges", "Belgium"),
    ("Ghent", "Belgium"),
    ("Antwerp", "Belgium"),
];

/// Build fresh team entities from the seed table
pub fn seed_teams() -> Vec<Team> {
    SEED_TEAMS
        .iter()
        .map(|(name, country)| Team::new(*name, Country::from(*country)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_seed_has_32_teams() {
        assert_eq!(seed_teams().len(), 32);
    }

    #[test]
    fn test_seed_has_four_teams_per_country() {
        let mut per_country: HashMap<&str, usize> = HashMap::new();

        for (_, country) in SEED_TEAMS {
            *per_country.entry(country).or_default() += 1;
        }

        assert_eq!(per_country.len(), 8);
        assert!(per_country.values().all(|&count| count == 4));
    }

    #[test]
    fn test_seed_names_are_unique() {
        let mut names: Vec<&str> = SEED_TEAMS.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();

        assert_eq!(names.len(), SEED_TEAMS.len());
    }
}

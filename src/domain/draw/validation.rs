//! Draw request and team-pool validation.
//!
//! Checks run in a fixed order so clients always see the cheapest
//! applicable rejection: request shape first, then catalog emptiness,
//! divisibility and the per-country pigeonhole bound.

use std::collections::HashMap;

use thiserror::Error;

use crate::domain::team::{Country, Team};

use super::request::DrawRequest;
use super::settings::DrawSettings;

/// Reasons a draw request is rejected before any computation.
///
/// Each variant maps to a stable message key exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawRejection {
    #[error("drawer first and last name are required")]
    NameRequired,

    #[error("group count {requested} is not allowed")]
    InvalidGroupCount { requested: usize },

    #[error("no active teams found in the catalog")]
    NoTeamsFound,

    #[error("{teams} teams cannot be split evenly into {groups} groups")]
    TeamCountNotDivisible { teams: usize, groups: usize },

    #[error("country {country} has more teams than there are groups")]
    TooManyTeamsFromSameCountry { country: Country },
}

impl DrawRejection {
    /// Stable message key for the response envelope
    pub fn key(&self) -> &'static str {
        match self {
            Self::NameRequired => "NameRequired",
            Self::InvalidGroupCount { .. } => "InvalidGroupCount",
            Self::NoTeamsFound => "NoTeamsFound",
            Self::TeamCountNotDivisible { .. } => "TeamCountNotDivisible",
            Self::TooManyTeamsFromSameCountry { .. } => "TooManyTeamsFromSameCountry",
        }
    }
}

/// Validate the request shape: drawer names and requested group count.
///
/// Needs no catalog access, so an invalid group count is reported even
/// when the catalog is empty.
pub fn validate_request(
    request: &DrawRequest,
    settings: &DrawSettings,
) -> Result<(), DrawRejection> {
    if request.first_name.trim().is_empty() || request.last_name.trim().is_empty() {
        return Err(DrawRejection::NameRequired);
    }

    if !settings.allows_group_count(request.group_count) {
        return Err(DrawRejection::InvalidGroupCount {
            requested: request.group_count,
        });
    }

    Ok(())
}

/// Validate the team pool against the requested group count.
///
/// The pigeonhole check is last: if a country contributes more teams than
/// there are groups, some group must receive two of them, so no valid
/// partition exists.
pub fn validate_pool(teams: &[Team], group_count: usize) -> Result<(), DrawRejection> {
    if teams.is_empty() {
        return Err(DrawRejection::NoTeamsFound);
    }

    if teams.len() % group_count != 0 {
        return Err(DrawRejection::TeamCountNotDivisible {
            teams: teams.len(),
            groups: group_count,
        });
    }

    let mut per_country: HashMap<&Country, usize> = HashMap::new();
    for team in teams {
        *per_country.entry(team.country()).or_default() += 1;
    }

    if let Some((country, _)) = per_country
        .into_iter()
        .find(|(_, count)| *count > group_count)
    {
        return Err(DrawRejection::TooManyTeamsFromSameCountry {
            country: country.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams(counts: &[(&str, usize)]) -> Vec<Team> {
        let mut pool = Vec::new();
        for (country, count) in counts {
            for i in 0..*count {
                pool.push(Team::new(
                    format!("{} {}", country, i + 1),
                    Country::from(*country),
                ));
            }
        }
        pool
    }

    fn request(first: &str, last: &str, group_count: usize) -> DrawRequest {
        DrawRequest::new(first, last, group_count)
    }

    #[test]
    fn test_empty_first_name_rejected() {
        let result = validate_request(&request("", "Doe", 4), &DrawSettings::standard());
        assert_eq!(result, Err(DrawRejection::NameRequired));
    }

    #[test]
    fn test_whitespace_last_name_rejected() {
        let result = validate_request(&request("John", "   ", 4), &DrawSettings::standard());
        assert_eq!(result, Err(DrawRejection::NameRequired));
    }

    #[test]
    fn test_invalid_group_count_rejected() {
        let result = validate_request(&request("John", "Doe", 3), &DrawSettings::standard());
        assert_eq!(
            result,
            Err(DrawRejection::InvalidGroupCount { requested: 3 })
        );
    }

    #[test]
    fn test_name_checked_before_group_count() {
        let result = validate_request(&request("", "Doe", 3), &DrawSettings::standard());
        assert_eq!(result, Err(DrawRejection::NameRequired));
    }

    #[test]
    fn test_valid_request_accepted() {
        assert!(validate_request(&request("John", "Doe", 8), &DrawSettings::standard()).is_ok());
    }

    #[test]
    fn test_empty_pool_rejected() {
        assert_eq!(validate_pool(&[], 4), Err(DrawRejection::NoTeamsFound));
    }

    #[test]
    fn test_indivisible_pool_rejected() {
        let pool = teams(&[("Turkey", 5), ("Germany", 5)]);
        assert_eq!(
            validate_pool(&pool, 4),
            Err(DrawRejection::TeamCountNotDivisible {
                teams: 10,
                groups: 4
            })
        );
    }

    #[test]
    fn test_pigeonhole_violation_rejected() {
        // 5 from one country with only 4 groups: two must share a group
        let pool = teams(&[("Turkey", 5), ("Germany", 3)]);
        assert_eq!(
            validate_pool(&pool, 4),
            Err(DrawRejection::TooManyTeamsFromSameCountry {
                country: Country::from("Turkey")
            })
        );
    }

    #[test]
    fn test_divisibility_checked_before_pigeonhole() {
        // 5 + 5 fails both checks; divisibility must win
        let pool = teams(&[("Turkey", 5), ("Germany", 5)]);
        assert!(matches!(
            validate_pool(&pool, 4),
            Err(DrawRejection::TeamCountNotDivisible { .. })
        ));
    }

    #[test]
    fn test_balanced_pool_accepted() {
        let pool = teams(&[("Turkey", 4), ("Germany", 4)]);
        assert!(validate_pool(&pool, 4).is_ok());
    }

    #[test]
    fn test_country_count_equal_to_groups_accepted() {
        let pool = teams(&[("Turkey", 4), ("Germany", 2), ("France", 2)]);
        assert!(validate_pool(&pool, 4).is_ok());
    }

    #[test]
    fn test_rejection_keys_are_stable() {
        assert_eq!(DrawRejection::NameRequired.key(), "NameRequired");
        assert_eq!(
            DrawRejection::InvalidGroupCount { requested: 3 }.key(),
            "InvalidGroupCount"
        );
        assert_eq!(DrawRejection::NoTeamsFound.key(), "NoTeamsFound");
        assert_eq!(
            DrawRejection::TeamCountNotDivisible { teams: 10, groups: 4 }.key(),
            "TeamCountNotDivisible"
        );
        assert_eq!(
            DrawRejection::TooManyTeamsFromSameCountry {
                country: Country::from("Turkey")
            }
            .key(),
            "TooManyTeamsFromSameCountry"
        );
    }
}

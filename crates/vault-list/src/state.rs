//! Filter state types for the vault list

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vault_core::{VaultRecord, VaultStatus};

/// Raised when a filter vocabulary string is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {value}")]
pub struct ParseFilterError {
    pub kind: &'static str,
    pub value: String,
}

/// Status filter applied to the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Locked,
    Unlocked,
    Withdrawn,
}

impl StatusFilter {
    /// Every filter, in chip display order
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Locked,
        StatusFilter::Unlocked,
        StatusFilter::Withdrawn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Locked => "locked",
            Self::Unlocked => "unlocked",
            Self::Withdrawn => "withdrawn",
        }
    }

    /// The derived status this filter selects, `None` for `All`
    pub fn status(&self) -> Option<VaultStatus> {
        match self {
            Self::All => None,
            Self::Locked => Some(VaultStatus::Locked),
            Self::Unlocked => Some(VaultStatus::Unlocked),
            Self::Withdrawn => Some(VaultStatus::Withdrawn),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ParseFilterError {
                kind: "status filter",
                value: s.to_string(),
            })
    }
}

/// Record field the list is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Id,
    Amount,
    UnlockHeight,
    CreatedAt,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Id,
        SortField::Amount,
        SortField::UnlockHeight,
        SortField::CreatedAt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Amount => "amount",
            Self::UnlockHeight => "unlockHeight",
            Self::CreatedAt => "createdAt",
        }
    }

    /// Numeric sort key of `record` for this field
    pub fn key(&self, record: &VaultRecord) -> u64 {
        match self {
            Self::Id => record.id,
            Self::Amount => record.amount,
            Self::UnlockHeight => record.unlock_height,
            Self::CreatedAt => record.created_at,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ParseFilterError {
                kind: "sort field",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ParseFilterError {
                kind: "sort direction",
                value: other.to_string(),
            }),
        }
    }
}

/// Complete filter selection for one list view.
///
/// Always fully populated; `Default` gives an empty query, all statuses,
/// ascending by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Raw, untrimmed search input
    pub query: String,
    pub status_filter: StatusFilter,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl FilterState {
    /// Whether `query` (trimmed) or the status filter narrows the list
    pub fn is_filtered(&self) -> bool {
        is_filtered(&self.query, self.status_filter)
    }
}

pub(crate) fn is_filtered(query: &str, status_filter: StatusFilter) -> bool {
    !query.trim().is_empty() || status_filter != StatusFilter::All
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = FilterState::default();
        assert_eq!(state.query, "");
        assert_eq!(state.status_filter, StatusFilter::All);
        assert_eq!(state.sort_field, SortField::Id);
        assert_eq!(state.sort_direction, SortDirection::Asc);
        assert!(!state.is_filtered());
    }

    #[test]
    fn test_whitespace_query_is_not_filtered() {
        let state = FilterState {
            query: "   ".into(),
            ..Default::default()
        };
        assert!(!state.is_filtered());

        let state = FilterState {
            query: " 4 ".into(),
            ..Default::default()
        };
        assert!(state.is_filtered());

        let state = FilterState {
            status_filter: StatusFilter::Withdrawn,
            ..Default::default()
        };
        assert!(state.is_filtered());
    }

    #[test]
    fn test_vocabulary_round_trips() {
        for filter in StatusFilter::ALL {
            assert_eq!(filter.as_str().parse::<StatusFilter>().unwrap(), filter);
        }
        for field in SortField::ALL {
            assert_eq!(field.as_str().parse::<SortField>().unwrap(), field);
        }
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
    }

    #[test]
    fn test_unknown_vocabulary_rejected() {
        let err = "active".parse::<StatusFilter>().unwrap_err();
        assert_eq!(err.kind, "status filter");
        assert!("balance".parse::<SortField>().is_err());
        assert!("ASC".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_serde_matches_as_str() {
        assert_eq!(
            serde_json::to_string(&SortField::UnlockHeight).unwrap(),
            "\"unlockHeight\""
        );
        assert_eq!(
            serde_json::to_string(&StatusFilter::Unlocked).unwrap(),
            "\"unlocked\""
        );
        assert_eq!(serde_json::to_string(&SortDirection::Desc).unwrap(), "\"desc\"");
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
    }

    #[test]
    fn test_status_filter_maps_to_status() {
        assert_eq!(StatusFilter::All.status(), None);
        assert_eq!(StatusFilter::Locked.status(), Some(VaultStatus::Locked));
    }
}

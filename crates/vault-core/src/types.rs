//! Core type definitions for vault records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Block height
pub type BlockHeight = u64;

/// Vault identifier (unique and stable for the lifetime of a vault)
pub type VaultId = u64;

/// A single savings vault as delivered by the data-fetching layer.
///
/// The list engine treats records as read-only; it never mutates them and
/// never assumes `unlock_height >= created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultRecord {
    pub id: VaultId,
    /// Locked amount in the smallest unit
    pub amount: u64,
    /// Block height at which the vault can be withdrawn
    pub unlock_height: BlockHeight,
    /// Block height at which the vault was created
    pub created_at: BlockHeight,
    pub is_withdrawn: bool,
    /// Caller-supplied chain tip ("now")
    pub current_block_height: BlockHeight,
    /// Optional nickname
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl VaultRecord {
    /// Derived status. Withdrawn wins over any block height.
    pub fn status(&self) -> VaultStatus {
        if self.is_withdrawn {
            VaultStatus::Withdrawn
        } else if self.current_block_height >= self.unlock_height {
            VaultStatus::Unlocked
        } else {
            VaultStatus::Locked
        }
    }

    /// Blocks remaining until unlock (negative = past due), saturating at
    /// the `i64` bounds
    pub fn blocks_remaining(&self) -> i64 {
        let diff = i128::from(self.unlock_height) - i128::from(self.current_block_height);
        i64::try_from(diff).unwrap_or(if diff < 0 { i64::MIN } else { i64::MAX })
    }
}

/// Three-way classification computed from a record's raw fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VaultStatus {
    Locked,
    Unlocked,
    Withdrawn,
}

impl VaultStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::Unlocked => "unlocked",
            Self::Withdrawn => "withdrawn",
        }
    }
}

impl fmt::Display for VaultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

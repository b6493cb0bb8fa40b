//! Urgency levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgent a help request is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "urgency", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Can wait days.
    Low,
    /// Should be handled soon.
    Medium,
    /// Needs attention now.
    High,
}

impl Urgency {
    /// Numeric weight used for urgency sorting (higher = more urgent).
    pub fn weight(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Return the urgency as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Default for Urgency {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_order() {
        assert!(Urgency::High.weight() > Urgency::Medium.weight());
        assert!(Urgency::Medium.weight() > Urgency::Low.weight());
    }
}
